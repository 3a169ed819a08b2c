// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0

use core::fmt;

/// The error raised when a view tree refuses an insertion.
///
/// Attachment has no rollback: when a batch operation such as
/// [`Layout::add_children`](crate::Layout::add_children) fails partway,
/// children attached before the failing step stay attached and the error
/// from that step propagates unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttachError {
    /// The insertion would make a view an ancestor of itself.
    Cycle,
    /// The tree implementation refused the insertion for its own reason.
    Rejected(String),
}

impl fmt::Display for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cycle => f.write_str("attaching the view would create a cycle"),
            Self::Rejected(reason) => write!(f, "the view tree rejected the insertion: {reason}"),
        }
    }
}

impl std::error::Error for AttachError {}
