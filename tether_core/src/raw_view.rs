// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0

use crate::error::AttachError;

/// The capabilities the layout algebra needs from a view tree.
///
/// Implementations are expected to be cheap, identity-preserving handles
/// into a retained tree: cloning a `RawView` clones the handle, not the
/// node. The `tether` crate provides a reference implementation; embedding
/// a different window system means implementing this trait for its view
/// handle.
///
/// The tree is a single shared resource. Evaluation assumes exclusive,
/// single-threaded access to the subtree it touches for its whole duration;
/// guarding against concurrent mutation is the caller's responsibility, not
/// the implementation's.
pub trait RawView: Clone + 'static {
    /// Inserts `child` as the last child of `self`.
    ///
    /// The mutation is immediate and has no rollback. An implementation may
    /// refuse the insertion; at minimum it should refuse one that would
    /// make a view its own ancestor.
    fn add_child(&self, child: &Self) -> Result<(), AttachError>;
}
