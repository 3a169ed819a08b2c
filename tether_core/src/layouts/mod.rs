// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0

//! The layout constructors: anchor primitives, the derived library, and the
//! side-effecting attach layouts.
//!
//! Everything here bottoms out in [`Layout::new`](crate::Layout::new) and
//! [`Layout::concat`](crate::Layout::concat). Only [`side_effect`] touches
//! the view tree; the rest is provably pure by construction.

mod alignment;
pub use alignment::Alignment;

mod build;
pub use build::{AnchorConstraint, DimConstraint, FixedDim};

mod common;
mod side_effect;
