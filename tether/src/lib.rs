// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0

//! [`View`]: crate::View
//! [`Stack`]: crate::Stack
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]

pub use tether_core::{
    Alignment, Anchor, AnchorConstraint, AnchorId, AttachError, Child, Constraint, DimAnchor,
    DimConstraint, FixedDim, Guide, Layout, LayoutResult, PositionAnchor, Priority, RawView,
    Relation, XAnchor, YAnchor, kurbo,
};

mod view;
pub use view::View;

mod activate;
pub use activate::{activate, deactivate};

mod stack;
pub use stack::{Axis, Distribution, Stack, StackAlignment};
