// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0

//! [`Layout`]: crate::Layout
//! [`RawView`]: crate::RawView
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]

pub use kurbo;

mod anchor;
pub use anchor::{Anchor, AnchorId, DimAnchor, Guide, PositionAnchor, XAnchor, YAnchor};

mod constraint;
pub use constraint::{Constraint, Priority, Relation};

mod error;
pub use error::AttachError;

mod layout;
pub use layout::{Layout, LayoutResult};

mod raw_view;
pub use raw_view::RawView;

mod child;
pub use child::Child;

mod layouts;
pub use layouts::{Alignment, AnchorConstraint, DimConstraint, FixedDim};

mod util;
