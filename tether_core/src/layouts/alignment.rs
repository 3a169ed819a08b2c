// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::Vec2;

use crate::anchor::{XAnchor, YAnchor};
use crate::layout::Layout;
use crate::layouts::build::AnchorConstraint;

/// An alignment position along the horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Horizontal {
    Leading,
    Center,
    Trailing,
}

/// An alignment position along the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Vertical {
    Top,
    Center,
    Bottom,
}

/// An alignment in one or both axes.
///
/// Either component may be absent, giving an edge-only alignment that
/// leaves the other axis unconstrained. Use the named presets; there is one
/// for each corner, each single edge, and the center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alignment {
    horizontal: Option<Horizontal>,
    vertical: Option<Vertical>,
}

impl Alignment {
    /// Centered in both axes.
    pub const CENTER: Self = Self {
        horizontal: Some(Horizontal::Center),
        vertical: Some(Vertical::Center),
    };
    /// Against the top edge; horizontally unconstrained.
    pub const TOP: Self = Self {
        horizontal: None,
        vertical: Some(Vertical::Top),
    };
    /// Against the bottom edge; horizontally unconstrained.
    pub const BOTTOM: Self = Self {
        horizontal: None,
        vertical: Some(Vertical::Bottom),
    };
    /// Against the leading edge; vertically unconstrained.
    pub const LEADING: Self = Self {
        horizontal: Some(Horizontal::Leading),
        vertical: None,
    };
    /// Against the trailing edge; vertically unconstrained.
    pub const TRAILING: Self = Self {
        horizontal: Some(Horizontal::Trailing),
        vertical: None,
    };
    /// In the top leading corner.
    pub const TOP_LEADING: Self = Self {
        horizontal: Some(Horizontal::Leading),
        vertical: Some(Vertical::Top),
    };
    /// In the top trailing corner.
    pub const TOP_TRAILING: Self = Self {
        horizontal: Some(Horizontal::Trailing),
        vertical: Some(Vertical::Top),
    };
    /// In the bottom leading corner.
    pub const BOTTOM_LEADING: Self = Self {
        horizontal: Some(Horizontal::Leading),
        vertical: Some(Vertical::Bottom),
    };
    /// In the bottom trailing corner.
    pub const BOTTOM_TRAILING: Self = Self {
        horizontal: Some(Horizontal::Trailing),
        vertical: Some(Vertical::Bottom),
    };
}

impl<V: Clone + 'static> Layout<V> {
    /// Aligns the view to the reference view.
    pub fn alignment(alignment: Alignment) -> Self {
        Self::alignment_offset(alignment, Vec2::ZERO)
    }

    /// Aligns the view to the reference view, displaced by `offset`.
    ///
    /// Each present component contributes one equality constraint whose
    /// constant is the matching offset coordinate, sign retained as given.
    /// A trailing or bottom alignment conventionally takes a negative
    /// offset to move inward.
    pub fn alignment_offset(alignment: Alignment, offset: Vec2) -> Self {
        let horizontal = match alignment.horizontal {
            Some(Horizontal::Leading) => AnchorConstraint::new(XAnchor::Leading)
                .constant(offset.x)
                .build(),
            Some(Horizontal::Center) => AnchorConstraint::new(XAnchor::CenterX)
                .constant(offset.x)
                .build(),
            Some(Horizontal::Trailing) => AnchorConstraint::new(XAnchor::Trailing)
                .constant(offset.x)
                .build(),
            None => Self::empty(),
        };
        let vertical = match alignment.vertical {
            Some(Vertical::Top) => AnchorConstraint::new(YAnchor::Top)
                .constant(offset.y)
                .build(),
            Some(Vertical::Center) => AnchorConstraint::new(YAnchor::CenterY)
                .constant(offset.y)
                .build(),
            Some(Vertical::Bottom) => AnchorConstraint::new(YAnchor::Bottom)
                .constant(offset.y)
                .build(),
            None => Self::empty(),
        };
        horizontal.and(vertical)
    }
}
