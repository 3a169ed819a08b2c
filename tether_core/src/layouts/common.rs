// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0

//! The derived layout library: named layouts for the everyday cases,
//! expressed entirely through the primitive builders and composition.

use kurbo::{Insets, Size};

use crate::anchor::{Anchor, AnchorId, DimAnchor, Guide, XAnchor, YAnchor};
use crate::constraint::{Constraint, Priority, Relation};
use crate::layout::Layout;
use crate::layouts::build::{AnchorConstraint, DimConstraint, FixedDim};
use crate::util::finite_or;

impl<V: Clone + 'static> Layout<V> {
    /// Centers the view on the reference view.
    pub fn center() -> Self {
        Self::concat([
            AnchorConstraint::new(XAnchor::CenterX).build(),
            AnchorConstraint::new(YAnchor::CenterY).build(),
        ])
    }

    /// Gives the view the same size as the reference view.
    pub fn equal_size() -> Self {
        Self::concat([
            DimConstraint::new(DimAnchor::Width).build(),
            DimConstraint::new(DimAnchor::Height).build(),
        ])
    }

    /// Fixes the view's aspect ratio to `ratio.width : ratio.height`.
    ///
    /// This constrains the view against itself; the reference view does not
    /// appear in the produced description.
    ///
    /// # Panics
    ///
    /// Panics if `ratio.height` is zero.
    #[track_caller]
    pub fn ratio(ratio: Size) -> Self {
        assert!(
            ratio.height != 0.0,
            "an aspect ratio needs a non-zero height, got {ratio:?}"
        );
        let multiplier = finite_or(ratio.width / ratio.height, 1.0, "aspect ratio");
        Self::new(move |view, _| {
            Ok(vec![Constraint {
                anchor: Anchor {
                    view: view.clone(),
                    id: AnchorId::Dim(DimAnchor::Width),
                },
                relation: Relation::Equal,
                to: Some(Anchor {
                    view: view.clone(),
                    id: AnchorId::Dim(DimAnchor::Height),
                }),
                multiplier,
                constant: 0.0,
                priority: Priority::REQUIRED,
            }])
        })
    }

    /// Fixes the view's size, independent of the reference view.
    pub fn size(size: Size) -> Self {
        Self::concat([
            FixedDim::new(DimAnchor::Width, size.width).build(),
            FixedDim::new(DimAnchor::Height, size.height).build(),
        ])
    }

    /// Fits the view to the reference view's outer edges, inset by
    /// `insets`.
    pub fn fit(insets: impl Into<Insets>) -> Self {
        Self::fit_to(Guide::Edges, insets)
    }

    /// Fits the view to the chosen edge set of the reference view, inset by
    /// `insets`.
    pub fn fit_to(guide: Guide, insets: impl Into<Insets>) -> Self {
        let insets = insets.into();
        Self::fit_width(guide, insets).and(Self::fit_height(guide, insets))
    }

    /// Fits the view's width to the reference view.
    ///
    /// Only the horizontal components of `insets` are used. The trailing
    /// inset is negated internally, since trailing padding grows inward.
    pub fn fit_width(guide: Guide, insets: impl Into<Insets>) -> Self {
        let insets = insets.into();
        Self::concat([
            AnchorConstraint::new(XAnchor::Leading)
                .guide(guide)
                .constant(insets.x0)
                .build(),
            AnchorConstraint::new(XAnchor::Trailing)
                .guide(guide)
                .constant(-insets.x1)
                .build(),
        ])
    }

    /// Fits the view's height to the reference view.
    ///
    /// Only the vertical components of `insets` are used. The bottom inset
    /// is negated internally, since bottom padding grows inward.
    pub fn fit_height(guide: Guide, insets: impl Into<Insets>) -> Self {
        let insets = insets.into();
        Self::concat([
            AnchorConstraint::new(YAnchor::Top)
                .guide(guide)
                .constant(insets.y0)
                .build(),
            AnchorConstraint::new(YAnchor::Bottom)
                .guide(guide)
                .constant(-insets.y1)
                .build(),
        ])
    }
}
