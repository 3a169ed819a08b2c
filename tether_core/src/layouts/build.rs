// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0

//! Builders for single-constraint layouts.
//!
//! Each builder is a small configuration value; nothing happens until
//! [`build`](AnchorConstraint::build) wraps it into a [`Layout`], and the
//! constraint description itself is only produced when that layout is
//! evaluated against a view pair.

use crate::anchor::{Anchor, AnchorId, DimAnchor, Guide, PositionAnchor};
use crate::constraint::{Constraint, Priority, Relation};
use crate::layout::Layout;
use crate::util::finite_or;

/// A positional constraint between a view and its reference.
///
/// By default the same anchor is used on both sides with an offset of zero:
/// `AnchorConstraint::new(XAnchor::Leading)` reads "my leading edge equals
/// the reference's leading edge". The builder methods adjust the
/// reference-side anchor, relation, offset, priority and edge set.
///
/// The generic parameter ties both sides to one axis; a horizontal anchor
/// cannot be paired with a vertical one.
#[derive(Clone, Copy, Debug)]
#[must_use = "a builder does nothing until turned into a layout"]
pub struct AnchorConstraint<A> {
    anchor: A,
    to: A,
    guide: Guide,
    relation: Relation,
    constant: f64,
    priority: Priority,
}

impl<A: PositionAnchor> AnchorConstraint<A> {
    /// Constrains `anchor` to the matching anchor on the reference view.
    pub fn new(anchor: A) -> Self {
        Self {
            anchor,
            to: anchor,
            guide: Guide::Edges,
            relation: Relation::Equal,
            constant: 0.0,
            priority: Priority::REQUIRED,
        }
    }

    /// Uses `anchor` on the reference side instead of the matching one.
    pub fn to(mut self, anchor: A) -> Self {
        self.to = anchor;
        self
    }

    /// Sets the relation between the two anchors.
    pub fn relation(mut self, relation: Relation) -> Self {
        self.relation = relation;
        self
    }

    /// Sets the constant offset. Must be finite.
    #[track_caller]
    pub fn constant(mut self, constant: f64) -> Self {
        self.constant = finite_or(constant, 0.0, "constraint constant");
        self
    }

    /// Sets the priority.
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Resolves the reference-side anchor against the given edge set.
    ///
    /// The subject always keeps its outer edge; [`Guide::SafeArea`]
    /// substitutes the reference's inset content-area edge.
    pub fn guide(mut self, guide: Guide) -> Self {
        self.guide = guide;
        self
    }

    /// Wraps the configuration into a layout producing exactly one
    /// description per evaluation.
    pub fn build<V: Clone + 'static>(self) -> Layout<V> {
        Layout::new(move |view: &V, reference| {
            Ok(vec![Constraint {
                anchor: Anchor {
                    view: view.clone(),
                    id: self.anchor.erase(Guide::Edges),
                },
                relation: self.relation,
                to: Some(Anchor {
                    view: reference.clone(),
                    id: self.to.erase(self.guide),
                }),
                multiplier: 1.0,
                constant: self.constant,
                priority: self.priority,
            }])
        })
    }
}

/// A dimension constraint between a view and its reference.
///
/// Like [`AnchorConstraint`] but for [`DimAnchor`]s, which additionally
/// admit a multiplier: "my width equals half the reference's height" is
/// `DimConstraint::new(Width).to(Height).multiplier(0.5)`.
#[derive(Clone, Copy, Debug)]
#[must_use = "a builder does nothing until turned into a layout"]
pub struct DimConstraint {
    anchor: DimAnchor,
    to: DimAnchor,
    relation: Relation,
    multiplier: f64,
    constant: f64,
    priority: Priority,
}

impl DimConstraint {
    /// Constrains `anchor` to the matching dimension on the reference view.
    pub fn new(anchor: DimAnchor) -> Self {
        Self {
            anchor,
            to: anchor,
            relation: Relation::Equal,
            multiplier: 1.0,
            constant: 0.0,
            priority: Priority::REQUIRED,
        }
    }

    /// Uses `anchor` on the reference side instead of the matching one.
    pub fn to(mut self, anchor: DimAnchor) -> Self {
        self.to = anchor;
        self
    }

    /// Sets the relation between the two dimensions.
    pub fn relation(mut self, relation: Relation) -> Self {
        self.relation = relation;
        self
    }

    /// Sets the scale applied to the reference dimension. Must be finite.
    #[track_caller]
    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = finite_or(multiplier, 1.0, "constraint multiplier");
        self
    }

    /// Sets the constant offset. Must be finite.
    #[track_caller]
    pub fn constant(mut self, constant: f64) -> Self {
        self.constant = finite_or(constant, 0.0, "constraint constant");
        self
    }

    /// Sets the priority.
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Wraps the configuration into a layout producing exactly one
    /// description per evaluation.
    pub fn build<V: Clone + 'static>(self) -> Layout<V> {
        Layout::new(move |view: &V, reference| {
            Ok(vec![Constraint {
                anchor: Anchor {
                    view: view.clone(),
                    id: AnchorId::Dim(self.anchor),
                },
                relation: self.relation,
                to: Some(Anchor {
                    view: reference.clone(),
                    id: AnchorId::Dim(self.to),
                }),
                multiplier: self.multiplier,
                constant: self.constant,
                priority: self.priority,
            }])
        })
    }
}

/// A dimension pinned to a literal value, with no reference anchor.
#[derive(Clone, Copy, Debug)]
#[must_use = "a builder does nothing until turned into a layout"]
pub struct FixedDim {
    anchor: DimAnchor,
    relation: Relation,
    value: f64,
    priority: Priority,
}

impl FixedDim {
    /// Pins `anchor` to `value`. The value must be finite.
    #[track_caller]
    pub fn new(anchor: DimAnchor, value: f64) -> Self {
        Self {
            anchor,
            relation: Relation::Equal,
            value: finite_or(value, 0.0, "dimension constant"),
            priority: Priority::REQUIRED,
        }
    }

    /// Sets the relation between the dimension and the value.
    pub fn relation(mut self, relation: Relation) -> Self {
        self.relation = relation;
        self
    }

    /// Sets the priority.
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Wraps the configuration into a layout producing exactly one
    /// description per evaluation. The reference view is ignored.
    pub fn build<V: Clone + 'static>(self) -> Layout<V> {
        Layout::new(move |view: &V, _| {
            Ok(vec![Constraint {
                anchor: Anchor {
                    view: view.clone(),
                    id: AnchorId::Dim(self.anchor),
                },
                relation: self.relation,
                to: None,
                multiplier: 1.0,
                constant: self.value,
                priority: self.priority,
            }])
        })
    }
}
