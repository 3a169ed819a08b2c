// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0

//! Turning inert constraint descriptions into live ones.
//!
//! The activation store is deliberately dumb: it records a description on
//! the view owning its target anchor and hands the batch to whatever solver
//! the embedding application runs. The apply wrappers below are the only
//! place this crate activates anything on its own, and they are thin
//! pass-throughs over the pure builders.

use tether_core::{Child, Constraint, Layout, LayoutResult, RawView};

use crate::view::View;

/// Makes a batch of constraint descriptions live.
pub fn activate(constraints: &[Constraint<View>]) {
    for constraint in constraints {
        constraint.anchor.view.push_active(constraint.clone());
    }
    tracing::trace!(count = constraints.len(), "activated constraints");
}

/// Revokes a batch of previously activated descriptions.
///
/// Descriptions are matched by value; revoking one that was never activated
/// is a no-op.
pub fn deactivate(constraints: &[Constraint<View>]) {
    for constraint in constraints {
        constraint.anchor.view.remove_active(constraint);
    }
    tracing::trace!(count = constraints.len(), "deactivated constraints");
}

impl View {
    /// Evaluates `layout` with (self, reference) without activating.
    pub fn constraints_to(&self, reference: &View, layout: &Layout<View>) -> LayoutResult<View> {
        layout.constraints(self, reference)
    }

    /// Evaluates `layout` with (self, reference) and activates the result.
    pub fn apply(&self, reference: &View, layout: &Layout<View>) -> LayoutResult<View> {
        let constraints = layout.constraints(self, reference)?;
        activate(&constraints);
        Ok(constraints)
    }

    /// Attaches `child`, then applies `layout` with (child, self).
    pub fn add_child_with(&self, child: &View, layout: &Layout<View>) -> LayoutResult<View> {
        self.add_child(child)?;
        child.apply(self, layout)
    }

    /// Attaches a batch of children, activating all their constraints as
    /// one batch once every insertion has succeeded.
    ///
    /// As everywhere in the attach path there is no rollback: a failing
    /// insertion leaves the children attached by earlier steps in place,
    /// with nothing activated.
    pub fn add_children(
        &self,
        children: impl IntoIterator<Item = Child<View>>,
    ) -> LayoutResult<View> {
        let mut all = Vec::new();
        for child in children {
            self.add_child(child.view())?;
            all.extend(child.constraints_to(self)?);
        }
        activate(&all);
        Ok(all)
    }
}
