// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0

//! Layouts that mutate the view tree as a side effect of evaluation.
//!
//! These two constructors are the only impurity in the algebra. Everything
//! else in this crate merely describes constraints; evaluating an attach
//! layout inserts views into the tree, immediately and without rollback.

use crate::child::Child;
use crate::layout::Layout;
use crate::raw_view::RawView;

impl<V: RawView> Layout<V> {
    /// A layout that attaches `child` to the subject view, then constrains
    /// it by `layout`.
    ///
    /// Evaluated against (parent, _), this inserts `child` into `parent`,
    /// then returns `layout`'s descriptions for (child, parent). Insertion
    /// happens before constraining, so the descriptions always reference a
    /// view that is already in the tree. The evaluation-time reference view
    /// plays no role.
    ///
    /// Every evaluation performs the insertion exactly once.
    pub fn add_child(child: V, layout: Layout<V>) -> Self {
        Self::new(move |parent, _| {
            parent.add_child(&child)?;
            tracing::trace!("attached child view during layout evaluation");
            layout.constraints(&child, parent)
        })
    }

    /// A layout that attaches a batch of children, each constrained by its
    /// own layout, in order.
    ///
    /// There are no transactional semantics: if an insertion fails partway,
    /// children attached by earlier steps stay attached and the error
    /// propagates from the failing step.
    pub fn add_children(children: impl IntoIterator<Item = Child<V>>) -> Self {
        let children: Vec<Child<V>> = children.into_iter().collect();
        Self::new(move |parent, _| {
            let mut all = Vec::new();
            for child in &children {
                parent.add_child(child.view())?;
                all.extend(child.constraints_to(parent)?);
            }
            tracing::trace!(
                children = children.len(),
                constraints = all.len(),
                "attached child views during layout evaluation"
            );
            Ok(all)
        })
    }
}
