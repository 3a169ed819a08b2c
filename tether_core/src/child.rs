// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0

use core::fmt;

use crate::layout::{Layout, LayoutResult};

/// A child view bundled with the layout that pins it to its parent.
///
/// `Child` is how a batch of children is described uniformly: consumers
/// such as [`Layout::add_children`] and the `tether` stack container take
/// an ordered sequence of them, attach each view, and evaluate each layout
/// with (child, parent).
///
/// The pairing is value-like: it owns the handle, not the view's lifetime.
pub struct Child<V> {
    view: V,
    layout: Layout<V>,
}

impl<V: 'static> Child<V> {
    /// Pairs a view with [`Layout::empty`].
    pub fn new(view: V) -> Self {
        Self {
            view,
            layout: Layout::empty(),
        }
    }

    /// Pairs a view with the layout that will pin it to its parent.
    pub fn with_layout(view: V, layout: Layout<V>) -> Self {
        Self { view, layout }
    }

    /// The bundled view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The bundled layout.
    pub fn layout(&self) -> &Layout<V> {
        &self.layout
    }

    /// Evaluates the bundled layout with (child, parent).
    pub fn constraints_to(&self, parent: &V) -> LayoutResult<V> {
        self.layout.constraints(&self.view, parent)
    }
}

impl<V: Clone> Clone for Child<V> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
            layout: self.layout.clone(),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Child<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Child")
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}
