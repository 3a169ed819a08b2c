// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use kurbo::{Insets, Rect};
use tether_core::{AttachError, Constraint, RawView};

/// A handle into the retained view tree.
///
/// Cloning a `View` clones the handle, not the node: all clones observe the
/// same children, frame and active constraints, and equality is node
/// identity. Handles are `Rc`-based and therefore single-threaded, which is
/// how the tree's exclusive-access requirement is enforced.
///
/// A node stores a debug label, its ordered children, a weak link to its
/// parent, a frame, safe-area insets, and the constraints currently
/// activated on it. The view tree does not solve anything; frames are
/// written by whatever solver consumes the activated constraints.
#[derive(Clone)]
pub struct View {
    inner: Rc<ViewInner>,
}

struct ViewInner {
    label: String,
    parent: RefCell<Weak<ViewInner>>,
    children: RefCell<Vec<View>>,
    frame: Cell<Rect>,
    safe_area: Cell<Insets>,
    active: RefCell<Vec<Constraint<View>>>,
}

impl View {
    /// Creates a detached view with a label for debugging.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(ViewInner {
                label: label.into(),
                parent: RefCell::new(Weak::new()),
                children: RefCell::new(Vec::new()),
                frame: Cell::new(Rect::ZERO),
                safe_area: Cell::new(Insets::ZERO),
                active: RefCell::new(Vec::new()),
            }),
        }
    }

    /// The debug label given at creation.
    pub fn label(&self) -> &str {
        &self.inner.label
    }

    /// This view's children, in insertion order.
    pub fn children(&self) -> Vec<View> {
        self.inner.children.borrow().clone()
    }

    /// The view this view is attached to, if any.
    pub fn parent(&self) -> Option<View> {
        self.inner.parent.borrow().upgrade().map(|inner| Self { inner })
    }

    /// Detaches this view from its parent. A no-op when detached.
    ///
    /// Constraints referencing the view stay activated; revoking them is
    /// the caller's decision, as in any retained tree without rollback.
    pub fn remove_from_parent(&self) {
        if let Some(parent) = self.parent() {
            parent.inner.children.borrow_mut().retain(|c| c != self);
        }
        self.inner.parent.replace(Weak::new());
    }

    /// The view's frame. [`Rect::ZERO`] until a solver writes one.
    pub fn frame(&self) -> Rect {
        self.inner.frame.get()
    }

    /// Sets the view's frame.
    pub fn set_frame(&self, frame: Rect) {
        self.inner.frame.set(frame);
    }

    /// The insets carving the safe content area out of the view's edges.
    pub fn safe_area(&self) -> Insets {
        self.inner.safe_area.get()
    }

    /// Sets the safe-area insets.
    pub fn set_safe_area(&self, insets: Insets) {
        self.inner.safe_area.set(insets);
    }

    /// The constraints currently activated on this view.
    ///
    /// A constraint is stored on the view owning its target anchor.
    pub fn active_constraints(&self) -> Vec<Constraint<View>> {
        self.inner.active.borrow().clone()
    }

    pub(crate) fn push_active(&self, constraint: Constraint<View>) {
        self.inner.active.borrow_mut().push(constraint);
    }

    pub(crate) fn remove_active(&self, constraint: &Constraint<View>) {
        let mut active = self.inner.active.borrow_mut();
        if let Some(position) = active.iter().position(|c| c == constraint) {
            active.remove(position);
        }
    }

    /// Whether `other` is this view or a descendant of this view's node.
    fn is_same_or_ancestor_of(&self, other: &View) -> bool {
        if self == other {
            return true;
        }
        let mut current = other.parent();
        while let Some(view) = current {
            if view == *self {
                return true;
            }
            current = view.parent();
        }
        false
    }
}

impl PartialEq for View {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for View {}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("View").field(&self.label()).finish()
    }
}

impl RawView for View {
    /// Inserts `child` as the last child.
    ///
    /// A child that already has a parent is moved, retained-tree style.
    /// Inserting a view into itself or into one of its descendants is
    /// refused with [`AttachError::Cycle`].
    fn add_child(&self, child: &Self) -> Result<(), AttachError> {
        if child.is_same_or_ancestor_of(self) {
            return Err(AttachError::Cycle);
        }
        child.remove_from_parent();
        child.inner.parent.replace(Rc::downgrade(&self.inner));
        self.inner.children.borrow_mut().push(child.clone());
        tracing::trace!(parent = self.label(), child = child.label(), "attached view");
        Ok(())
    }
}
