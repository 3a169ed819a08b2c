// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0

//! A minimal view-tree double for exercising the layout algebra.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tether_core::{AttachError, RawView};

/// A retained view double: a name, a child list, and nothing else.
///
/// Cloning clones the handle; equality is handle identity. A capacity can
/// be set to make further insertions fail, for exercising the
/// partial-failure behavior of the attach layouts.
#[derive(Clone)]
pub(crate) struct TestView {
    inner: Rc<Inner>,
}

struct Inner {
    name: &'static str,
    capacity: Option<usize>,
    children: RefCell<Vec<TestView>>,
}

impl TestView {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            inner: Rc::new(Inner {
                name,
                capacity: None,
                children: RefCell::new(Vec::new()),
            }),
        }
    }

    /// A view that rejects insertions once it holds `capacity` children.
    pub(crate) fn with_capacity(name: &'static str, capacity: usize) -> Self {
        Self {
            inner: Rc::new(Inner {
                name,
                capacity: Some(capacity),
                children: RefCell::new(Vec::new()),
            }),
        }
    }

    pub(crate) fn children(&self) -> Vec<TestView> {
        self.inner.children.borrow().clone()
    }

    /// How many times `child` occurs among this view's children.
    pub(crate) fn occurrences_of(&self, child: &TestView) -> usize {
        self.inner
            .children
            .borrow()
            .iter()
            .filter(|c| *c == child)
            .count()
    }
}

impl PartialEq for TestView {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for TestView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TestView({})", self.inner.name)
    }
}

impl RawView for TestView {
    fn add_child(&self, child: &Self) -> Result<(), AttachError> {
        let mut children = self.inner.children.borrow_mut();
        if let Some(capacity) = self.inner.capacity {
            if children.len() >= capacity {
                return Err(AttachError::Rejected(format!(
                    "{} is at capacity",
                    self.inner.name
                )));
            }
        }
        children.push(child.clone());
        Ok(())
    }
}
