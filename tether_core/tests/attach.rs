// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0

//! Semantics of the side-effecting attach layouts.

mod common;
use assert_matches::assert_matches;
use common::TestView;
use tether_core::kurbo::Size;
use tether_core::{AttachError, Child, Layout};

#[test]
fn add_child_attaches_once_and_returns_the_child_constraints() {
    let parent = TestView::new("parent");
    let child = TestView::new("child");
    let unused = TestView::new("unused");

    let layout = Layout::add_child(child.clone(), Layout::center());
    let produced = layout.constraints(&parent, &unused).unwrap();

    assert_eq!(parent.occurrences_of(&child), 1);
    // Returned descriptions are exactly what the child layout yields for
    // (child, parent); the evaluation-time reference plays no role.
    let expected = Layout::center().constraints(&child, &parent).unwrap();
    assert_eq!(produced, expected);
}

#[test]
fn add_child_attaches_on_every_evaluation() {
    let parent = TestView::new("parent");
    let child = TestView::new("child");

    let layout = Layout::add_child(child.clone(), Layout::empty());
    layout.constraints(&parent, &parent).unwrap();
    layout.constraints(&parent, &parent).unwrap();

    // The double records insertions verbatim: one per evaluation.
    assert_eq!(parent.occurrences_of(&child), 2);
}

#[test]
fn add_children_attaches_in_order_and_concatenates() {
    let parent = TestView::new("parent");
    let first = TestView::new("first");
    let second = TestView::new("second");

    let layout = Layout::add_children([
        Child::new(first.clone()),
        Child::with_layout(second.clone(), Layout::size(Size::new(10.0, 10.0))),
    ]);
    let produced = layout.constraints(&parent, &parent).unwrap();

    let children = parent.children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0], first);
    assert_eq!(children[1], second);

    // The first child's default layout is empty, so only the second
    // contributes descriptions.
    let expected = Layout::size(Size::new(10.0, 10.0))
        .constraints(&second, &parent)
        .unwrap();
    assert_eq!(produced, expected);
}

#[test]
fn partial_failure_leaves_earlier_children_attached() {
    let parent = TestView::with_capacity("parent", 1);
    let first = TestView::new("first");
    let second = TestView::new("second");

    let layout = Layout::add_children([Child::new(first.clone()), Child::new(second.clone())]);
    let error = layout.constraints(&parent, &parent).unwrap_err();

    assert_matches!(error, AttachError::Rejected(_));
    // No rollback: the first insertion stays in place.
    assert_eq!(parent.occurrences_of(&first), 1);
    assert_eq!(parent.occurrences_of(&second), 0);
}

#[test]
fn child_defaults_to_the_empty_layout() {
    let parent = TestView::new("parent");
    let view = TestView::new("view");

    let child = Child::new(view);
    assert!(child.constraints_to(&parent).unwrap().is_empty());
}
