// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0

//! The algebraic laws of layout composition.

mod common;
use common::TestView;
use tether_core::{AnchorConstraint, DimAnchor, FixedDim, Layout, XAnchor, YAnchor};

fn leading() -> Layout<TestView> {
    AnchorConstraint::new(XAnchor::Leading).constant(8.0).build()
}

fn top() -> Layout<TestView> {
    AnchorConstraint::new(YAnchor::Top).build()
}

fn width() -> Layout<TestView> {
    FixedDim::new(DimAnchor::Width, 100.0).build()
}

#[test]
fn empty_is_the_identity_of_concat() {
    let view = TestView::new("view");
    let reference = TestView::new("reference");

    let plain = leading().constraints(&view, &reference).unwrap();
    let left = Layout::concat([Layout::empty(), leading()])
        .constraints(&view, &reference)
        .unwrap();
    let right = Layout::concat([leading(), Layout::empty()])
        .constraints(&view, &reference)
        .unwrap();

    assert_eq!(left, plain);
    assert_eq!(right, plain);
}

#[test]
fn concat_is_associative() {
    let view = TestView::new("view");
    let reference = TestView::new("reference");

    let grouped_left = Layout::concat([Layout::concat([leading(), top()]), width()])
        .constraints(&view, &reference)
        .unwrap();
    let grouped_right = Layout::concat([leading(), Layout::concat([top(), width()])])
        .constraints(&view, &reference)
        .unwrap();

    assert_eq!(grouped_left, grouped_right);
}

#[test]
fn concat_flattens_in_order_without_dedup() {
    let view = TestView::new("view");
    let reference = TestView::new("reference");

    let a = leading().constraints(&view, &reference).unwrap();
    let b = width().constraints(&view, &reference).unwrap();

    let combined = Layout::concat([leading(), width(), leading()])
        .constraints(&view, &reference)
        .unwrap();

    let mut expected = a.clone();
    expected.extend(b);
    expected.extend(a);
    assert_eq!(combined, expected);
}

#[test]
fn concat_of_nothing_behaves_as_empty() {
    let view = TestView::new("view");
    let reference = TestView::new("reference");

    let none = Layout::concat(Vec::<Layout<TestView>>::new())
        .constraints(&view, &reference)
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn and_chains_like_concat() {
    let view = TestView::new("view");
    let reference = TestView::new("reference");

    let chained = leading()
        .and(top())
        .constraints(&view, &reference)
        .unwrap();
    let concatenated = Layout::concat([leading(), top()])
        .constraints(&view, &reference)
        .unwrap();
    assert_eq!(chained, concatenated);
}

#[test]
fn to_view_rebinds_the_reference() {
    let view = TestView::new("view");
    let ignored = TestView::new("ignored");
    let pinned = TestView::new("pinned");

    let direct = leading().constraints(&view, &pinned).unwrap();
    let rebound = leading()
        .to_view(pinned.clone())
        .constraints(&view, &ignored)
        .unwrap();

    assert_eq!(rebound, direct);
    // The reference actually passed at evaluation time leaves no trace.
    for constraint in &rebound {
        assert_ne!(constraint.to.as_ref().unwrap().view, ignored);
    }
}

#[test]
fn always_returns_an_independent_copy_per_evaluation() {
    let view = TestView::new("view");
    let reference = TestView::new("reference");
    let unrelated = TestView::new("unrelated");

    let prebuilt = leading().constraints(&view, &reference).unwrap();
    let layout = Layout::always(prebuilt.clone());

    let first = layout.constraints(&view, &reference).unwrap();
    let second = layout.constraints(&unrelated, &unrelated).unwrap();

    // Both views are ignored, and each call yields the full list again.
    assert_eq!(first, prebuilt);
    assert_eq!(second, prebuilt);
}

#[test]
fn evaluation_is_repeatable_across_view_pairs() {
    let layout = leading().and(width());
    let a = TestView::new("a");
    let b = TestView::new("b");
    let c = TestView::new("c");

    let first = layout.constraints(&a, &b).unwrap();
    let second = layout.constraints(&a, &c).unwrap();

    assert_eq!(first.len(), second.len());
    assert_ne!(first, second); // different reference view, different descriptions
    assert_eq!(layout.constraints(&a, &b).unwrap(), first);
}
