// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0

//! The layout value and its composition operators.

use std::fmt;
use std::rc::Rc;

use crate::constraint::Constraint;
use crate::error::AttachError;

/// What evaluating a [`Layout`] yields: an ordered list of constraint
/// descriptions, or the error from a refused tree mutation.
///
/// Purely-built layouts never return the error case; it is only reachable
/// through the attach constructors.
pub type LayoutResult<V> = Result<Vec<Constraint<V>>, AttachError>;

/// A deferred function from a (subject, reference) view pair to a list of
/// constraint descriptions.
///
/// A layout describes a spatial relationship, such as "centered in" or
/// "fitted to with padding", without naming the views it relates.
/// The views are supplied when the layout is evaluated with
/// [`constraints`](Self::constraints), usually by an attach wrapper at the
/// moment a child enters the tree.
///
/// Layouts are immutable values. Composition never evaluates early and
/// never mutates an operand; it produces a new layout that invokes its
/// constituents only when itself evaluated. Evaluating the same layout
/// against different view pairs yields independent description lists.
///
/// The order of the produced descriptions is the order of construction. It
/// aids debugging but carries no semantics: no description depends on
/// another's existence.
pub struct Layout<V> {
    build: Rc<dyn Fn(&V, &V) -> LayoutResult<V>>,
}

impl<V> Clone for Layout<V> {
    fn clone(&self) -> Self {
        Self {
            build: self.build.clone(),
        }
    }
}

impl<V> fmt::Debug for Layout<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layout").finish_non_exhaustive()
    }
}

impl<V: 'static> Layout<V> {
    /// Wraps a constraint-building function as a layout.
    ///
    /// This is the raw constructor underneath every other operation in this
    /// crate. The function must be pure unless the layout is explicitly a
    /// side-effecting one, and must produce a fresh description list on
    /// every call.
    pub fn new(build: impl Fn(&V, &V) -> LayoutResult<V> + 'static) -> Self {
        Self {
            build: Rc::new(build),
        }
    }

    /// The layout producing no constraints.
    ///
    /// Identity element of [`concat`](Self::concat).
    pub fn empty() -> Self {
        Self::new(|_, _| Ok(Vec::new()))
    }

    /// Concatenates layouts into one.
    ///
    /// Evaluation runs every input against the same view pair, in the given
    /// order, and flattens the results. Concatenation is associative;
    /// concatenating nothing behaves as [`empty`](Self::empty).
    pub fn concat(layouts: impl IntoIterator<Item = Self>) -> Self {
        let layouts: Vec<Self> = layouts.into_iter().collect();
        Self::new(move |view, reference| {
            let mut all = Vec::new();
            for layout in &layouts {
                all.extend(layout.constraints(view, reference)?);
            }
            Ok(all)
        })
    }

    /// Concatenates `self` with `other`.
    pub fn and(self, other: Self) -> Self {
        Self::concat([self, other])
    }

    /// Rebinds the reference view to `reference`.
    ///
    /// The returned layout ignores whatever reference it is evaluated
    /// against and constrains the subject to `reference` instead. This is
    /// how "align to view X" is expressed independently of the subject's
    /// eventual parent.
    pub fn to_view(self, reference: V) -> Self {
        Self::new(move |view, _| self.constraints(view, &reference))
    }

    /// Wraps an already-built description list as a layout.
    ///
    /// The returned layout ignores both views. Each evaluation returns its
    /// own copy of the list, so descriptions handed to an activation
    /// collaborator are never shared between evaluations.
    pub fn always(constraints: Vec<Constraint<V>>) -> Self
    where
        V: Clone,
    {
        Self::new(move |_, _| Ok(constraints.clone()))
    }

    /// Evaluates the layout against a concrete view pair.
    pub fn constraints(&self, view: &V, reference: &V) -> LayoutResult<V> {
        (self.build)(view, reference)
    }
}
