// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0

//! A container view that arranges a batch of children along one axis.
//!
//! The stack is a consumer of the layout algebra, not an extension of it:
//! every arrangement constraint below is built with the ordinary anchor
//! builders and evaluated against the right view pair. No geometry is
//! computed here.

use kurbo::Insets;
use tether_core::{
    AnchorConstraint, Child, DimAnchor, DimConstraint, Guide, Layout, LayoutResult, RawView,
    XAnchor, YAnchor,
};

use crate::activate::activate;
use crate::view::View;

/// The axis along which a stack arranges its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Children run from leading to trailing.
    Horizontal,
    /// Children run from top to bottom.
    Vertical,
}

impl Axis {
    /// First child's start edge pinned to the container's.
    fn pin_start(self) -> Layout<View> {
        match self {
            Self::Horizontal => AnchorConstraint::new(XAnchor::Leading).build(),
            Self::Vertical => AnchorConstraint::new(YAnchor::Top).build(),
        }
    }

    /// Last child's end edge pinned to the container's.
    fn pin_end(self) -> Layout<View> {
        match self {
            Self::Horizontal => AnchorConstraint::new(XAnchor::Trailing).build(),
            Self::Vertical => AnchorConstraint::new(YAnchor::Bottom).build(),
        }
    }

    /// A child's start edge chained to the previous child's end edge.
    fn chain(self, spacing: f64) -> Layout<View> {
        match self {
            Self::Horizontal => AnchorConstraint::new(XAnchor::Leading)
                .to(XAnchor::Trailing)
                .constant(spacing)
                .build(),
            Self::Vertical => AnchorConstraint::new(YAnchor::Top)
                .to(YAnchor::Bottom)
                .constant(spacing)
                .build(),
        }
    }

    /// Equal extent along the axis, against the first child.
    fn equal_extent(self) -> Layout<View> {
        match self {
            Self::Horizontal => DimConstraint::new(DimAnchor::Width).build(),
            Self::Vertical => DimConstraint::new(DimAnchor::Height).build(),
        }
    }

    /// Cross-axis placement of a child within the container.
    fn cross(self, alignment: StackAlignment) -> Layout<View> {
        match (self, alignment) {
            (Self::Horizontal, StackAlignment::Fill) => {
                Layout::fit_height(Guide::Edges, Insets::ZERO)
            }
            (Self::Horizontal, StackAlignment::Leading) => {
                AnchorConstraint::new(YAnchor::Top).build()
            }
            (Self::Horizontal, StackAlignment::Center) => {
                AnchorConstraint::new(YAnchor::CenterY).build()
            }
            (Self::Horizontal, StackAlignment::Trailing) => {
                AnchorConstraint::new(YAnchor::Bottom).build()
            }
            (Self::Vertical, StackAlignment::Fill) => {
                Layout::fit_width(Guide::Edges, Insets::ZERO)
            }
            (Self::Vertical, StackAlignment::Leading) => {
                AnchorConstraint::new(XAnchor::Leading).build()
            }
            (Self::Vertical, StackAlignment::Center) => {
                AnchorConstraint::new(XAnchor::CenterX).build()
            }
            (Self::Vertical, StackAlignment::Trailing) => {
                AnchorConstraint::new(XAnchor::Trailing).build()
            }
        }
    }
}

/// How children share the container's extent along the axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Distribution {
    /// Children keep their own extents, chained edge to edge.
    #[default]
    Fill,
    /// Additionally forces every child's extent to match the first one's.
    FillEqually,
}

/// How children sit on the axis perpendicular to the stack's.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StackAlignment {
    /// Stretched across the container.
    #[default]
    Fill,
    /// Against the cross-axis start edge (top, or leading).
    Leading,
    /// Centered on the cross axis.
    Center,
    /// Against the cross-axis end edge (bottom, or trailing).
    Trailing,
}

/// A container view plus the policy for arranging children inside it.
///
/// Children are attached with [`add_arranged`](Self::add_arranged), or the
/// whole stack is deferred with [`into_layout`](Self::into_layout) /
/// [`into_child`](Self::into_child) so it can ride along an ordinary attach
/// operation at the parent.
#[derive(Clone, Debug)]
pub struct Stack {
    view: View,
    axis: Axis,
    spacing: f64,
    distribution: Distribution,
    alignment: StackAlignment,
}

impl Stack {
    /// Creates an empty stack container for the given axis.
    pub fn new(axis: Axis) -> Self {
        Self {
            view: View::new("stack"),
            axis,
            spacing: 0.0,
            distribution: Distribution::default(),
            alignment: StackAlignment::default(),
        }
    }

    /// Sets the gap between adjacent children.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets how children share the axis extent.
    pub fn with_distribution(mut self, distribution: Distribution) -> Self {
        self.distribution = distribution;
        self
    }

    /// Sets the cross-axis placement of children.
    pub fn with_alignment(mut self, alignment: StackAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// The container view.
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Attaches `children` in order as arranged members and activates the
    /// arrangement.
    ///
    /// Per child this emits, in order: the axis chain (start pin for the
    /// first child, previous-edge chain with spacing otherwise), the
    /// cross-axis placement, the distribution equality when applicable, and
    /// the child's own layout evaluated with (child, container). The last
    /// child's end edge is pinned to the container after the loop.
    pub fn add_arranged(
        &self,
        children: impl IntoIterator<Item = Child<View>>,
    ) -> LayoutResult<View> {
        let children: Vec<Child<View>> = children.into_iter().collect();
        let constraints = self.arrange(&children)?;
        activate(&constraints);
        Ok(constraints)
    }

    /// A side-effecting layout that attaches the container to the subject
    /// view, constrains it by `layout`, then arranges `children` inside it.
    ///
    /// The returned descriptions are the container's own plus the
    /// arrangement's, so applying this layout at the parent activates the
    /// entire ensemble at once. `Layout::fit(Insets::ZERO)` is the usual
    /// choice of `layout`.
    pub fn into_layout(
        self,
        children: impl IntoIterator<Item = Child<View>>,
        layout: Layout<View>,
    ) -> Layout<View> {
        let children: Vec<Child<View>> = children.into_iter().collect();
        Layout::new(move |parent: &View, _| {
            parent.add_child(&self.view)?;
            let mut all = layout.constraints(&self.view, parent)?;
            all.extend(self.arrange(&children)?);
            tracing::trace!(
                children = children.len(),
                constraints = all.len(),
                "attached stack during layout evaluation"
            );
            Ok(all)
        })
    }

    /// The stack packaged as a [`Child`], for use inside a batch attach.
    ///
    /// The bundled layout constrains the container by `layout` and arranges
    /// `children` as a side effect of its evaluation.
    pub fn into_child(
        self,
        children: impl IntoIterator<Item = Child<View>>,
        layout: Layout<View>,
    ) -> Child<View> {
        let children: Vec<Child<View>> = children.into_iter().collect();
        let view = self.view.clone();
        let bundled = Layout::new(move |container, parent| {
            let mut all = layout.constraints(container, parent)?;
            all.extend(self.arrange(&children)?);
            Ok(all)
        });
        Child::with_layout(view, bundled)
    }

    /// Attaches and arranges without activating.
    fn arrange(&self, children: &[Child<View>]) -> LayoutResult<View> {
        let mut all = Vec::new();
        let mut first: Option<View> = None;
        let mut previous: Option<View> = None;
        for child in children {
            let view = child.view();
            self.view.add_child(view)?;
            match &previous {
                None => all.extend(self.axis.pin_start().constraints(view, &self.view)?),
                Some(previous) => {
                    all.extend(self.axis.chain(self.spacing).constraints(view, previous)?);
                }
            }
            all.extend(self.axis.cross(self.alignment).constraints(view, &self.view)?);
            if self.distribution == Distribution::FillEqually {
                if let Some(first) = &first {
                    all.extend(self.axis.equal_extent().constraints(view, first)?);
                }
            }
            all.extend(child.constraints_to(&self.view)?);
            first.get_or_insert_with(|| view.clone());
            previous = Some(view.clone());
        }
        if let Some(last) = &previous {
            all.extend(self.axis.pin_end().constraints(last, &self.view)?);
        }
        Ok(all)
    }
}
