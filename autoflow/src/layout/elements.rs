//! Leaf layout element - LeafView.
//!
//! A child with a fixed intrinsic size that measures as "wrap content":
//! it takes its intrinsic size, clamped to whatever the container allows.

use crate::gravity::Gravity;
use crate::primitives::{Rect, Size};

use super::child::{FlowChild, LayoutParams, Visibility};
use super::constraints::LayoutConstraints;
use super::length::Margins;

// =========================================================================
// LeafView
// =========================================================================

/// A leaf child descriptor.
///
/// Starts unmeasured; the container measures it on the first pass and
/// records its final bounds in [`LeafView::bounds`].
#[derive(Debug, Clone)]
pub struct LeafView {
    /// Label for logs and the demo output.
    pub label: String,
    /// Size the view would like to have.
    pub intrinsic: Size,
    params: LayoutParams,
    visibility: Visibility,
    measured: Size,
    measure_count: u32,
    bounds: Option<Rect>,
}

impl LeafView {
    /// Create a visible leaf with the given intrinsic size.
    pub fn new(label: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            label: label.into(),
            intrinsic: Size::new(width, height),
            params: LayoutParams::default(),
            visibility: Visibility::Visible,
            measured: Size::ZERO,
            measure_count: 0,
            bounds: None,
        }
    }

    /// Treat the view as already measured at `size`.
    pub fn measured(mut self, size: Size) -> Self {
        self.measured = size;
        self
    }

    pub fn margins(mut self, margins: Margins) -> Self {
        self.params.margins = margins;
        self
    }

    pub fn gravity(mut self, gravity: Gravity) -> Self {
        self.params.gravity = gravity;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    /// Final bounds from the last layout pass, if the view was placed.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Bounds grown by the view's margins.
    pub fn margin_box(&self) -> Option<Rect> {
        let m = self.params.margins;
        self.bounds.map(|b| {
            Rect::from_ltrb(
                b.x.saturating_sub(m.left),
                b.y.saturating_sub(m.top),
                b.right().saturating_add(m.right),
                b.bottom().saturating_add(m.bottom),
            )
        })
    }

    /// How many times the container asked this view to measure.
    pub fn measure_count(&self) -> u32 {
        self.measure_count
    }
}

impl FlowChild for LeafView {
    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn measure(&mut self, constraints: LayoutConstraints) {
        self.measure_count += 1;
        self.measured = constraints.constrain(self.intrinsic);
    }

    fn layout_params(&self) -> &LayoutParams {
        &self.params
    }

    fn place(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_starts_unmeasured() {
        let leaf = LeafView::new("a", 20, 10);
        assert!(leaf.measured_size().is_empty());
        assert_eq!(leaf.bounds(), None);
    }

    #[test]
    fn test_leaf_measure_wraps_content() {
        let mut leaf = LeafView::new("a", 120, 10);
        leaf.measure(LayoutConstraints::at_most(100, 100));
        assert_eq!(leaf.measured_size(), Size::new(100, 10));
        assert_eq!(leaf.measure_count(), 1);
    }

    #[test]
    fn test_leaf_margin_box() {
        let mut leaf = LeafView::new("a", 20, 10).margins(Margins::new(1, 2, 3, 4));
        leaf.place(Rect::new(10, 10, 20, 10));
        assert_eq!(leaf.margin_box(), Some(Rect::from_ltrb(6, 9, 32, 23)));
    }
}
