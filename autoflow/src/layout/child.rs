//! Child contract - what a flow container needs from each of its children.
//!
//! The container never owns its children. The host hands a slice of them to
//! every layout pass; the container reads their measurements and layout
//! parameters through [`FlowChild`] and writes the final bounds back with
//! [`FlowChild::place`].

use serde::{Deserialize, Serialize};

use crate::gravity::Gravity;
use crate::primitives::{Rect, Size};

use super::constraints::LayoutConstraints;
use super::length::Margins;

/// Whether a child takes part in layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Visible,
    /// Laid out but not drawn. Still occupies space.
    Invisible,
    /// Skipped entirely: no position, no space.
    Gone,
}

/// Per-child layout parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    pub margins: Margins,
    /// Placement of the child inside its line's band.
    pub gravity: Gravity,
}

impl LayoutParams {
    pub fn new(margins: Margins, gravity: Gravity) -> Self {
        Self { margins, gravity }
    }

    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }
}

/// A child element of a flow container.
pub trait FlowChild {
    fn visibility(&self) -> Visibility;

    /// Size from the last measurement. Zero on either axis means "not measured".
    fn measured_size(&self) -> Size;

    /// Measure under the given constraints, updating [`Self::measured_size`].
    fn measure(&mut self, constraints: LayoutConstraints);

    fn layout_params(&self) -> &LayoutParams;

    /// Commit the final bounds, in container coordinates.
    fn place(&mut self, bounds: Rect);

    #[inline]
    fn is_gone(&self) -> bool {
        self.visibility() == Visibility::Gone
    }
}

impl<T: FlowChild + ?Sized> FlowChild for Box<T> {
    fn visibility(&self) -> Visibility {
        (**self).visibility()
    }

    fn measured_size(&self) -> Size {
        (**self).measured_size()
    }

    fn measure(&mut self, constraints: LayoutConstraints) {
        (**self).measure(constraints)
    }

    fn layout_params(&self) -> &LayoutParams {
        (**self).layout_params()
    }

    fn place(&mut self, bounds: Rect) {
        (**self).place(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_params_builder() {
        let params = LayoutParams::default()
            .margins(Margins::all(2))
            .gravity(Gravity::CENTER);
        assert_eq!(params.margins, Margins::all(2));
        assert_eq!(params.gravity, Gravity::CENTER);
    }

    #[test]
    fn test_visibility_deserializes_snake_case() {
        let v: Visibility = serde_json::from_str("\"gone\"").unwrap();
        assert_eq!(v, Visibility::Gone);
    }
}
