//! AutoFlowLayout - the wrapping container widget.
//!
//! Holds the container's own state (orientation, gravity, padding) and a
//! pending-layout flag standing in for the host's invalidation. The host calls
//! [`AutoFlowLayout::on_layout`] with the allocated rectangle and the children;
//! the widget runs a [`FlowLayout`] pass and the children receive their bounds.
//!
//! Setters only request a layout when the stored value actually changes.

use crate::attributes::FlowAttributes;
use crate::gravity::Gravity;
use crate::layout::{FlowChild, FlowLayout, FlowSummary, Orientation, Padding};
use crate::primitives::Size;

/// A container that lays children out in rows or columns and wraps them.
#[derive(Debug, Clone)]
pub struct AutoFlowLayout {
    orientation: Orientation,
    gravity: Gravity,
    padding: Padding,
    layout_requested: bool,
}

impl Default for AutoFlowLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoFlowLayout {
    pub const DEFAULT_GRAVITY: Gravity = Gravity::from_bits(Gravity::TOP.bits() | Gravity::LEFT.bits());

    /// Horizontal, `TOP | LEFT`, no padding. A new container needs a layout.
    pub fn new() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            gravity: Self::DEFAULT_GRAVITY,
            padding: Padding::default(),
            layout_requested: true,
        }
    }

    /// Build a container from declarative attributes.
    pub fn from_attributes(attrs: &FlowAttributes) -> Self {
        let mut widget = Self::new();
        widget.orientation = attrs.orientation();
        if let Some(gravity) = attrs.gravity() {
            widget.set_gravity(gravity);
        }
        widget.padding = attrs.padding;
        widget
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Whether a layout pass has been requested since the last one ran.
    pub fn needs_layout(&self) -> bool {
        self.layout_requested
    }

    pub fn request_layout(&mut self) {
        if !self.layout_requested {
            tracing::trace!("flow layout requested");
        }
        self.layout_requested = true;
    }

    /// Switch between rows and columns.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            self.orientation = orientation;
            self.request_layout();
        }
    }

    /// Set the container gravity.
    ///
    /// A mask without horizontal bits gets `START`; one without vertical bits
    /// gets `TOP`. The comparison with the current value happens after that.
    pub fn set_gravity(&mut self, gravity: Gravity) {
        let mut gravity = gravity;
        if gravity.relative_horizontal().is_empty() {
            gravity |= Gravity::START;
        }
        if gravity.vertical().is_empty() {
            gravity |= Gravity::TOP;
        }

        if self.gravity != gravity {
            self.gravity = gravity;
            self.request_layout();
        }
    }

    /// Replace only the horizontal part of the container gravity.
    pub fn set_horizontal_gravity(&mut self, horizontal: Gravity) {
        let bits = horizontal.relative_horizontal();
        if self.gravity.relative_horizontal() != bits {
            self.gravity = (self.gravity & !Gravity::RELATIVE_HORIZONTAL_GRAVITY_MASK) | bits;
            self.request_layout();
        }
    }

    /// Replace only the vertical part of the container gravity.
    pub fn set_vertical_gravity(&mut self, vertical: Gravity) {
        let bits = vertical.vertical();
        if self.gravity.vertical() != bits {
            self.gravity = (self.gravity & !Gravity::VERTICAL_GRAVITY_MASK) | bits;
            self.request_layout();
        }
    }

    pub fn set_padding(&mut self, padding: Padding) {
        if self.padding != padding {
            self.padding = padding;
            self.request_layout();
        }
    }

    /// Lay out `children` in the rectangle `(left, top, right, bottom)` the
    /// parent allocated. Child bounds are relative to that rectangle.
    ///
    /// The pending flag is cleared before the pass, so a request raised while
    /// children are being placed stays pending for the next pass.
    pub fn on_layout<C: FlowChild>(
        &mut self,
        changed: bool,
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
        children: &mut [C],
    ) -> FlowSummary {
        self.layout_requested = false;
        tracing::trace!(
            "on_layout changed={} rect=({}, {}, {}, {})",
            changed,
            left,
            top,
            right,
            bottom
        );

        FlowLayout::new(self.orientation, self.gravity, self.padding)
            .layout(children, Size::new(right - left, bottom - top))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled() -> AutoFlowLayout {
        let mut widget = AutoFlowLayout::new();
        let mut none: Vec<crate::layout::LeafView> = Vec::new();
        widget.on_layout(true, 0, 0, 100, 100, &mut none);
        widget
    }

    #[test]
    fn test_defaults() {
        let widget = AutoFlowLayout::new();
        assert_eq!(widget.orientation(), Orientation::Horizontal);
        assert_eq!(widget.gravity(), Gravity::TOP | Gravity::LEFT);
        assert!(widget.needs_layout());
    }

    #[test]
    fn test_on_layout_clears_request() {
        assert!(!settled().needs_layout());
    }

    #[test]
    fn test_set_orientation() {
        let mut widget = settled();
        widget.set_orientation(Orientation::Horizontal);
        assert!(!widget.needs_layout());

        widget.set_orientation(Orientation::Vertical);
        assert_eq!(widget.orientation(), Orientation::Vertical);
        assert!(widget.needs_layout());
    }

    #[test]
    fn test_set_gravity_normalizes() {
        let mut widget = settled();
        widget.set_gravity(Gravity::CENTER_HORIZONTAL);
        assert_eq!(widget.gravity(), Gravity::CENTER_HORIZONTAL | Gravity::TOP);

        widget.set_gravity(Gravity::BOTTOM);
        assert_eq!(widget.gravity(), Gravity::BOTTOM | Gravity::START);

        widget.set_gravity(Gravity::NO_GRAVITY);
        assert_eq!(widget.gravity(), Gravity::TOP | Gravity::START);
    }

    #[test]
    fn test_set_gravity_same_value_is_noop() {
        let mut widget = settled();
        widget.set_gravity(Gravity::TOP | Gravity::LEFT);
        assert!(!widget.needs_layout());
    }

    #[test]
    fn test_set_gravity_noop_after_normalization() {
        let mut widget = settled();
        widget.set_gravity(Gravity::NO_GRAVITY);
        let mut none: Vec<crate::layout::LeafView> = Vec::new();
        widget.on_layout(false, 0, 0, 100, 100, &mut none);

        // Normalizes to the stored TOP | START again.
        widget.set_gravity(Gravity::NO_GRAVITY);
        assert!(!widget.needs_layout());
    }

    #[test]
    fn test_set_horizontal_gravity_keeps_vertical_bits() {
        let mut widget = settled();
        widget.set_gravity(Gravity::BOTTOM | Gravity::LEFT);
        widget.set_horizontal_gravity(Gravity::RIGHT | Gravity::TOP);
        assert_eq!(widget.gravity(), Gravity::BOTTOM | Gravity::RIGHT);

        widget.set_horizontal_gravity(Gravity::END);
        assert_eq!(widget.gravity(), Gravity::BOTTOM | Gravity::END);
    }

    #[test]
    fn test_set_vertical_gravity_keeps_horizontal_bits() {
        let mut widget = settled();
        widget.set_vertical_gravity(Gravity::CENTER_VERTICAL | Gravity::RIGHT);
        assert_eq!(widget.gravity(), Gravity::CENTER_VERTICAL | Gravity::LEFT);
        assert!(widget.needs_layout());
    }

    #[test]
    fn test_axis_setters_same_value_are_noops() {
        let mut widget = settled();
        widget.set_horizontal_gravity(Gravity::LEFT);
        widget.set_vertical_gravity(Gravity::TOP);
        assert!(!widget.needs_layout());
    }

    #[test]
    fn test_from_attributes() {
        let attrs = FlowAttributes {
            orientation: 1,
            gravity: Gravity::CENTER.bits() as i32,
            padding: Padding::all(3),
        };
        let widget = AutoFlowLayout::from_attributes(&attrs);
        assert_eq!(widget.orientation(), Orientation::Vertical);
        assert_eq!(widget.gravity(), Gravity::CENTER);
        assert_eq!(widget.padding(), Padding::all(3));
    }

    #[test]
    fn test_from_attributes_without_gravity_keeps_default() {
        let widget = AutoFlowLayout::from_attributes(&FlowAttributes::default());
        assert_eq!(widget.gravity(), AutoFlowLayout::DEFAULT_GRAVITY);
    }
}
