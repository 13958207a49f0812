//! Sample scene: a column-wrapping container full of button-sized children.
//!
//! Run with: `cargo run -p autoflow --bin autoflow-demo -- --help`

use std::fmt::Write as _;

use crate::gravity::Gravity;
use crate::layout::{FlowChild, LeafView, Orientation};
use crate::widget::AutoFlowLayout;

/// Approximate glyph advance used to size button labels.
pub const CHAR_WIDTH: i32 = 8;
/// Horizontal padding inside a button, both sides together.
pub const BUTTON_PADDING: i32 = 24;
pub const BUTTON_HEIGHT: i32 = 40;

/// A button-like leaf sized from its label, centered in its line's band.
pub fn button(label: impl Into<String>) -> LeafView {
    let label = label.into();
    let width = label.chars().count() as i32 * CHAR_WIDTH + BUTTON_PADDING;
    LeafView::new(label, width, BUTTON_HEIGHT).gravity(Gravity::CENTER)
}

/// `count` buttons labelled `child0`, `child1`, ...
pub fn sample_children(count: usize) -> Vec<LeafView> {
    (0..count).map(|i| button(format!("child{i}"))).collect()
}

/// Vertical container with everything centered.
pub fn sample_container() -> AutoFlowLayout {
    let mut flow = AutoFlowLayout::new();
    flow.set_orientation(Orientation::Vertical);
    flow.set_gravity(Gravity::CENTER);
    flow
}

/// One line per child: label and final bounds, or `gone`.
pub fn describe(children: &[LeafView]) -> String {
    let mut out = String::new();
    for child in children {
        match child.bounds() {
            Some(b) if !child.is_gone() => {
                let _ = writeln!(
                    out,
                    "{:<12} x={:<5} y={:<5} w={:<5} h={}",
                    child.label, b.x, b.y, b.width, b.height
                );
            }
            _ => {
                let _ = writeln!(out, "{:<12} gone", child.label);
            }
        }
    }
    out
}
