//! Gravity resolution: turning leftover space into a position shift.
//!
//! Both functions only look at one axis of the gravity mask. A non-positive
//! leftover never moves anything, so an over-full line stays where the cursor
//! put it.

use crate::gravity::Gravity;

use super::position::PositionRecord;

/// Shift `pos.left` by the share of `leftover` the horizontal gravity asks for.
#[inline]
pub fn shift_horizontal(pos: &mut PositionRecord, leftover: i32, gravity: Gravity) {
    pos.left = pos.left.saturating_add(offset(
        leftover,
        gravity.horizontal(),
        Gravity::RIGHT,
        Gravity::CENTER_HORIZONTAL,
    ));
}

/// Shift `pos.top` by the share of `leftover` the vertical gravity asks for.
#[inline]
pub fn shift_vertical(pos: &mut PositionRecord, leftover: i32, gravity: Gravity) {
    pos.top = pos.top.saturating_add(offset(
        leftover,
        gravity.vertical(),
        Gravity::BOTTOM,
        Gravity::CENTER_VERTICAL,
    ));
}

#[inline]
fn offset(leftover: i32, axis: Gravity, end: Gravity, center: Gravity) -> i32 {
    let leftover = leftover.max(0);
    if axis == end {
        leftover
    } else if axis == center {
        leftover / 2
    } else {
        0
    }
}
