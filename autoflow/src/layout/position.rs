//! Provisional child positions recorded during a layout pass.

/// Where a visible child will go, before gravity is applied.
///
/// `left`/`top` are the margin-adjusted leading edge on the primary axis and
/// the line's band edge on the cross axis. `line` is the row (horizontal) or
/// column (vertical) the child was assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionRecord {
    pub left: i32,
    pub top: i32,
    pub line: usize,
}

impl PositionRecord {
    #[inline]
    pub const fn new(left: i32, top: i32, line: usize) -> Self {
        Self { left, top, line }
    }
}
