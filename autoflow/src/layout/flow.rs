//! Flow layout - wrapping rows or columns.
//!
//! Children are laid out along the primary axis until the next one would run
//! past the inner edge, then the line is closed and a new one starts further
//! along the cross axis. Gravity is applied in two passes per line, then once
//! more over all lines:
//!
//! 1. container gravity moves a finished line along the primary axis,
//! 2. each child's own gravity places it inside its line's band,
//! 3. after the last line, container gravity moves all content along the
//!    cross axis.
//!
//! Positions live in a pass-local list and are committed to the children only
//! once every shift has been applied.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FlowError;
use crate::gravity::Gravity;
use crate::primitives::{Rect, Size};

use super::child::{FlowChild, LayoutParams};
use super::constraints::LayoutConstraints;
use super::length::Padding;
use super::position::PositionRecord;
use super::resolver::{shift_horizontal, shift_vertical};

// =========================================================================
// Orientation
// =========================================================================

/// Direction children flow in before wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Rows: children flow left to right, lines stack downwards.
    #[default]
    Horizontal,
    /// Columns: children flow top to bottom, lines stack rightwards.
    Vertical,
}

impl Orientation {
    /// Raw attribute value for [`Orientation::Horizontal`].
    pub const HORIZONTAL: i32 = 0;
    /// Raw attribute value for [`Orientation::Vertical`].
    pub const VERTICAL: i32 = 1;

    /// Resolve a raw attribute value. Anything other than `1` is horizontal.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            Self::VERTICAL => Orientation::Vertical,
            Self::HORIZONTAL => Orientation::Horizontal,
            other => {
                tracing::warn!("unknown orientation {}, using horizontal", other);
                Orientation::Horizontal
            }
        }
    }

    pub fn as_raw(self) -> i32 {
        match self {
            Orientation::Horizontal => Self::HORIZONTAL,
            Orientation::Vertical => Self::VERTICAL,
        }
    }
}

impl FromStr for Orientation {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "0" => Ok(Orientation::Horizontal),
            "vertical" | "1" => Ok(Orientation::Vertical),
            _ => Err(FlowError::UnknownOrientation(s.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

// =========================================================================
// FlowLayout
// =========================================================================

/// Outcome of one layout pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlowSummary {
    /// Number of children that received bounds.
    pub placed: usize,
    /// Number of lines (rows or columns) used.
    pub lines: usize,
}

/// A visible child's slot in the current pass.
#[derive(Debug, Clone, Copy)]
struct Entry {
    /// Index into the host's child slice.
    child: usize,
    size: Size,
    params: LayoutParams,
    pos: PositionRecord,
}

/// The wrapping layout pass for one container.
#[derive(Debug, Clone, Copy)]
pub struct FlowLayout {
    pub orientation: Orientation,
    pub gravity: Gravity,
    pub padding: Padding,
}

impl FlowLayout {
    pub fn new(orientation: Orientation, gravity: Gravity, padding: Padding) -> Self {
        Self { orientation, gravity, padding }
    }

    /// Lay out `children` inside a container of the given size.
    ///
    /// GONE children are skipped entirely. Every other child is measured if
    /// it has not been yet, then placed exactly once.
    pub fn layout<C: FlowChild>(&self, children: &mut [C], size: Size) -> FlowSummary {
        let inner = LayoutConstraints::tight(size.width, size.height)
            .deflate(&self.padding)
            .biggest();

        let mut entries = Vec::with_capacity(children.len());
        let lines = match self.orientation {
            Orientation::Horizontal => self.wrap_rows(children, inner, &mut entries),
            Orientation::Vertical => self.wrap_columns(children, inner, &mut entries),
        };

        for entry in &entries {
            let bounds = self.final_bounds(entry);
            tracing::trace!(
                "place child {} on line {} at {:?}",
                entry.child,
                entry.pos.line,
                bounds
            );
            children[entry.child].place(bounds);
        }

        tracing::debug!(
            "{} flow: placed {} children on {} lines in {}x{}",
            self.orientation,
            entries.len(),
            lines,
            inner.width,
            inner.height
        );

        FlowSummary {
            placed: entries.len(),
            lines,
        }
    }

    // =====================================================================
    // Horizontal
    // =====================================================================

    fn wrap_rows<C: FlowChild>(
        &self,
        children: &mut [C],
        inner: Size,
        entries: &mut Vec<Entry>,
    ) -> usize {
        let pad = self.padding;
        let mut cx = pad.left;
        let mut cy = pad.top;
        let mut line_height = 0;
        let mut line_used = 0;
        let mut row = 0;
        let mut row_start = 0;

        for (index, child) in children.iter_mut().enumerate() {
            if child.is_gone() {
                continue;
            }
            let size = measure_if_needed(child, inner);
            let params = *child.layout_params();
            let m = params.margins;

            let advance = size.width.saturating_add(m.horizontal());
            if cx.saturating_add(advance) > inner.width.saturating_add(pad.left)
                && entries.len() > row_start
            {
                self.finish_row(&mut entries[row_start..], inner.width, line_used, line_height);
                cx = pad.left;
                cy = cy.saturating_add(line_height);
                line_height = 0;
                line_used = 0;
                row += 1;
                row_start = entries.len();
            }

            cx = cx.saturating_add(m.left);
            entries.push(Entry {
                child: index,
                size,
                params,
                pos: PositionRecord::new(cx, cy, row),
            });
            line_height = line_height.max(size.height.saturating_add(m.vertical()));
            cx = cx.saturating_add(size.width).saturating_add(m.right);
            line_used = line_used.saturating_add(advance);
        }

        if entries.is_empty() {
            return 0;
        }

        self.finish_row(&mut entries[row_start..], inner.width, line_used, line_height);

        // Whole-content shift only; bands were settled per row.
        let content_height = pad.vertical().saturating_add(cy).saturating_add(line_height);
        for entry in entries.iter_mut() {
            shift_vertical(&mut entry.pos, inner.height.saturating_sub(content_height), self.gravity);
        }

        row + 1
    }

    /// Apply container gravity to a finished row, then each child's gravity
    /// inside the row's band.
    fn finish_row(&self, row: &mut [Entry], width: i32, used: i32, band: i32) {
        debug_assert!(row.windows(2).all(|w| w[0].pos.line == w[1].pos.line));

        for entry in row.iter_mut() {
            shift_horizontal(&mut entry.pos, width.saturating_sub(used), self.gravity);
        }
        for entry in row.iter_mut() {
            let leftover = band
                .saturating_sub(entry.size.height)
                .saturating_sub(entry.params.margins.vertical());
            shift_vertical(&mut entry.pos, leftover, entry.params.gravity);
        }

        tracing::debug!(
            "row {} closed: {} children, {}/{} wide, band {}",
            row.first().map_or(0, |e| e.pos.line),
            row.len(),
            used,
            width,
            band
        );
    }

    // =====================================================================
    // Vertical
    // =====================================================================

    fn wrap_columns<C: FlowChild>(
        &self,
        children: &mut [C],
        inner: Size,
        entries: &mut Vec<Entry>,
    ) -> usize {
        let pad = self.padding;
        let mut cx = pad.left;
        let mut cy = pad.top;
        let mut line_width = 0;
        let mut line_used = 0;
        let mut column = 0;
        let mut column_start = 0;

        for (index, child) in children.iter_mut().enumerate() {
            if child.is_gone() {
                continue;
            }
            let size = measure_if_needed(child, inner);
            let params = *child.layout_params();
            let m = params.margins;

            let advance = size.height.saturating_add(m.vertical());
            if cy.saturating_add(advance) > inner.height.saturating_add(pad.top)
                && entries.len() > column_start
            {
                self.finish_column(
                    &mut entries[column_start..],
                    inner.height,
                    line_used,
                    line_width,
                );
                cy = pad.top;
                cx = cx.saturating_add(line_width);
                line_width = 0;
                line_used = 0;
                column += 1;
                column_start = entries.len();
            }

            cy = cy.saturating_add(m.top);
            entries.push(Entry {
                child: index,
                size,
                params,
                pos: PositionRecord::new(cx, cy, column),
            });
            line_width = line_width.max(size.width.saturating_add(m.horizontal()));
            cy = cy.saturating_add(size.height).saturating_add(m.bottom);
            line_used = line_used.saturating_add(advance);
        }

        if entries.is_empty() {
            return 0;
        }

        self.finish_column(&mut entries[column_start..], inner.height, line_used, line_width);

        let content_width = pad.horizontal().saturating_add(cx).saturating_add(line_width);
        for entry in entries.iter_mut() {
            shift_horizontal(&mut entry.pos, inner.width.saturating_sub(content_width), self.gravity);
        }

        column + 1
    }

    /// Dual of [`Self::finish_row`].
    fn finish_column(&self, column: &mut [Entry], height: i32, used: i32, band: i32) {
        debug_assert!(column.windows(2).all(|w| w[0].pos.line == w[1].pos.line));

        for entry in column.iter_mut() {
            shift_vertical(&mut entry.pos, height.saturating_sub(used), self.gravity);
        }
        for entry in column.iter_mut() {
            let leftover = band
                .saturating_sub(entry.size.width)
                .saturating_sub(entry.params.margins.horizontal());
            shift_horizontal(&mut entry.pos, leftover, entry.params.gravity);
        }

        tracing::debug!(
            "column {} closed: {} children, {}/{} tall, band {}",
            column.first().map_or(0, |e| e.pos.line),
            column.len(),
            used,
            height,
            band
        );
    }

    // =====================================================================
    // Commit
    // =====================================================================

    /// Final child bounds. The record holds the margin-adjusted edge on the
    /// primary axis and the band edge on the cross axis. Edges saturate at
    /// the `i32` range.
    fn final_bounds(&self, entry: &Entry) -> Rect {
        let PositionRecord { left, top, .. } = entry.pos;
        let Size { width, height } = entry.size;
        let m = entry.params.margins;
        let (left, top) = match self.orientation {
            Orientation::Horizontal => (left, top.saturating_add(m.top)),
            Orientation::Vertical => (left.saturating_add(m.left), top),
        };
        Rect::from_ltrb(left, top, left.saturating_add(width), top.saturating_add(height))
    }
}

/// Measure a child against the inner extent unless it already has a size.
fn measure_if_needed<C: FlowChild>(child: &mut C, inner: Size) -> Size {
    if child.measured_size().is_empty() {
        child.measure(LayoutConstraints::at_most(inner.width, inner.height));
    }
    child.measured_size()
}

// =========================================================================
// Tests
// =========================================================================
