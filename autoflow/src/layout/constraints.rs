//! Measurement constraints handed to children.
//!
//! The container only ever asks for "at most" measurements: a child may pick
//! any size up to the container's inner extent on each axis.

use crate::primitives::Size;
use super::length::Padding;

/// Bounds a child must respect when it measures itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConstraints {
    pub min_width: i32,
    pub max_width: i32,
    pub min_height: i32,
    pub max_height: i32,
}

impl LayoutConstraints {
    /// Create tight constraints (exact size required).
    #[inline]
    pub fn tight(width: i32, height: i32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// "At most" constraints on both axes. Negative extents clamp to zero.
    #[inline]
    pub fn at_most(max_width: i32, max_height: i32) -> Self {
        Self {
            min_width: 0,
            max_width: max_width.max(0),
            min_height: 0,
            max_height: max_height.max(0),
        }
    }

    /// Constrain a size to these bounds.
    #[inline(always)]
    pub fn constrain(&self, size: Size) -> Size {
        Size {
            width: size.width.clamp(self.min_width, self.max_width),
            height: size.height.clamp(self.min_height, self.max_height),
        }
    }

    /// Shrink constraints by padding.
    #[inline]
    pub fn deflate(&self, padding: &Padding) -> Self {
        Self {
            min_width: self.min_width.saturating_sub(padding.horizontal()).max(0),
            max_width: self.max_width.saturating_sub(padding.horizontal()).max(0),
            min_height: self.min_height.saturating_sub(padding.vertical()).max(0),
            max_height: self.max_height.saturating_sub(padding.vertical()).max(0),
        }
    }

    /// Get the biggest size that satisfies these constraints.
    #[inline]
    pub fn biggest(&self) -> Size {
        Size {
            width: self.max_width,
            height: self.max_height,
        }
    }
}
