//! Spacing types: container padding and child margins.

use serde::{Deserialize, Serialize};

/// Padding around content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Padding {
    /// Create padding with explicit values for each side.
    pub fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self { top, right, bottom, left }
    }

    /// Uniform padding on all sides.
    pub fn all(value: i32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Symmetric padding (horizontal, vertical).
    pub fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Total horizontal padding.
    pub fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Total vertical padding.
    pub fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }
}

/// Margins around a single child, outside its bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Margins {
    pub const ZERO: Self = Self { top: 0, right: 0, bottom: 0, left: 0 };

    pub fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self { top, right, bottom, left }
    }

    pub fn all(value: i32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Left plus right margin.
    pub fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Top plus bottom margin.
    pub fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_totals() {
        let p = Padding::new(1, 2, 3, 4);
        assert_eq!(p.horizontal(), 6);
        assert_eq!(p.vertical(), 4);
        assert_eq!(Padding::symmetric(5, 7), Padding::new(7, 5, 7, 5));
    }

    #[test]
    fn test_margins_totals() {
        let m = Margins::all(3);
        assert_eq!(m.horizontal(), 6);
        assert_eq!(m.vertical(), 6);
        assert_eq!(Margins::default(), Margins::ZERO);
    }
}
