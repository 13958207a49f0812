//! Gravity bit constants.
//!
//! These follow the host toolkit's bit layout: each axis gets a nibble with
//! "specified", "pull before" and "pull after" bits, and `START`/`END` add the
//! relative-direction flag on top of `LEFT`/`RIGHT`. Layout code only ever
//! looks at gravity through [`Gravity::horizontal`] and [`Gravity::vertical`],
//! so `START` resolves like `LEFT` and `END` like `RIGHT`.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FlowError;

const AXIS_SPECIFIED: u32 = 0x0001;
const AXIS_PULL_BEFORE: u32 = 0x0002;
const AXIS_PULL_AFTER: u32 = 0x0004;
const AXIS_X_SHIFT: u32 = 0;
const AXIS_Y_SHIFT: u32 = 4;
const RELATIVE_LAYOUT_DIRECTION: u32 = 0x0080_0000;

/// Alignment bit-mask for a container or a child.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gravity(u32);

impl Gravity {
    pub const NO_GRAVITY: Self = Self(0);

    pub const LEFT: Self = Self((AXIS_PULL_BEFORE | AXIS_SPECIFIED) << AXIS_X_SHIFT);
    pub const RIGHT: Self = Self((AXIS_PULL_AFTER | AXIS_SPECIFIED) << AXIS_X_SHIFT);
    pub const CENTER_HORIZONTAL: Self = Self(AXIS_SPECIFIED << AXIS_X_SHIFT);
    pub const FILL_HORIZONTAL: Self = Self(Self::LEFT.0 | Self::RIGHT.0);

    pub const TOP: Self = Self((AXIS_PULL_BEFORE | AXIS_SPECIFIED) << AXIS_Y_SHIFT);
    pub const BOTTOM: Self = Self((AXIS_PULL_AFTER | AXIS_SPECIFIED) << AXIS_Y_SHIFT);
    pub const CENTER_VERTICAL: Self = Self(AXIS_SPECIFIED << AXIS_Y_SHIFT);
    pub const FILL_VERTICAL: Self = Self(Self::TOP.0 | Self::BOTTOM.0);

    pub const CENTER: Self = Self(Self::CENTER_VERTICAL.0 | Self::CENTER_HORIZONTAL.0);
    pub const FILL: Self = Self(Self::FILL_VERTICAL.0 | Self::FILL_HORIZONTAL.0);

    pub const START: Self = Self(RELATIVE_LAYOUT_DIRECTION | Self::LEFT.0);
    pub const END: Self = Self(RELATIVE_LAYOUT_DIRECTION | Self::RIGHT.0);

    pub const HORIZONTAL_GRAVITY_MASK: Self =
        Self((AXIS_SPECIFIED | AXIS_PULL_BEFORE | AXIS_PULL_AFTER) << AXIS_X_SHIFT);
    pub const VERTICAL_GRAVITY_MASK: Self =
        Self((AXIS_SPECIFIED | AXIS_PULL_BEFORE | AXIS_PULL_AFTER) << AXIS_Y_SHIFT);
    pub const RELATIVE_HORIZONTAL_GRAVITY_MASK: Self =
        Self(RELATIVE_LAYOUT_DIRECTION | Self::HORIZONTAL_GRAVITY_MASK.0);

    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Horizontal component, with the relative-direction flag stripped.
    #[inline]
    pub const fn horizontal(self) -> Self {
        Self(self.0 & Self::HORIZONTAL_GRAVITY_MASK.0)
    }

    /// Vertical component.
    #[inline]
    pub const fn vertical(self) -> Self {
        Self(self.0 & Self::VERTICAL_GRAVITY_MASK.0)
    }

    /// Horizontal component including the relative-direction flag.
    #[inline]
    pub const fn relative_horizontal(self) -> Self {
        Self(self.0 & Self::RELATIVE_HORIZONTAL_GRAVITY_MASK.0)
    }

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Gravity {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Gravity {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Gravity {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for Gravity {
    type Output = Self;
    fn not(self) -> Self {
        Self(!self.0)
    }
}

/// Names accepted by [`Gravity::from_str`], most specific first so that
/// formatting picks `center` over `center_vertical|center_horizontal`.
const NAMES: &[(&str, Gravity)] = &[
    ("fill", Gravity::FILL),
    ("center", Gravity::CENTER),
    ("fill_vertical", Gravity::FILL_VERTICAL),
    ("fill_horizontal", Gravity::FILL_HORIZONTAL),
    ("start", Gravity::START),
    ("end", Gravity::END),
    ("top", Gravity::TOP),
    ("bottom", Gravity::BOTTOM),
    ("center_vertical", Gravity::CENTER_VERTICAL),
    ("left", Gravity::LEFT),
    ("right", Gravity::RIGHT),
    ("center_horizontal", Gravity::CENTER_HORIZONTAL),
];

impl FromStr for Gravity {
    type Err = FlowError;

    /// Parse `|`-separated gravity names, e.g. `top|center_horizontal`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut gravity = Gravity::NO_GRAVITY;
        for part in s.split('|').map(str::trim).filter(|p| !p.is_empty()) {
            let name = part.to_ascii_lowercase();
            let (_, bits) = NAMES
                .iter()
                .find(|(n, _)| *n == name)
                .ok_or_else(|| FlowError::UnknownGravity(part.to_string()))?;
            gravity |= *bits;
        }
        Ok(gravity)
    }
}

impl fmt::Display for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("no_gravity");
        }

        let mut parts = Vec::new();
        let mut vertical_done = false;
        let mut horizontal_done = false;
        for (name, bits) in NAMES {
            let touches_vertical = !bits.vertical().is_empty();
            let touches_horizontal = !bits.relative_horizontal().is_empty();
            if (touches_vertical && vertical_done) || (touches_horizontal && horizontal_done) {
                continue;
            }
            let matches_vertical = !touches_vertical || self.vertical() == bits.vertical();
            let matches_horizontal =
                !touches_horizontal || self.relative_horizontal() == bits.relative_horizontal();
            if matches_vertical && matches_horizontal {
                parts.push(*name);
                vertical_done |= touches_vertical;
                horizontal_done |= touches_horizontal;
            }
        }

        if parts.is_empty() {
            write!(f, "{:#x}", self.0)
        } else {
            f.write_str(&parts.join("|"))
        }
    }
}

impl fmt::Debug for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gravity({self})")
    }
}
