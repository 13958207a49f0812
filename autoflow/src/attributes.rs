//! Declarative container attributes.
//!
//! The same two attributes a layout file would carry (`orientation` and
//! `gravity`, both raw integers) plus the container padding. They are read
//! once, when the container is built.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::gravity::Gravity;
use crate::layout::{Orientation, Padding};

/// Attributes as they appear in a layout description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowAttributes {
    /// 0 = horizontal, 1 = vertical.
    pub orientation: i32,
    /// Raw gravity bits. Negative means "not set".
    pub gravity: i32,
    pub padding: Padding,
}

impl Default for FlowAttributes {
    fn default() -> Self {
        Self {
            orientation: Orientation::HORIZONTAL,
            gravity: -1,
            padding: Padding::default(),
        }
    }
}

impl FlowAttributes {
    /// Parse attributes from a JSON object. Missing keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read attributes from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let attrs = Self::from_json(&text)?;
        tracing::debug!("loaded flow attributes from {:?}: {:?}", path, attrs);
        Ok(attrs)
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_raw(self.orientation)
    }

    /// The gravity attribute, if one was given.
    pub fn gravity(&self) -> Option<Gravity> {
        u32::try_from(self.gravity).ok().map(Gravity::from_bits)
    }
}
