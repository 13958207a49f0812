//! autoflow: a wrapping row/column container.
//!
//! `AutoFlowLayout` arranges children along a primary axis and wraps them onto
//! additional rows (or columns) when they no longer fit, honoring child
//! margins, a container-wide gravity and each child's own gravity.
//!
//! # Usage
//!
//! Hosts implement [`FlowChild`] for their views (or use [`LeafView`]) and call
//! [`AutoFlowLayout::on_layout`] whenever the container is given a rectangle:
//!
//! ```
//! use autoflow::{AutoFlowLayout, Gravity, LeafView};
//!
//! let mut flow = AutoFlowLayout::new();
//! flow.set_gravity(Gravity::TOP | Gravity::CENTER_HORIZONTAL);
//!
//! let mut children: Vec<LeafView> =
//!     (0..3).map(|i| LeafView::new(format!("item{i}"), 20, 20)).collect();
//! flow.on_layout(true, 0, 0, 100, 100, &mut children);
//!
//! assert_eq!(children[0].bounds().map(|b| b.x), Some(20));
//! ```

// Core primitives
pub mod primitives;
pub mod gravity;
pub mod error;

// Layout system
pub mod layout;

// Container widget and its declarative attributes
pub mod attributes;
pub mod widget;

// Sample scene
pub mod demo;

pub use attributes::FlowAttributes;
pub use error::{FlowError, Result};
pub use gravity::Gravity;
pub use layout::{
    FlowChild, FlowLayout, FlowSummary, LayoutConstraints, LayoutParams, LeafView, Margins,
    Orientation, Padding, PositionRecord, Visibility,
};
pub use primitives::{Rect, Size};
pub use widget::AutoFlowLayout;
