//! Layout System for autoflow
//!
//! A wrapping flow container: children are placed along one axis and spill
//! onto new lines when the container runs out of room.
//!
//! # Architecture
//!
//! ```text
//! host children -> measure if needed -> wrap into lines -> gravity -> place()
//! ```
//!
//! The pass is stateless apart from the container's settings; provisional
//! positions never outlive a single call to [`FlowLayout::layout`].

pub mod child;
pub mod constraints;
pub mod elements;
pub mod flow;
pub mod length;
pub mod position;
pub mod resolver;

pub use child::{FlowChild, LayoutParams, Visibility};
pub use constraints::LayoutConstraints;
pub use elements::LeafView;
pub use flow::{FlowLayout, FlowSummary, Orientation};
pub use length::{Margins, Padding};
pub use position::PositionRecord;
