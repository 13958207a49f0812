//! Error types for loading container configuration.
//!
//! Layout itself never fails; only reading declarative attributes does.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid attributes: {0}")]
    Attributes(#[from] serde_json::Error),

    #[error("unknown gravity name: {0}")]
    UnknownGravity(String),

    #[error("unknown orientation: {0}")]
    UnknownOrientation(String),
}

pub type Result<T> = std::result::Result<T, FlowError>;
