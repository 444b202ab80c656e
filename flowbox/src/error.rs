//! Layout error types.
//!
//! Only configuration-time operations return these. A layout pass itself
//! never fails; it records [`LayoutWarning`](crate::layout::LayoutWarning)s
//! instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("malformed value {input:?}: {reason}")]
    MalformedValue { input: String, reason: &'static str },

    #[error("unknown {kind} keyword: {value:?}")]
    UnknownKeyword { kind: &'static str, value: String },

    #[error("container {container:?} shrinks its {axis} but has stretch children along it")]
    ShrinkStretchConflict { container: String, axis: &'static str },

    #[error("node {node:?} has negative padding")]
    NegativePadding { node: String },

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
