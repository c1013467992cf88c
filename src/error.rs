//! Crate-wide error type.
//!
//! Construction of an [`Animation`](crate::components::animation::Animation)
//! is the only engine operation that can fail. Everything else that returns a
//! [`Result`] belongs to the collaborators around it: loading frames from a
//! folder, reading the INI configuration, or writing output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the animation engine and its collaborators.
#[derive(Debug, Error)]
pub enum FlipbookError {
    /// Arguments that cannot produce a valid animation (no frames, zero interval, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A frame folder or output file could not be accessed.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An image file could not be decoded or encoded.
    #[error("image error on {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The folder exists but holds no file with an allowed extension.
    #[error("no frames found in {}", .0.display())]
    NoFrames(PathBuf),

    #[error("config error: {0}")]
    Config(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FlipbookError>;
