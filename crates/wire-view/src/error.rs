//! Error types for the windowed presenter.

use thiserror::Error;

/// Presenter error.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Window system or GPU initialization failure.
    #[error("window error: {0}")]
    Window(String),

    /// Canvas allocation failure (zero-sized window request).
    #[error("canvas error: {0}")]
    Canvas(#[from] wire_core::Error),
}

/// Result type for presenter operations.
pub type ViewResult<T> = Result<T, ViewError>;
