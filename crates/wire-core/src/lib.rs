//! # wire-core
//!
//! Core types for wireframe rendering.
//!
//! This crate provides the foundational types the renderer draws into
//! and the outer layers consume:
//!
//! - [`Canvas`] - owned RGB pixel buffer, row-major, top-left origin
//! - [`Rgb`] - 8-bit RGB color with named constants
//! - [`Error`], [`Result`] - construction failure reporting
//!
//! ## Crate Structure
//!
//! This crate is the foundation of the workspace and has no internal
//! dependencies:
//!
//! ```text
//! wire-core (this crate)
//!    ^
//!    |
//!    +-- wire-raster (draws into Canvas)
//!    +-- wire-io (encodes/decodes Canvas)
//!    +-- wire-view (presents Canvas in a window)
//! ```
//!
//! ## Bounds Policy
//!
//! Pixel writes outside the canvas are silently dropped, uniformly.
//! With no clipping in the pipeline this is a routine event, not an
//! error; see [`canvas`] for the full contract.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod canvas;
pub mod error;
pub mod pixel;

// Re-exports for convenience
pub use canvas::*;
pub use error::*;
pub use pixel::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use wire_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::error::{Error, Result};
    pub use crate::pixel::Rgb;
}
