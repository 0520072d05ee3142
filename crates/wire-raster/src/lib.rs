//! # wire-raster
//!
//! Dot, line and wireframe-triangle rasterization.
//!
//! This crate turns projected geometry into pixels. Everything here
//! draws with a single color, no anti-aliasing and no filling: the
//! output is pure wireframe.
//!
//! # Modules
//!
//! - [`draw`] - Dot markers and line segments
//! - [`shape`] - World-space and screen-space triangles
//!
//! # Example
//!
//! ```rust
//! use wire_core::{Canvas, Rgb};
//! use wire_raster::{draw_dot, draw_line};
//!
//! let mut canvas = Canvas::new(64, 64)?;
//!
//! // A marker on a corner, then an edge leaving it.
//! draw_dot(&mut canvas, 10, 10, Rgb::YELLOW);
//! draw_line(&mut canvas, 10, 10, 52, 30, Rgb::YELLOW);
//! # Ok::<(), wire_core::Error>(())
//! ```
//!
//! # Coordinate Handling
//!
//! All entry points take signed pixel coordinates and silently drop
//! anything outside the canvas, so callers can pass projected points
//! without pre-clipping. See [`wire_core::Canvas::set`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod draw;
pub mod shape;

pub use draw::{draw_dot, draw_line};
pub use shape::{project_point, Tri2, Tri3};
