//! # wire-math
//!
//! Math primitives for wireframe rendering.
//!
//! This crate provides the geometric algebra the render pipeline is
//! built from:
//!
//! - [`Vec3`] - cartesian points and directions in world space
//! - [`Vec4`] - homogeneous coordinates through the transform pipeline
//! - [`Mat4`] - 4x4 homogeneous transform matrices
//! - [`round_half_up`] - the pixel-coordinate rounding rule
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column
//! vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! In a product `m * n` the right operand is applied to vectors first;
//! composite transforms read outermost-to-innermost left to right.
//!
//! Everything is `f64`. The rounding contract
//! (`round_half_up(123.4999999) == 123`) is not representable in
//! `f32`, where that literal already collapses to `123.5`.
//!
//! # Usage
//!
//! ```rust
//! use wire_math::{Mat4, Vec3, Vec4};
//!
//! let shift = Mat4::translation(Vec3::new(0.0, 0.0, -5.0));
//! let p = shift.transform(Vec4::from_point(Vec3::ZERO));
//! assert_eq!(p.z, -5.0);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - conversions for interop with glam-based code
//!
//! # Used By
//!
//! - `wire-camera` - camera/projection/screen matrix construction
//! - `wire-raster` - projecting and rounding primitives to pixels

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat4;
mod round;
mod vec3;
mod vec4;

pub use mat4::*;
pub use round::*;
pub use vec3::*;
pub use vec4::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat4 as GlamMat4, DVec3 as GlamVec3, DVec4 as GlamVec4};
}
