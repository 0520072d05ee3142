//! # wire-camera
//!
//! Camera model and world-to-screen matrix construction.
//!
//! This crate derives the single 4x4 matrix that carries world-space
//! points all the way to pixel coordinates. The pipeline composes
//! three stages, innermost first:
//!
//! 1. **view** - world coordinates become camera-relative coordinates
//!    with the eye at the origin looking down -z
//! 2. **projection** - camera coordinates are projected onto the near
//!    plane, with the perspective divisor moved into w
//! 3. **screen** - the near-plane rectangle is mapped to pixel
//!    coordinates with y growing downward
//!
//! # Usage
//!
//! ```rust
//! use wire_camera::Camera;
//! use wire_math::{Vec3, Vec4};
//!
//! let cam = Camera::default();
//! let m = cam.world_to_screen(100, 100);
//! let p = m.transform(Vec4::from_point(Vec3::new(2.0, 1.0, -2.0)));
//! let s = p.homogeneous_divide();
//! assert_eq!((s.x, s.y), (100.0, 25.0));
//! ```
//!
//! # Failure Semantics
//!
//! Nothing in this crate returns errors. Degenerate configurations
//! (zero-length up, up parallel to the look direction, zero aspect
//! ratio) propagate NaN or infinity through the matrices instead of
//! being detected; the rasterizer drops the resulting coordinates as
//! out of bounds.
//!
//! # Dependencies
//!
//! - [`wire-math`] - vectors and homogeneous matrices
//!
//! # Used By
//!
//! - `wire-raster` - projecting primitives with the composed matrix
//! - `wire-cli` - demo scenes

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::f64::consts::FRAC_PI_2;
use wire_math::{Mat4, Vec3};

/// A view into the scene, used to produce a 2D image from 3D world
/// geometry.
///
/// # Coordinate System
///
/// The camera's own basis is right-handed:
///
/// - origin at `eye`
/// - positive y along the corrected `up`
/// - negative z along the look direction (the camera looks down -z)
/// - positive x to the right
///
/// # Lifecycle
///
/// All fields are public and meant to be mutated between frames (move
/// the eye, track a window's aspect ratio). Nothing is cached:
/// [`Camera::world_to_screen`] recomputes the full matrix on every
/// call, so a mutation can never leave a stale transform behind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Position of the eye to look from.
    pub eye: Vec3,

    /// Point the eye looks at. Need not be unit distance from the eye.
    pub at: Vec3,

    /// Orientation hint. Need not be perpendicular to the look
    /// direction or normalized; the effective up is re-derived as if
    /// this were projected onto the plane normal to the look
    /// direction.
    pub up: Vec3,

    /// Distance from the eye to the projection plane.
    pub near: f64,

    /// Distance from the eye to the far plane. Informational: it
    /// shapes the far frustum rectangle but no transform uses it.
    pub far: f64,

    /// Horizontal field of view in radians.
    pub fov: f64,

    /// Width-to-height aspect ratio.
    pub aspect: f64,
}

impl Default for Camera {
    /// The canonical camera: at the origin, looking down -z, y up,
    /// near 1, far 100, 90 degree field of view, square aspect.
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            at: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::Y,
            near: 1.0,
            far: 100.0,
            fov: FRAC_PI_2,
            aspect: 1.0,
        }
    }
}

impl Camera {
    /// Derives the orthonormal right-handed basis (x, y, z) of the
    /// camera's coordinate system.
    ///
    /// `z = normalize(eye - at)` points backward along the view,
    /// `x = normalize(up x z)` points right, and `y = z x x` is the
    /// corrected up: re-derived rather than taken from the raw `up`
    /// field, which need not be perpendicular to the look direction.
    ///
    /// If `up` is parallel to the look direction the cross product
    /// vanishes and `x` normalizes to NaN. Accepted degenerate input,
    /// not detected here.
    pub fn axes(&self) -> (Vec3, Vec3, Vec3) {
        let z = (self.eye - self.at).normalize();
        let x = self.up.cross(z).normalize();
        let y = z.cross(x);
        (x, y, z)
    }

    /// Builds the matrix that transforms world coordinates into the
    /// camera's view coordinates.
    ///
    /// Composed as `basis * translation(-eye)`: points are first
    /// translated so the eye sits at the origin, then rotated into the
    /// camera basis.
    pub fn view_transform(&self) -> Mat4 {
        let (x, y, z) = self.axes();
        Mat4::from_basis(x, y, z) * Mat4::translation(-self.eye)
    }

    /// Builds the perspective projection matrix for the near plane.
    ///
    /// x, y and z are scaled by `near` and the negated z is factored
    /// out into w. After the homogeneous divide, x and y end up scaled
    /// by `near / -z` (true perspective foreshortening) and z is the
    /// constant `-near`.
    pub fn projection_transform(&self) -> Mat4 {
        let n = self.near;
        Mat4::from_rows([
            [n, 0.0, 0.0, 0.0],
            [0.0, n, 0.0, 0.0],
            [0.0, 0.0, n, 0.0],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// Computes the camera's view frustum dimensions.
    pub fn frustum(&self) -> Frustum {
        let s = self.fov.sin();
        let near_width = 2.0 * s * self.near;
        let far_width = 2.0 * s * self.far;
        Frustum {
            near_width,
            near_height: near_width / self.aspect,
            far_width,
            far_height: far_width / self.aspect,
        }
    }

    /// Builds the full world-to-screen matrix for a target surface of
    /// `width` x `height` pixels.
    ///
    /// Composed right-to-left (the right factor acts first):
    ///
    /// ```text
    /// screen_transform * projection_transform * view_transform
    /// ```
    ///
    /// Apply it to a homogeneous point, then collapse with
    /// [`wire_math::Vec4::homogeneous_divide`] to get pixel
    /// coordinates.
    pub fn world_to_screen(&self, width: u32, height: u32) -> Mat4 {
        self.frustum().screen_transform(width, height)
            * self.projection_transform()
            * self.view_transform()
    }
}

// ============================================================================
// Frustum
// ============================================================================

/// The pyramidal view volume of a camera, described by its near and
/// far rectangles.
///
/// The near rectangle lies on the projection plane and is what the
/// screen transform maps to pixels. The far rectangle is derived for
/// completeness but unused by the transforms. Derived from a camera
/// via [`Camera::frustum`]:
///
/// - `near_width = 2 * sin(fov) * near`
/// - `near_height = near_width / aspect`
///
/// and symmetrically for the far plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Width of the near rectangle.
    pub near_width: f64,
    /// Height of the near rectangle.
    pub near_height: f64,
    /// Width of the far rectangle.
    pub far_width: f64,
    /// Height of the far rectangle.
    pub far_height: f64,
}

impl Frustum {
    /// Builds the matrix that maps the near rectangle (centered on the
    /// origin after projection) to screen coordinates.
    ///
    /// The upper-left corner of the near rectangle lands on (0, 0) and
    /// the bottom-right on (width, height), with the y axis flipped so
    /// screen y grows downward. Composed as a scale-and-flip times a
    /// translation that moves the rectangle's corner to the origin
    /// (translation applied first).
    ///
    /// If the surface aspect ratio differs from the camera's the image
    /// is distorted, not letterboxed.
    pub fn screen_transform(&self, width: u32, height: u32) -> Mat4 {
        let w = f64::from(width);
        let h = f64::from(height);
        let scale = Mat4::from_rows([
            [w / self.near_width, 0.0, 0.0, 0.0],
            [0.0, -h / self.near_height, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let center = Mat4::translation(Vec3::new(
            self.near_width / 2.0,
            -self.near_height / 2.0,
            0.0,
        ));
        scale * center
    }
}
