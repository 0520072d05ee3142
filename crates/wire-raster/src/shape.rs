//! Wireframe triangle primitives.
//!
//! A [`Tri3`] lives in world space; projecting it with a composed
//! world-to-screen matrix yields a [`Tri2`] of integer pixel corners,
//! which draws itself as three edges (and optionally corner markers)
//! into a canvas.
//!
//! # Example
//!
//! ```rust
//! use wire_camera::Camera;
//! use wire_core::{Canvas, Rgb};
//! use wire_math::Vec3;
//! use wire_raster::Tri3;
//!
//! let mut canvas = Canvas::new(100, 100)?;
//! let tri = Tri3::new(
//!     Vec3::new(-1.0, 0.0, -3.0),
//!     Vec3::new(0.0, 1.0, -3.0),
//!     Vec3::new(1.0, 0.0, -3.0),
//! );
//! let m = Camera::default().world_to_screen(100, 100);
//! tri.project(&m).draw(&mut canvas, Rgb::RED);
//! # Ok::<(), wire_core::Error>(())
//! ```

use crate::{draw_dot, draw_line};
use wire_core::{Canvas, Rgb};
use wire_math::{round_half_up, Mat4, Vec3, Vec4};

/// Projects a single world-space point to pixel coordinates.
///
/// Applies the matrix to the homogeneous lift of `p`, collapses the
/// perspective with the homogeneous divide and rounds half-up. A point
/// on the camera plane (w = 0) saturates to coordinates far outside
/// any real canvas; see [`wire_math::round_half_up`].
#[inline]
pub fn project_point(m: &Mat4, p: Vec3) -> (i32, i32) {
    let s = m.transform(Vec4::from_point(p)).homogeneous_divide();
    (round_half_up(s.x), round_half_up(s.y))
}

/// A triangle in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tri3 {
    /// First corner
    pub a: Vec3,
    /// Second corner
    pub b: Vec3,
    /// Third corner
    pub c: Vec3,
}

impl Tri3 {
    /// Creates a triangle from three world-space corners.
    #[inline]
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Projects the triangle to screen space with the given
    /// world-to-screen matrix.
    ///
    /// Each corner is transformed, divided and rounded independently.
    /// No clipping happens: a corner behind the camera has negative w
    /// and flips through the eye point instead of being discarded.
    pub fn project(&self, m: &Mat4) -> Tri2 {
        Tri2::new(
            project_point(m, self.a),
            project_point(m, self.b),
            project_point(m, self.c),
        )
    }
}

/// A triangle in screen space with integer pixel corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tri2 {
    /// First corner (x, y)
    pub a: (i32, i32),
    /// Second corner (x, y)
    pub b: (i32, i32),
    /// Third corner (x, y)
    pub c: (i32, i32),
}

impl Tri2 {
    /// Creates a triangle from three pixel corners.
    #[inline]
    pub const fn new(a: (i32, i32), b: (i32, i32), c: (i32, i32)) -> Self {
        Self { a, b, c }
    }

    /// Draws the triangle's three edges as a wireframe.
    pub fn draw(&self, canvas: &mut Canvas, color: Rgb) {
        draw_line(canvas, self.a.0, self.a.1, self.b.0, self.b.1, color);
        draw_line(canvas, self.b.0, self.b.1, self.c.0, self.c.1, color);
        draw_line(canvas, self.c.0, self.c.1, self.a.0, self.a.1, color);
    }

    /// Draws a dot marker on each corner.
    pub fn draw_corners(&self, canvas: &mut Canvas, color: Rgb) {
        draw_dot(canvas, self.a.0, self.a.1, color);
        draw_dot(canvas, self.b.0, self.b.1, color);
        draw_dot(canvas, self.c.0, self.c.1, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire_camera::Camera;

    #[test]
    fn test_project_point_identity() {
        let p = project_point(&Mat4::IDENTITY, Vec3::new(3.4, 5.5, -1.0));
        assert_eq!(p, (3, 6));
    }

    #[test]
    fn test_project_point_perspective() {
        let m = Camera::default().world_to_screen(100, 100);
        assert_eq!(project_point(&m, Vec3::new(2.0, 1.0, -2.0)), (100, 25));
    }

    #[test]
    fn test_tri3_project() {
        let tri = Tri3::new(
            Vec3::new(-1.0, 0.0, -3.0),
            Vec3::new(0.0, 1.0, -3.0),
            Vec3::new(1.0, 0.0, -3.0),
        );
        let m = Camera::default().world_to_screen(100, 100);
        let t = tri.project(&m);
        assert_eq!(t, Tri2::new((33, 50), (50, 33), (67, 50)));
    }

    #[test]
    fn test_tri2_draw_edges() {
        let mut canvas = Canvas::new(8, 8).unwrap();
        let t = Tri2::new((1, 1), (5, 1), (1, 4));
        t.draw(&mut canvas, Rgb::GREEN);
        // Corners sit on two edges each.
        assert_eq!(canvas.get(1, 1), Some(Rgb::GREEN));
        assert_eq!(canvas.get(5, 1), Some(Rgb::GREEN));
        assert_eq!(canvas.get(1, 4), Some(Rgb::GREEN));
        // Top edge and left edge interiors.
        assert_eq!(canvas.get(3, 1), Some(Rgb::GREEN));
        assert_eq!(canvas.get(1, 2), Some(Rgb::GREEN));
        // Interior stays empty: wireframe only.
        assert_eq!(canvas.get(2, 2), Some(Rgb::BLACK));
        assert_eq!(canvas.get(3, 2), Some(Rgb::BLACK));
    }

    #[test]
    fn test_tri2_draw_corners() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        let t = Tri2::new((5, 5), (15, 5), (10, 15));
        t.draw_corners(&mut canvas, Rgb::RED);
        assert_eq!(canvas.get(5, 5), Some(Rgb::RED));
        assert_eq!(canvas.get(15, 5), Some(Rgb::RED));
        assert_eq!(canvas.get(10, 15), Some(Rgb::RED));
        // Marker tip two pixels left of a corner.
        assert_eq!(canvas.get(3, 5), Some(Rgb::RED));
    }

    #[test]
    fn test_tri3_project_behind_camera_flips() {
        // A corner behind the eye has negative w and mirrors through
        // the camera center; drawing it must not panic.
        let tri = Tri3::new(
            Vec3::new(-1.0, 0.0, -3.0),
            Vec3::new(0.0, 1.0, 2.0),
            Vec3::new(1.0, 0.0, -3.0),
        );
        let m = Camera::default().world_to_screen(100, 100);
        let t = tri.project(&m);
        assert_eq!(t.b, (50, 75));
        let mut canvas = Canvas::new(100, 100).unwrap();
        t.draw(&mut canvas, Rgb::WHITE);
    }
}
