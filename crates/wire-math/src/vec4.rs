//! Homogeneous 4D vector type.
//!
//! [`Vec4`] carries a point through the transform pipeline in
//! homogeneous coordinates. A world-space point enters with `w = 1`
//! via [`Vec4::from_point`]; after the full world-to-screen transform
//! the perspective distortion sits in `w` and is collapsed with
//! [`Vec4::homogeneous_divide`].
//!
//! # Usage
//!
//! ```rust
//! use wire_math::{Vec3, Vec4};
//!
//! let p = Vec4::from_point(Vec3::new(2.0, 1.0, -2.0));
//! assert_eq!(p.w, 1.0);
//! ```

use crate::Vec3;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// A vector in homogeneous coordinates.
///
/// Dividing x, y, z by w yields cartesian coordinates; this is what
/// lets perspective projection be expressed as a linear matrix
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec4 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
    /// Homogeneous component
    pub w: f64,
}

impl Vec4 {
    /// Zero vector (0, 0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new vector from raw homogeneous components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Lifts a cartesian point to homogeneous coordinates with `w = 1`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wire_math::{Vec3, Vec4};
    ///
    /// let p = Vec4::from_point(Vec3::new(1.0, 2.0, 3.0));
    /// assert_eq!(p, Vec4::new(1.0, 2.0, 3.0, 1.0));
    /// ```
    #[inline]
    pub const fn from_point(p: Vec3) -> Self {
        Self::new(p.x, p.y, p.z, 1.0)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Drops the homogeneous component.
    #[inline]
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Collapses the homogeneous component: divides x, y, z by w and
    /// sets w to 1, yielding the cartesian result of a perspective
    /// transform.
    ///
    /// Unchecked precondition: `w != 0`. A point at `w = 0` (on the
    /// camera plane after projection) divides by zero and yields
    /// infinite or NaN components, which downstream rasterization
    /// discards as out of bounds.
    #[inline]
    pub fn homogeneous_divide(self) -> Self {
        Self::new(self.x / self.w, self.y / self.w, self.z / self.w, 1.0)
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// Converts to glam DVec4.
    #[inline]
    pub fn to_glam(self) -> glam::DVec4 {
        glam::DVec4::new(self.x, self.y, self.z, self.w)
    }

    /// Creates from glam DVec4.
    #[inline]
    pub fn from_glam(v: glam::DVec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

// Indexing
impl Index<usize> for Vec4 {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4 index out of bounds: {}", i),
        }
    }
}

// Vec4 + Vec4
impl Add for Vec4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

// Vec4 - Vec4
impl Sub for Vec4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

// Vec4 * f64
impl Mul<f64> for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl From<[f64; 4]> for Vec4 {
    #[inline]
    fn from(a: [f64; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec4> for [f64; 4] {
    #[inline]
    fn from(v: Vec4) -> [f64; 4] {
        v.to_array()
    }
}

impl From<glam::DVec4> for Vec4 {
    #[inline]
    fn from(v: glam::DVec4) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec4> for glam::DVec4 {
    #[inline]
    fn from(v: Vec4) -> glam::DVec4 {
        v.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec4_from_point() {
        let p = Vec4::from_point(Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(p, Vec4::new(4.0, 5.0, 6.0, 1.0));
    }

    #[test]
    fn test_vec4_homogeneous_divide() {
        let v = Vec4::new(200.0, 50.0, -2.0, 2.0);
        let d = v.homogeneous_divide();
        assert_eq!(d, Vec4::new(100.0, 25.0, -1.0, 1.0));
    }

    #[test]
    fn test_vec4_divide_keeps_unit_w() {
        let v = Vec4::from_point(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v.homogeneous_divide(), v);
    }

    #[test]
    fn test_vec4_divide_by_zero_w() {
        let v = Vec4::new(1.0, -1.0, 0.0, 0.0);
        let d = v.homogeneous_divide();
        assert!(!d.is_finite());
        assert!(d.x.is_infinite());
    }

    #[test]
    fn test_vec4_truncate() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.truncate(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_vec4_ops() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);

        assert_eq!(a + b, Vec4::new(6.0, 8.0, 10.0, 12.0));
        assert_eq!(b - a, Vec4::new(4.0, 4.0, 4.0, 4.0));
        assert_eq!(a * 2.0, Vec4::new(2.0, 4.0, 6.0, 8.0));
    }

    #[test]
    fn test_vec4_index() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v[3], 4.0);
        v[0] = 9.0;
        assert_eq!(v.x, 9.0);
    }
}
