//! 4x4 homogeneous matrix type.
//!
//! [`Mat4`] is the linear operator of the render pipeline: camera,
//! projection and screen transforms are all `Mat4` values, combined by
//! multiplication and applied to [`Vec4`] points.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column
//! vectors**:
//!
//! ```text
//! | m00 m01 m02 m03 |   | x |
//! | m10 m11 m12 m13 | * | y |
//! | m20 m21 m22 m23 |   | z |
//! | m30 m31 m32 m33 |   | w |
//! ```
//!
//! Composition order follows from that: in `m * n` the right operand
//! acts on vectors first. See [`Mat4::mul_mat`].
//!
//! # Usage
//!
//! ```rust
//! use wire_math::{Mat4, Vec3, Vec4};
//!
//! let t = Mat4::translation(Vec3::new(1.0, 0.0, 0.0));
//! let p = t.transform(Vec4::from_point(Vec3::ZERO));
//! assert_eq!(p, Vec4::new(1.0, 0.0, 0.0, 1.0));
//! ```

use crate::{Vec3, Vec4};
use std::ops::{Index, Mul};

/// A 4x4 matrix in homogeneous coordinates.
///
/// Stored in row-major order. Use [`Mat4::from_rows`] or the builder
/// constructors ([`Mat4::translation`], [`Mat4::from_basis`]) to
/// construct.
///
/// # Example
///
/// ```rust
/// use wire_math::{Mat4, Vec4};
///
/// let v = Vec4::new(1.0, 2.0, 3.0, 1.0);
/// assert_eq!(Mat4::IDENTITY * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat4 {
    /// Matrix elements in row-major order: [row0, row1, row2, row3]
    pub m: [[f64; 4]; 4],
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from column arrays.
    ///
    /// Transposes the input (columns become rows internally).
    #[inline]
    pub const fn from_cols(cols: [[f64; 4]; 4]) -> Self {
        Self {
            m: [
                [cols[0][0], cols[1][0], cols[2][0], cols[3][0]],
                [cols[0][1], cols[1][1], cols[2][1], cols[3][1]],
                [cols[0][2], cols[1][2], cols[2][2], cols[3][2]],
                [cols[0][3], cols[1][3], cols[2][3], cols[3][3]],
            ],
        }
    }

    /// Creates a translation matrix that offsets points by `v`.
    ///
    /// The offsets sit in the fourth column, so directions (w = 0) are
    /// unaffected and points (w = 1) move by `v`.
    #[inline]
    pub const fn translation(v: Vec3) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, v.x],
            [0.0, 1.0, 0.0, v.y],
            [0.0, 0.0, 1.0, v.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates the change-of-basis matrix for an orthonormal basis
    /// given in standard coordinates.
    ///
    /// The basis vectors form the rows: expressing a standard-basis
    /// vector in the new basis is the inverse of the column-matrix
    /// that maps basis coordinates to standard coordinates, and for an
    /// orthonormal basis that inverse is the transpose. The fourth row
    /// and column complete the homogeneous identity.
    ///
    /// The axes must be orthonormal for the result to be a pure
    /// rotation; nothing checks this.
    #[inline]
    pub const fn from_basis(x: Vec3, y: Vec3, z: Vec3) -> Self {
        Self::from_rows([
            [x.x, x.y, x.z, 0.0],
            [y.x, y.y, y.z, 0.0],
            [z.x, z.y, z.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Returns a row as Vec4.
    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::from_array(self.m[i])
    }

    /// Returns a column as Vec4.
    #[inline]
    pub fn col(&self, i: usize) -> Vec4 {
        Vec4::new(self.m[0][i], self.m[1][i], self.m[2][i], self.m[3][i])
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.m)
    }

    /// Transforms a Vec4 by this matrix.
    ///
    /// Equivalent to `matrix * vector`.
    #[inline]
    pub fn transform(&self, v: Vec4) -> Vec4 {
        let m = &self.m;
        Vec4::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z + m[0][3] * v.w,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z + m[1][3] * v.w,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z + m[2][3] * v.w,
            m[3][0] * v.x + m[3][1] * v.y + m[3][2] * v.z + m[3][3] * v.w,
        )
    }

    /// Multiplies two matrices.
    ///
    /// Composition contract: the right operand is applied to vectors
    /// first, i.e.
    ///
    /// ```text
    /// a.mul_mat(&b).transform(v) == a.transform(b.transform(v))
    /// ```
    ///
    /// The camera pipeline depends on this ordering; build composites
    /// as `outermost * ... * innermost`.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    result.m[i][j] += self.m[i][k] * other.m[k][j];
                }
            }
        }
        result
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Converts to glam DMat4 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::DMat4 {
        // glam uses column-major, so we transpose
        glam::DMat4::from_cols_array_2d(&self.transpose().m)
    }

    /// Creates from glam DMat4.
    #[inline]
    pub fn from_glam(m: glam::DMat4) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Mat4 * Vec4
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.transform(rhs)
    }
}

// Mat4 * Mat4 (right operand applied first, see mul_mat)
impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl Index<usize> for Mat4 {
    type Output = [f64; 4];

    #[inline]
    fn index(&self, i: usize) -> &[f64; 4] {
        &self.m[i]
    }
}
