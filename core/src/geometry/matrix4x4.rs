//! 4x4 Matrix

use super::{abs, point3, vector3, Float, Point3f, Vector3f};
use crate::error::GeometryError;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

/// A 4x4 row-major matrix containing Float values representing an affine
/// transformation in homogeneous coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix4x4 {
    /// Stores a 2-D array of Float
    pub m: [[Float; 4]; 4],
}

/// Zero matrix.
pub const ZERO_MATRIX: Matrix4x4 = Matrix4x4 { m: [[0.0; 4]; 4] };

/// Identity matrix.
pub const IDENTITY_MATRIX: Matrix4x4 = Matrix4x4 {
    m: [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ],
};

/// Create a 4x4 matrix using the following order of the parameters:
///
/// * `t00`, `t01`, `t02`, `t03` - Row 1
/// * `t10`, `t11`, `t12`, `t13` - Row 2
/// * `t20`, `t21`, `t22`, `t23` - Row 3
/// * `t30`, `t31`, `t32`, `t33` - Row 4
#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
pub fn matrix4x4(
    t00: Float, t01: Float, t02: Float, t03: Float,
    t10: Float, t11: Float, t12: Float, t13: Float,
    t20: Float, t21: Float, t22: Float, t23: Float,
    t30: Float, t31: Float, t32: Float, t33: Float,
) -> Matrix4x4 {
    Matrix4x4 {
        m: [
            [t00, t01, t02, t03],
            [t10, t11, t12, t13],
            [t20, t21, t22, t23],
            [t30, t31, t32, t33],
        ],
    }
}

#[rustfmt::skip]
impl Matrix4x4 {
    /// Create a matrix from a row-major 2-D array.
    ///
    /// * `m` - Rows of the matrix.
    pub fn new(m: [[Float; 4]; 4]) -> Self {
        Self { m }
    }

    /// Returns the transpose of the matrix.
    pub fn transpose(&self) -> Matrix4x4 {
        matrix4x4(
            self.m[0][0], self.m[1][0], self.m[2][0], self.m[3][0],
            self.m[0][1], self.m[1][1], self.m[2][1], self.m[3][1],
            self.m[0][2], self.m[1][2], self.m[2][2], self.m[3][2],
            self.m[0][3], self.m[1][3], self.m[2][3], self.m[3][3],
        )
    }

    /// Returns the determinant using the 2x2 sub-determinants of the upper
    /// and lower row pairs (Laplace expansion).
    pub fn determinant(&self) -> Float {
        let m = &self.m;

        let s0 = m[0][0] * m[1][1] - m[1][0] * m[0][1];
        let s1 = m[0][0] * m[1][2] - m[1][0] * m[0][2];
        let s2 = m[0][0] * m[1][3] - m[1][0] * m[0][3];
        let s3 = m[0][1] * m[1][2] - m[1][1] * m[0][2];
        let s4 = m[0][1] * m[1][3] - m[1][1] * m[0][3];
        let s5 = m[0][2] * m[1][3] - m[1][2] * m[0][3];

        let c5 = m[2][2] * m[3][3] - m[3][2] * m[2][3];
        let c4 = m[2][1] * m[3][3] - m[3][1] * m[2][3];
        let c3 = m[2][1] * m[3][2] - m[3][1] * m[2][2];
        let c2 = m[2][0] * m[3][3] - m[3][0] * m[2][3];
        let c1 = m[2][0] * m[3][2] - m[3][0] * m[2][2];
        let c0 = m[2][0] * m[3][1] - m[3][0] * m[2][1];

        s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0
    }

    /// Returns the inverse of the matrix using numerically stable Gauss-Jordan
    /// elimination.
    ///
    /// Returns `GeometryError::SingularMatrix` if elimination meets a zero
    /// pivot or an element is not finite. A small determinant alone is not
    /// an error.
    pub fn inverse(&self) -> Result<Matrix4x4, GeometryError> {
        let singular = GeometryError::SingularMatrix { determinant: self.determinant() };
        if !self.is_finite() {
            return Err(singular);
        }

        let mut indxc = [0; 4];
        let mut indxr = [0; 4];
        let mut ipiv = [0; 4];

        let mut minv = self.m;

        for i in 0..4 {
            let mut irow = 0;
            let mut icol = 0;
            let mut big: Float = 0.0;

            // Choose pivot
            for j in 0..4 {
                if ipiv[j] != 1 {
                    for k in 0..4 {
                        if ipiv[k] == 0 {
                            let abs_minv = abs(minv[j][k]);
                            if abs_minv >= big {
                                big = abs_minv;
                                irow = j;
                                icol = k;
                            }
                        } else if ipiv[k] > 1 {
                            return Err(singular);
                        }
                    }
                }
            }

            ipiv[icol] += 1;

            // Swap rows _irow_ and _icol_ for pivot
            if irow != icol {
                minv.swap(irow, icol);
            }

            indxr[i] = irow;
            indxc[i] = icol;
            if minv[icol][icol] == 0.0 {
                return Err(singular);
            }

            // Set $m[icol][icol]$ to one by scaling row _icol_ appropriately
            let pivinv = 1.0 / minv[icol][icol];
            minv[icol][icol] = 1.0;
            for j in 0..4 {
                minv[icol][j] *= pivinv;
            }

            // Subtract this row from others to zero out their columns
            for j in 0..4 {
                if j != icol {
                    let save = minv[j][icol];
                    minv[j][icol] = 0.0;
                    for k in 0..4 {
                        minv[j][k] -= minv[icol][k] * save;
                    }
                }
            }
        }

        // Swap columns to reflect permutation
        for j in (0..4).rev() {
            if indxr[j] != indxc[j] {
                for row in minv.iter_mut() {
                    row.swap(indxr[j], indxc[j]);
                }
            }
        }

        let inv = Matrix4x4 { m: minv };
        if inv.is_finite() {
            Ok(inv)
        } else {
            Err(singular)
        }
    }

    /// Returns true if no element is infinite or NaN.
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|e| e.is_finite())
    }

    /// Returns the element at `row`, `col`.
    ///
    /// * `row` - Row in [0, 3].
    /// * `col` - Column in [0, 3].
    pub fn get(&self, row: usize, col: usize) -> Result<Float, GeometryError> {
        if row < 4 && col < 4 {
            Ok(self.m[row][col])
        } else {
            Err(GeometryError::IndexOutOfBounds { row, col })
        }
    }

    /// Sets the element at `row`, `col`.
    ///
    /// * `row`   - Row in [0, 3].
    /// * `col`   - Column in [0, 3].
    /// * `value` - The new value.
    pub fn set(&mut self, row: usize, col: usize, value: Float) -> Result<(), GeometryError> {
        if row < 4 && col < 4 {
            self.m[row][col] = value;
            Ok(())
        } else {
            Err(GeometryError::IndexOutOfBounds { row, col })
        }
    }

    /// Returns a matrix containing the absolute values of the elements.
    pub fn abs(&self) -> Matrix4x4 {
        self.map(abs::<Float>)
    }

    /// Returns a matrix with every element rounded to the nearest integer.
    pub fn round(&self) -> Matrix4x4 {
        self.map(Float::round)
    }

    fn map<F: Fn(Float) -> Float>(&self, f: F) -> Matrix4x4 {
        let mut r = *self;
        r.m.iter_mut().flatten().for_each(|e| *e = f(*e));
        r
    }

    fn zip<F: Fn(Float, Float) -> Float>(&self, other: &Matrix4x4, f: F) -> Matrix4x4 {
        let mut r = *self;
        for i in 0..4 {
            for j in 0..4 {
                r.m[i][j] = f(self.m[i][j], other.m[i][j]);
            }
        }
        r
    }
}

impl Default for Matrix4x4 {
    /// Returns the default as identity matrix.
    fn default() -> Self {
        IDENTITY_MATRIX
    }
}

impl From<[[Float; 4]; 4]> for Matrix4x4 {
    /// Create a matrix from a row-major 2-D array.
    ///
    /// * `m` - Rows of the matrix.
    fn from(m: [[Float; 4]; 4]) -> Self {
        Self { m }
    }
}

impl Mul<Matrix4x4> for Matrix4x4 {
    type Output = Matrix4x4;

    /// Post-multiply the given matrix. The result applies `other` first and
    /// then `self`.
    ///
    /// * `other` - The other matrix
    fn mul(self, other: Matrix4x4) -> Self::Output {
        let mut m = ZERO_MATRIX;

        for i in 0..4 {
            for j in 0..4 {
                m.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j]
                    + self.m[i][3] * other.m[3][j];
            }
        }

        m
    }
}

impl Mul<Vector3f> for &Matrix4x4 {
    type Output = Vector3f;

    /// Applies the linear part of the matrix to a vector. Vectors have a
    /// homogeneous weight of 0 so the translation column is ignored.
    ///
    /// * `v` - The vector.
    fn mul(self, v: Vector3f) -> Self::Output {
        let m = &self.m;
        vector3(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }
}

impl Mul<Vector3f> for Matrix4x4 {
    type Output = Vector3f;

    /// Applies the linear part of the matrix to a vector.
    ///
    /// * `v` - The vector.
    fn mul(self, v: Vector3f) -> Self::Output {
        &self * v
    }
}

impl Mul<Point3f> for &Matrix4x4 {
    type Output = Point3f;

    /// Applies the full affine transformation to a point. Points have a
    /// homogeneous weight of 1; the result is divided by the transformed
    /// weight when it is not 1.
    ///
    /// * `p` - The point.
    fn mul(self, p: Point3f) -> Self::Output {
        let m = &self.m;
        let xp = m[0][0] * p.x + m[0][1] * p.y + m[0][2] * p.z + m[0][3];
        let yp = m[1][0] * p.x + m[1][1] * p.y + m[1][2] * p.z + m[1][3];
        let zp = m[2][0] * p.x + m[2][1] * p.y + m[2][2] * p.z + m[2][3];
        let wp = m[3][0] * p.x + m[3][1] * p.y + m[3][2] * p.z + m[3][3];

        debug_assert!(wp != 0.0, "Matrix4x4 * Point3f: wp is zero");

        if wp == 1.0 {
            point3(xp, yp, zp)
        } else {
            point3(xp, yp, zp) / wp
        }
    }
}

impl Mul<Point3f> for Matrix4x4 {
    type Output = Point3f;

    /// Applies the full affine transformation to a point.
    ///
    /// * `p` - The point.
    fn mul(self, p: Point3f) -> Self::Output {
        &self * p
    }
}

impl Add for Matrix4x4 {
    type Output = Matrix4x4;

    /// Element-wise sum.
    ///
    /// * `other` - The other matrix.
    fn add(self, other: Matrix4x4) -> Self::Output {
        self.zip(&other, |a, b| a + b)
    }
}

impl Sub for Matrix4x4 {
    type Output = Matrix4x4;

    /// Element-wise difference.
    ///
    /// * `other` - The other matrix.
    fn sub(self, other: Matrix4x4) -> Self::Output {
        self.zip(&other, |a, b| a - b)
    }
}

impl Neg for Matrix4x4 {
    type Output = Matrix4x4;

    fn neg(self) -> Self::Output {
        self.map(|e| -e)
    }
}

impl Index<(usize, usize)> for Matrix4x4 {
    type Output = Float;

    /// Index the matrix by `(row, column)`.
    ///
    /// Panics if either index is not in [0, 3]; use `get` for a checked
    /// access.
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(row < 4 && col < 4, "matrix index ({row}, {col}) not in [0, 3]");
        &self.m[row][col]
    }
}

impl IndexMut<(usize, usize)> for Matrix4x4 {
    /// Mutably index the matrix by `(row, column)`.
    ///
    /// Panics if either index is not in [0, 3]; use `set` for a checked
    /// access.
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(row < 4 && col < 4, "matrix index ({row}, {col}) not in [0, 3]");
        &mut self.m[row][col]
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
