//! Transformer

use super::{Bounds3f, Float, Matrix4x4, Normal3f, Point3f, Ray, Vector3f, IDENTITY_MATRIX};
use crate::error::GeometryError;

/// Values that can be mapped through an affine transformation.
pub trait Transformable {
    /// Apply the transformation.
    ///
    /// * `m`       - The matrix applied to points and vectors.
    /// * `m_inv_t` - Inverse-transpose of `m`, applied to normals.
    fn transform(&self, m: &Matrix4x4, m_inv_t: &Matrix4x4) -> Self;
}

impl Transformable for Point3f {
    fn transform(&self, m: &Matrix4x4, _m_inv_t: &Matrix4x4) -> Self {
        m * *self
    }
}

impl Transformable for Vector3f {
    fn transform(&self, m: &Matrix4x4, _m_inv_t: &Matrix4x4) -> Self {
        m * *self
    }
}

impl Transformable for Normal3f {
    /// Normals use the upper 3x3 of the inverse-transpose so they stay
    /// perpendicular to the surface under non-uniform scale. The result is
    /// not renormalized.
    fn transform(&self, _m: &Matrix4x4, m_inv_t: &Matrix4x4) -> Self {
        Normal3f::from(m_inv_t * Vector3f::from(*self))
    }
}

impl Transformable for Ray {
    /// Origin and direction are mapped independently. The parametric
    /// interval is kept as is; since the direction length may change, `t`
    /// values are only comparable within one space.
    fn transform(&self, m: &Matrix4x4, m_inv_t: &Matrix4x4) -> Self {
        Ray {
            o: self.o.transform(m, m_inv_t),
            d: self.d.transform(m, m_inv_t),
            t_min: self.t_min,
            t_max: self.t_max,
        }
    }
}

/// Converts between world space and the object space of a primitive.
///
/// The inverse and both transposes are computed once at construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transformer {
    /// Object to world matrix.
    m: Matrix4x4,

    /// World to object matrix.
    m_inv: Matrix4x4,

    /// Inverse-transpose, maps object space normals to world space.
    m_inv_t: Matrix4x4,

    /// Transpose, maps world space normals to object space.
    m_t: Matrix4x4,
}

impl Transformer {
    /// Create a new transformer from an object to world matrix. Fails if the
    /// matrix is singular.
    ///
    /// * `m` - Object to world matrix.
    pub fn new(m: Matrix4x4) -> Result<Self, GeometryError> {
        let m_inv = m.inverse().map_err(|e| {
            warn!("Transformer rejected: {}", e);
            e
        })?;
        debug!("Transformer {:?}", m);
        Ok(Self {
            m,
            m_inv,
            m_inv_t: m_inv.transpose(),
            m_t: m.transpose(),
        })
    }

    /// Object to world matrix.
    pub fn matrix(&self) -> &Matrix4x4 {
        &self.m
    }

    /// World to object matrix.
    pub fn inverse_matrix(&self) -> &Matrix4x4 {
        &self.m_inv
    }

    /// Inverse-transpose of the object to world matrix.
    pub fn inverse_transpose_matrix(&self) -> &Matrix4x4 {
        &self.m_inv_t
    }

    /// Map a value from world space into object space.
    ///
    /// * `t` - The value to map.
    pub fn world_to_object<T: Transformable>(&self, t: &T) -> T {
        t.transform(&self.m_inv, &self.m_t)
    }

    /// Map a value from object space into world space.
    ///
    /// * `t` - The value to map.
    pub fn object_to_world<T: Transformable>(&self, t: &T) -> T {
        t.transform(&self.m, &self.m_inv_t)
    }

    /// Returns the world space box enclosing the 8 transformed corners of an
    /// object space box. An empty box stays empty.
    ///
    /// * `b` - Object space bounding box.
    pub fn object_to_world_bounds(&self, b: &Bounds3f) -> Bounds3f {
        if b.is_empty() {
            return Bounds3f::empty();
        }
        b.corners().iter().fold(Bounds3f::empty(), |mut acc, p| {
            acc.add_point(&self.object_to_world(p));
            acc
        })
    }

    /// Returns true if the matrix scales any of the coordinate axes.
    pub fn has_scale(&self) -> bool {
        let la2 = (self.m * Vector3f::new(1.0, 0.0, 0.0)).length_squared();
        let lb2 = (self.m * Vector3f::new(0.0, 1.0, 0.0)).length_squared();
        let lc2 = (self.m * Vector3f::new(0.0, 0.0, 1.0)).length_squared();
        let not_one = |x: Float| !(0.999..=1.001).contains(&x);
        not_one(la2) || not_one(lb2) || not_one(lc2)
    }

    /// Returns true if the transformation changes a left-handed coordinate
    /// system into a right-handed one and vice versa.
    pub fn swaps_handedness(&self) -> bool {
        let m = &self.m.m;
        let det = m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0]);
        det < 0.0
    }

    /// Returns the transformer applying `self` first and then `other`.
    ///
    /// * `other` - The transformation applied second.
    pub fn then(&self, other: &Transformer) -> Transformer {
        Transformer {
            m: other.m * self.m,
            m_inv: self.m_inv * other.m_inv,
            m_inv_t: other.m_inv_t * self.m_inv_t,
            m_t: self.m_t * other.m_t,
        }
    }
}

impl Default for Transformer {
    /// Returns the identity transformer.
    fn default() -> Self {
        Self {
            m: IDENTITY_MATRIX,
            m_inv: IDENTITY_MATRIX,
            m_inv_t: IDENTITY_MATRIX,
            m_t: IDENTITY_MATRIX,
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
