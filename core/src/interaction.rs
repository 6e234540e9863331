//! Intersection record

use crate::base::{Float, INFINITY};
use crate::geometry::*;

/// World space description of a ray-surface hit. A primitive writes the
/// whole record on a successful intersection and leaves it untouched on a
/// miss.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    /// Point of intersection.
    hit_point: Point3f,

    /// Unit surface normal at `hit_point`.
    normal: Normal3f,

    /// The negative ray direction.
    wo: Vector3f,

    /// First tangent, perpendicular to `normal`.
    tangent: Vector3f,

    /// Second tangent, perpendicular to `normal` and `tangent`.
    bitangent: Vector3f,

    /// Ray parameter at the intersection.
    t_hit: Float,
}

impl Intersection {
    /// Create a new intersection record.
    ///
    /// * `t_hit`     - Ray parameter at the intersection.
    /// * `hit_point` - Point of intersection.
    /// * `normal`    - Surface normal.
    /// * `wo`        - The negative ray direction.
    /// * `tangent`   - First tangent.
    /// * `bitangent` - Second tangent.
    pub fn new(
        t_hit: Float,
        hit_point: Point3f,
        normal: Normal3f,
        wo: Vector3f,
        tangent: Vector3f,
        bitangent: Vector3f,
    ) -> Self {
        Self {
            hit_point,
            normal,
            wo,
            tangent,
            bitangent,
            t_hit,
        }
    }

    /// Point of intersection.
    pub fn hit_point(&self) -> Point3f {
        self.hit_point
    }

    /// Unit surface normal.
    pub fn normal(&self) -> Normal3f {
        self.normal
    }

    /// The negative ray direction.
    pub fn wo(&self) -> Vector3f {
        self.wo
    }

    /// First tangent.
    pub fn tangent(&self) -> Vector3f {
        self.tangent
    }

    /// Second tangent.
    pub fn bitangent(&self) -> Vector3f {
        self.bitangent
    }

    /// Ray parameter at the intersection; infinite until a hit is recorded.
    pub fn t_hit(&self) -> Float {
        self.t_hit
    }

    /// Set the point of intersection.
    ///
    /// * `p` - Point of intersection.
    pub fn set_hit_point(&mut self, p: Point3f) {
        self.hit_point = p;
    }

    /// Set the surface normal.
    ///
    /// * `n` - Unit surface normal.
    pub fn set_normal(&mut self, n: Normal3f) {
        self.normal = n;
    }

    /// Set the outgoing direction.
    ///
    /// * `wo` - The negative ray direction.
    pub fn set_wo(&mut self, wo: Vector3f) {
        self.wo = wo;
    }

    /// Set both tangents at once so they always describe the same frame.
    ///
    /// * `tangent`   - First tangent.
    /// * `bitangent` - Second tangent.
    pub fn set_tangent_frame(&mut self, tangent: Vector3f, bitangent: Vector3f) {
        self.tangent = tangent;
        self.bitangent = bitangent;
    }

    /// Set the ray parameter at the intersection.
    ///
    /// * `t` - Ray parameter.
    pub fn set_t_hit(&mut self, t: Float) {
        self.t_hit = t;
    }

    /// Returns true once a hit has been recorded.
    pub fn is_hit(&self) -> bool {
        self.t_hit < INFINITY
    }
}

impl Default for Intersection {
    /// Returns an empty record with `t_hit` at infinity.
    fn default() -> Self {
        Self {
            hit_point: Point3f::default(),
            normal: Normal3f::default(),
            wo: Vector3f::default(),
            tangent: Vector3f::default(),
            bitangent: Vector3f::default(),
            t_hit: INFINITY,
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
