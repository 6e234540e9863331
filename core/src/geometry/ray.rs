//! Rays

use super::{Float, Point3f, Vector3f, INFINITY, RAY_EPSILON};
use crate::error::GeometryError;

/// A parametric line `o + t * d` restricted to the half-open interval
/// `[t_min, t_max)`. The direction need not be unit length.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    /// Origin.
    pub o: Point3f,

    /// Direction.
    pub d: Vector3f,

    /// Minimum extent of the ray.
    pub(crate) t_min: Float,

    /// Maximum extent of the ray.
    pub(crate) t_max: Float,
}

impl Ray {
    /// Returns a ray over the default interval `[RAY_EPSILON, INFINITY)`.
    ///
    /// * `o` - Origin.
    /// * `d` - Direction.
    pub fn new(o: Point3f, d: Vector3f) -> Self {
        Self {
            o,
            d,
            t_min: RAY_EPSILON,
            t_max: INFINITY,
        }
    }

    /// Returns a ray over `[t_min, t_max)`. An inverted or NaN interval is
    /// rejected.
    ///
    /// * `o`     - Origin.
    /// * `d`     - Direction.
    /// * `t_min` - Minimum extent of the ray.
    /// * `t_max` - Maximum extent of the ray.
    pub fn with_interval(
        o: Point3f,
        d: Vector3f,
        t_min: Float,
        t_max: Float,
    ) -> Result<Self, GeometryError> {
        if t_min.is_nan() || t_max.is_nan() || t_min > t_max {
            return Err(GeometryError::InvalidInterval { t_min, t_max });
        }
        Ok(Self { o, d, t_min, t_max })
    }

    /// Minimum extent of the ray.
    pub fn t_min(&self) -> Float {
        self.t_min
    }

    /// Maximum extent of the ray.
    pub fn t_max(&self) -> Float {
        self.t_max
    }

    /// Returns true if either coordinate is NaN.
    pub fn has_nans(&self) -> bool {
        self.o.has_nans() || self.d.has_nans()
    }

    /// Get position along the ray at given parameter.
    ///
    /// * `t` - Parameter to evaluate.
    pub fn position(&self, t: Float) -> Point3f {
        self.o + self.d * t
    }

    /// Returns true if `t` lies in `[t_min, t_max)`.
    ///
    /// * `t` - Parameter to test.
    pub fn contains(&self, t: Float) -> bool {
        self.t_min <= t && t < self.t_max
    }
}

impl Default for Ray {
    /// Returns a ray at the origin with zero direction and the default
    /// interval.
    fn default() -> Self {
        Self::new(Point3f::default(), Vector3f::default())
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::super::{point3, vector3};
    use super::*;

    #[test]
    fn new_uses_default_interval() {
        let r = Ray::new(point3(1.0, 2.0, 3.0), vector3(4.0, 5.0, 6.0));
        assert_eq!(r.o, point3(1.0, 2.0, 3.0));
        assert_eq!(r.d, vector3(4.0, 5.0, 6.0));
        assert_eq!(r.t_min(), RAY_EPSILON);
        assert_eq!(r.t_max(), INFINITY);
    }

    #[test]
    fn position_along_ray() {
        let r = Ray::new(point3(2.0, 3.0, 4.0), vector3(1.0, 0.0, 0.0));
        assert_eq!(r.position(0.0), point3(2.0, 3.0, 4.0));
        assert_eq!(r.position(1.0), point3(3.0, 3.0, 4.0));
        assert_eq!(r.position(-1.0), point3(1.0, 3.0, 4.0));
        assert_eq!(r.position(2.5), point3(4.5, 3.0, 4.0));
    }

    #[test]
    fn interval_is_half_open() {
        let r = Ray::with_interval(point3(0.0, 0.0, 0.0), vector3(0.0, 0.0, 1.0), 1.0, 2.0)
            .unwrap();
        assert!(!r.contains(0.5));
        assert!(r.contains(1.0));
        assert!(r.contains(1.5));
        assert!(!r.contains(2.0));
    }

    #[test]
    fn degenerate_interval_is_allowed() {
        let r = Ray::with_interval(point3(0.0, 0.0, 0.0), vector3(0.0, 0.0, 1.0), 1.0, 1.0);
        assert!(r.is_ok());
        assert!(!r.unwrap().contains(1.0));
    }

    #[test]
    fn inverted_interval_is_rejected() {
        let r = Ray::with_interval(point3(0.0, 0.0, 0.0), vector3(0.0, 0.0, 1.0), 2.0, 1.0);
        assert_eq!(
            r,
            Err(GeometryError::InvalidInterval {
                t_min: 2.0,
                t_max: 1.0
            })
        );
    }

    #[test]
    fn nan_interval_is_rejected() {
        let o = point3(0.0, 0.0, 0.0);
        let d = vector3(0.0, 0.0, 1.0);
        assert!(Ray::with_interval(o, d, Float::NAN, 1.0).is_err());
        assert!(Ray::with_interval(o, d, 0.0, Float::NAN).is_err());
    }

    #[test]
    fn has_nans() {
        assert!(!Ray::default().has_nans());
        assert!(Ray::new(point3(0.0, Float::NAN, 0.0), vector3(0.0, 0.0, 1.0)).has_nans());
    }
}
