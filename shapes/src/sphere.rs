//! Spheres

use raymann_core::base::*;
use raymann_core::error::GeometryError;
use raymann_core::geometry::*;
use raymann_core::interaction::*;
use raymann_core::primitive::*;

/// A sphere given by its center and radius in object space, placed in the
/// world by its own transformer.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    /// Object to world conversion.
    transformer: Transformer,

    /// Center in object space.
    center: Point3f,

    /// Radius of sphere.
    radius: Float,

    /// Object space bounds.
    bounds: Bounds3f,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// * `transformer` - Object to world conversion.
    /// * `center`      - Center in object space.
    /// * `radius`      - Radius of sphere; must be positive and finite.
    pub fn new(
        transformer: Transformer,
        center: Point3f,
        radius: Float,
    ) -> Result<Self, GeometryError> {
        if !(radius.is_finite() && radius > 0.0) {
            warn!("Sphere rejected: radius {}", radius);
            return Err(GeometryError::InvalidRadius(radius));
        }

        let r = Vector3f::new(radius, radius, radius);
        let bounds = Bounds3::new(center - r, center + r);
        debug!("Sphere center {:?} radius {} bounds {:?}", center, radius, bounds);

        Ok(Self {
            transformer,
            center,
            radius,
            bounds,
        })
    }

    /// Center in object space.
    pub fn center(&self) -> Point3f {
        self.center
    }

    /// Radius of sphere.
    pub fn radius(&self) -> Float {
        self.radius
    }
}

impl Default for Sphere {
    /// Returns the unit sphere at the origin with no transformation.
    fn default() -> Self {
        Self {
            transformer: Transformer::default(),
            center: Point3f::default(),
            radius: 1.0,
            bounds: Bounds3::new(point3(-1.0, -1.0, -1.0), point3(1.0, 1.0, 1.0)),
        }
    }
}

impl Primitive for Sphere {
    fn get_type(&self) -> &'static str {
        "sphere"
    }

    fn transformer(&self) -> &Transformer {
        &self.transformer
    }

    fn bounding_box(&self) -> Bounds3f {
        self.bounds
    }

    /// Returns geometric details if a ray intersects the sphere.
    ///
    /// * `r` - The world space ray.
    fn hit(&self, r: &Ray) -> Option<Intersection> {
        // Transform ray to object space
        let ray = self.transformer.world_to_object(r);

        // Compute quadratic sphere coefficients.
        let oc = ray.o - self.center;
        let a = ray.d.dot(&ray.d);
        let b = 2.0 * ray.d.dot(&oc);
        let c = oc.dot(&oc) - self.radius * self.radius;

        // Solve quadratic equation for t values.
        let Some((t0, t1)) = Quadratic::solve(a, b, c) else {
            trace!("{:?} misses sphere", r);
            return None;
        };

        // Nearest root inside the ray interval.
        let Some(t_hit) = [t0, t1].into_iter().find(|t| ray.contains(*t)) else {
            trace!("{:?} roots {} and {} outside interval", r, t0, t1);
            return None;
        };

        let p_obj = ray.position(t_hit);
        let n_obj = Normal3f::from(p_obj - self.center).normalize();

        // Normals can be scaled by the transformation.
        let normal = self.transformer.object_to_world(&n_obj).normalize();
        let (tangent, bitangent) = get_coordinate_system_vectors(&Vector3f::from(normal));

        let hit_point = self.transformer.object_to_world(&p_obj);
        trace!("{:?} hits sphere at t = {} {:?}", r, t_hit, hit_point);

        Some(Intersection::new(t_hit, hit_point, normal, -r.d, tangent, bitangent))
    }

    /// Returns the surface area in object space.
    fn surface_area(&self) -> Float {
        4.0 * PI * self.radius * self.radius
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
