//! Primitive

use crate::base::Float;
use crate::geometry::*;
use crate::interaction::*;
use std::sync::Arc;

/// Geometry that can be intersected by rays. Implementations work in their
/// own object space and report hits in world space.
pub trait Primitive {
    /// Returns the primitive type. Usually these are behind `ArcPrimitive`
    /// and harder to debug. So this will be helpful.
    fn get_type(&self) -> &'static str;

    /// Returns the transformer between world and object space.
    fn transformer(&self) -> &Transformer;

    /// Returns a bounding box in the primitive's object space.
    fn bounding_box(&self) -> Bounds3f;

    /// Returns a bounding box in world space.
    ///
    /// Default is to transform the object bounds with the object-to-world
    /// transformation. Override for tighter bounds implementation.
    fn world_bound(&self) -> Bounds3f {
        self.transformer().object_to_world_bounds(&self.bounding_box())
    }

    /// Returns the world space intersection details if the ray hits the
    /// primitive within its interval; otherwise `None`.
    ///
    /// * `r` - The world space ray.
    fn hit(&self, r: &Ray) -> Option<Intersection>;

    /// Intersect a ray with the primitive. The record is overwritten only if
    /// the ray hits; on a miss it keeps its prior state.
    ///
    /// * `r`     - The world space ray.
    /// * `isect` - The record to fill in.
    fn intersect(&self, r: &Ray, isect: &mut Intersection) -> bool {
        match self.hit(r) {
            Some(found) => {
                *isect = found;
                true
            }
            None => false,
        }
    }

    /// Returns `true` if the ray hits the primitive.
    ///
    /// * `r` - The world space ray.
    fn intersect_p(&self, r: &Ray) -> bool {
        self.hit(r).is_some()
    }

    /// Returns the surface area in object space.
    fn surface_area(&self) -> Float;

    /// Returns the PDF of sampling a point on the surface. By default it is
    /// uniform over the area, 1/area.
    ///
    /// * `isect` - The intersection on the surface.
    /// * `wi`    - The incident direction.
    fn pdf(&self, _isect: &Intersection, _wi: &Vector3f) -> Float {
        1.0 / self.surface_area()
    }
}

/// Atomic reference counted `Primitive`.
pub type ArcPrimitive = Arc<dyn Primitive + Send + Sync>;

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// The plane z = 0 facing +z, clipped to the unit square.
    struct Tile {
        transformer: Transformer,
    }

    impl Primitive for Tile {
        fn get_type(&self) -> &'static str {
            "tile"
        }

        fn transformer(&self) -> &Transformer {
            &self.transformer
        }

        fn bounding_box(&self) -> Bounds3f {
            Bounds3::new(point3(0.0, 0.0, 0.0), point3(1.0, 1.0, 0.0))
        }

        fn hit(&self, r: &Ray) -> Option<Intersection> {
            let ray = self.transformer.world_to_object(r);
            if ray.d.z == 0.0 {
                return None;
            }
            let t = -ray.o.z / ray.d.z;
            let p = ray.position(t);
            if !ray.contains(t) || !self.bounding_box().contains_point(&p) {
                return None;
            }
            Some(Intersection::new(
                t,
                self.transformer.object_to_world(&p),
                normal3(0.0, 0.0, 1.0),
                -r.d,
                vector3(1.0, 0.0, 0.0),
                vector3(0.0, 1.0, 0.0),
            ))
        }

        fn surface_area(&self) -> Float {
            1.0
        }
    }

    fn tile() -> ArcPrimitive {
        Arc::new(Tile {
            transformer: Transformer::new(translate(&vector3(0.0, 0.0, 2.0))).unwrap(),
        })
    }

    #[test]
    fn intersect_writes_record_on_hit() {
        let t = tile();
        let mut isect = Intersection::default();
        let r = Ray::new(point3(0.5, 0.5, 0.0), vector3(0.0, 0.0, 1.0));
        assert!(t.intersect(&r, &mut isect));
        assert_eq!(isect.t_hit(), 2.0);
        assert_eq!(isect.hit_point(), point3(0.5, 0.5, 2.0));
        assert_eq!(isect.wo(), vector3(0.0, 0.0, -1.0));
        assert!(t.intersect_p(&r));
    }

    #[test]
    fn intersect_leaves_record_on_miss() {
        let t = tile();
        let mut isect = Intersection::default();
        isect.set_t_hit(7.0);
        let before = isect;
        let r = Ray::new(point3(3.0, 0.5, 0.0), vector3(0.0, 0.0, 1.0));
        assert!(!t.intersect(&r, &mut isect));
        assert_eq!(isect, before);
        assert!(!t.intersect_p(&r));
    }

    #[test]
    fn world_bound_uses_transformer() {
        let b = tile().world_bound();
        assert_eq!(b.p_min, point3(0.0, 0.0, 2.0));
        assert_eq!(b.p_max, point3(1.0, 1.0, 2.0));
    }

    #[test]
    fn default_pdf_is_uniform_over_area() {
        let t = tile();
        assert_eq!(t.pdf(&Intersection::default(), &vector3(0.0, 0.0, 1.0)), 1.0);
        assert_eq!(t.get_type(), "tile");
    }
}
