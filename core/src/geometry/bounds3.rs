//! 3-D Axis Aligned Bounding Boxes.

use super::{
    abs, max, min, point3, Axis, Float, Point3, Point3f, Ray, Union, Vector3, INFINITY,
    PARALLEL_EPSILON,
};
use num_traits::Num;

/// 3-D Axis Aligned Bounding Box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds3<T: Num> {
    /// Minimum bounds.
    pub p_min: Point3<T>,

    /// Maximum bounds.
    pub p_max: Point3<T>,
}

/// 3-D bounding box containing `Float` points.
pub type Bounds3f = Bounds3<Float>;

impl<T: Num + PartialOrd + Copy> Bounds3<T> {
    /// Creates a new 3-D bounding box from 2 points. The minimum and maximum
    /// bounds are used for each coordinate axis.
    ///
    /// * `p1` - First point.
    /// * `p2` - Second point.
    pub fn new(p1: Point3<T>, p2: Point3<T>) -> Self {
        Bounds3 {
            p_min: p1.min(&p2),
            p_max: p1.max(&p2),
        }
    }

    /// Returns true if the box encloses no points, i.e. the maximum is below
    /// the minimum along some axis.
    pub fn is_empty(&self) -> bool {
        self.p_max.x < self.p_min.x || self.p_max.y < self.p_min.y || self.p_max.z < self.p_min.z
    }

    /// Grow the box to include a point.
    ///
    /// * `p` - The point.
    pub fn add_point(&mut self, p: &Point3<T>) {
        *self = self.union(p);
    }

    /// Grow the box to include another box.
    ///
    /// * `other` - The other bounding box.
    pub fn add_box(&mut self, other: &Self) {
        self.add_point(&other.p_min);
        self.add_point(&other.p_max);
    }

    /// Returns true if a point is inside the bounding box. The boundary is
    /// considered inside.
    ///
    /// * `p` - The point.
    pub fn contains_point(&self, p: &Point3<T>) -> bool {
        (p.x >= self.p_min.x && p.x <= self.p_max.x)
            && (p.y >= self.p_min.y && p.y <= self.p_max.y)
            && (p.z >= self.p_min.z && p.z <= self.p_max.z)
    }

    /// Returns true if both corners of another box are inside this one.
    ///
    /// * `other` - The other bounding box.
    pub fn contains_box(&self, other: &Self) -> bool {
        self.contains_point(&other.p_min) && self.contains_point(&other.p_max)
    }

    /// Returns the vector along the box diagonal from the minimum point to
    /// the maximum point.
    pub fn diagonal(&self) -> Vector3<T> {
        self.p_max - self.p_min
    }

    /// Returns the surface area of the bounding box.
    pub fn surface_area(&self) -> T {
        if self.is_empty() {
            T::zero()
        } else {
            let d = self.diagonal();
            let h = d.x * d.y + d.x * d.z + d.y * d.z;
            h + h
        }
    }

    /// Returns the volume of the bounding box.
    pub fn volume(&self) -> T {
        if self.is_empty() {
            T::zero()
        } else {
            let d = self.diagonal();
            d.x * d.y * d.z
        }
    }

    /// Returns the longest axis.
    pub fn maximum_extent(&self) -> Axis {
        let d = self.diagonal();
        if d.x > d.y && d.x > d.z {
            Axis::X
        } else if d.y > d.z {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    /// Returns true if extents of another bounding box overlap with this one.
    ///
    /// * `other` - The other bounding box.
    pub fn overlaps(&self, other: &Self) -> bool {
        let x = (self.p_max.x >= other.p_min.x) && (self.p_min.x <= other.p_max.x);
        let y = (self.p_max.y >= other.p_min.y) && (self.p_min.y <= other.p_max.y);
        let z = (self.p_max.z >= other.p_min.z) && (self.p_min.z <= other.p_max.z);
        x && y && z
    }

    /// Returns the eight corners. Corner `i` takes the maximum along x when
    /// bit 0 is set, y for bit 1 and z for bit 2.
    pub fn corners(&self) -> [Point3<T>; 8] {
        let pick = |bit: usize, i: usize, lo: T, hi: T| if i & bit == 0 { lo } else { hi };
        let mut out = [self.p_min; 8];
        for (i, c) in out.iter_mut().enumerate() {
            *c = point3(
                pick(1, i, self.p_min.x, self.p_max.x),
                pick(2, i, self.p_min.y, self.p_max.y),
                pick(4, i, self.p_min.z, self.p_max.z),
            );
        }
        out
    }
}

impl Bounds3<Float> {
    /// Returns the empty box with minimum at +∞ and maximum at -∞ so the
    /// first `add_point` or `add_box` establishes the real extents.
    pub fn empty() -> Self {
        Bounds3 {
            p_min: point3(INFINITY, INFINITY, INFINITY),
            p_max: point3(-INFINITY, -INFINITY, -INFINITY),
        }
    }

    /// Returns the center of the box.
    pub fn centroid(&self) -> Point3f {
        self.p_min + self.diagonal() * 0.5
    }

    /// Slab test against the infinite line carrying the ray. Ties, where the
    /// line only grazes an edge or corner, count as a hit. Axes where the
    /// direction is smaller than `PARALLEL_EPSILON` are treated as parallel.
    ///
    /// * `ray` - The ray.
    pub fn intersects_ray(&self, ray: &Ray) -> bool {
        self.intersects_ray_with_epsilon(ray, PARALLEL_EPSILON)
    }

    /// Slab test with a caller supplied parallel threshold.
    ///
    /// * `ray`     - The ray.
    /// * `epsilon` - Direction components with a smaller magnitude are
    ///               treated as parallel to the slab.
    pub fn intersects_ray_with_epsilon(&self, ray: &Ray, epsilon: Float) -> bool {
        self.slabs(ray, epsilon).is_some()
    }

    /// Returns the parametric range `(t0, t1)` over which the ray lies inside
    /// the box, clipped to the ray's own interval.
    ///
    /// * `ray` - The ray.
    pub fn intersect_interval(&self, ray: &Ray) -> Option<(Float, Float)> {
        let (near, far) = self.slabs(ray, PARALLEL_EPSILON)?;
        let t0 = max(near, ray.t_min);
        let t1 = min(far, ray.t_max);
        if t0 <= t1 && t0 < ray.t_max {
            Some((t0, t1))
        } else {
            None
        }
    }

    /// Intersects the per-axis slab intervals. `None` if they do not overlap
    /// or the box is empty.
    fn slabs(&self, ray: &Ray, epsilon: Float) -> Option<(Float, Float)> {
        if self.is_empty() {
            return None;
        }

        let mut near = -INFINITY;
        let mut far = INFINITY;
        for axis in Axis::ALL {
            let (t0, t1) = slab(
                ray.o[axis],
                ray.d[axis],
                self.p_min[axis],
                self.p_max[axis],
                epsilon,
            )?;
            near = max(near, t0);
            far = min(far, t1);
        }

        if near <= far {
            Some((near, far))
        } else {
            None
        }
    }
}

/// Entry and exit parameters for one axis. A direction below `epsilon` is
/// parallel to the slab: the whole line is inside if the origin is, otherwise
/// nothing is.
fn slab(o: Float, d: Float, lo: Float, hi: Float, epsilon: Float) -> Option<(Float, Float)> {
    if abs(d) < epsilon {
        if lo <= o && o <= hi {
            Some((-INFINITY, INFINITY))
        } else {
            None
        }
    } else {
        let t0 = (lo - o) / d;
        let t1 = (hi - o) / d;
        if t0 > t1 {
            Some((t1, t0))
        } else {
            Some((t0, t1))
        }
    }
}

impl Default for Bounds3<Float> {
    /// Returns the empty box.
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Num + Copy> From<Point3<T>> for Bounds3<T> {
    /// Use a 3-D point as minimum and maximum 3-D bounds.
    ///
    /// * `p` - 3-D point.
    fn from(p: Point3<T>) -> Self {
        Bounds3 { p_min: p, p_max: p }
    }
}

impl<T: Num + PartialOrd + Copy> Union<Point3<T>> for Bounds3<T> {
    /// Return a bounding box containing the itself and a point.
    ///
    /// * `other` - The point.
    fn union(&self, other: &Point3<T>) -> Self {
        Bounds3 {
            p_min: self.p_min.min(other),
            p_max: self.p_max.max(other),
        }
    }
}

impl<T: Num + PartialOrd + Copy> Union<Bounds3<T>> for Bounds3<T> {
    /// Return a bounding box containing both bounding boxes.
    ///
    /// * `other` - The other bounding box.
    fn union(&self, other: &Bounds3<T>) -> Self {
        Bounds3 {
            p_min: self.p_min.min(&other.p_min),
            p_max: self.p_max.max(&other.p_max),
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
