//! 3-D Points

use super::{max, min, vector3, Axis, Float, Vector3};
use num_traits::Num;
use std::ops;

/// A 3-D point containing numeric values. Points carry an implicit
/// homogeneous weight of 1 and so are affected by translation.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point3<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,

    /// Z-coordinate.
    pub z: T,
}

/// 3-D point containing `Float` values.
pub type Point3f = Point3<Float>;

/// Creates a new 3-D point.
///
/// * `x`: X-coordinate.
/// * `y`: Y-coordinate.
/// * `z`: Z-coordinate.
pub fn point3<T>(x: T, y: T, z: T) -> Point3<T> {
    Point3 { x, y, z }
}

impl<T: Num> Point3<T> {
    /// Creates a new 3-D point.
    ///
    /// * `x`: X-coordinate.
    /// * `y`: Y-coordinate.
    /// * `z`: Z-coordinate.
    pub fn new(x: T, y: T, z: T) -> Self {
        point3(x, y, z)
    }

    /// Returns true if either coordinate is NaN.
    pub fn has_nans(&self) -> bool
    where
        T: num_traits::Float,
    {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Return the component-wise minimum coordinate values with another point.
    ///
    /// * `other` - The other point.
    pub fn min(&self, other: &Self) -> Self
    where
        T: PartialOrd + Copy,
    {
        point3(
            min(self.x, other.x),
            min(self.y, other.y),
            min(self.z, other.z),
        )
    }

    /// Return the component-wise maximum coordinate values with another point.
    ///
    /// * `other` - The other point.
    pub fn max(&self, other: &Self) -> Self
    where
        T: PartialOrd + Copy,
    {
        point3(
            max(self.x, other.x),
            max(self.y, other.y),
            max(self.z, other.z),
        )
    }
}

impl<T: Num> ops::Add for Point3<T> {
    type Output = Point3<T>;

    /// Adds the given point and returns the result.
    ///
    /// * `other` - The point to add.
    fn add(self, other: Self) -> Self::Output {
        point3(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: Num> ops::Add<Vector3<T>> for Point3<T> {
    type Output = Point3<T>;

    /// Offsets the point by the given vector.
    ///
    /// * `other` - The vector to add.
    fn add(self, other: Vector3<T>) -> Self::Output {
        point3(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: Num + Copy> ops::AddAssign<Vector3<T>> for Point3<T> {
    /// Performs the `+=` operation.
    ///
    /// * `other` - The vector to add.
    fn add_assign(&mut self, other: Vector3<T>) {
        *self = point3(self.x + other.x, self.y + other.y, self.z + other.z);
    }
}

impl<T: Num> ops::Sub for Point3<T> {
    type Output = Vector3<T>;

    /// Subtracts the given point and returns the vector towards that point.
    ///
    /// * `other` - The point to subtract.
    fn sub(self, other: Self) -> Self::Output {
        vector3(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Num> ops::Sub<Vector3<T>> for Point3<T> {
    type Output = Point3<T>;

    /// Subtracts the given vector and returns the result.
    ///
    /// * `other` - The point to subtract.
    fn sub(self, other: Vector3<T>) -> Self::Output {
        point3(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Num + Copy> ops::SubAssign<Vector3<T>> for Point3<T> {
    /// Performs the `-=` operation.
    ///
    /// * `other` - The vector to subtract.
    fn sub_assign(&mut self, other: Vector3<T>) {
        *self = point3(self.x - other.x, self.y - other.y, self.z - other.z);
    }
}

impl<T: Num + Copy> ops::Mul<T> for Point3<T> {
    type Output = Point3<T>;

    /// Scale the point.
    ///
    /// * `f` - The scaling factor.
    fn mul(self, f: T) -> Self::Output {
        point3(f * self.x, f * self.y, f * self.z)
    }
}

macro_rules! premul {
    ($t: ty) => {
        impl ops::Mul<Point3<$t>> for $t {
            type Output = Point3<$t>;
            /// Scale the point.
            ///
            /// * `p` - The point.
            fn mul(self, p: Point3<$t>) -> Point3<$t> {
                point3(self * p.x, self * p.y, self * p.z)
            }
        }
    };
}

premul!(f32);
premul!(f64);
premul!(i32);
premul!(i64);

impl<T: Num + Copy> ops::Div<T> for Point3<T> {
    type Output = Point3<T>;

    /// Scale the point by 1/f.
    ///
    /// * `f` - The scaling factor.
    fn div(self, f: T) -> Self::Output {
        debug_assert!(!f.is_zero());

        let inv = T::one() / f;
        point3(inv * self.x, inv * self.y, inv * self.z)
    }
}

impl<T: Num + ops::Neg<Output = T>> ops::Neg for Point3<T> {
    type Output = Point3<T>;

    /// Flip the point's direction (scale by -1).
    fn neg(self) -> Self::Output {
        point3(-self.x, -self.y, -self.z)
    }
}

impl<T> ops::Index<Axis> for Point3<T> {
    type Output = T;

    /// Index the point by an axis to get the immutable coordinate axis value.
    ///
    /// * `axis` - A 3-D coordinate axis.
    fn index(&self, axis: Axis) -> &Self::Output {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl<T> ops::IndexMut<Axis> for Point3<T> {
    /// Index the point by an axis to get a mutable coordinate axis value.
    ///
    /// * `axis` - A 3-D coordinate axis.
    fn index_mut(&mut self, axis: Axis) -> &mut Self::Output {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

impl<T> From<Vector3<T>> for Point3<T> {
    /// Convert a 3-D vector to a 3-D point.
    ///
    /// * `v` - 3-D vector.
    fn from(v: Vector3<T>) -> Self {
        point3(v.x, v.y, v.z)
    }
}

impl<T> From<[T; 3]> for Point3<T> {
    /// Convert an `[x, y, z]` array to a 3-D point.
    ///
    /// * `a` - The coordinates.
    fn from(a: [T; 3]) -> Self {
        let [x, y, z] = a;
        point3(x, y, z)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
#[macro_use]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn has_nans() {
        assert!(!point3(0.0, 0.0, 0.0).has_nans());
        assert!(point3(0.0, 0.0, f64::NAN).has_nans());
    }

    #[test]
    fn offset_by_vector() {
        let p = point3(2.0, 3.0, 4.0) + vector3(1.0, 0.0, 0.0);
        assert_eq!(p, point3(3.0, 3.0, 4.0));
        assert_eq!(p - point3(2.0, 3.0, 4.0), vector3(1.0, 0.0, 0.0));
    }

    prop_point3!(
        point3_f64,
        f64,
        -100.0..100.0f64,
        -100.0..100.0f64,
        -100.0..100.0f64
    );

    proptest! {
        #[test]
        fn min_max_f64(p1 in point3_f64(), p2 in point3_f64()) {
            prop_assert_eq!(p1.min(&p2), point3(p1.x.min(p2.x), p1.y.min(p2.y), p1.z.min(p2.z)));
            prop_assert_eq!(p1.max(&p2), point3(p1.x.max(p2.x), p1.y.max(p2.y), p1.z.max(p2.z)));
        }

        #[test]
        fn index_f64(p in point3_f64()) {
            prop_assert_eq!(p[Axis::X], p.x);
            prop_assert_eq!(p[Axis::Y], p.y);
            prop_assert_eq!(p[Axis::Z], p.z);
        }
    }
}
