//! Common numeric types, constants and helpers.

use num_traits::Num;
use std::ops::Neg;

/// Use 64-bit precision for floating point numbers.
pub type Float = f64;

/// Default signed integer to 32-bit.
pub type Int = i32;

/// Infinty (∞)
pub const INFINITY: Float = Float::INFINITY;

/// PI (π)
pub const PI: Float = std::f64::consts::PI;

/// Default lower bound of a ray's parametric interval. Keeps rays spawned on a
/// surface from hitting that same surface.
pub const RAY_EPSILON: Float = 0.001;

/// Direction components with a magnitude below this are treated as parallel
/// to the corresponding bounding box slab.
pub const PARALLEL_EPSILON: Float = 1e-5;

/// Axis enumeration
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Axis {
    #[default]
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    /// All three axes in order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl From<usize> for Axis {
    fn from(i: usize) -> Self {
        match i {
            0 => Axis::X,
            1 => Axis::Y,
            2 => Axis::Z,
            _ => panic!("invalid axis value"),
        }
    }
}

/// Returns the absolute value of a number.
///
/// * `n` - The number.
pub fn abs<T>(n: T) -> T
where
    T: Num + Neg<Output = T> + PartialOrd + Copy,
{
    if n < T::zero() {
        -n
    } else {
        n
    }
}

/// Returns the minimum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
pub fn min<T>(a: T, b: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the maximum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
pub fn max<T>(a: T, b: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if a > b {
        a
    } else {
        b
    }
}

/// Clamps a value x to [min, max].
///
/// * `x` - The number to clamp.
/// * `min` - Minimum value.
/// * `max` - Maximum value.
pub fn clamp<T>(x: T, min: T, max: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

/// Real roots of a quadratic equation.
pub struct Quadratic {}

impl Quadratic {
    /// Solve the quadratic equation a * x ^ 2  + b * x + c = 0 and return both
    /// roots in ascending order. A tangent ray yields the same root twice.
    ///
    /// Returns `None` if there are no real roots or `a` is zero.
    ///
    /// * `a` - Coefficient of x ^ 2 term.
    /// * `b` - Coefficient of x term.
    /// * `c` - Coefficient of constant term.
    pub fn solve(a: Float, b: Float, c: Float) -> Option<(Float, Float)> {
        if a == 0.0 {
            return None;
        }

        // Find quadratic discriminant
        let discrim = b * b - 4.0 * a * c;
        if discrim < 0.0 || discrim.is_nan() {
            return None;
        }
        let root_discrim = discrim.sqrt();

        // Compute quadratic _t_ values avoiding cancellation between `b` and
        // the root of the discriminant.
        let q = if b < 0.0 {
            -0.5 * (b - root_discrim)
        } else {
            -0.5 * (b + root_discrim)
        };

        // b == 0 and discrim == 0 leaves a double root at zero.
        if q == 0.0 {
            return Some((0.0, 0.0));
        }

        let t0 = q / a;
        let t1 = c / q;
        if t0 > t1 {
            Some((t1, t0))
        } else {
            Some((t0, t1))
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    #[test]
    fn axis_from_usize() {
        assert_eq!(Axis::from(0), Axis::X);
        assert_eq!(Axis::from(1), Axis::Y);
        assert_eq!(Axis::from(2), Axis::Z);
    }

    #[test]
    #[should_panic]
    fn axis_from_usize_out_of_range() {
        let _ = Axis::from(3);
    }

    #[test]
    fn quadratic_no_real_roots() {
        assert_eq!(Quadratic::solve(1.0, 0.0, 1.0), None);
    }

    #[test]
    fn quadratic_degenerate_leading_coefficient() {
        assert_eq!(Quadratic::solve(0.0, 2.0, 1.0), None);
    }

    #[test]
    fn quadratic_roots_are_sorted() {
        // (x - 4)(x - 6)
        assert_eq!(Quadratic::solve(1.0, -10.0, 24.0), Some((4.0, 6.0)));
        // -(x - 4)(x - 6)
        assert_eq!(Quadratic::solve(-1.0, 10.0, -24.0), Some((4.0, 6.0)));
    }

    #[test]
    fn quadratic_double_root() {
        assert_eq!(Quadratic::solve(1.0, 0.0, 0.0), Some((0.0, 0.0)));
        assert_eq!(Quadratic::solve(1.0, -2.0, 1.0), Some((1.0, 1.0)));
    }

    proptest! {
        #[test]
        fn quadratic_recovers_roots(r0 in -100.0..100.0f64, gap in 1.0..100.0f64) {
            // Expand (x - r0)(x - r1).
            let r1 = r0 + gap;
            let (t0, t1) = Quadratic::solve(1.0, -(r0 + r1), r0 * r1).unwrap();
            prop_assert!(approx_eq!(Float, t0, r0, epsilon = 1e-6));
            prop_assert!(approx_eq!(Float, t1, r1, epsilon = 1e-6));
        }

        #[test]
        fn clamp_stays_in_range(x in -100.0..100.0f64) {
            let c = clamp(x, -1.0, 1.0);
            prop_assert!((-1.0..=1.0).contains(&c));
        }
    }
}
