//! Orthonormal frames

use super::abs;
use super::vector3::{vector3, Vector3};
use num_traits::Float;

/// Returns two unit vectors completing an orthonormal frame around the unit
/// vector `v1`, ordered so that `(v1, v2, v3)` is right-handed.
///
/// `v2` drops the smaller of `v1.x` and `v1.y`, swaps the other two
/// components and negates one of them.
///
/// * `v1` - Unit vector the frame is built around.
pub fn get_coordinate_system_vectors<T: Float>(v1: &Vector3<T>) -> (Vector3<T>, Vector3<T>) {
    let v2 = if abs(v1.x) > abs(v1.y) {
        let len = (v1.x * v1.x + v1.z * v1.z).sqrt();
        vector3(-v1.z / len, T::zero(), v1.x / len)
    } else {
        let len = (v1.y * v1.y + v1.z * v1.z).sqrt();
        vector3(T::zero(), v1.z / len, -v1.y / len)
    };
    (v2, v1.cross(&v2))
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
#[macro_use]
mod tests {
    use super::super::common::Dot;
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    #[test]
    fn frame_around_x_axis() {
        let (v2, v3) = get_coordinate_system_vectors(&vector3(1.0, 0.0, 0.0));
        assert_eq!(v2, vector3(0.0, 0.0, 1.0));
        assert_eq!(v3, vector3(0.0, -1.0, 0.0));
    }

    #[test]
    fn frame_around_z_axis() {
        let (v2, v3) = get_coordinate_system_vectors(&vector3(0.0, 0.0, 1.0));
        assert_eq!(v2, vector3(0.0, 1.0, 0.0));
        assert_eq!(v3, vector3(-1.0, 0.0, 0.0));
    }

    prop_vector3!(
        vector3_f64,
        f64,
        -1.0..1.0f64,
        -1.0..1.0f64,
        0.1..1.0f64
    );

    proptest! {
        #[test]
        fn basis_is_orthonormal(v in vector3_f64()) {
            let v1 = v.normalize();
            let (v2, v3) = get_coordinate_system_vectors(&v1);
            prop_assert!(approx_eq!(f64, v1.dot(&v2), 0.0, epsilon = 1e-12));
            prop_assert!(approx_eq!(f64, v1.dot(&v3), 0.0, epsilon = 1e-12));
            prop_assert!(approx_eq!(f64, v2.dot(&v3), 0.0, epsilon = 1e-12));
            prop_assert!(approx_eq!(f64, v2.length(), 1.0, epsilon = 1e-12));
            prop_assert!(approx_eq!(f64, v3.length(), 1.0, epsilon = 1e-12));
        }
    }
}
