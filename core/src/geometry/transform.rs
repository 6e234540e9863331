//! Affine transformation constructors.
//!
//! These build the `Matrix4x4` handed to a `Transformer`. Angles are in
//! radians.

use super::{matrix4x4, Float, Matrix4x4, Point3f, Vector3f, IDENTITY_MATRIX};
use crate::error::GeometryError;

/// Create a matrix representing a translation.
///
/// * `delta` -  Translation.
#[rustfmt::skip]
pub fn translate(delta: &Vector3f) -> Matrix4x4 {
    matrix4x4(
        1.0, 0.0, 0.0, delta.x,
        0.0, 1.0, 0.0, delta.y,
        0.0, 0.0, 1.0, delta.z,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Create a matrix representing a scale.
///
/// * `x` -  Scaling factor in x-axis.
/// * `y` -  Scaling factor in y-axis.
/// * `z` -  Scaling factor in z-axis.
#[rustfmt::skip]
pub fn scale(x: Float, y: Float, z: Float) -> Matrix4x4 {
    matrix4x4(
        x,   0.0, 0.0, 0.0,
        0.0, y,   0.0, 0.0,
        0.0, 0.0, z,   0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Create a matrix representing rotation about the x-axis.
///
/// * `theta` -  Angle in radians.
#[rustfmt::skip]
pub fn rotate_x(theta: Float) -> Matrix4x4 {
    let (sin_theta, cos_theta) = theta.sin_cos();
    matrix4x4(
        1.0, 0.0,        0.0,       0.0,
        0.0, cos_theta, -sin_theta, 0.0,
        0.0, sin_theta,  cos_theta, 0.0,
        0.0, 0.0,        0.0,       1.0,
    )
}

/// Create a matrix representing rotation about the y-axis.
///
/// * `theta` -  Angle in radians.
#[rustfmt::skip]
pub fn rotate_y(theta: Float) -> Matrix4x4 {
    let (sin_theta, cos_theta) = theta.sin_cos();
    matrix4x4(
         cos_theta, 0.0, sin_theta, 0.0,
         0.0,       1.0, 0.0,       0.0,
        -sin_theta, 0.0, cos_theta, 0.0,
         0.0,       0.0, 0.0,       1.0,
    )
}

/// Create a matrix representing rotation about the z-axis.
///
/// * `theta` -  Angle in radians.
#[rustfmt::skip]
pub fn rotate_z(theta: Float) -> Matrix4x4 {
    let (sin_theta, cos_theta) = theta.sin_cos();
    matrix4x4(
        cos_theta, -sin_theta, 0.0, 0.0,
        sin_theta,  cos_theta, 0.0, 0.0,
        0.0,        0.0,       1.0, 0.0,
        0.0,        0.0,       0.0, 1.0,
    )
}

/// Create a matrix representing rotation about an arbitrary axis.
///
/// * `theta` - Angle in radians.
/// * `axis`  - Axis of rotation; need not be normalized but must be non-zero.
pub fn rotate_axis(theta: Float, axis: &Vector3f) -> Result<Matrix4x4, GeometryError> {
    if axis.length_squared() == 0.0 {
        return Err(GeometryError::DegenerateBasis);
    }
    let a = axis.normalize();
    let (sin_theta, cos_theta) = theta.sin_cos();
    let mut m = IDENTITY_MATRIX;

    // Compute rotation of first basis vector
    m.m[0][0] = a.x * a.x + (1.0 - a.x * a.x) * cos_theta;
    m.m[0][1] = a.x * a.y * (1.0 - cos_theta) - a.z * sin_theta;
    m.m[0][2] = a.x * a.z * (1.0 - cos_theta) + a.y * sin_theta;

    // Compute rotations of second and third basis vectors
    m.m[1][0] = a.x * a.y * (1.0 - cos_theta) + a.z * sin_theta;
    m.m[1][1] = a.y * a.y + (1.0 - a.y * a.y) * cos_theta;
    m.m[1][2] = a.y * a.z * (1.0 - cos_theta) - a.x * sin_theta;

    m.m[2][0] = a.x * a.z * (1.0 - cos_theta) - a.y * sin_theta;
    m.m[2][1] = a.y * a.z * (1.0 - cos_theta) + a.x * sin_theta;
    m.m[2][2] = a.z * a.z + (1.0 - a.z * a.z) * cos_theta;

    Ok(m)
}

/// Generate the view matrix that maps world space into the space of an eye
/// at `eye` looking towards `target`. The eye looks down its own -z axis with
/// +y up.
///
/// * `eye`    - Position of the eye.
/// * `target` - Position to point towards.
/// * `up`     - Approximate up direction; must not be parallel to the view
///              direction.
#[rustfmt::skip]
pub fn look_at(eye: &Point3f, target: &Point3f, up: &Vector3f) -> Result<Matrix4x4, GeometryError> {
    let view = *target - *eye;
    if view.length_squared() == 0.0 || up.length_squared() == 0.0 {
        return Err(GeometryError::DegenerateBasis);
    }

    let forward = view.normalize();
    let left = forward.cross(&up.normalize());
    if left.length_squared() == 0.0 {
        return Err(GeometryError::DegenerateBasis);
    }
    let left = left.normalize();
    let true_up = left.cross(&forward);

    let orientation = matrix4x4(
        left.x,     left.y,     left.z,     0.0,
        true_up.x,  true_up.y,  true_up.z,  0.0,
        -forward.x, -forward.y, -forward.z, 0.0,
        0.0,        0.0,        0.0,        1.0,
    );

    Ok(orientation * translate(&Vector3f::new(-eye.x, -eye.y, -eye.z)))
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
#[macro_use]
mod tests {
    use super::super::{point3, vector3, PI};
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    fn assert_vector_eq(a: Vector3f, b: Vector3f) {
        assert!(approx_eq!(Float, a.x, b.x, epsilon = 1e-12), "{a:?} != {b:?}");
        assert!(approx_eq!(Float, a.y, b.y, epsilon = 1e-12), "{a:?} != {b:?}");
        assert!(approx_eq!(Float, a.z, b.z, epsilon = 1e-12), "{a:?} != {b:?}");
    }

    #[test]
    fn translate_moves_points_not_vectors() {
        let m = translate(&vector3(5.0, -3.0, 2.0));
        assert_eq!(m * point3(-3.0, 4.0, 5.0), point3(2.0, 1.0, 7.0));
        assert_eq!(m * vector3(-3.0, 4.0, 5.0), vector3(-3.0, 4.0, 5.0));
    }

    #[test]
    fn inverse_translation_moves_backwards() {
        let m = translate(&vector3(5.0, -3.0, 2.0)).inverse().unwrap();
        assert_eq!(m * point3(-3.0, 4.0, 5.0), point3(-8.0, 7.0, 3.0));
    }

    #[test]
    fn scale_applies_to_points_and_vectors() {
        let m = scale(2.0, 3.0, 4.0);
        assert_eq!(m * point3(-4.0, 6.0, 8.0), point3(-8.0, 18.0, 32.0));
        assert_eq!(m * vector3(-4.0, 6.0, 8.0), vector3(-8.0, 18.0, 32.0));
    }

    #[test]
    fn reflection_is_negative_scale() {
        assert_eq!(scale(-1.0, 1.0, 1.0) * point3(2.0, 3.0, 4.0), point3(-2.0, 3.0, 4.0));
    }

    #[test]
    fn rotations_quarter_turn() {
        let v = vector3(0.0, 1.0, 0.0);
        assert_vector_eq(rotate_x(PI / 2.0) * v, vector3(0.0, 0.0, 1.0));

        let v = vector3(0.0, 0.0, 1.0);
        assert_vector_eq(rotate_y(PI / 2.0) * v, vector3(1.0, 0.0, 0.0));

        let v = vector3(0.0, 1.0, 0.0);
        assert_vector_eq(rotate_z(PI / 2.0) * v, vector3(-1.0, 0.0, 0.0));
    }

    #[test]
    fn rotate_axis_matches_principal_axes() {
        let theta = 0.7;
        let v = vector3(0.3, -1.2, 2.5);
        let rx = rotate_axis(theta, &vector3(2.0, 0.0, 0.0)).unwrap();
        assert_vector_eq(rx * v, rotate_x(theta) * v);
        let rz = rotate_axis(theta, &vector3(0.0, 0.0, 1.0)).unwrap();
        assert_vector_eq(rz * v, rotate_z(theta) * v);
    }

    #[test]
    fn rotate_axis_rejects_zero_axis() {
        assert_eq!(
            rotate_axis(1.0, &Vector3f::zero()),
            Err(GeometryError::DegenerateBasis)
        );
    }

    #[test]
    fn look_at_default_orientation_is_identity() {
        let m = look_at(
            &point3(0.0, 0.0, 0.0),
            &point3(0.0, 0.0, -1.0),
            &vector3(0.0, 1.0, 0.0),
        )
        .unwrap();
        assert_eq!(m, IDENTITY_MATRIX);
    }

    #[test]
    fn look_at_moves_the_world() {
        let m = look_at(
            &point3(0.0, 0.0, 8.0),
            &point3(0.0, 0.0, 0.0),
            &vector3(0.0, 1.0, 0.0),
        )
        .unwrap();
        assert_eq!(m * point3(0.0, 0.0, 0.0), point3(0.0, 0.0, -8.0));
    }

    #[test]
    fn look_at_rejects_degenerate_input() {
        let eye = point3(1.0, 2.0, 3.0);
        let up = vector3(0.0, 1.0, 0.0);
        assert!(look_at(&eye, &eye, &up).is_err());
        assert!(look_at(&eye, &point3(1.0, 5.0, 3.0), &up).is_err());
    }

    proptest! {
        #[test]
        fn rotations_preserve_length(theta in -10.0..10.0f64, x in -10.0..10.0f64, y in -10.0..10.0f64) {
            let v = vector3(x, y, 1.0);
            for m in [rotate_x(theta), rotate_y(theta), rotate_z(theta)] {
                prop_assert!(approx_eq!(Float, (m * v).length(), v.length(), epsilon = 1e-9));
            }
        }
    }
}
