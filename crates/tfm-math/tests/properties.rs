//! Cross-module properties of vectors, matrices and quaternions.
//!
//! Each section checks an algebraic identity that must hold regardless of
//! how the individual operations are written.

use approx::assert_abs_diff_eq;
use tfm_math::{
    mat4d_to_quatd, mat4f_to_quatf, quatd_to_mat4d, Mat2d, Mat2f, Mat4d, Mat4f, Quatd, Vec2d,
    Vec3d, Vec3f, Vec4d, EPSILON_F32, EPSILON_F64,
};

fn axes() -> [Vec3d; 4] {
    [Vec3d::X, Vec3d::Y, Vec3d::Z, Vec3d::new(1.0, 1.0, 1.0).normalize()]
}

const ANGLES: [f64; 5] = [0.0, 90.0, 180.0, 270.0, 45.0];

fn sample_affine() -> Mat4d {
    Mat4d::transform(
        Vec3d::new(-2.0, 0.5, 7.0),
        &Mat4d::rotation(63.0, Vec3d::new(0.0, 0.6, 0.8)),
        Vec3d::ONE,
    )
}

// ============================================================================
// Vectors
// ============================================================================

#[test]
fn normalize_gives_unit_length() {
    let samples = [
        Vec3d::new(3.0, 4.0, 0.0),
        Vec3d::new(-1e-3, 2e-3, 5e-4),
        Vec3d::new(1e6, -1e6, 3.0),
    ];
    for v in samples {
        assert_abs_diff_eq!(v.normalize().length(), 1.0, epsilon = EPSILON_F64);
    }
    assert_abs_diff_eq!(Vec2d::new(0.0, -5.0).normalize().length(), 1.0, epsilon = EPSILON_F64);
    assert_abs_diff_eq!(Vec4d::new(1.0, 2.0, 3.0, 4.0).normalize().length(), 1.0, epsilon = EPSILON_F64);
}

#[test]
fn normalize_zero_is_zero() {
    assert_eq!(Vec3d::ZERO.normalize(), Vec3d::ZERO);
    assert_eq!(Vec3f::ZERO.normalize(), Vec3f::ZERO);
    assert_eq!(Vec2d::ZERO.normalize(), Vec2d::ZERO);
    assert_eq!(Vec4d::ZERO.normalize(), Vec4d::ZERO);
}

#[test]
fn cross_of_basis_and_orthogonality() {
    assert_eq!(Vec3d::X.cross(Vec3d::Y), Vec3d::Z);
    assert_eq!(Vec3d::Y.cross(Vec3d::Z), Vec3d::X);
    assert_eq!(Vec3d::Z.cross(Vec3d::X), Vec3d::Y);

    let a = Vec3d::new(1.0, -2.0, 0.5);
    let b = Vec3d::new(4.0, 0.25, -3.0);
    let c = a.cross(b);
    assert_abs_diff_eq!(c.dot(a), 0.0, epsilon = EPSILON_F64);
    assert_abs_diff_eq!(c.dot(b), 0.0, epsilon = EPSILON_F64);
    assert_eq!(b.cross(a), -c);
}

#[test]
fn lerp_is_exact_at_endpoints() {
    let a = Vec3d::new(0.1, -7.3, 1e5);
    let b = Vec3d::new(-2.2, 0.3, 3.7);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);

    let a = Vec3f::new(0.1, -7.3, 1e5);
    let b = Vec3f::new(-2.2, 0.3, 3.7);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
}

#[test]
fn reflection_fixes_points_on_the_plane() {
    // plane x + y + z = 3: unit normal and distance sqrt(3) from the origin
    let n = Vec3d::new(1.0, 1.0, 1.0).normalize();
    let d = 3f64.sqrt();
    let plane = Vec4d::new(n.x, n.y, n.z, d);

    let on_plane = Vec3d::new(1.0, 1.0, 1.0);
    assert!(on_plane.reflect_over_plane(plane).abs_diff_eq(on_plane, EPSILON_F64));

    let off = Vec3d::new(2.0, 2.0, 2.0);
    let mirrored = off.reflect_over_plane(plane);
    assert!(mirrored.abs_diff_eq(Vec3d::ZERO, EPSILON_F64));
}

// ============================================================================
// Matrices
// ============================================================================

#[test]
fn identity_is_neutral() {
    let m = sample_affine();
    assert_eq!(m * Mat4d::IDENTITY, m);
    assert_eq!(Mat4d::IDENTITY * m, m);
    assert_eq!(m.then(&Mat4d::IDENTITY), m);

    let p = Mat4d::perspective(16.0 / 9.0, 1.0, 0.1, 100.0);
    assert_eq!(p * Mat4d::IDENTITY, p);

    let m2 = Mat2d::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(m2 * Mat2d::IDENTITY, m2);
    assert_eq!(Mat2d::IDENTITY * m2, m2);
}

#[test]
fn affine_inverse_undoes_rigid_transform() {
    let m = sample_affine();
    let inv = m.invert_affine();
    assert!((m * inv).abs_diff_eq(&Mat4d::IDENTITY, EPSILON_F64));
    assert!((inv * m).abs_diff_eq(&Mat4d::IDENTITY, EPSILON_F64));

    let v = Mat4d::view(Vec3d::new(1.0, 2.0, 3.0), Vec3d::new(10.0, 20.0, 30.0));
    assert!((v * v.invert_affine()).abs_diff_eq(&Mat4d::IDENTITY, EPSILON_F64));
}

#[test]
fn inverse_transform_undoes_transform() {
    let pos = Vec3d::new(4.0, -1.0, 2.0);
    let rot = Mat4d::rotation(110.0, Vec3d::new(1.0, 2.0, -2.0).normalize());
    let scale = Vec3d::new(0.5, 2.0, 4.0);

    let fwd = Mat4d::transform(pos, &rot, scale);
    let back = Mat4d::inverse_transform(pos, &rot, scale);
    assert!((back * fwd).abs_diff_eq(&Mat4d::IDENTITY, EPSILON_F64));
}

#[test]
fn transform_moves_origin_to_position() {
    let pos = Vec3d::new(3.0, -4.0, 5.0);
    let m = Mat4d::transform(pos, &Mat4d::rotation(77.0, Vec3d::Y), Vec3d::splat(3.0));
    assert!(m.transform_point(Vec3d::ZERO).abs_diff_eq(pos, EPSILON_F64));
    assert_eq!(m.get_translation(), pos);
}

#[test]
fn determinants() {
    assert_eq!(Mat2d::IDENTITY.det(), 1.0);
    assert_eq!(Mat2d::new(2.0, 0.0, 0.0, 3.0).det(), 6.0);
    assert_eq!(Mat2f::new(1.0, 2.0, 3.0, 4.0).det(), -2.0);

    let a = Mat2d::new(1.0, 2.0, 3.0, 4.0);
    let b = Mat2d::new(0.5, -1.0, 2.0, 3.0);
    assert_abs_diff_eq!((a * b).det(), a.det() * b.det(), epsilon = EPSILON_F64);
}

#[test]
fn rotation_preserves_lengths_and_orthogonality() {
    for axis in axes() {
        for angle in ANGLES {
            let r = Mat4d::rotation(angle, axis);
            assert!((r * r.transpose()).abs_diff_eq(&Mat4d::IDENTITY, EPSILON_F64));

            let v = Vec3d::new(1.0, -2.0, 3.0);
            assert_abs_diff_eq!(r.transform_direction(v).length(), v.length(), epsilon = EPSILON_F64);
            // the axis is fixed
            assert!(r.transform_direction(axis).abs_diff_eq(axis, EPSILON_F64));
        }
    }
}

// ============================================================================
// Quaternions
// ============================================================================

#[test]
fn rotation_quaternion_roundtrip() {
    for axis in axes() {
        for angle in ANGLES {
            let r = Mat4d::rotation(angle, axis);
            let q = mat4d_to_quatd(&r);
            assert_abs_diff_eq!(q.norm(), 1.0, epsilon = EPSILON_F64);
            assert!(
                quatd_to_mat4d(q).abs_diff_eq(&r, EPSILON_F64),
                "roundtrip failed for {angle} degrees about {axis}"
            );
        }
    }
}

#[test]
fn rotation_quaternion_roundtrip_f32() {
    for axis in axes() {
        let axis = axis.to_f32();
        for angle in ANGLES {
            let r = Mat4f::rotation(angle as f32, axis);
            let back = mat4f_to_quatf(&r).to_matrix();
            assert!(back.abs_diff_eq(&r, EPSILON_F32));
        }
    }
}

#[test]
fn quaternion_matches_axis_angle_up_to_sign() {
    for axis in axes() {
        for angle in ANGLES {
            let expected = Quatd::from_axis_angle(axis, angle);
            let q = Mat4d::rotation(angle, axis).to_quaternion();
            assert!(q.abs_diff_eq(expected, EPSILON_F64) || q.abs_diff_eq(-expected, EPSILON_F64));
        }
    }
}

#[test]
fn quaternion_product_matches_matrix_product() {
    let a = Quatd::from_axis_angle(Vec3d::X, 30.0);
    let b = Quatd::from_axis_angle(Vec3d::new(0.0, 0.6, 0.8), 125.0);

    let via_quat = (a * b).to_matrix();
    let via_mat = a.to_matrix() * b.to_matrix();
    assert!(via_quat.abs_diff_eq(&via_mat, EPSILON_F64));

    let v = Vec3d::new(0.5, 1.5, -2.5);
    assert!((a * b).rotate(v).abs_diff_eq(via_mat.transform_direction(v), EPSILON_F64));
}
