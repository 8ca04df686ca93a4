//! Conversions between rotation matrices and quaternions.
//!
//! Matrices and quaternions do not know about each other; the conversions
//! are free functions taking the source value:
//!
//! - [`mat4f_to_quatf`] / [`mat4d_to_quatd`]
//! - [`quatf_to_mat4f`] / [`quatd_to_mat4d`]
//!
//! The methods [`Mat4f::to_quaternion`], [`Quatf::to_matrix`] and the
//! `From<Quat>` impls delegate to them.
//!
//! # Matrix to quaternion
//!
//! The input must be a pure rotation (orthogonal upper-left 3x3, no scale).
//! The extraction divides by `S`, which is built from whichever term is
//! largest so it stays well away from zero for every rotation:
//!
//! | pivot            | condition                        | `S`                          |
//! |------------------|----------------------------------|------------------------------|
//! | trace            | `m00 + m11 + m22 > 0`            | `2 * sqrt(1 + trace)` = `4w` |
//! | x                | `m00 > m11 && m00 > m22`         | `2 * sqrt(1 + m00 - m11 - m22)` |
//! | y                | `m11 > m22`                      | `2 * sqrt(1 + m11 - m00 - m22)` |
//! | z                | otherwise                        | `2 * sqrt(1 + m22 - m00 - m11)` |
//!
//! A single formula dividing by `w` would blow up near 180 degree rotations.
//!
//! # Usage
//!
//! ```rust
//! use tfm_math::{mat4d_to_quatd, quatd_to_mat4d, Mat4d, Vec3d};
//!
//! let r = Mat4d::rotation(180.0, Vec3d::Y);
//! let q = mat4d_to_quatd(&r);
//! assert!(quatd_to_mat4d(q).abs_diff_eq(&r, 1e-12));
//! ```

use crate::{Mat4d, Mat4f, Quatd, Quatf, Vec3d, Vec3f};
use tracing::trace;

/// Term used as the divisor when extracting a quaternion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pivot {
    Trace,
    X,
    Y,
    Z,
}

/// Picks the pivot from the rotation diagonal. Ties go to the later axis.
fn pivot<T: PartialOrd + Copy + Default>(diag: [T; 3], trace: T) -> Pivot {
    if trace > T::default() {
        Pivot::Trace
    } else if diag[0] > diag[1] && diag[0] > diag[2] {
        Pivot::X
    } else if diag[1] > diag[2] {
        Pivot::Y
    } else {
        Pivot::Z
    }
}

macro_rules! impl_rotation_conversion {
    (
        $mat_to_quat:ident, $quat_to_mat:ident,
        $Mat4:ident, $Quat:ident, $Vec3:ident, $t:ty
    ) => {
        /// Extracts the unit quaternion of a pure rotation matrix.
        ///
        /// Only the upper-left 3x3 block is read. The result is undefined
        /// for matrices carrying scale or skew.
        pub fn $mat_to_quat(m: &$Mat4) -> $Quat {
            let e = |row: usize, col: usize| m.m[row * 4 + col];
            let trace = m.trace();
            let pivot = pivot([e(0, 0), e(1, 1), e(2, 2)], trace);
            trace!(?pivot, trace = f64::from(trace), "rotation matrix to quaternion");

            match pivot {
                Pivot::Trace => {
                    let s = (trace + 1.0).sqrt() * 2.0; // 4w
                    $Quat::new(
                        0.25 * s,
                        (e(2, 1) - e(1, 2)) / s,
                        (e(0, 2) - e(2, 0)) / s,
                        (e(1, 0) - e(0, 1)) / s,
                    )
                }
                Pivot::X => {
                    let s = (1.0 + e(0, 0) - e(1, 1) - e(2, 2)).sqrt() * 2.0; // 4x
                    $Quat::new(
                        (e(2, 1) - e(1, 2)) / s,
                        0.25 * s,
                        (e(0, 1) + e(1, 0)) / s,
                        (e(0, 2) + e(2, 0)) / s,
                    )
                }
                Pivot::Y => {
                    let s = (1.0 + e(1, 1) - e(0, 0) - e(2, 2)).sqrt() * 2.0; // 4y
                    $Quat::new(
                        (e(0, 2) - e(2, 0)) / s,
                        (e(0, 1) + e(1, 0)) / s,
                        0.25 * s,
                        (e(1, 2) + e(2, 1)) / s,
                    )
                }
                Pivot::Z => {
                    let s = (1.0 + e(2, 2) - e(0, 0) - e(1, 1)).sqrt() * 2.0; // 4z
                    $Quat::new(
                        (e(1, 0) - e(0, 1)) / s,
                        (e(0, 2) + e(2, 0)) / s,
                        (e(1, 2) + e(2, 1)) / s,
                        0.25 * s,
                    )
                }
            }
        }

        /// Builds the rotation matrix of a unit quaternion.
        #[rustfmt::skip]
        pub fn $quat_to_mat(q: $Quat) -> $Mat4 {
            let $Quat { w, x, y, z } = q;
            let (xx, yy, zz) = (x * x, y * y, z * z);
            let (xy, xz, yz) = (x * y, x * z, y * z);
            let (wx, wy, wz) = (w * x, w * y, w * z);

            $Mat4::from_array([
                1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz),       2.0 * (xz + wy),       0.0,
                2.0 * (xy + wz),       1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx),       0.0,
                2.0 * (xz - wy),       2.0 * (yz + wx),       1.0 - 2.0 * (xx + yy), 0.0,
                0.0,                   0.0,                   0.0,                   1.0,
            ])
        }

        impl $Mat4 {
            /// Quaternion of this rotation matrix. Pure rotations only.
            #[inline]
            pub fn to_quaternion(&self) -> $Quat {
                $mat_to_quat(self)
            }

            /// Inverse model transform with the rotation given as a
            /// quaternion: translates by `-pos`, applies the inverse
            /// rotation, then the inverse scale.
            pub fn inverse_transform_quat(pos: $Vec3, rot: $Quat, scale: $Vec3) -> Self {
                Self::translation(-pos)
                    .then(&rot.inverse().to_matrix())
                    .then(&Self::inverse_scale(scale))
            }
        }

        impl $Quat {
            /// Rotation matrix of this quaternion.
            #[inline]
            pub fn to_matrix(self) -> $Mat4 {
                $quat_to_mat(self)
            }

            /// Quaternion of a pure rotation matrix.
            #[inline]
            pub fn from_rotation_matrix(m: &$Mat4) -> Self {
                $mat_to_quat(m)
            }
        }

        impl From<$Quat> for $Mat4 {
            #[inline]
            fn from(q: $Quat) -> Self {
                $quat_to_mat(q)
            }
        }
    };
}

impl_rotation_conversion!(mat4f_to_quatf, quatf_to_mat4f, Mat4f, Quatf, Vec3f, f32);
impl_rotation_conversion!(mat4d_to_quatd, quatd_to_mat4d, Mat4d, Quatd, Vec3d, f64);
