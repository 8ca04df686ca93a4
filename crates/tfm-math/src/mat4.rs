//! 4x4 matrix types for affine transforms and projections.
//!
//! [`Mat4f`] and [`Mat4d`] build translations, rotations, scales, view and
//! projection matrices, and compose them.
//!
//! # Convention
//!
//! Elements are stored **row-major** and accessed as `(col, row)`, so
//! `get(x, y) == m[y * 4 + x]`. Vectors are **columns** and translation
//! lives in column 3:
//!
//! ```text
//! | r00 r01 r02 tx |
//! | r10 r11 r12 ty |
//! | r20 r21 r22 tz |
//! |  0   0   0   1 |
//! ```
//!
//! A 3D vector is either a point ([`Mat4f::transform_point`], implicit
//! `w = 1`) or a direction ([`Mat4f::transform_direction`], implicit
//! `w = 0`). There is no `Mat4 * Vec3` operator.
//!
//! # Usage
//!
//! ```rust
//! use tfm_math::{Mat4f, Vec3f};
//!
//! let model = Mat4f::transform(
//!     Vec3f::new(1.0, 2.0, 3.0),
//!     &Mat4f::rotation(90.0, Vec3f::Z),
//!     Vec3f::ONE,
//! );
//! let p = model.transform_point(Vec3f::ZERO);
//! assert_eq!(p, Vec3f::new(1.0, 2.0, 3.0));
//! ```

use crate::{Vec3d, Vec3f, Vec4d, Vec4f};
use tracing::debug;

macro_rules! impl_mat4 {
    ($(#[$meta:meta])* $Mat4:ident, $t:ty, $Vec3:ident, $Vec4:ident, $Glam:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[repr(C)]
        pub struct $Mat4 {
            /// Matrix elements in row-major order.
            pub m: [$t; 16],
        }

        impl $Mat4 {
            /// Identity matrix.
            #[rustfmt::skip]
            pub const IDENTITY: Self = Self::from_array([
                1.0, 0.0, 0.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ]);

            /// Returns a row as a vector.
            #[inline]
            pub fn row(&self, i: usize) -> $Vec4 {
                $Vec4::new(self.m[i * 4], self.m[i * 4 + 1], self.m[i * 4 + 2], self.m[i * 4 + 3])
            }

            /// Returns a column as a vector.
            #[inline]
            pub fn col(&self, i: usize) -> $Vec4 {
                $Vec4::new(self.m[i], self.m[4 + i], self.m[8 + i], self.m[12 + i])
            }

            /// Adds `v` to the first three diagonal entries.
            #[inline]
            pub fn add_diagonal(&self, v: $Vec3) -> Self {
                let mut m = self.m;
                m[0] += v.x;
                m[5] += v.y;
                m[10] += v.z;
                Self { m }
            }

            /// Matrix-vector product `M * v`.
            #[inline]
            pub fn mul_vec4(&self, v: $Vec4) -> $Vec4 {
                $Vec4::new(
                    self.row(0).dot(v),
                    self.row(1).dot(v),
                    self.row(2).dot(v),
                    self.row(3).dot(v),
                )
            }

            /// Transforms a point: applies the upper 3x4 block with an
            /// implicit `w = 1`, so translation is applied.
            ///
            /// The bottom row is ignored (no perspective divide).
            #[inline]
            pub fn transform_point(&self, p: $Vec3) -> $Vec3 {
                let m = &self.m;
                $Vec3::new(
                    m[0] * p.x + m[1] * p.y + m[2] * p.z + m[3],
                    m[4] * p.x + m[5] * p.y + m[6] * p.z + m[7],
                    m[8] * p.x + m[9] * p.y + m[10] * p.z + m[11],
                )
            }

            /// Transforms a direction: applies the upper-left 3x3 block
            /// only, translation is ignored.
            #[inline]
            pub fn transform_direction(&self, d: $Vec3) -> $Vec3 {
                let m = &self.m;
                $Vec3::new(
                    m[0] * d.x + m[1] * d.y + m[2] * d.z,
                    m[4] * d.x + m[5] * d.y + m[6] * d.z,
                    m[8] * d.x + m[9] * d.y + m[10] * d.z,
                )
            }

            /// Trace of the upper-left 3x3 (rotation) block.
            ///
            /// The homogeneous corner is not included.
            #[inline]
            pub fn trace(&self) -> $t {
                self.m[0] + self.m[5] + self.m[10]
            }

            /// Translation stored in column 3.
            #[inline]
            pub fn get_translation(&self) -> $Vec3 {
                $Vec3::new(self.m[3], self.m[7], self.m[11])
            }

            /// Translation matrix.
            #[rustfmt::skip]
            pub fn translation(v: $Vec3) -> Self {
                Self::from_array([
                    1.0, 0.0, 0.0, v.x,
                    0.0, 1.0, 0.0, v.y,
                    0.0, 0.0, 1.0, v.z,
                    0.0, 0.0, 0.0, 1.0,
                ])
            }

            /// Rotation of `angle` degrees counter-clockwise about `axis`
            /// (Rodrigues' formula).
            ///
            /// `axis` must be unit length. A non-unit axis yields a
            /// non-orthogonal matrix; this is not checked.
            pub fn rotation(angle: $t, axis: $Vec3) -> Self {
                let (sin, cos) = angle.to_radians().sin_cos();
                let c = 1.0 - cos;
                let $Vec3 { x, y, z } = axis;

                let mut m = Self::IDENTITY.m;
                m[0] = cos + x * x * c;
                m[1] = x * y * c - z * sin;
                m[2] = x * z * c + y * sin;
                m[4] = y * x * c + z * sin;
                m[5] = cos + y * y * c;
                m[6] = y * z * c - x * sin;
                m[8] = z * x * c - y * sin;
                m[9] = z * y * c + x * sin;
                m[10] = cos + z * z * c;
                Self { m }
            }

            /// Axis-aligned scale matrix.
            #[rustfmt::skip]
            pub fn scale(s: $Vec3) -> Self {
                Self::from_array([
                    s.x, 0.0, 0.0, 0.0,
                    0.0, s.y, 0.0, 0.0,
                    0.0, 0.0, s.z, 0.0,
                    0.0, 0.0, 0.0, 1.0,
                ])
            }

            /// Scale by the reciprocal of each axis of `s`.
            ///
            /// A zero axis produces an infinite entry; this is not guarded.
            #[inline]
            pub fn inverse_scale(s: $Vec3) -> Self {
                Self::scale($Vec3::new(1.0 / s.x, 1.0 / s.y, 1.0 / s.z))
            }

            /// Model transform: scales, then rotates by `rot`, then
            /// translates to `pos`.
            pub fn transform(pos: $Vec3, rot: &Self, scale: $Vec3) -> Self {
                Self::scale(scale)
                    .then(rot)
                    .then(&Self::translation(pos))
            }

            /// Inverse of [`transform`](Self::transform): translates by `-pos`,
            /// applies `rot` transposed, then the inverse scale.
            ///
            /// Only valid when `rot` is orthogonal (a pure rotation).
            pub fn inverse_transform(pos: $Vec3, rot: &Self, scale: $Vec3) -> Self {
                Self::translation(-pos)
                    .then(&rot.transpose())
                    .then(&Self::inverse_scale(scale))
            }

            /// Perspective projection with a vertical field of view of `fov`
            /// radians, mapping `[near, far]` onto the clip range `[-1, 1]`.
            #[rustfmt::skip]
            pub fn perspective(aspect: $t, fov: $t, near: $t, far: $t) -> Self {
                let tan_half_fov = (fov / 2.0).tan();
                let depth = far - near;

                Self::from_array([
                    1.0 / (aspect * tan_half_fov), 0.0, 0.0, 0.0,
                    0.0, 1.0 / tan_half_fov, 0.0, 0.0,
                    0.0, 0.0, -(far + near) / depth, -(2.0 * far * near) / depth,
                    0.0, 0.0, -1.0, 0.0,
                ])
            }

            /// Orthographic projection of the box `[-width, width]` by
            /// `[-height, height]` by `[near, far]`.
            ///
            /// The y axis is flipped: `-height` maps to the top.
            #[rustfmt::skip]
            pub fn orthographic(width: $t, height: $t, near: $t, far: $t) -> Self {
                let (left, right) = (-width, width);
                let (top, bottom) = (-height, height);

                Self::from_array([
                    2.0 / (right - left), 0.0, 0.0, -(right + left) / (right - left),
                    0.0, 2.0 / (top - bottom), 0.0, -(top + bottom) / (top - bottom),
                    0.0, 0.0, -2.0 / (far - near), -(far + near) / (far - near),
                    0.0, 0.0, 0.0, 1.0,
                ])
            }

            /// Rebuilds the x/y scaling of a perspective projection for a new
            /// aspect ratio and field of view, keeping the depth mapping
            /// (near/far terms) already stored in this matrix.
            #[rustfmt::skip]
            pub fn update_perspective(&self, aspect: $t, fov: $t) -> Self {
                debug!(aspect = f64::from(aspect), fov = f64::from(fov), "update_perspective");
                let tan_half_fov = (fov / 2.0).tan();

                Self::from_array([
                    1.0 / (aspect * tan_half_fov), 0.0, 0.0, 0.0,
                    0.0, 1.0 / tan_half_fov, 0.0, 0.0,
                    0.0, 0.0, self.m[10], self.m[11],
                    0.0, 0.0, -1.0, 0.0,
                ])
            }

            /// View matrix for a camera at `pos` with Euler angles `rot` in
            /// degrees: translates by `-pos`, then rotates about Z, Y and X
            /// in that order.
            pub fn view(pos: $Vec3, rot: $Vec3) -> Self {
                let rotation_x = Self::rotation(rot.x, $Vec3::X);
                let rotation_y = Self::rotation(rot.y, $Vec3::Y);
                let rotation_z = Self::rotation(rot.z, $Vec3::Z);

                Self::translation(-pos)
                    .then(&rotation_z)
                    .then(&rotation_y)
                    .then(&rotation_x)
            }

            /// Inverse of an affine matrix whose upper-left 3x3 is orthogonal.
            ///
            /// The rotation block is transposed and the translation becomes
            /// `-R^T * t`. Matrices with scale or skew get a wrong result;
            /// this is not a general inverse.
            pub fn invert_affine(&self) -> Self {
                let r = self.to_array();
                let t = -self.get_translation();

                let mut m = Self::IDENTITY.m;
                for row in 0..3 {
                    for col in 0..3 {
                        m[row * 4 + col] = r[col * 4 + row];
                    }
                    m[row * 4 + 3] =
                        m[row * 4] * t.x + m[row * 4 + 1] * t.y + m[row * 4 + 2] * t.z;
                }
                Self { m }
            }
        }

        impl_mat_common!($Mat4, $t, 4, $Glam);

        impl std::ops::Mul<$Vec4> for $Mat4 {
            type Output = $Vec4;

            #[inline]
            fn mul(self, rhs: $Vec4) -> $Vec4 {
                self.mul_vec4(rhs)
            }
        }
    };
}

impl_mat4!(
    /// A single-precision 4x4 matrix.
    Mat4f, f32, Vec3f, Vec4f, glam::Mat4
);
impl_mat4!(
    /// A double-precision 4x4 matrix.
    Mat4d, f64, Vec3d, Vec4d, glam::DMat4
);
impl_mat_precision!(Mat4f, Mat4d);
