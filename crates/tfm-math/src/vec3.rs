//! 3D vector types.
//!
//! [`Vec3f`] and [`Vec3d`] carry positions, directions, scales and Euler
//! angles. Whether a vector is a point or a direction is decided by the
//! matrix operation applied to it ([`Mat4f::transform_point`] versus
//! [`Mat4f::transform_direction`]), never by the vector itself.
//!
//! # Usage
//!
//! ```rust
//! use tfm_math::Vec3d;
//!
//! let z = Vec3d::X.cross(Vec3d::Y);
//! assert_eq!(z, Vec3d::Z);
//!
//! let unit = Vec3d::new(3.0, 0.0, 4.0).normalize();
//! assert!((unit.length() - 1.0).abs() < 1e-12);
//! ```

use crate::{Mat4d, Mat4f, Vec4d, Vec4f};

macro_rules! impl_vec3 {
    ($(#[$meta:meta])* $Vec3:ident, $t:ty, $Vec4:ident, $Mat4:ident, $Glam:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        #[repr(C)]
        pub struct $Vec3 {
            /// X component
            pub x: $t,
            /// Y component
            pub y: $t,
            /// Z component
            pub z: $t,
        }

        impl $Vec3 {
            /// Zero vector (0, 0, 0).
            pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

            /// One vector (1, 1, 1).
            pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

            /// Unit X vector (1, 0, 0).
            pub const X: Self = Self::new(1.0, 0.0, 0.0);

            /// Unit Y vector (0, 1, 0).
            pub const Y: Self = Self::new(0.0, 1.0, 0.0);

            /// Unit Z vector (0, 0, 1).
            pub const Z: Self = Self::new(0.0, 0.0, 1.0);

            /// Right-handed cross product.
            #[inline]
            pub fn cross(self, other: Self) -> Self {
                Self::new(
                    self.y * other.z - self.z * other.y,
                    self.z * other.x - self.x * other.z,
                    self.x * other.y - self.y * other.x,
                )
            }

            /// Clamps every component to at most `limit`.
            #[inline]
            pub fn clamp_max(self, limit: $t) -> Self {
                Self::new(self.x.min(limit), self.y.min(limit), self.z.min(limit))
            }

            /// Applies the upper-left 3x3 block of `m` to this vector as a
            /// linear map (no translation).
            #[inline]
            pub fn linear_map(self, m: &$Mat4) -> Self {
                m.transform_direction(self)
            }

            /// Outer product `M[i][j] = self[i] * other[j]` in the upper-left
            /// 3x3 block. The fourth row and column are zero.
            pub fn outer_product(self, other: Self) -> $Mat4 {
                let a = self.to_array();
                let b = other.to_array();
                let mut m = [0.0; 16];
                for i in 0..3 {
                    for j in 0..3 {
                        m[i * 4 + j] = a[i] * b[j];
                    }
                }
                $Mat4::from_array(m)
            }

            /// Skew-symmetric matrix of this vector, so that
            /// `v.star().transform_direction(u) == v.cross(u)`.
            ///
            /// The homogeneous corner is 1.
            #[rustfmt::skip]
            pub fn star(self) -> $Mat4 {
                $Mat4::from_array([
                    0.0,     -self.z, self.y,  0.0,
                    self.z,  0.0,     -self.x, 0.0,
                    -self.y, self.x,  0.0,     0.0,
                    0.0,     0.0,     0.0,     1.0,
                ])
            }

            /// Reflects this point across `plane`, given as `(nx, ny, nz, d)`:
            /// unit normal plus signed distance from the origin.
            ///
            /// The normal must be unit length; this is not checked.
            pub fn reflect_over_plane(self, plane: $Vec4) -> Self {
                let n = plane.truncate();
                let point_on_plane = n * plane.w;
                let d = self - point_on_plane;
                let d_normal = n * d.dot(n);
                point_on_plane + (d - d_normal * 2.0)
            }

            /// Extends to a 4D vector with the given `w`.
            #[inline]
            pub fn extend(self, w: $t) -> $Vec4 {
                $Vec4::new(self.x, self.y, self.z, w)
            }
        }

        impl_vec_common!($Vec3, $t, 3, $Glam, [0 => x, 1 => y, 2 => z]);
    };
}

impl_vec3!(
    /// A single-precision 3D vector.
    Vec3f, f32, Vec4f, Mat4f, glam::Vec3
);
impl_vec3!(
    /// A double-precision 3D vector.
    Vec3d, f64, Vec4d, Mat4d, glam::DVec3
);
impl_vec_precision!(Vec3f, Vec3d, [x, y, z]);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_vec3_new() {
        let v = Vec3f::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_ops() {
        let a = Vec3d::new(1.0, 2.0, 3.0);
        let b = Vec3d::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3d::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3d::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3d::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a.scale(2.0));
        assert_eq!(-a, Vec3d::new(-1.0, -2.0, -3.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_vec3_cross() {
        assert_eq!(Vec3d::new(1.0, 0.0, 0.0).cross(Vec3d::new(0.0, 1.0, 0.0)), Vec3d::Z);
        assert_eq!(Vec3d::Y.cross(Vec3d::X), -Vec3d::Z);
    }

    #[test]
    fn test_vec3_normalize() {
        let v = Vec3d::new(1.0, 2.0, -2.0).normalize();
        assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1e-12);
        assert_eq!(Vec3d::ZERO.normalize(), Vec3d::ZERO);
        assert_eq!(Vec3f::ZERO.normalize(), Vec3f::ZERO);
    }

    #[test]
    fn test_vec3_length() {
        let v = Vec3f::new(2.0, 3.0, 6.0);
        assert_eq!(v.length_squared(), 49.0);
        assert_eq!(v.length(), 7.0);
    }

    #[test]
    fn test_vec3_elementwise_and_minmax() {
        let a = Vec3d::new(1.0, -2.0, 3.0);
        let b = Vec3d::new(2.0, 4.0, -1.0);
        assert_eq!(a.mul_elem(b), Vec3d::new(2.0, -8.0, -3.0));
        assert_eq!(a * b, a.mul_elem(b));
        assert_eq!(a.min(b), Vec3d::new(1.0, -2.0, -1.0));
        assert_eq!(a.max(b), Vec3d::new(2.0, 4.0, 3.0));
        assert_eq!(a.clamp_max(1.5), Vec3d::new(1.0, -2.0, 1.5));
    }

    #[test]
    fn test_vec3_lerp() {
        let a = Vec3d::new(0.1, 0.7, -3.3);
        let b = Vec3d::new(9.0, -2.5, 1.0 / 3.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(Vec3d::ZERO.lerp(Vec3d::ONE, 0.5), Vec3d::splat(0.5));
        // no clamping
        assert_eq!(Vec3d::ZERO.lerp(Vec3d::ONE, 2.0), Vec3d::splat(2.0));
    }

    #[test]
    fn test_vec3_reflect_over_plane() {
        let plane = Vec4d::new(0.0, 1.0, 0.0, 2.0);

        let on_plane = Vec3d::new(3.0, 2.0, -1.0);
        assert_eq!(on_plane.reflect_over_plane(plane), on_plane);

        let above = Vec3d::new(1.0, 5.0, 1.0);
        assert_eq!(above.reflect_over_plane(plane), Vec3d::new(1.0, -1.0, 1.0));
    }

    #[test]
    fn test_vec3_outer_product() {
        let m = Vec3d::new(1.0, 2.0, 3.0).outer_product(Vec3d::new(4.0, 5.0, 6.0));
        assert_eq!(m[(0, 0)], 4.0);
        assert_eq!(m[(2, 0)], 6.0);
        assert_eq!(m[(0, 2)], 12.0);
        assert_eq!(m[(2, 2)], 18.0);
        assert_eq!(m[(3, 3)], 0.0);
        assert_eq!(m[(3, 0)], 0.0);
    }

    #[test]
    fn test_vec3_star_is_cross() {
        let a = Vec3d::new(1.0, -2.0, 0.5);
        let b = Vec3d::new(3.0, 4.0, -1.0);
        assert_eq!(a.star().transform_direction(b), a.cross(b));
        assert_eq!(a.star()[(3, 3)], 1.0);
    }

    #[test]
    fn test_vec3_linear_map() {
        let m = Mat4d::scale(Vec3d::new(2.0, 3.0, 4.0)).then(&Mat4d::translation(Vec3d::ONE));
        assert_eq!(Vec3d::ONE.linear_map(&m), Vec3d::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_vec3_index() {
        let v = Vec3f::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v[2], 3.0);
        assert_eq!(v.get(3), Err(tfm_core::Error::index_out_of_range(3, 3)));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_vec3_index_panics() {
        let _ = Vec3d::ONE[3];
    }

    #[test]
    fn test_vec3_precision() {
        let f = Vec3f::new(0.1, 0.2, 0.3);
        let d: Vec3d = f.into();
        assert_eq!(d.x, f64::from(0.1f32));
        assert_eq!(d.to_f32(), f);
        assert_eq!(f.to_f64(), d);
    }

    #[test]
    fn test_vec3_display() {
        assert_eq!(Vec3d::new(1.0, 2.5, -3.0).to_string(), "(1, 2.5, -3)");
    }

    #[test]
    fn test_vec3_glam_roundtrip() {
        let v = Vec3f::new(1.0, 2.0, 3.0);
        let g: glam::Vec3 = v.into();
        assert_eq!(g, glam::Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec3f::from(g), v);
    }
}
