//! Quaternion types for rigid-body orientation.
//!
//! A quaternion `q0 + q1*i + q2*j + q3*k` is stored as `w` (the scalar part
//! `q0`) and `x, y, z` (the vector part `q1..q3`). Only unit quaternions
//! represent rotations. Nothing here renormalizes automatically: callers
//! should [`normalize`](Quatf::normalize) after chains of products that can
//! drift.
//!
//! Conversion to and from rotation matrices lives in
//! [`crate::convert`].

use crate::{Vec3d, Vec3f};

macro_rules! impl_quat {
    ($(#[$meta:meta])* $Quat:ident, $t:ty, $Vec3:ident, $Glam:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[repr(C)]
        pub struct $Quat {
            /// Scalar part (q0)
            pub w: $t,
            /// First vector component (q1)
            pub x: $t,
            /// Second vector component (q2)
            pub y: $t,
            /// Third vector component (q3)
            pub z: $t,
        }

        impl $Quat {
            /// The identity rotation.
            pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

            /// All components zero. Not a rotation.
            pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

            /// Creates a quaternion from `q0` (scalar) and `q1..q3` (vector).
            #[inline]
            pub const fn new(w: $t, x: $t, y: $t, z: $t) -> Self {
                Self { w, x, y, z }
            }

            /// Creates a quaternion from a scalar part and a vector part.
            #[inline]
            pub fn from_parts(w: $t, v: $Vec3) -> Self {
                Self::new(w, v.x, v.y, v.z)
            }

            /// Rotation of `angle` degrees counter-clockwise about the unit
            /// vector `axis`.
            #[inline]
            pub fn from_axis_angle(axis: $Vec3, angle: $t) -> Self {
                let (sin, cos) = (angle.to_radians() * 0.5).sin_cos();
                Self::from_parts(cos, axis * sin)
            }

            /// Returns `[q0, q1, q2, q3]`.
            #[inline]
            pub const fn to_array(self) -> [$t; 4] {
                [self.w, self.x, self.y, self.z]
            }

            /// Vector part `(q1, q2, q3)`.
            #[inline]
            pub fn vector(self) -> $Vec3 {
                $Vec3::new(self.x, self.y, self.z)
            }

            /// Four-component dot product.
            #[inline]
            pub fn dot(self, other: Self) -> $t {
                self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
            }

            /// Squared norm.
            #[inline]
            pub fn norm_squared(self) -> $t {
                self.dot(self)
            }

            /// Norm (length).
            #[inline]
            pub fn norm(self) -> $t {
                self.norm_squared().sqrt()
            }

            /// Scales to unit norm. The zero quaternion stays zero.
            #[inline]
            pub fn normalize(self) -> Self {
                let n = self.norm();
                if n == 0.0 {
                    Self::ZERO
                } else {
                    Self::new(self.w / n, self.x / n, self.y / n, self.z / n)
                }
            }

            /// Conjugate: the vector part negated.
            #[inline]
            pub fn conjugate(self) -> Self {
                Self::new(self.w, -self.x, -self.y, -self.z)
            }

            /// Multiplicative inverse, `conjugate / norm_squared`.
            ///
            /// For a unit quaternion this is the opposite rotation. The zero
            /// quaternion yields non-finite components.
            #[inline]
            pub fn inverse(self) -> Self {
                let n2 = self.norm_squared();
                let c = self.conjugate();
                Self::new(c.w / n2, c.x / n2, c.y / n2, c.z / n2)
            }

            /// Hamilton product `self * other`: applies `other` first, then
            /// `self`.
            #[inline]
            pub fn mul_quat(self, other: Self) -> Self {
                let v1 = self.vector();
                let v2 = other.vector();
                let w = self.w * other.w - v1.dot(v2);
                let v = v2 * self.w + v1 * other.w + v1.cross(v2);
                Self::from_parts(w, v)
            }

            /// Rotates `v` by this (unit) quaternion.
            #[inline]
            pub fn rotate(self, v: $Vec3) -> $Vec3 {
                let u = self.vector();
                let t = u.cross(v) * 2.0;
                v + t * self.w + u.cross(t)
            }

            /// Returns true if every component differs by at most `max_abs_diff`.
            #[inline]
            pub fn abs_diff_eq(self, other: Self, max_abs_diff: $t) -> bool {
                self.to_array()
                    .iter()
                    .zip(other.to_array().iter())
                    .all(|(a, b)| (a - b).abs() <= max_abs_diff)
            }

            /// Returns true if all components are finite.
            #[inline]
            pub fn is_finite(self) -> bool {
                self.to_array().iter().all(|v| v.is_finite())
            }

            /// Converts to the matching glam quaternion.
            #[inline]
            pub fn to_glam(self) -> $Glam {
                <$Glam>::from_xyzw(self.x, self.y, self.z, self.w)
            }

            /// Creates from the matching glam quaternion.
            #[inline]
            pub fn from_glam(q: $Glam) -> Self {
                Self::new(q.w, q.x, q.y, q.z)
            }
        }

        impl Default for $Quat {
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        impl std::ops::Mul for $Quat {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                self.mul_quat(rhs)
            }
        }

        impl std::ops::Neg for $Quat {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self::new(-self.w, -self.x, -self.y, -self.z)
            }
        }

        impl std::fmt::Display for $Quat {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "[{}; {}, {}, {}]", self.w, self.x, self.y, self.z)
            }
        }

        impl From<$Glam> for $Quat {
            #[inline]
            fn from(q: $Glam) -> Self {
                Self::from_glam(q)
            }
        }

        impl From<$Quat> for $Glam {
            #[inline]
            fn from(q: $Quat) -> $Glam {
                q.to_glam()
            }
        }
    };
}

impl_quat!(
    /// A single-precision quaternion.
    Quatf, f32, Vec3f, glam::Quat
);
impl_quat!(
    /// A double-precision quaternion.
    Quatd, f64, Vec3d, glam::DQuat
);

impl From<Quatf> for Quatd {
    #[inline]
    fn from(q: Quatf) -> Self {
        Self::new(q.w.into(), q.x.into(), q.y.into(), q.z.into())
    }
}

impl Quatf {
    /// Widens to double precision (lossless).
    #[inline]
    pub fn to_f64(self) -> Quatd {
        Quatd::from(self)
    }
}

impl Quatd {
    /// Narrows to single precision using native `as` conversion.
    #[inline]
    pub fn to_f32(self) -> Quatf {
        Quatf::new(self.w as f32, self.x as f32, self.y as f32, self.z as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quat_identity() {
        let v = Vec3d::new(1.0, -2.0, 3.0);
        assert_eq!(Quatd::IDENTITY.rotate(v), v);
        assert_eq!(Quatd::IDENTITY * Quatd::IDENTITY, Quatd::IDENTITY);
    }

    #[test]
    fn test_quat_axis_angle_rotates() {
        let q = Quatd::from_axis_angle(Vec3d::Z, 90.0);
        assert!(q.rotate(Vec3d::X).abs_diff_eq(Vec3d::Y, 1e-12));
        assert!((q.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_quat_hamilton_product_composes() {
        let a = Quatd::from_axis_angle(Vec3d::Z, 30.0);
        let b = Quatd::from_axis_angle(Vec3d::Z, 60.0);
        let ab = a * b;
        assert!(ab.abs_diff_eq(Quatd::from_axis_angle(Vec3d::Z, 90.0), 1e-12));

        // basis units: i * j = k
        let i = Quatd::new(0.0, 1.0, 0.0, 0.0);
        let j = Quatd::new(0.0, 0.0, 1.0, 0.0);
        assert_eq!(i * j, Quatd::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_quat_inverse() {
        let q = Quatd::new(1.0, 2.0, 3.0, 4.0);
        assert!((q * q.inverse()).abs_diff_eq(Quatd::IDENTITY, 1e-12));

        let r = Quatd::from_axis_angle(Vec3d::new(0.0, 0.6, 0.8), 75.0);
        assert!(r.inverse().abs_diff_eq(r.conjugate(), 1e-12));
        let v = Vec3d::new(0.3, -1.0, 2.0);
        assert!(r.inverse().rotate(r.rotate(v)).abs_diff_eq(v, 1e-12));
    }

    #[test]
    fn test_quat_normalize() {
        let q = Quatf::new(2.0, 0.0, 0.0, 0.0).normalize();
        assert_eq!(q, Quatf::IDENTITY);
        assert_eq!(Quatf::ZERO.normalize(), Quatf::ZERO);
    }

    #[test]
    fn test_quat_glam_roundtrip() {
        let q = Quatf::from_axis_angle(Vec3f::Y, 40.0);
        let g: glam::Quat = q.into();
        assert_eq!(g.w, q.w);
        assert_eq!(Quatf::from(g), q);
        let v = Vec3f::new(1.0, 2.0, 3.0);
        assert!(q.rotate(v).abs_diff_eq(Vec3f::from(g * v.to_glam()), 1e-5));
    }

    #[test]
    fn test_quat_precision() {
        let q = Quatf::from_axis_angle(Vec3f::X, 10.0);
        assert_eq!(Quatd::from(q).to_f32(), q);
    }
}
