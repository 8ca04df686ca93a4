//! 4D vector types.
//!
//! Used for homogeneous coordinates (`w = 1` for points, `w = 0` for
//! directions) and for planes stored as `(nx, ny, nz, distance)`.

use crate::{Mat4d, Mat4f, Vec3d, Vec3f};

macro_rules! impl_vec4 {
    ($(#[$meta:meta])* $Vec4:ident, $t:ty, $Vec3:ident, $Mat4:ident, $Glam:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        #[repr(C)]
        pub struct $Vec4 {
            /// X component
            pub x: $t,
            /// Y component
            pub y: $t,
            /// Z component
            pub z: $t,
            /// W component (homogeneous coordinate or plane distance)
            pub w: $t,
        }

        impl $Vec4 {
            /// Zero vector (0, 0, 0, 0).
            pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

            /// One vector (1, 1, 1, 1).
            pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

            /// Unit X vector.
            pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);

            /// Unit Y vector.
            pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);

            /// Unit Z vector.
            pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);

            /// Unit W vector.
            pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

            /// Homogeneous point (`w = 1`), affected by translation.
            #[inline]
            pub fn point(v: $Vec3) -> Self {
                v.extend(1.0)
            }

            /// Homogeneous direction (`w = 0`), unaffected by translation.
            #[inline]
            pub fn direction(v: $Vec3) -> Self {
                v.extend(0.0)
            }

            /// Drops the `w` component.
            #[inline]
            pub fn truncate(self) -> $Vec3 {
                $Vec3::new(self.x, self.y, self.z)
            }

            /// Outer product `M[i][j] = self[i] * other[j]`.
            pub fn outer_product(self, other: Self) -> $Mat4 {
                let a = self.to_array();
                let b = other.to_array();
                let mut m = [0.0; 16];
                for i in 0..4 {
                    for j in 0..4 {
                        m[i * 4 + j] = a[i] * b[j];
                    }
                }
                $Mat4::from_array(m)
            }
        }

        impl_vec_common!($Vec4, $t, 4, $Glam, [0 => x, 1 => y, 2 => z, 3 => w]);
    };
}

impl_vec4!(
    /// A single-precision 4D vector.
    Vec4f, f32, Vec3f, Mat4f, glam::Vec4
);
impl_vec4!(
    /// A double-precision 4D vector.
    Vec4d, f64, Vec3d, Mat4d, glam::DVec4
);
impl_vec_precision!(Vec4f, Vec4d, [x, y, z, w]);
