//! 2D vector types.
//!
//! [`Vec2f`] and [`Vec2d`] are the single- and double-precision variants.
//! Both are plain `Copy` values: every operation returns a new vector.

use crate::{Mat2d, Mat2f};

macro_rules! impl_vec2 {
    ($(#[$meta:meta])* $Vec2:ident, $t:ty, $Mat2:ident, $Glam:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        #[repr(C)]
        pub struct $Vec2 {
            /// X component
            pub x: $t,
            /// Y component
            pub y: $t,
        }

        impl $Vec2 {
            /// Zero vector (0, 0).
            pub const ZERO: Self = Self::new(0.0, 0.0);

            /// One vector (1, 1).
            pub const ONE: Self = Self::new(1.0, 1.0);

            /// Unit X vector (1, 0).
            pub const X: Self = Self::new(1.0, 0.0);

            /// Unit Y vector (0, 1).
            pub const Y: Self = Self::new(0.0, 1.0);

            /// Outer product `M[i][j] = self[i] * other[j]`.
            #[inline]
            pub fn outer_product(self, other: Self) -> $Mat2 {
                $Mat2::new(
                    self.x * other.x, self.x * other.y,
                    self.y * other.x, self.y * other.y,
                )
            }
        }

        impl_vec_common!($Vec2, $t, 2, $Glam, [0 => x, 1 => y]);
    };
}

impl_vec2!(
    /// A single-precision 2D vector.
    Vec2f, f32, Mat2f, glam::Vec2
);
impl_vec2!(
    /// A double-precision 2D vector.
    Vec2d, f64, Mat2d, glam::DVec2
);
impl_vec_precision!(Vec2f, Vec2d, [x, y]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_ops() {
        let a = Vec2d::new(1.0, 2.0);
        let b = Vec2d::new(3.0, 5.0);
        assert_eq!(a + b, Vec2d::new(4.0, 7.0));
        assert_eq!(b - a, Vec2d::new(2.0, 3.0));
        assert_eq!(a.scale(2.0), Vec2d::new(2.0, 4.0));
        assert_eq!(a.dot(b), 13.0);
    }

    #[test]
    fn test_vec2_outer_product() {
        let m = Vec2d::new(1.0, 2.0).outer_product(Vec2d::new(3.0, 4.0));
        assert_eq!(m, Mat2d::new(3.0, 4.0, 6.0, 8.0));
    }

    #[test]
    fn test_vec2_get() {
        let v = Vec2f::new(1.5, -2.0);
        assert_eq!(v.get(1), Ok(-2.0));
        assert!(v.get(2).unwrap_err().is_bounds_error());
    }

    #[test]
    fn test_vec2_from_slice_length() {
        assert_eq!(Vec2f::from_slice(&[1.0, 2.0]), Ok(Vec2f::new(1.0, 2.0)));
        assert!(Vec2f::from_slice(&[1.0, 2.0, 3.0]).is_err());
    }
}
