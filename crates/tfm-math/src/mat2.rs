//! 2x2 matrix types.
//!
//! # Convention
//!
//! Elements are stored row-major and accessed as `(col, row)`:
//!
//! ```text
//! | a b |   m = [a, b, c, d]
//! | c d |   get(1, 0) == b
//! ```
//!
//! Vectors are columns: `mul_vec(v) = M * v`.

use crate::{Vec2d, Vec2f};

macro_rules! impl_mat2 {
    ($(#[$meta:meta])* $Mat2:ident, $t:ty, $Vec2:ident, $Glam:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[repr(C)]
        pub struct $Mat2 {
            /// Matrix elements in row-major order.
            pub m: [$t; 4],
        }

        impl $Mat2 {
            /// Identity matrix.
            pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0);

            /// Creates a matrix from its rows: `[[a, b], [c, d]]`.
            #[inline]
            pub const fn new(a: $t, b: $t, c: $t, d: $t) -> Self {
                Self { m: [a, b, c, d] }
            }

            /// Returns a row as a vector.
            #[inline]
            pub fn row(&self, i: usize) -> $Vec2 {
                $Vec2::new(self.m[i * 2], self.m[i * 2 + 1])
            }

            /// Returns a column as a vector.
            #[inline]
            pub fn col(&self, i: usize) -> $Vec2 {
                $Vec2::new(self.m[i], self.m[2 + i])
            }

            /// Adds `v` to the diagonal entries.
            #[inline]
            pub fn add_diagonal(&self, v: $Vec2) -> Self {
                Self::new(self.m[0] + v.x, self.m[1], self.m[2], self.m[3] + v.y)
            }

            /// Hadamard (element-wise) product.
            #[inline]
            pub fn elementwise_mul(&self, other: &Self) -> Self {
                let mut m = self.m;
                for (a, b) in m.iter_mut().zip(other.m.iter()) {
                    *a *= b;
                }
                Self { m }
            }

            /// Matrix-vector product `M * v`.
            #[inline]
            pub fn mul_vec(&self, v: $Vec2) -> $Vec2 {
                $Vec2::new(
                    self.m[0] * v.x + self.m[1] * v.y,
                    self.m[2] * v.x + self.m[3] * v.y,
                )
            }

            /// Determinant `a*d - b*c`.
            #[inline]
            pub fn det(&self) -> $t {
                self.m[0] * self.m[3] - self.m[1] * self.m[2]
            }

            /// Sum of the diagonal.
            #[inline]
            pub fn trace(&self) -> $t {
                self.m[0] + self.m[3]
            }
        }

        impl_mat_common!($Mat2, $t, 2, $Glam);

        impl std::ops::Mul<$Vec2> for $Mat2 {
            type Output = $Vec2;

            #[inline]
            fn mul(self, rhs: $Vec2) -> $Vec2 {
                self.mul_vec(rhs)
            }
        }
    };
}

impl_mat2!(
    /// A single-precision 2x2 matrix.
    Mat2f, f32, Vec2f, glam::Mat2
);
impl_mat2!(
    /// A double-precision 2x2 matrix.
    Mat2d, f64, Vec2d, glam::DMat2
);
impl_mat_precision!(Mat2f, Mat2d);
