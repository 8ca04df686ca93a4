//! Code shared by the single- and double-precision variants.
//!
//! Every vector and matrix type exists once per scalar type. The
//! dimension-independent parts are generated here; each type module adds
//! what is specific to its dimension.

/// Generates constructors, accessors, norms and operators for a vector
/// type whose components are listed as `index => field`.
macro_rules! impl_vec_common {
    ($Vec:ident, $t:ty, $n:literal, $Glam:ty, [$($i:literal => $f:ident),+]) => {
        impl $Vec {
            /// Number of components.
            pub const DIM: usize = $n;

            /// Creates a new vector.
            #[inline]
            pub const fn new($($f: $t),+) -> Self {
                Self { $($f),+ }
            }

            /// Creates a vector with all components set to the same value.
            #[inline]
            pub const fn splat(v: $t) -> Self {
                Self { $($f: v),+ }
            }

            /// Creates from an array.
            #[inline]
            pub const fn from_array(a: [$t; $n]) -> Self {
                let [$($f),+] = a;
                Self { $($f),+ }
            }

            /// Converts to an array.
            #[inline]
            pub const fn to_array(self) -> [$t; $n] {
                [$(self.$f),+]
            }

            /// Creates from a slice holding exactly one value per component.
            ///
            /// Fails with [`Error::ElementCount`](tfm_core::Error::ElementCount)
            /// for any other length.
            pub fn from_slice(s: &[$t]) -> tfm_core::Result<Self> {
                tfm_core::check_element_count($n, s.len())?;
                let mut a = [0.0; $n];
                a.copy_from_slice(s);
                Ok(Self::from_array(a))
            }

            /// Returns component `i`, or an error naming `i` when it is
            /// outside `[0, DIM)`.
            #[inline]
            pub fn get(self, i: usize) -> tfm_core::Result<$t> {
                match i {
                    $($i => Ok(self.$f),)+
                    _ => Err(tfm_core::Error::index_out_of_range(i, $n)),
                }
            }

            /// Multiplies every component by `s`.
            #[inline]
            pub fn scale(self, s: $t) -> Self {
                Self { $($f: self.$f * s),+ }
            }

            /// Dot product with another vector.
            #[inline]
            pub fn dot(self, other: Self) -> $t {
                0.0 $(+ self.$f * other.$f)+
            }

            /// Squared length (avoids sqrt).
            #[inline]
            pub fn length_squared(self) -> $t {
                self.dot(self)
            }

            /// Length (magnitude) of the vector.
            #[inline]
            pub fn length(self) -> $t {
                self.length_squared().sqrt()
            }

            /// Normalizes the vector to unit length.
            ///
            /// Returns the zero vector if the length is zero.
            #[inline]
            pub fn normalize(self) -> Self {
                let len = self.length();
                if len == 0.0 {
                    Self::ZERO
                } else {
                    self / len
                }
            }

            /// Component-wise product.
            #[inline]
            pub fn mul_elem(self, other: Self) -> Self {
                Self { $($f: self.$f * other.$f),+ }
            }

            /// Linear interpolation: `(1 - t) * self + t * other`.
            ///
            /// `t` is not clamped, values outside `[0, 1]` extrapolate.
            /// `t = 0.0` returns `self` and `t = 1.0` returns `other` exactly.
            #[inline]
            pub fn lerp(self, other: Self, t: $t) -> Self {
                self * (1.0 - t) + other * t
            }

            /// Component-wise minimum.
            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self { $($f: self.$f.min(other.$f)),+ }
            }

            /// Component-wise maximum.
            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self { $($f: self.$f.max(other.$f)),+ }
            }

            /// Returns true if every component differs by at most `max_abs_diff`.
            #[inline]
            pub fn abs_diff_eq(self, other: Self, max_abs_diff: $t) -> bool {
                $((self.$f - other.$f).abs() <= max_abs_diff)&&+
            }

            /// Returns true if all components are finite (not NaN or infinite).
            #[inline]
            pub fn is_finite(self) -> bool {
                $(self.$f.is_finite())&&+
            }

            /// Converts to the matching glam vector.
            #[inline]
            pub fn to_glam(self) -> $Glam {
                <$Glam>::new($(self.$f),+)
            }

            /// Creates from the matching glam vector.
            #[inline]
            pub fn from_glam(v: $Glam) -> Self {
                Self { $($f: v.$f),+ }
            }
        }

        impl std::ops::Index<usize> for $Vec {
            type Output = $t;

            #[inline]
            fn index(&self, i: usize) -> &$t {
                match i {
                    $($i => &self.$f,)+
                    _ => panic!("{} index out of bounds: {}", stringify!($Vec), i),
                }
            }
        }

        impl std::ops::Add for $Vec {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl std::ops::Sub for $Vec {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl std::ops::Neg for $Vec {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($f: -self.$f),+ }
            }
        }

        // component-wise
        impl std::ops::Mul for $Vec {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                self.mul_elem(rhs)
            }
        }

        impl std::ops::Mul<$t> for $Vec {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $t) -> Self {
                self.scale(rhs)
            }
        }

        impl std::ops::Mul<$Vec> for $t {
            type Output = $Vec;

            #[inline]
            fn mul(self, rhs: $Vec) -> $Vec {
                rhs.scale(self)
            }
        }

        impl std::ops::Div<$t> for $Vec {
            type Output = Self;

            #[inline]
            fn div(self, rhs: $t) -> Self {
                Self { $($f: self.$f / rhs),+ }
            }
        }

        impl std::fmt::Display for $Vec {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let parts = [$(self.$f.to_string()),+];
                write!(f, "({})", parts.join(", "))
            }
        }

        impl From<[$t; $n]> for $Vec {
            #[inline]
            fn from(a: [$t; $n]) -> Self {
                Self::from_array(a)
            }
        }

        impl From<$Vec> for [$t; $n] {
            #[inline]
            fn from(v: $Vec) -> [$t; $n] {
                v.to_array()
            }
        }

        impl TryFrom<&[$t]> for $Vec {
            type Error = tfm_core::Error;

            #[inline]
            fn try_from(s: &[$t]) -> tfm_core::Result<Self> {
                Self::from_slice(s)
            }
        }

        impl From<$Glam> for $Vec {
            #[inline]
            fn from(v: $Glam) -> Self {
                Self::from_glam(v)
            }
        }

        impl From<$Vec> for $Glam {
            #[inline]
            fn from(v: $Vec) -> $Glam {
                v.to_glam()
            }
        }
    };
}

/// Generates the float/double conversions between two variants of the
/// same type: a lossless widening `From` and a truncating `to_f32`.
macro_rules! impl_vec_precision {
    ($VecF:ident, $VecD:ident, [$($f:ident),+]) => {
        impl From<$VecF> for $VecD {
            #[inline]
            fn from(v: $VecF) -> Self {
                Self { $($f: f64::from(v.$f)),+ }
            }
        }

        impl $VecF {
            /// Widens to double precision (lossless).
            #[inline]
            pub fn to_f64(self) -> $VecD {
                $VecD::from(self)
            }
        }

        impl $VecD {
            /// Narrows to single precision using native `as` conversion.
            #[inline]
            pub fn to_f32(self) -> $VecF {
                $VecF { $($f: self.$f as f32),+ }
            }
        }
    };
}

/// Generates the parts of an `N x N` matrix that do not depend on `N`.
///
/// Storage is row-major, `m[row * N + col]`, and element access takes
/// `(col, row)`.
macro_rules! impl_mat_common {
    ($Mat:ident, $t:ty, $n:literal, $Glam:ty) => {
        impl $Mat {
            /// Matrix size (rows and columns).
            pub const SIZE: usize = $n;

            /// Zero matrix.
            pub const ZERO: Self = Self { m: [0.0; $n * $n] };

            /// Creates a matrix from a row-major array.
            #[inline]
            pub const fn from_array(m: [$t; $n * $n]) -> Self {
                Self { m }
            }

            /// Creates a matrix from row arrays.
            #[inline]
            pub fn from_rows(rows: [[$t; $n]; $n]) -> Self {
                let mut m = [0.0; $n * $n];
                for (row, values) in rows.iter().enumerate() {
                    m[row * $n..(row + 1) * $n].copy_from_slice(values);
                }
                Self { m }
            }

            /// Creates a matrix from a row-major slice of exactly `SIZE * SIZE`
            /// values.
            ///
            /// Shorter or longer input fails with
            /// [`Error::ElementCount`](tfm_core::Error::ElementCount).
            pub fn from_slice(s: &[$t]) -> tfm_core::Result<Self> {
                tfm_core::check_element_count($n * $n, s.len())?;
                let mut m = [0.0; $n * $n];
                m.copy_from_slice(s);
                Ok(Self { m })
            }

            /// Returns the row-major element array.
            #[inline]
            pub const fn to_array(&self) -> [$t; $n * $n] {
                self.m
            }

            /// Returns the row-major elements as a slice.
            #[inline]
            pub fn as_slice(&self) -> &[$t] {
                &self.m
            }

            /// Returns the element in column `col` and row `row`.
            #[inline]
            pub fn get(&self, col: usize, row: usize) -> tfm_core::Result<$t> {
                if col < $n && row < $n {
                    Ok(self.m[row * $n + col])
                } else {
                    Err(tfm_core::Error::element_out_of_range(col, row, $n))
                }
            }

            /// Element-wise sum.
            #[inline]
            pub fn add_mat(&self, other: &Self) -> Self {
                let mut m = self.m;
                for (a, b) in m.iter_mut().zip(other.m.iter()) {
                    *a += b;
                }
                Self { m }
            }

            /// Multiplies every element by `s`.
            #[inline]
            pub fn mul_scalar(&self, s: $t) -> Self {
                Self { m: self.m.map(|v| v * s) }
            }

            /// Standard matrix product `self * other`.
            #[inline]
            pub fn mul_mat(&self, other: &Self) -> Self {
                let mut m = [0.0; $n * $n];
                for row in 0..$n {
                    for col in 0..$n {
                        let mut sum = 0.0;
                        for k in 0..$n {
                            sum += self.m[row * $n + k] * other.m[k * $n + col];
                        }
                        m[row * $n + col] = sum;
                    }
                }
                Self { m }
            }

            /// Composes in application order: applies `self` first, then
            /// `next`. Equivalent to `next * self`.
            ///
            /// Chained factories read left to right in the order they act
            /// on a vector, e.g. `scale.then(&rotation).then(&translation)`.
            #[inline]
            pub fn then(&self, next: &Self) -> Self {
                next.mul_mat(self)
            }

            /// Returns the transpose of this matrix.
            #[inline]
            pub fn transpose(&self) -> Self {
                let mut m = [0.0; $n * $n];
                for row in 0..$n {
                    for col in 0..$n {
                        m[col * $n + row] = self.m[row * $n + col];
                    }
                }
                Self { m }
            }

            /// Returns true if every element differs by at most `max_abs_diff`.
            #[inline]
            pub fn abs_diff_eq(&self, other: &Self, max_abs_diff: $t) -> bool {
                self.m
                    .iter()
                    .zip(other.m.iter())
                    .all(|(a, b)| (a - b).abs() <= max_abs_diff)
            }

            /// Returns true if all elements are finite (not NaN or infinite).
            #[inline]
            pub fn is_finite(&self) -> bool {
                self.m.iter().all(|v| v.is_finite())
            }

            /// Converts to the matching glam matrix (column-major).
            #[inline]
            pub fn to_glam(&self) -> $Glam {
                <$Glam>::from_cols_array(&self.transpose().m)
            }

            /// Creates from the matching glam matrix.
            #[inline]
            pub fn from_glam(m: $Glam) -> Self {
                Self { m: m.to_cols_array() }.transpose()
            }
        }

        impl Default for $Mat {
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        /// Indexed by `(col, row)`. Panics outside the `SIZE x SIZE` grid.
        impl std::ops::Index<(usize, usize)> for $Mat {
            type Output = $t;

            #[inline]
            fn index(&self, (col, row): (usize, usize)) -> &$t {
                assert!(
                    col < $n && row < $n,
                    "{} index out of bounds: ({}, {})",
                    stringify!($Mat),
                    col,
                    row
                );
                &self.m[row * $n + col]
            }
        }

        impl std::ops::Add for $Mat {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                self.add_mat(&rhs)
            }
        }

        impl std::ops::Mul for $Mat {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                self.mul_mat(&rhs)
            }
        }

        impl std::ops::Mul<$t> for $Mat {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $t) -> Self {
                self.mul_scalar(rhs)
            }
        }

        impl TryFrom<&[$t]> for $Mat {
            type Error = tfm_core::Error;

            #[inline]
            fn try_from(s: &[$t]) -> tfm_core::Result<Self> {
                Self::from_slice(s)
            }
        }

        impl From<$Glam> for $Mat {
            #[inline]
            fn from(m: $Glam) -> Self {
                Self::from_glam(m)
            }
        }

        impl From<$Mat> for $Glam {
            #[inline]
            fn from(m: $Mat) -> $Glam {
                m.to_glam()
            }
        }
    };
}

/// Generates float/double conversions for a matrix type pair.
macro_rules! impl_mat_precision {
    ($MatF:ident, $MatD:ident) => {
        impl From<$MatF> for $MatD {
            #[inline]
            fn from(m: $MatF) -> Self {
                Self { m: m.m.map(f64::from) }
            }
        }

        impl $MatF {
            /// Widens to double precision (lossless).
            #[inline]
            pub fn to_f64(&self) -> $MatD {
                $MatD::from(*self)
            }
        }

        impl $MatD {
            /// Narrows to single precision using native `as` conversion.
            #[inline]
            pub fn to_f32(&self) -> $MatF {
                $MatF { m: self.m.map(|v| v as f32) }
            }
        }
    };
}
