//! # tfm-math
//!
//! Fixed-size linear algebra for transform composition in graphics and
//! physics pipelines.
//!
//! - [`Vec2f`], [`Vec3f`], [`Vec4f`] (and `d` variants) - vectors
//! - [`Mat2f`], [`Mat4f`] (and `d` variants) - square matrices, transform
//!   and projection factories
//! - [`Quatf`], [`Quatd`] - rotations, with matrix conversion in
//!   [`convert`]
//!
//! Every type is an immutable `Copy` value: operations return new values
//! and never mutate their operands, so everything is safe to share across
//! threads. Named constants (`IDENTITY`, `ZERO`, unit axes) are `const`.
//!
//! # Design
//!
//! Matrices are stored **row-major**, accessed as `(col, row)`, and act on
//! **column vectors**. Translation lives in column 3.
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Composition has two spellings: `a * b` (standard product) and
//! `a.then(&b)` (apply `a`, then `b`; equal to `b * a`).
//!
//! # Usage
//!
//! ```rust
//! use tfm_math::{Mat4f, Quatf, Vec3f};
//!
//! let pos = Vec3f::new(0.0, 1.0, -5.0);
//! let rot = Quatf::from_axis_angle(Vec3f::Y, 45.0);
//!
//! let model = Mat4f::transform(pos, &rot.to_matrix(), Vec3f::ONE);
//! let back = Mat4f::inverse_transform_quat(pos, rot, Vec3f::ONE);
//!
//! let p = Vec3f::new(1.0, 2.0, 3.0);
//! let q = back.transform_point(model.transform_point(p));
//! assert!(q.abs_diff_eq(p, 1e-4));
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` - Rayon-backed batch transforms (enabled by default)
//!
//! # Dependencies
//!
//! - [`glam`] - Interop conversions for every type
//! - `tfm-core` - Error types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

#[macro_use]
mod macros;

mod mat2;
mod mat4;
mod quat;
mod vec2;
mod vec3;
mod vec4;
pub mod convert;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use convert::{mat4d_to_quatd, mat4f_to_quatf, quatd_to_mat4d, quatf_to_mat4f};
pub use mat2::*;
pub use mat4::*;
pub use quat::*;
pub use tfm_core::{Error, Result, EPSILON_F32, EPSILON_F64};
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat4, DQuat, DVec3, Mat4 as GlamMat4, Quat as GlamQuat, Vec3 as GlamVec3};
}
