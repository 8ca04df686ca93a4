//! # tfm-core
//!
//! Core types shared by the tfm transform kernel.
//!
//! - [`Error`], [`Result`] - Contract violations (shape and bounds)
//! - [`EPSILON_F32`], [`EPSILON_F64`] - Default comparison tolerances
//!
//! ## Crate Structure
//!
//! ```text
//! tfm-core (this crate)
//!    ^
//!    |
//!    +-- tfm-math (vectors, matrices, quaternions)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;

pub use error::*;

/// Default absolute tolerance for single-precision comparisons.
pub const EPSILON_F32: f32 = 1e-5;

/// Default absolute tolerance for double-precision comparisons.
pub const EPSILON_F64: f64 = 1e-12;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use tfm_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::{EPSILON_F32, EPSILON_F64};
}
