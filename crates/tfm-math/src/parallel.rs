//! Parallel batch transforms using Rayon.
//!
//! Every matrix and vector is an immutable `Copy` value, so a single matrix
//! can be shared across threads without locking.
//!
//! # Example
//!
//! ```rust
//! use tfm_math::{Mat4f, Vec3f};
//!
//! let m = Mat4f::translation(Vec3f::new(0.0, 1.0, 0.0));
//! let points = vec![Vec3f::ZERO; 1024];
//! let moved = m.par_transform_points(&points);
//! assert!(moved.iter().all(|p| *p == Vec3f::Y));
//! ```

use crate::{Mat4d, Mat4f, Vec3d, Vec3f};
use rayon::prelude::*;
use tracing::trace;

macro_rules! impl_par_transform {
    ($Mat4:ident, $Vec3:ident) => {
        impl $Mat4 {
            /// Transforms every point (`w = 1`) in parallel.
            pub fn par_transform_points(&self, points: &[$Vec3]) -> Vec<$Vec3> {
                trace!(count = points.len(), "par_transform_points");
                points.par_iter().map(|p| self.transform_point(*p)).collect()
            }

            /// Transforms every point (`w = 1`) in place, in parallel.
            pub fn par_transform_points_in_place(&self, points: &mut [$Vec3]) {
                trace!(count = points.len(), "par_transform_points_in_place");
                points
                    .par_iter_mut()
                    .for_each(|p| *p = self.transform_point(*p));
            }

            /// Transforms every direction (`w = 0`) in parallel.
            pub fn par_transform_directions(&self, directions: &[$Vec3]) -> Vec<$Vec3> {
                trace!(count = directions.len(), "par_transform_directions");
                directions
                    .par_iter()
                    .map(|d| self.transform_direction(*d))
                    .collect()
            }
        }
    };
}

impl_par_transform!(Mat4f, Vec3f);
impl_par_transform!(Mat4d, Vec3d);
