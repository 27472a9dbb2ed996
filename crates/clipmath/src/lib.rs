// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # clipmath
//!
//! Matrix and vector math for placing geometry in clip space.
//!
//! Every matrix is stored **column-major** (column `c`, row `r` lives at flat
//! index `c * 4 + r` for [`Mat4`], `c * 3 + r` for [`Mat3`]) so it can be handed
//! to a uniform upload as-is, without transposition.
//!
//! Two API styles are provided over the same types:
//!
//! - methods and operators on [`Mat4`], [`Mat3`] and [`Vec3`], returning new values;
//! - the flat [`m4`] and [`m3`] modules, which write into a caller-owned
//!   destination, for code that reuses one buffer across frames.
//!
//! All angular functions operate in **radians** unless explicitly stated
//! otherwise (e.g. [`degrees_to_radians`]).
//!
//! ```
//! use clipmath::{Mat4, Vec3};
//!
//! let projection = Mat4::perspective(60f32.to_radians(), 16.0 / 9.0, 1.0, 2000.0)?;
//! let camera = Mat4::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y)?;
//! let view = camera.inverse()?;
//! let view_projection = projection * view;
//!
//! let clip = view_projection.transform_point(Vec3::ZERO);
//! assert!(clip.z > -1.0 && clip.z < 1.0);
//! # Ok::<(), clipmath::MathError>(())
//! ```

#![warn(missing_docs)]

// --- Fundamental Constants ---

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

/// Relative tolerance used to decide that a matrix is singular.
///
/// A determinant is treated as zero when `|det| <= SINGULAR_EPSILON * h`, where
/// `h` is the product of the column lengths, the largest determinant any matrix
/// with those column lengths can have. For an affine [`Mat4`] the translation
/// column counts only through its `w`. The test does not depend on the overall
/// scale of the matrix or on how far it translates.
pub const SINGULAR_EPSILON: f32 = 1e-6;

// Re-export standard mathematical constants for convenience.
pub use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

/// The factor to convert degrees to radians (PI / 180.0).
pub const DEG_TO_RAD: f32 = PI / 180.0;
/// The factor to convert radians to degrees (180.0 / PI).
pub const RAD_TO_DEG: f32 = 180.0 / PI;

// --- Declare Sub-Modules ---

pub mod error;
pub mod frustum;
pub mod m3;
pub mod m4;
pub mod mat3;
pub mod mat4;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::error::{Axis, FrustumIssue, MathError};
pub use self::frustum::FrustumCorners;
pub use self::mat3::Mat3;
pub use self::mat4::Mat4;
pub use self::vector::{Vec2, Vec3, Vec4};

// --- Utility Functions ---

/// Converts an angle from degrees to radians.
///
/// # Examples
///
/// ```
/// use clipmath::{degrees_to_radians, PI};
/// assert_eq!(degrees_to_radians(180.0), PI);
/// ```
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// Converts an angle from radians to degrees.
///
/// # Examples
///
/// ```
/// use clipmath::{radians_to_degrees, PI};
/// assert_eq!(radians_to_degrees(PI), 180.0);
/// ```
#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}

/// Performs an approximate equality comparison between two floats with a custom tolerance.
///
/// # Examples
///
/// ```
/// use clipmath::approx_eq_eps;
/// assert!(approx_eq_eps(0.001, 0.002, 1e-2));
/// assert!(!approx_eq_eps(0.001, 0.002, 1e-4));
/// ```
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Performs an approximate equality comparison using the crate's default [`EPSILON`].
///
/// # Examples
///
/// ```
/// use clipmath::{approx_eq, EPSILON};
/// assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
/// assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
/// ```
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_eps(a, b, EPSILON)
}

/// Returns `true` when `determinant` is indistinguishable from zero for a
/// matrix with the given column lengths.
#[inline]
pub(crate) fn is_singular(
    determinant: f32,
    column_lengths: impl IntoIterator<Item = f32>,
) -> bool {
    if !determinant.is_finite() || determinant == 0.0 {
        return true;
    }
    let bound: f32 = column_lengths.into_iter().product();
    determinant.abs() <= SINGULAR_EPSILON * bound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_conversions() {
        assert!(approx_eq(degrees_to_radians(90.0), FRAC_PI_2));
        assert!(approx_eq(radians_to_degrees(FRAC_PI_4), 45.0));
        assert!(approx_eq(radians_to_degrees(degrees_to_radians(37.5)), 37.5));
    }

    #[test]
    fn test_is_singular() {
        assert!(is_singular(0.0, [1.0; 4]));
        assert!(is_singular(f32::NAN, [1.0; 4]));
        assert!(is_singular(1e-9, [1.0; 4]));
        assert!(!is_singular(1.0, [1.0; 4]));
        // A uniformly small scale is still invertible.
        assert!(!is_singular(1e-8, [0.01, 0.01, 0.01, 1.0]));
        // Long but nearly parallel columns are not.
        assert!(is_singular(1e-3, [100.0, 100.0, 100.0, 1.0]));
    }
}
