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

//! Defines the error types returned by fallible matrix constructors.
//!
//! These are configuration errors: a misconfigured camera or projection is
//! reported to the caller instead of producing a matrix full of `NaN`s.

use crate::vector::Vec3;
use std::fmt;

/// A coordinate axis, used to point at the offending range of a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The horizontal axis (`left`/`right`, or a width).
    X,
    /// The vertical axis (`bottom`/`top`, or a height).
    Y,
    /// The depth axis (`near`/`far`).
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
            Axis::Z => f.write_str("z"),
        }
    }
}

/// The specific reason a projection volume was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrustumIssue {
    /// The near plane of a perspective projection is not strictly positive.
    NonPositiveNear {
        /// The rejected near distance.
        near: f32,
    },
    /// The far plane is not strictly beyond the near plane.
    FarNotBeyondNear {
        /// The near distance.
        near: f32,
        /// The far distance.
        far: f32,
    },
    /// The two bounds of a range are equal, so the volume has no extent.
    ZeroExtent {
        /// The axis whose range collapsed.
        axis: Axis,
    },
    /// The vertical field of view is not inside `(0, PI)`.
    InvalidFieldOfView {
        /// The rejected field of view, in radians.
        fov_y_radians: f32,
    },
    /// The aspect ratio is not a positive finite number.
    InvalidAspect {
        /// The rejected aspect ratio.
        aspect: f32,
    },
    /// One of the bounds is `NaN` or infinite.
    NonFinite,
}

impl fmt::Display for FrustumIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrustumIssue::NonPositiveNear { near } => {
                write!(f, "near plane must be > 0, got {near}")
            }
            FrustumIssue::FarNotBeyondNear { near, far } => {
                write!(f, "far plane ({far}) must be greater than near plane ({near})")
            }
            FrustumIssue::ZeroExtent { axis } => {
                write!(f, "the {axis} range has zero extent")
            }
            FrustumIssue::InvalidFieldOfView { fov_y_radians } => {
                write!(
                    f,
                    "vertical field of view must be in (0, PI) radians, got {fov_y_radians}"
                )
            }
            FrustumIssue::InvalidAspect { aspect } => {
                write!(f, "aspect ratio must be a positive finite number, got {aspect}")
            }
            FrustumIssue::NonFinite => f.write_str("projection bounds must be finite"),
        }
    }
}

/// An error raised by a matrix operation on degenerate input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// The matrix has no inverse because its determinant is (numerically) zero.
    SingularMatrix {
        /// The determinant that was computed.
        determinant: f32,
    },
    /// A camera basis could not be built: the eye coincides with the target,
    /// or the view direction is parallel to the up vector.
    DegenerateBasis {
        /// The un-normalized `eye - target` direction.
        forward: Vec3,
        /// The up vector supplied by the caller.
        up: Vec3,
    },
    /// The parameters of a projection do not describe a valid view volume.
    InvalidFrustum(FrustumIssue),
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::SingularMatrix { determinant } => {
                write!(f, "Matrix is singular (determinant {determinant:e})")
            }
            MathError::DegenerateBasis { forward, up } => {
                write!(
                    f,
                    "Cannot build a camera basis from forward ({}, {}, {}) and up ({}, {}, {})",
                    forward.x, forward.y, forward.z, up.x, up.y, up.z
                )
            }
            MathError::InvalidFrustum(issue) => write!(f, "Invalid frustum: {issue}"),
        }
    }
}

impl std::error::Error for MathError {}

impl From<FrustumIssue> for MathError {
    fn from(issue: FrustumIssue) -> Self {
        MathError::InvalidFrustum(issue)
    }
}
