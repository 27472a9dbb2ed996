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

//! Defines the `Mat4` type: 3D transforms, projections and cameras.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use super::error::{Axis, FrustumIssue, MathError};
use super::{is_singular, Vec3, Vec4, PI};
use std::ops::{Index, IndexMut, Mul, MulAssign};

/// A 4x4 column-major matrix, used for 3D affine and projective transforms.
///
/// Element (column `c`, row `r`) is stored at flat index `c * 4 + r`, which is
/// the layout a uniform upload expects without transposition. See
/// [`Mat4::as_array`].
///
/// Products read right to left: `(a * b) * v == a * (b * v)`, so `b` is
/// applied to the vertex first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
    Encode,
    Decode,
)]
#[repr(C)]
pub struct Mat4 {
    /// The columns of the matrix. `cols[0]` is the first column, and so on.
    pub cols: [Vec4; 4],
}

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W],
    };

    /// A 4x4 matrix with all elements set to 0.
    pub const ZERO: Self = Self {
        cols: [Vec4::ZERO; 4],
    };

    /// Creates a new matrix from four column vectors.
    #[inline]
    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    /// Creates a matrix from 16 floats in column-major order.
    ///
    /// ```
    /// use clipmath::{Mat4, Vec3};
    ///
    /// let m = Mat4::from_cols_array(&[
    ///     1.0, 0.0, 0.0, 0.0,
    ///     0.0, 1.0, 0.0, 0.0,
    ///     0.0, 0.0, 1.0, 0.0,
    ///     5.0, 6.0, 7.0, 1.0,
    /// ]);
    /// assert_eq!(m, Mat4::from_translation(Vec3::new(5.0, 6.0, 7.0)));
    /// ```
    #[inline]
    pub fn from_cols_array(a: &[f32; 16]) -> Self {
        bytemuck::cast(*a)
    }

    /// Returns the 16 elements in column-major order.
    #[inline]
    pub fn to_cols_array(&self) -> [f32; 16] {
        *self.as_array()
    }

    /// Views the matrix as 16 column-major floats, ready for a uniform upload.
    #[inline]
    pub fn as_array(&self) -> &[f32; 16] {
        bytemuck::cast_ref(self)
    }

    /// Views the matrix as raw bytes (64 bytes, native endian).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Returns a row of the matrix as a `Vec4`.
    #[inline]
    pub fn row(&self, index: usize) -> Vec4 {
        Vec4::new(
            self.cols[0][index],
            self.cols[1][index],
            self.cols[2][index],
            self.cols[3][index],
        )
    }

    /// Returns the translation stored in the fourth column.
    #[inline]
    pub fn translation(&self) -> Vec3 {
        self.cols[3].truncate()
    }

    /// Overwrites this matrix with the contents of `src`.
    #[inline]
    pub fn copy_from(&mut self, src: &Mat4) {
        self.cols = src.cols;
    }

    /// Returns `true` if every element is finite.
    pub fn is_finite(&self) -> bool {
        self.as_array().iter().all(|e| e.is_finite())
    }

    /// Column lengths that bound the determinant.
    ///
    /// When the bottom row is `[0, 0, 0, w]` the determinant is `det3 * w`, so the
    /// translation column only contributes `|w|`.
    fn column_scales(&self) -> [f32; 4] {
        let [c0, c1, c2, c3] = self.cols;
        let last = if c0.w == 0.0 && c1.w == 0.0 && c2.w == 0.0 {
            c3.w.abs()
        } else {
            c3.length()
        };
        [c0.length(), c1.length(), c2.length(), last]
    }

    // --- Elementary transforms ---

    /// Creates a translation matrix.
    #[inline]
    pub const fn from_translation(v: Vec3) -> Self {
        Self::from_cols(Vec4::X, Vec4::Y, Vec4::Z, Vec4::from_vec3(v, 1.0))
    }

    /// Creates a non-uniform scaling matrix.
    #[inline]
    pub const fn from_scale(scale: Vec3) -> Self {
        Self::from_cols(
            Vec4::new(scale.x, 0.0, 0.0, 0.0),
            Vec4::new(0.0, scale.y, 0.0, 0.0),
            Vec4::new(0.0, 0.0, scale.z, 0.0),
            Vec4::W,
        )
    }

    /// Creates a right-handed rotation around the X-axis (`+Y` turns towards `+Z`).
    #[inline]
    pub fn from_rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols(
            Vec4::X,
            Vec4::new(0.0, c, s, 0.0),
            Vec4::new(0.0, -s, c, 0.0),
            Vec4::W,
        )
    }

    /// Creates a right-handed rotation around the Y-axis (`+Z` turns towards `+X`).
    #[inline]
    pub fn from_rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols(
            Vec4::new(c, 0.0, -s, 0.0),
            Vec4::Y,
            Vec4::new(s, 0.0, c, 0.0),
            Vec4::W,
        )
    }

    /// Creates a right-handed rotation around the Z-axis (`+X` turns towards `+Y`).
    #[inline]
    pub fn from_rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols(
            Vec4::new(c, s, 0.0, 0.0),
            Vec4::new(-s, c, 0.0, 0.0),
            Vec4::Z,
            Vec4::W,
        )
    }

    /// Creates a right-handed rotation of `angle` radians around `axis`.
    ///
    /// The axis does not need to be normalized. A zero-length axis yields the identity.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let Some(axis) = axis.try_normalize() else {
            return Self::IDENTITY;
        };
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let Vec3 { x, y, z } = axis;

        Self::from_cols(
            Vec4::new(t * x * x + c, t * x * y + s * z, t * x * z - s * y, 0.0),
            Vec4::new(t * x * y - s * z, t * y * y + c, t * y * z + s * x, 0.0),
            Vec4::new(t * x * z + s * y, t * y * z - s * x, t * z * z + c, 0.0),
            Vec4::W,
        )
    }

    // --- Composition (post-multiply: `self * T`) ---

    /// Returns `self * translation(v)`.
    #[inline]
    pub fn translate(&self, v: Vec3) -> Self {
        *self * Self::from_translation(v)
    }

    /// Returns `self * x_rotation(angle)`.
    #[inline]
    pub fn rotate_x(&self, angle: f32) -> Self {
        *self * Self::from_rotation_x(angle)
    }

    /// Returns `self * y_rotation(angle)`.
    #[inline]
    pub fn rotate_y(&self, angle: f32) -> Self {
        *self * Self::from_rotation_y(angle)
    }

    /// Returns `self * z_rotation(angle)`.
    #[inline]
    pub fn rotate_z(&self, angle: f32) -> Self {
        *self * Self::from_rotation_z(angle)
    }

    /// Returns `self * axis_rotation(axis, angle)`.
    #[inline]
    pub fn rotate_axis(&self, axis: Vec3, angle: f32) -> Self {
        *self * Self::from_axis_angle(axis, angle)
    }

    /// Returns `self * scaling(scale)`.
    #[inline]
    pub fn scale(&self, scale: Vec3) -> Self {
        *self * Self::from_scale(scale)
    }

    /// Returns the product `self * rhs`.
    ///
    /// Transforming a column vector by the result applies `rhs` first and `self` second.
    #[inline]
    pub fn multiply(&self, rhs: &Mat4) -> Self {
        Self::from_cols(
            self.transform_vec4(rhs.cols[0]),
            self.transform_vec4(rhs.cols[1]),
            self.transform_vec4(rhs.cols[2]),
            self.transform_vec4(rhs.cols[3]),
        )
    }

    // --- Projections ---

    /// Creates a right-handed perspective projection with a `[-1, 1]` depth range.
    ///
    /// View-space points at `z = -z_near` land on depth `-1` and points at
    /// `z = -z_far` on depth `+1` after the perspective divide.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidFrustum`] if any argument is non-finite, if
    /// `fov_y_radians` is not in `(0, PI)`, if `aspect` is not positive, if
    /// `z_near <= 0` or if `z_far <= z_near`.
    pub fn perspective(
        fov_y_radians: f32,
        aspect: f32,
        z_near: f32,
        z_far: f32,
    ) -> Result<Self, MathError> {
        let issue = if ![fov_y_radians, aspect, z_near, z_far]
            .iter()
            .all(|v| v.is_finite())
        {
            Some(FrustumIssue::NonFinite)
        } else if fov_y_radians <= 0.0 || fov_y_radians >= PI {
            Some(FrustumIssue::InvalidFieldOfView { fov_y_radians })
        } else if aspect <= 0.0 {
            Some(FrustumIssue::InvalidAspect { aspect })
        } else {
            check_depth_range(z_near, z_far)
        };
        if let Some(issue) = issue {
            return Err(reject(issue));
        }

        let f = 1.0 / (fov_y_radians * 0.5).tan();
        let range_inv = 1.0 / (z_near - z_far);

        Ok(Self::from_cols(
            Vec4::new(f / aspect, 0.0, 0.0, 0.0),
            Vec4::new(0.0, f, 0.0, 0.0),
            Vec4::new(0.0, 0.0, (z_near + z_far) * range_inv, -1.0),
            Vec4::new(0.0, 0.0, z_near * z_far * range_inv * 2.0, 0.0),
        ))
    }

    /// Creates an off-center perspective projection from the bounds of the near plane.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidFrustum`] for non-finite bounds, a zero-width
    /// or zero-height near plane, `z_near <= 0` or `z_far <= z_near`.
    pub fn frustum(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Result<Self, MathError> {
        let issue = check_box(left, right, bottom, top, z_near, z_far)
            .or_else(|| check_depth_range(z_near, z_far));
        if let Some(issue) = issue {
            return Err(reject(issue));
        }

        let dx = right - left;
        let dy = top - bottom;
        let dz = z_far - z_near;

        Ok(Self::from_cols(
            Vec4::new(2.0 * z_near / dx, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 * z_near / dy, 0.0, 0.0),
            Vec4::new(
                (left + right) / dx,
                (top + bottom) / dy,
                -(z_far + z_near) / dz,
                -1.0,
            ),
            Vec4::new(0.0, 0.0, -2.0 * z_near * z_far / dz, 0.0),
        ))
    }

    /// Creates an orthographic projection with a `[-1, 1]` depth range.
    ///
    /// The box `[left, right] x [bottom, top] x [-z_near, -z_far]` maps onto the
    /// clip-space cube. Inverted ranges are allowed (`bottom > top` flips Y, as
    /// pixel-space projections do) and so are negative depths, but every range
    /// must have a non-zero extent.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidFrustum`] for non-finite bounds or when
    /// `left == right`, `bottom == top` or `z_near == z_far`.
    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Result<Self, MathError> {
        let issue = check_box(left, right, bottom, top, z_near, z_far).or({
            if z_near == z_far {
                Some(FrustumIssue::ZeroExtent { axis: Axis::Z })
            } else {
                None
            }
        });
        if let Some(issue) = issue {
            return Err(reject(issue));
        }

        Ok(Self::from_cols(
            Vec4::new(2.0 / (right - left), 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 / (top - bottom), 0.0, 0.0),
            Vec4::new(0.0, 0.0, 2.0 / (z_near - z_far), 0.0),
            Vec4::new(
                (left + right) / (left - right),
                (bottom + top) / (bottom - top),
                (z_near + z_far) / (z_near - z_far),
                1.0,
            ),
        ))
    }

    // --- Cameras ---

    /// Creates a camera matrix positioned at `eye` and looking at `target`.
    ///
    /// This is a camera-to-world transform: its columns are the camera's right,
    /// up and forward axes followed by `eye`. The forward axis points from
    /// `target` back towards `eye`, so the camera looks down its own `-Z`.
    /// Invert it to get a view matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DegenerateBasis`] if `eye` and `target` coincide, if
    /// `up` is zero, or if `up` is parallel to the viewing direction.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Result<Self, MathError> {
        let forward = eye - target;
        let degenerate = || {
            log::debug!("Rejecting look_at basis: forward {forward:?}, up {up:?}");
            MathError::DegenerateBasis { forward, up }
        };

        let z_axis = forward.try_normalize().ok_or_else(degenerate)?;
        let up_dir = up.try_normalize().ok_or_else(degenerate)?;
        let x_axis = up_dir.cross(z_axis).try_normalize().ok_or_else(degenerate)?;
        let y_axis = z_axis.cross(x_axis);

        Ok(Self::from_cols(
            Vec4::from_vec3(x_axis, 0.0),
            Vec4::from_vec3(y_axis, 0.0),
            Vec4::from_vec3(z_axis, 0.0),
            Vec4::from_vec3(eye, 1.0),
        ))
    }

    // --- Algebra ---

    /// Returns the transpose of the matrix, where rows and columns are swapped.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2), self.row(3))
    }

    /// Computes the determinant of the matrix.
    pub fn determinant(&self) -> f32 {
        Minors::of(self).determinant()
    }

    /// Computes the inverse of the matrix by cofactor expansion.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SingularMatrix`] if the determinant is zero relative
    /// to the lengths of the columns, ignoring the translation of an affine
    /// matrix (see [`SINGULAR_EPSILON`](crate::SINGULAR_EPSILON)),
    /// or if the inverse would not be finite.
    pub fn inverse(&self) -> Result<Self, MathError> {
        let a = |c: usize, r: usize| self.cols[c][r];
        let m = Minors::of(self);
        let det = m.determinant();

        if is_singular(det, self.column_scales()) {
            log::debug!("Rejecting inverse of singular matrix (det = {det:e})");
            return Err(MathError::SingularMatrix { determinant: det });
        }
        let inv_det = 1.0 / det;
        let Minors { s, c } = m;

        let inv = Self::from_cols(
            Vec4::new(
                a(1, 1) * c[5] - a(1, 2) * c[4] + a(1, 3) * c[3],
                -a(0, 1) * c[5] + a(0, 2) * c[4] - a(0, 3) * c[3],
                a(3, 1) * s[5] - a(3, 2) * s[4] + a(3, 3) * s[3],
                -a(2, 1) * s[5] + a(2, 2) * s[4] - a(2, 3) * s[3],
            ) * inv_det,
            Vec4::new(
                -a(1, 0) * c[5] + a(1, 2) * c[2] - a(1, 3) * c[1],
                a(0, 0) * c[5] - a(0, 2) * c[2] + a(0, 3) * c[1],
                -a(3, 0) * s[5] + a(3, 2) * s[2] - a(3, 3) * s[1],
                a(2, 0) * s[5] - a(2, 2) * s[2] + a(2, 3) * s[1],
            ) * inv_det,
            Vec4::new(
                a(1, 0) * c[4] - a(1, 1) * c[2] + a(1, 3) * c[0],
                -a(0, 0) * c[4] + a(0, 1) * c[2] - a(0, 3) * c[0],
                a(3, 0) * s[4] - a(3, 1) * s[2] + a(3, 3) * s[0],
                -a(2, 0) * s[4] + a(2, 1) * s[2] - a(2, 3) * s[0],
            ) * inv_det,
            Vec4::new(
                -a(1, 0) * c[3] + a(1, 1) * c[1] - a(1, 2) * c[0],
                a(0, 0) * c[3] - a(0, 1) * c[1] + a(0, 2) * c[0],
                -a(3, 0) * s[3] + a(3, 1) * s[1] - a(3, 2) * s[0],
                a(2, 0) * s[3] - a(2, 1) * s[1] + a(2, 2) * s[0],
            ) * inv_det,
        );

        if !inv.is_finite() {
            log::debug!("Rejecting inverse with non-finite elements (det = {det:e})");
            return Err(MathError::SingularMatrix { determinant: det });
        }
        Ok(inv)
    }

    /// Returns the matrix that transforms normals: the transpose of the inverse.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SingularMatrix`] if the matrix cannot be inverted.
    #[inline]
    pub fn normal_matrix(&self) -> Result<Self, MathError> {
        Ok(self.inverse()?.transpose())
    }

    // --- Transforming vectors ---

    /// Transforms a homogeneous `Vec4` by this matrix.
    #[inline]
    pub fn transform_vec4(&self, v: Vec4) -> Vec4 {
        self.cols[0] * v.x + self.cols[1] * v.y + self.cols[2] * v.z + self.cols[3] * v.w
    }

    /// Transforms a point (`w = 1`), including the perspective divide.
    ///
    /// The resulting `x, y, z` are divided by the resulting `w` whenever `w != 0`.
    /// A negative `w` (a point behind a perspective camera) is divided like any
    /// other, mirroring the point through the eye. When `w == 0` exactly the
    /// point lies on the camera plane and has no projection; the undivided
    /// `x, y, z` are returned.
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        let v = self.transform_vec4(Vec4::from_vec3(point, 1.0));
        if v.w == 0.0 {
            v.truncate()
        } else {
            v.truncate() / v.w
        }
    }

    /// Transforms a direction (`w = 0`): only the upper-left 3x3 is applied.
    #[inline]
    pub fn transform_direction(&self, direction: Vec3) -> Vec3 {
        self.transform_vec4(Vec4::from_vec3(direction, 0.0)).truncate()
    }

    /// Transforms a surface normal by the inverse transpose of this matrix.
    ///
    /// The result is not normalized.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SingularMatrix`] if the matrix cannot be inverted.
    pub fn transform_normal(&self, normal: Vec3) -> Result<Vec3, MathError> {
        Ok(self.normal_matrix()?.transform_direction(normal))
    }
}

fn reject(issue: FrustumIssue) -> MathError {
    log::debug!("Rejecting projection: {issue}");
    MathError::InvalidFrustum(issue)
}

fn check_box(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    z_near: f32,
    z_far: f32,
) -> Option<FrustumIssue> {
    if ![left, right, bottom, top, z_near, z_far]
        .iter()
        .all(|v| v.is_finite())
    {
        Some(FrustumIssue::NonFinite)
    } else if left == right {
        Some(FrustumIssue::ZeroExtent { axis: Axis::X })
    } else if bottom == top {
        Some(FrustumIssue::ZeroExtent { axis: Axis::Y })
    } else {
        None
    }
}

fn check_depth_range(z_near: f32, z_far: f32) -> Option<FrustumIssue> {
    if z_near <= 0.0 {
        Some(FrustumIssue::NonPositiveNear { near: z_near })
    } else if z_far <= z_near {
        Some(FrustumIssue::FarNotBeyondNear {
            near: z_near,
            far: z_far,
        })
    } else {
        None
    }
}

/// The twelve 2x2 minors shared by the determinant and the inverse.
///
/// `s` come from the first two columns, `c` from the last two.
struct Minors {
    s: [f32; 6],
    c: [f32; 6],
}

impl Minors {
    fn of(m: &Mat4) -> Self {
        let a = |c: usize, r: usize| m.cols[c][r];
        Self {
            s: [
                a(0, 0) * a(1, 1) - a(1, 0) * a(0, 1),
                a(0, 0) * a(1, 2) - a(1, 0) * a(0, 2),
                a(0, 0) * a(1, 3) - a(1, 0) * a(0, 3),
                a(0, 1) * a(1, 2) - a(1, 1) * a(0, 2),
                a(0, 1) * a(1, 3) - a(1, 1) * a(0, 3),
                a(0, 2) * a(1, 3) - a(1, 2) * a(0, 3),
            ],
            c: [
                a(2, 0) * a(3, 1) - a(3, 0) * a(2, 1),
                a(2, 0) * a(3, 2) - a(3, 0) * a(2, 2),
                a(2, 0) * a(3, 3) - a(3, 0) * a(2, 3),
                a(2, 1) * a(3, 2) - a(3, 1) * a(2, 2),
                a(2, 1) * a(3, 3) - a(3, 1) * a(2, 3),
                a(2, 2) * a(3, 3) - a(3, 2) * a(2, 3),
            ],
        }
    }

    fn determinant(&self) -> f32 {
        let Self { s, c } = self;
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }
}

// --- Operators Overloading ---

impl Default for Mat4 {
    /// Returns the 4x4 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 16]> for Mat4 {
    #[inline]
    fn from(a: [f32; 16]) -> Self {
        Self::from_cols_array(&a)
    }
}

impl From<Mat4> for [f32; 16] {
    #[inline]
    fn from(m: Mat4) -> Self {
        m.to_cols_array()
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Self;
    /// Multiplies this matrix by another `Mat4`. Note that matrix multiplication is not commutative.
    #[inline]
    fn mul(self, rhs: Mat4) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl MulAssign<Mat4> for Mat4 {
    /// Replaces `self` with `self * rhs`.
    #[inline]
    fn mul_assign(&mut self, rhs: Mat4) {
        *self = self.multiply(&rhs);
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    /// Transforms a `Vec4` by this matrix.
    #[inline]
    fn mul(self, rhs: Vec4) -> Self::Output {
        self.transform_vec4(rhs)
    }
}

impl Index<usize> for Mat4 {
    type Output = Vec4;
    /// Allows accessing a matrix column by index.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.cols[index]
    }
}

impl IndexMut<usize> for Mat4 {
    /// Allows mutably accessing a matrix column by index.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.cols[index]
    }
}

impl AbsDiffEq for Mat4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        Vec4::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.cols
            .iter()
            .zip(other.cols.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Mat4 {
    fn default_max_relative() -> f32 {
        Vec4::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.cols
            .iter()
            .zip(other.cols.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl UlpsEq for Mat4 {
    fn default_max_ulps() -> u32 {
        Vec4::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        self.cols
            .iter()
            .zip(other.cols.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

// --- Tests ---
