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

//! Defines the `Mat3` type for 2D affine transforms in pixel and clip space.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use super::error::{Axis, FrustumIssue, MathError};
use super::{is_singular, Vec2, Vec3};
use std::ops::{Index, IndexMut, Mul, MulAssign};

/// A 3x3 column-major matrix, used for 2D transforms in homogeneous coordinates.
///
/// Element (column `c`, row `r`) is stored at flat index `c * 3 + r`. The
/// elementary constructors keep the last row at `[0, 0, 1]`, so a 2D point
/// `(x, y)` is transformed as `(x, y, 1)`.
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
pub struct Mat3 {
    /// The columns of the matrix. `cols[0]` is the first column, and so on.
    pub cols: [Vec3; 3],
}

impl Mat3 {
    /// The 3x3 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [Vec3::X, Vec3::Y, Vec3::Z],
    };

    /// A 3x3 matrix with all elements set to 0.
    pub const ZERO: Self = Self {
        cols: [Vec3::ZERO; 3],
    };

    /// Creates a new matrix from three column vectors.
    #[inline]
    pub const fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self { cols: [c0, c1, c2] }
    }

    /// Creates a matrix from 9 floats in column-major order.
    #[inline]
    pub fn from_cols_array(a: &[f32; 9]) -> Self {
        bytemuck::cast(*a)
    }

    /// Returns the 9 elements in column-major order.
    #[inline]
    pub fn to_cols_array(&self) -> [f32; 9] {
        *self.as_array()
    }

    /// Views the matrix as 9 column-major floats, ready for a uniform upload.
    #[inline]
    pub fn as_array(&self) -> &[f32; 9] {
        bytemuck::cast_ref(self)
    }

    /// Views the matrix as raw bytes (36 bytes, native endian).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Returns a row of the matrix as a `Vec3`.
    #[inline]
    pub fn row(&self, index: usize) -> Vec3 {
        Vec3::new(
            self.cols[0][index],
            self.cols[1][index],
            self.cols[2][index],
        )
    }

    /// Overwrites this matrix with the contents of `src`.
    #[inline]
    pub fn copy_from(&mut self, src: &Mat3) {
        self.cols = src.cols;
    }

    /// Returns `true` if every element is finite.
    pub fn is_finite(&self) -> bool {
        self.as_array().iter().all(|e| e.is_finite())
    }

    /// Creates a 2D translation matrix.
    #[inline]
    pub const fn from_translation(v: Vec2) -> Self {
        Self::from_cols(Vec3::X, Vec3::Y, Vec3::new(v.x, v.y, 1.0))
    }

    /// Creates a 2D rotation matrix.
    ///
    /// `+X` is mapped to `(cos, -sin)`. In a Y-down pixel space this turns
    /// shapes clockwise on screen for positive angles.
    #[inline]
    pub fn from_rotation(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols(Vec3::new(c, -s, 0.0), Vec3::new(s, c, 0.0), Vec3::Z)
    }

    /// Creates a 2D scaling matrix.
    #[inline]
    pub const fn from_scale(scale: Vec2) -> Self {
        Self::from_cols(
            Vec3::new(scale.x, 0.0, 0.0),
            Vec3::new(0.0, scale.y, 0.0),
            Vec3::Z,
        )
    }

    /// Creates the matrix that maps pixel coordinates to clip space.
    ///
    /// Pixel space has its origin in the top-left corner with Y pointing down;
    /// clip space has Y pointing up. The Y axis is therefore flipped: pixel
    /// `(0, 0)` maps to `(-1, 1)` and `(width, height)` to `(1, -1)`.
    ///
    /// ```
    /// use clipmath::{Mat3, Vec2};
    ///
    /// let m = Mat3::projection(100.0, 50.0)?;
    /// assert_eq!(m.transform_point(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0));
    /// assert_eq!(m.transform_point(Vec2::new(100.0, 50.0)), Vec2::new(1.0, -1.0));
    /// # Ok::<(), clipmath::MathError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidFrustum`] if `width` or `height` is zero or
    /// not finite.
    pub fn projection(width: f32, height: f32) -> Result<Self, MathError> {
        let issue = if !width.is_finite() || !height.is_finite() {
            Some(FrustumIssue::NonFinite)
        } else if width == 0.0 {
            Some(FrustumIssue::ZeroExtent { axis: Axis::X })
        } else if height == 0.0 {
            Some(FrustumIssue::ZeroExtent { axis: Axis::Y })
        } else {
            None
        };
        if let Some(issue) = issue {
            log::debug!("Rejecting pixel projection {width}x{height}: {issue}");
            return Err(MathError::InvalidFrustum(issue));
        }

        Ok(Self::from_cols(
            Vec3::new(2.0 / width, 0.0, 0.0),
            Vec3::new(0.0, -2.0 / height, 0.0),
            Vec3::new(-1.0, 1.0, 1.0),
        ))
    }

    /// Returns `self * translation(v)`.
    #[inline]
    pub fn translate(&self, v: Vec2) -> Self {
        *self * Self::from_translation(v)
    }

    /// Returns `self * rotation(angle)`.
    #[inline]
    pub fn rotate(&self, angle: f32) -> Self {
        *self * Self::from_rotation(angle)
    }

    /// Returns `self * scaling(scale)`.
    #[inline]
    pub fn scale(&self, scale: Vec2) -> Self {
        *self * Self::from_scale(scale)
    }

    /// Returns the product `self * rhs`; `rhs` is applied to points first.
    #[inline]
    pub fn multiply(&self, rhs: &Mat3) -> Self {
        Self::from_cols(
            self.transform_vec3(rhs.cols[0]),
            self.transform_vec3(rhs.cols[1]),
            self.transform_vec3(rhs.cols[2]),
        )
    }

    /// Transforms a homogeneous `Vec3` by this matrix.
    #[inline]
    pub fn transform_vec3(&self, v: Vec3) -> Vec3 {
        self.cols[0] * v.x + self.cols[1] * v.y + self.cols[2] * v.z
    }

    /// Transforms a 2D point (`w = 1`), dividing by the resulting `w` when it is non-zero.
    #[inline]
    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        let v = self.transform_vec3(Vec3::new(point.x, point.y, 1.0));
        if v.z == 0.0 || v.z == 1.0 {
            Vec2::new(v.x, v.y)
        } else {
            Vec2::new(v.x / v.z, v.y / v.z)
        }
    }

    /// Computes the determinant of the matrix.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let [a, b, c] = self.cols;
        a.dot(b.cross(c))
    }

    /// Returns the transpose of the matrix, where rows and columns are swapped.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2))
    }

    /// Computes the inverse of the matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SingularMatrix`] if the determinant is numerically zero
    /// or the inverse would not be finite.
    pub fn inverse(&self) -> Result<Self, MathError> {
        let [c0, c1, c2] = self.cols;
        // Rows of the inverse are the cross products of column pairs.
        let r0 = c1.cross(c2);
        let r1 = c2.cross(c0);
        let r2 = c0.cross(c1);
        let det = c0.dot(r0);

        if is_singular(det, self.cols.map(|c| c.length())) {
            log::debug!("Rejecting inverse of singular 3x3 matrix (det = {det:e})");
            return Err(MathError::SingularMatrix { determinant: det });
        }

        let inv = Self::from_cols(r0, r1, r2).transpose() * (1.0 / det);
        if !inv.is_finite() {
            log::debug!("Rejecting 3x3 inverse with non-finite elements (det = {det:e})");
            return Err(MathError::SingularMatrix { determinant: det });
        }
        Ok(inv)
    }
}

impl Default for Mat3 {
    /// Returns the 3x3 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 9]> for Mat3 {
    #[inline]
    fn from(a: [f32; 9]) -> Self {
        Self::from_cols_array(&a)
    }
}

impl Mul<Mat3> for Mat3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Mat3) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl MulAssign<Mat3> for Mat3 {
    /// Replaces `self` with `self * rhs`.
    #[inline]
    fn mul_assign(&mut self, rhs: Mat3) {
        *self = self.multiply(&rhs);
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, v: Vec3) -> Self::Output {
        self.transform_vec3(v)
    }
}

impl Mul<f32> for Mat3 {
    type Output = Self;
    /// Scales every element.
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::from_cols(self.cols[0] * rhs, self.cols[1] * rhs, self.cols[2] * rhs)
    }
}

impl Index<usize> for Mat3 {
    type Output = Vec3;
    /// Allows accessing a matrix column by index.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.cols[index]
    }
}

impl IndexMut<usize> for Mat3 {
    /// Allows mutably accessing a matrix column by index.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.cols[index]
    }
}

impl AbsDiffEq for Mat3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        Vec3::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.cols
            .iter()
            .zip(other.cols.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Mat3 {
    fn default_max_relative() -> f32 {
        Vec3::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.cols
            .iter()
            .zip(other.cols.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl UlpsEq for Mat3 {
    fn default_max_ulps() -> u32 {
        Vec3::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        self.cols
            .iter()
            .zip(other.cols.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{approx_eq, FRAC_PI_2, PI};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_identity_default() {
        assert_eq!(Mat3::default(), Mat3::IDENTITY);
        let m = Mat3::from_translation(Vec2::new(3.0, 4.0)).rotate(0.3);
        assert_relative_eq!(m * Mat3::IDENTITY, m);
        assert_relative_eq!(Mat3::IDENTITY * m, m);
    }

    #[test]
    fn test_layout() {
        let m = Mat3::from_translation(Vec2::new(7.0, 8.0));
        assert_eq!(m.as_array(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 7.0, 8.0, 1.0]);
        assert_eq!(m.as_bytes().len(), 36);
        assert_eq!(Mat3::from(m.to_cols_array()), m);
    }

    #[test]
    fn test_elementary_transforms() {
        let p = Vec2::new(1.0, 2.0);
        assert_eq!(
            Mat3::from_translation(Vec2::new(10.0, 20.0)).transform_point(p),
            Vec2::new(11.0, 22.0)
        );
        assert_eq!(
            Mat3::from_scale(Vec2::new(2.0, -3.0)).transform_point(p),
            Vec2::new(2.0, -6.0)
        );
        let r = Mat3::from_rotation(FRAC_PI_2).transform_point(Vec2::new(1.0, 0.0));
        assert_abs_diff_eq!(r, Vec2::new(0.0, -1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_last_row_is_affine() {
        for m in [
            Mat3::from_translation(Vec2::new(1.0, 2.0)),
            Mat3::from_rotation(1.1),
            Mat3::from_scale(Vec2::new(4.0, 5.0)),
        ] {
            assert_eq!(m.row(2), Vec3::Z);
        }
    }

    #[test]
    fn test_composition_order() {
        let m = Mat3::IDENTITY
            .translate(Vec2::new(100.0, 0.0))
            .scale(Vec2::new(2.0, 2.0));
        // Scale is applied first, then translation.
        assert_eq!(m.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(102.0, 2.0));

        let m = Mat3::IDENTITY
            .scale(Vec2::new(2.0, 2.0))
            .translate(Vec2::new(100.0, 0.0));
        assert_eq!(m.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(202.0, 2.0));
    }

    #[test]
    fn test_mul_assign() {
        let mut a = Mat3::from_rotation(0.2).translate(Vec2::new(5.0, 1.0));
        let b = Mat3::from_scale(Vec2::new(3.0, 0.5)).rotate(-1.0);
        let expected = a * b;
        a *= b;
        assert_eq!(a, expected);
    }

    #[test]
    fn test_projection_flips_y() {
        let m = Mat3::projection(100.0, 50.0).unwrap();
        assert_eq!(m.transform_point(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0));
        assert_eq!(m.transform_point(Vec2::new(100.0, 50.0)), Vec2::new(1.0, -1.0));
        assert_eq!(m.transform_point(Vec2::new(50.0, 25.0)), Vec2::new(0.0, 0.0));

        // Moving down in pixels moves down (negative) in clip space.
        let upper = m.transform_point(Vec2::new(10.0, 10.0));
        let lower = m.transform_point(Vec2::new(10.0, 40.0));
        assert!(lower.y < upper.y);
    }

    #[test]
    fn test_projection_rejects_empty_canvas() {
        assert_eq!(
            Mat3::projection(0.0, 50.0),
            Err(MathError::InvalidFrustum(FrustumIssue::ZeroExtent { axis: Axis::X }))
        );
        assert_eq!(
            Mat3::projection(100.0, 0.0),
            Err(MathError::InvalidFrustum(FrustumIssue::ZeroExtent { axis: Axis::Y }))
        );
        assert!(Mat3::projection(f32::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_determinant() {
        assert!(approx_eq(Mat3::IDENTITY.determinant(), 1.0));
        assert!(approx_eq(Mat3::ZERO.determinant(), 0.0));
        assert!(approx_eq(Mat3::from_scale(Vec2::new(2.0, 3.0)).determinant(), 6.0));
        assert!(approx_eq(Mat3::from_rotation(PI / 5.0).determinant(), 1.0));
    }

    #[test]
    fn test_transpose() {
        let m = Mat3::from_cols(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(4.0, 5.0, 6.0),
            Vec3::new(7.0, 8.0, 9.0),
        );
        let expected = Mat3::from_cols(
            Vec3::new(1.0, 4.0, 7.0),
            Vec3::new(2.0, 5.0, 8.0),
            Vec3::new(3.0, 6.0, 9.0),
        );
        assert_eq!(m.transpose(), expected);
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_inverse() {
        let m = Mat3::from_translation(Vec2::new(30.0, -5.0))
            .rotate(PI / 3.0)
            .scale(Vec2::new(1.0, 2.0));
        let inv = m.inverse().expect("Matrix should be invertible");
        assert_abs_diff_eq!(m * inv, Mat3::IDENTITY, epsilon = 1e-5);

        assert_relative_eq!(
            Mat3::from_translation(Vec2::new(3.0, 4.0)).inverse().unwrap(),
            Mat3::from_translation(Vec2::new(-3.0, -4.0))
        );

        // The first two columns are parallel.
        let singular = Mat3::from_cols(
            Vec3::new(1.0, 2.0, 4.0),
            Vec3::new(3.0, 6.0, 12.0),
            Vec3::new(0.0, 1.0, 2.0),
        );
        assert!(matches!(
            singular.inverse(),
            Err(MathError::SingularMatrix { .. })
        ));
        assert!(Mat3::ZERO.inverse().is_err());
    }

    #[test]
    fn test_inverse_overflowing_scale() {
        let tiny = Mat3::from_cols(
            Vec3::new(1e-13, 0.0, 0.0),
            Vec3::new(0.0, 1e-13, 0.0),
            Vec3::new(0.0, 0.0, 1e-13),
        );
        assert!(matches!(
            tiny.inverse(),
            Err(MathError::SingularMatrix { .. })
        ));

        let small = Mat3::from_scale(Vec2::new(1e-3, 1e-3));
        let inv = small.inverse().unwrap();
        assert!(inv.is_finite());
        assert_relative_eq!(
            inv,
            Mat3::from_scale(Vec2::new(1e3, 1e3)),
            max_relative = 1e-5
        );
    }

    #[test]
    fn test_index() {
        let mut m = Mat3::IDENTITY;
        m[2] = Vec3::new(5.0, 6.0, 1.0);
        assert_eq!(m, Mat3::from_translation(Vec2::new(5.0, 6.0)));
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds() {
        let m = Mat3::IDENTITY;
        let _ = m[3];
    }
}
