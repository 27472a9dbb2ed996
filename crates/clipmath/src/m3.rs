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

//! Flat 3x3 matrix functions for 2D pixel-space transforms.
//!
//! Same conventions as [`crate::m4`]: the result is written into `dst`, and
//! [`multiply_assign`] covers the in-place product.

use crate::{Mat3, MathError, Vec2};

/// Writes the pixel-to-clip-space projection for a `width` x `height` canvas into `dst`.
///
/// # Errors
///
/// Returns [`MathError::InvalidFrustum`] and leaves `dst` unchanged if either
/// dimension is zero or not finite.
pub fn projection(width: f32, height: f32, dst: &mut Mat3) -> Result<(), MathError> {
    *dst = Mat3::projection(width, height)?;
    Ok(())
}

/// Writes the identity matrix into `dst`.
#[inline]
pub fn identity(dst: &mut Mat3) {
    *dst = Mat3::IDENTITY;
}

/// Writes a 2D translation into `dst`.
#[inline]
pub fn translation(tx: f32, ty: f32, dst: &mut Mat3) {
    *dst = Mat3::from_translation(Vec2::new(tx, ty));
}

/// Writes a 2D rotation into `dst`.
#[inline]
pub fn rotation(angle: f32, dst: &mut Mat3) {
    *dst = Mat3::from_rotation(angle);
}

/// Writes a 2D scaling into `dst`.
#[inline]
pub fn scaling(sx: f32, sy: f32, dst: &mut Mat3) {
    *dst = Mat3::from_scale(Vec2::new(sx, sy));
}

/// Writes `m * translation(tx, ty)` into `dst`.
#[inline]
pub fn translate(m: &Mat3, tx: f32, ty: f32, dst: &mut Mat3) {
    *dst = m.translate(Vec2::new(tx, ty));
}

/// Writes `m * rotation(angle)` into `dst`.
#[inline]
pub fn rotate(m: &Mat3, angle: f32, dst: &mut Mat3) {
    *dst = m.rotate(angle);
}

/// Writes `m * scaling(sx, sy)` into `dst`.
#[inline]
pub fn scale(m: &Mat3, sx: f32, sy: f32, dst: &mut Mat3) {
    *dst = m.scale(Vec2::new(sx, sy));
}

/// Writes the product `a * b` into `dst`.
#[inline]
pub fn multiply(a: &Mat3, b: &Mat3, dst: &mut Mat3) {
    *dst = a.multiply(b);
}

/// Replaces `a` with `a * b`.
#[inline]
pub fn multiply_assign(a: &mut Mat3, b: &Mat3) {
    *a = a.multiply(b);
}

/// Writes the inverse of `m` into `dst`.
///
/// # Errors
///
/// Returns [`MathError::SingularMatrix`] and leaves `dst` unchanged if `m` is singular.
pub fn inverse(m: &Mat3, dst: &mut Mat3) -> Result<(), MathError> {
    *dst = m.inverse()?;
    Ok(())
}

/// Writes the transpose of `m` into `dst`.
#[inline]
pub fn transpose(m: &Mat3, dst: &mut Mat3) {
    *dst = m.transpose();
}

/// Transforms a 2D point by `m`.
#[inline]
pub fn transform_point(m: &Mat3, point: Vec2) -> Vec2 {
    m.transform_point(point)
}

/// Copies `src` into `dst`.
#[inline]
pub fn copy(src: &Mat3, dst: &mut Mat3) {
    dst.copy_from(src);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lesson_chain() {
        // projection -> translate -> rotate -> scale, as a 2D shape is placed on a canvas.
        let mut matrix = Mat3::IDENTITY;
        projection(400.0, 300.0, &mut matrix).unwrap();
        let mut tmp = Mat3::IDENTITY;
        translate(&matrix, 200.0, 150.0, &mut tmp);
        rotate(&tmp, 0.0, &mut matrix);
        scale(&matrix, 2.0, 2.0, &mut tmp);

        // The shape origin lands in the middle of the canvas.
        assert_relative_eq!(transform_point(&tmp, Vec2::ZERO), Vec2::ZERO);
        // One unit right is two pixels right after scaling.
        assert_relative_eq!(
            transform_point(&tmp, Vec2::new(1.0, 0.0)),
            Vec2::new(4.0 / 400.0, 0.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_constructors_write_dst() {
        let mut dst = Mat3::ZERO;
        identity(&mut dst);
        assert_eq!(dst, Mat3::IDENTITY);
        translation(3.0, 4.0, &mut dst);
        assert_eq!(dst, Mat3::from_translation(Vec2::new(3.0, 4.0)));
        rotation(0.3, &mut dst);
        assert_eq!(dst, Mat3::from_rotation(0.3));
        scaling(2.0, 5.0, &mut dst);
        assert_eq!(dst, Mat3::from_scale(Vec2::new(2.0, 5.0)));
    }

    #[test]
    fn test_multiply_assign_and_inverse() {
        let mut a = Mat3::from_translation(Vec2::new(10.0, -4.0)).rotate(0.7);
        let b = Mat3::from_scale(Vec2::new(3.0, 0.5));

        let mut fresh = Mat3::ZERO;
        multiply(&a, &b, &mut fresh);
        multiply_assign(&mut a, &b);
        assert_eq!(a, fresh);

        let mut inv = Mat3::ZERO;
        inverse(&a, &mut inv).unwrap();
        assert_relative_eq!(a * inv, Mat3::IDENTITY, epsilon = 1e-5);

        let mut t = Mat3::ZERO;
        transpose(&a, &mut t);
        assert_eq!(t, a.transpose());
        let mut c = Mat3::ZERO;
        copy(&a, &mut c);
        assert_eq!(c, a);
    }

    #[test]
    fn test_errors_leave_dst_untouched() {
        let sentinel = Mat3::from_translation(Vec2::new(7.0, 7.0));
        let mut dst = sentinel;
        assert!(projection(0.0, 100.0, &mut dst).is_err());
        assert!(inverse(&Mat3::ZERO, &mut dst).is_err());
        assert_eq!(dst, sentinel);
    }
}
