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

//! Flat 4x4 matrix and 3-vector functions that write into a caller-owned destination.
//!
//! Each function fully computes its result before storing it in `dst`, so the
//! destination can be a long-lived buffer reused every frame. Fallible
//! functions leave `dst` untouched when they return an error.
//!
//! The borrow checker rules out passing an input as its own destination; the
//! in-place form of the product is [`multiply_assign`].
//!
//! ```
//! use clipmath::{m4, Mat4, Vec3};
//!
//! let mut projection = Mat4::IDENTITY;
//! let mut camera = Mat4::IDENTITY;
//! let mut view = Mat4::IDENTITY;
//! let mut view_projection = Mat4::IDENTITY;
//!
//! m4::perspective(1.0, 1.5, 1.0, 2000.0, &mut projection)?;
//! m4::look_at(Vec3::new(0.0, 50.0, 200.0), Vec3::ZERO, Vec3::Y, &mut camera)?;
//! m4::inverse(&camera, &mut view)?;
//! m4::multiply(&projection, &view, &mut view_projection);
//! # Ok::<(), clipmath::MathError>(())
//! ```

use crate::{Mat4, MathError, Vec3};

/// Writes the identity matrix into `dst`.
#[inline]
pub fn identity(dst: &mut Mat4) {
    *dst = Mat4::IDENTITY;
}

/// Writes a translation matrix into `dst`.
#[inline]
pub fn translation(tx: f32, ty: f32, tz: f32, dst: &mut Mat4) {
    *dst = Mat4::from_translation(Vec3::new(tx, ty, tz));
}

/// Writes a rotation around the X-axis into `dst`.
#[inline]
pub fn x_rotation(angle: f32, dst: &mut Mat4) {
    *dst = Mat4::from_rotation_x(angle);
}

/// Writes a rotation around the Y-axis into `dst`.
#[inline]
pub fn y_rotation(angle: f32, dst: &mut Mat4) {
    *dst = Mat4::from_rotation_y(angle);
}

/// Writes a rotation around the Z-axis into `dst`.
#[inline]
pub fn z_rotation(angle: f32, dst: &mut Mat4) {
    *dst = Mat4::from_rotation_z(angle);
}

/// Writes a rotation around an arbitrary axis into `dst`.
#[inline]
pub fn axis_rotation(axis: Vec3, angle: f32, dst: &mut Mat4) {
    *dst = Mat4::from_axis_angle(axis, angle);
}

/// Writes a scaling matrix into `dst`.
#[inline]
pub fn scaling(sx: f32, sy: f32, sz: f32, dst: &mut Mat4) {
    *dst = Mat4::from_scale(Vec3::new(sx, sy, sz));
}

/// Writes `m * translation(tx, ty, tz)` into `dst`.
#[inline]
pub fn translate(m: &Mat4, tx: f32, ty: f32, tz: f32, dst: &mut Mat4) {
    *dst = m.translate(Vec3::new(tx, ty, tz));
}

/// Writes `m * x_rotation(angle)` into `dst`.
#[inline]
pub fn x_rotate(m: &Mat4, angle: f32, dst: &mut Mat4) {
    *dst = m.rotate_x(angle);
}

/// Writes `m * y_rotation(angle)` into `dst`.
#[inline]
pub fn y_rotate(m: &Mat4, angle: f32, dst: &mut Mat4) {
    *dst = m.rotate_y(angle);
}

/// Writes `m * z_rotation(angle)` into `dst`.
#[inline]
pub fn z_rotate(m: &Mat4, angle: f32, dst: &mut Mat4) {
    *dst = m.rotate_z(angle);
}

/// Writes `m * axis_rotation(axis, angle)` into `dst`.
#[inline]
pub fn axis_rotate(m: &Mat4, axis: Vec3, angle: f32, dst: &mut Mat4) {
    *dst = m.rotate_axis(axis, angle);
}

/// Writes `m * scaling(sx, sy, sz)` into `dst`.
#[inline]
pub fn scale(m: &Mat4, sx: f32, sy: f32, sz: f32, dst: &mut Mat4) {
    *dst = m.scale(Vec3::new(sx, sy, sz));
}

/// Writes the product `a * b` into `dst`.
#[inline]
pub fn multiply(a: &Mat4, b: &Mat4, dst: &mut Mat4) {
    *dst = a.multiply(b);
}

/// Replaces `a` with `a * b`.
#[inline]
pub fn multiply_assign(a: &mut Mat4, b: &Mat4) {
    *a = a.multiply(b);
}

/// Writes the inverse of `m` into `dst`.
///
/// # Errors
///
/// Returns [`MathError::SingularMatrix`] and leaves `dst` unchanged if `m` is singular.
#[inline]
pub fn inverse(m: &Mat4, dst: &mut Mat4) -> Result<(), MathError> {
    *dst = m.inverse()?;
    Ok(())
}

/// Writes the transpose of `m` into `dst`.
#[inline]
pub fn transpose(m: &Mat4, dst: &mut Mat4) {
    *dst = m.transpose();
}

/// Writes a perspective projection into `dst`. See [`Mat4::perspective`].
///
/// # Errors
///
/// Returns [`MathError::InvalidFrustum`] and leaves `dst` unchanged on invalid parameters.
#[inline]
pub fn perspective(
    fov_y_radians: f32,
    aspect: f32,
    z_near: f32,
    z_far: f32,
    dst: &mut Mat4,
) -> Result<(), MathError> {
    *dst = Mat4::perspective(fov_y_radians, aspect, z_near, z_far)?;
    Ok(())
}

/// Writes an orthographic projection into `dst`. See [`Mat4::orthographic`].
///
/// # Errors
///
/// Returns [`MathError::InvalidFrustum`] and leaves `dst` unchanged on invalid parameters.
#[inline]
pub fn orthographic(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    z_near: f32,
    z_far: f32,
    dst: &mut Mat4,
) -> Result<(), MathError> {
    *dst = Mat4::orthographic(left, right, bottom, top, z_near, z_far)?;
    Ok(())
}

/// Writes an off-center perspective projection into `dst`. See [`Mat4::frustum`].
///
/// # Errors
///
/// Returns [`MathError::InvalidFrustum`] and leaves `dst` unchanged on invalid parameters.
#[inline]
pub fn frustum(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    z_near: f32,
    z_far: f32,
    dst: &mut Mat4,
) -> Result<(), MathError> {
    *dst = Mat4::frustum(left, right, bottom, top, z_near, z_far)?;
    Ok(())
}

/// Writes a camera-to-world matrix into `dst`. See [`Mat4::look_at`].
///
/// # Errors
///
/// Returns [`MathError::DegenerateBasis`] and leaves `dst` unchanged when no basis exists.
#[inline]
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3, dst: &mut Mat4) -> Result<(), MathError> {
    *dst = Mat4::look_at(eye, target, up)?;
    Ok(())
}

/// Transforms a point by `m`, including the perspective divide.
#[inline]
pub fn transform_point(m: &Mat4, point: Vec3) -> Vec3 {
    m.transform_point(point)
}

/// Transforms a direction by the linear part of `m`.
#[inline]
pub fn transform_direction(m: &Mat4, direction: Vec3) -> Vec3 {
    m.transform_direction(direction)
}

/// Transforms a normal by the inverse transpose of `m`.
///
/// # Errors
///
/// Returns [`MathError::SingularMatrix`] if `m` cannot be inverted.
#[inline]
pub fn transform_normal(m: &Mat4, normal: Vec3) -> Result<Vec3, MathError> {
    m.transform_normal(normal)
}

/// Copies `src` into `dst`.
#[inline]
pub fn copy(src: &Mat4, dst: &mut Mat4) {
    dst.copy_from(src);
}

/// Writes the unit vector of `v` into `dst`, or `Vec3::ZERO` if `v` has no length.
#[inline]
pub fn normalize(v: Vec3, dst: &mut Vec3) {
    *dst = v.normalize();
}

/// Writes `a x b` into `dst`.
#[inline]
pub fn cross(a: Vec3, b: Vec3, dst: &mut Vec3) {
    *dst = a.cross(b);
}

/// Returns the dot product of `a` and `b`.
#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.dot(b)
}

/// Writes `a - b` into `dst`.
#[inline]
pub fn subtract_vectors(a: Vec3, b: Vec3, dst: &mut Vec3) {
    *dst = a - b;
}

/// Writes `a + b` into `dst`.
#[inline]
pub fn add_vectors(a: Vec3, b: Vec3, dst: &mut Vec3) {
    *dst = a + b;
}

/// Writes `v * s` into `dst`.
#[inline]
pub fn scale_vector(v: Vec3, s: f32, dst: &mut Vec3) {
    *dst = v * s;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FrustumIssue;
    use approx::assert_relative_eq;

    #[test]
    fn test_constructors_write_dst() {
        let mut dst = Mat4::ZERO;
        identity(&mut dst);
        assert_eq!(dst, Mat4::IDENTITY);

        translation(1.0, 2.0, 3.0, &mut dst);
        assert_eq!(dst, Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)));

        x_rotation(0.5, &mut dst);
        assert_eq!(dst, Mat4::from_rotation_x(0.5));
        y_rotation(0.5, &mut dst);
        assert_eq!(dst, Mat4::from_rotation_y(0.5));
        z_rotation(0.5, &mut dst);
        assert_eq!(dst, Mat4::from_rotation_z(0.5));
        axis_rotation(Vec3::Y, 0.5, &mut dst);
        assert_relative_eq!(dst, Mat4::from_rotation_y(0.5), epsilon = 1e-6);

        scaling(2.0, 3.0, 4.0, &mut dst);
        assert_eq!(dst, Mat4::from_scale(Vec3::new(2.0, 3.0, 4.0)));
    }

    #[test]
    fn test_composition_matches_methods() {
        let m = Mat4::from_rotation_y(0.25);
        let mut dst = Mat4::ZERO;

        translate(&m, 1.0, 2.0, 3.0, &mut dst);
        assert_eq!(dst, m.translate(Vec3::new(1.0, 2.0, 3.0)));
        x_rotate(&m, 0.1, &mut dst);
        assert_eq!(dst, m.rotate_x(0.1));
        y_rotate(&m, 0.1, &mut dst);
        assert_eq!(dst, m.rotate_y(0.1));
        z_rotate(&m, 0.1, &mut dst);
        assert_eq!(dst, m.rotate_z(0.1));
        axis_rotate(&m, Vec3::ONE, 0.1, &mut dst);
        assert_eq!(dst, m.rotate_axis(Vec3::ONE, 0.1));
        scale(&m, 2.0, 2.0, 2.0, &mut dst);
        assert_eq!(dst, m.scale(Vec3::new(2.0, 2.0, 2.0)));
        transpose(&m, &mut dst);
        assert_eq!(dst, m.transpose());
    }

    #[test]
    fn test_multiply_assign_matches_fresh_buffer() {
        let mut a = Mat4::from_translation(Vec3::new(5.0, 0.0, -3.0)).rotate_x(0.8);
        let b = Mat4::from_rotation_z(1.3).scale(Vec3::new(1.0, 4.0, 2.0));

        let mut fresh = Mat4::ZERO;
        multiply(&a, &b, &mut fresh);
        multiply_assign(&mut a, &b);
        assert_eq!(a, fresh);
    }

    #[test]
    fn test_errors_leave_dst_untouched() {
        let sentinel = Mat4::from_translation(Vec3::new(9.0, 9.0, 9.0));

        let mut dst = sentinel;
        assert!(inverse(&Mat4::ZERO, &mut dst).is_err());
        assert_eq!(dst, sentinel);

        let err = perspective(1.0, 1.0, 0.0, 1.0, &mut dst).unwrap_err();
        assert_eq!(
            err,
            MathError::InvalidFrustum(FrustumIssue::NonPositiveNear { near: 0.0 })
        );
        assert_eq!(dst, sentinel);

        assert!(orthographic(0.0, 0.0, 0.0, 1.0, -1.0, 1.0, &mut dst).is_err());
        assert!(frustum(-1.0, 1.0, -1.0, 1.0, 2.0, 1.0, &mut dst).is_err());
        assert!(look_at(Vec3::Y, Vec3::ZERO, Vec3::Y, &mut dst).is_err());
        assert_eq!(dst, sentinel);
    }

    #[test]
    fn test_camera_pipeline() {
        let mut camera = Mat4::IDENTITY;
        let mut view = Mat4::IDENTITY;
        look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y, &mut camera).unwrap();
        inverse(&camera, &mut view).unwrap();
        assert_relative_eq!(
            transform_point(&view, Vec3::ZERO),
            Vec3::new(0.0, 0.0, -5.0)
        );
        assert_relative_eq!(transform_direction(&view, Vec3::X), Vec3::X);
        assert_relative_eq!(transform_normal(&view, Vec3::Y).unwrap(), Vec3::Y);

        let mut copied = Mat4::ZERO;
        copy(&view, &mut copied);
        assert_eq!(copied, view);
    }

    #[test]
    fn test_vector_helpers() {
        let mut out = Vec3::ZERO;
        subtract_vectors(Vec3::new(3.0, 2.0, 1.0), Vec3::ONE, &mut out);
        assert_eq!(out, Vec3::new(2.0, 1.0, 0.0));
        add_vectors(out, Vec3::ONE, &mut out);
        assert_eq!(out, Vec3::new(3.0, 2.0, 1.0));
        scale_vector(out, 2.0, &mut out);
        assert_eq!(out, Vec3::new(6.0, 4.0, 2.0));
        cross(Vec3::X, Vec3::Y, &mut out);
        assert_eq!(out, Vec3::Z);
        normalize(Vec3::new(0.0, 0.0, 8.0), &mut out);
        assert_eq!(out, Vec3::Z);
        normalize(Vec3::ZERO, &mut out);
        assert_eq!(out, Vec3::ZERO);
        assert_eq!(dot(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)), 32.0);
    }
}
