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

// Clipmath Sandbox
// Computes every matrix of a two-camera scene and logs what a renderer would upload.
//
// Usage: sandbox [scene.json]

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clipmath::frustum::CLIP_CUBE_CORNERS;
use clipmath::{degrees_to_radians, m3, m4, FrustumCorners, Mat3, Mat4, Vec2, Vec3};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ProjectionKind {
    Perspective,
    Orthographic,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct CameraConfig {
    position: [f32; 3],
    target: [f32; 3],
    field_of_view_degrees: f32,
    projection: ProjectionKind,
    /// Half the visible height in world units, for orthographic cameras.
    ortho_half_height: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, -200.0],
            target: [0.0, 0.0, 0.0],
            field_of_view_degrees: 60.0,
            projection: ProjectionKind::Perspective,
            ortho_half_height: 120.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct SceneConfig {
    canvas_width: f32,
    canvas_height: f32,
    near: f32,
    far: f32,
    /// Rotation of the model around Y then X, in degrees.
    rotation_degrees: f32,
    camera: CameraConfig,
    observer: CameraConfig,
    /// Time used to place the orbiting camera of the wireframe cube.
    clock_seconds: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            near: 1.0,
            far: 2000.0,
            rotation_degrees: 150.0,
            camera: CameraConfig::default(),
            observer: CameraConfig {
                position: [-600.0, 400.0, -400.0],
                ..CameraConfig::default()
            },
            clock_seconds: 0.0,
        }
    }
}

/// The per-draw uniform block, laid out as the shader expects it.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct DrawUniforms {
    u_matrix: Mat4,
    u_world_inverse_transpose: Mat4,
    u_color: [f32; 4],
}

fn load_config(path: Option<&Path>) -> Result<SceneConfig> {
    let Some(path) = path else {
        log::info!("No scene file given, using the default scene");
        return Ok(SceneConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scene file {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse scene file {}", path.display()))?;
    log::info!("Loaded scene from {}", path.display());
    Ok(config)
}

fn projection_for(camera: &CameraConfig, aspect: f32, near: f32, far: f32) -> Result<Mat4> {
    let mut projection = Mat4::IDENTITY;
    match camera.projection {
        ProjectionKind::Perspective => m4::perspective(
            degrees_to_radians(camera.field_of_view_degrees),
            aspect,
            near,
            far,
            &mut projection,
        )?,
        ProjectionKind::Orthographic => {
            let half_height = camera.ortho_half_height;
            let half_width = half_height * aspect;
            m4::orthographic(
                -half_width,
                half_width,
                -half_height,
                half_height,
                near,
                far,
                &mut projection,
            )?
        }
    }
    Ok(projection)
}

fn camera_matrix(camera: &CameraConfig) -> Result<Mat4> {
    let mut matrix = Mat4::IDENTITY;
    m4::look_at(
        Vec3::from(camera.position),
        Vec3::from(camera.target),
        Vec3::Y,
        &mut matrix,
    )?;
    Ok(matrix)
}

/// Spins the model around Y then X and centers it on its origin.
fn world_matrix(rotation_degrees: f32) -> Mat4 {
    let rotation = degrees_to_radians(rotation_degrees);
    let mut world = Mat4::IDENTITY;
    let mut tmp = Mat4::IDENTITY;
    m4::y_rotation(rotation, &mut world);
    m4::x_rotate(&world, rotation, &mut tmp);
    m4::translate(&tmp, -35.0, -75.0, -5.0, &mut world);
    world
}

fn log_matrix(label: &str, m: &Mat4) {
    log::debug!("{label}:");
    for r in 0..4 {
        let row = m.row(r);
        log::debug!("  [{:>10.4} {:>10.4} {:>10.4} {:>10.4}]", row.x, row.y, row.z, row.w);
    }
}

/// Draws the model once through each camera.
fn draw_views(config: &SceneConfig, aspect: f32) -> Result<(Mat4, Mat4, Mat4, Mat4)> {
    let projection = projection_for(&config.camera, aspect, config.near, config.far)
        .context("Invalid projection for the main camera")?;
    let camera = camera_matrix(&config.camera).context("Invalid main camera")?;
    let observer_projection = projection_for(&config.observer, aspect, config.near, config.far)
        .context("Invalid projection for the observer camera")?;
    let observer = camera_matrix(&config.observer).context("Invalid observer camera")?;

    let world = world_matrix(config.rotation_degrees);
    let mut world_inverse_transpose = Mat4::IDENTITY;
    m4::inverse(&world, &mut world_inverse_transpose)?;
    world_inverse_transpose = world_inverse_transpose.transpose();

    for (name, proj, cam) in [
        ("main", &projection, &camera),
        ("observer", &observer_projection, &observer),
    ] {
        let mut view = Mat4::IDENTITY;
        m4::inverse(cam, &mut view).with_context(|| format!("The {name} camera has no view"))?;
        let mut mat = Mat4::IDENTITY;
        m4::multiply(proj, &view, &mut mat);
        m4::multiply_assign(&mut mat, &world);

        let uniforms = DrawUniforms {
            u_matrix: mat,
            u_world_inverse_transpose: world_inverse_transpose,
            u_color: [0.2, 1.0, 0.2, 1.0],
        };
        let origin = mat.transform_point(Vec3::ZERO);
        log::info!(
            "{name} view: model origin at clip ({:.3}, {:.3}, {:.3}), uniform block {} bytes",
            origin.x,
            origin.y,
            origin.z,
            bytemuck::bytes_of(&uniforms).len()
        );
        log_matrix(&format!("{name} u_matrix"), &mat);
    }

    Ok((projection, camera, observer_projection, observer))
}

/// Outlines the main camera's view volume as seen by the observer.
fn draw_camera_outline(
    projection: &Mat4,
    camera: &Mat4,
    observer_projection: &Mat4,
    observer: &Mat4,
) -> Result<()> {
    let corners = FrustumCorners::from_camera(camera, projection)
        .context("The main camera's projection cannot be inverted")?;
    let (min, max) = corners.bounds();
    log::info!(
        "Main camera volume spans ({:.1}, {:.1}, {:.1}) to ({:.1}, {:.1}, {:.1})",
        min.x,
        min.y,
        min.z,
        max.x,
        max.y,
        max.z
    );

    let observer_view = observer.inverse()?;
    let on_screen = corners.transformed(&(*observer_projection * observer_view));
    for (i, c) in on_screen.near().iter().enumerate() {
        log::debug!("near corner {i} in observer clip space: ({:.3}, {:.3}, {:.3})", c.x, c.y, c.z);
    }
    for (i, c) in on_screen.far().iter().enumerate() {
        log::debug!("far corner {i} in observer clip space: ({:.3}, {:.3}, {:.3})", c.x, c.y, c.z);
    }
    let visible = on_screen
        .edges()
        .filter(|(a, b)| a.z.abs() <= 1.0 && b.z.abs() <= 1.0)
        .count();
    log::info!("{visible} of 12 outline edges lie inside the observer's depth range");
    Ok(())
}

/// Projects a wireframe cube by hand, as a 2D canvas would draw it.
fn draw_wire_cube(config: &SceneConfig, aspect: f32) -> Result<()> {
    let radius = 5.0;
    let t = config.clock_seconds;
    let eye = Vec3::new(t.sin() * radius, -2.0, t.cos() * radius);

    let projection = Mat4::perspective(clipmath::PI * 0.25, aspect, 1.0, 500.0)?;
    let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::Y)?.inverse()?;
    let world_view_projection = projection * view;

    // Clip space to canvas pixels, without a Y flip.
    let (w, h) = (config.canvas_width, config.canvas_height);
    let mut to_canvas = Mat3::IDENTITY;
    let mut tmp = Mat3::IDENTITY;
    m3::translation(w / 2.0, h / 2.0, &mut tmp);
    m3::scale(&tmp, w / 2.0, h / 2.0, &mut to_canvas);

    let points: Vec<Vec2> = CLIP_CUBE_CORNERS
        .iter()
        .map(|&v| {
            let p = m4::transform_point(&world_view_projection, v);
            to_canvas.transform_point(Vec2::new(p.x, p.y))
        })
        .collect();
    for (i, p) in points.iter().enumerate() {
        log::debug!("cube vertex {i} -> pixel ({:.1}, {:.1})", p.x, p.y);
    }

    // The pixel projection maps the canvas back to clip space.
    let mut pixel_to_clip = Mat3::IDENTITY;
    m3::projection(w, h, &mut pixel_to_clip)?;
    let center = pixel_to_clip.transform_point(Vec2::new(w / 2.0, h / 2.0));
    log::info!(
        "Wire cube from eye ({:.2}, {:.2}, {:.2}); canvas center is clip ({:.1}, {:.1}); {} Mat3 bytes per 2D uniform",
        eye.x,
        eye.y,
        eye.z,
        center.x,
        center.y,
        pixel_to_clip.as_bytes().len()
    );
    Ok(())
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let path = std::env::args().nth(1);
    let config = load_config(path.as_deref().map(Path::new))?;

    // The canvas is split in two views side by side.
    let aspect = (config.canvas_width / 2.0) / config.canvas_height;
    log::info!(
        "Scene: {}x{} canvas, {:?} main camera at {:?}",
        config.canvas_width,
        config.canvas_height,
        config.camera.projection,
        config.camera.position
    );

    let (projection, camera, observer_projection, observer) = draw_views(&config, aspect)?;
    draw_camera_outline(&projection, &camera, &observer_projection, &observer)?;
    draw_wire_cube(&config, config.canvas_width / config.canvas_height)?;
    Ok(())
}
