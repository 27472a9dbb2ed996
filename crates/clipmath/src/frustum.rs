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

//! World-space outline of a camera's view volume.
//!
//! Clip space is the cube `[-1, 1]^3`. Pulling that cube back through
//! `camera * inverse(projection)` gives the eight corners of the volume the
//! camera sees, which is what a debug view draws to visualise another camera.

use serde::{Deserialize, Serialize};

use crate::{Mat4, MathError, Vec3};

/// The eight corners of the clip-space cube.
///
/// Corner `i` has `x = +1` when bit 0 is set, `y = +1` when bit 1 is set and
/// `z = +1` (far) when bit 2 is set. Corners `0..4` lie on the near plane.
pub const CLIP_CUBE_CORNERS: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
];

/// Line-list indices into [`CLIP_CUBE_CORNERS`]: near face, far face, then the connecting edges.
pub const CLIP_CUBE_EDGES: [u16; 24] = [
    0, 1, 1, 3, 3, 2, 2, 0, //
    4, 5, 5, 7, 7, 6, 6, 4, //
    0, 4, 1, 5, 3, 7, 2, 6,
];

/// The corners of a view volume, in the same order as [`CLIP_CUBE_CORNERS`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrustumCorners {
    /// The corner positions.
    pub corners: [Vec3; 8],
}

impl FrustumCorners {
    /// Computes the world-space corners of the volume seen by a camera.
    /// ## Arguments
    /// * `camera` - The camera-to-world matrix, as built by [`Mat4::look_at`].
    /// * `projection` - The camera's projection matrix.
    /// ## Returns
    /// * The corners, or [`MathError::SingularMatrix`] if `projection` cannot be inverted.
    pub fn from_camera(camera: &Mat4, projection: &Mat4) -> Result<Self, MathError> {
        let clip_to_world = *camera * projection.inverse()?;
        Ok(Self::from_clip_to_world(&clip_to_world))
    }

    /// Maps every clip-space corner through `clip_to_world`.
    /// ## Arguments
    /// * `clip_to_world` - Usually `inverse(projection * view)`.
    pub fn from_clip_to_world(clip_to_world: &Mat4) -> Self {
        Self {
            corners: CLIP_CUBE_CORNERS.map(|c| clip_to_world.transform_point(c)),
        }
    }

    /// Returns a copy with every corner transformed by `m`, e.g. an observer's view-projection.
    pub fn transformed(&self, m: &Mat4) -> Self {
        Self {
            corners: self.corners.map(|c| m.transform_point(c)),
        }
    }

    /// The four corners on the near plane.
    #[inline]
    pub fn near(&self) -> [Vec3; 4] {
        [self.corners[0], self.corners[1], self.corners[2], self.corners[3]]
    }

    /// The four corners on the far plane.
    #[inline]
    pub fn far(&self) -> [Vec3; 4] {
        [self.corners[4], self.corners[5], self.corners[6], self.corners[7]]
    }

    /// The average of the eight corners.
    pub fn center(&self) -> Vec3 {
        self.corners.iter().fold(Vec3::ZERO, |acc, &c| acc + c) / 8.0
    }

    /// The component-wise minimum and maximum over all corners.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let mut min = self.corners[0];
        let mut max = self.corners[0];
        for c in &self.corners[1..] {
            min = Vec3::new(min.x.min(c.x), min.y.min(c.y), min.z.min(c.z));
            max = Vec3::new(max.x.max(c.x), max.y.max(c.y), max.z.max(c.z));
        }
        (min, max)
    }

    /// Iterates over the twelve edges as `(start, end)` pairs, following [`CLIP_CUBE_EDGES`].
    pub fn edges(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        CLIP_CUBE_EDGES
            .chunks_exact(2)
            .map(|pair| (self.corners[pair[0] as usize], self.corners[pair[1] as usize]))
    }
}
