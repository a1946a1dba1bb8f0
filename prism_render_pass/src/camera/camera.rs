/// SceneCamera - externally owned camera, shared with the render pass.
///
/// A passive data container: the scene computes every field and the
/// render pass state only reads them. When a pass has a scene camera,
/// its matrices, clip planes and viewport take precedence over the
/// pass's fallback framing.

use glam::{Mat4, Vec4};

/// Scene camera. A passive data container - computes nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneCamera {
    world_to_view_matrix: Mat4,
    projection_matrix: Mat4,
    viewport: Vec4,
    clip_planes: Vec<Vec4>,
}

impl SceneCamera {
    /// Create a new camera with the given matrices and viewport.
    ///
    /// Clip planes default to none.
    pub fn new(world_to_view: Mat4, projection: Mat4, viewport: Vec4) -> Self {
        Self {
            world_to_view_matrix: world_to_view,
            projection_matrix: projection,
            viewport,
            clip_planes: Vec::new(),
        }
    }

    // ===== GETTERS =====

    /// World-to-view matrix (inverse of the camera's world transform).
    pub fn world_to_view_matrix(&self) -> &Mat4 {
        &self.world_to_view_matrix
    }

    /// Projection matrix (perspective or orthographic).
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Viewport as (x, y, width, height).
    pub fn viewport(&self) -> &Vec4 {
        &self.viewport
    }

    /// User clip planes in view space.
    pub fn clip_planes(&self) -> &[Vec4] {
        &self.clip_planes
    }

    // ===== SETTERS - store, compute nothing =====

    pub fn set_world_to_view_matrix(&mut self, matrix: Mat4) {
        self.world_to_view_matrix = matrix;
    }

    pub fn set_projection_matrix(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
    }

    pub fn set_viewport(&mut self, viewport: Vec4) {
        self.viewport = viewport;
    }

    pub fn set_clip_planes(&mut self, clip_planes: Vec<Vec4>) {
        self.clip_planes = clip_planes;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
