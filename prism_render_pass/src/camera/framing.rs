/// CameraFraming - fallback framing and camera selection for one render pass.
///
/// Passes without a scene camera (shadow passes, utility passes) set
/// their matrices explicitly through `set_camera_framing_state()`. When a
/// scene camera is attached, its values win for every matrix and
/// clip-plane query.
///
/// The cull matrix is memoized: it only changes when
/// `recompute_cull_matrix()` runs, which the render pass state does once
/// per `prepare()`. Between a setter call and the next recompute the cull
/// matrix is stale.

use std::sync::Arc;
use glam::{Mat4, Vec4};
use super::camera::SceneCamera;
use super::frustum::Frustum;

/// Where camera queries are answered from
#[derive(Debug, Clone, Default)]
pub enum CameraSource {
    /// Use the framing stored by `set_camera_framing_state()`
    #[default]
    Fallback,
    /// Defer to an externally owned scene camera
    Scene(Arc<SceneCamera>),
}

/// Camera framing state of a render pass
#[derive(Debug, Clone)]
pub struct CameraFraming {
    source: CameraSource,
    world_to_view_matrix: Mat4,
    projection_matrix: Mat4,
    viewport: Vec4,
    clip_planes: Vec<Vec4>,
    cull_matrix: Mat4,
}

impl Default for CameraFraming {
    fn default() -> Self {
        Self {
            source: CameraSource::Fallback,
            world_to_view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            viewport: Vec4::ZERO,
            clip_planes: Vec::new(),
            cull_matrix: Mat4::IDENTITY,
        }
    }
}

impl CameraFraming {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== SOURCE =====

    /// Attach or detach the scene camera
    pub fn set_camera(&mut self, camera: Option<Arc<SceneCamera>>) {
        self.source = match camera {
            Some(camera) => CameraSource::Scene(camera),
            None => CameraSource::Fallback,
        };
    }

    pub fn source(&self) -> &CameraSource {
        &self.source
    }

    /// The attached scene camera, if any
    pub fn camera(&self) -> Option<&Arc<SceneCamera>> {
        match &self.source {
            CameraSource::Scene(camera) => Some(camera),
            CameraSource::Fallback => None,
        }
    }

    // ===== FALLBACK FRAMING =====

    /// Store the framing used when no scene camera is attached
    pub fn set_camera_framing_state(
        &mut self,
        world_to_view: Mat4,
        projection: Mat4,
        viewport: Vec4,
        clip_planes: Vec<Vec4>,
    ) {
        self.world_to_view_matrix = world_to_view;
        self.projection_matrix = projection;
        self.viewport = viewport;
        self.clip_planes = clip_planes;
    }

    /// Copy the scene camera's values into the stored framing
    ///
    /// Returns `false` (and leaves the framing untouched) when no scene
    /// camera is attached.
    pub fn apply_state_from_camera(&mut self) -> bool {
        let CameraSource::Scene(camera) = &self.source else {
            return false;
        };

        self.world_to_view_matrix = *camera.world_to_view_matrix();
        self.projection_matrix = *camera.projection_matrix();
        self.viewport = *camera.viewport();
        self.clip_planes = camera.clip_planes().to_vec();
        true
    }

    // ===== EFFECTIVE QUERIES =====

    /// World-to-view matrix of the scene camera, or the fallback
    pub fn world_to_view_matrix(&self) -> Mat4 {
        match &self.source {
            CameraSource::Scene(camera) => *camera.world_to_view_matrix(),
            CameraSource::Fallback => self.world_to_view_matrix,
        }
    }

    /// Projection matrix of the scene camera, or the fallback
    pub fn projection_matrix(&self) -> Mat4 {
        match &self.source {
            CameraSource::Scene(camera) => *camera.projection_matrix(),
            CameraSource::Fallback => self.projection_matrix,
        }
    }

    /// Clip planes of the scene camera, or the fallback
    pub fn clip_planes(&self) -> &[Vec4] {
        match &self.source {
            CameraSource::Scene(camera) => camera.clip_planes(),
            CameraSource::Fallback => &self.clip_planes,
        }
    }

    /// Viewport of the scene camera, or the fallback
    pub fn viewport(&self) -> Vec4 {
        match &self.source {
            CameraSource::Scene(camera) => *camera.viewport(),
            CameraSource::Fallback => self.viewport,
        }
    }

    // ===== CULL MATRIX =====

    /// Recompute `cull_matrix = projection * world_to_view`
    pub fn recompute_cull_matrix(&mut self) {
        self.cull_matrix = self.projection_matrix() * self.world_to_view_matrix();
    }

    /// Cull matrix as of the last `recompute_cull_matrix()`
    pub fn cull_matrix(&self) -> Mat4 {
        self.cull_matrix
    }

    /// Frustum planes of the current cull matrix
    pub fn cull_frustum(&self) -> Frustum {
        Frustum::from_view_projection(&self.cull_matrix)
    }
}

#[cfg(test)]
#[path = "framing_tests.rs"]
mod tests;
