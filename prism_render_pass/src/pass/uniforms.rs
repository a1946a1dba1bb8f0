/// Uniform block uploaded by `RenderPassState::prepare()`
///
/// Layout (std140-compatible, all members 4-byte scalars):
/// the fixed `RenderPassUniforms` block followed by one `vec4` per clip
/// plane. The buffer range is sized for the current clip plane count.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec4};
use super::settings::PassSettings;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct RenderPassUniforms {
    pub world_to_view_matrix: [f32; 16],
    pub projection_matrix: [f32; 16],
    pub cull_matrix: [f32; 16],
    pub viewport: [f32; 4],
    pub override_color: [f32; 4],
    pub wireframe_color: [f32; 4],
    pub mask_color: [f32; 4],
    pub indicator_color: [f32; 4],
    pub point_color: [f32; 4],
    pub point_size: f32,
    pub point_selected_size: f32,
    pub alpha_threshold: f32,
    pub lighting_blend_amount: f32,
    pub tess_level: f32,
    pub clip_plane_count: u32,
    pub _padding: [u32; 2],
}

/// Camera values fed into the uniform block
#[derive(Debug, Clone, Copy)]
pub struct FramingUniforms<'a> {
    pub world_to_view: Mat4,
    pub projection: Mat4,
    pub cull_matrix: Mat4,
    pub viewport: Vec4,
    pub clip_planes: &'a [Vec4],
}

impl RenderPassUniforms {
    pub fn new(framing: &FramingUniforms, settings: &PassSettings) -> Self {
        let colors = &settings.colors;
        Self {
            world_to_view_matrix: framing.world_to_view.to_cols_array(),
            projection_matrix: framing.projection.to_cols_array(),
            cull_matrix: framing.cull_matrix.to_cols_array(),
            viewport: framing.viewport.to_array(),
            override_color: colors.override_color.to_array(),
            wireframe_color: colors.wireframe_color.to_array(),
            mask_color: colors.mask_color.to_array(),
            indicator_color: colors.indicator_color.to_array(),
            point_color: colors.point_color.to_array(),
            point_size: settings.point_size,
            point_selected_size: settings.point_selected_size,
            alpha_threshold: settings.alpha_threshold,
            lighting_blend_amount: settings.lighting_blend_amount,
            tess_level: settings.tess_level,
            clip_plane_count: framing.clip_planes.len() as u32,
            _padding: [0; 2],
        }
    }

    /// Bytes needed for the block plus `clip_plane_count` planes
    pub fn buffer_size(clip_plane_count: usize) -> u64 {
        (std::mem::size_of::<Self>() + clip_plane_count * std::mem::size_of::<Vec4>()) as u64
    }

    /// Block followed by the clip planes, ready for upload
    pub fn to_bytes(&self, clip_planes: &[Vec4]) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::buffer_size(clip_planes.len()) as usize);
        bytes.extend_from_slice(bytemuck::bytes_of(self));
        bytes.extend_from_slice(bytemuck::cast_slice(clip_planes));
        bytes
    }
}

#[cfg(test)]
#[path = "uniforms_tests.rs"]
mod tests;
