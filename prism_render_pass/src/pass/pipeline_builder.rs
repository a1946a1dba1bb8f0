/// PipelineDescriptorBuilder - pass state to pipeline and encoder descriptors
///
/// Pure reads of the pass's current fields. `init_graphics_pipeline_desc`
/// fills a caller-owned `GraphicsPipelineDesc`; `make_graphics_cmds_desc`
/// returns only what is needed to open a render encoder.

use crate::render::{
    GraphicsPipelineDesc, GraphicsCmdsDesc, MultisampleState, PrimitiveState,
    RasterizationState, SampleCount, StoreOp,
};
use crate::shader::{GeometricShader, GeometricSignature};
use crate::prism_warn;
use super::aov::{AovBinding, RenderIndex};
use super::attachment_builder::{build_attachments, first_sample_count, BuiltAttachments};
use super::settings::PassSettings;

/// Borrowed view of the pass fields every descriptor is derived from
#[derive(Debug, Clone, Copy)]
pub struct PipelineInputs<'a> {
    pub settings: &'a PassSettings,
    pub aov_bindings: &'a [AovBinding],
    pub alpha_mask_active: bool,
    pub clip_plane_count: usize,
}

impl<'a> PipelineInputs<'a> {
    pub fn attachments(&self) -> BuiltAttachments {
        build_attachments(self.aov_bindings, self.settings, self.alpha_mask_active)
    }

    pub fn sample_count(&self) -> u32 {
        first_sample_count(self.aov_bindings)
    }
}

pub fn primitive_state(signature: &GeometricSignature) -> PrimitiveState {
    PrimitiveState {
        topology: signature.topology,
        patch_control_points: signature.patch_control_points,
        point_size_enabled: signature.point_size_enabled,
    }
}

pub fn multisample_state(inputs: &PipelineInputs) -> MultisampleState {
    let settings = inputs.settings;
    let sample_count = inputs.sample_count();
    let multisampled = sample_count > 1;
    let alpha_to_coverage =
        settings.alpha_to_coverage_enabled && inputs.alpha_mask_active && multisampled;

    MultisampleState {
        multi_sample_enable: settings.multi_sample_enabled && multisampled,
        sample_count: SampleCount::from_count(sample_count),
        alpha_to_coverage,
        alpha_to_one: alpha_to_coverage,
    }
}

pub fn rasterization_state(inputs: &PipelineInputs, signature: &GeometricSignature) -> RasterizationState {
    let settings = inputs.settings;

    RasterizationState {
        cull_mode: signature.cull_mode,
        polygon_mode: signature.polygon_mode,
        line_width: settings.line_width,
        depth_bias: (signature.depth_bias_required || settings.depth.bias_enabled)
            .then_some(settings.depth.bias),
        depth_clamp_enabled: settings.depth.clamp_enabled,
        depth_range: settings.depth.range,
        conservative_raster: settings.conservative_rasterization,
        clip_distance_count: inputs.clip_plane_count as u32,
        ..RasterizationState::default()
    }
}

/// Populate `desc` for draws with `geometric_shader`
///
/// Every field this pass owns is overwritten; `debug_name` is left to
/// the caller.
pub fn init_graphics_pipeline_desc(
    inputs: &PipelineInputs,
    geometric_shader: &GeometricShader,
    desc: &mut GraphicsPipelineDesc,
) {
    let signature = geometric_shader.signature(inputs.settings.cull_style);
    let attachments = inputs.attachments();

    desc.primitive = primitive_state(&signature);
    desc.color_attachments = attachments.color_descs();
    desc.depth_attachment = attachments.depth_desc();
    desc.depth_stencil = inputs.settings.depth_stencil_state();
    desc.multisample = multisample_state(inputs);
    desc.rasterization = rasterization_state(inputs, &signature);
    desc.blend_constant_color = inputs.settings.blend.constant_color;
}

/// Attachments and textures needed to open a render encoder
///
/// Bindings the render index cannot resolve are omitted. A resolving
/// attachment whose buffer has no resolve texture falls back to a plain
/// store. With no AOVs bound the default color attachment renders into
/// the default framebuffer.
pub fn make_graphics_cmds_desc(inputs: &PipelineInputs, render_index: &dyn RenderIndex) -> GraphicsCmdsDesc {
    let attachments = inputs.attachments();
    let mut cmds = GraphicsCmdsDesc::default();

    for attachment in &attachments.color {
        let mut desc = attachment.desc;

        let Some(index) = attachment.binding_index else {
            cmds.color_attachment_descs.push(desc);
            cmds.color_textures.push(None);
            cmds.color_resolve_textures.push(None);
            continue;
        };

        let binding = &inputs.aov_bindings[index];
        let Some(textures) = render_index.render_buffer(binding.render_buffer_id) else {
            prism_warn!(
                "prism::PipelineDescriptorBuilder",
                "AOV '{}' omitted: render buffer {} not found",
                binding.aov_name, binding.render_buffer_id
            );
            continue;
        };

        let resolve_texture = if desc.resolves_on_store() {
            if textures.resolve_texture.is_none() {
                prism_warn!(
                    "prism::PipelineDescriptorBuilder",
                    "AOV '{}' has no resolve texture, storing without resolve",
                    binding.aov_name
                );
                desc.store_op = StoreOp::Store;
            }
            textures.resolve_texture
        } else {
            None
        };

        cmds.color_attachment_descs.push(desc);
        cmds.color_textures.push(Some(textures.texture));
        cmds.color_resolve_textures.push(resolve_texture);
    }

    if let Some(attachment) = attachments.depth {
        let mut desc = attachment.desc;
        let textures = attachment
            .binding_index
            .map(|index| &inputs.aov_bindings[index])
            .and_then(|binding| render_index.render_buffer(binding.render_buffer_id));

        match textures {
            Some(textures) => {
                if desc.resolves_on_store() && textures.resolve_texture.is_none() {
                    desc.store_op = StoreOp::Store;
                }
                cmds.depth_resolve_texture = if desc.resolves_on_store() {
                    textures.resolve_texture
                } else {
                    None
                };
                cmds.depth_attachment_desc = Some(desc);
                cmds.depth_texture = Some(textures.texture);
            }
            None => {
                prism_warn!(
                    "prism::PipelineDescriptorBuilder",
                    "Depth AOV omitted: render buffer not found"
                );
            }
        }
    }

    cmds
}

#[cfg(test)]
#[path = "pipeline_builder_tests.rs"]
mod tests;
