/// PipelineHasher - 64-bit cache key of a pass's pipeline configuration
///
/// Visits, in a fixed order, every field that feeds
/// `init_graphics_pipeline_desc`:
///
/// 1. signature of the last applied geometric shader, resolved against
///    the pass's current cull style
/// 2. depth: test, write, func, bias flag and factors, clamp, range
/// 3. stencil: enabled, func, reference, masks, ops
/// 4. multisample: enable flag, resolve flag, alpha-to-coverage flag,
///    alpha-mask activity, first sample count
/// 5. rasterization: cull style, line width, conservative raster,
///    clip plane count
/// 6. blend: enabled, ops, factors, constant color
/// 7. attachments in order: format, usage, blend flag, color mask,
///    load op, store op, clear value
///
/// Floats are hashed by bit pattern. Collisions are possible; a pipeline
/// cache must confirm a hit by comparing full descriptors.

use std::hash::{Hash, Hasher};
use xxhash_rust::xxh3::Xxh3;
use crate::shader::GeometricShader;
use super::pipeline_builder::PipelineInputs;

fn hash_f32<H: Hasher>(value: f32, state: &mut H) {
    value.to_bits().hash(state);
}

fn hash_f32s<H: Hasher>(values: &[f32], state: &mut H) {
    for value in values {
        hash_f32(*value, state);
    }
}

/// Hash the pipeline configuration of a pass
pub fn graphics_pipeline_hash(inputs: &PipelineInputs, geometric_shader: Option<&GeometricShader>) -> u64 {
    let settings = inputs.settings;
    let mut state = Xxh3::new();

    // 1. Geometric shader, resolved the way init_graphics_pipeline_desc does
    geometric_shader
        .map(|shader| shader.signature(settings.cull_style))
        .hash(&mut state);

    // 2. Depth
    let depth = &settings.depth;
    depth.test_enabled.hash(&mut state);
    depth.write_enabled.hash(&mut state);
    depth.func.hash(&mut state);
    depth.bias_enabled.hash(&mut state);
    hash_f32(depth.bias.constant_factor, &mut state);
    hash_f32(depth.bias.slope_factor, &mut state);
    depth.clamp_enabled.hash(&mut state);
    hash_f32s(&[depth.range.0, depth.range.1], &mut state);

    // 3. Stencil
    settings.stencil.hash(&mut state);

    // 4. Multisample
    settings.multi_sample_enabled.hash(&mut state);
    settings.resolve_multisample_aov.hash(&mut state);
    settings.alpha_to_coverage_enabled.hash(&mut state);
    inputs.alpha_mask_active.hash(&mut state);
    inputs.sample_count().hash(&mut state);

    // 5. Rasterization
    settings.cull_style.hash(&mut state);
    hash_f32(settings.line_width, &mut state);
    settings.conservative_rasterization.hash(&mut state);
    inputs.clip_plane_count.hash(&mut state);

    // 6. Blend
    let blend = &settings.blend;
    blend.enabled.hash(&mut state);
    blend.color_op.hash(&mut state);
    blend.color_src_factor.hash(&mut state);
    blend.color_dst_factor.hash(&mut state);
    blend.alpha_op.hash(&mut state);
    blend.alpha_src_factor.hash(&mut state);
    blend.alpha_dst_factor.hash(&mut state);
    hash_f32s(&blend.constant_color, &mut state);

    // 7. Attachments
    let attachments = inputs.attachments();
    attachments.color.len().hash(&mut state);
    for attachment in attachments.iter() {
        let desc = &attachment.desc;
        desc.format.hash(&mut state);
        desc.usage.hash(&mut state);
        desc.blend_enabled.hash(&mut state);
        desc.color_mask.hash(&mut state);
        desc.load_op.hash(&mut state);
        desc.store_op.hash(&mut state);
        hash_f32s(&desc.clear_value, &mut state);
    }

    state.finish()
}

#[cfg(test)]
#[path = "pipeline_hasher_tests.rs"]
mod tests;
