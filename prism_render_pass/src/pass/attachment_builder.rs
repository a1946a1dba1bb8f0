/// AttachmentBuilder - AOV bindings to attachment descriptors
///
/// Applies the pass's blend and alpha-mask policy to every color target
/// and decides clear-on-load and resolve-on-store per AOV:
/// - blend is enabled when blending is configured or alpha masking is active
/// - a blending attachment writes all channels; otherwise it writes the
///   configured mask for its color index
/// - store resolves only for a multisampled AOV when the pass resolves
///   multisampled AOVs
/// - invalid bindings are dropped (reported once by `report_omitted_bindings`)
/// - the first depth/stencil AOV becomes the depth attachment
///
/// With no AOVs bound the pass renders into a single default color target.

use crate::render::{AttachmentDesc, ColorWriteMask, LoadOp, StoreOp, TextureFormat};
use crate::prism_warn;
use super::aov::AovBinding;
use super::settings::PassSettings;

/// Color format of the default target used when no AOV is bound
pub const DEFAULT_COLOR_FORMAT: TextureFormat = TextureFormat::R8G8B8A8_UNORM;

/// An attachment descriptor and the AOV it was built from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuiltAttachment {
    /// Index into the pass's AOV bindings (`None` = default target)
    pub binding_index: Option<usize>,
    pub desc: AttachmentDesc,
}

/// Attachments of one pass, in AOV binding order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BuiltAttachments {
    pub color: Vec<BuiltAttachment>,
    pub depth: Option<BuiltAttachment>,
}

impl BuiltAttachments {
    pub fn color_descs(&self) -> Vec<AttachmentDesc> {
        self.color.iter().map(|attachment| attachment.desc).collect()
    }

    pub fn depth_desc(&self) -> Option<AttachmentDesc> {
        self.depth.map(|attachment| attachment.desc)
    }

    /// Color then depth, the order the pipeline hash visits them in
    pub fn iter(&self) -> impl Iterator<Item = &BuiltAttachment> {
        self.color.iter().chain(self.depth.iter())
    }
}

/// Sample count of the first valid AOV (1 when there is none)
pub fn first_sample_count(bindings: &[AovBinding]) -> u32 {
    bindings
        .iter()
        .find(|binding| binding.is_valid())
        .map(|binding| binding.sample_count)
        .unwrap_or(1)
}

/// Color attachment carrying the pass's blend state
fn color_attachment(
    format: TextureFormat,
    color_index: usize,
    settings: &PassSettings,
    alpha_mask_active: bool,
) -> AttachmentDesc {
    let blend = &settings.blend;
    let blend_enabled = blend.enabled || alpha_mask_active;

    let mut desc = AttachmentDesc::color(format);
    desc.blend_enabled = blend_enabled;
    desc.src_color_factor = blend.color_src_factor;
    desc.dst_color_factor = blend.color_dst_factor;
    desc.color_blend_op = blend.color_op;
    desc.src_alpha_factor = blend.alpha_src_factor;
    desc.dst_alpha_factor = blend.alpha_dst_factor;
    desc.alpha_blend_op = blend.alpha_op;
    desc.color_mask = if blend_enabled {
        ColorWriteMask::ALL
    } else {
        settings.color_mask(color_index)
    };
    desc
}

/// Load and store ops of an AOV attachment
fn apply_load_store(desc: &mut AttachmentDesc, binding: &AovBinding, settings: &PassSettings) {
    if let Some(clear_value) = binding.clear_value {
        desc.load_op = LoadOp::Clear;
        desc.clear_value = clear_value.to_array();
    } else {
        desc.load_op = LoadOp::Load;
    }

    desc.store_op = if binding.is_multisampled() && settings.resolve_multisample_aov {
        StoreOp::StoreAndResolve
    } else {
        StoreOp::Store
    };
}

/// Warn once for every binding `build_attachments` will skip
///
/// Called when the bindings change, so that building descriptors and
/// hashing per draw batch stay silent. Returns the number of omitted
/// bindings.
pub fn report_omitted_bindings(bindings: &[AovBinding]) -> usize {
    let mut omitted = 0;
    let mut has_depth = false;

    for binding in bindings {
        if !binding.is_valid() {
            prism_warn!(
                "prism::AttachmentBuilder",
                "AOV '{}' omitted: format {:?}, {} samples",
                binding.aov_name, binding.format, binding.sample_count
            );
            omitted += 1;
        } else if binding.is_depth() {
            if has_depth {
                prism_warn!(
                    "prism::AttachmentBuilder",
                    "AOV '{}' omitted: pass already has a depth attachment",
                    binding.aov_name
                );
                omitted += 1;
            }
            has_depth = true;
        }
    }

    omitted
}

/// Build the attachment descriptors of a pass
///
/// Skipped bindings are not logged here; see `report_omitted_bindings`.
/// Bindings that are all invalid yield no attachments at all: the default
/// target stands in only when nothing is bound.
pub fn build_attachments(
    bindings: &[AovBinding],
    settings: &PassSettings,
    alpha_mask_active: bool,
) -> BuiltAttachments {
    if bindings.is_empty() {
        return BuiltAttachments {
            color: vec![BuiltAttachment {
                binding_index: None,
                desc: color_attachment(DEFAULT_COLOR_FORMAT, 0, settings, alpha_mask_active),
            }],
            depth: None,
        };
    }

    let mut built = BuiltAttachments::default();

    for (index, binding) in bindings.iter().enumerate() {
        if !binding.is_valid() {
            continue;
        }

        if binding.is_depth() {
            if built.depth.is_some() {
                continue;
            }
            let mut desc = AttachmentDesc::depth_stencil(binding.format);
            apply_load_store(&mut desc, binding, settings);
            built.depth = Some(BuiltAttachment { binding_index: Some(index), desc });
            continue;
        }

        let mut desc = color_attachment(binding.format, built.color.len(), settings, alpha_mask_active);
        apply_load_store(&mut desc, binding, settings);
        built.color.push(BuiltAttachment { binding_index: Some(index), desc });
    }

    built
}

#[cfg(test)]
#[path = "attachment_builder_tests.rs"]
mod tests;
