/// PassSettings - scalar configuration of one render pass
///
/// Plain data with defaults. Every field is read at the next `prepare()`
/// or descriptor build; nothing is cached from it.

use glam::Vec4;
use crate::render::{
    BlendFactor, BlendOp, ColorWriteMask, CompareOp, DepthBias, DepthStencilState,
    StencilOp, StencilOpState,
};
use crate::shader::CullStyle;

/// Decides whether alpha masking is active for a pass
///
/// Arguments are the pass's scene-materials flag and its current alpha
/// threshold.
pub type AlphaMaskPolicy = fn(use_scene_materials: bool, alpha_threshold: f32) -> bool;

/// Alpha masking is active when the pass does not use scene materials and
/// the threshold lies strictly between 0 and 1
pub fn default_alpha_mask_policy(use_scene_materials: bool, alpha_threshold: f32) -> bool {
    !use_scene_materials && alpha_threshold > 0.0 && alpha_threshold < 1.0
}

// ===== DEPTH =====

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthSettings {
    pub test_enabled: bool,
    pub write_enabled: bool,
    pub func: CompareOp,
    /// Bias every draw, not only those whose geometric shader asks for it
    pub bias_enabled: bool,
    /// Factors used whenever depth bias applies
    pub bias: DepthBias,
    pub clamp_enabled: bool,
    /// Viewport depth range (near, far)
    pub range: (f32, f32),
}

impl Default for DepthSettings {
    fn default() -> Self {
        Self {
            test_enabled: true,
            write_enabled: true,
            func: CompareOp::LessOrEqual,
            bias_enabled: false,
            bias: DepthBias::default(),
            clamp_enabled: false,
            range: (0.0, 1.0),
        }
    }
}

// ===== STENCIL =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StencilSettings {
    pub enabled: bool,
    pub func: CompareOp,
    pub reference: u32,
    pub read_mask: u32,
    pub write_mask: u32,
    pub fail_op: StencilOp,
    pub depth_fail_op: StencilOp,
    pub pass_op: StencilOp,
}

impl Default for StencilSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            func: CompareOp::Always,
            reference: 0,
            read_mask: 0xFF,
            write_mask: 0xFF,
            fail_op: StencilOp::Keep,
            depth_fail_op: StencilOp::Keep,
            pass_op: StencilOp::Keep,
        }
    }
}

impl StencilSettings {
    /// Same operations for front and back faces
    pub fn op_state(&self) -> StencilOpState {
        StencilOpState {
            fail_op: self.fail_op,
            pass_op: self.pass_op,
            depth_fail_op: self.depth_fail_op,
            compare_op: self.func,
            compare_mask: self.read_mask,
            write_mask: self.write_mask,
            reference: self.reference,
        }
    }
}

// ===== BLEND =====

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendSettings {
    pub enabled: bool,
    pub color_op: BlendOp,
    pub color_src_factor: BlendFactor,
    pub color_dst_factor: BlendFactor,
    pub alpha_op: BlendOp,
    pub alpha_src_factor: BlendFactor,
    pub alpha_dst_factor: BlendFactor,
    pub constant_color: [f32; 4],
}

impl Default for BlendSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            color_op: BlendOp::Add,
            color_src_factor: BlendFactor::One,
            color_dst_factor: BlendFactor::Zero,
            alpha_op: BlendOp::Add,
            alpha_src_factor: BlendFactor::One,
            alpha_dst_factor: BlendFactor::Zero,
            constant_color: [0.0; 4],
        }
    }
}

// ===== COLORS =====

/// Colors uploaded to the pass's uniform block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassColors {
    pub override_color: Vec4,
    pub wireframe_color: Vec4,
    pub mask_color: Vec4,
    pub indicator_color: Vec4,
    pub point_color: Vec4,
}

impl Default for PassColors {
    fn default() -> Self {
        Self {
            override_color: Vec4::ZERO,
            wireframe_color: Vec4::ZERO,
            mask_color: Vec4::new(1.0, 0.0, 0.0, 1.0),
            indicator_color: Vec4::new(0.0, 1.0, 0.0, 1.0),
            point_color: Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }
}

// ===== PASS SETTINGS =====

#[derive(Debug, Clone)]
pub struct PassSettings {
    pub alpha_threshold: f32,
    pub alpha_mask_policy: AlphaMaskPolicy,
    /// Resolve multisampled AOVs into their single-sample targets
    pub resolve_multisample_aov: bool,
    pub multi_sample_enabled: bool,
    pub alpha_to_coverage_enabled: bool,
    pub depth: DepthSettings,
    pub stencil: StencilSettings,
    pub blend: BlendSettings,
    /// Per color attachment write masks; missing entries write RGBA
    pub color_masks: Vec<ColorWriteMask>,
    pub cull_style: CullStyle,
    pub line_width: f32,
    pub conservative_rasterization: bool,
    pub colors: PassColors,
    pub point_size: f32,
    pub point_selected_size: f32,
    pub lighting_blend_amount: f32,
    pub tess_level: f32,
}

impl Default for PassSettings {
    fn default() -> Self {
        Self {
            alpha_threshold: 0.5,
            alpha_mask_policy: default_alpha_mask_policy,
            resolve_multisample_aov: true,
            multi_sample_enabled: true,
            alpha_to_coverage_enabled: true,
            depth: DepthSettings::default(),
            stencil: StencilSettings::default(),
            blend: BlendSettings::default(),
            color_masks: Vec::new(),
            cull_style: CullStyle::Nothing,
            line_width: 1.0,
            conservative_rasterization: false,
            colors: PassColors::default(),
            point_size: 3.0,
            point_selected_size: 5.0,
            lighting_blend_amount: 1.0,
            tess_level: 32.0,
        }
    }
}

impl PassSettings {
    /// Evaluate the alpha-mask policy for this pass
    pub fn alpha_mask_active(&self, use_scene_materials: bool) -> bool {
        (self.alpha_mask_policy)(use_scene_materials, self.alpha_threshold)
    }

    /// Write mask of the color attachment at `index`
    pub fn color_mask(&self, index: usize) -> ColorWriteMask {
        self.color_masks.get(index).copied().unwrap_or(ColorWriteMask::ALL)
    }

    pub fn depth_stencil_state(&self) -> DepthStencilState {
        DepthStencilState {
            depth_test_enable: self.depth.test_enabled,
            depth_write_enable: self.depth.write_enabled,
            depth_compare_op: self.depth.func,
            stencil_test_enable: self.stencil.enabled,
            front: self.stencil.op_state(),
            back: self.stencil.op_state(),
        }
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
