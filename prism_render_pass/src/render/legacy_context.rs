/// Immediate-mode graphics context for backends without pipeline objects

use crate::render::{
    StateToggles, BlendFactor, BlendOp, ColorWriteMask, CompareOp, CullMode, StencilOp,
};

/// Blend function and equation of one attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegacyBlendState {
    pub src_color_factor: BlendFactor,
    pub dst_color_factor: BlendFactor,
    pub color_blend_op: BlendOp,
    pub src_alpha_factor: BlendFactor,
    pub dst_alpha_factor: BlendFactor,
    pub alpha_blend_op: BlendOp,
}

impl Default for LegacyBlendState {
    fn default() -> Self {
        Self {
            src_color_factor: BlendFactor::One,
            dst_color_factor: BlendFactor::Zero,
            color_blend_op: BlendOp::Add,
            src_alpha_factor: BlendFactor::One,
            dst_alpha_factor: BlendFactor::Zero,
            alpha_blend_op: BlendOp::Add,
        }
    }
}

/// Polygon offset parameters (`factor * slope + units * r`)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolygonOffset {
    pub factor: f32,
    pub units: f32,
}

/// Stencil function and operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegacyStencilState {
    pub func: CompareOp,
    pub reference: u32,
    pub mask: u32,
    pub fail_op: StencilOp,
    pub depth_fail_op: StencilOp,
    pub pass_op: StencilOp,
}

impl Default for LegacyStencilState {
    fn default() -> Self {
        Self {
            func: CompareOp::Always,
            reference: 0,
            mask: u32::MAX,
            fail_op: StencilOp::Keep,
            depth_fail_op: StencilOp::Keep,
            pass_op: StencilOp::Keep,
        }
    }
}

/// Global fixed-function state of an immediate-mode backend
///
/// Every getter returns the current value so that callers can capture
/// and later restore it. Implementations are not required to be
/// thread-safe; the owner serializes access to the context.
pub trait LegacyGraphicsContext {
    /// Current value of a single toggle
    fn is_enabled(&self, toggle: StateToggles) -> bool;
    /// Enable or disable a single toggle
    fn set_enabled(&mut self, toggle: StateToggles, enabled: bool);

    fn blend_state(&self, attachment: u32) -> LegacyBlendState;
    fn set_blend_state(&mut self, attachment: u32, state: LegacyBlendState);

    fn blend_constant_color(&self) -> [f32; 4];
    fn set_blend_constant_color(&mut self, color: [f32; 4]);

    fn color_mask(&self, attachment: u32) -> ColorWriteMask;
    fn set_color_mask(&mut self, attachment: u32, mask: ColorWriteMask);

    fn polygon_offset(&self) -> PolygonOffset;
    fn set_polygon_offset(&mut self, offset: PolygonOffset);

    fn cull_face(&self) -> CullMode;
    fn set_cull_face(&mut self, face: CullMode);

    fn depth_func(&self) -> CompareOp;
    fn set_depth_func(&mut self, func: CompareOp);

    fn depth_mask(&self) -> bool;
    fn set_depth_mask(&mut self, write: bool);

    fn line_width(&self) -> f32;
    fn set_line_width(&mut self, width: f32);

    fn stencil_state(&self) -> LegacyStencilState;
    fn set_stencil_state(&mut self, state: LegacyStencilState);
}
