/// LegacyStateBridge - applies pass state to an immediate-mode context
///
/// `bind()` captures every value it is about to change, then applies the
/// pass's settings. `unbind()` restores exactly the captured values.
/// Toggles the backend does not expose are neither read nor written.
/// Blend and color mask are handled per color attachment when the backend
/// supports indexed attachment state, otherwise on attachment 0 only.
///
/// Calls must be paired. A second `bind()` re-applies the settings but
/// keeps the first snapshot; an `unbind()` while unbound does nothing.
/// Both are logged as warnings.

use crate::render::{
    GraphicsCapabilities, LegacyGraphicsContext, LegacyBlendState, LegacyStencilState,
    PolygonOffset, StateToggles, ColorWriteMask, CompareOp, CullMode,
};
use crate::shader::CullStyle;
use crate::{prism_trace, prism_warn};
use super::pipeline_builder::{multisample_state, PipelineInputs};

/// Toggles captured and restored by the bridge, in application order
const MANAGED_TOGGLES: [StateToggles; 10] = [
    StateToggles::BLEND,
    StateToggles::CULL_FACE,
    StateToggles::POLYGON_OFFSET_FILL,
    StateToggles::PROGRAM_POINT_SIZE,
    StateToggles::SAMPLE_ALPHA_TO_COVERAGE,
    StateToggles::SAMPLE_ALPHA_TO_ONE,
    StateToggles::DEPTH_TEST,
    StateToggles::STENCIL_TEST,
    StateToggles::DEPTH_CLAMP,
    StateToggles::CONSERVATIVE_RASTER,
];

/// Context values captured by `bind()`
#[derive(Debug, Clone, PartialEq)]
pub struct LegacySnapshot {
    /// Supported toggles and their pre-bind values
    pub toggles: Vec<(StateToggles, bool)>,
    /// Blend state of attachments `0..blend_states.len()`
    pub blend_states: Vec<LegacyBlendState>,
    /// Color mask of attachments `0..color_masks.len()`
    pub color_masks: Vec<ColorWriteMask>,
    pub blend_constant_color: [f32; 4],
    pub polygon_offset: PolygonOffset,
    pub cull_face: CullMode,
    pub depth_func: CompareOp,
    pub depth_mask: bool,
    pub line_width: f32,
    pub stencil: LegacyStencilState,
}

impl LegacySnapshot {
    fn capture(
        capabilities: &GraphicsCapabilities,
        attachment_count: u32,
        context: &dyn LegacyGraphicsContext,
    ) -> Self {
        Self {
            toggles: MANAGED_TOGGLES
                .iter()
                .filter(|toggle| capabilities.supports(**toggle))
                .map(|toggle| (*toggle, context.is_enabled(*toggle)))
                .collect(),
            blend_states: (0..attachment_count).map(|i| context.blend_state(i)).collect(),
            color_masks: (0..attachment_count).map(|i| context.color_mask(i)).collect(),
            blend_constant_color: context.blend_constant_color(),
            polygon_offset: context.polygon_offset(),
            cull_face: context.cull_face(),
            depth_func: context.depth_func(),
            depth_mask: context.depth_mask(),
            line_width: context.line_width(),
            stencil: context.stencil_state(),
        }
    }

    fn restore(&self, context: &mut dyn LegacyGraphicsContext) {
        for (toggle, enabled) in &self.toggles {
            context.set_enabled(*toggle, *enabled);
        }
        for (i, state) in self.blend_states.iter().enumerate() {
            context.set_blend_state(i as u32, *state);
        }
        for (i, mask) in self.color_masks.iter().enumerate() {
            context.set_color_mask(i as u32, *mask);
        }
        context.set_blend_constant_color(self.blend_constant_color);
        context.set_polygon_offset(self.polygon_offset);
        context.set_cull_face(self.cull_face);
        context.set_depth_func(self.depth_func);
        context.set_depth_mask(self.depth_mask);
        context.set_line_width(self.line_width);
        context.set_stencil_state(self.stencil);
    }
}

/// Bridge state: nothing captured, or bound with the pre-bind snapshot
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LegacyBridgeState {
    #[default]
    Unbound,
    Bound(LegacySnapshot),
}

#[derive(Debug, Clone, Default)]
pub struct LegacyStateBridge {
    state: LegacyBridgeState,
}

impl LegacyStateBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LegacyBridgeState {
        &self.state
    }

    pub fn is_bound(&self) -> bool {
        matches!(self.state, LegacyBridgeState::Bound(_))
    }

    /// Capture the context, then apply the pass's settings to it
    pub fn bind(
        &mut self,
        inputs: &PipelineInputs,
        capabilities: &GraphicsCapabilities,
        context: &mut dyn LegacyGraphicsContext,
    ) {
        let attachment_count = Self::attachment_count(inputs, capabilities);

        if self.is_bound() {
            prism_warn!(
                "prism::LegacyStateBridge",
                "bind() while already bound, keeping the first snapshot"
            );
        } else {
            let snapshot = LegacySnapshot::capture(capabilities, attachment_count, context);
            prism_trace!(
                "prism::LegacyStateBridge",
                "Captured {} toggles and {} attachments",
                snapshot.toggles.len(), attachment_count
            );
            self.state = LegacyBridgeState::Bound(snapshot);
        }

        Self::apply(inputs, capabilities, attachment_count, context);
    }

    /// Restore the context captured by the last `bind()`
    ///
    /// Unsupported toggles were never captured, so none are written back.
    pub fn unbind(&mut self, context: &mut dyn LegacyGraphicsContext) {
        match std::mem::take(&mut self.state) {
            LegacyBridgeState::Bound(snapshot) => snapshot.restore(context),
            LegacyBridgeState::Unbound => {
                prism_warn!("prism::LegacyStateBridge", "unbind() without a matching bind()");
            }
        }
    }

    /// Attachments whose blend and color mask the bridge manages
    fn attachment_count(inputs: &PipelineInputs, capabilities: &GraphicsCapabilities) -> u32 {
        if !capabilities.indexed_attachment_state {
            return 1;
        }
        let color_count = inputs.attachments().color.len().max(1) as u32;
        color_count.min(capabilities.max_draw_buffers.max(1))
    }

    fn apply(
        inputs: &PipelineInputs,
        capabilities: &GraphicsCapabilities,
        attachment_count: u32,
        context: &mut dyn LegacyGraphicsContext,
    ) {
        let settings = inputs.settings;
        let blend_enabled = settings.blend.enabled || inputs.alpha_mask_active;
        let multisample = multisample_state(inputs);
        let cull_face = match settings.cull_style {
            CullStyle::Back | CullStyle::BackUnlessDoubleSided => Some(CullMode::Back),
            CullStyle::Front | CullStyle::FrontUnlessDoubleSided => Some(CullMode::Front),
            CullStyle::Nothing | CullStyle::DontCare => None,
        };

        let toggles = [
            (StateToggles::BLEND, blend_enabled),
            (StateToggles::CULL_FACE, cull_face.is_some()),
            (StateToggles::POLYGON_OFFSET_FILL, settings.depth.bias_enabled),
            (StateToggles::PROGRAM_POINT_SIZE, true),
            (StateToggles::SAMPLE_ALPHA_TO_COVERAGE, multisample.alpha_to_coverage),
            (StateToggles::SAMPLE_ALPHA_TO_ONE, multisample.alpha_to_one),
            (StateToggles::DEPTH_TEST, settings.depth.test_enabled),
            (StateToggles::STENCIL_TEST, settings.stencil.enabled),
            (StateToggles::DEPTH_CLAMP, settings.depth.clamp_enabled),
            (StateToggles::CONSERVATIVE_RASTER, settings.conservative_rasterization),
        ];
        for (toggle, enabled) in toggles {
            if capabilities.supports(toggle) {
                context.set_enabled(toggle, enabled);
            }
        }

        let blend = &settings.blend;
        let blend_state = LegacyBlendState {
            src_color_factor: blend.color_src_factor,
            dst_color_factor: blend.color_dst_factor,
            color_blend_op: blend.color_op,
            src_alpha_factor: blend.alpha_src_factor,
            dst_alpha_factor: blend.alpha_dst_factor,
            alpha_blend_op: blend.alpha_op,
        };
        for i in 0..attachment_count {
            context.set_blend_state(i, blend_state);
            let mask = if blend_enabled { ColorWriteMask::ALL } else { settings.color_mask(i as usize) };
            context.set_color_mask(i, mask);
        }
        context.set_blend_constant_color(blend.constant_color);

        context.set_polygon_offset(PolygonOffset {
            factor: settings.depth.bias.slope_factor,
            units: settings.depth.bias.constant_factor,
        });
        if let Some(face) = cull_face {
            context.set_cull_face(face);
        }
        context.set_depth_func(settings.depth.func);
        context.set_depth_mask(settings.depth.write_enabled);
        context.set_line_width(settings.line_width);

        let stencil = &settings.stencil;
        context.set_stencil_state(LegacyStencilState {
            func: stencil.func,
            reference: stencil.reference,
            mask: stencil.read_mask,
            fail_op: stencil.fail_op,
            depth_fail_op: stencil.depth_fail_op,
            pass_op: stencil.pass_op,
        });
    }
}

#[cfg(test)]
#[path = "legacy_bridge_tests.rs"]
mod tests;
