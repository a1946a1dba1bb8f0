/// RenderPassState - per-render-pass pipeline state
///
/// Owns the camera framing, the pass-level shaders, the AOV bindings and
/// the scalar settings of one render pass, and derives from them:
/// - the uniform block uploaded by `prepare()`
/// - graphics pipeline and graphics-commands descriptors
/// - a pipeline hash and a shader hash for cache lookups
/// - fixed-function state for immediate-mode backends (`bind`/`unbind`)
///
/// Setters only store; every derived value is computed from the current
/// fields at the next `prepare()` or descriptor build.
///
/// # Example
///
/// ```ignore
/// let mut state = RenderPassState::new();
/// state.set_camera_framing_state(view, projection, viewport, Vec::new());
/// state.set_aov_bindings(vec![AovBinding::new("color", 1, TextureFormat::R8G8B8A8_UNORM, 4)]);
/// state.prepare(&mut registry)?;
///
/// let mut desc = GraphicsPipelineDesc::default();
/// state.init_graphics_pipeline_desc(&mut desc, &geometric_shader);
/// let key = state.graphics_pipeline_hash();
/// ```

use std::sync::Arc;
use glam::{Mat4, Vec4};
use crate::error::Result;
use crate::camera::{CameraFraming, Frustum, SceneCamera};
use crate::render::{
    BufferRange, BufferRangeDesc, BufferUsage, ColorWriteMask, CompareOp, GraphicsCapabilities,
    GraphicsCmdsDesc, GraphicsPipelineDesc, LegacyGraphicsContext, ResourceRegistry,
};
use crate::shader::{CullStyle, GeometricShader, GeometricSignature, ShaderBinding, ShaderCode};
use crate::{prism_debug, prism_error, prism_trace};
use super::aov::{AovBinding, RenderIndex};
use super::attachment_builder;
use super::legacy_bridge::LegacyStateBridge;
use super::pipeline_builder::{self, PipelineInputs};
use super::pipeline_hasher;
use super::settings::{AlphaMaskPolicy, BlendSettings, PassColors, PassSettings, StencilSettings};
use super::uniforms::{FramingUniforms, RenderPassUniforms};

pub struct RenderPassState {
    framing: CameraFraming,
    shaders: ShaderBinding,
    settings: PassSettings,
    aov_bindings: Vec<AovBinding>,
    /// Last applied geometric shader, resolved against the current
    /// cull style whenever it is read
    geometric_shader: Option<GeometricShader>,
    /// Uniform buffer range, `None` until `prepare()` succeeds
    uniform_range: Option<Arc<dyn BufferRange>>,
    /// Clip plane count the uniform range was sized for
    uniform_clip_plane_count: usize,
    legacy_bridge: LegacyStateBridge,
}

impl Default for RenderPassState {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderPassState {
    pub fn new() -> Self {
        Self {
            framing: CameraFraming::new(),
            shaders: ShaderBinding::new(),
            settings: PassSettings::default(),
            aov_bindings: Vec::new(),
            geometric_shader: None,
            uniform_range: None,
            uniform_clip_plane_count: 0,
            legacy_bridge: LegacyStateBridge::new(),
        }
    }

    fn pipeline_inputs(&self) -> PipelineInputs<'_> {
        PipelineInputs {
            settings: &self.settings,
            aov_bindings: &self.aov_bindings,
            alpha_mask_active: self.alpha_mask_active(),
            clip_plane_count: self.framing.clip_planes().len(),
        }
    }

    // ===== PER-FRAME =====

    /// Recompute the cull matrix and upload the uniform block
    ///
    /// The uniform range is (re)allocated when missing or when the clip
    /// plane count changed. On allocation failure the range is left unset
    /// and the error is logged and returned; the caller decides whether to
    /// retry.
    pub fn prepare(&mut self, registry: &mut dyn ResourceRegistry) -> Result<()> {
        self.framing.recompute_cull_matrix();

        let clip_planes = self.framing.clip_planes();
        let clip_plane_count = clip_planes.len();

        if self.uniform_range.is_none() || self.uniform_clip_plane_count != clip_plane_count {
            self.uniform_range = None;
            let size = RenderPassUniforms::buffer_size(clip_plane_count);
            prism_debug!(
                "prism::RenderPassState",
                "Allocating uniform range: {} bytes, {} clip planes",
                size, clip_plane_count
            );
            let range = registry
                .allocate_buffer_range(BufferRangeDesc {
                    name: "renderPassState".to_string(),
                    size,
                    usage: BufferUsage::Uniform,
                })
                .map_err(|err| {
                    prism_error!(
                        "prism::RenderPassState",
                        "Uniform range allocation of {} bytes failed: {}",
                        size, err
                    );
                    err
                })?;
            self.uniform_range = Some(range);
            self.uniform_clip_plane_count = clip_plane_count;
        }

        let uniforms = RenderPassUniforms::new(
            &FramingUniforms {
                world_to_view: self.framing.world_to_view_matrix(),
                projection: self.framing.projection_matrix(),
                cull_matrix: self.framing.cull_matrix(),
                viewport: self.framing.viewport(),
                clip_planes,
            },
            &self.settings,
        );

        if let Some(range) = &self.uniform_range {
            range.update(0, &uniforms.to_bytes(clip_planes))?;
        }
        Ok(())
    }

    /// Uniform buffer range of the last successful `prepare()`
    pub fn uniform_range(&self) -> Option<&Arc<dyn BufferRange>> {
        self.uniform_range.as_ref()
    }

    // ===== CAMERA =====

    pub fn set_camera(&mut self, camera: Option<Arc<SceneCamera>>) {
        self.framing.set_camera(camera);
    }

    pub fn set_camera_framing_state(
        &mut self,
        world_to_view: Mat4,
        projection: Mat4,
        viewport: Vec4,
        clip_planes: Vec<Vec4>,
    ) {
        self.framing.set_camera_framing_state(world_to_view, projection, viewport, clip_planes);
    }

    /// Copy the scene camera's values into the fallback framing
    pub fn apply_state_from_camera(&mut self) -> bool {
        let applied = self.framing.apply_state_from_camera();
        if applied {
            prism_trace!("prism::RenderPassState", "Applied scene camera framing");
        }
        applied
    }

    pub fn camera_framing(&self) -> &CameraFraming {
        &self.framing
    }

    pub fn world_to_view_matrix(&self) -> Mat4 {
        self.framing.world_to_view_matrix()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.framing.projection_matrix()
    }

    pub fn viewport(&self) -> Vec4 {
        self.framing.viewport()
    }

    pub fn clip_planes(&self) -> &[Vec4] {
        self.framing.clip_planes()
    }

    /// Cull matrix as of the last `prepare()`
    pub fn cull_matrix(&self) -> Mat4 {
        self.framing.cull_matrix()
    }

    pub fn cull_frustum(&self) -> Frustum {
        self.framing.cull_frustum()
    }

    // ===== SHADERS =====

    pub fn set_render_pass_shader(&mut self, shader: Arc<dyn ShaderCode>) {
        self.shaders.set_render_pass_shader(shader);
    }

    pub fn set_lighting_shader(&mut self, shader: Option<Arc<dyn ShaderCode>>) {
        self.shaders.set_lighting_shader(shader);
    }

    pub fn set_use_scene_materials(&mut self, use_scene_materials: bool) {
        self.shaders.set_use_scene_materials(use_scene_materials);
    }

    pub fn use_scene_materials(&self) -> bool {
        self.shaders.use_scene_materials()
    }

    pub fn shader_binding(&self) -> &ShaderBinding {
        &self.shaders
    }

    /// Pass-level shaders in program order (lighting, render pass)
    pub fn shaders(&self) -> Vec<Arc<dyn ShaderCode>> {
        self.shaders.shaders()
    }

    pub fn shader_hash(&self) -> usize {
        self.shaders.shader_hash()
    }

    // ===== AOVS =====

    /// Replace the AOV bindings; order is kept as given
    ///
    /// Bindings that cannot produce an attachment are reported here, once.
    pub fn set_aov_bindings(&mut self, bindings: Vec<AovBinding>) {
        attachment_builder::report_omitted_bindings(&bindings);
        self.aov_bindings = bindings;
    }

    pub fn aov_bindings(&self) -> &[AovBinding] {
        &self.aov_bindings
    }

    // ===== SETTINGS =====

    pub fn settings(&self) -> &PassSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut PassSettings {
        &mut self.settings
    }

    pub fn set_resolve_multisample_aov(&mut self, resolve: bool) {
        self.settings.resolve_multisample_aov = resolve;
    }

    pub fn resolve_multisample_aov(&self) -> bool {
        self.settings.resolve_multisample_aov
    }

    pub fn set_alpha_threshold(&mut self, threshold: f32) {
        self.settings.alpha_threshold = threshold;
    }

    pub fn alpha_threshold(&self) -> f32 {
        self.settings.alpha_threshold
    }

    pub fn set_alpha_mask_policy(&mut self, policy: AlphaMaskPolicy) {
        self.settings.alpha_mask_policy = policy;
    }

    /// Whether the alpha-mask policy is active for the current settings
    pub fn alpha_mask_active(&self) -> bool {
        self.settings.alpha_mask_active(self.shaders.use_scene_materials())
    }

    pub fn set_multi_sample_enabled(&mut self, enabled: bool) {
        self.settings.multi_sample_enabled = enabled;
    }

    pub fn set_alpha_to_coverage_enabled(&mut self, enabled: bool) {
        self.settings.alpha_to_coverage_enabled = enabled;
    }

    pub fn set_enable_depth_test(&mut self, enabled: bool) {
        self.settings.depth.test_enabled = enabled;
    }

    pub fn set_enable_depth_mask(&mut self, enabled: bool) {
        self.settings.depth.write_enabled = enabled;
    }

    pub fn set_depth_func(&mut self, func: CompareOp) {
        self.settings.depth.func = func;
    }

    pub fn set_depth_bias(&mut self, enabled: bool, constant_factor: f32, slope_factor: f32) {
        self.settings.depth.bias_enabled = enabled;
        self.settings.depth.bias.constant_factor = constant_factor;
        self.settings.depth.bias.slope_factor = slope_factor;
    }

    pub fn set_depth_clamp_enabled(&mut self, enabled: bool) {
        self.settings.depth.clamp_enabled = enabled;
    }

    pub fn set_depth_range(&mut self, near: f32, far: f32) {
        self.settings.depth.range = (near, far);
    }

    pub fn set_stencil(&mut self, stencil: StencilSettings) {
        self.settings.stencil = stencil;
    }

    pub fn set_blend(&mut self, blend: BlendSettings) {
        self.settings.blend = blend;
    }

    pub fn set_blend_enabled(&mut self, enabled: bool) {
        self.settings.blend.enabled = enabled;
    }

    pub fn set_color_masks(&mut self, masks: Vec<ColorWriteMask>) {
        self.settings.color_masks = masks;
    }

    pub fn set_cull_style(&mut self, cull_style: CullStyle) {
        self.settings.cull_style = cull_style;
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.settings.line_width = width;
    }

    pub fn set_conservative_rasterization(&mut self, enabled: bool) {
        self.settings.conservative_rasterization = enabled;
    }

    pub fn set_colors(&mut self, colors: PassColors) {
        self.settings.colors = colors;
    }

    pub fn set_point_size(&mut self, size: f32, selected_size: f32) {
        self.settings.point_size = size;
        self.settings.point_selected_size = selected_size;
    }

    pub fn set_lighting_blend_amount(&mut self, amount: f32) {
        self.settings.lighting_blend_amount = amount;
    }

    pub fn set_tess_level(&mut self, level: f32) {
        self.settings.tess_level = level;
    }

    // ===== DESCRIPTORS =====

    /// Record `geometric_shader` for `graphics_pipeline_hash()`
    ///
    /// The shader is kept as given; its cull mode is resolved against the
    /// pass cull style at hash time, so setter order does not matter.
    pub fn apply_state_from_geometric_shader(&mut self, geometric_shader: &GeometricShader) {
        self.geometric_shader = Some(geometric_shader.clone());
    }

    /// Signature of the last applied geometric shader under the current
    /// cull style
    pub fn geometric_signature(&self) -> Option<GeometricSignature> {
        self.geometric_shader
            .as_ref()
            .map(|shader| shader.signature(self.settings.cull_style))
    }

    /// Attachments and textures needed to open a render encoder
    pub fn make_graphics_cmds_desc(&self, render_index: &dyn RenderIndex) -> GraphicsCmdsDesc {
        pipeline_builder::make_graphics_cmds_desc(&self.pipeline_inputs(), render_index)
    }

    /// Populate a caller-owned pipeline descriptor for `geometric_shader`
    pub fn init_graphics_pipeline_desc(
        &self,
        desc: &mut GraphicsPipelineDesc,
        geometric_shader: &GeometricShader,
    ) {
        pipeline_builder::init_graphics_pipeline_desc(&self.pipeline_inputs(), geometric_shader, desc);
    }

    /// Cache key over every field that feeds the pipeline descriptor
    pub fn graphics_pipeline_hash(&self) -> u64 {
        pipeline_hasher::graphics_pipeline_hash(&self.pipeline_inputs(), self.geometric_shader.as_ref())
    }

    // ===== LEGACY STATE =====

    /// Capture and override the context's fixed-function state
    pub fn bind(&mut self, capabilities: &GraphicsCapabilities, context: &mut dyn LegacyGraphicsContext) {
        let inputs = PipelineInputs {
            settings: &self.settings,
            aov_bindings: &self.aov_bindings,
            alpha_mask_active: self.settings.alpha_mask_active(self.shaders.use_scene_materials()),
            clip_plane_count: self.framing.clip_planes().len(),
        };
        self.legacy_bridge.bind(&inputs, capabilities, context);
    }

    /// Restore the fixed-function state captured by `bind()`
    ///
    /// Takes no capabilities: the snapshot only holds what the backend
    /// supported at `bind()` time, and exactly that is restored.
    pub fn unbind(&mut self, context: &mut dyn LegacyGraphicsContext) {
        self.legacy_bridge.unbind(context);
    }

    pub fn is_bound(&self) -> bool {
        self.legacy_bridge.is_bound()
    }
}

#[cfg(test)]
#[path = "render_pass_state_tests.rs"]
mod tests;
