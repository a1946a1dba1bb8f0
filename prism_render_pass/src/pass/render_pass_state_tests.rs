use std::sync::Arc;
use glam::{Mat4, Vec3, Vec4};
use crate::mock::{MockLegacyContext, MockRenderIndex, MockResourceRegistry};
use crate::render::{
    BufferRange, ColorWriteMask, GraphicsCapabilities, GraphicsPipelineDesc, PrimitiveTopology,
    TextureFormat,
};
use crate::shader::{GeometricShader, PrimitiveType, RenderPassShader};
use super::*;

fn view() -> Mat4 {
    Mat4::look_at_rh(Vec3::new(0.0, 2.0, 5.0), Vec3::ZERO, Vec3::Y)
}

fn projection() -> Mat4 {
    Mat4::perspective_rh(std::f32::consts::FRAC_PI_3, 1.5, 0.1, 50.0)
}

fn color(samples: u32) -> AovBinding {
    AovBinding::new("color", 1, TextureFormat::R16G16B16A16_SFLOAT, samples)
}

// ============================================================================
// prepare()
// ============================================================================

#[test]
fn test_prepare_recomputes_cull_matrix() {
    let mut state = RenderPassState::new();
    let mut registry = MockResourceRegistry::new();
    state.set_camera_framing_state(view(), projection(), Vec4::new(0.0, 0.0, 300.0, 200.0), Vec::new());

    state.prepare(&mut registry).unwrap();

    assert_eq!(state.cull_matrix(), projection() * view());
}

#[test]
fn test_prepare_uses_scene_camera() {
    let mut state = RenderPassState::new();
    let mut registry = MockResourceRegistry::new();
    state.set_camera_framing_state(Mat4::IDENTITY, Mat4::IDENTITY, Vec4::ZERO, Vec::new());
    state.set_camera(Some(Arc::new(SceneCamera::new(view(), projection(), Vec4::ZERO))));

    state.prepare(&mut registry).unwrap();

    assert_eq!(state.cull_matrix(), projection() * view());
    assert_eq!(state.world_to_view_matrix(), view());
}

#[test]
fn test_prepare_allocates_once_per_clip_plane_count() {
    let mut state = RenderPassState::new();
    let mut registry = MockResourceRegistry::new();

    state.prepare(&mut registry).unwrap();
    state.prepare(&mut registry).unwrap();
    assert_eq!(registry.requests.len(), 1);
    assert_eq!(registry.requests[0].size, RenderPassUniforms::buffer_size(0));

    state.set_camera_framing_state(view(), projection(), Vec4::ZERO, vec![Vec4::Y, Vec4::X]);
    state.prepare(&mut registry).unwrap();
    assert_eq!(registry.requests.len(), 2);
    assert_eq!(registry.requests[1].size, RenderPassUniforms::buffer_size(2));
    assert_eq!(state.uniform_range().map(|r| r.size()), Some(RenderPassUniforms::buffer_size(2)));
}

#[test]
fn test_prepare_uploads_uniforms() {
    let mut state = RenderPassState::new();
    let mut registry = MockResourceRegistry::new();
    state.set_alpha_threshold(0.125);

    state.prepare(&mut registry).unwrap();

    let contents = registry.last_range().unwrap().contents();
    let uniforms: RenderPassUniforms =
        bytemuck::pod_read_unaligned(&contents[..std::mem::size_of::<RenderPassUniforms>()]);
    assert_eq!(uniforms.alpha_threshold, 0.125);
    assert_eq!(uniforms.cull_matrix, Mat4::IDENTITY.to_cols_array());
}

#[test]
fn test_prepare_allocation_failure_leaves_range_unset() {
    let mut state = RenderPassState::new();
    let mut registry = MockResourceRegistry::new();
    registry.fail_allocations = true;

    assert!(state.prepare(&mut registry).is_err());
    assert!(state.uniform_range().is_none());

    // Not retried internally; the next prepare asks again
    registry.fail_allocations = false;
    state.prepare(&mut registry).unwrap();
    assert!(state.uniform_range().is_some());
    assert_eq!(registry.requests.len(), 2);
}

// ============================================================================
// Camera
// ============================================================================

#[test]
fn test_apply_state_from_camera() {
    let mut state = RenderPassState::new();
    assert!(!state.apply_state_from_camera());

    state.set_camera(Some(Arc::new(SceneCamera::new(view(), projection(), Vec4::ONE))));
    assert!(state.apply_state_from_camera());

    state.set_camera(None);
    assert_eq!(state.viewport(), Vec4::ONE);
    assert_eq!(state.projection_matrix(), projection());
}

// ============================================================================
// Descriptors
// ============================================================================

#[test]
fn test_default_state_makes_single_color_attachment() {
    let state = RenderPassState::new();

    let cmds = state.make_graphics_cmds_desc(&MockRenderIndex::new());

    assert_eq!(cmds.color_attachment_descs.len(), 1);
    assert!(!cmds.color_attachment_descs[0].blend_enabled);
    assert_eq!(cmds.color_attachment_descs[0].color_mask, ColorWriteMask::ALL);
}

#[test]
fn test_all_invalid_bindings_make_no_attachments() {
    let mut state = RenderPassState::new();
    state.set_aov_bindings(vec![AovBinding::new("pending", 1, TextureFormat::Invalid, 1)]);

    let cmds = state.make_graphics_cmds_desc(&MockRenderIndex::new());

    // The default target only stands in when nothing is bound
    assert!(cmds.color_attachment_descs.is_empty());
    assert!(cmds.depth_attachment_desc.is_none());
}

#[test]
fn test_alpha_mask_scenario() {
    let mut state = RenderPassState::new();
    state.set_use_scene_materials(false);
    state.set_alpha_threshold(0.5);
    state.set_resolve_multisample_aov(true);
    state.set_aov_bindings(vec![color(4)]);
    let mut index = MockRenderIndex::new();
    index.insert(1, true);

    let cmds = state.make_graphics_cmds_desc(&index);

    let desc = cmds.color_attachment_descs[0];
    assert!(state.alpha_mask_active());
    assert!(desc.blend_enabled);
    assert!(desc.resolves_on_store());
    assert_eq!(desc.color_mask, ColorWriteMask::ALL);
}

#[test]
fn test_init_graphics_pipeline_desc() {
    let mut state = RenderPassState::new();
    state.set_aov_bindings(vec![color(1)]);
    state.set_cull_style(CullStyle::Back);
    let mut desc = GraphicsPipelineDesc::default();

    state.init_graphics_pipeline_desc(&mut desc, &GeometricShader::new("quads", PrimitiveType::MeshCoarseQuads));

    assert_eq!(desc.primitive.topology, PrimitiveTopology::LineListWithAdjacency);
    assert_eq!(desc.color_attachments.len(), 1);
    assert_eq!(desc.rasterization.cull_mode, crate::render::CullMode::Back);
}

// ============================================================================
// Hashes
// ============================================================================

#[test]
fn test_pipeline_hash_tracks_geometric_shader() {
    let mut state = RenderPassState::new();
    let before = state.graphics_pipeline_hash();

    state.apply_state_from_geometric_shader(&GeometricShader::new("mesh", PrimitiveType::MeshCoarseTriangles));
    let triangles = state.graphics_pipeline_hash();
    state.apply_state_from_geometric_shader(&GeometricShader::new("points", PrimitiveType::Points));
    let points = state.graphics_pipeline_hash();

    assert_ne!(before, triangles);
    assert_ne!(triangles, points);
}

#[test]
fn test_pipeline_hash_independent_of_setter_order() {
    let mesh = GeometricShader::new("mesh", PrimitiveType::MeshCoarseTriangles);
    let mut shader_first = RenderPassState::new();
    shader_first.apply_state_from_geometric_shader(&mesh);
    shader_first.set_cull_style(CullStyle::Back);
    let mut style_first = RenderPassState::new();
    style_first.set_cull_style(CullStyle::Back);
    style_first.apply_state_from_geometric_shader(&mesh);

    let mut desc_a = GraphicsPipelineDesc::default();
    let mut desc_b = GraphicsPipelineDesc::default();
    shader_first.init_graphics_pipeline_desc(&mut desc_a, &mesh);
    style_first.init_graphics_pipeline_desc(&mut desc_b, &mesh);

    assert_eq!(desc_a, desc_b);
    assert_eq!(shader_first.graphics_pipeline_hash(), style_first.graphics_pipeline_hash());
}

#[test]
fn test_geometric_signature_uses_current_cull_style() {
    let mut state = RenderPassState::new();
    assert!(state.geometric_signature().is_none());

    state.apply_state_from_geometric_shader(&GeometricShader::new("mesh", PrimitiveType::MeshCoarseTriangles));
    state.set_cull_style(CullStyle::Front);

    let signature = state.geometric_signature().unwrap();
    assert_eq!(signature.cull_mode, crate::render::CullMode::Front);
}

#[test]
fn test_pipeline_hash_ignores_non_pipeline_settings() {
    let a = RenderPassState::new();
    let mut b = RenderPassState::new();
    b.set_tess_level(4.0);
    b.set_camera_framing_state(view(), projection(), Vec4::ONE, Vec::new());

    assert_eq!(a.graphics_pipeline_hash(), b.graphics_pipeline_hash());
}

#[test]
fn test_shader_hash_and_shaders() {
    let mut state = RenderPassState::new();
    let before = state.shader_hash();

    state.set_render_pass_shader(Arc::new(RenderPassShader::new("selection", vec!["RenderPass.Selection".to_string()])));

    assert_ne!(state.shader_hash(), before);
    assert_eq!(state.shaders()[1].name(), "selection");
}

// ============================================================================
// Legacy bind / unbind
// ============================================================================

#[test]
fn test_bind_unbind_round_trip() {
    let mut state = RenderPassState::new();
    state.set_blend_enabled(true);
    state.set_depth_func(CompareOp::Always);
    state.set_cull_style(CullStyle::Back);
    let mut context = MockLegacyContext::new();
    let before = context.snapshot();
    let capabilities = GraphicsCapabilities::full();

    state.bind(&capabilities, &mut context);
    assert!(state.is_bound());
    state.unbind(&mut context);

    assert!(!state.is_bound());
    assert_eq!(context.snapshot(), before);
}
