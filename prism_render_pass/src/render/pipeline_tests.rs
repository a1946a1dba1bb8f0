//! Unit tests for the pipeline descriptor module
//!
//! Tests SampleCount conversion, topology adjacency and descriptor defaults.

use crate::render::{
    SampleCount, PrimitiveTopology, DepthStencilState, CompareOp, RasterizationState,
    CullMode, MultisampleState, GraphicsPipelineDesc, ColorWriteMask, AttachmentDesc,
    TextureFormat, AttachmentUsage, LoadOp, StoreOp, ClearValue,
};

// ============================================================================
// SAMPLE COUNT TESTS
// ============================================================================

#[test]
fn test_sample_count_from_count() {
    assert_eq!(SampleCount::from_count(0), SampleCount::S1);
    assert_eq!(SampleCount::from_count(1), SampleCount::S1);
    assert_eq!(SampleCount::from_count(2), SampleCount::S2);
    assert_eq!(SampleCount::from_count(4), SampleCount::S4);
    assert_eq!(SampleCount::from_count(6), SampleCount::S4);
    assert_eq!(SampleCount::from_count(8), SampleCount::S8);
    assert_eq!(SampleCount::from_count(64), SampleCount::S16);
}

#[test]
fn test_sample_count_count_and_multisampled() {
    assert_eq!(SampleCount::S1.count(), 1);
    assert_eq!(SampleCount::S8.count(), 8);
    assert!(!SampleCount::S1.is_multisampled());
    assert!(SampleCount::S4.is_multisampled());
}

// ============================================================================
// PRIMITIVE TOPOLOGY TESTS
// ============================================================================

#[test]
fn test_topology_adjacency() {
    assert!(PrimitiveTopology::LineListWithAdjacency.has_adjacency());
    assert!(!PrimitiveTopology::LineList.has_adjacency());
    assert!(!PrimitiveTopology::TriangleList.has_adjacency());
    assert!(!PrimitiveTopology::PatchList.has_adjacency());
}

// ============================================================================
// DEFAULTS
// ============================================================================

#[test]
fn test_depth_stencil_default_is_less_equal() {
    let state = DepthStencilState::default();
    assert!(state.depth_test_enable);
    assert!(state.depth_write_enable);
    assert_eq!(state.depth_compare_op, CompareOp::LessOrEqual);
    assert!(!state.stencil_test_enable);
}

#[test]
fn test_rasterization_default() {
    let state = RasterizationState::default();
    assert_eq!(state.cull_mode, CullMode::Back);
    assert_eq!(state.line_width, 1.0);
    assert!(state.depth_bias.is_none());
    assert!(state.rasterizer_enabled);
}

#[test]
fn test_multisample_default_is_single_sample() {
    let state = MultisampleState::default();
    assert_eq!(state.sample_count, SampleCount::S1);
    assert!(!state.alpha_to_coverage);
}

#[test]
fn test_pipeline_desc_equality() {
    let a = GraphicsPipelineDesc::default();
    let mut b = GraphicsPipelineDesc::default();
    assert_eq!(a, b);

    b.depth_stencil.depth_compare_op = CompareOp::Less;
    assert_ne!(a, b);
}

// ============================================================================
// ATTACHMENT TESTS
// ============================================================================

#[test]
fn test_attachment_color_constructor() {
    let desc = AttachmentDesc::color(TextureFormat::R16G16B16A16_SFLOAT);
    assert_eq!(desc.usage, AttachmentUsage::Color);
    assert_eq!(desc.load_op, LoadOp::Load);
    assert_eq!(desc.store_op, StoreOp::Store);
    assert!(!desc.blend_enabled);
    assert_eq!(desc.color_mask, ColorWriteMask::ALL);
    assert!(!desc.clears_on_load());
    assert!(!desc.resolves_on_store());
}

#[test]
fn test_attachment_depth_constructor() {
    let desc = AttachmentDesc::depth_stencil(TextureFormat::D32_FLOAT);
    assert_eq!(desc.usage, AttachmentUsage::DepthStencil);
    assert_eq!(desc.format, TextureFormat::D32_FLOAT);
}

#[test]
fn test_clear_value_to_array() {
    assert_eq!(ClearValue::Color([0.1, 0.2, 0.3, 1.0]).to_array(), [0.1, 0.2, 0.3, 1.0]);
    assert_eq!(
        ClearValue::DepthStencil { depth: 1.0, stencil: 3 }.to_array(),
        [1.0, 3.0, 0.0, 0.0]
    );
}

#[test]
fn test_texture_format_classification() {
    assert!(TextureFormat::D24_UNORM_S8_UINT.is_depth_stencil());
    assert!(TextureFormat::D24_UNORM_S8_UINT.has_stencil());
    assert!(TextureFormat::D32_FLOAT.is_depth_stencil());
    assert!(!TextureFormat::D32_FLOAT.has_stencil());
    assert!(!TextureFormat::R8G8B8A8_UNORM.is_depth_stencil());
    assert!(!TextureFormat::Invalid.is_valid());
}
