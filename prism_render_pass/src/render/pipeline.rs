/// Graphics pipeline descriptor
///
/// Backend-agnostic description of a complete GPU pipeline configuration.
/// Descriptors derive `PartialEq` so that a pipeline cache keyed by
/// `RenderPassState::graphics_pipeline_hash()` can confirm a hit with a
/// full equality check before reusing a pipeline object.

use crate::render::AttachmentDesc;

/// Primitive topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveTopology {
    /// Point list
    PointList,
    /// Line list
    LineList,
    /// Line list with adjacency (4 vertices per primitive, used for quads)
    LineListWithAdjacency,
    /// Triangle list
    TriangleList,
    /// Patch list (tessellation)
    PatchList,
}

impl PrimitiveTopology {
    /// Whether the topology carries adjacency vertices
    pub fn has_adjacency(&self) -> bool {
        matches!(self, PrimitiveTopology::LineListWithAdjacency)
    }
}

// ===== RASTERIZATION ENUMS =====

/// Face culling mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CullMode {
    /// No culling
    None,
    /// Cull front faces
    Front,
    /// Cull back faces
    Back,
    /// Cull both faces
    FrontAndBack,
}

/// Front face winding order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrontFace {
    /// Counter-clockwise vertices define front face
    CounterClockwise,
    /// Clockwise vertices define front face
    Clockwise,
}

/// Polygon rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolygonMode {
    /// Fill polygons
    Fill,
    /// Draw edges only (wireframe)
    Line,
    /// Draw vertices only
    Point,
}

// ===== DEPTH/STENCIL ENUMS =====

/// Comparison operator for depth and stencil tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// Never pass
    Never,
    /// Pass if value < reference
    Less,
    /// Pass if value == reference
    Equal,
    /// Pass if value <= reference
    LessOrEqual,
    /// Pass if value > reference
    Greater,
    /// Pass if value != reference
    NotEqual,
    /// Pass if value >= reference
    GreaterOrEqual,
    /// Always pass
    Always,
}

/// Stencil operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StencilOp {
    /// Keep current value
    Keep,
    /// Set to zero
    Zero,
    /// Replace with reference value
    Replace,
    /// Increment and clamp to max
    IncrementAndClamp,
    /// Decrement and clamp to zero
    DecrementAndClamp,
    /// Bitwise invert
    Invert,
    /// Increment and wrap around
    IncrementAndWrap,
    /// Decrement and wrap around
    DecrementAndWrap,
}

// ===== COLOR BLEND ENUMS =====

/// Blend factor for color blending equations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    Zero,
    One,
    SrcColor,
    OneMinusSrcColor,
    DstColor,
    OneMinusDstColor,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstAlpha,
    OneMinusDstAlpha,
    ConstantColor,
    OneMinusConstantColor,
    ConstantAlpha,
    OneMinusConstantAlpha,
    SrcAlphaSaturate,
}

/// Blend operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendOp {
    /// result = src * srcFactor + dst * dstFactor
    Add,
    /// result = src * srcFactor - dst * dstFactor
    Subtract,
    /// result = dst * dstFactor - src * srcFactor
    ReverseSubtract,
    /// result = min(src, dst)
    Min,
    /// result = max(src, dst)
    Max,
}

// ===== MULTISAMPLE ENUMS =====

/// Multisample count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleCount {
    /// 1 sample (no multisampling)
    S1,
    /// 2 samples
    S2,
    /// 4 samples
    S4,
    /// 8 samples
    S8,
    /// 16 samples
    S16,
}

impl SampleCount {
    /// Convert a raw sample count, rounding down to a supported count
    pub fn from_count(count: u32) -> Self {
        match count {
            0 | 1 => SampleCount::S1,
            2 | 3 => SampleCount::S2,
            4..=7 => SampleCount::S4,
            8..=15 => SampleCount::S8,
            _ => SampleCount::S16,
        }
    }

    /// Number of samples per pixel
    pub fn count(&self) -> u32 {
        match self {
            SampleCount::S1 => 1,
            SampleCount::S2 => 2,
            SampleCount::S4 => 4,
            SampleCount::S8 => 8,
            SampleCount::S16 => 16,
        }
    }

    pub fn is_multisampled(&self) -> bool {
        *self != SampleCount::S1
    }
}

// ===== PRIMITIVE STATE =====

/// Input assembly state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimitiveState {
    /// Primitive topology
    pub topology: PrimitiveTopology,
    /// Control points per patch (only meaningful for `PatchList`)
    pub patch_control_points: u32,
    /// Shader-written point size (only for point primitives)
    pub point_size_enabled: bool,
}

impl Default for PrimitiveState {
    fn default() -> Self {
        Self {
            topology: PrimitiveTopology::TriangleList,
            patch_control_points: 0,
            point_size_enabled: false,
        }
    }
}

// ===== RASTERIZATION STATE =====

/// Depth bias parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthBias {
    /// Constant depth offset
    pub constant_factor: f32,
    /// Slope-based depth offset
    pub slope_factor: f32,
}

impl Default for DepthBias {
    fn default() -> Self {
        Self {
            constant_factor: 1.0,
            slope_factor: 1.0,
        }
    }
}

/// Rasterization fixed-function state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterizationState {
    /// Face culling mode
    pub cull_mode: CullMode,
    /// Front face winding order
    pub front_face: FrontFace,
    /// Polygon rendering mode
    pub polygon_mode: PolygonMode,
    /// Line width for line primitives and wireframe
    pub line_width: f32,
    /// Depth bias (None = disabled)
    pub depth_bias: Option<DepthBias>,
    /// Clamp fragment depth instead of clipping
    pub depth_clamp_enabled: bool,
    /// Viewport depth range (near, far)
    pub depth_range: (f32, f32),
    /// Conservative rasterization
    pub conservative_raster: bool,
    /// Number of user clip distances written by the vertex stage
    pub clip_distance_count: u32,
    /// Rasterizer enabled (false = rasterizer discard)
    pub rasterizer_enabled: bool,
}

impl Default for RasterizationState {
    fn default() -> Self {
        Self {
            cull_mode: CullMode::Back,
            front_face: FrontFace::CounterClockwise,
            polygon_mode: PolygonMode::Fill,
            line_width: 1.0,
            depth_bias: None,
            depth_clamp_enabled: false,
            depth_range: (0.0, 1.0),
            conservative_raster: false,
            clip_distance_count: 0,
            rasterizer_enabled: true,
        }
    }
}

// ===== DEPTH/STENCIL STATE =====

/// Stencil operation state (per-face)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StencilOpState {
    /// Action on stencil test fail
    pub fail_op: StencilOp,
    /// Action on stencil pass + depth pass
    pub pass_op: StencilOp,
    /// Action on stencil pass + depth fail
    pub depth_fail_op: StencilOp,
    /// Comparison operator
    pub compare_op: CompareOp,
    /// Bits of stencil buffer read for compare
    pub compare_mask: u32,
    /// Bits of stencil buffer written
    pub write_mask: u32,
    /// Reference value for compare/replace
    pub reference: u32,
}

impl Default for StencilOpState {
    fn default() -> Self {
        Self {
            fail_op: StencilOp::Keep,
            pass_op: StencilOp::Keep,
            depth_fail_op: StencilOp::Keep,
            compare_op: CompareOp::Always,
            compare_mask: 0xFF,
            write_mask: 0xFF,
            reference: 0,
        }
    }
}

/// Depth and stencil testing state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepthStencilState {
    /// Enable depth testing
    pub depth_test_enable: bool,
    /// Enable writing to depth buffer
    pub depth_write_enable: bool,
    /// Depth comparison operator
    pub depth_compare_op: CompareOp,
    /// Enable stencil testing
    pub stencil_test_enable: bool,
    /// Stencil operations for front faces
    pub front: StencilOpState,
    /// Stencil operations for back faces
    pub back: StencilOpState,
}

impl Default for DepthStencilState {
    fn default() -> Self {
        Self {
            depth_test_enable: true,
            depth_write_enable: true,
            depth_compare_op: CompareOp::LessOrEqual,
            stencil_test_enable: false,
            front: StencilOpState::default(),
            back: StencilOpState::default(),
        }
    }
}

// ===== COLOR WRITE MASK =====

/// Color write mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorWriteMask {
    pub r: bool,
    pub g: bool,
    pub b: bool,
    pub a: bool,
}

impl ColorWriteMask {
    /// All channels enabled
    pub const ALL: Self = Self { r: true, g: true, b: true, a: true };
    /// Color channels only
    pub const RGB: Self = Self { r: true, g: true, b: true, a: false };
    /// No channels enabled
    pub const NONE: Self = Self { r: false, g: false, b: false, a: false };
}

impl Default for ColorWriteMask {
    fn default() -> Self {
        Self::ALL
    }
}

// ===== MULTISAMPLE STATE =====

/// Multisampling state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MultisampleState {
    /// Multisample rasterization enabled
    pub multi_sample_enable: bool,
    /// Number of samples per pixel
    pub sample_count: SampleCount,
    /// Enable alpha-to-coverage
    pub alpha_to_coverage: bool,
    /// Force alpha to one after coverage is computed
    pub alpha_to_one: bool,
}

impl Default for MultisampleState {
    fn default() -> Self {
        Self {
            multi_sample_enable: false,
            sample_count: SampleCount::S1,
            alpha_to_coverage: false,
            alpha_to_one: false,
        }
    }
}

// ===== PIPELINE DESCRIPTOR =====

/// Descriptor for a graphics pipeline
///
/// Shader program and vertex layout are attached by the caller; this
/// descriptor covers the fixed-function and attachment state configured
/// per render pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphicsPipelineDesc {
    /// Debug label
    pub debug_name: String,
    /// Input assembly
    pub primitive: PrimitiveState,
    /// Color attachments, in AOV binding order
    pub color_attachments: Vec<AttachmentDesc>,
    /// Depth/stencil attachment, if a depth AOV is bound
    pub depth_attachment: Option<AttachmentDesc>,
    /// Depth and stencil testing state
    pub depth_stencil: DepthStencilState,
    /// Multisampling state
    pub multisample: MultisampleState,
    /// Rasterization state
    pub rasterization: RasterizationState,
    /// Constant color used by `ConstantColor` blend factors
    pub blend_constant_color: [f32; 4],
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
