/// GeometricShader - per-draw-batch description of how primitives are drawn
///
/// Owned by the draw batch and passed to the render pass state per call.
/// The pass keeps a copy of the last one applied and resolves its
/// `GeometricSignature` against the pass cull style whenever it builds a
/// descriptor or a pipeline hash.

use crate::render::{PrimitiveTopology, PolygonMode, CullMode};

/// Primitive type produced by the geometric shader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Points,
    BasisCurvesLines,
    BasisCurvesLinearPatches,
    BasisCurvesCubicPatches,
    MeshCoarseTriangles,
    MeshRefinedTriangles,
    MeshCoarseQuads,
    MeshRefinedQuads,
    MeshCoarseTriQuads,
    MeshRefinedTriQuads,
    MeshBSplinePatches,
    MeshBoxSplineTrianglePatches,
}

impl PrimitiveType {
    /// Input-assembly topology used to draw this primitive type
    ///
    /// Quads are drawn as 4-vertex line lists with adjacency and expanded
    /// to triangles in the geometry stage.
    pub fn topology(&self) -> PrimitiveTopology {
        match self {
            PrimitiveType::Points => PrimitiveTopology::PointList,
            PrimitiveType::BasisCurvesLines => PrimitiveTopology::LineList,
            PrimitiveType::MeshCoarseQuads
            | PrimitiveType::MeshRefinedQuads
            | PrimitiveType::MeshCoarseTriQuads
            | PrimitiveType::MeshRefinedTriQuads => PrimitiveTopology::LineListWithAdjacency,
            PrimitiveType::MeshCoarseTriangles
            | PrimitiveType::MeshRefinedTriangles => PrimitiveTopology::TriangleList,
            PrimitiveType::BasisCurvesLinearPatches
            | PrimitiveType::BasisCurvesCubicPatches
            | PrimitiveType::MeshBSplinePatches
            | PrimitiveType::MeshBoxSplineTrianglePatches => PrimitiveTopology::PatchList,
        }
    }

    /// Control points per patch, 0 for non-patch primitives
    pub fn patch_control_points(&self) -> u32 {
        match self {
            PrimitiveType::BasisCurvesLinearPatches => 2,
            PrimitiveType::BasisCurvesCubicPatches => 4,
            PrimitiveType::MeshBSplinePatches => 16,
            PrimitiveType::MeshBoxSplineTrianglePatches => 12,
            _ => 0,
        }
    }

    pub fn is_points(&self) -> bool {
        matches!(self, PrimitiveType::Points)
    }
}

/// Face culling policy
///
/// The "unless double-sided" variants cull only geometry that is not
/// marked double-sided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CullStyle {
    /// Defer to the render pass's cull style
    DontCare,
    Nothing,
    Back,
    Front,
    BackUnlessDoubleSided,
    FrontUnlessDoubleSided,
}

/// Geometric shader configuration of one draw batch
#[derive(Debug, Clone, PartialEq)]
pub struct GeometricShader {
    /// Debug name
    pub name: String,
    pub primitive_type: PrimitiveType,
    pub polygon_mode: PolygonMode,
    /// Cull style requested by the shader (`DontCare` = use the pass's)
    pub cull_style: CullStyle,
    /// Cull with the rasterizer; when false, culling happens in the shader
    pub use_hardware_face_culling: bool,
    pub double_sided: bool,
    /// Object transform has a negative determinant (flips winding)
    pub mirrored_transform: bool,
    /// Primitive draws need polygon offset (e.g. wireframe on shaded)
    pub depth_bias_required: bool,
}

impl GeometricShader {
    /// Filled, hardware-culled shader deferring to the pass cull style
    pub fn new(name: impl Into<String>, primitive_type: PrimitiveType) -> Self {
        Self {
            name: name.into(),
            primitive_type,
            polygon_mode: PolygonMode::Fill,
            cull_style: CullStyle::DontCare,
            use_hardware_face_culling: true,
            double_sided: false,
            mirrored_transform: false,
            depth_bias_required: false,
        }
    }

    /// Resolve the rasterizer cull mode against the pass's cull style
    pub fn resolve_cull_mode(&self, pass_cull_style: CullStyle) -> CullMode {
        if !self.use_hardware_face_culling {
            return CullMode::None;
        }

        let style = match self.cull_style {
            CullStyle::DontCare => pass_cull_style,
            style => style,
        };

        let front = if self.mirrored_transform { CullMode::Back } else { CullMode::Front };
        let back = if self.mirrored_transform { CullMode::Front } else { CullMode::Back };

        match style {
            CullStyle::Front => front,
            CullStyle::Back => back,
            CullStyle::FrontUnlessDoubleSided if !self.double_sided => front,
            CullStyle::BackUnlessDoubleSided if !self.double_sided => back,
            _ => CullMode::None,
        }
    }

    /// Pipeline-relevant subset of this shader, resolved against the pass
    pub fn signature(&self, pass_cull_style: CullStyle) -> GeometricSignature {
        GeometricSignature {
            topology: self.primitive_type.topology(),
            patch_control_points: self.primitive_type.patch_control_points(),
            polygon_mode: self.polygon_mode,
            cull_mode: self.resolve_cull_mode(pass_cull_style),
            point_size_enabled: self.primitive_type.is_points(),
            depth_bias_required: self.depth_bias_required,
        }
    }
}

/// Pipeline-relevant state of an applied geometric shader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometricSignature {
    pub topology: PrimitiveTopology,
    pub patch_control_points: u32,
    pub polygon_mode: PolygonMode,
    pub cull_mode: CullMode,
    pub point_size_enabled: bool,
    pub depth_bias_required: bool,
}

#[cfg(test)]
#[path = "geometric_tests.rs"]
mod tests;
