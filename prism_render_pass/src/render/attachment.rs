/// Attachment descriptors shared by pipeline and graphics-commands descriptors

use crate::render::{
    TextureFormat, AttachmentUsage, BlendFactor, BlendOp, ColorWriteMask,
};

/// Load operation for an attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadOp {
    /// Load existing content
    Load,
    /// Clear the content
    Clear,
    /// Don't care about existing content
    DontCare,
}

/// Store operation for an attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    /// Store the rendered content
    Store,
    /// Store and resolve the multisampled content into its resolve target
    StoreAndResolve,
    /// Don't care about storing the content
    DontCare,
}

/// Clear value for an attachment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClearValue {
    /// RGBA clear color
    Color([f32; 4]),
    /// Depth and stencil clear values
    DepthStencil { depth: f32, stencil: u32 },
}

impl ClearValue {
    /// Flatten to the four floats carried by an attachment descriptor
    pub fn to_array(&self) -> [f32; 4] {
        match *self {
            ClearValue::Color(color) => color,
            ClearValue::DepthStencil { depth, stencil } => [depth, stencil as f32, 0.0, 0.0],
        }
    }
}

/// Descriptor for a single render-target slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttachmentDesc {
    /// Pixel format
    pub format: TextureFormat,
    /// Color or depth/stencil
    pub usage: AttachmentUsage,
    /// Load operation (what to do with existing content)
    pub load_op: LoadOp,
    /// Store operation (what to do with rendered content)
    pub store_op: StoreOp,
    /// Clear value used when `load_op` is `Clear`
    pub clear_value: [f32; 4],
    /// Enable blending
    pub blend_enabled: bool,
    /// Source color blend factor
    pub src_color_factor: BlendFactor,
    /// Destination color blend factor
    pub dst_color_factor: BlendFactor,
    /// Color blend operation
    pub color_blend_op: BlendOp,
    /// Source alpha blend factor
    pub src_alpha_factor: BlendFactor,
    /// Destination alpha blend factor
    pub dst_alpha_factor: BlendFactor,
    /// Alpha blend operation
    pub alpha_blend_op: BlendOp,
    /// Color write mask
    pub color_mask: ColorWriteMask,
}

impl AttachmentDesc {
    /// Plain color attachment: load, store, no blending, all channels
    pub fn color(format: TextureFormat) -> Self {
        Self {
            format,
            usage: AttachmentUsage::Color,
            load_op: LoadOp::Load,
            store_op: StoreOp::Store,
            clear_value: [0.0; 4],
            blend_enabled: false,
            src_color_factor: BlendFactor::One,
            dst_color_factor: BlendFactor::Zero,
            color_blend_op: BlendOp::Add,
            src_alpha_factor: BlendFactor::One,
            dst_alpha_factor: BlendFactor::Zero,
            alpha_blend_op: BlendOp::Add,
            color_mask: ColorWriteMask::ALL,
        }
    }

    /// Plain depth/stencil attachment: load, store
    pub fn depth_stencil(format: TextureFormat) -> Self {
        Self {
            usage: AttachmentUsage::DepthStencil,
            ..Self::color(format)
        }
    }

    pub fn clears_on_load(&self) -> bool {
        self.load_op == LoadOp::Clear
    }

    pub fn resolves_on_store(&self) -> bool {
        self.store_op == StoreOp::StoreAndResolve
    }
}
