/// Texture formats and handles referenced by attachment descriptors

/// Texture pixel format
///
/// `Invalid` marks an AOV binding whose render buffer has not been
/// allocated yet; such bindings never produce an attachment.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    Invalid,

    // Color formats
    R8_UNORM,
    R8G8B8A8_UNORM,
    R8G8B8A8_SRGB,
    B8G8R8A8_UNORM,
    R16G16B16A16_SFLOAT,
    R32_SFLOAT,
    R32G32B32A32_SFLOAT,
    R32_SINT,

    // Depth/stencil formats
    D16_UNORM,
    D32_FLOAT,
    D24_UNORM_S8_UINT,
    D32_FLOAT_S8_UINT,
}

impl TextureFormat {
    /// Whether this format is written through the depth/stencil attachment
    pub fn is_depth_stencil(&self) -> bool {
        matches!(
            self,
            TextureFormat::D16_UNORM
                | TextureFormat::D32_FLOAT
                | TextureFormat::D24_UNORM_S8_UINT
                | TextureFormat::D32_FLOAT_S8_UINT
        )
    }

    /// Whether this format carries a stencil component
    pub fn has_stencil(&self) -> bool {
        matches!(
            self,
            TextureFormat::D24_UNORM_S8_UINT | TextureFormat::D32_FLOAT_S8_UINT
        )
    }

    pub fn is_valid(&self) -> bool {
        *self != TextureFormat::Invalid
    }
}

/// Attachment usage within a render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentUsage {
    /// Color render target
    Color,
    /// Depth (and optionally stencil) render target
    DepthStencil,
}

/// Opaque handle to a backend texture
///
/// The render index hands these out; this crate never dereferences them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);
