/// AOV bindings and the render index that resolves them to textures

use crate::render::{TextureFormat, TextureHandle, ClearValue};

/// One arbitrary output variable (AOV) rendered by the pass
#[derive(Debug, Clone, PartialEq)]
pub struct AovBinding {
    /// AOV name ("color", "depth", "primId", ...)
    pub aov_name: String,
    /// Render buffer the AOV is written into
    pub render_buffer_id: u64,
    pub format: TextureFormat,
    /// Declared sample count of the render buffer
    pub sample_count: u32,
    /// Clear the buffer to this value when the pass begins
    pub clear_value: Option<ClearValue>,
}

impl AovBinding {
    pub fn new(
        aov_name: impl Into<String>,
        render_buffer_id: u64,
        format: TextureFormat,
        sample_count: u32,
    ) -> Self {
        Self {
            aov_name: aov_name.into(),
            render_buffer_id,
            format,
            sample_count,
            clear_value: None,
        }
    }

    pub fn with_clear_value(mut self, clear_value: ClearValue) -> Self {
        self.clear_value = Some(clear_value);
        self
    }

    /// A binding with an invalid format or no samples cannot be rendered
    pub fn is_valid(&self) -> bool {
        self.format.is_valid() && self.sample_count > 0
    }

    pub fn is_depth(&self) -> bool {
        self.format.is_depth_stencil()
    }

    pub fn is_multisampled(&self) -> bool {
        self.sample_count > 1
    }
}

/// Textures backing one render buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderBufferTextures {
    /// Texture rendered into (multisampled when the buffer is)
    pub texture: TextureHandle,
    /// Single-sample resolve target, present for multisampled buffers
    pub resolve_texture: Option<TextureHandle>,
}

/// Lookup of render buffers by id
///
/// Supplied by the caller when building graphics-commands descriptors.
pub trait RenderIndex {
    fn render_buffer(&self, render_buffer_id: u64) -> Option<RenderBufferTextures>;
}
