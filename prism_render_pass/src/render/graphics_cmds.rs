/// Graphics commands descriptor - what a render encoder needs to open a pass

use crate::render::{AttachmentDesc, TextureHandle};

/// Descriptor for opening a render encoder
///
/// Describes the textures the pass renders into, independent of any
/// pipeline object. Attachment descriptors and textures are parallel
/// arrays in AOV binding order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphicsCmdsDesc {
    /// Color attachment descriptors
    pub color_attachment_descs: Vec<AttachmentDesc>,
    /// Color textures (`None` = default framebuffer)
    pub color_textures: Vec<Option<TextureHandle>>,
    /// Single-sample resolve targets, parallel to `color_textures`
    /// (`None` = this attachment does not resolve)
    pub color_resolve_textures: Vec<Option<TextureHandle>>,
    /// Depth/stencil attachment descriptor
    pub depth_attachment_desc: Option<AttachmentDesc>,
    /// Depth/stencil texture
    pub depth_texture: Option<TextureHandle>,
    /// Depth resolve target
    pub depth_resolve_texture: Option<TextureHandle>,
}

impl GraphicsCmdsDesc {
    /// Whether any attachment resolves at the end of the pass
    pub fn has_resolve(&self) -> bool {
        self.color_resolve_textures.iter().any(Option::is_some) || self.depth_resolve_texture.is_some()
    }

    /// Total number of attachments (color + depth)
    pub fn attachment_count(&self) -> usize {
        self.color_attachment_descs.len() + usize::from(self.depth_attachment_desc.is_some())
    }
}
