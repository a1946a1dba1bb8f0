/// Mock backend objects for unit tests (no GPU or graphics context required)
///
/// Lets the render pass state be exercised end to end: buffer ranges keep
/// the bytes written to them, the legacy context keeps every value set on
/// it, and the registry can be told to fail.

use std::sync::{Arc, Mutex};
use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::prism_bail;
use crate::pass::{RenderIndex, RenderBufferTextures};
use crate::render::{
    BufferRange, BufferRangeDesc, ResourceRegistry, TextureHandle,
    LegacyGraphicsContext, LegacyBlendState, LegacyStencilState, PolygonOffset,
    StateToggles, ColorWriteMask, CompareOp, CullMode,
};

// ============================================================================
// Mock Buffer Range
// ============================================================================

#[derive(Debug)]
pub struct MockBufferRange {
    pub name: String,
    data: Mutex<Vec<u8>>,
}

impl MockBufferRange {
    pub fn new(name: String, size: u64) -> Self {
        Self {
            name,
            data: Mutex::new(vec![0; size as usize]),
        }
    }

    /// Copy of the range's current contents
    pub fn contents(&self) -> Vec<u8> {
        self.data.lock().unwrap().clone()
    }
}

impl BufferRange for MockBufferRange {
    fn size(&self) -> u64 {
        self.data.lock().unwrap().len() as u64
    }

    fn update(&self, offset: u64, data: &[u8]) -> Result<()> {
        let mut contents = self.data.lock().unwrap();
        let start = offset as usize;
        let end = start + data.len();
        if end > contents.len() {
            prism_bail!(
                "prism::MockBufferRange",
                "Update of {} bytes at offset {} overflows range '{}' ({} bytes)",
                data.len(), offset, self.name, contents.len()
            );
        }
        contents[start..end].copy_from_slice(data);
        Ok(())
    }
}

// ============================================================================
// Mock Resource Registry
// ============================================================================

#[derive(Debug, Default)]
pub struct MockResourceRegistry {
    /// Every successful allocation, oldest first
    pub ranges: Vec<Arc<MockBufferRange>>,
    /// Every request, successful or not
    pub requests: Vec<BufferRangeDesc>,
    /// Fail every allocation while set
    pub fail_allocations: bool,
}

impl MockResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_range(&self) -> Option<&Arc<MockBufferRange>> {
        self.ranges.last()
    }
}

impl ResourceRegistry for MockResourceRegistry {
    fn allocate_buffer_range(&mut self, desc: BufferRangeDesc) -> Result<Arc<dyn BufferRange>> {
        self.requests.push(desc.clone());
        if self.fail_allocations {
            prism_bail!("prism::MockResourceRegistry", "Out of buffer space for '{}'", desc.name);
        }

        let range = Arc::new(MockBufferRange::new(desc.name, desc.size));
        self.ranges.push(Arc::clone(&range));
        Ok(range)
    }
}

// ============================================================================
// Mock Render Index
// ============================================================================

#[derive(Debug, Default)]
pub struct MockRenderIndex {
    buffers: FxHashMap<u64, RenderBufferTextures>,
}

impl MockRenderIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a render buffer backed by texture `id` (and `id + 1000`
    /// as resolve target when `with_resolve` is set)
    pub fn insert(&mut self, render_buffer_id: u64, with_resolve: bool) {
        self.buffers.insert(render_buffer_id, RenderBufferTextures {
            texture: TextureHandle(render_buffer_id),
            resolve_texture: with_resolve.then_some(TextureHandle(render_buffer_id + 1000)),
        });
    }
}

impl RenderIndex for MockRenderIndex {
    fn render_buffer(&self, render_buffer_id: u64) -> Option<RenderBufferTextures> {
        self.buffers.get(&render_buffer_id).copied()
    }
}

// ============================================================================
// Mock Legacy Graphics Context
// ============================================================================

/// Immediate-mode context that stores every value set on it
#[derive(Debug, Clone, PartialEq)]
pub struct MockLegacyContext {
    pub enabled: StateToggles,
    pub blend_states: FxHashMap<u32, LegacyBlendState>,
    pub blend_constant_color: [f32; 4],
    pub color_masks: FxHashMap<u32, ColorWriteMask>,
    pub polygon_offset: PolygonOffset,
    pub cull_face: CullMode,
    pub depth_func: CompareOp,
    pub depth_mask: bool,
    pub line_width: f32,
    pub stencil: LegacyStencilState,
    /// Toggles passed to `set_enabled`, in call order
    pub toggle_writes: Vec<StateToggles>,
}

impl Default for MockLegacyContext {
    fn default() -> Self {
        Self {
            enabled: StateToggles::DEPTH_TEST,
            blend_states: FxHashMap::default(),
            blend_constant_color: [0.0; 4],
            color_masks: FxHashMap::default(),
            polygon_offset: PolygonOffset::default(),
            cull_face: CullMode::Back,
            depth_func: CompareOp::Less,
            depth_mask: true,
            line_width: 1.0,
            stencil: LegacyStencilState::default(),
            toggle_writes: Vec::new(),
        }
    }
}

impl MockLegacyContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context state without the write log, for before/after comparisons
    pub fn snapshot(&self) -> Self {
        Self {
            toggle_writes: Vec::new(),
            ..self.clone()
        }
    }
}

impl LegacyGraphicsContext for MockLegacyContext {
    fn is_enabled(&self, toggle: StateToggles) -> bool {
        self.enabled.contains(toggle)
    }

    fn set_enabled(&mut self, toggle: StateToggles, enabled: bool) {
        self.toggle_writes.push(toggle);
        self.enabled.set(toggle, enabled);
    }

    fn blend_state(&self, attachment: u32) -> LegacyBlendState {
        self.blend_states.get(&attachment).copied().unwrap_or_default()
    }

    fn set_blend_state(&mut self, attachment: u32, state: LegacyBlendState) {
        // Defaults are not stored so that restored state compares equal
        if state == LegacyBlendState::default() {
            self.blend_states.remove(&attachment);
        } else {
            self.blend_states.insert(attachment, state);
        }
    }

    fn blend_constant_color(&self) -> [f32; 4] {
        self.blend_constant_color
    }

    fn set_blend_constant_color(&mut self, color: [f32; 4]) {
        self.blend_constant_color = color;
    }

    fn color_mask(&self, attachment: u32) -> ColorWriteMask {
        self.color_masks.get(&attachment).copied().unwrap_or(ColorWriteMask::ALL)
    }

    fn set_color_mask(&mut self, attachment: u32, mask: ColorWriteMask) {
        if mask == ColorWriteMask::ALL {
            self.color_masks.remove(&attachment);
        } else {
            self.color_masks.insert(attachment, mask);
        }
    }

    fn polygon_offset(&self) -> PolygonOffset {
        self.polygon_offset
    }

    fn set_polygon_offset(&mut self, offset: PolygonOffset) {
        self.polygon_offset = offset;
    }

    fn cull_face(&self) -> CullMode {
        self.cull_face
    }

    fn set_cull_face(&mut self, face: CullMode) {
        self.cull_face = face;
    }

    fn depth_func(&self) -> CompareOp {
        self.depth_func
    }

    fn set_depth_func(&mut self, func: CompareOp) {
        self.depth_func = func;
    }

    fn depth_mask(&self) -> bool {
        self.depth_mask
    }

    fn set_depth_mask(&mut self, write: bool) {
        self.depth_mask = write;
    }

    fn line_width(&self) -> f32 {
        self.line_width
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn stencil_state(&self) -> LegacyStencilState {
        self.stencil
    }

    fn set_stencil_state(&mut self, state: LegacyStencilState) {
        self.stencil = state;
    }
}
