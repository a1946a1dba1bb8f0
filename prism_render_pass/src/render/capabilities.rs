/// Backend capability queries for fixed-function state

use bitflags::bitflags;

bitflags! {
    /// Fixed-function toggles a backend may expose
    ///
    /// Each flag names one enable/disable switch of an immediate-mode
    /// backend (blend, face culling, depth test, ...).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StateToggles: u32 {
        const BLEND                    = 1 << 0;
        const CULL_FACE                = 1 << 1;
        const POLYGON_OFFSET_FILL      = 1 << 2;
        const PROGRAM_POINT_SIZE       = 1 << 3;
        const SAMPLE_ALPHA_TO_COVERAGE = 1 << 4;
        const SAMPLE_ALPHA_TO_ONE      = 1 << 5;
        const DEPTH_TEST               = 1 << 6;
        const STENCIL_TEST             = 1 << 7;
        const DEPTH_CLAMP              = 1 << 8;
        const CONSERVATIVE_RASTER      = 1 << 9;
    }
}

/// Capabilities of the active graphics backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphicsCapabilities {
    /// Toggles that exist on this backend
    pub toggles: StateToggles,
    /// Blend and color mask can be set per attachment
    pub indexed_attachment_state: bool,
    /// Maximum simultaneous color attachments
    pub max_draw_buffers: u32,
}

impl GraphicsCapabilities {
    /// A backend that supports every toggle and per-attachment state
    pub fn full() -> Self {
        Self {
            toggles: StateToggles::all(),
            indexed_attachment_state: true,
            max_draw_buffers: 8,
        }
    }

    pub fn supports(&self, toggle: StateToggles) -> bool {
        self.toggles.contains(toggle)
    }
}

impl Default for GraphicsCapabilities {
    fn default() -> Self {
        Self {
            toggles: StateToggles::BLEND
                | StateToggles::CULL_FACE
                | StateToggles::POLYGON_OFFSET_FILL
                | StateToggles::PROGRAM_POINT_SIZE
                | StateToggles::SAMPLE_ALPHA_TO_COVERAGE
                | StateToggles::SAMPLE_ALPHA_TO_ONE
                | StateToggles::DEPTH_TEST
                | StateToggles::STENCIL_TEST,
            indexed_attachment_state: false,
            max_draw_buffers: 1,
        }
    }
}
