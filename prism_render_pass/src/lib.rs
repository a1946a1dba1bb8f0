/*!
# Prism Render Pass

Per-render-pass pipeline state for a scene renderer.

A `RenderPassState` holds the camera framing, pass-level shaders, AOV
bindings and fixed-function settings of one render pass, and turns them
into backend-agnostic descriptors. Backends never see the settings
directly: they consume the descriptors and the cache keys.

## Architecture

- **CameraFraming**: fallback matrices, viewport and clip planes, or a
  shared scene camera; memoized cull matrix
- **ShaderBinding**: render-pass shader and lighting shader (with fallback)
- **AttachmentBuilder**: AOV bindings to attachment descriptors
- **PipelineDescriptorBuilder**: graphics pipeline and graphics-commands
  descriptors
- **PipelineHasher**: 64-bit pipeline cache key, shader-set hash
- **LegacyStateBridge**: capture/apply/restore of immediate-mode state

Backends plug in through the `ResourceRegistry`, `RenderIndex` and
`LegacyGraphicsContext` traits.
*/

// Internal modules
mod error;
pub mod log;
pub mod render;
pub mod camera;
pub mod shader;
pub mod pass;

#[cfg(test)]
mod mock;

// Main prism namespace module
pub mod prism {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types and logger slot, macros live at crate root)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger, set_logger, reset_logger,
        };
    }

    // Backend-agnostic descriptors and backend interfaces
    pub mod render {
        pub use crate::render::*;
    }

    // Camera framing and frustum
    pub mod camera {
        pub use crate::camera::*;
    }

    // Pass-level and geometric shaders
    pub mod shader {
        pub use crate::shader::*;
    }

    // Render pass state and its builders
    pub mod pass {
        pub use crate::pass::*;
    }

    pub use crate::pass::RenderPassState;
}

// Re-export math library at crate root
pub use glam;
