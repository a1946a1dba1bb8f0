/// Render module - backend-agnostic descriptor types and backend interfaces

// Module declarations
pub mod texture;
pub mod pipeline;
pub mod attachment;
pub mod graphics_cmds;
pub mod buffer;
pub mod capabilities;
pub mod legacy_context;

// Re-export everything
pub use texture::*;
pub use pipeline::*;
pub use attachment::*;
pub use graphics_cmds::*;
pub use buffer::*;
pub use capabilities::*;
pub use legacy_context::*;
