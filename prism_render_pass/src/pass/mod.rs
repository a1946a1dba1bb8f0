//! Pass module - per-render-pass pipeline state.
//!
//! `RenderPassState` is the entry point. The other modules are the
//! builders it delegates to and are public for backends that build
//! descriptors from their own state.

pub mod settings;
pub mod aov;
pub mod attachment_builder;
pub mod pipeline_builder;
pub mod pipeline_hasher;
pub mod legacy_bridge;
pub mod uniforms;
mod render_pass_state;

pub use settings::{
    PassSettings, AlphaMaskPolicy, default_alpha_mask_policy,
    DepthSettings, StencilSettings, BlendSettings, PassColors,
};
pub use aov::{AovBinding, RenderIndex, RenderBufferTextures};
pub use attachment_builder::{BuiltAttachment, BuiltAttachments, DEFAULT_COLOR_FORMAT};
pub use pipeline_builder::PipelineInputs;
pub use legacy_bridge::{LegacyStateBridge, LegacyBridgeState, LegacySnapshot};
pub use uniforms::RenderPassUniforms;
pub use render_pass_state::RenderPassState;
