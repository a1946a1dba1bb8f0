//! Shader module - pass-level shader references and the per-call geometric shader.

mod shader_code;
mod binding;
mod geometric;

pub use shader_code::{ShaderCode, RenderPassShader, FallbackLightingShader};
pub use binding::ShaderBinding;
pub use geometric::{GeometricShader, GeometricSignature, PrimitiveType, CullStyle};
