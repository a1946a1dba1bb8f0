/// ShaderCode trait and the built-in pass-level shaders

use std::hash::{Hash, Hasher};
use rustc_hash::FxHasher;

/// A shader snippet contributing to the pass's shader program
///
/// Implemented by the renderer's shader types. Shared between the render
/// pass state and the renderer through `Arc<dyn ShaderCode>`; the shader
/// lives as long as any holder references it.
pub trait ShaderCode: Send + Sync + std::fmt::Debug {
    /// Debug name
    fn name(&self) -> &str;

    /// Hash identifying the shader's source and configuration
    ///
    /// Two shaders with equal hashes are assumed to produce the same
    /// program code.
    fn compute_hash(&self) -> u64;
}

fn hash_source(name: &str, sources: &[String]) -> u64 {
    let mut hasher = FxHasher::default();
    name.hash(&mut hasher);
    sources.hash(&mut hasher);
    hasher.finish()
}

// ===== RENDER PASS SHADER =====

/// Shader snippet configured per render pass (selection, id render, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPassShader {
    name: String,
    sources: Vec<String>,
}

impl RenderPassShader {
    pub fn new(name: impl Into<String>, sources: Vec<String>) -> Self {
        Self {
            name: name.into(),
            sources,
        }
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }
}

impl Default for RenderPassShader {
    fn default() -> Self {
        Self::new("renderPass", vec!["RenderPass.NoSelection".to_string()])
    }
}

impl ShaderCode for RenderPassShader {
    fn name(&self) -> &str {
        &self.name
    }

    fn compute_hash(&self) -> u64 {
        hash_source(&self.name, &self.sources)
    }
}

// ===== FALLBACK LIGHTING SHADER =====

/// Lighting shader used when no lighting shader is bound
///
/// Private to each render pass state. Never exposed as "unset": the
/// binding always reports an effective lighting shader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackLightingShader {
    sources: Vec<String>,
}

impl FallbackLightingShader {
    pub const NAME: &'static str = "fallbackLighting";

    pub fn new() -> Self {
        Self {
            sources: vec!["Lighting.Fallback".to_string()],
        }
    }
}

impl Default for FallbackLightingShader {
    fn default() -> Self {
        Self::new()
    }
}

impl ShaderCode for FallbackLightingShader {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn compute_hash(&self) -> u64 {
        hash_source(Self::NAME, &self.sources)
    }
}
