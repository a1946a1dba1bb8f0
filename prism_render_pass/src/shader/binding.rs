/// ShaderBinding - the pass-level shaders of one render pass.
///
/// Holds the render-pass shader and the lighting shader. When no lighting
/// shader is bound a private fallback stands in, so consumers always see
/// an effective lighting shader. The geometric shader is not held here:
/// it is supplied per call by the draw batch.

use std::hash::{Hash, Hasher};
use std::sync::Arc;
use rustc_hash::FxHasher;
use super::shader_code::{ShaderCode, RenderPassShader, FallbackLightingShader};

#[derive(Debug, Clone)]
pub struct ShaderBinding {
    render_pass_shader: Arc<dyn ShaderCode>,
    lighting_shader: Option<Arc<dyn ShaderCode>>,
    fallback_lighting_shader: Arc<FallbackLightingShader>,
    use_scene_materials: bool,
}

impl Default for ShaderBinding {
    fn default() -> Self {
        Self {
            render_pass_shader: Arc::new(RenderPassShader::default()),
            lighting_shader: None,
            fallback_lighting_shader: Arc::new(FallbackLightingShader::new()),
            use_scene_materials: true,
        }
    }
}

impl ShaderBinding {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== SETTERS =====

    pub fn set_render_pass_shader(&mut self, shader: Arc<dyn ShaderCode>) {
        self.render_pass_shader = shader;
    }

    /// Bind a lighting shader, or `None` to fall back to the built-in one
    pub fn set_lighting_shader(&mut self, shader: Option<Arc<dyn ShaderCode>>) {
        self.lighting_shader = shader;
    }

    pub fn set_use_scene_materials(&mut self, use_scene_materials: bool) {
        self.use_scene_materials = use_scene_materials;
    }

    // ===== GETTERS =====

    pub fn render_pass_shader(&self) -> &Arc<dyn ShaderCode> {
        &self.render_pass_shader
    }

    /// The explicitly bound lighting shader, `None` when the fallback is used
    pub fn lighting_shader(&self) -> Option<&Arc<dyn ShaderCode>> {
        self.lighting_shader.as_ref()
    }

    /// Lighting shader in effect (bound shader or the fallback)
    pub fn effective_lighting_shader(&self) -> Arc<dyn ShaderCode> {
        match &self.lighting_shader {
            Some(shader) => Arc::clone(shader),
            None => self.fallback_lighting_shader.clone() as Arc<dyn ShaderCode>,
        }
    }

    pub fn uses_fallback_lighting(&self) -> bool {
        self.lighting_shader.is_none()
    }

    pub fn use_scene_materials(&self) -> bool {
        self.use_scene_materials
    }

    /// Pass-level shaders in program order: lighting, then render pass
    pub fn shaders(&self) -> Vec<Arc<dyn ShaderCode>> {
        vec![self.effective_lighting_shader(), Arc::clone(&self.render_pass_shader)]
    }

    /// Hash of the active shader set, for shader-program cache lookups
    ///
    /// Independent of fixed-function state. Binding a lighting shader
    /// whose code matches the fallback still changes the hash.
    pub fn shader_hash(&self) -> usize {
        let mut hasher = FxHasher::default();
        self.effective_lighting_shader().compute_hash().hash(&mut hasher);
        self.uses_fallback_lighting().hash(&mut hasher);
        self.render_pass_shader.compute_hash().hash(&mut hasher);
        hasher.finish() as usize
    }
}

#[cfg(test)]
#[path = "binding_tests.rs"]
mod tests;
