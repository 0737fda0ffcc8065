use crate::types::ShaderUniforms;
use nalgebra_glm as glm;
use serde::{Deserialize, Serialize};

/// Phong-style material colours pushed to the shader once per draw call
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub ambient: glm::Vec4,
    pub diffuse: glm::Vec4,
    pub specular: glm::Vec4,
    pub emission: glm::Vec4,
    pub shininess: f32,
}

impl Default for Material {
    // Fixed function pipeline defaults
    fn default() -> Self {
        Self {
            ambient: glm::vec4(0.2, 0.2, 0.2, 1.0),
            diffuse: glm::vec4(0.8, 0.8, 0.8, 1.0),
            specular: glm::vec4(0.0, 0.0, 0.0, 1.0),
            emission: glm::vec4(0.0, 0.0, 0.0, 1.0),
            shininess: 0.0,
        }
    }
}

impl Material {
    pub fn set(
        &mut self,
        ambient: glm::Vec4,
        diffuse: glm::Vec4,
        specular: glm::Vec4,
        emission: glm::Vec4,
        shininess: f32,
    ) {
        self.ambient = ambient;
        self.diffuse = diffuse;
        self.specular = specular;
        self.emission = emission;
        self.shininess = shininess;
    }

    /// Writes the `material.*` uniforms through the shader capability
    pub fn set_uniforms(&self, shader: &mut dyn ShaderUniforms) {
        shader.set_vec4("material.ambient", &self.ambient);
        shader.set_vec4("material.diffuse", &self.diffuse);
        shader.set_vec4("material.specular", &self.specular);
        shader.set_vec4("material.emission", &self.emission);
        shader.set_float("material.shininess", self.shininess);
    }
}
