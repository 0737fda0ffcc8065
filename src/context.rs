use crate::camera::{Camera, CameraProperties};
use crate::config::ModelConfig;
use crate::model::Model;
use crate::types::{CameraTrait, RenderDevice, ShaderUniforms};

/// Everything the render loop needs, owned in one place and passed
/// explicitly. There is no global state.
pub struct ViewerContext {
    pub camera: Camera,
    pub model: Model,
}

impl ViewerContext {
    /// Builds a context from a parsed config, loading the model through the
    /// device. A model that fails to import comes back empty and simply
    /// draws nothing.
    #[must_use]
    pub fn new(config: &ModelConfig, device: &mut dyn RenderDevice) -> Self {
        Self::with_camera(config, CameraProperties::default(), device)
    }

    #[must_use]
    pub fn with_camera(
        config: &ModelConfig,
        properties: CameraProperties,
        device: &mut dyn RenderDevice,
    ) -> Self {
        let mut model = Model::new();
        model.load(&config.file, &config.import, device);
        model.set_material(config.material.clone());
        Self {
            camera: Camera::new(properties),
            model,
        }
    }

    /// Draws the model with the context's camera
    pub fn render(&self, shader: &mut dyn ShaderUniforms, device: &mut dyn RenderDevice) {
        self.model.draw(
            shader,
            device,
            &self.camera.view_matrix(),
            &self.camera.proj_matrix(),
        );
    }
}
