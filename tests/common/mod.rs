//! Shared test doubles for the device and shader seams, plus fixture
//! helpers. Each integration test binary pulls this in with `mod common`.
#![allow(dead_code)]

use museum::texture::Texture;
use museum::types::{
    BufferId, DecodedImage, RenderDevice, SamplerSettings, ShaderUniforms, TextureId,
};
use museum::vertex::Vertex;
use nalgebra_glm as glm;
use std::path::PathBuf;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes logging in a "once per test run" manner. Call at the start
/// of each test that needs logging.
pub fn init_tests() {
    INIT.call_once(|| {
        env_logger::init();
    });
}

/// Creates an empty scratch directory for one test's fixture files
pub fn fixture_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("museum-{}-{}", name, std::process::id()));
    if dir.exists() {
        std::fs::remove_dir_all(&dir).unwrap();
    }
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Records every device call so tests can assert on uploads and draws.
/// Handles are indices into the recorded vectors.
#[derive(Default)]
pub struct RecordingDevice {
    /// (had image data, sampler) per texture created
    pub texture_uploads: Vec<(bool, SamplerSettings)>,
    /// (vertex count, index count) per buffer created
    pub buffer_uploads: Vec<(usize, usize)>,
    /// (buffer, index count, texture ids) per draw
    pub draws: Vec<(BufferId, u32, Vec<TextureId>)>,
}

impl RenderDevice for RecordingDevice {
    fn create_texture(
        &mut self,
        image: Option<&DecodedImage>,
        sampler: &SamplerSettings,
    ) -> TextureId {
        self.texture_uploads.push((image.is_some(), *sampler));
        TextureId::try_from(self.texture_uploads.len() - 1).unwrap()
    }

    fn create_buffers(&mut self, vertices: &[Vertex], indices: &[u32]) -> BufferId {
        self.buffer_uploads.push((vertices.len(), indices.len()));
        BufferId::try_from(self.buffer_uploads.len() - 1).unwrap()
    }

    fn draw_mesh(&mut self, buffer: BufferId, index_count: u32, textures: &[Texture]) {
        self.draws
            .push((buffer, index_count, textures.iter().map(|t| t.id).collect()));
    }
}

/// Records every uniform write, keeping the latest value per name
#[derive(Default)]
pub struct RecordingShader {
    pub vec4s: Vec<(String, glm::Vec4)>,
    pub mat4s: Vec<(String, glm::Mat4)>,
    pub floats: Vec<(String, f32)>,
}

impl ShaderUniforms for RecordingShader {
    fn set_vec4(&mut self, name: &str, value: &glm::Vec4) {
        self.vec4s.push((name.to_owned(), *value));
    }

    fn set_mat4(&mut self, name: &str, value: &glm::Mat4) {
        self.mat4s.push((name.to_owned(), *value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.floats.push((name.to_owned(), value));
    }
}

impl RecordingShader {
    pub fn vec4(&self, name: &str) -> Option<&glm::Vec4> {
        self.vec4s
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn mat4(&self, name: &str) -> Option<&glm::Mat4> {
        self.mat4s
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn float(&self, name: &str) -> Option<f32> {
        self.floats
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }
}
