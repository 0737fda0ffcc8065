use crate::texture::Texture;
use crate::vertex::Vertex;
use nalgebra_glm as glm;

/// Opaque GPU texture handle
pub type TextureId = u32;

/// Opaque GPU vertex/index buffer handle
pub type BufferId = u32;

/// 8-bit RGB image data ready for upload, rows top to bottom
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WrapMode {
    Repeat,
    ClampToEdge,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MinFilter {
    Nearest,
    Linear,
    LinearMipmapLinear,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MagFilter {
    Nearest,
    Linear,
}

/// Sampling state requested when a texture is created
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SamplerSettings {
    pub wrap_s: WrapMode,
    pub wrap_t: WrapMode,
    pub min_filter: MinFilter,
    pub mag_filter: MagFilter,
    pub mipmaps: bool,
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self {
            wrap_s: WrapMode::Repeat,
            wrap_t: WrapMode::Repeat,
            min_filter: MinFilter::LinearMipmapLinear,
            mag_filter: MagFilter::Linear,
            mipmaps: true,
        }
    }
}

/// Narrow uniform-setting capability implemented by any shader backend.
/// The identity of the currently bound program is the caller's concern.
pub trait ShaderUniforms {
    fn set_vec4(&mut self, name: &str, value: &glm::Vec4);
    fn set_mat4(&mut self, name: &str, value: &glm::Mat4);
    fn set_float(&mut self, name: &str, value: f32);
}

/// The seam to the graphics backend. All calls must be made from the thread
/// owning the graphics context; nothing here guards against anything else.
/// Created resources live for the rest of the process.
pub trait RenderDevice {
    /// Creates a texture object. `None` image data still produces a valid
    /// handle, bound to nothing.
    fn create_texture(
        &mut self,
        image: Option<&DecodedImage>,
        sampler: &SamplerSettings,
    ) -> TextureId;

    /// Creates the vertex and index buffers for one mesh.
    fn create_buffers(&mut self, vertices: &[Vertex], indices: &[u32]) -> BufferId;

    /// Draws an indexed triangle list with the given textures bound.
    fn draw_mesh(&mut self, buffer: BufferId, index_count: u32, textures: &[Texture]);
}

/// Trait for camera matrices, needed for rendering
pub trait CameraTrait {
    fn view_matrix(&self) -> glm::Mat4;
    fn proj_matrix(&self) -> glm::Mat4;
}
