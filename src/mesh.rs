use crate::texture::Texture;
use crate::types::{BufferId, RenderDevice};
use crate::vertex::Vertex;
use smallvec::SmallVec;

/// One renderable piece of a model: vertex and index data plus the textures
/// sampled when drawing it. The device buffers are created at construction,
/// on the calling thread, and live for the rest of the process.
pub struct Mesh {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    textures: SmallVec<[Texture; 2]>,
    buffer: BufferId,
}

impl Mesh {
    #[must_use]
    pub fn new(
        vertices: Vec<Vertex>,
        indices: Vec<u32>,
        textures: SmallVec<[Texture; 2]>,
        device: &mut dyn RenderDevice,
    ) -> Self {
        let buffer = device.create_buffers(&vertices, &indices);
        Self {
            vertices,
            indices,
            textures,
            buffer,
        }
    }

    /// Draws the mesh with its textures bound
    #[allow(clippy::cast_possible_truncation)]
    pub fn draw(&self, device: &mut dyn RenderDevice) {
        device.draw_mesh(self.buffer, self.indices.len() as u32, &self.textures);
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[must_use]
    pub fn textures(&self) -> &[Texture] {
        &self.textures
    }
}
