use crate::bounds::Extent;
use crate::material::Material;
use crate::mesh::Mesh;
use crate::mesh_import::{gltf_file, obj_file, ImportOptions};
use crate::mu_error::MuError;
use crate::texture::Manager as TextureManager;
use crate::transform::TransformStack;
use crate::types::{RenderDevice, ShaderUniforms};
use log::error;
use nalgebra_glm as glm;
use std::path::{Path, PathBuf};

/// A loaded model: a flat mesh list, the texture cache those meshes alias
/// into, one material, and the accumulated transforms. Loading auto-centers
/// the model at the origin and scales its largest dimension to unit length.
pub struct Model {
    meshes: Vec<Mesh>,
    textures: TextureManager,
    material: Material,
    transform: TransformStack,
    directory: PathBuf,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    #[must_use]
    pub fn new() -> Self {
        Self {
            meshes: Vec::new(),
            textures: TextureManager::new(),
            material: Material::default(),
            transform: TransformStack::new(),
            directory: PathBuf::new(),
        }
    }

    /// Convenience constructor that loads right away
    #[must_use]
    pub fn from_file(
        path: impl AsRef<Path>,
        options: &ImportOptions,
        device: &mut dyn RenderDevice,
    ) -> Self {
        let mut model = Self::new();
        model.load(path, options, device);
        model
    }

    /// Loads an asset file, replacing any previous content. Transforms are
    /// reset to identity first. A failed import is logged and leaves the
    /// model empty; it is never fatal.
    pub fn load(
        &mut self,
        path: impl AsRef<Path>,
        options: &ImportOptions,
        device: &mut dyn RenderDevice,
    ) {
        let path = path.as_ref();
        self.transform.reset();
        self.meshes.clear();
        self.directory = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();

        let mut bounds = Extent::new();
        match import(path, options, &mut bounds, &mut self.textures, device) {
            Ok(meshes) => self.meshes = meshes,
            Err(e) => {
                error!("Import of {} failed: {e}", path.display());
                return;
            }
        }

        // Fit the largest dimension into a unit frame, then pull the scaled
        // box center back to the origin
        let (scale, offset) = bounds.normalizing_transform();
        self.transform.scale(&scale);
        self.transform.translate(&offset);
    }

    /// Draws every mesh in list order. Material colours and the
    /// view/modelview/projection matrices are written first through the
    /// shader capability; which shader program they land in is the
    /// caller's responsibility.
    pub fn draw(
        &self,
        shader: &mut dyn ShaderUniforms,
        device: &mut dyn RenderDevice,
        view: &glm::Mat4,
        projection: &glm::Mat4,
    ) {
        let model = self.transform.matrix();
        self.material.set_uniforms(shader);
        shader.set_mat4("view", view);
        shader.set_mat4("modelview", &(view * model));
        shader.set_mat4("projection", projection);
        for mesh in &self.meshes {
            mesh.draw(device);
        }
    }

    pub fn translate(&mut self, offset: &glm::Vec3) {
        self.transform.translate(offset);
    }

    pub fn rotate(&mut self, degrees: f32, axis: &glm::Vec3) {
        self.transform.rotate(degrees, axis);
    }

    pub fn scale(&mut self, factors: &glm::Vec3) {
        self.transform.scale(factors);
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    #[must_use]
    pub const fn material(&self) -> &Material {
        &self.material
    }

    #[must_use]
    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    /// Composed model matrix as applied at draw time
    #[must_use]
    pub fn model_matrix(&self) -> glm::Mat4 {
        self.transform.matrix()
    }

    /// Number of distinct textures uploaded for this model
    #[must_use]
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Directory of the asset file, used to resolve relative texture paths
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

// Assume that files ending with ".obj" are OBJ format and anything else is
// glTF.
fn import(
    path: &Path,
    options: &ImportOptions,
    bounds: &mut Extent,
    textures: &mut TextureManager,
    device: &mut dyn RenderDevice,
) -> Result<Vec<Mesh>, MuError> {
    if let Some(ext) = path.extension() {
        if ext.to_ascii_lowercase() == "obj" {
            obj_file::load(path, options, bounds, textures, device)
        } else {
            gltf_file::load(path, options, bounds, textures, device)
        }
    } else {
        gltf_file::load(path, options, bounds, textures, device)
    }
}
