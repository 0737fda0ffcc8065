use super::types::{ImportError, ImportOptions};
use crate::bounds::Extent;
use crate::mesh::Mesh;
use crate::mu_error::MuError;
use crate::texture::{Manager as TextureManager, Texture, TextureKind};
use crate::types::RenderDevice;
use crate::vertex::Vertex;
use gltf::{
    buffer,
    image::Source,
    mesh::util::{ReadNormals, ReadPositions},
    mesh::Mode,
    Document, Gltf, Node, Primitive,
};
use log::{info, warn};
use nalgebra_glm as glm;
use smallvec::SmallVec;
use std::{fs, io, path::Path};

fn load_impl(path: &Path) -> Result<(Document, Vec<buffer::Data>), MuError> {
    let base = path.parent().unwrap_or_else(|| Path::new("./"));
    let file = fs::File::open(path).map_err(MuError::StdIoError)?;
    let reader = io::BufReader::new(file);
    let gltf = Gltf::from_reader(reader).map_err(|e| MuError::GltfError(Box::new(e)))?;
    let buffers = gltf::import_buffers(&gltf.document, Some(base), gltf.blob)
        .map_err(|e| MuError::GltfError(Box::new(e)))?;

    info!(
        "{:?}, base path={:?}, buffer count={}",
        path,
        base,
        buffers.len(),
    );

    Ok((gltf.document, buffers))
}

/// Load a glTF file into a flat mesh list. Nodes are visited depth first,
/// parent before children, siblings in declaration order, so the result is
/// deterministic. Node transforms are not applied. Only separate-texture
/// files are supported; embedded images are skipped with a warning.
///
/// # Errors
/// May return `MuError`
pub fn load(
    path: &Path,
    options: &ImportOptions,
    bounds: &mut Extent,
    textures: &mut TextureManager,
    device: &mut dyn RenderDevice,
) -> Result<Vec<Mesh>, MuError> {
    let (document, buffers) = load_impl(path)?;
    let base_path = path.parent().unwrap_or_else(|| Path::new("."));

    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or(ImportError::NoScene)?;

    let mut meshes = Vec::new();
    for node in scene.nodes() {
        process_node(
            &node, &buffers, options, base_path, bounds, textures, device, &mut meshes,
        )?;
    }
    info!("Loaded {} meshes", meshes.len());
    Ok(meshes)
}

/// Recursive node tree traversal
#[allow(clippy::too_many_arguments)]
fn process_node(
    node: &Node,
    buffers: &[buffer::Data],
    options: &ImportOptions,
    base_path: &Path,
    bounds: &mut Extent,
    textures: &mut TextureManager,
    device: &mut dyn RenderDevice,
    meshes: &mut Vec<Mesh>,
) -> Result<(), MuError> {
    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            meshes.push(build_primitive(
                &primitive, buffers, options, base_path, bounds, textures, device,
            )?);
        }
    }
    for child in node.children() {
        process_node(
            &child, buffers, options, base_path, bounds, textures, device, meshes,
        )?;
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn build_primitive(
    primitive: &Primitive,
    buffers: &[buffer::Data],
    options: &ImportOptions,
    base_path: &Path,
    bounds: &mut Extent,
    textures: &mut TextureManager,
    device: &mut dyn RenderDevice,
) -> Result<Mesh, MuError> {
    // Mesh must be made of indexed triangles
    if primitive.mode() != Mode::Triangles {
        Err(ImportError::NoTriangles)?;
    }
    let reader = primitive.reader(|x| Some(&buffers[x.index()]));

    // The index list is kept verbatim as a flat triangle list
    let indices: Vec<u32> = reader
        .read_indices()
        .ok_or(ImportError::NoIndices)?
        .into_u32()
        .collect();

    let pos_data = reader.read_positions().ok_or(ImportError::NoPositions)?;
    let ReadPositions::Standard(pos_it) = pos_data else {
        warn!("Unsupported sparse position format");
        return Err(ImportError::SparseMesh.into());
    };
    let positions: Vec<[f32; 3]> = pos_it.collect();

    let norm_data = reader.read_normals().ok_or(ImportError::NoNormals)?;
    let ReadNormals::Standard(norm_it) = norm_data else {
        warn!("Unsupported sparse normal format");
        return Err(ImportError::SparseMesh.into());
    };
    let normals: Vec<[f32; 3]> = norm_it.collect();
    if normals.len() != positions.len() {
        return Err(ImportError::CountMismatch.into());
    }

    // Texture coordinates are optional; missing ones default to (0, 0)
    let uvs: Vec<[f32; 2]> = reader
        .read_tex_coords(0)
        .map(|uv| uv.into_f32().collect())
        .unwrap_or_default();

    let mut vertices = Vec::with_capacity(positions.len());
    for (i, (position, normal)) in positions.iter().zip(&normals).enumerate() {
        let position = glm::vec3(position[0], position[1], position[2]);
        // The raw positions drive the auto-centering pass
        bounds.update(&position);
        let uv = uvs.get(i).copied().unwrap_or([0.0_f32, 0.0_f32]);
        vertices.push(Vertex {
            position: position.into(),
            normal: glm::normalize(&glm::Vec3::from(*normal)).into(),
            tex_coord: [
                uv[0],
                if options.flip_uv { 1.0 - uv[1] } else { uv[1] },
            ],
        });
    }

    let mesh_textures = primitive_textures(primitive, base_path, textures, device);
    Ok(Mesh::new(vertices, indices, mesh_textures, device))
}

/// The PBR base colour map stands in for the diffuse channel. glTF has no
/// classic specular map without extensions, so none is loaded.
fn primitive_textures(
    primitive: &Primitive,
    base_path: &Path,
    textures: &mut TextureManager,
    device: &mut dyn RenderDevice,
) -> SmallVec<[Texture; 2]> {
    let mut ret = SmallVec::new();
    let pbr = primitive.material().pbr_metallic_roughness();
    if let Some(tex) = pbr.base_color_texture() {
        match tex.texture().source().source() {
            Source::Uri { uri, .. } => {
                ret.push(textures.load(uri, TextureKind::Diffuse, base_path, device));
            }
            Source::View { .. } => {
                warn!("Embedded glTF images are not supported");
            }
        }
    }
    ret
}
