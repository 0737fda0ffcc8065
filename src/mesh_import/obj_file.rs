use std::path::Path;

use super::types::ImportOptions;
use super::util;
use crate::bounds::Extent;
use crate::mesh::Mesh;
use crate::mesh_import::ImportError;
use crate::mu_error::MuError;
use crate::texture::{Manager as TextureManager, Texture, TextureKind};
use crate::types::RenderDevice;
use crate::vertex::Vertex;
use nalgebra_glm as glm;
use smallvec::SmallVec;

#[allow(unused_imports)]
use log::{debug, info, warn};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Load a Wavefront OBJ format object from an .obj file. Loads the file
/// into memory and calls `process_obj`. You may call that directly if
/// you've loaded or generated OBJ data some other way.
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
    let load_result = tobj::load_obj(path, &tobj::GPU_LOAD_OPTIONS);
    let base_path = path.parent().unwrap_or_else(|| Path::new("."));
    process_obj(base_path, options, load_result, bounds, textures, device)
}

/// Process loaded Wavefront OBJ format data. Called by `load` or can be
/// used with OBJ data loaded or generated some other way. The load options
/// must have produced a single-index triangle list.
///
/// # Errors
/// May return `MuError`
pub fn process_obj(
    base_path: &Path,
    options: &ImportOptions,
    load_result: tobj::LoadResult,
    bounds: &mut Extent,
    textures: &mut TextureManager,
    device: &mut dyn RenderDevice,
) -> Result<Vec<Mesh>, MuError> {
    let (tobj_models, tobj_materials) = load_result?;
    info!("Found {} meshes", tobj_models.len());

    // A missing material library leaves the meshes untextured but is not
    // an import failure
    let materials = tobj_materials.unwrap_or_else(|e| {
        warn!("Material library could not be loaded: {e}");
        Vec::new()
    });

    let flip_uv = options.flip_uv;
    let mut meshes = Vec::new();
    for m in &tobj_models {
        let mesh = &m.mesh;
        let has_normals = !mesh.normals.is_empty();
        if has_normals && (mesh.positions.len() != mesh.normals.len()) {
            Err(ImportError::CountMismatch)?;
        }
        let pos_count = mesh.positions.len() / 3;
        let has_uv = !mesh.texcoords.is_empty();
        info!(
            "Mesh vertices={}, triangles={}, has_normals={}, has_uv={}",
            pos_count,
            mesh.indices.len() / 3,
            has_normals,
            has_uv,
        );

        // Collect data into the output vertex format, renormalizing the
        // file's normals against exporter precision drift
        #[cfg(feature = "rayon")]
        let it = (0..pos_count).into_par_iter();
        #[cfg(not(feature = "rayon"))]
        let it = 0..pos_count;
        let mut vertices: Vec<Vertex> = it
            .map(|v| Vertex {
                position: [
                    mesh.positions[v * 3],
                    mesh.positions[v * 3 + 1],
                    mesh.positions[v * 3 + 2],
                ],
                normal: if has_normals {
                    glm::normalize(&glm::vec3(
                        mesh.normals[v * 3],
                        mesh.normals[v * 3 + 1],
                        mesh.normals[v * 3 + 2],
                    ))
                    .into()
                } else {
                    [0.0_f32; 3]
                },
                tex_coord: if has_uv {
                    let v_coord = mesh.texcoords[v * 2 + 1];
                    [
                        mesh.texcoords[v * 2],
                        if flip_uv { 1.0 - v_coord } else { v_coord },
                    ]
                } else {
                    [0.0_f32, 0.0_f32]
                },
            })
            .collect();

        if !has_normals {
            warn!("Missing normals are being calculated and might be wrong");
            util::calculate_normals(&mesh.indices, &mut vertices);
        }

        // The raw positions drive the auto-centering pass
        for vertex in &vertices {
            bounds.update(&glm::Vec3::from(vertex.position));
        }

        // The index list is already a flat triangle list and is kept
        // verbatim
        let indices = mesh.indices.clone();

        let mesh_textures =
            material_textures(mesh.material_id, &materials, base_path, textures, device);

        meshes.push(Mesh::new(vertices, indices, mesh_textures, device));
    }
    Ok(meshes)
}

/// Resolves the diffuse and specular maps of the mesh's material through
/// the texture cache. tobj stores missing maps as empty strings.
fn material_textures(
    material_id: Option<usize>,
    materials: &[tobj::Material],
    base_path: &Path,
    textures: &mut TextureManager,
    device: &mut dyn RenderDevice,
) -> SmallVec<[Texture; 2]> {
    let mut ret = SmallVec::new();
    let Some(material) = material_id.and_then(|id| materials.get(id)) else {
        return ret;
    };
    if !material.diffuse_texture.is_empty() {
        ret.push(textures.load(
            &material.diffuse_texture,
            TextureKind::Diffuse,
            base_path,
            device,
        ));
    }
    if !material.specular_texture.is_empty() {
        ret.push(textures.load(
            &material.specular_texture,
            TextureKind::Specular,
            base_path,
            device,
        ));
    }
    ret
}
