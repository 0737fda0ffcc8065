use itertools::Itertools;
use nalgebra_glm as glm;

use crate::vertex::Vertex;

#[allow(unused_imports)]
use log::debug;

/// Calculates the face normals from vertex data. These are not very useful
/// by themselves but are needed to calculate the vertex normals.
///
/// The face normals are not normalized so there can be some area weighting
/// when averaged into vertex normals. This is not necessarily correct but
/// maybe it is good enough.
#[must_use]
fn calculate_face_normals(indices: &[u32], vertices: &[Vertex]) -> Vec<glm::Vec3> {
    let mut face_normals = Vec::with_capacity(indices.len() / 3);
    for (i0, i1, i2) in indices.iter().tuples() {
        let v0 = glm::Vec3::from(vertices[*i0 as usize].position);
        let v1 = glm::Vec3::from(vertices[*i1 as usize].position);
        let v2 = glm::Vec3::from(vertices[*i2 as usize].position);
        let va = v0 - v1;
        let vb = v1 - v2;
        face_normals.push(glm::cross(&va, &vb));
    }
    face_normals
}

/// Calculates normals. This is intended for importing meshes that do not
/// contain normals, but it is inefficent and may not be accurate. It is
/// highly recommended that meshes containing normals be used instead.
///
/// # Panics
/// Will panic if a vertex index does not fit in a `u32` however meshes of
/// that size could not have been indexed by the file format either.
pub fn calculate_normals(indices: &[u32], vertices: &mut [Vertex]) {
    let face_normals = calculate_face_normals(indices, vertices);
    for (vertex_index, vertex) in vertices.iter_mut().enumerate() {
        let faces = connected_faces(indices, u32::try_from(vertex_index).unwrap());
        if !faces.is_empty() {
            // Sum the normals from the connected faces and normalize to
            // create sort of an area weighted average.
            let mut vert_norm = glm::vec3(0.0_f32, 0.0_f32, 0.0_f32);
            for index in faces {
                vert_norm += face_normals[index];
            }
            vertex.normal = glm::normalize(&vert_norm).into();
        }
    }
}

/// Returns the a list of faces that contain a given vertex. Checking every
/// vertex this way is inefficient and slow but it should work.
#[must_use]
fn connected_faces(indices: &[u32], vertex_index: u32) -> Vec<usize> {
    let mut faces = Vec::new();
    for (face_index, (i0, i1, i2)) in indices.iter().tuples().enumerate() {
        if *i0 == vertex_index || *i1 == vertex_index || *i2 == vertex_index {
            faces.push(face_index);
        }
    }
    faces
}
