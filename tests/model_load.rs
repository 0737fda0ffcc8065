//! End to end OBJ import tests against a recording device
//!
//! Fixture files are generated into a scratch directory so the tests do
//! not depend on checked-in assets.

mod common;

use common::{fixture_dir, init_tests, RecordingDevice, RecordingShader};
use image::{Rgb, RgbImage};
use museum::mesh_import::ImportOptions;
use museum::model::Model;
use museum::texture::TextureKind;
use museum::types::SamplerSettings;
use nalgebra_glm as glm;
use std::fs;
use std::path::{Path, PathBuf};

const EPSILON: f32 = 0.0001_f32;

// Two triangles sharing a bricks texture, one with an extra specular map.
// The extents are x 0..2, y 0..1, z 0..1 and the first face touches both
// extreme corners so every axis sees both ends of its range.
const OBJ_TEXT: &str = "\
mtllib museum.mtl
v 2.0 1.0 1.0
v 0.0 0.0 0.0
v 2.0 0.0 0.0
v 0.0 1.0 1.0
vt 0.0 0.25
vt 0.5 0.5
vt 1.0 0.0
vt 0.0 1.0
vn 0.0 0.0 2.0
vn 0.0 0.0 2.0
vn 0.0 0.0 2.0
vn 0.0 0.0 2.0
o first
usemtl mat_a
f 1/1/1 2/2/2 3/3/3
o second
usemtl mat_b
f 1/1/1 3/3/3 4/4/4
";

const MTL_TEXT: &str = "\
newmtl mat_a
map_Kd bricks.png
map_Ks shine.png
newmtl mat_b
map_Kd bricks.png
";

/// Writes the OBJ fixture with its MTL and texture files
fn write_fixture(name: &str) -> PathBuf {
    let dir = fixture_dir(name);
    fs::write(dir.join("museum.obj"), OBJ_TEXT).unwrap();
    fs::write(dir.join("museum.mtl"), MTL_TEXT).unwrap();
    RgbImage::from_pixel(2, 2, Rgb([180, 40, 40]))
        .save(dir.join("bricks.png"))
        .unwrap();
    RgbImage::from_pixel(2, 2, Rgb([230, 230, 230]))
        .save(dir.join("shine.png"))
        .unwrap();
    dir.join("museum.obj")
}

/// Applies the model matrix to every vertex of every mesh
fn transformed_positions(model: &Model) -> Vec<glm::Vec3> {
    let m = model.model_matrix();
    model
        .meshes()
        .iter()
        .flat_map(|mesh| mesh.vertices())
        .map(|v| {
            let p = m * glm::vec4(v.position[0], v.position[1], v.position[2], 1.0);
            glm::vec3(p.x, p.y, p.z)
        })
        .collect()
}

#[test]
fn load_normalizes_and_centers() {
    init_tests();
    let path = write_fixture("normalize");
    let mut device = RecordingDevice::default();
    let mut model = Model::new();
    model.load(&path, &ImportOptions::default(), &mut device);
    assert_eq!(model.meshes().len(), 2);

    let positions = transformed_positions(&model);
    let mut min = glm::vec3(f32::INFINITY, f32::INFINITY, f32::INFINITY);
    let mut max = glm::vec3(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY);
    for p in &positions {
        min = glm::min2(&min, p);
        max = glm::max2(&max, p);
    }
    let span = max - min;
    // The largest dimension spans exactly unit length after loading
    let largest = span.x.max(span.y).max(span.z);
    assert!((largest - 1.0).abs() < EPSILON);
    // The bounding box center sits at the origin
    let center = (max + min) / 2.0;
    assert!(center.x.abs() < EPSILON);
    assert!(center.y.abs() < EPSILON);
    assert!(center.z.abs() < EPSILON);
}

#[test]
fn normals_are_renormalized() {
    let path = write_fixture("renormalize");
    let mut device = RecordingDevice::default();
    let mut model = Model::new();
    model.load(&path, &ImportOptions::default(), &mut device);
    // The file stores (0, 0, 2); the mesh must carry unit normals
    for mesh in model.meshes() {
        for v in mesh.vertices() {
            let n = glm::Vec3::from(v.normal);
            assert!((glm::length(&n) - 1.0).abs() < EPSILON);
            assert!((n.z - 1.0).abs() < EPSILON);
        }
    }
}

#[test]
fn texture_cache_shares_handles() {
    let path = write_fixture("cache");
    let mut device = RecordingDevice::default();
    let mut model = Model::new();
    model.load(&path, &ImportOptions::default(), &mut device);

    // bricks.png is referenced by both materials but uploaded once;
    // shine.png makes two uploads in total
    assert_eq!(device.texture_uploads.len(), 2);
    assert_eq!(model.texture_count(), 2);
    for (has_image, sampler) in &device.texture_uploads {
        assert!(*has_image);
        assert_eq!(*sampler, SamplerSettings::default());
    }

    let first = model.meshes()[0].textures();
    let second = model.meshes()[1].textures();
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].kind, TextureKind::Diffuse);
    assert_eq!(first[1].kind, TextureKind::Specular);
    assert_eq!(second.len(), 1);
    // Identical raw path, identical GPU handle
    assert_eq!(first[0].id, second[0].id);
    assert_eq!(first[0].path, "bricks.png");
}

#[test]
fn uv_flip_is_optional() {
    let path = write_fixture("uvflip");

    let mut device = RecordingDevice::default();
    let mut flipped = Model::new();
    flipped.load(&path, &ImportOptions::default(), &mut device);
    let v = flipped.meshes()[0].vertices()[0];
    assert!((v.tex_coord[0] - 0.0).abs() < EPSILON);
    assert!((v.tex_coord[1] - 0.75).abs() < EPSILON);

    let mut plain = Model::new();
    plain.load(&path, &ImportOptions { flip_uv: false }, &mut device);
    let v = plain.meshes()[0].vertices()[0];
    assert!((v.tex_coord[1] - 0.25).abs() < EPSILON);
}

#[test]
fn missing_normals_are_reconstructed() {
    let dir = fixture_dir("calcnormals");
    let text = "\
v 0.0 0.0 0.0
v 0.0 1.0 0.0
v 1.0 0.0 0.0
f 1 2 3
";
    let path = dir.join("flat.obj");
    fs::write(&path, text).unwrap();
    let mut device = RecordingDevice::default();
    let mut model = Model::new();
    model.load(&path, &ImportOptions::default(), &mut device);
    assert_eq!(model.meshes().len(), 1);
    for v in model.meshes()[0].vertices() {
        let n = glm::Vec3::from(v.normal);
        assert!((glm::length(&n) - 1.0).abs() < EPSILON);
    }
}

#[test]
fn missing_texture_file_is_silent() {
    let dir = fixture_dir("notexture");
    fs::write(
        dir.join("museum.obj"),
        OBJ_TEXT.replace("museum.mtl", "broken.mtl"),
    )
    .unwrap();
    fs::write(
        dir.join("broken.mtl"),
        MTL_TEXT.replace("bricks.png", "nothere.png"),
    )
    .unwrap();
    RgbImage::from_pixel(2, 2, Rgb([230, 230, 230]))
        .save(dir.join("shine.png"))
        .unwrap();

    let mut device = RecordingDevice::default();
    let mut model = Model::new();
    model.load(dir.join("museum.obj"), &ImportOptions::default(), &mut device);
    // The meshes still load and the broken texture still has a handle,
    // just with no image data behind it
    assert_eq!(model.meshes().len(), 2);
    assert_eq!(device.texture_uploads.len(), 2);
    assert!(device.texture_uploads.iter().any(|(has_image, _)| !has_image));
}

#[test]
fn nonexistent_path_leaves_model_empty() {
    let mut device = RecordingDevice::default();
    let mut model = Model::new();
    model.load(
        Path::new("/no/such/dir/museum.obj"),
        &ImportOptions::default(),
        &mut device,
    );
    assert!(model.meshes().is_empty());
    assert_eq!(model.texture_count(), 0);

    // The glTF branch behaves the same way
    model.load(
        Path::new("/no/such/dir/museum.gltf"),
        &ImportOptions::default(),
        &mut device,
    );
    assert!(model.meshes().is_empty());

    // Drawing an empty model is a no-op, not an error
    let mut shader = RecordingShader::default();
    let view = glm::Mat4::identity();
    let proj = glm::Mat4::identity();
    model.draw(&mut shader, &mut device, &view, &proj);
    assert!(device.draws.is_empty());
}

#[test]
fn draw_writes_uniforms_then_meshes() {
    let path = write_fixture("draw");
    let mut device = RecordingDevice::default();
    let mut model = Model::new();
    model.load(&path, &ImportOptions::default(), &mut device);

    let mut shader = RecordingShader::default();
    let view = glm::Mat4::identity();
    let proj = glm::Mat4::identity();
    model.draw(&mut shader, &mut device, &view, &proj);

    // One draw per mesh, in list order
    assert_eq!(device.draws.len(), 2);
    assert_eq!(device.draws[0].0, 0);
    assert_eq!(device.draws[1].0, 1);
    assert_eq!(device.draws[0].1, 3);

    // Material and matrix uniforms were all written
    assert!(shader.vec4("material.ambient").is_some());
    assert!(shader.vec4("material.diffuse").is_some());
    assert!(shader.vec4("material.specular").is_some());
    assert!(shader.vec4("material.emission").is_some());
    assert!(shader.float("material.shininess").is_some());
    assert!(shader.mat4("view").is_some());
    assert!(shader.mat4("projection").is_some());

    // With an identity view, modelview is the model matrix itself
    let modelview = shader.mat4("modelview").unwrap();
    let expected = model.model_matrix();
    for (a, b) in modelview.iter().zip(expected.iter()) {
        assert!((a - b).abs() < EPSILON);
    }
}
