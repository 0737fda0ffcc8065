//! Model loading and display core for a small museum rendering demo.
//!
//! An asset file is parsed into a flat list of meshes, its textures are
//! deduplicated and uploaded through an opaque device seam, and the whole
//! model is auto-centered and auto-scaled into a unit frame. Drawing
//! writes the material and matrix uniforms through a narrow shader
//! capability and then draws each mesh. Windowing, shader compilation and
//! the render loop itself are the application's business, not this
//! crate's.

pub mod bounds;
pub mod camera;
pub mod config;
pub mod context;
pub mod material;
pub mod mesh;
pub mod mesh_import;
pub mod model;
pub mod mu_error;
pub mod texture;
pub mod transform;
pub mod types;
pub mod vertex;

// Re-exports
pub use {
    config::ModelConfig, context::ViewerContext, material::Material, model::Model,
    mu_error::MuError,
};
