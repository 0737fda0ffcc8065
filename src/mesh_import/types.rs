use serde::{Deserialize, Serialize};

/// Options controlling asset import
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
pub struct ImportOptions {
    /// Flip the V texture coordinate so image origins match the renderer
    pub flip_uv: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self { flip_uv: true }
    }
}

/// Errors specific to importing data. `MuError` has a `From` trait to
/// handle these.
#[derive(Debug)]
pub enum ImportError {
    NoScene,
    NoTriangles,
    NoIndices,
    NoPositions,
    NoNormals,
    CountMismatch,
    SparseMesh,
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NoScene => {
                write!(f, "the file contains no scene or root node")
            }
            Self::NoTriangles => {
                write!(f, "only triangulated meshes are supported")
            }
            Self::NoIndices => {
                write!(f, "only indexed meshes are supported")
            }
            Self::NoPositions => {
                write!(f, "vertex positions are required")
            }
            Self::NoNormals => {
                write!(f, "vertex normals are required")
            }
            Self::CountMismatch => {
                write!(f, "there is a mismatch in the count of vertices")
            }
            Self::SparseMesh => {
                write!(f, "sparse mesh data is not supported")
            }
        }
    }
}
