use std::{error, fmt};

/// Unified error type
///
/// Import and configuration failures are surfaced through this enum. Errors
/// from third party crates are wrapped; the large ones are boxed.
#[derive(Debug)]
pub enum MuError {
    InvalidFile,
    StdIoError(std::io::Error),
    TObjLoadError(tobj::LoadError),
    GltfError(Box<gltf::Error>),
    SerdeYamlError(Box<serde_yaml::Error>),
    ImportError(crate::mesh_import::ImportError),
}

impl error::Error for MuError {}

impl fmt::Display for MuError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidFile => write!(f, "invalid file"),
            Self::StdIoError(e) => write!(f, "std::io::Error: {}", e.kind()),
            Self::TObjLoadError(e) => write!(f, "tobj crate LoadError: {e}"),
            Self::GltfError(e) => write!(f, "gltf Error: {e}"),
            Self::SerdeYamlError(e) => {
                write!(f, "serde_yaml::Error: {e}")
            }
            Self::ImportError(e) => write!(f, "import error: {e}"),
        }
    }
}

impl From<std::io::Error> for MuError {
    fn from(e: std::io::Error) -> Self {
        Self::StdIoError(e)
    }
}

impl From<tobj::LoadError> for MuError {
    fn from(e: tobj::LoadError) -> Self {
        Self::TObjLoadError(e)
    }
}

impl From<serde_yaml::Error> for MuError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::SerdeYamlError(Box::new(e))
    }
}

impl From<crate::mesh_import::ImportError> for MuError {
    fn from(e: crate::mesh_import::ImportError) -> Self {
        Self::ImportError(e)
    }
}
