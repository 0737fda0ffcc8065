use crate::material::Material;
use crate::mesh_import::ImportOptions;
use crate::mu_error::MuError;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Describes one model to display: the asset file plus its import and
/// material settings. Stored as YAML next to the assets. Missing sections
/// fall back to defaults.
#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct ModelConfig {
    pub file: String,
    #[serde(default)]
    pub import: ImportOptions,
    #[serde(default)]
    pub material: Material,
}

impl ModelConfig {
    /// Reads a config from a YAML file
    ///
    /// # Errors
    /// May return `MuError`
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, MuError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }
}
