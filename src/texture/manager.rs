use super::{import, Texture, TextureKind};
use crate::types::{RenderDevice, SamplerSettings};
use ahash::AHashMap;
use log::info;
use std::path::Path;

/// Texture cache keyed by the raw path string from the material, exactly as
/// written. There is no path normalization, so two spellings of the same
/// file are distinct entries and upload twice.
pub struct Manager {
    cache: AHashMap<String, Texture>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        // Reserve space to perhaps avoid some realloc/rehash.
        Self {
            cache: AHashMap::with_capacity(16),
        }
    }

    /// Returns the texture for `raw_path`, uploading it on first sight and
    /// returning the cached entry (shared handle, original kind) after
    /// that. Relative paths resolve against `base_dir`. Decode failures are
    /// not errors: the returned texture's handle is bound to no image data.
    pub fn load(
        &mut self,
        raw_path: &str,
        kind: TextureKind,
        base_dir: &Path,
        device: &mut dyn RenderDevice,
    ) -> Texture {
        if let Some(texture) = self.cache.get(raw_path) {
            info!("Texture cache hit: {raw_path}");
            texture.clone()
        } else {
            info!("Texture cache miss: {raw_path}");
            let image = import::decode(&base_dir.join(raw_path));
            let id = device.create_texture(image.as_ref(), &SamplerSettings::default());
            let texture = Texture {
                id,
                kind,
                path: raw_path.to_owned(),
            };
            self.cache.insert(raw_path.to_owned(), texture.clone());
            texture
        }
    }

    /// Number of distinct uploads so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
