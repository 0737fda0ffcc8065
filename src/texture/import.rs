use crate::types::DecodedImage;
use image::io::Reader;
use log::{info, warn};
use std::path::Path;

/// Decodes an image file to 8-bit RGB. Any failure returns `None`; the
/// caller is expected to create its texture with no image data in that
/// case, so a bad file never stops an import.
#[must_use]
pub fn decode(path: &Path) -> Option<DecodedImage> {
    let reader = match Reader::open(path) {
        Ok(reader) => reader,
        Err(e) => {
            warn!("{} could not be opened: {e}", path.display());
            return None;
        }
    };
    let image = match reader.decode() {
        Ok(image) => image.into_rgb8(),
        Err(e) => {
            warn!("{} could not be decoded: {e}", path.display());
            return None;
        }
    };
    let (width, height) = image.dimensions();
    info!("{} texture loaded w: {width}, h: {height}", path.display());
    Some(DecodedImage {
        width,
        height,
        pixels: image.into_raw(),
    })
}
