use std::path::Path;

use crate::foundation::error::{BackdropError, BackdropResult};

/// Read and decode an image file, guessing the format from its contents.
///
/// Missing files, unreadable files, and unsupported formats all surface as
/// [`BackdropError::ImageLoad`].
pub fn load_image(path: &Path) -> BackdropResult<image::DynamicImage> {
    let bytes = std::fs::read(path).map_err(|e| {
        BackdropError::image_load(format!("read image '{}': {e}", path.display()))
    })?;
    let img = decode_image(&bytes).map_err(|e| match e {
        BackdropError::ImageLoad(msg) => {
            BackdropError::image_load(format!("'{}': {msg}", path.display()))
        }
        other => other,
    })?;
    tracing::debug!(
        "loaded '{}' ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(img)
}

/// Decode an in-memory encoded image.
pub fn decode_image(bytes: &[u8]) -> BackdropResult<image::DynamicImage> {
    image::load_from_memory(bytes)
        .map_err(|e| BackdropError::image_load(format!("decode image from memory: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
