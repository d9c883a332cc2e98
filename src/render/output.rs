use std::path::Path;

use image::{RgbImage, imageops::FilterType};

use crate::{
    foundation::{
        core::CanvasSize,
        error::{BackdropError, BackdropResult},
    },
    render::canvas::Canvas,
};

/// Create the directory that will hold `path`, if it has one.
pub fn ensure_parent_dir(path: &Path) -> BackdropResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            BackdropError::file_write(format!(
                "failed to create output directory '{}': {e}",
                parent.display()
            ))
        })?;
    }
    Ok(())
}

/// Encode `img` to `path`, choosing the format from the file extension.
pub fn save_rgb(img: &RgbImage, path: &Path) -> BackdropResult<()> {
    ensure_parent_dir(path)?;
    img.save(path)
        .map_err(|e| BackdropError::file_write(format!("write '{}': {e}", path.display())))
}

/// Save the canvas unscaled.
pub fn save_canvas(canvas: &Canvas, path: &Path) -> BackdropResult<()> {
    save_rgb(&canvas.to_rgb8(), path)
}

/// Stretch the canvas to `size` with independent horizontal and vertical scale factors.
pub fn texture_variant(canvas: &Canvas, size: CanvasSize) -> RgbImage {
    let rgb = canvas.to_rgb8();
    if rgb.dimensions() == (size.width, size.height) {
        return rgb;
    }
    image::imageops::resize(&rgb, size.width, size.height, FilterType::CatmullRom)
}

/// Stretch the canvas to `size` and save it.
pub fn save_texture(canvas: &Canvas, size: CanvasSize, path: &Path) -> BackdropResult<()> {
    save_rgb(&texture_variant(canvas, size), path)
}

#[cfg(test)]
#[path = "../../tests/unit/render/output.rs"]
mod tests;
