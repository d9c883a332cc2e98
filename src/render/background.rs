use std::path::Path;

use image::{DynamicImage, RgbaImage, imageops::FilterType};

use crate::{
    assets::decode::load_image,
    foundation::{core::CanvasSize, error::BackdropResult},
    layout::solver::Placement,
    render::canvas::Canvas,
};

/// Scale `img` to cover `target` exactly, preserving its aspect ratio and center-cropping the
/// overflow. Never letterboxes.
pub fn cover_fit(img: &DynamicImage, target: CanvasSize) -> RgbaImage {
    if img.width() == target.width && img.height() == target.height {
        return img.to_rgba8();
    }
    img.resize_to_fill(target.width, target.height, FilterType::CatmullRom)
        .to_rgba8()
}

/// Load the background photo at `path` and cover the whole canvas with it.
#[tracing::instrument(level = "debug", skip(canvas))]
pub fn draw_background(canvas: &mut Canvas, path: &Path) -> BackdropResult<()> {
    let img = load_image(path)?;
    draw_background_image(canvas, &img);
    Ok(())
}

/// Cover the canvas with an already decoded background.
pub fn draw_background_image(canvas: &mut Canvas, img: &DynamicImage) {
    let fitted = cover_fit(img, canvas.size());
    canvas.paste(&fitted, Placement::default());
}

#[cfg(test)]
#[path = "../../tests/unit/render/background.rs"]
mod tests;
