use std::path::Path;

use image::{DynamicImage, imageops::FilterType};

use crate::{
    assets::decode::load_image,
    foundation::{
        core::CanvasSize,
        error::{BackdropError, BackdropResult},
    },
    layout::solver::{Placement, PlacementSpec, resolve_placement, scaled_element_size},
    render::canvas::Canvas,
};

/// Load the overlay image at `path` and place it on the canvas according to `spec`.
#[tracing::instrument(level = "debug", skip(canvas))]
pub fn draw_element(
    canvas: &mut Canvas,
    path: &Path,
    spec: &PlacementSpec,
) -> BackdropResult<Placement> {
    let img = load_image(path)?;
    place_element(canvas, &img, spec)
}

/// Scale (if requested), anchor, and alpha-blend an already decoded element onto the canvas.
///
/// A scale that shrinks the element to nothing in either dimension is a
/// [`BackdropError::Validation`] error.
pub fn place_element(
    canvas: &mut Canvas,
    img: &DynamicImage,
    spec: &PlacementSpec,
) -> BackdropResult<Placement> {
    let canvas_size = canvas.size();
    let source_size = CanvasSize::new(img.width(), img.height());
    let size = scaled_element_size(canvas_size, source_size, spec.scaled_height_percent);
    if size != source_size && (size.width == 0 || size.height == 0) {
        return Err(BackdropError::validation(format!(
            "scaled_height_percent {:?} shrinks a {}x{} element to {}x{}",
            spec.scaled_height_percent,
            source_size.width,
            source_size.height,
            size.width,
            size.height
        )));
    }

    let layer = if size == source_size {
        img.to_rgba8()
    } else {
        img.resize_exact(size.width, size.height, FilterType::CatmullRom)
            .to_rgba8()
    };

    let at = resolve_placement(canvas_size, size, spec);
    tracing::debug!(
        "element {}x{} -> {}x{} at ({}, {})",
        source_size.width,
        source_size.height,
        size.width,
        size.height,
        at.x,
        at.y
    );
    canvas.paste(&layer, at);
    Ok(at)
}

#[cfg(test)]
#[path = "../../tests/unit/render/element.rs"]
mod tests;
