use image::RgbaImage;

use crate::{
    assets::fonts::{FontQuery, FontResolver, ResolvedFont},
    foundation::{
        core::{CanvasSize, Rgba8},
        error::BackdropResult,
        math::round_dim,
    },
    layout::solver::{Placement, centered_offset},
    render::{canvas::Canvas, text::draw_label},
};

/// Thickness of the border drawn around each aspect-ratio safe zone.
pub const ZONE_BORDER_PX: u32 = 10;

/// Screen-space footprint of a UI dialog rendered at a fixed fraction of screen height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DialogZoneSpec {
    /// Dialog height as percent of canvas height.
    pub height_percent: f64,
    /// Dialog width as a fraction of its height.
    pub width_ratio: f64,
    /// Fill color of the overlay.
    pub color: Rgba8,
    /// Label drawn on the overlay.
    pub label: &'static str,
}

/// The Explorers dialog: 66% of screen height, 3:4 width to height, translucent red.
pub const DIALOG_ZONE: DialogZoneSpec = DialogZoneSpec {
    height_percent: 66.0,
    width_ratio: 0.75,
    color: Rgba8::new(128, 0, 0, 64),
    label: "[Explorers dialog area]",
};

/// A display aspect ratio whose visible area is outlined on the diagnostic image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AspectRatioZone {
    /// Display name, e.g. `"16:9"`.
    pub name: &'static str,
    /// Ratio numerator.
    pub width: u32,
    /// Ratio denominator.
    pub height: u32,
    /// Border color.
    pub color: Rgba8,
}

impl AspectRatioZone {
    /// Label drawn inside the zone border.
    pub fn label(&self) -> String {
        format!("[{} safe zone]", self.name)
    }
}

/// Aspect ratios outlined on the diagnostic image, drawn in this order.
pub const ASPECT_RATIOS: [AspectRatioZone; 4] = [
    AspectRatioZone {
        name: "32:9",
        width: 32,
        height: 9,
        color: Rgba8::new(0, 128, 0, 64),
    },
    AspectRatioZone {
        name: "21:9",
        width: 21,
        height: 9,
        color: Rgba8::new(128, 128, 0, 64),
    },
    AspectRatioZone {
        name: "16:9",
        width: 16,
        height: 9,
        color: Rgba8::new(0, 128, 128, 64),
    },
    AspectRatioZone {
        name: "4:3",
        width: 4,
        height: 3,
        color: Rgba8::new(128, 0, 128, 64),
    },
];

/// Dialog rectangle size on `canvas`.
pub fn dialog_zone_size(canvas: CanvasSize, spec: &DialogZoneSpec) -> CanvasSize {
    let height = round_dim(f64::from(canvas.height) / 100.0 * spec.height_percent);
    let width = round_dim(f64::from(height) * spec.width_ratio);
    CanvasSize::new(width, height)
}

/// Full-height rectangle seen by a display of aspect ratio `zone`.
pub fn aspect_zone_size(canvas: CanvasSize, zone: &AspectRatioZone) -> CanvasSize {
    let width = if zone.height == 0 {
        0
    } else {
        round_dim(f64::from(canvas.height) / f64::from(zone.height) * f64::from(zone.width))
    };
    CanvasSize::new(width, canvas.height)
}

/// A `size` image with a `border`-pixel frame of `color` around a fully transparent interior.
pub fn bordered_frame(size: CanvasSize, border: u32, color: Rgba8) -> RgbaImage {
    let mut img = RgbaImage::new(size.width, size.height);
    let right = size.width.saturating_sub(border);
    let bottom = size.height.saturating_sub(border);
    for (x, y, px) in img.enumerate_pixels_mut() {
        if x < border || y < border || x >= right || y >= bottom {
            *px = color.to_pixel();
        }
    }
    img
}

/// Draw the translucent dialog rectangle, labeled and centered on both axes.
#[tracing::instrument(level = "debug", skip(canvas, font))]
pub fn draw_dialog_zone(
    canvas: &mut Canvas,
    spec: &DialogZoneSpec,
    font: &ResolvedFont,
) -> BackdropResult<Placement> {
    let canvas_size = canvas.size();
    let size = dialog_zone_size(canvas_size, spec);

    let mut layer = RgbaImage::from_pixel(size.width, size.height, spec.color.to_pixel());
    draw_label(&mut layer, spec.label, font)?;

    let at = Placement {
        x: centered_offset(canvas_size.width, size.width),
        y: centered_offset(canvas_size.height, size.height),
    };
    tracing::debug!(
        "dialog zone {}x{} at ({}, {})",
        size.width,
        size.height,
        at.x,
        at.y
    );
    canvas.paste(&layer, at);
    Ok(at)
}

/// Draw the bordered safe-zone outline for `zone`, centered horizontally and pinned to the top.
#[tracing::instrument(level = "debug", skip(canvas, font))]
pub fn draw_aspect_ratio_zone(
    canvas: &mut Canvas,
    zone: &AspectRatioZone,
    font: &ResolvedFont,
) -> BackdropResult<Placement> {
    let canvas_size = canvas.size();
    let size = aspect_zone_size(canvas_size, zone);

    let mut layer = bordered_frame(size, ZONE_BORDER_PX, zone.color);
    draw_label(&mut layer, &zone.label(), font)?;

    let at = Placement {
        x: centered_offset(canvas_size.width, size.width),
        y: 0,
    };
    tracing::debug!(
        "{} zone {}x{} at ({}, {})",
        zone.name,
        size.width,
        size.height,
        at.x,
        at.y
    );
    canvas.paste(&layer, at);
    Ok(at)
}

/// Apply the dialog overlay and every registered aspect-ratio zone.
///
/// The label font is resolved before anything is drawn, so a resolution failure leaves the
/// canvas untouched.
pub fn draw_diagnostics(canvas: &mut Canvas, fonts: &dyn FontResolver) -> BackdropResult<()> {
    let font = fonts.resolve(&FontQuery::monospace_bold())?;
    tracing::debug!("diagnostic labels use font family '{}'", font.family);

    draw_dialog_zone(canvas, &DIALOG_ZONE, &font)?;
    for zone in &ASPECT_RATIOS {
        draw_aspect_ratio_zone(canvas, zone, &font)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/diagnostics.rs"]
mod tests;
