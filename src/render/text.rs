use std::sync::Arc;

use image::RgbaImage;
use usvg::fontdb;

use crate::{
    assets::fonts::{FontQuery, FontResolver, ResolvedFont},
    foundation::{
        core::Rgba8,
        error::{BackdropError, BackdropResult},
        math::mul_div255,
    },
};

/// Top-left corner of a diagnostic label inside its overlay.
pub const LABEL_ORIGIN: (u32, u32) = (10, 10);

/// Em size of diagnostic labels in pixels.
pub const LABEL_SIZE_PX: f32 = 18.0;

/// Resolve the bold monospace label font and draw `text` onto `target`.
pub fn draw_diagnostic_text(
    target: &mut RgbaImage,
    text: &str,
    fonts: &dyn FontResolver,
) -> BackdropResult<()> {
    let font = fonts.resolve(&FontQuery::monospace_bold())?;
    draw_label(target, text, &font)
}

/// Draw `text` in white at [`LABEL_ORIGIN`] using `font`.
///
/// There is no wrapping or clipping beyond the target's own bounds; long labels run off the edge.
pub fn draw_label(target: &mut RgbaImage, text: &str, font: &ResolvedFont) -> BackdropResult<()> {
    let (width, height) = target.dimensions();
    if width == 0 || height == 0 || text.is_empty() {
        return Ok(());
    }

    let opts = usvg::Options {
        fontdb: Arc::new(label_database(font)?),
        ..Default::default()
    };

    let svg = label_svg(width, height, text, font);
    let tree = usvg::Tree::from_str(&svg, &opts)
        .map_err(|e| BackdropError::Other(anyhow::anyhow!("build label svg: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| BackdropError::Other(anyhow::anyhow!("allocate {width}x{height} label")))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    let ink = Rgba8::white();
    for (cov, dst) in pixmap.pixels().iter().zip(target.pixels_mut()) {
        let coverage = cov.alpha();
        if coverage == 0 {
            continue;
        }
        dst.0 = mix_coverage(dst.0, ink, coverage);
    }
    Ok(())
}

/// A database holding only the face `font` points at, so collection files cannot substitute a
/// sibling face with the same family name.
fn label_database(font: &ResolvedFont) -> BackdropResult<fontdb::Database> {
    let mut db = fontdb::Database::new();
    db.load_font_data(font.data.to_vec());

    let others: Vec<fontdb::ID> = db
        .faces()
        .filter(|f| f.index != font.face_index)
        .map(|f| f.id)
        .collect();
    for id in others {
        db.remove_face(id);
    }

    if db.is_empty() {
        return Err(BackdropError::font_resolution(format!(
            "font '{}' has no loadable face at index {}",
            font.family, font.face_index
        )));
    }
    Ok(db)
}

fn label_svg(width: u32, height: u32, text: &str, font: &ResolvedFont) -> String {
    let (x, y) = LABEL_ORIGIN;
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}"><text x="{x}" y="{y}" font-family="{family}" font-weight="{weight}" font-size="{size}" dominant-baseline="text-before-edge" fill="#ffffff">{text}</text></svg>"##,
        family = xml_escape(&font.family),
        weight = font.weight,
        size = LABEL_SIZE_PX,
        text = xml_escape(text),
    )
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Blend every channel, alpha included, toward `ink` by `coverage`.
fn mix_coverage(dst: [u8; 4], ink: Rgba8, coverage: u8) -> [u8; 4] {
    let m = u16::from(coverage);
    let inv = 255 - m;
    let ink = [ink.r, ink.g, ink.b, ink.a];
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = mul_div255(u16::from(ink[i]), m).saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
