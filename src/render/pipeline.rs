use std::path::PathBuf;

use crate::{
    assets::fonts::FontResolver,
    foundation::{
        core::{CANVAS_SIZE, CanvasSize, LOGO_FILE, TEXTURE_SIZE},
        error::BackdropResult,
    },
    layout::solver::{Placement, PlacementSpec},
    render::{
        background::draw_background,
        canvas::Canvas,
        diagnostics::draw_diagnostics,
        element::draw_element,
        output::{save_canvas, save_texture},
    },
};

/// Inputs and outputs of one backdrop run.
#[derive(Clone, Debug, PartialEq)]
pub struct BackdropOpts {
    /// Background photo, cover-fit onto the canvas.
    pub background: PathBuf,
    /// Overlay logo.
    pub logo: PathBuf,
    /// Where and how large the logo is drawn.
    pub logo_placement: PlacementSpec,
    /// Size of the working canvas.
    pub canvas_size: CanvasSize,
    /// Size the texture variant is stretched to.
    pub texture_size: CanvasSize,
    /// Unscaled composite.
    pub output_path: PathBuf,
    /// Texture-scaled composite.
    pub texture_path: PathBuf,
    /// Diagnostic composite; `None` skips the overlays entirely.
    pub diagnostic_path: Option<PathBuf>,
}

impl BackdropOpts {
    /// Options for `background` with every other setting at its fixed default.
    pub fn new(background: impl Into<PathBuf>) -> Self {
        Self {
            background: background.into(),
            logo: PathBuf::from(LOGO_FILE),
            logo_placement: PlacementSpec::logo(),
            canvas_size: CANVAS_SIZE,
            texture_size: TEXTURE_SIZE,
            output_path: PathBuf::from("output.jpg"),
            texture_path: PathBuf::from("texture.jpg"),
            diagnostic_path: None,
        }
    }
}

/// Files written by [`generate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackdropOutputs {
    /// Unscaled composite.
    pub output: PathBuf,
    /// Texture-scaled composite.
    pub texture: PathBuf,
    /// Diagnostic composite, when requested.
    pub diagnostic: Option<PathBuf>,
    /// Where the logo landed on the canvas.
    pub logo_at: Placement,
}

/// Run the whole pipeline: background, logo, plain and texture outputs, then diagnostics.
///
/// Steps run in order and the first failure aborts the run. Files saved before the failure
/// stay on disk. Diagnostic overlays are drawn on the same canvas after the texture has been
/// written, so they only ever appear in the diagnostic file.
#[tracing::instrument(level = "debug", skip(fonts))]
pub fn generate(opts: &BackdropOpts, fonts: &dyn FontResolver) -> BackdropResult<BackdropOutputs> {
    let mut canvas = Canvas::new(opts.canvas_size);

    draw_background(&mut canvas, &opts.background)?;
    let logo_at = draw_element(&mut canvas, &opts.logo, &opts.logo_placement)?;

    save_canvas(&canvas, &opts.output_path)?;
    tracing::info!("Saved unscaled image as {}", opts.output_path.display());

    save_texture(&canvas, opts.texture_size, &opts.texture_path)?;
    tracing::info!(
        "Saved texture-scaled image as {}",
        opts.texture_path.display()
    );

    if let Some(path) = &opts.diagnostic_path {
        draw_diagnostics(&mut canvas, fonts)?;
        save_canvas(&canvas, path)?;
        tracing::info!("Saved diagnostic image as {}", path.display());
    }

    Ok(BackdropOutputs {
        output: opts.output_path.clone(),
        texture: opts.texture_path.clone(),
        diagnostic: opts.diagnostic_path.clone(),
        logo_at,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
