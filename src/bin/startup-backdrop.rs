use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::{
    fmt::{FmtContext, FormatEvent, FormatFields, format::Writer},
    registry::LookupSpan,
};

/// Generates a background image for the StartUp Age.
#[derive(Parser, Debug)]
#[command(name = "startup-backdrop", version)]
struct Cli {
    /// Path to the background image to use.
    image_filename: PathBuf,

    /// The unscaled output image to be generated.
    #[arg(short = 'O', long, default_value = "output.jpg")]
    output_filename: PathBuf,

    /// The image to be generated, scaled to a power-of-two size for import into the Age.
    #[arg(short = 'T', long, default_value = "texture.jpg")]
    texture_filename: PathBuf,

    /// Print debug messages and write an image with overlays showing the areas covered by the
    /// GUI and various aspect ratios.
    #[arg(short = 'X', long)]
    diagnostics: bool,

    /// The unscaled output image to be generated with diagnostic overlays applied.
    #[arg(short = 'D', long, default_value = "diagnostic.jpg")]
    diagnostic_filename: PathBuf,

    /// Logo image placed over the background.
    #[arg(long, default_value = backdrop::LOGO_FILE)]
    logo: PathBuf,

    /// Font file for diagnostic labels (skips host font discovery).
    #[arg(long)]
    font: Option<PathBuf>,

    /// JSON file with the logo placement (alignment, paddings, scaled height).
    #[arg(long)]
    layout: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.diagnostics);

    let mut opts = backdrop::BackdropOpts::new(&cli.image_filename);
    opts.logo = cli.logo.clone();
    opts.output_path = cli.output_filename.clone();
    opts.texture_path = cli.texture_filename.clone();
    opts.diagnostic_path = cli.diagnostics.then(|| cli.diagnostic_filename.clone());
    if let Some(path) = &cli.layout {
        opts.logo_placement = read_layout_json(path)?;
    }
    tracing::debug!("logo placement: {:?}", opts.logo_placement);

    let fonts: Box<dyn backdrop::FontResolver> = match &cli.font {
        Some(path) => Box::new(backdrop::FileFontResolver::new(path)),
        None => Box::new(backdrop::SystemFontResolver::new()),
    };

    let outputs = backdrop::generate(&opts, fonts.as_ref())?;
    tracing::debug!(
        "logo placed at ({}, {})",
        outputs.logo_at.x,
        outputs.logo_at.y
    );
    Ok(())
}

fn read_layout_json(path: &Path) -> anyhow::Result<backdrop::PlacementSpec> {
    let f = File::open(path).with_context(|| format!("open layout '{}'", path.display()))?;
    let spec: backdrop::PlacementSpec = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse layout JSON '{}'", path.display()))?;
    spec.validate()?;
    Ok(spec)
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .event_format(LevelPrefixed)
        .init();
}

/// Formats events as `[LEVEL] message`.
struct LevelPrefixed;

impl<S, N> FormatEvent<S, N> for LevelPrefixed
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        write!(writer, "[{}] ", event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
