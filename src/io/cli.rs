//! Command-line interface for rendering a selection-bias figure from image files

use crate::glyph::fonts::FontChain;
use crate::glyph::synthesis::{GlyphSpec, synthesize_mask};
use crate::imaging::masking::{apply_threshold_mask, masked_fraction};
use crate::imaging::normalize::normalize;
use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_DPI, DEFAULT_FONT_SIZE_RATIO, DEFAULT_GLYPH,
    DEFAULT_MASK_THRESHOLD, DEFAULT_OUTPUT,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{load_raw_image, save_canonical_png};
use crate::io::progress::StageProgress;
use crate::render::color::parse_color;
use crate::render::layout::FigureOptions;
use crate::render::meme::{MemeInputs, create_statistics_meme};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "statmeme")]
#[command(
    author,
    version,
    about = "Render a four-panel selection-bias figure from an image and its stippling"
)]
/// Command-line arguments for the figure generator
pub struct Cli {
    /// Original image file
    #[arg(value_name = "ORIGINAL")]
    pub original: PathBuf,

    /// Stippled rendering of the original
    #[arg(value_name = "STIPPLE")]
    pub stipple: PathBuf,

    /// Output figure path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Character drawn as the selection mask (only the first is used)
    #[arg(short, long, default_value_t = DEFAULT_GLYPH.to_string())]
    pub letter: String,

    /// Glyph size relative to the smaller stipple dimension, clamped to [0.1, 1]
    #[arg(short, long, default_value_t = DEFAULT_FONT_SIZE_RATIO)]
    pub ratio: f32,

    /// Mask values below this erase the stipple
    #[arg(short, long, default_value_t = DEFAULT_MASK_THRESHOLD)]
    pub threshold: f32,

    /// Output resolution in dots per inch
    #[arg(short, long, default_value_t = DEFAULT_DPI)]
    pub dpi: u32,

    /// Figure background colour (name, #rrggbb, or grey level)
    #[arg(short, long, default_value = DEFAULT_BACKGROUND)]
    pub background: String,

    /// Font file tried before the built-in candidate list (repeatable)
    #[arg(long = "font", value_name = "PATH")]
    pub fonts: Vec<PathBuf>,

    /// Also save the synthesized mask
    #[arg(long, value_name = "PATH")]
    pub mask_output: Option<PathBuf>,

    /// Also save the masked stipple
    #[arg(long, value_name = "PATH")]
    pub masked_output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Render even if the output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if an existing output file should be left alone
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate numeric options and build the figure settings
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the threshold lies outside
    /// [0, 1], the DPI is zero, or the background colour is not recognized.
    pub fn figure_options(&self) -> Result<FigureOptions> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(invalid_parameter(
                "threshold",
                &self.threshold,
                &"must lie in [0, 1]",
            ));
        }
        if self.dpi == 0 {
            return Err(invalid_parameter("dpi", &self.dpi, &"must be positive"));
        }

        Ok(FigureOptions {
            dpi: self.dpi,
            background: parse_color(&self.background)?,
            ..FigureOptions::default()
        })
    }

    /// Font candidates with any user-supplied files first
    pub fn font_chain(&self) -> FontChain {
        FontChain::system_default().with_preferred(self.fonts.iter().cloned())
    }
}

/// Runs the load, normalize, mask and render pipeline for one figure
pub struct MemeProcessor {
    cli: Cli,
    progress: StageProgress,
}

impl MemeProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = StageProgress::new(cli.should_show_progress());
        Self { cli, progress }
    }

    /// Stage tracker for this run
    pub const fn progress(&self) -> &StageProgress {
        &self.progress
    }

    /// Render the figure described by the CLI arguments
    ///
    /// Returns `false` when the run was skipped because the output exists.
    ///
    /// # Errors
    ///
    /// Returns an error if option validation fails, an input cannot be
    /// decoded, or an output cannot be written.
    pub fn process(&self) -> Result<bool> {
        let options = self.cli.figure_options()?;

        if self.cli.skip_existing() && self.cli.output.exists() {
            info!(output = %self.cli.output.display(), "output exists, skipping");
            return Ok(false);
        }

        self.progress.begin("loading images");
        let original = load_raw_image(&self.cli.original)?;
        let stipple_raw = load_raw_image(&self.cli.stipple)?;
        self.progress.complete();

        self.progress.begin("normalizing stipple");
        let stipple = normalize(stipple_raw.view())?;
        self.progress.complete();

        self.progress.begin("synthesizing mask");
        let fonts = self.cli.font_chain();
        let spec = GlyphSpec::new(
            stipple.height(),
            stipple.width(),
            &self.cli.letter,
            self.cli.ratio,
        );
        let mask = synthesize_mask(&spec, &fonts)?;
        if let Some(path) = &self.cli.mask_output {
            save_canonical_png(&mask, path)?;
        }
        self.progress.complete();

        self.progress.begin("applying mask");
        let masked = apply_threshold_mask(stipple.pixels(), mask.pixels(), self.cli.threshold)?;
        info!(
            glyph = %spec.glyph,
            threshold = self.cli.threshold,
            masked_fraction = masked_fraction(mask.pixels(), self.cli.threshold),
            "applied mask"
        );
        if let Some(path) = &self.cli.masked_output {
            save_canonical_png(&masked, path)?;
        }
        self.progress.complete();

        self.progress.begin("rendering figure");
        let inputs = MemeInputs {
            original: original.view(),
            stipple: stipple_raw.view(),
            block_letter: mask.pixels().into_dyn(),
            masked_stipple: masked.pixels().into_dyn(),
        };
        create_statistics_meme(&inputs, &self.cli.output, &options, &fonts)?;
        self.progress.complete();

        self.progress.finish();
        Ok(true)
    }
}
