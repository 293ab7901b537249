//! Assembly of the four-panel selection-bias figure

use crate::glyph::fonts::FontChain;
use crate::imaging::align::align_to_common_size;
use crate::imaging::normalize::normalize;
use crate::io::configuration::PANEL_TITLES;
use crate::io::error::Result;
use crate::render::layout::{FigureOptions, Panel, render_panels, save_figure};
use ndarray::ArrayViewD;
use std::path::Path;
use tracing::info;

/// Raw arrays for the four panels, left to right
///
/// Each may be 2D or channel-last 3D with any value range.
#[derive(Debug, Clone)]
pub struct MemeInputs<'a> {
    /// Source image ("Reality")
    pub original: ArrayViewD<'a, f32>,
    /// Stippled rendering ("Your Model")
    pub stipple: ArrayViewD<'a, f32>,
    /// Glyph mask ("Selection Bias")
    pub block_letter: ArrayViewD<'a, f32>,
    /// Stipple with the mask applied ("Estimate")
    pub masked_stipple: ArrayViewD<'a, f32>,
}

/// Normalize, align and title the four inputs
///
/// # Errors
///
/// Returns [`crate::MemeError::InvalidShape`] if any input is not a usable image.
pub fn prepare_panels(inputs: &MemeInputs<'_>) -> Result<Vec<Panel>> {
    let normalized = [
        normalize(inputs.original.view())?,
        normalize(inputs.stipple.view())?,
        normalize(inputs.block_letter.view())?,
        normalize(inputs.masked_stipple.view())?,
    ];

    Ok(PANEL_TITLES
        .iter()
        .zip(align_to_common_size(&normalized))
        .map(|(title, image)| Panel::new(*title, image))
        .collect())
}

/// Render the four-panel figure and save it to `output_path`
///
/// # Errors
///
/// Returns an error if any input has an invalid shape, if the figure options
/// are unusable, or if the file cannot be written.
pub fn create_statistics_meme(
    inputs: &MemeInputs<'_>,
    output_path: &Path,
    options: &FigureOptions,
    fonts: &FontChain,
) -> Result<()> {
    let panels = prepare_panels(inputs)?;
    if let Some(first) = panels.first() {
        let (height, width) = first.image.shape();
        info!(height, width, "panels aligned");
    }

    let figure = render_panels(&panels, options, fonts)?;
    save_figure(&figure, output_path)
}
