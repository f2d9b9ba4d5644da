//! Grouped bar chart comparing English and ciphertext letter frequencies.
//!
//! Rendered through the [`plotters`] bitmap backend and saved as PNG.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;
use tracing::info;

use crate::algos::frequency::FrequencyTable;
use crate::constants::ALPHABET_LEN;
use crate::utils::letter_at;

pub const ENGLISH_COLOR: RGBColor = RGBColor(0x1F, 0xB8, 0xCD);
pub const CIPHERTEXT_COLOR: RGBColor = RGBColor(0xDB, 0x45, 0x45);

const LEGEND_HEIGHT: i32 = 60;
const BAR_WIDTH: f64 = 0.4;

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        ChartOptions {
            title: "Frequency Analysis: English vs Caesar".to_string(),
            width: 1200,
            height: 800,
        }
    }
}

/// Renders `reference` and `observed` side by side for every letter and
/// writes the PNG to `output_path`.
///
/// Letters run along the x-axis, percentages up the y-axis. The legend sits
/// in a strip above the plot with both series laid out horizontally.
pub fn render_frequency_chart(
    output_path: &Path,
    reference: &FrequencyTable,
    observed: &FrequencyTable,
    options: &ChartOptions,
) -> Result<()> {
    if options.width == 0 || options.height <= (LEGEND_HEIGHT as u32) * 2 {
        return Err(PlotError::InvalidData(format!(
            "Chart size {}x{} is too small",
            options.width, options.height
        )));
    }

    let root = BitMapBackend::new(output_path, (options.width, options.height))
        .into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let (legend_area, plot_area) = root.split_vertically(LEGEND_HEIGHT);
    draw_legend(&legend_area, options.width)?;

    let key_points: Vec<f64> = (0..ALPHABET_LEN).map(|pos| pos as f64).collect();
    let x_range = (-0.5f64..ALPHABET_LEN as f64 - 0.5).with_key_points(key_points);

    let mut chart = ChartBuilder::on(&plot_area)
        .caption(&options.title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(x_range, 0f64..y_upper_bound(reference, observed))
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Letter")
        .y_desc("Frequency %")
        .x_label_formatter(&|x| axis_letter(*x))
        .label_style(("sans-serif", 25))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(bars(reference, -BAR_WIDTH, ENGLISH_COLOR))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    chart
        .draw_series(bars(observed, 0.0, CIPHERTEXT_COLOR))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    info!(path = %output_path.display(), "saved frequency chart");
    Ok(())
}

fn draw_legend<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, width: u32) -> Result<()> {
    let center = width as i32 / 2;
    let entries = [
        ("English", ENGLISH_COLOR, center - 180),
        ("Ciphertext", CIPHERTEXT_COLOR, center + 20),
    ];

    for (label, color, x) in entries {
        area.draw(&Rectangle::new([(x, 20), (x + 24, 44)], color.filled()))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
        area.draw(&Text::new(label, (x + 32, 20), ("sans-serif", 24).into_font()))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }
    Ok(())
}

fn bars(
    table: &FrequencyTable,
    offset: f64,
    color: RGBColor,
) -> impl Iterator<Item = Rectangle<(f64, f64)>> + '_ {
    table.values().iter().enumerate().map(move |(pos, &value)| {
        let left = pos as f64 + offset;
        Rectangle::new([(left, 0.0), (left + BAR_WIDTH, value)], color.filled())
    })
}

/// Top of the y-axis: 10% headroom over the tallest bar, never below 1.
fn y_upper_bound(reference: &FrequencyTable, observed: &FrequencyTable) -> f64 {
    let tallest = reference
        .values()
        .iter()
        .chain(observed.values().iter())
        .fold(0.0f64, |acc, &v| acc.max(v));
    (tallest * 1.1).max(1.0)
}

fn axis_letter(x: f64) -> String {
    let pos = x.round();
    if (0.0..ALPHABET_LEN as f64).contains(&pos) {
        letter_at(pos as u8).to_string()
    } else {
        String::new()
    }
}
