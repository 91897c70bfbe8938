//! Draws performance profiles with the [`plotters`] crate.
//!
//! The output format follows the file extension: `.svg` uses the SVG backend and
//! `.png` the bitmap backend.

use super::{
    dashes::dash_polyline,
    errors::RenderError,
    legend::legend_label,
    regions::{threshold_regions, RegionKind},
    settings::{RenderSettings, TICK_COUNT},
    style::{self, style_for, Rgb, StyleTriple},
};
use crate::distribution::{
    builder::Profile,
    staircase::{clip_staircase, step_post_path},
};
use crate::transform::processed_matrix::ProcessedMatrix;
use crate::utilities::ticks::{round_tick, ticks};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

type Result<T> = core::result::Result<T, RenderError>;

const LINE_WIDTH: u32 = 2;
const MARKER_SIZE: i32 = 4;
const SERIES_ALPHA: f64 = 0.75;
const GRID_ALPHA: f64 = 0.15;
const REGION_ALPHA: f64 = 0.2;

/// Maps data values onto the drawn x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisMapping {
    pub log_scale: bool,
}

impl AxisMapping {
    /// Data value to axis position. Non-positive values have no position on a log axis.
    pub fn to_axis(self, value: f64) -> f64 {
        if self.log_scale {
            if value > 0.0 {
                value.log10()
            } else {
                f64::NAN
            }
        } else {
            value
        }
    }

    /// Axis position back to data value.
    pub fn from_axis(self, position: f64) -> f64 {
        if self.log_scale {
            10f64.powf(position)
        } else {
            position
        }
    }

    /// Axis positions of `[x_min, x_max]`, validated for drawing.
    pub fn axis_range(self, x_min: f64, x_max: f64) -> Result<(f64, f64)> {
        if !(x_min.is_finite() && x_max.is_finite() && x_min < x_max) {
            return Err(RenderError::InvalidAxis { x_min, x_max });
        }

        if self.log_scale && x_min <= 0.0 {
            return Err(RenderError::InvalidLogAxis { x_min, x_max });
        }

        Ok((self.to_axis(x_min), self.to_axis(x_max)))
    }
}

/// Renders a profile and saves it to `output_path`.
///
/// # Arguments
/// * `profile` - Sorted distributions of every solver
/// * `processed` - Pipeline output; supplies the visible x range
/// * `settings` - Cosmetic options
/// * `output_path` - Destination; the extension picks the format
///
/// # Returns
/// * `Ok(())` - If the chart was drawn and saved
/// * `Err(RenderError)` - For an unknown extension, an unusable axis range or a backend failure
pub fn render_profile(
    profile: &Profile,
    processed: &ProcessedMatrix,
    settings: &RenderSettings,
    output_path: &Path,
) -> Result<()> {
    let extension = output_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "svg" => {
            let root = SVGBackend::new(output_path, settings.size).into_drawing_area();
            draw_profile(root, profile, processed, settings)?;
        }
        "png" => {
            let root = BitMapBackend::new(output_path, settings.size).into_drawing_area();
            draw_profile(root, profile, processed, settings)?;
        }
        _ => return Err(RenderError::UnsupportedFormat(extension)),
    }

    info!(path = %output_path.display(), "Saved performance profile");
    Ok(())
}

fn draw_profile<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    profile: &Profile,
    processed: &ProcessedMatrix,
    settings: &RenderSettings,
) -> Result<()> {
    let mapping = AxisMapping {
        log_scale: settings.log_scale,
    };
    let (x_min, x_max) = (processed.x_min(), processed.x_max());
    let (axis_lo, axis_hi) = mapping.axis_range(x_min, x_max)?;

    let x_keys: Vec<f64> = ticks(x_min, x_max, TICK_COUNT)
        .into_iter()
        .map(|tick| mapping.to_axis(tick))
        .filter(|position| position.is_finite())
        .collect();
    let y_keys = ticks(0.0, 1.0, TICK_COUNT);

    root.fill(&WHITE)
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    let mut builder = ChartBuilder::on(&root);
    builder
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(70);
    if let Some(title) = &settings.title {
        builder.caption(title, ("sans-serif", 30));
    }

    let mut chart = builder
        .build_cartesian_2d(
            (axis_lo..axis_hi).with_key_points(x_keys),
            (0.0_f64..1.0).with_key_points(y_keys),
        )
        .map_err(|e| RenderError::ChartConfig(e.to_string()))?;

    let x_formatter = |position: &f64| format!("{}", round_tick(mapping.from_axis(*position)));
    let y_formatter = |position: &f64| format!("{}", round_tick(*position));
    chart
        .configure_mesh()
        .max_light_lines(0)
        .bold_line_style(BLACK.mix(GRID_ALPHA))
        .x_desc(settings.x_label.as_str())
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .label_style(("sans-serif", 18))
        .draw()
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    if settings.draw_threshold_regions {
        let regions = threshold_regions(x_min, x_max)
            .into_iter()
            .filter_map(|region| {
                let start = mapping.to_axis(region.start).clamp(axis_lo, axis_hi);
                let end = mapping.to_axis(region.end).clamp(axis_lo, axis_hi);
                let color = match region.kind {
                    RegionKind::Below => GREEN,
                    RegionKind::AtOrAbove => RED,
                };
                (start.is_finite() && end.is_finite() && start < end).then(|| {
                    Rectangle::new([(start, 0.0), (end, 1.0)], color.mix(REGION_ALPHA).filled())
                })
            });

        chart
            .draw_series(regions)
            .map_err(|e| RenderError::Drawing(e.to_string()))?;
    }

    for series in profile.series() {
        let style = style_for(settings.style_offset + series.column);
        let color = series_color(style, settings);

        let x_axis: Vec<f64> = series.x.iter().map(|&x| mapping.to_axis(x)).collect();
        let path = clip_staircase(&step_post_path(&x_axis, profile.y()), axis_lo, axis_hi);
        let pixels: Vec<(i32, i32)> = path.iter().map(|point| chart.backend_coord(point)).collect();

        for piece in dash_polyline(&pixels, style.dash.segments()) {
            let line_style = color.mix(SERIES_ALPHA).stroke_width(LINE_WIDTH);
            root.draw(&PathElement::new(piece, line_style))
                .map_err(|e| RenderError::Drawing(e.to_string()))?;
        }

        let visible = x_axis
            .iter()
            .zip(profile.y())
            .filter(|(x, _)| x.is_finite() && **x >= axis_lo && **x <= axis_hi);
        for (&x, &y) in visible {
            let center = chart.backend_coord(&(x, y));
            draw_marker(&root, center, style, color, settings.black_and_white)?;
        }

        // Empty series, only there to register a legend entry.
        chart
            .draw_series(LineSeries::new(std::iter::empty::<(f64, f64)>(), color))
            .map_err(|e| RenderError::Drawing(e.to_string()))?
            .label(legend_label(&series.label))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH))
            });
    }

    if settings.legend && !profile.series().is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", 16))
            .draw()
            .map_err(|e| RenderError::Drawing(e.to_string()))?;
    }

    root.present()
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    Ok(())
}

fn series_color(style: StyleTriple, settings: &RenderSettings) -> RGBColor {
    let Rgb(r, g, b) = if settings.black_and_white {
        style::BLACK
    } else {
        style.color
    };
    RGBColor(r, g, b)
}

fn draw_marker<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    center: (i32, i32),
    style: StyleTriple,
    color: RGBColor,
    hollow: bool,
) -> Result<()> {
    let offset = |points: &[(i32, i32)]| -> Vec<(i32, i32)> {
        points
            .iter()
            .map(|&(dx, dy)| (center.0 + dx, center.1 + dy))
            .collect()
    };

    for stroke in style.marker.strokes(MARKER_SIZE) {
        let points = offset(&stroke);
        if style.marker.is_closed() {
            let face = if hollow { WHITE.filled() } else { color.mix(SERIES_ALPHA).filled() };
            root.draw(&Polygon::new(points.clone(), face))
                .map_err(|e| RenderError::Drawing(e.to_string()))?;
        }

        root.draw(&PathElement::new(points, color.stroke_width(1)))
            .map_err(|e| RenderError::Drawing(e.to_string()))?;
    }

    Ok(())
}
