use crate::config::PlotConfig;
use crate::error::AppError;
use crate::series::FinalizedSeries;
use log::info;
use plotters::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Svg,
    Png,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(ExportFormat::Csv),
            Some("json") => Ok(ExportFormat::Json),
            Some("svg") => Ok(ExportFormat::Svg),
            Some("png") => Ok(ExportFormat::Png),
            _ => Err(AppError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

#[derive(Serialize)]
struct SeriesExport<'a> {
    theta: f64,
    #[serde(flatten)]
    series: &'a FinalizedSeries,
}

/// Writes the series to `path` in the format picked from its extension.
pub fn export(
    path: &Path,
    series: &FinalizedSeries,
    theta: f64,
    plot: &PlotConfig,
) -> Result<(), AppError> {
    match ExportFormat::from_path(path)? {
        ExportFormat::Csv => write_csv(path, series)?,
        ExportFormat::Json => write_json(path, series, theta)?,
        ExportFormat::Svg => draw_chart(SVGBackend::new(path, (plot.width, plot.height)), series, theta, plot)?,
        ExportFormat::Png => draw_chart(BitMapBackend::new(path, (plot.width, plot.height)), series, theta, plot)?,
    }
    info!("Exported {} points to {}", series.len(), path.display());
    Ok(())
}

pub fn write_csv(path: &Path, series: &FinalizedSeries) -> Result<(), AppError> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "time,value")?;
    for (time, value) in series.times().iter().zip(series.values()) {
        writeln!(out, "{},{}", time, value)?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_json(path: &Path, series: &FinalizedSeries, theta: f64) -> Result<(), AppError> {
    let out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(out, &SeriesExport { theta, series })?;
    Ok(())
}

fn render_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Render(e.to_string())
}

/// Axis bounds for the chart, widened when the data is flat.
fn chart_bounds(series: &FinalizedSeries) -> ((f64, f64), (f64, f64)) {
    let (t_min, t_max) = series.time_range().unwrap_or((0, 1));
    let (t_min, t_max) = if t_min == t_max {
        (t_min as f64 - 1.0, t_max as f64 + 1.0)
    } else {
        (t_min as f64, t_max as f64)
    };

    let (v_min, v_max) = series.value_range().unwrap_or((0.0, 1.0));
    let pad = if v_max > v_min {
        (v_max - v_min) * 0.05
    } else {
        v_min.abs().max(1.0) * 0.1
    };

    ((t_min, t_max), (v_min - pad, v_max + pad))
}

fn draw_chart<DB: DrawingBackend>(
    backend: DB,
    series: &FinalizedSeries,
    theta: f64,
    plot: &PlotConfig,
) -> Result<(), AppError> {
    let root = backend.into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let ((t_min, t_max), (v_min, v_max)) = chart_bounds(series);
    let mut chart = ChartBuilder::on(&root)
        .caption(&plot.title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(t_min..t_max, v_min..v_max)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .x_desc("Time")
        .y_desc("QR")
        .draw()
        .map_err(render_error)?;

    let points = series
        .points()
        .into_iter()
        .filter(|[_, value]| value.is_finite())
        .map(|[time, value]| (time, value));

    chart
        .draw_series(LineSeries::new(points, &BLUE))
        .map_err(render_error)?
        .label(format!("theta = {}", theta))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    Ok(())
}
