pub mod app;
pub mod plot;

pub use app::PlotApp;

use crate::config::PlotConfig;
use crate::error::AppError;
use crate::series::FinalizedSeries;
use eframe::egui;
use log::info;

/// Opens the plot window and blocks until it is closed.
pub fn show(series: &FinalizedSeries, theta: f64, plot: &PlotConfig) -> Result<(), AppError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([plot.width as f32, plot.height as f32]),
        ..Default::default()
    };
    let app = PlotApp::new(series, theta);

    info!("Opening plot window");
    eframe::run_native(&plot.title, options, Box::new(|_cc| Ok(Box::new(app))))?;
    Ok(())
}
