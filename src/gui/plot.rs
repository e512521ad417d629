use super::app::PlotApp;
use eframe::egui;
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints};

pub fn render_plot(app: &PlotApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label(format!("{} points", app.points.len()));
        if let Some(value) = app.final_value {
            ui.label(format!("final QR: {:.6}", value));
        }
    });

    ui.separator();

    Plot::new("qr_plot")
        .legend(Legend::default().position(Corner::RightBottom))
        .x_axis_label("Time")
        .y_axis_label("QR")
        .show(ui, |plot_ui| {
            let plot_points = PlotPoints::new(app.points.clone());
            plot_ui.line(Line::new(plot_points).name(app.line_name()));
        });
}
