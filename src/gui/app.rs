use crate::series::FinalizedSeries;
use eframe::egui;

pub struct PlotApp {
    pub points: Vec<[f64; 2]>,
    pub theta: f64,
    pub final_value: Option<f64>,
}

impl PlotApp {
    pub fn new(series: &FinalizedSeries, theta: f64) -> Self {
        Self {
            points: series.points(),
            theta,
            final_value: series.values().last().copied(),
        }
    }

    pub fn line_name(&self) -> String {
        format!("QR (theta = {})", self.theta)
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            super::plot::render_plot(self, ui);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Series;

    #[test]
    fn app_takes_points_in_time_order() {
        let mut series = Series::seed(1.0, 0);
        series.push_front(0.5, 3);
        let app = PlotApp::new(&series.finalize(), 0.7);

        assert_eq!(app.points, vec![[0.0, 1.0], [3.0, 0.5]]);
        assert_eq!(app.final_value, Some(0.5));
        assert_eq!(app.line_name(), "QR (theta = 0.7)");
    }
}
