pub mod app;
pub mod estimator;
pub mod plot;

// Re-export commonly used types for convenience
pub use app::AppConfig;
pub use estimator::{EstimatorConfig, QrCorrection};
pub use plot::PlotConfig;
