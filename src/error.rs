use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Plot rendering failed: {0}")]
    Render(String),
    #[error("Plot window failed: {0}")]
    Window(String),
    #[error("Unsupported export format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

impl From<eframe::Error> for AppError {
    fn from(e: eframe::Error) -> Self {
        AppError::Window(e.to_string())
    }
}
