use super::estimator::EstimatorConfig;
use super::plot::PlotConfig;
use crate::error::AppError;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub estimator: EstimatorConfig,
    pub plot: PlotConfig,
}

impl AppConfig {
    pub const CONFIG_FILE_NAME: &'static str = "qr_config.json";

    pub fn save_to_file(&self, path: &Path) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("App config saved to {}", path.display());
        Ok(())
    }

    /// Reads the config at `path`, falling back to defaults when it is
    /// missing or broken.
    pub fn load_from_file(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(json) => match serde_json::from_str(&json) {
                    Ok(config) => {
                        info!("App config loaded from {}", path.display());
                        return config;
                    }
                    Err(e) => warn!("Failed to parse app config file: {}", e),
                },
                Err(e) => warn!("Failed to read app config file: {}", e),
            }
        } else {
            info!("No app config file found, using defaults");
        }
        Self::default()
    }
}
