use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub show_window: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: "Recursive QR estimate".to_string(),
            width: 1024,
            height: 768,
            show_window: true,
        }
    }
}
