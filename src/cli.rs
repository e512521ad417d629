use crate::config::{AppConfig, QrCorrection};
use clap::Parser;
use std::path::PathBuf;

/// Recursively-weighted QR estimate, plotted over time.
#[derive(Parser, Debug)]
#[command(name = "plot-qr", version, about)]
pub struct Cli {
    /// Decay parameter, closer to 0 forgets faster
    #[arg(long, allow_negative_numbers = true)]
    pub theta: Option<f64>,

    /// Number of values to compute after the seed
    #[arg(long)]
    pub iterations: Option<usize>,

    #[arg(long, allow_negative_numbers = true)]
    pub seed_value: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub seed_time: Option<i32>,

    /// Time given to the first computed value
    #[arg(long, allow_negative_numbers = true)]
    pub first_time: Option<i32>,

    /// Per-sample numerator term; enables the corrected, clamped QR
    #[arg(long, allow_negative_numbers = true)]
    pub qrxf: Option<f64>,

    /// Per-sample denominator term (absolute value is used); enables the corrected, clamped QR
    #[arg(long, allow_negative_numbers = true)]
    pub cf: Option<f64>,

    /// JSON config file
    #[arg(long, default_value = AppConfig::CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Write the effective config back to the config file
    #[arg(long)]
    pub save_config: bool,

    /// Export the series (.csv, .json, .svg or .png), may be repeated
    #[arg(short, long)]
    pub output: Vec<PathBuf>,

    /// Do not open the plot window
    #[arg(long)]
    pub no_window: bool,
}

impl Cli {
    /// Overrides file settings with whatever was given on the command line.
    pub fn apply(&self, config: &mut AppConfig) {
        let estimator = &mut config.estimator;
        if let Some(theta) = self.theta {
            estimator.theta = theta;
        }
        if let Some(iterations) = self.iterations {
            estimator.iterations = iterations;
        }
        if let Some(seed_value) = self.seed_value {
            estimator.seed_value = seed_value;
        }
        if let Some(seed_time) = self.seed_time {
            estimator.seed_time = seed_time;
        }
        if let Some(first_time) = self.first_time {
            estimator.first_time = first_time;
        }
        if self.qrxf.is_some() || self.cf.is_some() {
            let correction = estimator.correction.get_or_insert_with(QrCorrection::default);
            if let Some(qrxf) = self.qrxf {
                correction.qrxf = qrxf;
            }
            if let Some(cf) = self.cf {
                correction.cf = cf;
            }
        }
        if self.no_window {
            config.plot.show_window = false;
        }
    }
}
