use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub theta: f64,
    pub iterations: usize,
    pub seed_value: f64,
    pub seed_time: i32,
    /// Time stamped on the first computed value; later ones count up by one,
    /// saturating at `i32::MAX`.
    /// With the default of 0 the seed and the first value share time 0.
    pub first_time: i32,
    /// When set, each step uses the corrected and clamped QR instead of the
    /// plain decayed average.
    pub correction: Option<QrCorrection>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            theta: 0.7,
            iterations: 500,
            seed_value: 1.0,
            seed_time: 0,
            first_time: 0,
            correction: None,
        }
    }
}

/// Per-sample terms added to the QR numerator (`qrxf`) and denominator (`|cf|`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrCorrection {
    pub qrxf: f64,
    pub cf: f64,
}
