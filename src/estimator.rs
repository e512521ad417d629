use crate::config::EstimatorConfig;
use crate::series::{FinalizedSeries, Series};
use log::{debug, info, trace, warn};

/// Grows a series by repeatedly prepending its own decayed average.
pub struct RecursiveEstimator {
    config: EstimatorConfig,
}

impl RecursiveEstimator {
    pub fn new(config: EstimatorConfig) -> Self {
        RecursiveEstimator { config }
    }

    /// Computes the next value over the whole series and inserts it at the
    /// front, stamped with `time`.
    pub fn step(&self, series: &mut Series, time: i32) -> f64 {
        let theta = self.config.theta;
        let value = match self.config.correction {
            None => series.weighted_value(theta),
            Some(correction) => series.calculate_qr(theta, correction.qrxf, correction.cf),
        };
        series.push_front(value, time);
        trace!("t={} qr={}", time, value);
        value
    }

    /// Times stamped on each computed value, counting up from `first_time`
    /// and saturating at `i32::MAX`.
    pub fn iteration_times(&self) -> impl Iterator<Item = i32> {
        let first_time = self.config.first_time;
        (0..self.config.iterations)
            .map(move |k| first_time.saturating_add(i32::try_from(k).unwrap_or(i32::MAX)))
    }

    /// Runs every iteration without finalizing, front holds the latest time.
    pub fn build(&self) -> Series {
        let mut series = Series::seed(self.config.seed_value, self.config.seed_time);
        for time in self.iteration_times() {
            self.step(&mut series, time);
        }
        if let (Some(time), Some(value)) = (series.times().next(), series.values().next()) {
            debug!("Built series of {} pairs, front ({}, t={})", series.len(), value, time);
        }
        series
    }

    pub fn run(&self) -> FinalizedSeries {
        info!(
            "Estimating {} iterations with theta={} from seed ({}, t={})",
            self.config.iterations, self.config.theta, self.config.seed_value, self.config.seed_time
        );

        let series = self.build().finalize();

        let non_finite = series.non_finite_count();
        if non_finite > 0 {
            warn!("{} of {} estimates are not finite", non_finite, series.len());
        }
        if let Some(last) = series.values().last() {
            debug!("Final estimate: {}", last);
        }
        series
    }
}
