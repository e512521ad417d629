use crate::weighted_average::{calculate_qr, weighted_value};
use serde::Serialize;
use std::collections::VecDeque;

/// Paired (time, value) history that grows at the front.
///
/// Index 0 always holds the most recently inserted pair.
#[derive(Debug, Clone)]
pub struct Series {
    values: VecDeque<f64>,
    times: VecDeque<i32>,
}

impl Series {
    pub fn seed(value: f64, time: i32) -> Self {
        Series {
            values: VecDeque::from([value]),
            times: VecDeque::from([time]),
        }
    }

    pub fn push_front(&mut self, value: f64, time: i32) {
        self.values.push_front(value);
        self.times.push_front(time);
    }

    /// Decayed average of the whole series, seen from its front.
    pub fn weighted_value(&mut self, theta: f64) -> f64 {
        let values = self.values.make_contiguous();
        let times = self.times.make_contiguous();
        weighted_value(values, times, theta)
    }

    /// Corrected and clamped QR of the whole series, seen from its front.
    pub fn calculate_qr(&mut self, theta: f64, qrxf: f64, cf: f64) -> f64 {
        let values = self.values.make_contiguous();
        let times = self.times.make_contiguous();
        calculate_qr(values, times, theta, qrxf, cf)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn times(&self) -> impl Iterator<Item = i32> + '_ {
        self.times.iter().copied()
    }

    /// Reverses both sequences so they read in insertion order.
    pub fn finalize(self) -> FinalizedSeries {
        let mut values: Vec<f64> = self.values.into();
        let mut times: Vec<i32> = self.times.into();
        values.reverse();
        times.reverse();
        FinalizedSeries { times, values }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalizedSeries {
    times: Vec<i32>,
    values: Vec<f64>,
}

impl FinalizedSeries {
    pub fn times(&self) -> &[i32] {
        &self.times
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn points(&self) -> Vec<[f64; 2]> {
        self.times
            .iter()
            .zip(&self.values)
            .map(|(&time, &value)| [time as f64, value])
            .collect()
    }

    pub fn time_range(&self) -> Option<(i32, i32)> {
        let min = self.times.iter().copied().min()?;
        let max = self.times.iter().copied().max()?;
        Some((min, max))
    }

    /// Min and max over the finite values only.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |range, v| match range {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    pub fn non_finite_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_finite()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_front_keeps_lengths_in_lockstep() {
        let mut series = Series::seed(1.0, 0);
        for i in 0..10 {
            series.push_front(i as f64, i);
            assert_eq!(series.values().count(), series.times().count());
        }
        assert_eq!(series.len(), 11);
        assert_eq!(series.times().next(), Some(9));
    }

    #[test]
    fn weighted_value_uses_front_as_reference() {
        let mut series = Series::seed(0.0, 0);
        series.push_front(2.0, 1);
        let got = series.weighted_value(0.7);
        assert!((got - 2.0 / 1.7).abs() < 1e-12);
    }

    #[test]
    fn calculate_qr_clamps_the_front_estimate() {
        let mut series = Series::seed(0.5, 0);
        series.push_front(3.0, 1);
        assert_eq!(series.calculate_qr(0.7, 0.0, 0.0), 1.0);
        // weights 1 and 0.7, plus |cf| per sample
        let got = series.calculate_qr(0.7, 0.0, -2.0);
        assert!((got - 3.35 / 5.7).abs() < 1e-12);
    }

    #[test]
    fn finalize_reverses_both_sequences() {
        let mut series = Series::seed(1.0, 0);
        series.push_front(2.0, 5);
        series.push_front(3.0, 6);

        let finalized = series.finalize();
        assert_eq!(finalized.times(), &[0, 5, 6]);
        assert_eq!(finalized.values(), &[1.0, 2.0, 3.0]);
        assert_eq!(finalized.points(), vec![[0.0, 1.0], [5.0, 2.0], [6.0, 3.0]]);
    }

    #[test]
    fn ranges_skip_non_finite_values() {
        let mut series = Series::seed(1.0, 0);
        series.push_front(f64::NAN, 1);
        series.push_front(-2.0, 2);

        let finalized = series.finalize();
        assert_eq!(finalized.value_range(), Some((-2.0, 1.0)));
        assert_eq!(finalized.time_range(), Some((0, 2)));
        assert_eq!(finalized.non_finite_count(), 1);
    }
}
