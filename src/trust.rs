//! Report weighting and trust aggregation.
//!
//! Reports carry the (service, capability) context they were made in. Reports
//! far from the target context are dropped, the rest are weighted by context
//! distance and age, and trust in each node is the weighted mean of
//! `QR * note` over the reports made about it.

use crate::weighted_average::powi_saturating;

/// A point in (service, capability) space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub service: i32,
    pub capability: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub service: i32,
    pub capability: i32,
    /// -1, 0 or 1
    pub note: i32,
    pub time: i32,
}

fn find_dist(target: i32, current: i32) -> f64 {
    (i64::from(target) - i64::from(current)).abs() as f64
}

/// Squared distances from the target context to the context bounds.
fn max_dist_sq(target: Context, max: Context) -> (f64, f64) {
    (
        find_dist(target.service, max.service).powi(2),
        find_dist(target.capability, max.capability).powi(2),
    )
}

/// Distance from a report to the target context.
///
/// The smaller of the scaled euclidean distance and a note-dependent term:
/// non-negative notes are judged by how far service sits below its bound,
/// negative notes by capability.
pub fn report_dist(report: &Report, target: Context, max: Context, eta: i32) -> f64 {
    let (ds_max_sq, dc_max_sq) = max_dist_sq(target, max);
    let scale = ds_max_sq + dc_max_sq;
    let eta = f64::from(eta);

    let shared_part = (scale
        * (find_dist(target.service, report.service).powi(2) / ds_max_sq
            + find_dist(target.capability, report.capability).powi(2) / dc_max_sq))
        .sqrt();

    let (s_j, c_j) = (f64::from(report.service), f64::from(report.capability));
    let (s_target, c_target) = (f64::from(target.service), f64::from(target.capability));
    let (s_max, c_max) = (f64::from(max.service), f64::from(max.capability));

    let unique_part = if report.note >= 0 {
        (scale
            * (((s_max - s_j) / (s_max - (s_target - eta))).powi(2)
                + (c_j / (c_target + eta)).powi(2)))
        .sqrt()
    } else {
        (scale
            * (((c_max - c_j) / (c_max - (c_target - eta))).powi(2)
                + (s_j / (s_target + eta)).powi(2)))
        .sqrt()
    };

    shared_part.min(unique_part)
}

/// Distance of every report to the target, `None` for reports that are
/// dropped: negative context values, or a distance at or past the diagonal
/// of the context bounds.
pub fn restrict_reports(reports: &[Report], target: Context, max: Context, eta: i32) -> Vec<Option<f64>> {
    let (ds_max_sq, dc_max_sq) = max_dist_sq(target, max);
    let threshold = (ds_max_sq + dc_max_sq).sqrt();

    reports
        .iter()
        .map(|report| {
            if report.capability < 0 || report.service < 0 {
                return None;
            }
            let distance = report_dist(report, target, max, eta);
            (distance < threshold).then_some(distance)
        })
        .collect()
}

/// 1 for a negative note, 0 for neutral and positive ones.
pub fn note_emphasis(note: i32) -> i64 {
    let note = i64::from(note);
    (note * note - note) / 2
}

/// `lambda^dist * theta^((s + 1) * (current_time - report_time))`, where `s`
/// is the note emphasis, so negative reports age twice as fast.
pub fn weight_calc(lambda: f64, theta: f64, dist: f64, note: i32, current_time: i32, report_time: i32) -> f64 {
    let age = i64::from(current_time) - i64::from(report_time);
    let exponent = (note_emphasis(note) + 1).saturating_mul(age);
    lambda.powf(dist) * powi_saturating(theta, exponent)
}

/// Weights for reports that survived [`restrict_reports`].
pub fn weigh_reports(
    lambda: f64,
    theta: f64,
    reports: &[Report],
    distances: &[Option<f64>],
    current_time: i32,
) -> Vec<Option<f64>> {
    debug_assert_eq!(reports.len(), distances.len());
    reports
        .iter()
        .zip(distances)
        .map(|(report, distance)| {
            distance.map(|dist| weight_calc(lambda, theta, dist, report.note, current_time, report.time))
        })
        .collect()
}

/// Trust in each node from the weights of reports about it.
///
/// Row `i` of `weights` and `reported_notes` holds the reports made about node
/// `i`, column `j` the reporting node, whose QR is `qrs[j]`. Missing and
/// negative weights are skipped; a node with no usable weight gets 0.
pub fn calculate_trust(weights: &[Vec<Option<f64>>], qrs: &[f64], reported_notes: &[Vec<i32>]) -> Vec<f64> {
    weights
        .iter()
        .zip(reported_notes)
        .map(|(row, notes)| {
            let (numerator, denominator) = row
                .iter()
                .zip(qrs)
                .zip(notes)
                .filter_map(|((weight, &qr), &note)| match *weight {
                    Some(w) if w >= 0.0 => Some((w, qr, note)),
                    _ => None,
                })
                .fold((0.0, 0.0), |(numerator, denominator), (w, qr, note)| {
                    (numerator + w * qr * f64::from(note), denominator + w)
                });

            if denominator == 0.0 {
                0.0
            } else {
                numerator / denominator
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: Context = Context { service: 50, capability: 50 };
    const MAX: Context = Context { service: 101, capability: 101 };

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn report(service: i32, capability: i32, note: i32, time: i32) -> Report {
        Report { service, capability, note, time }
    }

    #[test]
    fn report_at_target_has_zero_shared_distance() {
        let r = report(50, 50, 1, 0);
        assert_eq!(report_dist(&r, TARGET, MAX, 1), 0.0);
    }

    #[test]
    fn report_dist_takes_the_smaller_part() {
        // ds_max_sq = dc_max_sq = 51^2
        let r = report(60, 40, 1, 0);
        let scale = 2.0 * 51.0f64.powi(2);
        let shared = (scale * (100.0 / 51.0f64.powi(2) * 2.0)).sqrt();
        let unique = (scale * ((41.0f64 / 52.0).powi(2) + (40.0f64 / 51.0).powi(2))).sqrt();
        assert!(approx_eq(report_dist(&r, TARGET, MAX, 1), shared.min(unique)));
        assert!(approx_eq(shared, 20.0));
    }

    #[test]
    fn negative_note_swaps_service_and_capability() {
        let positive = report(30, 70, 1, 0);
        let negative = report(70, 30, -1, 0);
        assert!(approx_eq(
            report_dist(&positive, TARGET, MAX, 1),
            report_dist(&negative, TARGET, MAX, 1)
        ));
    }

    #[test]
    fn restrict_drops_negative_contexts_and_far_reports() {
        let reports = [
            report(50, 50, 1, 0),
            report(-1, 50, 1, 0),
            report(50, -1, 1, 0),
            report(0, 0, 1, 0),
        ];
        let distances = restrict_reports(&reports, TARGET, MAX, 1);

        assert_eq!(distances.len(), reports.len());
        assert_eq!(distances[0], Some(0.0));
        assert_eq!(distances[1], None);
        assert_eq!(distances[2], None);
        // both parts are past the diagonal of the bounds
        assert_eq!(distances[3], None);
    }

    #[test]
    fn only_negative_notes_are_emphasised() {
        assert_eq!(note_emphasis(-1), 1);
        assert_eq!(note_emphasis(0), 0);
        assert_eq!(note_emphasis(1), 0);
    }

    #[test]
    fn weight_decays_with_distance_and_age() {
        assert_eq!(weight_calc(0.7, 0.7, 0.0, 1, 5, 5), 1.0);
        assert!(approx_eq(weight_calc(0.5, 0.7, 2.0, 1, 5, 3), 0.25 * 0.49));
        // negative notes age twice as fast
        assert!(approx_eq(weight_calc(0.5, 0.7, 0.0, -1, 5, 3), 0.7f64.powi(4)));
    }

    #[test]
    fn weight_survives_extreme_times() {
        assert_eq!(weight_calc(0.5, 0.7, 0.0, -1, i32::MAX, i32::MIN), 0.0);
    }

    #[test]
    fn weigh_reports_skips_restricted_ones() {
        let reports = [report(50, 50, 1, 3), report(50, 50, -1, 3)];
        let weights = weigh_reports(0.5, 0.7, &reports, &[Some(0.0), None], 5);
        assert_eq!(weights.len(), 2);
        assert!(approx_eq(weights[0].unwrap(), 0.49));
        assert_eq!(weights[1], None);
    }

    #[test]
    fn trust_is_weighted_mean_of_qr_times_note() {
        let weights = vec![
            vec![Some(1.0), Some(3.0), None],
            vec![Some(-1.0), None, None],
            vec![Some(2.0), Some(2.0), Some(0.0)],
        ];
        let qrs = [1.0, 0.5, -1.0];
        let notes = vec![vec![1, -1, 1], vec![1, 1, 1], vec![1, 1, 1]];

        let trust = calculate_trust(&weights, &qrs, &notes);
        assert_eq!(trust.len(), 3);
        assert!(approx_eq(trust[0], (1.0 - 1.5) / 4.0));
        assert_eq!(trust[1], 0.0);
        assert!(approx_eq(trust[2], (2.0 + 1.0) / 4.0));
    }

    #[test]
    fn pipeline_turns_reports_into_trust() {
        let reports = [report(50, 50, 1, 4), report(55, 45, -1, 2), report(-1, 0, 1, 4)];
        let distances = restrict_reports(&reports, TARGET, MAX, 1);
        let weights = weigh_reports(0.7, 0.7, &reports, &distances, 5);
        let notes = vec![reports.iter().map(|r| r.note).collect::<Vec<_>>()];

        let trust = calculate_trust(&[weights], &[1.0, 1.0, 1.0], &notes);
        assert_eq!(trust.len(), 1);
        assert!((-1.0..=1.0).contains(&trust[0]));
        assert!(trust[0] > 0.0);
    }
}
