use num_traits::Float;

/// `base^exponent` for exponents wider than `powi` takes; out-of-range
/// exponents saturate to the `i32` bounds.
pub(crate) fn powi_saturating<F: Float>(base: F, exponent: i64) -> F {
    let exponent = exponent.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    base.powi(exponent)
}

/// Weight of a sample taken at `sample_time` as seen from `reference_time`:
/// `theta^(reference_time - sample_time)`.
///
/// Nothing is validated. `theta > 1` grows with distance, a negative `theta`
/// alternates sign and a sample newer than the reference gets a negative
/// exponent.
pub fn decay_weight<F: Float>(theta: F, reference_time: i32, sample_time: i32) -> F {
    powi_saturating(theta, i64::from(reference_time) - i64::from(sample_time))
}

/// Normalized exponentially-decayed average of `values`.
///
/// `times[0]` is the reference point, so the front of the series always has
/// weight one. Pairs are matched positionally; the result is
/// `sum(w_i * value_i) / sum(w_i)`.
///
/// A zero weight sum (or an empty series) is not guarded against and comes
/// back as NaN or infinity.
pub fn weighted_value<F: Float>(values: &[F], times: &[i32], theta: F) -> F {
    debug_assert_eq!(values.len(), times.len());
    let reference_time = times.first().copied().unwrap_or_default();

    let (numerator, denominator) = values.iter().zip(times).fold(
        (F::zero(), F::zero()),
        |(numerator, denominator), (&value, &time)| {
            let weight = decay_weight(theta, reference_time, time);
            (numerator + weight * value, denominator + weight)
        },
    );

    numerator / denominator
}

/// Quality of recommendation with the trust model's correction terms.
///
/// Every sample adds `qrxf` to the numerator and `|cf|` to the denominator on
/// top of its decayed weight. A zero denominator gives 0, and the result is
/// clamped to `[-1, 1]`. With both terms zero this is [`weighted_value`]
/// guarded and clamped.
pub fn calculate_qr<F: Float>(values: &[F], times: &[i32], theta: F, qrxf: F, cf: F) -> F {
    debug_assert_eq!(values.len(), times.len());
    let reference_time = times.first().copied().unwrap_or_default();

    let (numerator, denominator) = values.iter().zip(times).fold(
        (F::zero(), F::zero()),
        |(numerator, denominator), (&value, &time)| {
            let weight = decay_weight(theta, reference_time, time);
            (numerator + weight * value + qrxf, denominator + weight + cf.abs())
        },
    );

    if denominator == F::zero() {
        return F::zero();
    }

    let qr = numerator / denominator;
    if qr < -F::one() {
        -F::one()
    } else if qr > F::one() {
        F::one()
    } else {
        qr
    }
}
