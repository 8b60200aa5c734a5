use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds `value` to `decimals` places, midpoints away from zero.
///
/// Returns `None` for NaN and infinities so callers can drop the metric.
pub fn round_to(value: f64, decimals: u32) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }

    match Decimal::from_f64(value) {
        Some(decimal) => decimal
            .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
            .to_f64(),
        // Outside Decimal's range; plain float rounding is all that is left.
        None => {
            let factor = 10f64.powi(decimals as i32);
            Some((value * factor).round() / factor)
        }
    }
}

/// `numerator / denominator`, or `None` when either operand is not finite, the
/// denominator is zero, or the result is not finite.
pub fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if !numerator.is_finite() || !denominator.is_finite() || denominator == 0.0 {
        return None;
    }
    let result = numerator / denominator;
    result.is_finite().then_some(result)
}

/// `100 * numerator / denominator`, with the same guards as [`ratio`].
pub fn percent(numerator: f64, denominator: f64) -> Option<f64> {
    ratio(numerator, denominator).map(|r| r * 100.0)
}

/// Plain sum. Overflows to an infinity when the true sum is outside `f64` range.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean; `None` for an empty slice.
///
/// Stays finite for finite inputs even when their sum overflows.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let total = sum(values);
    if total.is_finite() {
        Some(total / n)
    } else {
        Some(values.iter().map(|v| v / n).sum())
    }
}

/// Median; the mean of the two middle values for an even count.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some(sorted[mid - 1] / 2.0 + sorted[mid] / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Sample standard deviation (n - 1 denominator); `None` below two values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let avg = mean(values)?;
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(variance.sqrt())
}
