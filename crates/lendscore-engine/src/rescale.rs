//! Batch min-max rescaling onto a [`ScoreRange`].
//!
//! Requires two passes: one reduction for `min`/`max` over the whole batch,
//! then the per-value affine map. The reduction must finish before any value
//! is mapped.

use lendscore_core::config::ScoreRange;
use ordered_float::OrderedFloat;

/// Batch minimum and maximum, or `None` for an empty batch.
pub fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    let min = values.iter().copied().map(OrderedFloat).min()?;
    let max = values.iter().copied().map(OrderedFloat).max()?;
    Some((min.into_inner(), max.into_inner()))
}

/// Clamp to the finite range; NaN maps to 0.
pub fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(f64::MIN, f64::MAX)
    }
}

/// Map the batch minimum to `range.min` and the batch maximum to `range.max`.
///
/// When every value is equal (including a single-value batch) the span is
/// zero and every output is `range.min`. Infinite values saturate to
/// `f64::MAX` first, so a batch of overflowed values is degenerate too.
pub fn rescale(values: &[f64], range: &ScoreRange) -> Vec<f64> {
    let values: Vec<f64> = values.iter().map(|&v| saturate(v)).collect();
    let Some((min, max)) = bounds(&values) else {
        return Vec::new();
    };

    let span = max - min;
    if span == 0.0 {
        return vec![range.min; values.len()];
    }

    // Halved operands keep the fraction finite when `max - min` overflows.
    let fraction = |v: f64| {
        if span.is_finite() {
            (v - min) / span
        } else {
            (v / 2.0 - min / 2.0) / (max / 2.0 - min / 2.0)
        }
    };

    values
        .iter()
        .map(|&v| {
            if v == max {
                // Exact top of range; the affine form can land one ulp short.
                range.max
            } else {
                range.min + fraction(v) * range.width()
            }
        })
        .collect()
}
