//! Compressive transform applied to raw weighted scores.

use lendscore_core::constants::COMPRESSION_FACTOR;

/// `ln(1 + raw * COMPRESSION_FACTOR)`.
///
/// `raw` is non-negative for any valid configuration, so the result is
/// non-negative and monotonically increasing in `raw`.
pub fn compress(raw: f64) -> f64 {
    (raw * COMPRESSION_FACTOR).ln_1p()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn compress_zero_is_zero() {
        assert_eq!(compress(0.0), 0.0);
    }

    #[test]
    fn compress_concrete_value() {
        // ln(1 + 19.6 * 5) = ln(99)
        assert!((compress(19.6) - 99f64.ln()).abs() < 1e-12);
        assert!((compress(19.6) - 4.595_119_850_134_59).abs() < 1e-9);
    }

    #[test]
    fn compress_shrinks_gaps_at_the_top() {
        let low_gap = compress(2.0) - compress(1.0);
        let high_gap = compress(21.0) - compress(20.0);
        assert!(high_gap < low_gap);
    }

    proptest! {
        #[test]
        fn compress_non_negative(raw in 0.0f64..1e6) {
            prop_assert!(compress(raw) >= 0.0);
        }

        #[test]
        fn compress_monotonic(a in 0.0f64..1e4, b in 0.0f64..1e4) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(compress(lo) <= compress(hi));
        }
    }
}
