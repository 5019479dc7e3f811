//! Score distribution report.
//!
//! Bins final scores into equal-width buckets across the configured range.
//! The first bucket is closed on both ends; every later bucket is `(lo, hi]`,
//! so a score sitting exactly on a boundary belongs to the lower bucket.

use lendscore_core::config::ScoreRange;
use lendscore_core::types::ScoreResult;
use serde::Serialize;

/// Widest bar drawn by [`ScoreDistribution::render`].
const BAR_WIDTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreDistribution {
    pub buckets: Vec<Bucket>,
    /// Scores that fell outside the range and were not binned.
    pub out_of_range: usize,
}

impl ScoreDistribution {
    /// Bin `scores` into `bucket_count` buckets (at least one).
    pub fn from_scores(scores: &[ScoreResult], range: &ScoreRange, bucket_count: usize) -> Self {
        let n = bucket_count.max(1);
        let width = range.width() / n as f64;

        let mut buckets: Vec<Bucket> = (0..n)
            .map(|i| Bucket {
                lo: range.min + i as f64 * width,
                hi: if i + 1 == n {
                    range.max
                } else {
                    range.min + (i + 1) as f64 * width
                },
                count: 0,
            })
            .collect();

        let mut out_of_range = 0;
        for s in scores {
            let v = s.credit_score;
            if !range.contains(v) {
                out_of_range += 1;
                continue;
            }
            let index = ((v - range.min) / width).ceil() as usize;
            buckets[index.saturating_sub(1).min(n - 1)].count += 1;
        }

        Self {
            buckets,
            out_of_range,
        }
    }

    /// Number of binned scores.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }

    /// Text histogram, one line per bucket.
    pub fn render(&self) -> String {
        let peak = self.buckets.iter().map(|b| b.count).max().unwrap_or(0);
        let labels: Vec<String> = self
            .buckets
            .iter()
            .map(|b| format!("{:.0}-{:.0}", b.lo, b.hi))
            .collect();
        let label_width = labels.iter().map(String::len).max().unwrap_or(0);

        let mut out = String::new();
        for (bucket, label) in self.buckets.iter().zip(&labels) {
            let bar = if peak == 0 {
                0
            } else {
                (bucket.count * BAR_WIDTH).div_ceil(peak)
            };
            out.push_str(&format!(
                "{label:>label_width$} | {} {}\n",
                "#".repeat(bar),
                bucket.count
            ));
        }
        out
    }
}
