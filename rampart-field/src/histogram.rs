use serde::{Deserialize, Serialize};

use crate::range::ScalarRange;

/// Frequency histogram bucketed over a field's display range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub counts: Vec<u32>,
    pub max_count: u32,
}

impl Histogram {
    pub fn from_counts(counts: Vec<u32>) -> Self {
        let max_count = counts.iter().copied().max().unwrap_or(0);
        Self { counts, max_count }
    }

    /// Buckets raw sample values over the full extent of `range`.
    /// Out-of-range samples are ignored.
    pub fn from_values(values: &[f32], range: &ScalarRange, buckets: usize) -> Self {
        let mut counts = vec![0u32; buckets];
        let span = range.span();
        if buckets > 0 && span > 0.0 {
            for &v in values {
                if !range.contains(v) {
                    continue;
                }
                let mut bin = ((v - range.min) / span * buckets as f32).floor() as usize;
                if bin == buckets {
                    bin -= 1;
                }
                counts[bin] += 1;
            }
        }
        Self::from_counts(counts)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
