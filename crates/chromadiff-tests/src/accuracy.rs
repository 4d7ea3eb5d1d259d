//! Accuracy statistics
//!
//! Summaries over a batch of absolute deviations, used to report how far
//! two implementations drift apart rather than only whether they agree.

/// Statistics over a batch of deviations
#[derive(Debug, Clone)]
pub struct DeltaEStats {
    /// Mean deviation
    pub mean: f64,
    /// Maximum deviation
    pub max: f64,
    /// 95th percentile deviation
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl DeltaEStats {
    /// Summarize a batch of deviations; `None` when the batch is empty
    pub fn from_deviations(deviations: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut values: Vec<f64> = deviations.into_iter().map(f64::abs).collect();
        if values.is_empty() {
            return None;
        }
        values.sort_by(f64::total_cmp);

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let p95_index = ((count as f64 * 0.95) as usize).min(count - 1);

        Some(Self {
            mean,
            max: values[count - 1],
            p95: values[p95_index],
            count,
        })
    }

    /// Every deviation is at most `tolerance`
    pub fn within(&self, tolerance: f64) -> bool {
        self.max <= tolerance
    }
}

impl std::fmt::Display for DeltaEStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "n={} mean={:.3e} p95={:.3e} max={:.3e}",
            self.count, self.mean, self.p95, self.max
        )
    }
}
