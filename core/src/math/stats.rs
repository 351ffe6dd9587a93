use crate::math::sample::Sample;
use crate::math::trim::TrimRatio;
use crate::prelude::{TrimError, TrimResult, TrimSummary};

pub struct StatsHelper;

impl StatsHelper {
    /// Trimmed mean of `samples`, dropping `floor(ratio * n)` values from each end.
    pub fn trimmed_mean<T: Sample>(samples: &[T], ratio: f64) -> TrimResult<f64> {
        Self::trimmed_summary(samples, ratio).map(|summary| summary.mean)
    }

    /// Like [`StatsHelper::trimmed_mean`], also reporting how many values were dropped.
    ///
    /// Checks run in a fixed order and the first failure wins: trim ratio,
    /// empty input, fully trimmed input, then non-finite elements. The caller's
    /// slice is never reordered; sorting happens on a private copy.
    pub fn trimmed_summary<T: Sample>(samples: &[T], ratio: f64) -> TrimResult<TrimSummary> {
        let ratio = TrimRatio::new(ratio)?;
        if samples.is_empty() {
            return Err(TrimError::EmptyInput);
        }
        let retained = ratio.retained(samples.len())?;
        if let Some(index) = samples.iter().position(|value| !value.is_valid()) {
            return Err(TrimError::InvalidElement { index });
        }

        let mut sorted = samples.to_vec();
        sorted.sort_unstable_by(T::order);

        let trim_count = ratio.trim_count(sorted.len());
        let kept = &sorted[trim_count..trim_count + retained];

        Ok(TrimSummary {
            sample_count: samples.len(),
            trim_count,
            retained,
            mean: Self::mean(kept),
        })
    }

    /// Arithmetic mean with per-element widening. Callers guarantee a non-empty slice.
    fn mean<T: Sample>(samples: &[T]) -> f64 {
        let sum: f64 = samples.iter().map(|&value| value.widen()).sum();
        sum / samples.len() as f64
    }
}

/// Trimmed mean over signed integer samples.
pub fn trimmed_mean_int(samples: &[i64], ratio: f64) -> TrimResult<f64> {
    StatsHelper::trimmed_mean(samples, ratio)
}

/// Trimmed mean over double-precision samples. NaN and infinities are rejected.
pub fn trimmed_mean_float(samples: &[f64], ratio: f64) -> TrimResult<f64> {
    StatsHelper::trimmed_mean(samples, ratio)
}
