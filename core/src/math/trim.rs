use crate::prelude::{TrimError, TrimResult};
use serde::{Deserialize, Serialize};

/// Distance, in multiples of `f64::EPSILON` relative to `p * n`, within which
/// the product is treated as the integer it is closest to. Covers the rounding
/// of `p` plus the multiplication, e.g. `0.29 * 100 = 28.999999999999996`.
const SNAP_ULPS: f64 = 2.0;

/// Fraction of samples dropped from each end, validated to lie in `[0, 0.5)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct TrimRatio(f64);

impl TrimRatio {
    pub fn new(ratio: f64) -> TrimResult<Self> {
        // NaN fails the range test as well.
        if (0.0..0.5).contains(&ratio) {
            Ok(Self(ratio))
        } else {
            Err(TrimError::InvalidTrimRatio(ratio))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Number of elements removed from each end of `sample_count` sorted samples.
    ///
    /// `floor(p * n)`, except that a product within a couple of ulps of an integer
    /// counts as that integer. Snapping never trims the whole collection.
    pub fn trim_count(self, sample_count: usize) -> usize {
        let product = self.0 * sample_count as f64;
        let floored = product.floor() as usize;
        let nearest = product.round();
        if (product - nearest).abs() > product * SNAP_ULPS * f64::EPSILON {
            return floored;
        }
        let snapped = nearest as usize;
        if snapped.saturating_mul(2) < sample_count {
            snapped
        } else {
            floored
        }
    }

    /// Size of the retained middle slice, or `AllElementsTrimmed` when none survive.
    pub fn retained(self, sample_count: usize) -> TrimResult<usize> {
        retained_after(sample_count, self.trim_count(sample_count))
    }
}

/// Elements left after dropping `trim_count` from both ends of `sample_count`.
pub fn retained_after(sample_count: usize, trim_count: usize) -> TrimResult<usize> {
    trim_count
        .checked_mul(2)
        .and_then(|both_ends| sample_count.checked_sub(both_ends))
        .filter(|&retained| retained > 0)
        .ok_or(TrimError::AllElementsTrimmed {
            samples: sample_count,
            trim_count,
        })
}

/// No trimming: the plain arithmetic mean.
impl Default for TrimRatio {
    fn default() -> Self {
        Self(0.0)
    }
}

impl TryFrom<f64> for TrimRatio {
    type Error = TrimError;

    fn try_from(ratio: f64) -> TrimResult<Self> {
        Self::new(ratio)
    }
}

impl From<TrimRatio> for f64 {
    fn from(ratio: TrimRatio) -> Self {
        ratio.0
    }
}
