use serde::{Deserialize, Serialize};

/// Outcome of a trimmed-mean computation together with the trim bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrimSummary {
    pub sample_count: usize,
    pub trim_count: usize,
    pub retained: usize,
    pub mean: f64,
}

/// Errors raised while validating trimmed-mean inputs.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum TrimError {
    #[error("trim ratio {0} outside [0, 0.5)")]
    InvalidTrimRatio(f64),
    #[error("empty sample collection")]
    EmptyInput,
    #[error("trimming {trim_count} from each end of {samples} samples leaves nothing")]
    AllElementsTrimmed { samples: usize, trim_count: usize },
    #[error("sample at index {index} is NaN or infinite")]
    InvalidElement { index: usize },
}

pub type TrimResult<T> = Result<T, TrimError>;
