//! Trimmed-mean engine.
//!
//! Samples are validated, copied, sorted ascending, and the `floor(p * n)`
//! smallest and largest values are dropped before averaging what remains.
//! Integer and float inputs share one generic path and are widened to `f64`
//! per element before summation.

pub mod math;
pub mod prelude;

pub use math::stats::{trimmed_mean_float, trimmed_mean_int, StatsHelper};
pub use prelude::{TrimError, TrimResult, TrimSummary};
