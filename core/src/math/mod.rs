pub mod sample;
pub mod stats;
pub mod trim;

pub use sample::Sample;
pub use stats::StatsHelper;
pub use trim::TrimRatio;
