use crate::generator::profile::{build_samples, rng_from_seed, SampleSet};
use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use log::{debug, info};
use serde::Serialize;
use trimcore::{StatsHelper, TrimSummary};

#[derive(Debug, Clone, Serialize)]
pub struct WorkflowResult {
    pub trim_ratio: f64,
    pub seed: Option<u64>,
    pub integers: TrimSummary,
    pub floats: TrimSummary,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    /// Generates both sample sets from the configured seed and reduces them.
    pub fn execute(&self) -> anyhow::Result<WorkflowResult> {
        let mut rng = rng_from_seed(self.config.seed);
        let samples = build_samples(&self.config.profile, &mut rng)
            .context("generating sample sets")?;
        self.execute_on(&samples)
    }

    pub fn execute_on(&self, samples: &SampleSet) -> anyhow::Result<WorkflowResult> {
        let ratio = self.config.trim_ratio.get();
        debug!(
            "reducing {} integers and {} floats at trim ratio {}",
            samples.integers.len(),
            samples.floats.len(),
            ratio
        );

        let integers = StatsHelper::trimmed_summary(&samples.integers, ratio)
            .context("computing trimmed mean of integers")?;
        info!(
            "integers: trimmed {} per end, {} retained, mean {:.6}",
            integers.trim_count, integers.retained, integers.mean
        );

        let floats = StatsHelper::trimmed_summary(&samples.floats, ratio)
            .context("computing trimmed mean of floats")?;
        info!(
            "floats: trimmed {} per end, {} retained, mean {:.6}",
            floats.trim_count, floats.retained, floats.mean
        );

        Ok(WorkflowResult {
            trim_ratio: ratio,
            seed: self.config.seed,
            integers,
            floats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trimcore::TrimError;

    #[test]
    fn runner_executes_workflow() {
        let cfg = WorkflowConfig::from_args(0.05, 100, 1000, 1000.0, Some(5)).unwrap();
        let result = Runner::new(cfg).execute().unwrap();
        assert_eq!(result.integers.trim_count, 5);
        assert_eq!(result.integers.retained, 90);
        assert_eq!(result.floats.retained, 90);
        assert!((0.0..1000.0).contains(&result.integers.mean));
        assert!((0.0..1000.0).contains(&result.floats.mean));
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let cfg = WorkflowConfig::from_args(0.1, 50, 100, 10.0, Some(11)).unwrap();
        let runner = Runner::new(cfg);
        let first = runner.execute().unwrap();
        let second = runner.execute().unwrap();
        assert_eq!(first.integers, second.integers);
        assert_eq!(first.floats, second.floats);
    }

    #[test]
    fn runner_reduces_supplied_samples() {
        let cfg = WorkflowConfig::from_args(0.1, 0, 1, 1.0, None).unwrap();
        let samples = SampleSet {
            integers: (1..=10).collect(),
            floats: (1..=10).map(|v| v as f64).collect(),
        };
        let result = Runner::new(cfg).execute_on(&samples).unwrap();
        assert_eq!(result.integers.mean, 5.5);
        assert_eq!(result.floats.mean, 5.5);
    }

    #[test]
    fn empty_sample_sets_surface_engine_error() {
        let cfg = WorkflowConfig::from_args(0.05, 0, 1000, 1000.0, Some(1)).unwrap();
        let err = Runner::new(cfg).execute().unwrap_err();
        assert_eq!(
            err.downcast_ref::<TrimError>(),
            Some(&TrimError::EmptyInput)
        );
    }
}
