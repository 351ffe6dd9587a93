use crate::generator::profile::SampleProfile;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use trimcore::math::TrimRatio;

/// Trim applied to each end when none is configured.
pub const DEFAULT_TRIM_RATIO: f64 = 0.05;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub trim_ratio: TrimRatio,
    #[serde(flatten)]
    pub profile: SampleProfile,
    pub seed: Option<u64>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            trim_ratio: TrimRatio::new(DEFAULT_TRIM_RATIO).unwrap_or_default(),
            profile: SampleProfile::default(),
            seed: None,
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        trim_ratio: f64,
        sample_count: usize,
        int_upper: i64,
        float_scale: f64,
        seed: Option<u64>,
    ) -> anyhow::Result<Self> {
        let trim_ratio = TrimRatio::new(trim_ratio).context("validating --trim-ratio")?;
        Ok(Self {
            trim_ratio,
            profile: SampleProfile {
                sample_count,
                int_upper,
                float_scale,
            },
            seed,
        })
    }
}
