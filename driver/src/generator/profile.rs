use anyhow::ensure;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Shape of the synthetic sample sets fed to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleProfile {
    pub sample_count: usize,
    /// Integers are drawn from `[0, int_upper)`.
    pub int_upper: i64,
    /// Floats are drawn from `[0, float_scale)`.
    pub float_scale: f64,
}

impl Default for SampleProfile {
    fn default() -> Self {
        Self {
            sample_count: 100,
            int_upper: 1000,
            float_scale: 1000.0,
        }
    }
}

/// One integer and one float collection of equal length.
#[derive(Debug, Clone)]
pub struct SampleSet {
    pub integers: Vec<i64>,
    pub floats: Vec<f64>,
}

/// Seeded generator when `seed` is given, OS entropy otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn build_samples<R: Rng>(profile: &SampleProfile, rng: &mut R) -> anyhow::Result<SampleSet> {
    ensure!(
        profile.int_upper > 0,
        "integer upper bound must be positive, got {}",
        profile.int_upper
    );
    ensure!(
        profile.float_scale.is_finite() && profile.float_scale > 0.0,
        "float scale must be finite and positive, got {}",
        profile.float_scale
    );

    let integers = (0..profile.sample_count)
        .map(|_| rng.gen_range(0..profile.int_upper))
        .collect();
    let floats = (0..profile.sample_count)
        .map(|_| rng.gen::<f64>() * profile.float_scale)
        .collect();

    Ok(SampleSet { integers, floats })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_builds_expected_sample_count() {
        let mut rng = rng_from_seed(Some(1));
        let samples = build_samples(&SampleProfile::default(), &mut rng).unwrap();
        assert_eq!(samples.integers.len(), 100);
        assert_eq!(samples.floats.len(), 100);
        assert!(samples.integers.iter().all(|v| (0..1000).contains(v)));
        assert!(samples.floats.iter().all(|v| (0.0..1000.0).contains(v)));
    }

    #[test]
    fn same_seed_repeats_samples() {
        let profile = SampleProfile {
            sample_count: 16,
            int_upper: 50,
            float_scale: 2.0,
        };
        let first = build_samples(&profile, &mut rng_from_seed(Some(99))).unwrap();
        let second = build_samples(&profile, &mut rng_from_seed(Some(99))).unwrap();
        assert_eq!(first.integers, second.integers);
        assert_eq!(first.floats, second.floats);
    }

    #[test]
    fn generator_rejects_degenerate_ranges() {
        let mut rng = rng_from_seed(Some(0));
        let no_ints = SampleProfile {
            int_upper: 0,
            ..Default::default()
        };
        assert!(build_samples(&no_ints, &mut rng).is_err());

        let bad_scale = SampleProfile {
            float_scale: f64::INFINITY,
            ..Default::default()
        };
        assert!(build_samples(&bad_scale, &mut rng).is_err());
    }
}
