//! Body profile sampling.

use rand::Rng;
use rand_distr::StandardNormal;
use tracker::BodyProfile;

use crate::config::BodyDistribution;

/// Generates plausible adult body profiles.
///
/// Samples are clamped so that every generated profile is strictly positive
/// and usable by the calorie formulas.
#[derive(Debug, Clone)]
pub struct BodyProfileGenerator {
    dist: BodyDistribution,
}

impl Default for BodyProfileGenerator {
    fn default() -> Self {
        Self::with_distribution(BodyDistribution::default())
    }
}

impl BodyProfileGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with custom parameters.
    pub fn with_distribution(dist: BodyDistribution) -> Self {
        Self { dist }
    }

    /// Generates a single profile.
    pub fn generate(&self, rng: &mut impl Rng) -> BodyProfile {
        let weight = sample_normal(rng, self.dist.weight_mean, self.dist.weight_std);
        let height = sample_normal(rng, self.dist.height_mean, self.dist.height_std);
        BodyProfile::new(weight.clamp(35.0, 200.0), height.clamp(1.2, 2.3))
    }
}

/// Draws from N(mean, std_dev). A negative or non-finite spread counts as zero.
fn sample_normal(rng: &mut impl Rng, mean: f64, std_dev: f64) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    if std_dev.is_finite() && std_dev > 0.0 {
        mean + z * std_dev
    } else {
        mean
    }
}
