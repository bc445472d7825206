//! Dirichlet-multinomial belief update over the hazard bands.
//!
//! A belief is an unnormalized weight per category (Dirichlet
//! pseudo-counts). The default prior is weight 1 per band, so the
//! posterior after observing a distribution is simply weight + count per
//! band, renormalized. Posterior mass always lies strictly between the
//! uniform prior and the empirical frequency, converging to the empirical
//! frequency as the sample grows.

use serde::{Deserialize, Serialize};

use crate::category::{CategoryDistribution, HazardCategory};
use crate::error::AssessmentError;
use crate::stats::round2;

/// Probability mass over the five hazard bands, kept as Dirichlet weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBelief {
    weights: [f64; HazardCategory::COUNT],
}

impl CategoryBelief {
    /// Uniform prior: weight 1 per band, Dirichlet(1,1,1,1,1).
    pub fn uniform() -> Self {
        CategoryBelief {
            weights: [1.0; HazardCategory::COUNT],
        }
    }

    /// Prior from explicit per-band weights.
    ///
    /// # Errors
    ///
    /// [`AssessmentError::InvalidPrior`] when any weight is negative or
    /// non-finite, or all weights are zero.
    pub fn from_weights(weights: [f64; HazardCategory::COUNT]) -> Result<Self, AssessmentError> {
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(AssessmentError::InvalidPrior(
                "weights must be finite and non-negative",
            ));
        }
        if weights.iter().sum::<f64>() <= 0.0 {
            return Err(AssessmentError::InvalidPrior(
                "at least one weight must be positive",
            ));
        }
        Ok(CategoryBelief { weights })
    }

    /// Conjugate update: posterior weight = prior weight + observed count.
    pub fn updated(&self, distribution: &CategoryDistribution) -> CategoryBelief {
        let mut weights = self.weights;
        for (w, count) in weights.iter_mut().zip(distribution.counts()) {
            *w += *count as f64;
        }
        CategoryBelief { weights }
    }

    /// Normalized probability per band, summing to 1.
    pub fn probabilities(&self) -> [f64; HazardCategory::COUNT] {
        let total: f64 = self.weights.iter().sum();
        let mut out = self.weights;
        for w in out.iter_mut() {
            *w /= total;
        }
        out
    }

    /// Probability per band as a percentage rounded to two decimals, for
    /// bar and pie chart rendering. Sums to 100 within rounding tolerance.
    pub fn percentages(&self) -> [f64; HazardCategory::COUNT] {
        let mut out = self.probabilities();
        for p in out.iter_mut() {
            *p = round2(*p * 100.0);
        }
        out
    }

    pub fn probability(&self, category: HazardCategory) -> f64 {
        self.probabilities()[category.index()]
    }
}

impl Default for CategoryBelief {
    fn default() -> Self {
        CategoryBelief::uniform()
    }
}
