//! Descriptive statistics over a cleaned exposure sample.
//!
//! All values are computed at full precision; rounding to two decimals is
//! applied only when building report rows via [`SampleStatistics::rounded`].
//! The population formula (divisor N) is used here, matching the summary
//! tables; the confidence-interval classifier uses divisor N-1 and computes
//! its own standard deviation (see `acceptability`).

use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;

/// Summary statistics for one chemical's exposure readings.
///
/// `geo_mean` / `geo_std_dev` cover only the strictly-positive subset of
/// the sample and are `None` when no positive readings exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleStatistics {
    pub n: usize,
    pub mean: f64,
    /// Population standard deviation (divisor N).
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// 95th percentile, linear interpolation over the sorted sample.
    pub p95: f64,
    pub geo_mean: Option<f64>,
    pub geo_std_dev: Option<f64>,
}

impl SampleStatistics {
    /// Copy with every value rounded to two decimals, for report tables.
    pub fn rounded(&self) -> SampleStatistics {
        SampleStatistics {
            n: self.n,
            mean: round2(self.mean),
            std_dev: round2(self.std_dev),
            min: round2(self.min),
            max: round2(self.max),
            p95: round2(self.p95),
            geo_mean: self.geo_mean.map(round2),
            geo_std_dev: self.geo_std_dev.map(round2),
        }
    }
}

/// Round to two decimal places for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn mean(sample: &[f64]) -> f64 {
    sample.iter().sum::<f64>() / sample.len() as f64
}

/// Population standard deviation, divisor N.
pub(crate) fn population_std_dev(sample: &[f64]) -> f64 {
    let m = mean(sample);
    let var = sample.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / sample.len() as f64;
    var.sqrt()
}

/// Percentile by linear interpolation between closest ranks.
///
/// `q` is in [0, 100]. With one reading the percentile is that reading.
pub(crate) fn percentile(sample: &[f64], q: f64) -> f64 {
    let mut sorted: Vec<f64> = sample.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).expect("readings must be finite"));

    let rank = q / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
    }
}

/// Geometric mean and geometric standard deviation over the
/// strictly-positive subset of the sample.
///
/// # Errors
///
/// [`AssessmentError::InsufficientPositiveData`] when no reading is > 0;
/// the log-transform is never attempted on zero or negative values.
pub fn geometric_statistics(sample: &[f64]) -> Result<(f64, f64), AssessmentError> {
    let logs: Vec<f64> = sample
        .iter()
        .filter(|v| **v > 0.0)
        .map(|v| v.ln())
        .collect();
    if logs.is_empty() {
        return Err(AssessmentError::InsufficientPositiveData);
    }
    let gm = mean(&logs).exp();
    let gsd = population_std_dev(&logs).exp();
    Ok((gm, gsd))
}

/// Computes the full descriptive-statistics record for a sample.
///
/// Geometric statistics degrade to `None` instead of failing the whole
/// record when the sample has no strictly-positive readings.
///
/// # Errors
///
/// [`AssessmentError::EmptySample`] when the sample has no readings.
pub fn sample_statistics(sample: &[f64]) -> Result<SampleStatistics, AssessmentError> {
    if sample.is_empty() {
        return Err(AssessmentError::EmptySample);
    }

    // Geometric statistics recover locally: a sample with no positive
    // readings loses GM/GSD, nothing else.
    let (geo_mean, geo_std_dev) = match geometric_statistics(sample) {
        Ok((gm, gsd)) => (Some(gm), Some(gsd)),
        Err(_) => (None, None),
    };

    let min = sample.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = sample.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    Ok(SampleStatistics {
        n: sample.len(),
        mean: mean(sample),
        std_dev: population_std_dev(sample),
        min,
        max,
        p95: percentile(sample, 95.0),
        geo_mean,
        geo_std_dev,
    })
}
