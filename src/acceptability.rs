//! Confidence-interval acceptability verdict and the two-hypothesis
//! screening posterior.
//!
//! This classifier runs off the raw sample and limit, independent of the
//! hazard-band pipeline, and the two outputs here may disagree with the
//! band posterior on borderline samples. They are kept separate on
//! purpose. The interval uses the normal z = 1.96 approximation for every
//! sample size; callers needing small-sample correctness must substitute a
//! t critical value upstream.

use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;
use crate::stats::mean;

/// 95% two-sided critical value of the standard normal distribution.
const Z_95: f64 = 1.96;

/// Likelihood assigned to the hypothesis disfavored by the observed mean.
const OFF_LIKELIHOOD: f64 = 0.3;

/// 95% confidence interval on the mean exposure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub n: usize,
    pub mean: f64,
    /// Sample standard deviation, divisor N-1.
    pub std_dev: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Three-way verdict from comparing the interval to the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcceptabilityVerdict {
    Acceptable,
    Borderline,
    Unacceptable,
}

impl AcceptabilityVerdict {
    /// Severity color tag for rendering.
    pub fn color(self) -> &'static str {
        match self {
            AcceptabilityVerdict::Acceptable => "green",
            AcceptabilityVerdict::Borderline => "orange",
            AcceptabilityVerdict::Unacceptable => "red",
        }
    }
}

/// Posterior over {Acceptable, Unacceptable} from the two-point
/// likelihood model. Probabilities sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningPosterior {
    pub acceptable: f64,
    pub unacceptable: f64,
}

impl ScreeningPosterior {
    /// Message class from the fixed 0.7 decision thresholds.
    pub fn outlook(&self) -> RiskOutlook {
        if self.unacceptable > 0.7 {
            RiskOutlook::LikelyUnacceptable
        } else if self.acceptable > 0.7 {
            RiskOutlook::LikelyAcceptable
        } else {
            RiskOutlook::Uncertain
        }
    }
}

/// Textual risk reading of the screening posterior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskOutlook {
    LikelyUnacceptable,
    LikelyAcceptable,
    Uncertain,
}

impl RiskOutlook {
    pub fn advisory(self) -> &'static str {
        match self {
            RiskOutlook::LikelyUnacceptable => {
                "High likelihood of unacceptable exposure. Consider control measures or reassessment."
            }
            RiskOutlook::LikelyAcceptable => "Exposure likely acceptable. Continue monitoring.",
            RiskOutlook::Uncertain => {
                "Uncertainty remains. Additional sampling or expert review recommended."
            }
        }
    }

    /// One-line action for the report summary box.
    pub fn summary_action(self) -> &'static str {
        match self {
            RiskOutlook::LikelyUnacceptable => "Implement controls and reassess.",
            RiskOutlook::LikelyAcceptable => "Continue monitoring and maintain controls.",
            RiskOutlook::Uncertain => "Consider additional sampling or expert review.",
        }
    }
}

/// Combined result of the confidence-interval classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceptabilityAssessment {
    pub interval: ConfidenceInterval,
    pub verdict: AcceptabilityVerdict,
    pub screening: ScreeningPosterior,
}

/// Sample standard deviation, divisor N-1. Requires N >= 2.
fn sample_std_dev(sample: &[f64]) -> f64 {
    let m = mean(sample);
    let var =
        sample.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (sample.len() - 1) as f64;
    var.sqrt()
}

/// Two-hypothesis update: equal 0.5 priors, likelihood 1.0 for the
/// hypothesis favored by the observed mean and 0.3 for the other. With
/// mean exactly at the limit neither hypothesis is favored, both
/// likelihoods are 0.3, and the posterior normalizes back to 0.5/0.5.
fn screening_posterior(sample_mean: f64, limit: f64) -> ScreeningPosterior {
    let likelihood_acceptable = if sample_mean < limit { 1.0 } else { OFF_LIKELIHOOD };
    let likelihood_unacceptable = if sample_mean > limit { 1.0 } else { OFF_LIKELIHOOD };

    let numerator_acc = likelihood_acceptable * 0.5;
    let numerator_unacc = likelihood_unacceptable * 0.5;
    let total = numerator_acc + numerator_unacc;

    ScreeningPosterior {
        acceptable: numerator_acc / total,
        unacceptable: numerator_unacc / total,
    }
}

/// Classifies overall acceptability of the sample against the limit.
///
/// The interval is mean +/- 1.96 * SD / sqrt(N) with SD over divisor N-1.
/// Verdict: Acceptable when the whole interval sits below the limit,
/// Unacceptable when it sits above, Borderline when it straddles.
///
/// # Errors
///
/// [`AssessmentError::InvalidLimit`] for a negative limit,
/// [`AssessmentError::InsufficientSampleSize`] when N < 2 (the standard
/// error is undefined). The hazard-band pipeline is unaffected by this
/// failure.
pub fn classify_acceptability(
    sample: &[f64],
    limit: f64,
) -> Result<AcceptabilityAssessment, AssessmentError> {
    if limit < 0.0 {
        return Err(AssessmentError::InvalidLimit(limit));
    }
    if sample.len() < 2 {
        return Err(AssessmentError::InsufficientSampleSize(sample.len()));
    }

    let n = sample.len();
    let m = mean(sample);
    let sd = sample_std_dev(sample);
    let half_width = Z_95 * sd / (n as f64).sqrt();
    let interval = ConfidenceInterval {
        n,
        mean: m,
        std_dev: sd,
        lower: m - half_width,
        upper: m + half_width,
    };

    let verdict = if interval.upper < limit {
        AcceptabilityVerdict::Acceptable
    } else if interval.lower > limit {
        AcceptabilityVerdict::Unacceptable
    } else {
        AcceptabilityVerdict::Borderline
    };

    Ok(AcceptabilityAssessment {
        interval,
        verdict,
        screening: screening_posterior(m, limit),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_single_reading() {
        assert_eq!(
            classify_acceptability(&[10.0], 50.0),
            Err(AssessmentError::InsufficientSampleSize(1))
        );
        assert_eq!(
            classify_acceptability(&[], 50.0),
            Err(AssessmentError::InsufficientSampleSize(0))
        );
    }

    #[test]
    fn rejects_negative_limit() {
        assert_eq!(
            classify_acceptability(&[1.0, 2.0], -5.0),
            Err(AssessmentError::InvalidLimit(-5.0))
        );
    }

    #[test]
    fn interval_is_symmetric_around_mean() {
        let a = classify_acceptability(&[12.0, 45.0, 60.0, 5.0, 80.0], 50.0).unwrap();
        let low_gap = a.interval.mean - a.interval.lower;
        let high_gap = a.interval.upper - a.interval.mean;
        assert!((low_gap - high_gap).abs() < 1e-10);
    }

    #[test]
    fn uses_unbiased_std_dev() {
        // [2, 4, 6]: mean 4, sum of squared deviations 8, divisor 2 -> sd 2.
        let a = classify_acceptability(&[2.0, 4.0, 6.0], 50.0).unwrap();
        assert!((a.interval.std_dev - 2.0).abs() < 1e-12);
        let half = 1.96 * 2.0 / 3.0_f64.sqrt();
        assert!((a.interval.lower - (4.0 - half)).abs() < 1e-12);
        assert!((a.interval.upper - (4.0 + half)).abs() < 1e-12);
    }

    #[test]
    fn scenario_c_unacceptable() {
        // [60, 70, 80] at limit 50: mean 70, sd 10, half-width 11.32, the
        // whole interval sits above the limit.
        let a = classify_acceptability(&[60.0, 70.0, 80.0], 50.0).unwrap();
        assert!(a.interval.lower > 50.0, "lower: {}", a.interval.lower);
        assert_eq!(a.verdict, AcceptabilityVerdict::Unacceptable);
        assert_eq!(a.verdict.color(), "red");
        assert!(a.screening.unacceptable > 0.5);
        assert_eq!(a.screening.outlook(), RiskOutlook::LikelyUnacceptable);
    }

    #[test]
    fn clearly_acceptable_sample() {
        let a = classify_acceptability(&[1.0, 2.0, 1.5, 1.8, 2.2], 50.0).unwrap();
        assert_eq!(a.verdict, AcceptabilityVerdict::Acceptable);
        assert_eq!(a.verdict.color(), "green");
        assert!(a.screening.acceptable > 0.7);
        assert_eq!(a.screening.outlook(), RiskOutlook::LikelyAcceptable);
    }

    #[test]
    fn straddling_interval_is_borderline() {
        // Mean 50 with spread: interval straddles the limit.
        let a = classify_acceptability(&[40.0, 50.0, 60.0], 50.0).unwrap();
        assert_eq!(a.verdict, AcceptabilityVerdict::Borderline);
        assert_eq!(a.verdict.color(), "orange");
    }

    #[test]
    fn screening_probabilities_sum_to_one() {
        let a = classify_acceptability(&[30.0, 40.0, 45.0], 50.0).unwrap();
        let sum = a.screening.acceptable + a.screening.unacceptable;
        assert!((sum - 1.0).abs() < 1e-12);
        // mean 38.33 < 50: posterior(acceptable) = 1.0 / 1.3.
        assert!((a.screening.acceptable - 1.0 / 1.3).abs() < 1e-12);
        assert!((a.screening.unacceptable - 0.3 / 1.3).abs() < 1e-12);
    }

    #[test]
    fn mean_equal_to_limit_yields_even_posterior() {
        // [40, 50, 60]: mean exactly 50. Both likelihoods take the 0.3
        // branch, so the posterior renormalizes to 0.5/0.5.
        let a = classify_acceptability(&[40.0, 50.0, 60.0], 50.0).unwrap();
        assert!((a.screening.acceptable - 0.5).abs() < 1e-12);
        assert!((a.screening.unacceptable - 0.5).abs() < 1e-12);
        assert_eq!(a.screening.outlook(), RiskOutlook::Uncertain);
    }

    #[test]
    fn outlook_messages_are_fixed() {
        assert_eq!(
            RiskOutlook::LikelyAcceptable.advisory(),
            "Exposure likely acceptable. Continue monitoring."
        );
        assert_eq!(
            RiskOutlook::Uncertain.summary_action(),
            "Consider additional sampling or expert review."
        );
    }
}
