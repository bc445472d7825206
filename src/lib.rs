#![forbid(unsafe_code)]

//! Exposure statistics and risk classification for workplace chemical
//! assessments.
//!
//! Given a cleaned numeric sample of exposure readings and a regulatory
//! limit, the engine computes summary statistics, partitions readings into
//! five ordinal hazard bands, updates a Dirichlet belief over those bands,
//! classifies overall acceptability from a confidence interval on the
//! mean, and derives hierarchy-of-controls recommendations including a
//! required respirator protection factor.
//!
//! Every operator is a pure function of its inputs: no shared state, no
//! mutation of the caller's sample, bit-identical results on identical
//! inputs. Intake forms, CSV ingestion, session persistence, and chart
//! rendering are the caller's concern; the engine consumes a `&[f64]`
//! sample plus a limit and returns structured results for rendering.

pub mod acceptability;
pub mod bayes;
pub mod category;
pub mod error;
pub mod recommend;
pub mod stats;

pub use acceptability::{
    classify_acceptability, AcceptabilityAssessment, AcceptabilityVerdict, ConfidenceInterval,
    RiskOutlook, ScreeningPosterior,
};
pub use bayes::CategoryBelief;
pub use category::{classify_reading, classify_sample, CategoryDistribution, HazardCategory};
pub use error::AssessmentError;
pub use recommend::{
    generate_recommendations, required_protection_factor, AssessmentContext, ExposureType,
    Recommendations,
};
pub use stats::{geometric_statistics, sample_statistics, SampleStatistics};

/// Full result of one assessment run for one chemical.
///
/// The confidence-interval classifier has a stricter precondition (N >= 2)
/// than the band pipeline, so its outcome is carried as its own labeled
/// result: a one-reading sample still yields statistics, counts, a
/// posterior, and recommendations, with the interval failure surfaced for
/// the caller to render.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentReport {
    pub statistics: SampleStatistics,
    pub distribution: CategoryDistribution,
    pub prior: CategoryBelief,
    pub posterior: CategoryBelief,
    pub acceptability: Result<AcceptabilityAssessment, AssessmentError>,
    pub recommendations: Recommendations,
}

/// Runs the whole pipeline with the uniform Dirichlet(1,..,1) prior.
///
/// # Errors
///
/// [`AssessmentError::InvalidLimit`] for a negative limit,
/// [`AssessmentError::EmptySample`] for an empty sample. Both abort the
/// run; narrower failures (geometric statistics, confidence interval)
/// degrade inside the report instead.
pub fn run_assessment(
    sample: &[f64],
    limit: f64,
    context: &AssessmentContext,
) -> Result<AssessmentReport, AssessmentError> {
    run_assessment_with_prior(sample, limit, context, CategoryBelief::uniform())
}

/// Runs the whole pipeline with an explicit prior belief.
pub fn run_assessment_with_prior(
    sample: &[f64],
    limit: f64,
    context: &AssessmentContext,
    prior: CategoryBelief,
) -> Result<AssessmentReport, AssessmentError> {
    if limit < 0.0 {
        return Err(AssessmentError::InvalidLimit(limit));
    }

    let statistics = sample_statistics(sample)?;
    let distribution = classify_sample(sample, limit)?;
    let posterior = prior.updated(&distribution);
    let recommendations = generate_recommendations(context, &posterior);
    let acceptability = classify_acceptability(sample, limit);

    Ok(AssessmentReport {
        statistics,
        distribution,
        prior,
        posterior,
        acceptability,
        recommendations,
    })
}

/// Runs an independent assessment per named chemical.
///
/// Each chemical gets its own sample, distribution, and posterior; runs
/// never interact, so failures are reported per chemical.
pub fn assess_chemicals<'a>(
    chemicals: &[(&'a str, &[f64])],
    limit: f64,
    context: &AssessmentContext,
) -> Vec<(&'a str, Result<AssessmentReport, AssessmentError>)> {
    chemicals
        .iter()
        .map(|(name, sample)| (*name, run_assessment(sample, limit, context)))
        .collect()
}
