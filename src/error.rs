use thiserror::Error;

/// Errors for violated preconditions of the assessment operators.
///
/// Each variant scopes a failure to the smallest affected sub-result:
/// losing geometric statistics does not invalidate category counts, and a
/// one-reading sample still classifies even though its confidence interval
/// is undefined.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssessmentError {
    #[error("sample contains no readings")]
    EmptySample,
    #[error("no strictly positive readings; geometric statistics undefined")]
    InsufficientPositiveData,
    #[error("confidence interval requires at least 2 readings, got {0}")]
    InsufficientSampleSize(usize),
    #[error("exposure limit must be non-negative, got {0}")]
    InvalidLimit(f64),
    #[error("invalid prior belief: {0}")]
    InvalidPrior(&'static str),
}
