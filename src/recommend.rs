//! Hierarchy-of-controls recommendations and the required respirator
//! protection factor.
//!
//! The protection factor comes from the hazard-band posterior: walking the
//! bands in severity order, the first band at which the cumulative
//! posterior mass reaches 95% names the Assigned Protection Factor that
//! covers at least 95% of workers.

use serde::{Deserialize, Serialize};

use crate::bayes::CategoryBelief;
use crate::category::HazardCategory;

/// Cumulative posterior mass (in percent) a protection factor must cover.
const COVERAGE_TARGET: f64 = 95.0;

/// Sampling window of the assessment, from the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExposureType {
    FullShift,
    ShortTerm,
    Instantaneous,
}

impl ExposureType {
    pub fn label(self) -> &'static str {
        match self {
            ExposureType::FullShift => "Full-shift exposure",
            ExposureType::ShortTerm => "Short-term exposure",
            ExposureType::Instantaneous => "Instantaneous exposure",
        }
    }
}

/// Assessment metadata interpolated into recommendation text.
///
/// Free text throughout; nothing here is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentContext {
    pub organization: String,
    pub location: String,
    pub process: String,
    pub exposure_type: ExposureType,
}

/// Ordered hierarchy-of-controls guidance plus the selected APF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub protection_factor: u32,
    /// Elimination, Substitution, Engineering Controls, Administrative
    /// Controls, PPE, in that order.
    pub actions: Vec<String>,
}

/// Selects the APF whose band absorbs 95% of the posterior mass.
///
/// Walks bands in increasing severity accumulating rounded posterior
/// percentages. If rounding drift keeps the cumulative sum below 95 after
/// every band, the highest-severity factor (1000) is returned; the
/// fallback always errs toward more protection.
pub fn required_protection_factor(posterior: &CategoryBelief) -> u32 {
    let mut cumulative = 0.0;
    for (category, pct) in HazardCategory::ALL.iter().zip(posterior.percentages()) {
        cumulative += pct;
        if cumulative >= COVERAGE_TARGET {
            return category.protection_factor();
        }
    }
    HazardCategory::ExceedsLimit.protection_factor()
}

/// Builds the five hierarchy-of-controls statements for a process.
///
/// Pure function of (context, posterior); the organization and process
/// names and the computed APF are interpolated into fixed wording.
pub fn generate_recommendations(
    context: &AssessmentContext,
    posterior: &CategoryBelief,
) -> Recommendations {
    let org = &context.organization;
    let process = &context.process;
    let apf = required_protection_factor(posterior);

    let actions = vec![
        format!(
            "Elimination: Evaluate whether the task '{process}' at {org} can be \
             redesigned to avoid chemical use entirely."
        ),
        format!(
            "Substitution: Investigate safer alternatives to the chemicals \
             currently used during '{process}'."
        ),
        format!(
            "Engineering Controls: Install or upgrade local exhaust ventilation \
             systems near the source of exposure in '{process}'."
        ),
        format!(
            "Administrative Controls: Rotate workers to limit time spent on \
             '{process}', and provide training on safe handling procedures."
        ),
        format!(
            "Personal Protective Equipment (PPE): Recommend respirators with an \
             Assigned Protection Factor (APF) of {apf} to protect at least 95% \
             of workers during '{process}'."
        ),
    ];

    Recommendations {
        protection_factor: apf,
        actions,
    }
}
