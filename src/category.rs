//! Ordinal hazard bands and the fraction-of-limit classifier.
//!
//! Each reading lands in exactly one of five bands expressed as a fraction
//! of the exposure limit. The bands are totally ordered by severity and
//! each variant carries its own label, description, display color,
//! fraction range, and Assigned Protection Factor, so the ordering and the
//! APF mapping cannot drift apart.

use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;
use crate::stats::round2;

/// Five-band hazard classification, increasing severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HazardCategory {
    /// Below 1% of the limit.
    Negligible,
    /// 1% to 10% of the limit.
    VeryLow,
    /// 10% to 50% of the limit.
    Moderate,
    /// 50% up to and including the limit.
    NearLimit,
    /// Above the limit.
    ExceedsLimit,
}

impl HazardCategory {
    /// All categories in increasing-severity order.
    pub const ALL: [HazardCategory; 5] = [
        HazardCategory::Negligible,
        HazardCategory::VeryLow,
        HazardCategory::Moderate,
        HazardCategory::NearLimit,
        HazardCategory::ExceedsLimit,
    ];

    pub const COUNT: usize = 5;

    /// Position in severity order, 0-based.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short fraction-of-limit label for table and chart axes.
    pub fn label(self) -> &'static str {
        match self {
            HazardCategory::Negligible => "<1%",
            HazardCategory::VeryLow => "1-10%",
            HazardCategory::Moderate => "10-50%",
            HazardCategory::NearLimit => "50-100%",
            HazardCategory::ExceedsLimit => ">100%",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            HazardCategory::Negligible => "Negligible exposure",
            HazardCategory::VeryLow => "Very low exposure",
            HazardCategory::Moderate => "Low to moderate exposure",
            HazardCategory::NearLimit => "Approaching exposure limit",
            HazardCategory::ExceedsLimit => "Exceeds exposure limit",
        }
    }

    /// Chart color, dark green through red.
    pub fn color(self) -> &'static str {
        match self {
            HazardCategory::Negligible => "#006400",
            HazardCategory::VeryLow => "#90EE90",
            HazardCategory::Moderate => "#FFFF00",
            HazardCategory::NearLimit => "#FFBF00",
            HazardCategory::ExceedsLimit => "#FF0000",
        }
    }

    /// Half-open fraction-of-limit range `[lower, upper)`; the NearLimit
    /// band closes at 1.0 and ExceedsLimit is unbounded above.
    pub fn fraction_range(self) -> (f64, f64) {
        match self {
            HazardCategory::Negligible => (0.0, 0.01),
            HazardCategory::VeryLow => (0.01, 0.1),
            HazardCategory::Moderate => (0.1, 0.5),
            HazardCategory::NearLimit => (0.5, 1.0),
            HazardCategory::ExceedsLimit => (1.0, f64::INFINITY),
        }
    }

    /// Assigned Protection Factor covering this band.
    pub fn protection_factor(self) -> u32 {
        match self {
            HazardCategory::Negligible => 4,
            HazardCategory::VeryLow => 10,
            HazardCategory::Moderate => 20,
            HazardCategory::NearLimit => 40,
            HazardCategory::ExceedsLimit => 1000,
        }
    }
}

/// Per-category reading counts for one sample.
///
/// Counts always sum to the sample size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDistribution {
    counts: [usize; HazardCategory::COUNT],
    total: usize,
}

impl CategoryDistribution {
    pub fn count(&self, category: HazardCategory) -> usize {
        self.counts[category.index()]
    }

    pub fn counts(&self) -> &[usize; HazardCategory::COUNT] {
        &self.counts
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Percentage of readings per category, rounded to two decimals.
    pub fn percentages(&self) -> [f64; HazardCategory::COUNT] {
        let mut out = [0.0; HazardCategory::COUNT];
        for (pct, count) in out.iter_mut().zip(self.counts) {
            *pct = round2(count as f64 / self.total as f64 * 100.0);
        }
        out
    }

    /// Rows for table rendering: (label, description, count, percentage).
    pub fn rows(&self) -> Vec<(&'static str, &'static str, usize, f64)> {
        let percentages = self.percentages();
        HazardCategory::ALL
            .iter()
            .map(|c| {
                (
                    c.label(),
                    c.description(),
                    self.counts[c.index()],
                    percentages[c.index()],
                )
            })
            .collect()
    }
}

/// Assigns one reading to its hazard band.
///
/// First matching band in increasing-severity order wins, so a reading
/// exactly at the limit is NearLimit, not ExceedsLimit. Readings at or
/// below zero are always Negligible; with a zero limit this puts every
/// positive reading in ExceedsLimit and every zero reading in Negligible.
pub fn classify_reading(value: f64, limit: f64) -> HazardCategory {
    if value <= 0.0 || value < 0.01 * limit {
        HazardCategory::Negligible
    } else if value < 0.1 * limit {
        HazardCategory::VeryLow
    } else if value < 0.5 * limit {
        HazardCategory::Moderate
    } else if value <= limit {
        HazardCategory::NearLimit
    } else {
        HazardCategory::ExceedsLimit
    }
}

/// Buckets every reading of a sample into its hazard band.
///
/// # Errors
///
/// [`AssessmentError::EmptySample`] for an empty sample,
/// [`AssessmentError::InvalidLimit`] for a negative limit. A zero limit is
/// valid input.
pub fn classify_sample(
    sample: &[f64],
    limit: f64,
) -> Result<CategoryDistribution, AssessmentError> {
    if limit < 0.0 {
        return Err(AssessmentError::InvalidLimit(limit));
    }
    if sample.is_empty() {
        return Err(AssessmentError::EmptySample);
    }

    let mut counts = [0usize; HazardCategory::COUNT];
    for value in sample {
        counts[classify_reading(*value, limit).index()] += 1;
    }
    Ok(CategoryDistribution {
        counts,
        total: sample.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering_is_total() {
        for pair in HazardCategory::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{:?} must rank below {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn protection_factors_track_severity() {
        let factors: Vec<u32> = HazardCategory::ALL
            .iter()
            .map(|c| c.protection_factor())
            .collect();
        assert_eq!(factors, vec![4, 10, 20, 40, 1000]);
    }

    #[test]
    fn fraction_ranges_are_contiguous() {
        for pair in HazardCategory::ALL.windows(2) {
            let (_, upper) = pair[0].fraction_range();
            let (lower, _) = pair[1].fraction_range();
            assert_eq!(upper, lower, "gap between {:?} and {:?}", pair[0], pair[1]);
        }
        assert_eq!(HazardCategory::Negligible.fraction_range().0, 0.0);
        assert_eq!(
            HazardCategory::ExceedsLimit.fraction_range().1,
            f64::INFINITY
        );
    }

    #[test]
    fn classifier_agrees_with_fraction_ranges() {
        // Probe strictly inside each band at limit 100.
        let limit = 100.0;
        for category in HazardCategory::ALL {
            let (lower, upper) = category.fraction_range();
            let probe = if upper.is_finite() {
                (lower + upper) / 2.0 * limit
            } else {
                2.0 * limit
            };
            if probe > 0.0 {
                assert_eq!(classify_reading(probe, limit), category);
            }
        }
    }

    #[test]
    fn band_boundaries_first_match_wins() {
        let limit = 100.0;
        assert_eq!(classify_reading(0.0, limit), HazardCategory::Negligible);
        assert_eq!(classify_reading(0.99, limit), HazardCategory::Negligible);
        assert_eq!(classify_reading(1.0, limit), HazardCategory::VeryLow);
        assert_eq!(classify_reading(9.99, limit), HazardCategory::VeryLow);
        assert_eq!(classify_reading(10.0, limit), HazardCategory::Moderate);
        assert_eq!(classify_reading(49.99, limit), HazardCategory::Moderate);
        assert_eq!(classify_reading(50.0, limit), HazardCategory::NearLimit);
        // Exactly at the limit stays in the fourth band.
        assert_eq!(classify_reading(100.0, limit), HazardCategory::NearLimit);
        assert_eq!(classify_reading(100.01, limit), HazardCategory::ExceedsLimit);
    }

    #[test]
    fn scenario_a_distribution() {
        // [12, 45, 60, 5, 80] at limit 50: thresholds 0.5 / 5 / 25 / 50.
        let dist = classify_sample(&[12.0, 45.0, 60.0, 5.0, 80.0], 50.0).unwrap();
        assert_eq!(dist.count(HazardCategory::Negligible), 0);
        assert_eq!(dist.count(HazardCategory::VeryLow), 0);
        assert_eq!(dist.count(HazardCategory::Moderate), 2); // 12, 5
        assert_eq!(dist.count(HazardCategory::NearLimit), 1); // 45
        assert_eq!(dist.count(HazardCategory::ExceedsLimit), 2); // 60, 80
        assert_eq!(dist.total(), 5);
    }

    #[test]
    fn counts_sum_to_sample_size_and_percentages_to_100() {
        let sample = [0.2, 3.0, 12.0, 45.0, 50.0, 60.0, 80.0];
        let dist = classify_sample(&sample, 50.0).unwrap();
        assert_eq!(dist.counts().iter().sum::<usize>(), sample.len());
        let pct_sum: f64 = dist.percentages().iter().sum();
        assert!((pct_sum - 100.0).abs() < 0.1, "sum: {pct_sum}");
    }

    #[test]
    fn zero_limit_accepted() {
        let dist = classify_sample(&[0.0, 0.0, 1.0, 5.0], 0.0).unwrap();
        assert_eq!(dist.count(HazardCategory::Negligible), 2);
        assert_eq!(dist.count(HazardCategory::ExceedsLimit), 2);
    }

    #[test]
    fn negative_readings_are_negligible() {
        assert_eq!(classify_reading(-3.0, 50.0), HazardCategory::Negligible);
        assert_eq!(classify_reading(-3.0, 0.0), HazardCategory::Negligible);
    }

    #[test]
    fn negative_limit_rejected() {
        assert_eq!(
            classify_sample(&[1.0], -1.0),
            Err(AssessmentError::InvalidLimit(-1.0))
        );
    }

    #[test]
    fn empty_sample_rejected() {
        assert_eq!(classify_sample(&[], 50.0), Err(AssessmentError::EmptySample));
    }

    #[test]
    fn raising_a_reading_never_lowers_its_band() {
        let limit = 50.0;
        let mut previous = classify_reading(0.0, limit);
        let mut v = 0.0;
        while v < 120.0 {
            let current = classify_reading(v, limit);
            assert!(current >= previous, "band dropped at value {v}");
            previous = current;
            v += 0.25;
        }
    }

    #[test]
    fn rows_expose_labels_in_severity_order() {
        let dist = classify_sample(&[12.0, 45.0, 60.0, 5.0, 80.0], 50.0).unwrap();
        let rows = dist.rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].0, "<1%");
        assert_eq!(rows[4].0, ">100%");
        assert_eq!(rows[2].2, 2);
        assert_eq!(rows[2].3, 40.0);
    }
}
