use chrono::{DateTime, Utc};
use serde::Serialize;

use super::catalog::{ProfileAxes, Quote};
use super::comparison::ComparisonVectors;
use super::domain::CandidateProfile;
use super::projection::ProjectionSeries;
use super::tier::SalaryTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentVerdict {
    WellAligned,
    NeedsImprovement,
}

impl AlignmentVerdict {
    pub fn from_comparison(comparison: &ComparisonVectors) -> Self {
        if comparison.aligned {
            Self::WellAligned
        } else {
            Self::NeedsImprovement
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::WellAligned => "well aligned",
            Self::NeedsImprovement => "encouraged to improve in some areas",
        }
    }
}

/// Everything one prediction cycle produces, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct SalaryInsight {
    pub candidate: CandidateProfile,
    pub predicted_salary: f64,
    pub tier: SalaryTier,
    pub tier_label: &'static str,
    pub growth_rate_percent: f64,
    pub projection: ProjectionSeries,
    pub ideal_profile: ProfileAxes,
    pub comparison: ComparisonVectors,
    pub alignment: AlignmentVerdict,
    pub alignment_label: &'static str,
    pub advice: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<Quote>,
    pub model: String,
    pub generated_at: DateTime<Utc>,
}

impl SalaryInsight {
    pub fn summary(&self) -> String {
        format!(
            "Your predicted salary is {} with an expected growth rate of {}%. \
             Compared to the ideal profile for a {}, you are {}.",
            format_amount(self.predicted_salary),
            self.growth_rate_percent,
            self.candidate.job_title.label,
            self.alignment_label
        )
    }
}

/// Two decimals with thousands separators, e.g. `98,357.57`.
pub fn format_amount(value: f64) -> String {
    let rendered = format!("{:.2}", value.abs());
    let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_grouping() {
        assert_eq!(format_amount(98_357.5679), "98,357.57");
        assert_eq!(format_amount(1_234_567.0), "1,234,567.00");
        assert_eq!(format_amount(512.4), "512.40");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(-4_500.0), "-4,500.00");
    }

    #[test]
    fn verdict_follows_alignment_flag() {
        let mut comparison = ComparisonVectors {
            axes: super::super::comparison::ComparisonAxis::ordered(),
            candidate: [0.5, 0.1, 0.4],
            ideal: [0.5, 0.1, 0.4],
            aligned: true,
        };
        assert_eq!(
            AlignmentVerdict::from_comparison(&comparison),
            AlignmentVerdict::WellAligned
        );
        comparison.aligned = false;
        assert_eq!(
            AlignmentVerdict::from_comparison(&comparison).label(),
            "encouraged to improve in some areas"
        );
    }
}
