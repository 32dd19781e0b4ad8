use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryTier {
    BelowAverage,
    Average,
    AboveAverage,
}

impl SalaryTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::BelowAverage => "Below average salary range",
            Self::Average => "Average salary range",
            Self::AboveAverage => "Above average salary range",
        }
    }
}

/// Boundaries between tiers: below `lower`, `[lower, upper)`, and `upper` or more.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierThresholds {
    pub lower: f64,
    pub upper: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            lower: 30_000.0,
            upper: 70_000.0,
        }
    }
}

impl TierThresholds {
    pub fn classify(&self, salary: f64) -> SalaryTier {
        if salary < self.lower {
            SalaryTier::BelowAverage
        } else if salary < self.upper {
            SalaryTier::Average
        } else {
            SalaryTier::AboveAverage
        }
    }
}
