use serde::Serialize;

/// Upper end of the accepted yearly growth percentage.
pub const MAX_GROWTH_RATE_PERCENT: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error(
    "growth rate must be a percentage between 0 and {max} (got {value})",
    max = MAX_GROWTH_RATE_PERCENT
)]
pub struct GrowthRateError {
    pub value: f64,
}

/// Accepts rates in `[0, MAX_GROWTH_RATE_PERCENT]`. NaN and infinities are rejected.
pub fn check_growth_rate(growth_rate_percent: f64) -> Result<f64, GrowthRateError> {
    if (0.0..=MAX_GROWTH_RATE_PERCENT).contains(&growth_rate_percent) {
        Ok(growth_rate_percent)
    } else {
        Err(GrowthRateError {
            value: growth_rate_percent,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub year_offset: u32,
    pub projected_salary: f64,
}

/// Compounded salary path starting at the predicted base salary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionSeries {
    pub growth_rate_percent: f64,
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn salaries(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|point| point.projected_salary)
    }

    pub fn first(&self) -> Option<f64> {
        self.points.first().map(|point| point.projected_salary)
    }

    pub fn last(&self) -> Option<f64> {
        self.points.last().map(|point| point.projected_salary)
    }
}

/// Emits `base * (1 + rate/100)^i` for every year offset `i` in `0..=horizon_years`.
///
/// Values are left unrounded; the first point always equals `base_salary` exactly.
pub fn project(base_salary: f64, growth_rate_percent: f64, horizon_years: u32) -> ProjectionSeries {
    let factor = 1.0 + growth_rate_percent / 100.0;
    let points = (0..=horizon_years)
        .map(|year_offset| ProjectionPoint {
            year_offset,
            projected_salary: base_salary * compound(factor, year_offset),
        })
        .collect();

    ProjectionSeries {
        growth_rate_percent,
        points,
    }
}

fn compound(factor: f64, years: u32) -> f64 {
    match i32::try_from(years) {
        Ok(exponent) => factor.powi(exponent),
        Err(_) => factor.powf(f64::from(years)),
    }
}
