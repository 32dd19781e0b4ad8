use serde::Serialize;

use super::catalog::ProfileAxes;

/// Radar chart axes, in vector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonAxis {
    EducationLevel,
    Experience,
    Age,
}

impl ComparisonAxis {
    pub const fn ordered() -> [Self; 3] {
        [Self::EducationLevel, Self::Experience, Self::Age]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EducationLevel => "Education Level",
            Self::Experience => "Experience",
            Self::Age => "Age",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ComparisonError {
    #[error("normalization bound for {} must be greater than zero", .0.label())]
    ZeroBound(ComparisonAxis),
}

/// Upper bounds each axis is divided by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparisonBounds {
    max_education_code: u32,
    max_experience: u32,
    max_age: u32,
}

impl ComparisonBounds {
    pub fn new(
        max_education_code: u32,
        max_experience: u32,
        max_age: u32,
    ) -> Result<Self, ComparisonError> {
        let checks = [
            (ComparisonAxis::EducationLevel, max_education_code),
            (ComparisonAxis::Experience, max_experience),
            (ComparisonAxis::Age, max_age),
        ];
        if let Some((axis, _)) = checks.into_iter().find(|(_, bound)| *bound == 0) {
            return Err(ComparisonError::ZeroBound(axis));
        }

        Ok(Self {
            max_education_code,
            max_experience,
            max_age,
        })
    }

    pub fn max_education_code(&self) -> u32 {
        self.max_education_code
    }

    pub fn max_experience(&self) -> u32 {
        self.max_experience
    }

    pub fn max_age(&self) -> u32 {
        self.max_age
    }

    /// Scales each axis by its bound. Over-range values are not clamped and come out above 1.
    pub fn normalize(&self, axes: &ProfileAxes) -> [f64; 3] {
        [
            f64::from(axes.education_level) / f64::from(self.max_education_code),
            f64::from(axes.experience) / f64::from(self.max_experience),
            f64::from(axes.age) / f64::from(self.max_age),
        ]
    }
}

/// Normalized candidate and ideal vectors plus the alignment verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonVectors {
    pub axes: [ComparisonAxis; 3],
    pub candidate: [f64; 3],
    pub ideal: [f64; 3],
    pub aligned: bool,
}

impl ComparisonVectors {
    /// Axes where the candidate sits strictly below the ideal.
    pub fn shortfalls(&self) -> Vec<ComparisonAxis> {
        self.axes
            .iter()
            .zip(self.candidate.iter().zip(self.ideal.iter()))
            .filter(|(_, (candidate, ideal))| candidate < ideal)
            .map(|(axis, _)| *axis)
            .collect()
    }
}

pub fn compare(
    candidate: &ProfileAxes,
    ideal: &ProfileAxes,
    bounds: &ComparisonBounds,
) -> ComparisonVectors {
    let candidate = bounds.normalize(candidate);
    let ideal = bounds.normalize(ideal);
    let aligned = candidate
        .iter()
        .zip(ideal.iter())
        .all(|(candidate, ideal)| candidate >= ideal);

    ComparisonVectors {
        axes: ComparisonAxis::ordered(),
        candidate,
        ideal,
        aligned,
    }
}
