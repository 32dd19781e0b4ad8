use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, warn};

use crate::config::ProjectionConfig;

use super::adapter::{checked_predict, AdapterFailure, SalaryModel};
use super::catalog::{QuotePicker, SalaryCatalog, UnknownLabelError};
use super::comparison::{compare, ComparisonBounds, ComparisonError};
use super::domain::{CandidateForm, CandidateProfile};
use super::intake::{profile_from_form, MissingFieldError};
use super::projection::{check_growth_rate, project, GrowthRateError};
use super::report::{AlignmentVerdict, SalaryInsight};
use super::tier::TierThresholds;

/// Experience and age bounds of the reference deployment's radar chart.
pub const REFERENCE_MAX_EXPERIENCE: u32 = 40;
pub const REFERENCE_MAX_AGE: u32 = 65;

/// Per-cycle parameters that are configuration rather than constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionSettings {
    pub horizon_years: u32,
    pub default_growth_rate_percent: f64,
    pub bounds: ComparisonBounds,
    pub tiers: TierThresholds,
}

impl PredictionSettings {
    pub fn from_config(
        config: &ProjectionConfig,
        catalog: &SalaryCatalog,
    ) -> Result<Self, ComparisonError> {
        let bounds = ComparisonBounds::new(
            catalog.education.max_code(),
            REFERENCE_MAX_EXPERIENCE,
            REFERENCE_MAX_AGE,
        )?;

        Ok(Self {
            horizon_years: config.horizon_years,
            default_growth_rate_percent: config.growth_rate_percent,
            bounds,
            tiers: TierThresholds::default(),
        })
    }
}

/// Drives one validate → encode → predict → project → compare cycle.
///
/// The model is loaded once by the caller and shared read-only across cycles.
pub struct SalaryPredictionService<M: ?Sized> {
    catalog: &'static SalaryCatalog,
    settings: PredictionSettings,
    model: Arc<M>,
}

impl<M> SalaryPredictionService<M>
where
    M: SalaryModel + ?Sized,
{
    pub fn new(model: Arc<M>, settings: PredictionSettings) -> Self {
        Self::with_catalog(model, SalaryCatalog::standard(), settings)
    }

    pub fn with_catalog(
        model: Arc<M>,
        catalog: &'static SalaryCatalog,
        settings: PredictionSettings,
    ) -> Self {
        Self {
            catalog,
            settings,
            model,
        }
    }

    pub fn catalog(&self) -> &'static SalaryCatalog {
        self.catalog
    }

    pub fn settings(&self) -> &PredictionSettings {
        &self.settings
    }

    /// Presence check and encoding only; never touches the model.
    pub fn validate(&self, form: &CandidateForm) -> Result<CandidateProfile, PredictionError> {
        profile_from_form(self.catalog, form)
    }

    /// Runs a full cycle. `growth_rate_percent` falls back to the configured default
    /// and is range-checked before the model is called.
    pub fn predict<P>(
        &self,
        form: &CandidateForm,
        growth_rate_percent: Option<f64>,
        picker: &mut P,
    ) -> Result<SalaryInsight, PredictionError>
    where
        P: QuotePicker + ?Sized,
    {
        let candidate = match self.validate(form) {
            Ok(candidate) => candidate,
            Err(PredictionError::MissingFields(missing)) => {
                warn!(missing = ?missing.field_labels(), "prediction halted on missing selections");
                return Err(PredictionError::MissingFields(missing));
            }
            Err(other) => return Err(other),
        };

        let growth_rate_percent = check_growth_rate(
            growth_rate_percent.unwrap_or(self.settings.default_growth_rate_percent),
        )
        .map_err(|err| {
            warn!(growth_rate_percent = err.value, "prediction halted on invalid growth rate");
            err
        })?;

        let features = candidate.features();
        let predicted_salary = checked_predict(self.model.as_ref(), &features).map_err(|err| {
            error!(error = %err, model = %self.model.describe(), "salary model failed");
            err
        })?;

        let tier = self.settings.tiers.classify(predicted_salary);
        let projection = project(
            predicted_salary,
            growth_rate_percent,
            self.settings.horizon_years,
        );

        let ideal_profile = self
            .catalog
            .ideal_profiles
            .lookup(candidate.job_title.label);
        let comparison = compare(&candidate.axes(), &ideal_profile, &self.settings.bounds);
        let alignment = AlignmentVerdict::from_comparison(&comparison);

        let advice = self
            .catalog
            .guidance
            .advice_for(candidate.job_title.label);
        let quote = self.catalog.guidance.quote(picker);

        debug!(
            job_title = candidate.job_title.label,
            predicted_salary,
            tier = tier.label(),
            aligned = comparison.aligned,
            "prediction cycle complete"
        );

        Ok(SalaryInsight {
            candidate,
            predicted_salary,
            tier,
            tier_label: tier.label(),
            growth_rate_percent,
            projection,
            ideal_profile,
            comparison,
            alignment,
            alignment_label: alignment.label(),
            advice,
            quote,
            model: self.model.describe(),
            generated_at: Utc::now(),
        })
    }
}

/// Error raised by a prediction cycle.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error(transparent)]
    MissingFields(#[from] MissingFieldError),
    #[error(transparent)]
    UnknownLabel(#[from] UnknownLabelError),
    #[error(transparent)]
    InvalidGrowthRate(#[from] GrowthRateError),
    #[error(transparent)]
    Adapter(#[from] AdapterFailure),
}
