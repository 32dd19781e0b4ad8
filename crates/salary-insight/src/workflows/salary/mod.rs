//! Salary prediction workflow: form intake, encoding, model call, growth
//! projection, and comparison against an ideal profile for the job title.

pub mod adapter;
pub mod batch;
pub mod catalog;
pub mod comparison;
pub mod domain;
pub mod intake;
pub mod projection;
pub mod report;
pub mod router;
pub mod service;
pub mod tier;

#[cfg(test)]
mod tests;

pub use adapter::{AdapterFailure, SalaryModel};
pub use batch::{write_outcomes, BatchError, BatchOutcome, BatchPredictor};
pub use catalog::{
    FixedPicker, FormField, ProfileAxes, Quote, QuotePicker, RandomPicker, SalaryCatalog,
    UnknownLabelError,
};
pub use comparison::{compare, ComparisonAxis, ComparisonBounds, ComparisonError, ComparisonVectors};
pub use domain::{CandidateForm, CandidateProfile, EncodedChoice, FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use intake::MissingFieldError;
pub use projection::{
    check_growth_rate, project, GrowthRateError, ProjectionPoint, ProjectionSeries,
    MAX_GROWTH_RATE_PERCENT,
};
pub use report::{format_amount, AlignmentVerdict, SalaryInsight};
pub use router::{prediction_router, PredictionRequest};
pub use service::{PredictionError, PredictionSettings, SalaryPredictionService};
pub use tier::{SalaryTier, TierThresholds};
