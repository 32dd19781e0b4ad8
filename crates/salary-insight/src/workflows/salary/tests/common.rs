use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::config::ProjectionConfig;
use crate::workflows::salary::adapter::{AdapterFailure, SalaryModel};
use crate::workflows::salary::catalog::SalaryCatalog;
use crate::workflows::salary::domain::{CandidateForm, FeatureVector};
use crate::workflows::salary::service::{PredictionSettings, SalaryPredictionService};

/// Returns a fixed salary and counts how often it was asked.
#[derive(Default)]
pub(super) struct StubModel {
    pub(super) salary: f64,
    calls: AtomicUsize,
    last_features: std::sync::Mutex<Option<FeatureVector>>,
}

impl StubModel {
    pub(super) fn returning(salary: f64) -> Self {
        Self {
            salary,
            ..Self::default()
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(super) fn last_features(&self) -> Option<FeatureVector> {
        *self.last_features.lock().expect("features mutex poisoned")
    }
}

impl SalaryModel for StubModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, AdapterFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_features.lock().expect("features mutex poisoned") = Some(*features);
        Ok(self.salary)
    }

    fn describe(&self) -> String {
        "stub".to_string()
    }
}

pub(super) struct FailingModel;

impl SalaryModel for FailingModel {
    fn predict(&self, _features: &FeatureVector) -> Result<f64, AdapterFailure> {
        Err(AdapterFailure::Model("artifact unavailable".to_string()))
    }
}

pub(super) fn settings() -> PredictionSettings {
    PredictionSettings::from_config(&ProjectionConfig::default(), SalaryCatalog::standard())
        .expect("reference bounds are positive")
}

pub(super) fn service_with<M: SalaryModel>(model: Arc<M>) -> Arc<SalaryPredictionService<M>> {
    Arc::new(SalaryPredictionService::new(model, settings()))
}

/// Bachelor's-level data analyst with two years of experience, age 28.
pub(super) fn analyst_form() -> CandidateForm {
    CandidateForm {
        education: "Bachelor's".to_string(),
        job_title: "Data Analyst".to_string(),
        experience_years: 2,
        age_years: 28,
        gender: "Female".to_string(),
        location: "Suburban".to_string(),
    }
}

pub(super) fn scientist_form() -> CandidateForm {
    CandidateForm {
        education: "Master's".to_string(),
        job_title: "Data Scientist".to_string(),
        experience_years: 6,
        age_years: 35,
        gender: "Male".to_string(),
        location: "Urban".to_string(),
    }
}

pub(super) async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}
