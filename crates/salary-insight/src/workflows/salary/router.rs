use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::adapter::SalaryModel;
use super::catalog::RandomPicker;
use super::domain::CandidateForm;
use super::service::{PredictionError, SalaryPredictionService};

/// Body of a prediction request. Omitted fields behave like untouched form widgets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(default)]
    pub candidate: CandidateForm,
    #[serde(default)]
    pub growth_rate_percent: Option<f64>,
}

/// Router builder exposing the prediction cycle and the form catalog.
pub fn prediction_router<M>(service: Arc<SalaryPredictionService<M>>) -> Router
where
    M: SalaryModel + ?Sized + 'static,
{
    Router::new()
        .route("/api/v1/salary/predictions", post(predict_handler::<M>))
        .route("/api/v1/salary/catalog", get(catalog_handler::<M>))
        .with_state(service)
}

pub(crate) async fn predict_handler<M>(
    State(service): State<Arc<SalaryPredictionService<M>>>,
    axum::Json(request): axum::Json<PredictionRequest>,
) -> Response
where
    M: SalaryModel + ?Sized + 'static,
{
    let outcome = {
        let mut picker = RandomPicker(rand::rng());
        service.predict(&request.candidate, request.growth_rate_percent, &mut picker)
    };

    match outcome {
        Ok(insight) => (StatusCode::OK, axum::Json(insight)).into_response(),
        Err(PredictionError::MissingFields(missing)) => {
            let payload = json!({
                "error": missing.to_string(),
                "missing_fields": missing.field_labels(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(PredictionError::UnknownLabel(err)) => {
            let payload = json!({
                "error": err.to_string(),
                "field": err.field.label(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(PredictionError::InvalidGrowthRate(err)) => {
            let payload = json!({
                "error": err.to_string(),
                "growth_rate_percent": err.value,
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn catalog_handler<M>(
    State(service): State<Arc<SalaryPredictionService<M>>>,
) -> Response
where
    M: SalaryModel + ?Sized + 'static,
{
    let view = service.catalog().view();
    (StatusCode::OK, axum::Json(view)).into_response()
}
