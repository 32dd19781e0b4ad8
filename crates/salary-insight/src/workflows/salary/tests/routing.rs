use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::{analyst_form, read_json, service_with, FailingModel, StubModel};
use crate::workflows::salary::router::{catalog_handler, predict_handler};
use crate::workflows::salary::{prediction_router, PredictionRequest};

fn post_prediction(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/v1/salary/predictions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn prediction_route_returns_full_insight() {
    let router = prediction_router(service_with(Arc::new(StubModel::returning(50_000.0))));
    let body = json!({
        "candidate": analyst_form(),
        "growth_rate_percent": 7.0,
    });

    let response = router
        .oneshot(post_prediction(body))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json(response).await;
    assert_eq!(payload["predicted_salary"], json!(50_000.0));
    assert_eq!(payload["tier"], json!("average"));
    assert_eq!(payload["candidate"]["job_title"]["code"], json!(3));
    assert_eq!(
        payload["projection"]["points"]
            .as_array()
            .map(|points| points.len()),
        Some(11)
    );
    assert_eq!(payload["comparison"]["aligned"], json!(false));
    assert!(payload["quote"]["author"].is_string());
}

#[tokio::test]
async fn empty_body_reports_every_missing_field() {
    let model = Arc::new(StubModel::returning(50_000.0));
    let router = prediction_router(service_with(model.clone()));

    let response = router
        .oneshot(post_prediction(json!({})))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let payload = read_json(response).await;
    assert_eq!(
        payload["missing_fields"],
        json!(["Education", "Work Location", "Job Title"])
    );
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn unknown_option_is_a_bad_request() {
    let router = prediction_router(service_with(Arc::new(StubModel::returning(50_000.0))));
    let mut candidate = serde_json::to_value(analyst_form()).expect("form serializes");
    candidate["education"] = json!("Bootcamp");

    let response = router
        .oneshot(post_prediction(json!({ "candidate": candidate })))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let payload = read_json(response).await;
    assert_eq!(payload["field"], json!("Education"));
}

#[tokio::test]
async fn growth_rate_outside_range_is_a_bad_request() {
    let model = Arc::new(StubModel::returning(50_000.0));

    for rate in [json!(-150), json!(25.5)] {
        let router = prediction_router(service_with(model.clone()));
        let response = router
            .oneshot(post_prediction(json!({
                "candidate": analyst_form(),
                "growth_rate_percent": rate,
            })))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let payload = read_json(response).await;
        assert!(payload["error"]
            .as_str()
            .is_some_and(|message| message.contains("between 0 and 20")));
        assert!(payload.get("projection").is_none());
    }
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn model_failure_is_an_internal_error() {
    let service = service_with(Arc::new(FailingModel));
    let request = PredictionRequest {
        candidate: analyst_form(),
        growth_rate_percent: None,
    };

    let response = predict_handler(State(service), axum::Json(request)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let payload = read_json(response).await;
    assert!(payload["error"]
        .as_str()
        .is_some_and(|message| message.contains("artifact unavailable")));
}

#[tokio::test]
async fn catalog_route_lists_form_options() {
    let router = prediction_router(service_with(Arc::new(StubModel::returning(1.0))));

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/salary/catalog")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json(response).await;
    let fields = payload["fields"].as_array().expect("fields array");
    assert_eq!(fields.len(), 4);
    assert_eq!(fields[0]["placeholder"], json!("Enter Education"));
}

#[tokio::test]
async fn catalog_handler_matches_service_catalog() {
    let service = service_with(Arc::new(StubModel::returning(1.0)));
    let expected = serde_json::to_value(service.catalog().view()).expect("view serializes");

    let response = catalog_handler(State(service)).await;
    assert_eq!(read_json(response).await, expected);
}
