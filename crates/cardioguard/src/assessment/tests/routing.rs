use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use super::common::*;
use crate::assessment::domain::AssessmentRequest;
use crate::assessment::router::assessment_router;
use crate::assessment::service::AssessmentService;

fn assessment_body(request: &AssessmentRequest) -> Body {
    Body::from(serde_json::to_vec(request).expect("request serializes"))
}

async fn read_json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

#[tokio::test]
async fn assess_route_returns_view_payload() {
    let router = assessment_router(Arc::new(service(0.58, 0.65)));

    let response = router
        .oneshot(
            Request::post("/api/v1/assessments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(assessment_body(&smoker_request()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["tier_label"], "High");
    assert_eq!(payload["tier_color"], "#ff3838");
    assert_eq!(payload["ensemble_probability"], 0.65);
    assert!(payload["recommendations"].is_array());
}

#[tokio::test]
async fn assess_route_rejects_invalid_input() {
    let router = assessment_router(Arc::new(service(0.2, 0.2)));

    let invalid = AssessmentRequest {
        age: 101,
        ..request()
    };
    let response = router
        .oneshot(
            Request::post("/api/v1/assessments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(assessment_body(&invalid))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"].as_str().unwrap().contains("age"));
}

#[tokio::test]
async fn assess_route_maps_inference_failure_to_bad_gateway() {
    let router = assessment_router(Arc::new(AssessmentService::new(
        Arc::new(UnavailablePredictor),
        Arc::new(UnavailablePredictor),
        classifier(),
    )));

    let response = router
        .oneshot(
            Request::post("/api/v1/assessments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(assessment_body(&request()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap()
        .contains("assessment unavailable"));
}

#[tokio::test]
async fn reference_values_route_serves_table() {
    let router = assessment_router(Arc::new(service(0.2, 0.2)));

    let response = router
        .oneshot(
            Request::get("/api/v1/reference-values")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let rows = payload.as_array().expect("array of rows");
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["age_band"], "18-29");
}
