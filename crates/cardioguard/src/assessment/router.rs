use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::domain::AssessmentRequest;
use super::predictor::RiskPredictor;
use super::service::AssessmentService;
use super::views::reference_values;

/// Router builder exposing the assessment and reference-value endpoints.
pub fn assessment_router<P, E>(service: Arc<AssessmentService<P, E>>) -> Router
where
    P: RiskPredictor + 'static,
    E: RiskPredictor + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(assess_handler::<P, E>))
        .route("/api/v1/reference-values", get(reference_values_handler))
        .with_state(service)
}

pub(crate) async fn assess_handler<P, E>(
    State(service): State<Arc<AssessmentService<P, E>>>,
    Json(request): Json<AssessmentRequest>,
) -> Response
where
    P: RiskPredictor + 'static,
    E: RiskPredictor + 'static,
{
    match service.assess(request) {
        Ok(result) => (StatusCode::OK, Json(result.view())).into_response(),
        Err(error) => {
            let status = error.status_code();
            let payload = json!({
                "error": error.to_string(),
            });
            (status, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn reference_values_handler() -> Response {
    (StatusCode::OK, Json(reference_values())).into_response()
}
