use cardioguard::assessment::{AssessmentService, LinearRiskModel, RiskClassifier};
use cardioguard::config::RiskConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Service wired with the built-in calibrated surrogate models. Both
/// predictors are constructed once and shared for the process lifetime.
pub(crate) fn build_assessment_service(
    risk: &RiskConfig,
) -> AssessmentService<LinearRiskModel, LinearRiskModel> {
    AssessmentService::new(
        Arc::new(LinearRiskModel::primary()),
        Arc::new(LinearRiskModel::ensemble()),
        RiskClassifier::from_config(risk),
    )
}
