use std::sync::Arc;

use super::common::*;
use crate::assessment::domain::{AssessmentRequest, RecommendationCategory, RiskTier};
use crate::assessment::service::{AssessmentError, AssessmentService};

#[test]
fn assess_runs_scenario_end_to_end() {
    let service = service(0.58, 0.65);

    let result = service.assess(smoker_request()).expect("assessment succeeds");

    assert_eq!(result.tier, RiskTier::High);
    assert_eq!(result.primary.probability, 0.58);
    assert_eq!(result.ensemble.probability, 0.65);
    assert!(result
        .lifestyle_priority()
        .expect("lifestyle entries present")
        .starts_with("URGENT"));
    assert!(result
        .recommendations
        .category(RecommendationCategory::Nutrition)
        .iter()
        .any(|item| item.contains("Ultra-low sodium")));
    assert!(result
        .recommendations
        .category(RecommendationCategory::Medical)
        .iter()
        .any(|item| item.contains("Home blood pressure")));
}

#[test]
fn ensemble_probability_is_authoritative_for_tiering() {
    // Primary says high, ensemble says low: the tier follows the ensemble.
    let service = service(0.9, 0.1);
    let result = service.assess(request()).expect("assessment succeeds");
    assert_eq!(result.tier, RiskTier::Low);
}

#[test]
fn validation_failure_produces_no_result() {
    let service = service(0.2, 0.2);
    let result = service.assess(AssessmentRequest {
        age: 101,
        ..request()
    });
    assert!(matches!(result, Err(AssessmentError::Validation(_))));
}

#[test]
fn inference_failure_surfaces_unmodified() {
    let service = AssessmentService::new(
        Arc::new(UnavailablePredictor),
        Arc::new(UnavailablePredictor),
        classifier(),
    );

    match service.assess(request()) {
        Err(AssessmentError::Inference(_)) => {}
        other => panic!("expected inference error, got {other:?}"),
    }
}

#[test]
fn out_of_range_predictor_output_is_rejected() {
    let service = service(0.5, 1.2);
    match service.assess(request()) {
        Err(AssessmentError::Classifier(_)) => {}
        other => panic!("expected classifier error, got {other:?}"),
    }
}

#[test]
fn repeated_assessments_are_identical() {
    let service = service(0.58, 0.65);
    let first = service.assess(smoker_request()).expect("first run");
    let second = service.assess(smoker_request()).expect("second run");
    assert_eq!(first, second);
}

#[test]
fn view_projects_gauges_and_targets() {
    let service = service(0.58, 0.65);
    let result = service.assess(smoker_request()).expect("assessment succeeds");
    let view = result.view();

    assert_eq!(view.tier_label, "High");
    assert_eq!(view.tier_color, "#ff3838");
    assert_eq!(view.gauges.len(), 2);
    assert_eq!(view.gauges[1].value, 65.0);
    assert_eq!(view.target_risk_percent, 55.0);
    assert_eq!(view.risk_factors.len(), 6);
    assert_eq!(view.recommendations.len(), 5);
    assert_eq!(view.care_plan.tier, RiskTier::High);
}

#[test]
fn result_report_reflects_assessment() {
    let service = service(0.58, 0.65);
    let result = service.assess(smoker_request()).expect("assessment succeeds");
    let report = result.report();

    assert_eq!(report.tier_label, "High");
    assert_eq!(report.model_probabilities.primary, 0.58);
    assert_eq!(report.model_probabilities.secondary, 0.65);
}
