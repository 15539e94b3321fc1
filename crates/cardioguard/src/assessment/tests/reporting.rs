use super::common::*;
use crate::assessment::domain::{RecommendationCategory, RiskTier};
use crate::assessment::predictor::ModelPrediction;
use crate::assessment::recommend::RecommendationEngine;
use crate::assessment::report::ReportAssembler;

fn predictions() -> (ModelPrediction, ModelPrediction) {
    (
        ModelPrediction {
            label: true,
            probability: 0.58,
        },
        ModelPrediction {
            label: true,
            probability: 0.65,
        },
    )
}

#[test]
fn report_carries_both_probabilities_and_tier() {
    let subject = profile(smoker_request());
    let set = RecommendationEngine::recommend(RiskTier::High, &subject);
    let (primary, secondary) = predictions();

    let report = ReportAssembler::assemble(&subject, primary, secondary, RiskTier::High, &set);

    assert_eq!(report.model_probabilities.primary, 0.58);
    assert_eq!(report.model_probabilities.secondary, 0.65);
    assert_eq!(report.tier_label, "High");
    assert!(report.executive_summary.contains("65.0%"));
    assert!(report.executive_summary.contains("High Risk"));
}

#[test]
fn report_digest_takes_first_three_of_four_categories() {
    let subject = profile(smoker_request());
    let set = RecommendationEngine::recommend(RiskTier::High, &subject);
    let (primary, secondary) = predictions();

    let report = ReportAssembler::assemble(&subject, primary, secondary, RiskTier::High, &set);

    assert_eq!(report.top_recommendations.len(), 4);
    for digest in &report.top_recommendations {
        assert_ne!(digest.category, RecommendationCategory::MentalHealth);
        assert_eq!(digest.items.len(), 3);
        assert_eq!(digest.items, set.top(digest.category, 3));
    }
}

#[test]
fn patient_fields_keep_intake_order() {
    let subject = profile(smoker_request());
    let set = RecommendationEngine::recommend(RiskTier::High, &subject);
    let (primary, secondary) = predictions();

    let report = ReportAssembler::assemble(&subject, primary, secondary, RiskTier::High, &set);

    let names: Vec<&str> = report
        .patient_fields
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();
    assert_eq!(names[0], "Age");
    assert_eq!(names[1], "Sex");
    assert!(names.contains(&"Systolic BP"));
    assert!(names.contains(&"BMI"));

    let sex = report
        .patient_fields
        .iter()
        .find(|(name, _)| name == "Sex")
        .map(|(_, value)| value.as_str());
    assert_eq!(sex, Some("Female"));
}

#[test]
fn report_text_is_latin1_safe() {
    let subject = profile(smoker_request());
    let set = RecommendationEngine::recommend(RiskTier::High, &subject);
    let (primary, secondary) = predictions();

    let report = ReportAssembler::assemble(&subject, primary, secondary, RiskTier::High, &set);

    let mut texts = vec![report.executive_summary.clone()];
    for digest in &report.top_recommendations {
        texts.extend(digest.items.iter().cloned());
    }
    for text in texts {
        assert!(
            text.chars().all(|ch| (ch as u32) <= 0xFF),
            "non Latin-1 character in '{text}'"
        );
    }
}
