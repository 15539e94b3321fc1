use super::common::*;
use crate::assessment::domain::{AssessmentRequest, RecommendationCategory, RiskTier, Sex};
use crate::assessment::recommend::{RecommendationEngine, URGENT_CESSATION_NOTE};

#[test]
fn base_set_covers_every_category() {
    let set = RecommendationEngine::recommend(RiskTier::Low, &profile(request()));
    for category in RecommendationCategory::ordered() {
        assert!(!set.category(category).is_empty(), "{category:?} empty");
    }
}

#[test]
fn engine_is_deterministic_and_idempotent() {
    let subject = profile(smoker_request());
    let first = RecommendationEngine::recommend(RiskTier::High, &subject);
    let second = RecommendationEngine::recommend(RiskTier::High, &subject);
    assert_eq!(first, second);
}

#[test]
fn smoker_note_leads_lifestyle_regardless_of_tier() {
    let subject = profile(smoker_request());
    for tier in RiskTier::ordered() {
        let set = RecommendationEngine::recommend(tier, &subject);
        assert_eq!(
            set.category(RecommendationCategory::Lifestyle)[0],
            URGENT_CESSATION_NOTE,
            "cessation note not first for {tier:?}"
        );
    }
}

#[test]
fn smoker_gains_pulmonary_testing_note() {
    let set = RecommendationEngine::recommend(RiskTier::Moderate, &profile(smoker_request()));
    assert!(set
        .category(RecommendationCategory::Medical)
        .iter()
        .any(|item| item.contains("Pulmonary function")));
}

#[test]
fn senior_profile_gains_age_specific_notes() {
    let senior = profile(AssessmentRequest {
        age: 70,
        ..request()
    });
    let set = RecommendationEngine::recommend(RiskTier::Low, &senior);

    assert!(set
        .category(RecommendationCategory::Exercise)
        .iter()
        .any(|item| item.contains("balance training")));
    assert!(set
        .category(RecommendationCategory::Medical)
        .iter()
        .any(|item| item.contains("cognitive health")));
    assert!(set
        .category(RecommendationCategory::Nutrition)
        .iter()
        .any(|item| item.contains("calcium and vitamin D")));
}

#[test]
fn sixty_five_is_not_senior() {
    let subject = profile(AssessmentRequest {
        age: 65,
        ..request()
    });
    let set = RecommendationEngine::recommend(RiskTier::Low, &subject);
    assert!(!set
        .category(RecommendationCategory::Exercise)
        .iter()
        .any(|item| item.contains("balance training")));
}

#[test]
fn female_profile_gains_sex_specific_notes() {
    let subject = profile(AssessmentRequest {
        sex: Sex::Female,
        ..request()
    });
    let set = RecommendationEngine::recommend(RiskTier::Low, &subject);

    assert!(set
        .category(RecommendationCategory::Medical)
        .iter()
        .any(|item| item.contains("hormone replacement")));
    assert!(set
        .category(RecommendationCategory::Nutrition)
        .iter()
        .any(|item| item.contains("phytoestrogen")));
}

#[test]
fn diabetic_profile_gains_condition_notes() {
    let subject = profile(AssessmentRequest {
        has_diabetes: true,
        ..request()
    });
    let set = RecommendationEngine::recommend(RiskTier::Moderate, &subject);

    assert!(set
        .category(RecommendationCategory::Nutrition)
        .iter()
        .any(|item| item.contains("blood sugar")));
    assert!(set
        .category(RecommendationCategory::Medical)
        .iter()
        .any(|item| item.contains("HbA1c")));
}

#[test]
fn hypertensive_profile_gains_condition_notes() {
    let subject = profile(AssessmentRequest {
        has_hypertension: true,
        ..request()
    });
    let set = RecommendationEngine::recommend(RiskTier::Moderate, &subject);

    assert!(set
        .category(RecommendationCategory::Nutrition)
        .iter()
        .any(|item| item.contains("Ultra-low sodium")));
    assert!(set
        .category(RecommendationCategory::Medical)
        .iter()
        .any(|item| item.contains("Home blood pressure")));
}

#[test]
fn augmentations_append_after_base_content() {
    let base = RecommendationEngine::recommend(RiskTier::Low, &profile(request()));
    let augmented = RecommendationEngine::recommend(
        RiskTier::Low,
        &profile(AssessmentRequest {
            has_diabetes: true,
            ..request()
        }),
    );

    let base_nutrition = base.category(RecommendationCategory::Nutrition);
    let augmented_nutrition = augmented.category(RecommendationCategory::Nutrition);
    assert_eq!(
        &augmented_nutrition[..base_nutrition.len()],
        base_nutrition,
        "append reordered base content"
    );
    assert_eq!(augmented_nutrition.len(), base_nutrition.len() + 1);
}

#[test]
fn top_limits_each_category() {
    let set = RecommendationEngine::recommend(RiskTier::High, &profile(smoker_request()));
    assert_eq!(set.top(RecommendationCategory::Nutrition, 3).len(), 3);
    assert!(set.top(RecommendationCategory::Nutrition, 100).len() >= 9);
}
