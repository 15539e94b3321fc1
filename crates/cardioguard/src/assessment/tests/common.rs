use std::sync::Arc;

use crate::assessment::classify::RiskClassifier;
use crate::assessment::domain::{AssessmentRequest, PatientProfile, Sex};
use crate::assessment::features::EncodedFeatureVector;
use crate::assessment::predictor::{ModelInferenceError, ModelPrediction, RiskPredictor};
use crate::assessment::service::AssessmentService;
use crate::config::RiskConfig;

/// Baseline healthy male request; tests tweak individual fields.
pub(super) fn request() -> AssessmentRequest {
    AssessmentRequest {
        age: 50,
        sex: Sex::Male,
        is_smoking: false,
        cigarettes_per_day: 0,
        on_bp_medication: false,
        has_stroke_history: false,
        has_hypertension: false,
        has_diabetes: false,
        systolic_bp: 120,
        diastolic_bp: 80,
        total_cholesterol: 200,
        fasting_glucose: 90,
        body_mass_index: 24.0,
    }
}

/// The end-to-end scenario from the clinical validation set: 55-year-old
/// female smoker with hypertension.
pub(super) fn smoker_request() -> AssessmentRequest {
    AssessmentRequest {
        age: 55,
        sex: Sex::Female,
        is_smoking: true,
        cigarettes_per_day: 15,
        on_bp_medication: false,
        has_stroke_history: false,
        has_hypertension: true,
        has_diabetes: false,
        systolic_bp: 150,
        diastolic_bp: 95,
        total_cholesterol: 250,
        fasting_glucose: 110,
        body_mass_index: 31.0,
    }
}

pub(super) fn profile(request: AssessmentRequest) -> PatientProfile {
    PatientProfile::try_from(request).expect("fixture request validates")
}

pub(super) fn classifier() -> RiskClassifier {
    RiskClassifier::from_config(&RiskConfig::default())
}

/// Predictor stub returning a fixed probability.
pub(super) struct FixedPredictor {
    pub name: &'static str,
    pub probability: f64,
}

impl RiskPredictor for FixedPredictor {
    fn name(&self) -> &'static str {
        self.name
    }

    fn predict(
        &self,
        _vector: &EncodedFeatureVector,
    ) -> Result<ModelPrediction, ModelInferenceError> {
        Ok(ModelPrediction {
            label: self.probability >= 0.5,
            probability: self.probability,
        })
    }
}

/// Predictor stub that always fails, for inference-error paths.
pub(super) struct UnavailablePredictor;

impl RiskPredictor for UnavailablePredictor {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    fn predict(
        &self,
        _vector: &EncodedFeatureVector,
    ) -> Result<ModelPrediction, ModelInferenceError> {
        Err(ModelInferenceError::Unavailable {
            model: "unavailable",
            reason: "artifact store offline".to_string(),
        })
    }
}

pub(super) fn service(
    primary_probability: f64,
    ensemble_probability: f64,
) -> AssessmentService<FixedPredictor, FixedPredictor> {
    AssessmentService::new(
        Arc::new(FixedPredictor {
            name: "random_forest",
            probability: primary_probability,
        }),
        Arc::new(FixedPredictor {
            name: "stacking_ensemble",
            probability: ensemble_probability,
        }),
        classifier(),
    )
}
