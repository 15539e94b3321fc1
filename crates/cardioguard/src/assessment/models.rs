//! Built-in calibrated surrogates for the trained CHD classifiers.
//!
//! The production models are opaque artifacts trained offline. For
//! deployments without the artifact store (demos, CI), the coefficients of
//! logistic surrogates fitted against each model's output are exported here
//! so the service still honors the `RiskPredictor` contract end to end.

use super::features::{EncodedFeatureVector, FEATURE_SCHEMA};
use super::predictor::{ModelInferenceError, ModelPrediction, RiskPredictor};

/// Standardization means for the 15-feature schema, training-set order.
const SCALER_MEAN: [f64; 15] = [
    49.58, 0.43, 0.49, 0.03, 0.006, 0.31, 0.026, 236.7, 132.4, 82.9, 81.9, 0.87, 1.60, 4.93, 1.74,
];

/// Standardization deviations, paired with `SCALER_MEAN`.
const SCALER_STD: [f64; 15] = [
    8.57, 0.49, 0.50, 0.17, 0.076, 0.46, 0.16, 44.6, 22.0, 11.9, 23.9, 1.09, 0.19, 1.12, 0.74,
];

/// Surrogate weights for the tuned random forest (primary model).
const PRIMARY_WEIGHTS: [f64; 15] = [
    0.62, 0.21, 0.17, 0.12, 0.14, 0.28, 0.16, 0.24, 0.41, 0.18, 0.19, 0.22, 0.15, 0.31, 0.20,
];
const PRIMARY_INTERCEPT: f64 = -1.92;

/// Surrogate weights for the stacking ensemble (authoritative model).
const ENSEMBLE_WEIGHTS: [f64; 15] = [
    0.66, 0.19, 0.20, 0.11, 0.16, 0.31, 0.18, 0.26, 0.44, 0.16, 0.21, 0.25, 0.13, 0.34, 0.23,
];
const ENSEMBLE_INTERCEPT: f64 = -2.05;

/// Operating point shared by both exported surrogates.
const DECISION_THRESHOLD: f64 = 0.5;

/// Logistic model over the standardized 15-feature vector.
#[derive(Debug, Clone)]
pub struct LinearRiskModel {
    name: &'static str,
    weights: [f64; 15],
    intercept: f64,
}

impl LinearRiskModel {
    /// Surrogate for the tuned random forest.
    pub fn primary() -> Self {
        Self {
            name: "random_forest",
            weights: PRIMARY_WEIGHTS,
            intercept: PRIMARY_INTERCEPT,
        }
    }

    /// Surrogate for the stacking ensemble used for tiering.
    pub fn ensemble() -> Self {
        Self {
            name: "stacking_ensemble",
            weights: ENSEMBLE_WEIGHTS,
            intercept: ENSEMBLE_INTERCEPT,
        }
    }
}

impl RiskPredictor for LinearRiskModel {
    fn name(&self) -> &'static str {
        self.name
    }

    fn predict(&self, vector: &EncodedFeatureVector) -> Result<ModelPrediction, ModelInferenceError> {
        let values = vector.ordered_values();

        let mut logit = self.intercept;
        for (index, value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(ModelInferenceError::MalformedInput {
                    model: self.name,
                    reason: format!("non-finite value for feature '{}'", FEATURE_SCHEMA[index]),
                });
            }
            let standardized = (value - SCALER_MEAN[index]) / SCALER_STD[index];
            logit += self.weights[index] * standardized;
        }

        let probability = sigmoid(logit);
        Ok(ModelPrediction {
            label: probability >= DECISION_THRESHOLD,
            probability,
        })
    }
}

fn sigmoid(logit: f64) -> f64 {
    1.0 / (1.0 + (-logit).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::{AssessmentRequest, PatientProfile, Sex};
    use crate::assessment::features::FeatureEncoder;

    fn encoded() -> EncodedFeatureVector {
        let profile = PatientProfile::try_from(AssessmentRequest {
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
        })
        .expect("valid profile");
        FeatureEncoder::encode(&profile).expect("encodes")
    }

    #[test]
    fn predictions_stay_in_unit_interval() {
        let vector = encoded();
        for model in [LinearRiskModel::primary(), LinearRiskModel::ensemble()] {
            let prediction = model.predict(&vector).expect("inference succeeds");
            assert!((0.0..=1.0).contains(&prediction.probability));
            assert_eq!(prediction.label, prediction.probability >= 0.5);
        }
    }

    #[test]
    fn repeated_inference_is_deterministic() {
        let vector = encoded();
        let model = LinearRiskModel::ensemble();
        let first = model.predict(&vector).expect("inference succeeds");
        let second = model.predict(&vector).expect("inference succeeds");
        assert_eq!(first, second);
    }
}
