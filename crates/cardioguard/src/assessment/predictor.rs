use super::features::EncodedFeatureVector;
use serde::{Deserialize, Serialize};

/// Single inference outcome from a predictor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelPrediction {
    /// Binary CHD-risk call at the model's operating point.
    pub label: bool,
    /// Positive-class probability in [0, 1].
    pub probability: f64,
}

/// Contract for the pre-trained CHD risk models.
///
/// Implementations are loaded once at process start and treated as
/// process-wide read-only state; `predict` must be reentrant so concurrent
/// assessments can share one instance. Failures are surfaced, never retried.
pub trait RiskPredictor: Send + Sync {
    /// Stable identifier used in logs and the report.
    fn name(&self) -> &'static str;

    fn predict(&self, vector: &EncodedFeatureVector) -> Result<ModelPrediction, ModelInferenceError>;
}

/// Raised when an external predictor fails. Presented to users as
/// "assessment unavailable"; the pipeline produces no partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelInferenceError {
    #[error("model '{model}' rejected the feature vector: {reason}")]
    MalformedInput { model: &'static str, reason: String },
    #[error("model '{model}' unavailable: {reason}")]
    Unavailable { model: &'static str, reason: String },
}
