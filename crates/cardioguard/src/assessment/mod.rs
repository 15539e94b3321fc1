//! CHD risk assessment pipeline: validation, feature encoding, inference,
//! tier classification, recommendations, and report assembly.
//!
//! Data flows strictly one way: raw request -> validated profile -> encoded
//! vector -> model probabilities -> tier -> recommendations -> report. Every
//! value in the chain is immutable once constructed.

pub mod classify;
pub mod domain;
pub mod features;
pub mod models;
pub mod predictor;
pub mod recommend;
pub mod report;
pub mod router;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use classify::{ClassifierError, RiskClassifier};
pub use domain::{
    AssessmentRequest, PatientProfile, RecommendationCategory, RiskTier, Sex, ValidationError,
};
pub use features::{EncodedFeatureVector, EncodingError, FeatureEncoder, FEATURE_SCHEMA};
pub use models::LinearRiskModel;
pub use predictor::{ModelInferenceError, ModelPrediction, RiskPredictor};
pub use recommend::{RecommendationEngine, RecommendationSet};
pub use report::{CategoryDigest, ModelProbabilities, ReportAssembler, ReportDocument};
pub use router::assessment_router;
pub use service::{AssessmentError, AssessmentService, AssessmentView, RiskAssessmentResult};
pub use views::{
    reference_values, risk_factor_scores, target_risk_percent, CarePlanView, GaugeView,
    ReferenceRow, RiskFactorScore,
};
