use std::sync::Arc;

use axum::http::StatusCode;
use serde::Serialize;
use tracing::info;

use super::classify::{ClassifierError, RiskClassifier};
use super::domain::{
    AssessmentRequest, PatientProfile, RecommendationCategory, RiskTier, ValidationError,
};
use super::features::{EncodingError, FeatureEncoder};
use super::predictor::{ModelInferenceError, ModelPrediction, RiskPredictor};
use super::recommend::{RecommendationEngine, RecommendationSet};
use super::report::{ReportAssembler, ReportDocument};
use super::views::{
    risk_factor_scores, target_risk_percent, CarePlanView, GaugeView, RecommendationCategoryView,
    RiskFactorScore,
};

/// Orchestrator running one assessment end to end: validate, encode, run
/// both predictors, classify on the ensemble, derive recommendations.
///
/// The predictors are shared read-only state; each call builds a fresh
/// value graph, so one service instance serves concurrent requests.
pub struct AssessmentService<P, E> {
    primary: Arc<P>,
    ensemble: Arc<E>,
    classifier: RiskClassifier,
}

impl<P, E> AssessmentService<P, E>
where
    P: RiskPredictor + 'static,
    E: RiskPredictor + 'static,
{
    pub fn new(primary: Arc<P>, ensemble: Arc<E>, classifier: RiskClassifier) -> Self {
        Self {
            primary,
            ensemble,
            classifier,
        }
    }

    /// Run a full assessment. All-or-nothing: any failure propagates and no
    /// partial result is produced.
    pub fn assess(
        &self,
        request: AssessmentRequest,
    ) -> Result<RiskAssessmentResult, AssessmentError> {
        let profile = PatientProfile::try_from(request)?;
        let vector = FeatureEncoder::encode(&profile)?;

        let primary = self.primary.predict(&vector)?;
        let ensemble = self.ensemble.predict(&vector)?;

        // The ensemble model is authoritative for tiering; the primary
        // probability is advisory.
        let tier = self.classifier.classify(ensemble.probability)?;
        let recommendations = RecommendationEngine::recommend(tier, &profile);

        info!(
            tier = tier.label(),
            primary_probability = primary.probability,
            ensemble_probability = ensemble.probability,
            "assessment completed"
        );

        Ok(RiskAssessmentResult {
            profile,
            primary,
            ensemble,
            tier,
            recommendations,
        })
    }
}

/// Consolidated output of one orchestration call. Immutable; a new
/// submission supersedes (never merges into) the previous result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessmentResult {
    pub profile: PatientProfile,
    pub primary: ModelPrediction,
    pub ensemble: ModelPrediction,
    pub tier: RiskTier,
    pub recommendations: RecommendationSet,
}

impl RiskAssessmentResult {
    pub fn report(&self) -> ReportDocument {
        ReportAssembler::assemble(
            &self.profile,
            self.primary,
            self.ensemble,
            self.tier,
            &self.recommendations,
        )
    }

    pub fn view(&self) -> AssessmentView {
        let risk_percent = self.ensemble.probability * 100.0;

        let recommendations = self
            .recommendations
            .iter()
            .map(|(category, items)| RecommendationCategoryView {
                category,
                category_label: category.label(),
                items: items.to_vec(),
            })
            .collect();

        AssessmentView {
            tier: self.tier,
            tier_label: self.tier.label(),
            tier_color: self.tier.color(),
            headline: self.tier.headline(),
            primary_probability: self.primary.probability,
            ensemble_probability: self.ensemble.probability,
            target_risk_percent: target_risk_percent(risk_percent),
            gauges: vec![
                GaugeView::new("Random Forest Risk Score", self.primary.probability),
                GaugeView::new("Ensemble Risk Score", self.ensemble.probability),
            ],
            risk_factors: risk_factor_scores(&self.profile),
            recommendations,
            care_plan: CarePlanView::for_tier(self.tier),
        }
    }

    pub fn lifestyle_priority(&self) -> Option<&str> {
        self.recommendations
            .category(RecommendationCategory::Lifestyle)
            .first()
            .map(String::as_str)
    }
}

/// Full response body for the assessment endpoint and dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentView {
    pub tier: RiskTier,
    pub tier_label: &'static str,
    pub tier_color: &'static str,
    pub headline: &'static str,
    pub primary_probability: f64,
    pub ensemble_probability: f64,
    pub target_risk_percent: f64,
    pub gauges: Vec<GaugeView>,
    pub risk_factors: Vec<RiskFactorScore>,
    pub recommendations: Vec<RecommendationCategoryView>,
    pub care_plan: CarePlanView,
}

/// Error raised by the assessment pipeline.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error("assessment unavailable: {0}")]
    Inference(#[from] ModelInferenceError),
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

impl AssessmentError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AssessmentError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AssessmentError::Inference(_) => StatusCode::BAD_GATEWAY,
            AssessmentError::Encoding(_) | AssessmentError::Classifier(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
