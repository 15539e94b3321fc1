use super::domain::RiskTier;
use crate::config::RiskConfig;
use serde::{Deserialize, Serialize};

/// Step function mapping the ensemble probability to a tier.
///
/// Canonical boundaries are 0.30 and 0.60 (`RiskConfig::default`). The
/// classifier is total over [0, 1] and monotonic; anything outside that
/// interval is a caller bug and is rejected rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskClassifier {
    moderate_threshold: f64,
    high_threshold: f64,
}

impl Default for RiskClassifier {
    fn default() -> Self {
        Self::from_config(&RiskConfig::default())
    }
}

impl RiskClassifier {
    pub fn from_config(config: &RiskConfig) -> Self {
        Self {
            moderate_threshold: config.moderate_threshold,
            high_threshold: config.high_threshold,
        }
    }

    pub fn classify(&self, probability: f64) -> Result<RiskTier, ClassifierError> {
        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(ClassifierError::ProbabilityOutOfRange { probability });
        }

        let tier = if probability < self.moderate_threshold {
            RiskTier::Low
        } else if probability < self.high_threshold {
            RiskTier::Moderate
        } else {
            RiskTier::High
        };
        Ok(tier)
    }

    pub fn moderate_threshold(&self) -> f64 {
        self.moderate_threshold
    }

    pub fn high_threshold(&self) -> f64 {
        self.high_threshold
    }
}

/// Raised when a caller feeds the classifier a value outside [0, 1].
/// Predictor contracts guarantee the range, so this marks a defect.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    #[error("probability {probability} outside [0, 1]")]
    ProbabilityOutOfRange { probability: f64 },
}
