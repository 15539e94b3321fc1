use serde::{Deserialize, Serialize};
use std::fmt;

/// Biological sex as captured by the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Discrete risk bucket derived from the ensemble probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Moderate, Self::High]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    /// Semantic color identity for the tier. Rendering is a collaborator
    /// concern; the hex value is part of the tier's contract so gauges and
    /// reports agree.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "#2ed573",
            Self::Moderate => "#ffa502",
            Self::High => "#ff3838",
        }
    }

    /// One-line verdict shown alongside the gauge.
    pub const fn headline(self) -> &'static str {
        match self {
            Self::Low => "LOW RISK: Continue healthy lifestyle habits",
            Self::Moderate => "MODERATE RISK: Lifestyle changes and monitoring advised",
            Self::High => "HIGH RISK: Immediate medical consultation recommended",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Closed set of recommendation categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    Nutrition,
    Exercise,
    Lifestyle,
    Medical,
    MentalHealth,
}

impl RecommendationCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Nutrition,
            Self::Exercise,
            Self::Lifestyle,
            Self::Medical,
            Self::MentalHealth,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Nutrition => "Nutrition",
            Self::Exercise => "Exercise",
            Self::Lifestyle => "Lifestyle",
            Self::Medical => "Medical",
            Self::MentalHealth => "Mental Health",
        }
    }
}

/// Raw questionnaire submission, prior to validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub age: u32,
    pub sex: Sex,
    pub is_smoking: bool,
    pub cigarettes_per_day: u32,
    pub on_bp_medication: bool,
    pub has_stroke_history: bool,
    pub has_hypertension: bool,
    pub has_diabetes: bool,
    pub systolic_bp: u32,
    pub diastolic_bp: u32,
    pub total_cholesterol: u32,
    pub fasting_glucose: u32,
    pub body_mass_index: f64,
}

/// Validated, immutable attributes describing one assessment.
///
/// Only `PatientProfile::try_from` can construct this, so every profile the
/// encoder sees has already passed the range checks below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub age: u32,
    pub sex: Sex,
    pub is_smoking: bool,
    pub cigarettes_per_day: u32,
    pub on_bp_medication: bool,
    pub has_stroke_history: bool,
    pub has_hypertension: bool,
    pub has_diabetes: bool,
    pub systolic_bp: u32,
    pub diastolic_bp: u32,
    pub total_cholesterol: u32,
    pub fasting_glucose: u32,
    pub body_mass_index: f64,
}

/// Accepted ranges mirror the intake form widget bounds.
const AGE_RANGE: (u32, u32) = (18, 100);
const SYSTOLIC_RANGE: (u32, u32) = (90, 200);
const DIASTOLIC_RANGE: (u32, u32) = (60, 140);
const CHOLESTEROL_RANGE: (u32, u32) = (100, 400);
const GLUCOSE_RANGE: (u32, u32) = (50, 300);
const BMI_RANGE: (f64, f64) = (10.0, 50.0);
const MAX_CIGARETTES_PER_DAY: u32 = 80;

impl TryFrom<AssessmentRequest> for PatientProfile {
    type Error = ValidationError;

    fn try_from(request: AssessmentRequest) -> Result<Self, Self::Error> {
        check_range("age", request.age, AGE_RANGE)?;
        check_range("systolic_bp", request.systolic_bp, SYSTOLIC_RANGE)?;
        check_range("diastolic_bp", request.diastolic_bp, DIASTOLIC_RANGE)?;
        check_range("total_cholesterol", request.total_cholesterol, CHOLESTEROL_RANGE)?;
        check_range("fasting_glucose", request.fasting_glucose, GLUCOSE_RANGE)?;

        if !request.body_mass_index.is_finite()
            || request.body_mass_index < BMI_RANGE.0
            || request.body_mass_index > BMI_RANGE.1
        {
            return Err(ValidationError::OutOfRange {
                field: "body_mass_index",
                value: format!("{:.1}", request.body_mass_index),
                minimum: format!("{:.1}", BMI_RANGE.0),
                maximum: format!("{:.1}", BMI_RANGE.1),
            });
        }

        if request.cigarettes_per_day > MAX_CIGARETTES_PER_DAY {
            return Err(ValidationError::OutOfRange {
                field: "cigarettes_per_day",
                value: request.cigarettes_per_day.to_string(),
                minimum: "0".to_string(),
                maximum: MAX_CIGARETTES_PER_DAY.to_string(),
            });
        }

        if request.is_smoking && request.cigarettes_per_day == 0 {
            return Err(ValidationError::InconsistentSmokingStatus {
                is_smoking: true,
                cigarettes_per_day: 0,
            });
        }
        if !request.is_smoking && request.cigarettes_per_day > 0 {
            return Err(ValidationError::InconsistentSmokingStatus {
                is_smoking: false,
                cigarettes_per_day: request.cigarettes_per_day,
            });
        }

        Ok(Self {
            age: request.age,
            sex: request.sex,
            is_smoking: request.is_smoking,
            cigarettes_per_day: request.cigarettes_per_day,
            on_bp_medication: request.on_bp_medication,
            has_stroke_history: request.has_stroke_history,
            has_hypertension: request.has_hypertension,
            has_diabetes: request.has_diabetes,
            systolic_bp: request.systolic_bp,
            diastolic_bp: request.diastolic_bp,
            total_cholesterol: request.total_cholesterol,
            fasting_glucose: request.fasting_glucose,
            body_mass_index: request.body_mass_index,
        })
    }
}

fn check_range(
    field: &'static str,
    value: u32,
    (minimum, maximum): (u32, u32),
) -> Result<(), ValidationError> {
    if value < minimum || value > maximum {
        return Err(ValidationError::OutOfRange {
            field,
            value: value.to_string(),
            minimum: minimum.to_string(),
            maximum: maximum.to_string(),
        });
    }
    Ok(())
}

/// Raised for malformed or out-of-range questionnaire input. User-correctable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} {value} outside accepted range {minimum}..={maximum}")]
    OutOfRange {
        field: &'static str,
        value: String,
        minimum: String,
        maximum: String,
    },
    #[error(
        "smoking status (is_smoking={is_smoking}) conflicts with {cigarettes_per_day} cigarettes/day"
    )]
    InconsistentSmokingStatus {
        is_smoking: bool,
        cigarettes_per_day: u32,
    },
}
