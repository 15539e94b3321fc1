use super::domain::{PatientProfile, Sex};
use serde::{Deserialize, Serialize};

/// Column names of the canonical 15-feature schema, in predictor order.
///
/// Both predictors were trained against this exact layout; reordering or
/// dropping a column silently corrupts inference, so the names and
/// `EncodedFeatureVector::ordered_values` must stay in lockstep.
pub const FEATURE_SCHEMA: [&str; 15] = [
    "age",
    "sex",
    "is_smoking",
    "bp_meds",
    "prevalent_stroke",
    "prevalent_hyp",
    "diabetes",
    "tot_chol",
    "sys_bp",
    "dia_bp",
    "glucose",
    "smoking_level",
    "bp_ratio",
    "chol_age_ratio",
    "bmi_category",
];

/// Fixed-schema numeric record consumed by the predictors.
///
/// Immutable once built; one vector per assessment request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedFeatureVector {
    pub age: u32,
    pub sex: u8,
    pub is_smoking: u8,
    pub bp_meds: u8,
    pub prevalent_stroke: u8,
    pub prevalent_hyp: u8,
    pub diabetes: u8,
    pub tot_chol: u32,
    pub sys_bp: u32,
    pub dia_bp: u32,
    pub glucose: u32,
    pub smoking_level: u8,
    pub bp_ratio: f64,
    pub chol_age_ratio: f64,
    pub bmi_category: u8,
}

impl EncodedFeatureVector {
    /// Values in `FEATURE_SCHEMA` order, widened to f64 for inference.
    pub fn ordered_values(&self) -> [f64; 15] {
        [
            f64::from(self.age),
            f64::from(self.sex),
            f64::from(self.is_smoking),
            f64::from(self.bp_meds),
            f64::from(self.prevalent_stroke),
            f64::from(self.prevalent_hyp),
            f64::from(self.diabetes),
            f64::from(self.tot_chol),
            f64::from(self.sys_bp),
            f64::from(self.dia_bp),
            f64::from(self.glucose),
            f64::from(self.smoking_level),
            self.bp_ratio,
            self.chol_age_ratio,
            f64::from(self.bmi_category),
        ]
    }
}

/// Pure translation from validated profile to predictor input.
pub struct FeatureEncoder;

impl FeatureEncoder {
    pub fn encode(profile: &PatientProfile) -> Result<EncodedFeatureVector, EncodingError> {
        let bp_ratio = ratio(
            f64::from(profile.systolic_bp),
            f64::from(profile.diastolic_bp),
            "bp_ratio",
        )?;
        let chol_age_ratio = ratio(
            f64::from(profile.total_cholesterol),
            f64::from(profile.age),
            "chol_age_ratio",
        )?;

        Ok(EncodedFeatureVector {
            age: profile.age,
            sex: match profile.sex {
                Sex::Male => 1,
                Sex::Female => 0,
            },
            is_smoking: u8::from(profile.is_smoking),
            bp_meds: u8::from(profile.on_bp_medication),
            prevalent_stroke: u8::from(profile.has_stroke_history),
            prevalent_hyp: u8::from(profile.has_hypertension),
            diabetes: u8::from(profile.has_diabetes),
            tot_chol: profile.total_cholesterol,
            sys_bp: profile.systolic_bp,
            dia_bp: profile.diastolic_bp,
            glucose: profile.fasting_glucose,
            smoking_level: smoking_level(profile.cigarettes_per_day),
            bp_ratio,
            chol_age_ratio,
            bmi_category: bmi_category(profile.body_mass_index),
        })
    }
}

/// Ordinal bucket for daily cigarette count. Monotonic non-decreasing.
pub fn smoking_level(cigarettes_per_day: u32) -> u8 {
    match cigarettes_per_day {
        0 => 0,
        1..=10 => 1,
        11..=20 => 2,
        _ => 3,
    }
}

/// Ordinal BMI bucket: underweight, normal, overweight, obese.
pub fn bmi_category(bmi: f64) -> u8 {
    if bmi < 18.5 {
        0
    } else if bmi < 25.0 {
        1
    } else if bmi < 30.0 {
        2
    } else {
        3
    }
}

/// Quotient rounded to two decimals. Validated profiles keep the
/// denominators non-zero (age >= 18, diastolic >= 60); the guard exists so
/// a validation gap surfaces as an error instead of an Inf/NaN feature.
fn ratio(numerator: f64, denominator: f64, feature: &'static str) -> Result<f64, EncodingError> {
    if denominator == 0.0 {
        return Err(EncodingError::DegenerateRatio { feature });
    }
    Ok((numerator / denominator * 100.0).round() / 100.0)
}

/// Raised when a derived ratio would divide by zero. Indicates the input
/// bypassed validation; never user-correctable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    #[error("degenerate {feature}: division by zero")]
    DegenerateRatio { feature: &'static str },
}
