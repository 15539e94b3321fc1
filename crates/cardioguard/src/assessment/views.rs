//! Serializable projections for API responses and dashboard collaborators.

use super::domain::{PatientProfile, RecommendationCategory, RiskTier};
use super::recommend::{action_checklist, exercise_plan, meal_plan, ExercisePlan, MealPlan};
use serde::Serialize;

/// Gauge band limits match the tier thresholds expressed as percentages.
const GAUGE_BANDS: [GaugeBand; 3] = [
    GaugeBand {
        from: 0.0,
        to: 30.0,
        color: "#2ed573",
    },
    GaugeBand {
        from: 30.0,
        to: 60.0,
        color: "#ffa502",
    },
    GaugeBand {
        from: 60.0,
        to: 100.0,
        color: "#ff3838",
    },
];

/// Red alert line drawn on every gauge.
const GAUGE_ALERT_THRESHOLD: f64 = 70.0;

/// How far below the current score the coaching target sits.
const TARGET_RISK_REDUCTION: f64 = 10.0;

/// Inputs for the chart-renderer collaborator: one dial per model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeView {
    pub label: &'static str,
    /// Risk probability expressed as a percentage.
    pub value: f64,
    /// Dial color, matching the tier the value falls in.
    pub color: &'static str,
    pub bands: [GaugeBand; 3],
    pub alert_threshold: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaugeBand {
    pub from: f64,
    pub to: f64,
    pub color: &'static str,
}

impl GaugeView {
    pub fn new(label: &'static str, probability: f64) -> Self {
        let value = probability * 100.0;
        Self {
            label,
            value,
            color: band_color(value),
            bands: GAUGE_BANDS,
            alert_threshold: GAUGE_ALERT_THRESHOLD,
        }
    }
}

/// Dial color follows the band the value falls in, independent of the
/// configurable classifier thresholds; the gauge scale is fixed.
fn band_color(value: f64) -> &'static str {
    for band in &GAUGE_BANDS {
        if value < band.to {
            return band.color;
        }
    }
    GAUGE_BANDS[2].color
}

/// One axis of the risk-factor radar, normalized to 0-100 with the healthy
/// baseline the chart overlays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskFactorScore {
    pub factor: &'static str,
    pub score: f64,
    pub healthy_baseline: f64,
}

pub fn risk_factor_scores(profile: &PatientProfile) -> Vec<RiskFactorScore> {
    vec![
        RiskFactorScore {
            factor: "Age",
            score: normalize(f64::from(profile.age), 18.0, 62.0),
            healthy_baseline: 30.0,
        },
        RiskFactorScore {
            factor: "Blood Pressure",
            score: normalize(f64::from(profile.systolic_bp), 90.0, 110.0),
            healthy_baseline: 20.0,
        },
        RiskFactorScore {
            factor: "Cholesterol",
            score: normalize(f64::from(profile.total_cholesterol), 100.0, 300.0),
            healthy_baseline: 30.0,
        },
        RiskFactorScore {
            factor: "Smoking",
            score: if profile.is_smoking { 100.0 } else { 0.0 },
            healthy_baseline: 0.0,
        },
        RiskFactorScore {
            factor: "Diabetes",
            score: if profile.has_diabetes { 100.0 } else { 0.0 },
            healthy_baseline: 0.0,
        },
        RiskFactorScore {
            factor: "BMI",
            score: normalize(profile.body_mass_index, 18.5, 21.5),
            healthy_baseline: 40.0,
        },
    ]
}

fn normalize(value: f64, floor: f64, span: f64) -> f64 {
    ((value - floor) / span * 100.0).clamp(0.0, 100.0)
}

/// Coaching target: ten points below the current score, floored at zero.
pub fn target_risk_percent(risk_percent: f64) -> f64 {
    (risk_percent - TARGET_RISK_REDUCTION).max(0.0)
}

/// Tier-keyed care plan bundle for the interactive surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarePlanView {
    pub tier: RiskTier,
    pub meals: MealPlan,
    pub exercise: ExercisePlan,
    pub checklist: &'static [&'static str],
}

impl CarePlanView {
    pub fn for_tier(tier: RiskTier) -> Self {
        Self {
            tier,
            meals: meal_plan(tier),
            exercise: exercise_plan(tier),
            checklist: action_checklist(tier),
        }
    }
}

/// One category of recommendations with its display label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationCategoryView {
    pub category: RecommendationCategory,
    pub category_label: &'static str,
    pub items: Vec<String>,
}

/// Age-banded healthy reference row shown next to the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceRow {
    pub age_band: &'static str,
    pub systolic_bp: &'static str,
    pub diastolic_bp: &'static str,
    pub total_cholesterol: &'static str,
    pub bmi: &'static str,
    pub glucose: &'static str,
}

pub fn reference_values() -> &'static [ReferenceRow] {
    &[
        ReferenceRow {
            age_band: "18-29",
            systolic_bp: "100-120",
            diastolic_bp: "60-80",
            total_cholesterol: "125-200",
            bmi: "18.5-24.9",
            glucose: "70-99",
        },
        ReferenceRow {
            age_band: "30-39",
            systolic_bp: "105-125",
            diastolic_bp: "65-85",
            total_cholesterol: "130-210",
            bmi: "18.5-24.9",
            glucose: "70-99",
        },
        ReferenceRow {
            age_band: "40-49",
            systolic_bp: "110-130",
            diastolic_bp: "70-85",
            total_cholesterol: "140-220",
            bmi: "18.5-25.0",
            glucose: "70-99",
        },
        ReferenceRow {
            age_band: "50-59",
            systolic_bp: "115-135",
            diastolic_bp: "70-90",
            total_cholesterol: "150-230",
            bmi: "18.5-25.0",
            glucose: "70-99",
        },
        ReferenceRow {
            age_band: "60+",
            systolic_bp: "120-140",
            diastolic_bp: "70-90",
            total_cholesterol: "160-240",
            bmi: "19-26",
            glucose: "70-105",
        },
    ]
}
