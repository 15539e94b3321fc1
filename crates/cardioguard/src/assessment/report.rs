use super::domain::{PatientProfile, RecommendationCategory, RiskTier};
use super::predictor::ModelPrediction;
use super::recommend::RecommendationSet;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Categories included in the printed digest, in document order. The
/// mental-health section stays on the interactive surface only.
const DIGEST_CATEGORIES: [RecommendationCategory; 4] = [
    RecommendationCategory::Nutrition,
    RecommendationCategory::Exercise,
    RecommendationCategory::Lifestyle,
    RecommendationCategory::Medical,
];

const DIGEST_ITEMS_PER_CATEGORY: usize = 3;

const REPORT_TITLE: &str = "CardioGuard - Comprehensive CHD Risk Report";

/// Renderer-agnostic report content. The document exporter collaborator
/// owns the actual byte rendering (PDF, HTML, plain text).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDocument {
    pub title: String,
    pub generated_at: DateTime<Local>,
    pub executive_summary: String,
    pub model_probabilities: ModelProbabilities,
    pub tier_label: &'static str,
    pub patient_fields: Vec<(String, String)>,
    pub top_recommendations: Vec<CategoryDigest>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelProbabilities {
    pub primary: f64,
    pub secondary: f64,
}

/// Leading recommendations for one category of the printed report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDigest {
    pub category: RecommendationCategory,
    pub category_label: &'static str,
    pub items: Vec<String>,
}

/// Pure transformation from assessment output to report content.
pub struct ReportAssembler;

impl ReportAssembler {
    pub fn assemble(
        profile: &PatientProfile,
        primary: ModelPrediction,
        secondary: ModelPrediction,
        tier: RiskTier,
        recommendations: &RecommendationSet,
    ) -> ReportDocument {
        let executive_summary = sanitize(&format!(
            "Based on advanced machine learning analysis, your 10-year CHD risk is {:.1}% \
             ({} Risk). This report provides personalized recommendations for optimal \
             cardiovascular health.",
            secondary.probability * 100.0,
            tier.label(),
        ));

        let top_recommendations = DIGEST_CATEGORIES
            .into_iter()
            .map(|category| CategoryDigest {
                category,
                category_label: category.label(),
                items: recommendations
                    .top(category, DIGEST_ITEMS_PER_CATEGORY)
                    .iter()
                    .map(|item| sanitize(item))
                    .collect(),
            })
            .collect();

        ReportDocument {
            title: REPORT_TITLE.to_string(),
            generated_at: Local::now(),
            executive_summary,
            model_probabilities: ModelProbabilities {
                primary: primary.probability,
                secondary: secondary.probability,
            },
            tier_label: tier.label(),
            patient_fields: patient_fields(profile),
            top_recommendations,
        }
    }
}

fn patient_fields(profile: &PatientProfile) -> Vec<(String, String)> {
    vec![
        ("Age".to_string(), profile.age.to_string()),
        ("Sex".to_string(), profile.sex.label().to_string()),
        ("Smoking".to_string(), yes_no(profile.is_smoking)),
        (
            "Cigarettes/Day".to_string(),
            profile.cigarettes_per_day.to_string(),
        ),
        ("BP Medication".to_string(), yes_no(profile.on_bp_medication)),
        (
            "Stroke History".to_string(),
            yes_no(profile.has_stroke_history),
        ),
        ("Hypertension".to_string(), yes_no(profile.has_hypertension)),
        ("Diabetes".to_string(), yes_no(profile.has_diabetes)),
        (
            "Systolic BP".to_string(),
            format!("{} mmHg", profile.systolic_bp),
        ),
        (
            "Diastolic BP".to_string(),
            format!("{} mmHg", profile.diastolic_bp),
        ),
        (
            "Total Cholesterol".to_string(),
            format!("{} mg/dL", profile.total_cholesterol),
        ),
        (
            "Fasting Glucose".to_string(),
            format!("{} mg/dL", profile.fasting_glucose),
        ),
        ("BMI".to_string(), format!("{:.1}", profile.body_mass_index)),
    ]
}

fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

/// Restrict text to the Latin-1 repertoire of the downstream renderer.
/// Unsupported symbols (emoji, pictographs) are dropped rather than
/// substituted; surrounding whitespace is re-collapsed so readability
/// survives the removal.
fn sanitize(text: &str) -> String {
    let filtered: String = text
        .chars()
        .map(|ch| if ch == '\u{2022}' { '-' } else { ch })
        .filter(|ch| (*ch as u32) <= 0xFF)
        .collect();

    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}
