//! Static recommendation catalog keyed by risk tier.
//!
//! Per category the list grows in count and strictness as the tier
//! escalates; the High tier is always the most conservative. Content is
//! reviewed clinical guidance, treated as configuration rather than logic.

use crate::assessment::domain::{RecommendationCategory, RiskTier};

pub(crate) fn base_entries(
    tier: RiskTier,
    category: RecommendationCategory,
) -> &'static [&'static str] {
    use RecommendationCategory as Cat;
    match (tier, category) {
        (RiskTier::Low, Cat::Nutrition) => &[
            "Maintain Mediterranean diet with olive oil, nuts, and fish",
            "Include 5-7 servings of fruits and vegetables daily",
            "Add omega-3 rich foods like salmon, walnuts, and flaxseeds",
            "Keep sodium intake under 2300mg per day",
            "Include antioxidant-rich berries and dark leafy greens",
        ],
        (RiskTier::Low, Cat::Exercise) => &[
            "Maintain 150 minutes of moderate exercise weekly",
            "Include strength training 2-3 times per week",
            "Take 8,000-10,000 steps daily",
            "Practice yoga or stretching 3 times weekly",
            "Try swimming or cycling for cardiovascular health",
        ],
        (RiskTier::Low, Cat::Lifestyle) => &[
            "Maintain 7-9 hours of quality sleep",
            "Continue avoiding smoking and secondhand smoke",
            "Limit alcohol to 1 drink/day (women) or 2 drinks/day (men)",
            "Stay hydrated with 8-10 glasses of water daily",
            "Practice stress management techniques",
        ],
        (RiskTier::Low, Cat::Medical) => &[
            "Annual health checkups with lipid panel",
            "Monitor blood pressure monthly",
            "Track BMI and waist circumference",
            "Stay up-to-date with vaccinations",
            "Regular dental checkups (poor oral health linked to heart disease)",
        ],
        (RiskTier::Low, Cat::MentalHealth) => &[
            "Practice mindfulness meditation 10-15 minutes daily",
            "Maintain strong social connections",
            "Engage in mentally stimulating activities",
            "Set and achieve personal goals",
            "Practice gratitude journaling",
        ],
        (RiskTier::Moderate, Cat::Nutrition) => &[
            "Adopt strict Mediterranean or DASH diet",
            "Increase fruits and vegetables to 7-9 servings daily",
            "Include fatty fish 3-4 times per week",
            "Add plant-based proteins like beans and lentils",
            "Reduce sodium to under 1500mg daily",
            "Eliminate processed and trans fats completely",
            "Choose whole grains over refined carbohydrates",
        ],
        (RiskTier::Moderate, Cat::Exercise) => &[
            "Increase to 200-300 minutes of moderate exercise weekly",
            "Strength training 3-4 times per week",
            "Aim for 10,000+ steps daily",
            "Include 2-3 cardio sessions weekly",
            "Daily yoga or stretching routine",
            "Break up sitting time every 30 minutes",
        ],
        (RiskTier::Moderate, Cat::Lifestyle) => &[
            "Prioritize 7-9 hours of quality sleep",
            "Smoking cessation programs if applicable",
            "Limit alcohol to 3-4 drinks per week maximum",
            "Increase water intake to 10-12 glasses daily",
            "Daily stress management practices",
            "Limit screen time and blue light exposure",
        ],
        (RiskTier::Moderate, Cat::Medical) => &[
            "Bi-annual comprehensive health checkups",
            "Weekly blood pressure monitoring",
            "Monthly weight and BMI tracking",
            "Discuss preventive medications with doctor",
            "Consider cardiac calcium scoring",
            "Monitor for diabetes risk factors",
        ],
        (RiskTier::Moderate, Cat::MentalHealth) => &[
            "Daily meditation or mindfulness practice",
            "Build and maintain social support network",
            "Consider counseling for stress management",
            "Set realistic health goals with professional guidance",
            "Practice positive psychology techniques",
        ],
        (RiskTier::High, Cat::Nutrition) => &[
            "Strict therapeutic diet (consult nutritionist)",
            "9+ servings of fruits and vegetables daily",
            "Fatty fish 4+ times per week",
            "Daily nuts and seeds (unsalted)",
            "Sodium restriction to 1000-1500mg daily",
            "Complete elimination of processed foods",
            "100% whole grain choices",
            "Consider plant-based milk alternatives",
            "Limit caffeine to 1-2 cups daily",
        ],
        (RiskTier::High, Cat::Exercise) => &[
            "Supervised exercise program (300+ minutes weekly)",
            "Resistance training 4-5 times per week",
            "12,000+ steps daily with activity tracking",
            "Low-impact cardio 4-5 times weekly",
            "Daily flexibility and mobility work",
            "Active breaks every 20-30 minutes",
            "Work with exercise physiologist",
        ],
        (RiskTier::High, Cat::Lifestyle) => &[
            "Optimize sleep hygiene (7-9 hours nightly)",
            "Immediate smoking cessation with medical support",
            "Eliminate or severely limit alcohol",
            "12+ glasses of water daily",
            "Multiple daily stress reduction sessions",
            "Digital detox periods",
            "Monitor environmental stressors",
        ],
        (RiskTier::High, Cat::Medical) => &[
            "Quarterly comprehensive health monitoring",
            "Daily blood pressure and heart rate monitoring",
            "Weekly weight and symptom tracking",
            "Medications as prescribed by cardiologist",
            "Regular cardiac imaging and stress tests",
            "Intensive diabetes and cholesterol management",
            "Emergency action plan for cardiac events",
        ],
        (RiskTier::High, Cat::MentalHealth) => &[
            "Professional stress management therapy",
            "Cardiac rehabilitation support groups",
            "Regular counseling sessions",
            "Professional goal setting and monitoring",
            "Positive psychology interventions",
            "Mindfulness-based stress reduction (MBSR)",
            "24/7 mental health support access",
        ],
    }
}
