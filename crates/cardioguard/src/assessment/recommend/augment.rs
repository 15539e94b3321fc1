//! Profile-driven adjustments layered on top of the base catalog.
//!
//! Augmentations are additive and order-sensitive: appends keep catalog
//! priority intact, while the smoking-cessation note is prepended so it
//! always leads the lifestyle list. They apply regardless of tier.

use super::RecommendationSet;
use crate::assessment::domain::{PatientProfile, RecommendationCategory, Sex};

pub(crate) const URGENT_CESSATION_NOTE: &str =
    "URGENT: Smoking cessation is your #1 priority";

const FALL_PREVENTION_NOTE: &str = "Include balance training to prevent falls";
const COGNITIVE_SCREENING_NOTE: &str = "Annual cognitive health screening";
const CALCIUM_VITAMIN_D_NOTE: &str = "Ensure adequate calcium and vitamin D";
const HORMONE_THERAPY_NOTE: &str = "Discuss hormone replacement therapy risks/benefits";
const PHYTOESTROGEN_NOTE: &str = "Include phytoestrogen-rich foods";
const PULMONARY_FUNCTION_NOTE: &str = "Pulmonary function testing";
const BLOOD_SUGAR_NOTE: &str = "Strict blood sugar management";
const HBA1C_NOTE: &str = "HbA1c monitoring every 3 months";
const ULTRA_LOW_SODIUM_NOTE: &str = "Ultra-low sodium diet (<1500mg)";
const HOME_BP_MONITORING_NOTE: &str = "Home blood pressure monitoring";

const SENIOR_AGE_CUTOFF: u32 = 65;

pub(crate) fn apply(set: &mut RecommendationSet, profile: &PatientProfile) {
    use RecommendationCategory as Cat;

    if profile.age > SENIOR_AGE_CUTOFF {
        set.append(Cat::Exercise, FALL_PREVENTION_NOTE);
        set.append(Cat::Medical, COGNITIVE_SCREENING_NOTE);
        set.append(Cat::Nutrition, CALCIUM_VITAMIN_D_NOTE);
    }

    if profile.sex == Sex::Female {
        set.append(Cat::Medical, HORMONE_THERAPY_NOTE);
        set.append(Cat::Nutrition, PHYTOESTROGEN_NOTE);
    }

    if profile.is_smoking {
        set.prepend(Cat::Lifestyle, URGENT_CESSATION_NOTE);
        set.append(Cat::Medical, PULMONARY_FUNCTION_NOTE);
    }

    if profile.has_diabetes {
        set.append(Cat::Nutrition, BLOOD_SUGAR_NOTE);
        set.append(Cat::Medical, HBA1C_NOTE);
    }

    if profile.has_hypertension {
        set.append(Cat::Nutrition, ULTRA_LOW_SODIUM_NOTE);
        set.append(Cat::Medical, HOME_BP_MONITORING_NOTE);
    }
}
