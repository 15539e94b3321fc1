mod augment;
mod catalog;
mod plans;

pub use plans::{action_checklist, exercise_plan, meal_plan, ExercisePlan, MealPlan};

use super::domain::{PatientProfile, RecommendationCategory, RiskTier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[cfg(test)]
pub(crate) use augment::URGENT_CESSATION_NOTE;

/// Ordered recommendations per category. First entries carry the highest
/// priority. Built fresh per assessment and never partially updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    entries: BTreeMap<RecommendationCategory, Vec<String>>,
}

impl RecommendationSet {
    fn from_catalog(tier: RiskTier) -> Self {
        let mut entries = BTreeMap::new();
        for category in RecommendationCategory::ordered() {
            let items = catalog::base_entries(tier, category)
                .iter()
                .map(|item| (*item).to_string())
                .collect();
            entries.insert(category, items);
        }
        Self { entries }
    }

    pub fn category(&self, category: RecommendationCategory) -> &[String] {
        self.entries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// First `limit` entries of a category, for report digests.
    pub fn top(&self, category: RecommendationCategory, limit: usize) -> &[String] {
        let items = self.category(category);
        &items[..items.len().min(limit)]
    }

    pub fn iter(&self) -> impl Iterator<Item = (RecommendationCategory, &[String])> + '_ {
        RecommendationCategory::ordered()
            .into_iter()
            .map(|category| (category, self.category(category)))
    }

    fn append(&mut self, category: RecommendationCategory, note: &str) {
        self.entries
            .entry(category)
            .or_default()
            .push(note.to_string());
    }

    fn prepend(&mut self, category: RecommendationCategory, note: &str) {
        self.entries
            .entry(category)
            .or_default()
            .insert(0, note.to_string());
    }
}

/// Stateless engine deriving the personalized plan from tier and profile.
///
/// Deterministic: identical (tier, profile) inputs yield an identical set.
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn recommend(tier: RiskTier, profile: &PatientProfile) -> RecommendationSet {
        let mut set = RecommendationSet::from_catalog(tier);
        augment::apply(&mut set, profile);
        set
    }
}
