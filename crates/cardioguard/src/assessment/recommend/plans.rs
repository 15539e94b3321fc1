//! Tier-keyed care plan catalogs: meals, exercise, and the action checklist.

use crate::assessment::domain::RiskTier;
use serde::Serialize;

/// Daily meal suggestions for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MealPlan {
    pub breakfast: &'static [&'static str],
    pub lunch: &'static [&'static str],
    pub dinner: &'static [&'static str],
    pub snacks: &'static [&'static str],
}

/// Weekly exercise program for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExercisePlan {
    pub cardio: &'static [&'static str],
    pub strength: &'static [&'static str],
    pub flexibility: &'static [&'static str],
}

pub fn meal_plan(tier: RiskTier) -> MealPlan {
    match tier {
        RiskTier::Low => MealPlan {
            breakfast: &[
                "Oatmeal with berries and walnuts",
                "Veggie omelet with whole grain toast",
                "Green smoothie with spinach and banana",
                "Whole grain pancakes with fresh fruit",
            ],
            lunch: &[
                "Mediterranean quinoa salad",
                "Grilled salmon with roasted vegetables",
                "Avocado and hummus wrap",
                "Lentil soup with whole grain bread",
            ],
            dinner: &[
                "Herb-crusted chicken with sweet potato",
                "Baked cod with steamed broccoli",
                "Whole grain pasta with marinara sauce",
                "Chickpea curry with brown rice",
            ],
            snacks: &[
                "Mixed nuts and seeds",
                "Apple with almond butter",
                "Carrot sticks with hummus",
                "Greek yogurt with berries",
            ],
        },
        RiskTier::Moderate => MealPlan {
            breakfast: &[
                "Steel-cut oats with flaxseeds",
                "Egg whites with spinach",
                "Protein smoothie with kale",
                "Ezekiel bread with avocado",
            ],
            lunch: &[
                "Kale Caesar salad with grilled chicken",
                "Wild salmon with quinoa",
                "Turkey and veggie lettuce wraps",
                "Vegetable bean soup",
            ],
            dinner: &[
                "Grilled chicken breast with asparagus",
                "Baked halibut with cauliflower rice",
                "Lentil and vegetable stew",
                "Zucchini noodles with turkey meatballs",
            ],
            snacks: &[
                "Almonds (10-15 pieces)",
                "Cucumber with tzatziki",
                "Berries with low-fat Greek yogurt",
                "Baby carrots with hummus",
            ],
        },
        RiskTier::High => MealPlan {
            breakfast: &[
                "Oat bran with fresh berries",
                "Egg white scramble with vegetables",
                "Green vegetable juice",
                "Whole grain toast with natural peanut butter",
            ],
            lunch: &[
                "Spinach salad with beans",
                "Steamed fish with brown rice",
                "Veggie-packed lettuce wraps",
                "Low-sodium vegetable soup",
            ],
            dinner: &[
                "Baked skinless chicken with herbs",
                "Grilled fish with steamed vegetables",
                "Bean and vegetable chili",
                "Whole grain pasta with vegetables",
            ],
            snacks: &[
                "Unsalted nuts (small portion)",
                "Fresh fruit",
                "Raw vegetables",
                "Low-fat yogurt",
            ],
        },
    }
}

pub fn exercise_plan(tier: RiskTier) -> ExercisePlan {
    match tier {
        RiskTier::Low => ExercisePlan {
            cardio: &[
                "Brisk walking 30 minutes, 5 days/week",
                "Jogging 20 minutes, 3 days/week",
                "Cycling 45 minutes, 2 days/week",
                "Swimming 30 minutes, 2 days/week",
            ],
            strength: &[
                "Full body workout 2-3 times/week",
                "Free weights 30 minutes sessions",
                "Bodyweight exercises 3 times/week",
                "Resistance band training",
            ],
            flexibility: &[
                "Yoga 2-3 times/week",
                "Dynamic stretching daily",
                "Tai Chi once/week",
                "Foam rolling after workouts",
            ],
        },
        RiskTier::Moderate => ExercisePlan {
            cardio: &[
                "Power walking 45 minutes, 5 days/week",
                "Light jogging 25 minutes, 4 days/week",
                "Stationary cycling 40 minutes, 3 days/week",
                "Water aerobics 45 minutes, 2 days/week",
            ],
            strength: &[
                "Supervised strength training 3 times/week",
                "Light weights with high reps",
                "Functional movement exercises",
                "Pilates 2 times/week",
            ],
            flexibility: &[
                "Gentle yoga daily",
                "Stretching routine 2 times/day",
                "Meditation with movement",
                "Daily mobility work",
            ],
        },
        RiskTier::High => ExercisePlan {
            cardio: &[
                "Supervised walking program daily",
                "Cardiac rehabilitation exercises",
                "Recumbent bike 20-30 minutes",
                "Pool walking/light swimming",
            ],
            strength: &[
                "Medical supervision required",
                "Light resistance training",
                "Chair exercises if needed",
                "Core strengthening",
            ],
            flexibility: &[
                "Gentle stretching daily",
                "Range of motion exercises",
                "Breathing exercises",
                "Stress-reduction movement",
            ],
        },
    }
}

/// Trackable heart-health actions for the tier, highest value first.
pub fn action_checklist(tier: RiskTier) -> &'static [&'static str] {
    match tier {
        RiskTier::Low => &[
            "Maintain a Mediterranean-style diet",
            "Exercise at least 150 minutes per week",
            "Monitor blood pressure monthly",
            "Get annual health checkups",
            "Practice stress management (e.g., meditation, yoga)",
            "Avoid smoking and limit alcohol",
            "Track your daily steps (aim for 8,000+)",
            "Get 7-9 hours of sleep nightly",
        ],
        RiskTier::Moderate => &[
            "Adopt a DASH or Mediterranean diet strictly",
            "Increase exercise to 200+ minutes per week",
            "Monitor blood pressure weekly",
            "Schedule bi-annual health checkups",
            "Reduce sodium and processed foods",
            "Join a support group or health community",
            "Track weight and BMI monthly",
            "Limit alcohol to 3-4 drinks/week",
            "Practice daily stress reduction",
        ],
        RiskTier::High => &[
            "Consult a cardiologist for a personalized care plan",
            "Follow a therapeutic diet (consult a nutritionist)",
            "Participate in supervised exercise or cardiac rehab",
            "Monitor blood pressure and glucose daily",
            "Take prescribed medications regularly",
            "Schedule quarterly health checkups",
            "Eliminate smoking and alcohol completely",
            "Track symptoms and weight weekly",
            "Engage in professional stress management or counseling",
        ],
    }
}
