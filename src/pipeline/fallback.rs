//! Canned answers used whenever the model call or its decoding fails.

use crate::models::{
    BmiRecommendation, Confidence, DietPlan, ExerciseRecommendation, FallbackCategory, MealType,
    NutritionEstimate, RecommendedExercise, WeeklyPlan, WorkoutDay, WorkoutPlan,
};

pub const CHAT_APOLOGY: &str = "I apologize, but I'm having trouble processing your request. \
Please try again or ask a different question about exercise, nutrition, or fitness.";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn meal_estimate() -> NutritionEstimate {
    NutritionEstimate {
        food_items: strings(&["Chicken", "Rice", "Vegetables"]),
        calories: 450,
        protein: 35,
        carbs: 40,
        fat: 15,
        confidence: Confidence::High,
        meal_type: MealType::Lunch,
    }
}

pub fn bmi_recommendation(category: FallbackCategory) -> BmiRecommendation {
    match category {
        FallbackCategory::Underweight => BmiRecommendation {
            ideal_weight_kg: 65.0,
            recommended_calories: 2500,
            diet_plan: DietPlan {
                breakfast: "Oatmeal with nuts, honey, and whole milk + 2 boiled eggs".to_string(),
                lunch: "Chicken rice bowl with avocado, cheese, and mixed vegetables".to_string(),
                dinner: "Salmon with sweet potato mash and steamed broccoli with olive oil".to_string(),
                snacks: "Protein shake with banana, Greek yogurt with honey, handful of almonds".to_string(),
            },
            workout_plan: WorkoutPlan {
                cardio: strings(&["Light jogging 20 min", "Swimming 30 min", "Cycling 25 min"]),
                strength: strings(&["Squats 3x12", "Bench press 3x10", "Deadlifts 3x8", "Pull-ups 3x max"]),
                frequency: "3-4 times per week".to_string(),
                duration: "45-60 minutes per session".to_string(),
            },
            genetic_factors: strings(&[
                "High basal metabolic rate",
                "Fast-digesting system",
                "Naturally lean body type",
            ]),
            timeframe: "8-12 weeks to gain 2-4 kg".to_string(),
            health_tips: strings(&[
                "Eat every 3-4 hours",
                "Include healthy fats like avocado and nuts",
                "Track calorie intake to ensure surplus",
                "Focus on compound exercises",
            ]),
        },
        FallbackCategory::Normal => BmiRecommendation {
            ideal_weight_kg: 70.0,
            recommended_calories: 2200,
            diet_plan: DietPlan {
                breakfast: "Greek yogurt with berries, granola and honey + protein smoothie".to_string(),
                lunch: "Grilled chicken salad with quinoa, mixed greens, and olive oil dressing".to_string(),
                dinner: "Baked fish with roasted vegetables and 1 cup brown rice".to_string(),
                snacks: "Apple with almond butter, protein bar, carrot sticks with hummus".to_string(),
            },
            workout_plan: WorkoutPlan {
                cardio: strings(&["Running 30 min", "Cycling 40 min", "HIIT workouts 20 min", "Jump rope 15 min"]),
                strength: strings(&["Full body workouts", "Push-pull split", "Core exercises", "Functional training"]),
                frequency: "4-5 times per week".to_string(),
                duration: "50-60 minutes per session".to_string(),
            },
            genetic_factors: strings(&[
                "Balanced metabolism",
                "Average muscle gain potential",
                "Moderate fat storage tendency",
            ]),
            timeframe: "Maintain current weight within 2kg range".to_string(),
            health_tips: strings(&[
                "Stay consistent with workouts",
                "Balance cardio and strength training",
                "Stay hydrated (3-4L daily)",
                "Get 7-8 hours sleep",
            ]),
        },
        FallbackCategory::Overweight => BmiRecommendation {
            ideal_weight_kg: 68.0,
            recommended_calories: 1800,
            diet_plan: DietPlan {
                breakfast: "Protein shake with spinach and berries + 1 boiled egg".to_string(),
                lunch: "Turkey wrap with whole wheat tortilla, lettuce, tomato and avocado".to_string(),
                dinner: "Lean beef stir-fry with mixed vegetables and 1/2 cup brown rice".to_string(),
                snacks: "Carrot sticks, Greek yogurt, cucumber slices, rice cakes".to_string(),
            },
            workout_plan: WorkoutPlan {
                cardio: strings(&["Brisk walking 45 min", "Swimming 40 min", "Elliptical 35 min", "Dancing 30 min"]),
                strength: strings(&[
                    "Resistance band exercises",
                    "Bodyweight circuit training",
                    "Light weights high reps",
                    "Core stabilization",
                ]),
                frequency: "5-6 times per week".to_string(),
                duration: "50-60 minutes per session".to_string(),
            },
            genetic_factors: strings(&[
                "Slow metabolism",
                "Carbohydrate sensitive",
                "Tendency for abdominal fat storage",
            ]),
            timeframe: "16 weeks to lose 8-10 kg".to_string(),
            health_tips: strings(&[
                "Reduce added sugar intake",
                "Increase protein to 30% of calories",
                "Track portion sizes",
                "Include fiber in every meal",
            ]),
        },
    }
}

pub fn exercise_recommendation() -> ExerciseRecommendation {
    ExerciseRecommendation {
        recommended_exercises: vec![
            RecommendedExercise {
                name: "Brisk Walking".to_string(),
                exercise_type: "Cardio".to_string(),
                duration: "30 min".to_string(),
                calories: 150,
                intensity: "Low".to_string(),
                description: "Steady walk at a pace that raises your breathing".to_string(),
                benefits: strings(&["Improves heart health", "Easy on the joints"]),
            },
            RecommendedExercise {
                name: "Bodyweight Circuit".to_string(),
                exercise_type: "Strength".to_string(),
                duration: "25 min".to_string(),
                calories: 200,
                intensity: "Medium".to_string(),
                description: "Squats, push-ups, lunges and planks in rounds".to_string(),
                benefits: strings(&["Builds muscle", "Raises resting metabolism"]),
            },
            RecommendedExercise {
                name: "Yoga Flow".to_string(),
                exercise_type: "Flexibility".to_string(),
                duration: "20 min".to_string(),
                calories: 80,
                intensity: "Low".to_string(),
                description: "Gentle sequence focused on hips, hamstrings and back".to_string(),
                benefits: strings(&["Improves mobility", "Speeds recovery"]),
            },
        ],
        workout_plan: WeeklyPlan {
            weekly_schedule: vec![
                WorkoutDay {
                    day: "Monday".to_string(),
                    exercises: strings(&["Brisk Walking", "Yoga Flow"]),
                    focus: "Cardio and mobility".to_string(),
                },
                WorkoutDay {
                    day: "Wednesday".to_string(),
                    exercises: strings(&["Bodyweight Circuit"]),
                    focus: "Full body strength".to_string(),
                },
                WorkoutDay {
                    day: "Friday".to_string(),
                    exercises: strings(&["Brisk Walking", "Bodyweight Circuit"]),
                    focus: "Endurance".to_string(),
                },
            ],
            rest_days: strings(&["Saturday", "Sunday"]),
            progression: "Add 5 minutes or one extra round each week".to_string(),
        },
        nutrition_tips: strings(&[
            "Eat protein within two hours after training",
            "Stay hydrated before, during and after workouts",
        ]),
        recovery_tips: strings(&["Sleep 7-8 hours", "Stretch after every session"]),
        progress_timeline: "Noticeable fitness gains in 4-6 weeks".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Validate;

    const CATEGORIES: [FallbackCategory; 3] = [
        FallbackCategory::Underweight,
        FallbackCategory::Normal,
        FallbackCategory::Overweight,
    ];

    #[test]
    fn test_meal_estimate_is_fixed() {
        let estimate = meal_estimate();

        assert_eq!(estimate.food_items, vec!["Chicken", "Rice", "Vegetables"]);
        assert_eq!((estimate.calories, estimate.protein, estimate.carbs, estimate.fat), (450, 35, 40, 15));
        assert_eq!(estimate.confidence, Confidence::High);
        assert_eq!(estimate.meal_type, MealType::Lunch);
        assert_eq!(estimate, meal_estimate());
    }

    #[test]
    fn test_every_bmi_category_has_complete_recommendation() {
        for category in CATEGORIES {
            let rec = bmi_recommendation(category);

            assert!(rec.recommended_calories > 0, "{:?}", category);
            assert!(rec.ideal_weight_kg > 0.0);
            assert!(!rec.workout_plan.cardio.is_empty());
            assert!(!rec.workout_plan.strength.is_empty());
            assert!(!rec.genetic_factors.is_empty());
            assert!(!rec.health_tips.is_empty());
            assert!(rec.validate().is_ok());
        }
    }

    #[test]
    fn test_categories_get_distinct_plans() {
        assert_eq!(bmi_recommendation(FallbackCategory::Underweight).recommended_calories, 2500);
        assert_eq!(bmi_recommendation(FallbackCategory::Normal).recommended_calories, 2200);
        assert_eq!(bmi_recommendation(FallbackCategory::Overweight).recommended_calories, 1800);
    }

    #[test]
    fn test_exercise_recommendation_is_valid() {
        assert!(exercise_recommendation().validate().is_ok());
    }
}
