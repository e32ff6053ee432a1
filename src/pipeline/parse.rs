use serde::de::DeserializeOwned;

use crate::errors::{PipelineError, Result};
use crate::models::{BmiRecommendation, ExerciseRecommendation, NutritionEstimate};

/// Semantic checks a decoded model answer must pass before it is trusted.
pub trait Validate {
    fn validate(&self) -> std::result::Result<(), String>;
}

fn require_items(field: &str, items: &[String]) -> std::result::Result<(), String> {
    if items.is_empty() {
        return Err(format!("{} is empty", field));
    }
    if items.iter().any(|item| item.trim().is_empty()) {
        return Err(format!("{} contains a blank entry", field));
    }
    Ok(())
}

fn require_text(field: &str, text: &str) -> std::result::Result<(), String> {
    if text.trim().is_empty() {
        return Err(format!("{} is blank", field));
    }
    Ok(())
}

impl Validate for NutritionEstimate {
    fn validate(&self) -> std::result::Result<(), String> {
        require_items("foodItems", &self.food_items)
    }
}

impl Validate for BmiRecommendation {
    fn validate(&self) -> std::result::Result<(), String> {
        if !self.ideal_weight_kg.is_finite() || self.ideal_weight_kg <= 0.0 {
            return Err(format!("idealWeight {} is not a positive weight", self.ideal_weight_kg));
        }
        if self.recommended_calories == 0 {
            return Err("recommendedCalories is zero".to_string());
        }

        let diet = &self.diet_plan;
        require_text("dietPlan.breakfast", &diet.breakfast)?;
        require_text("dietPlan.lunch", &diet.lunch)?;
        require_text("dietPlan.dinner", &diet.dinner)?;
        require_text("dietPlan.snacks", &diet.snacks)?;

        require_items("workoutPlan.cardio", &self.workout_plan.cardio)?;
        require_items("workoutPlan.strength", &self.workout_plan.strength)?;
        require_items("geneticFactors", &self.genetic_factors)?;
        require_items("healthTips", &self.health_tips)
    }
}

impl Validate for ExerciseRecommendation {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.recommended_exercises.is_empty() {
            return Err("recommendedExercises is empty".to_string());
        }
        for exercise in &self.recommended_exercises {
            require_text("recommendedExercises.name", &exercise.name)?;
        }
        if self.workout_plan.weekly_schedule.is_empty() {
            return Err("workoutPlan.weeklySchedule is empty".to_string());
        }
        require_items("nutritionTips", &self.nutrition_tips)?;
        require_items("recoveryTips", &self.recovery_tips)
    }
}

/// Decode a normalized model answer into `T`.
///
/// The typed shape is the schema: a missing field, a wrong type or a
/// negative count is a `DecodeFailure`; a well-typed answer that breaks
/// an invariant is an `InvalidResult`.
pub fn parse_structured<T>(json: &str) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| PipelineError::DecodeFailure(e.to_string()))?;

    if !value.is_object() {
        return Err(PipelineError::DecodeFailure("expected a JSON object".to_string()));
    }

    let parsed: T =
        serde_json::from_value(value).map_err(|e| PipelineError::DecodeFailure(e.to_string()))?;
    parsed.validate().map_err(PipelineError::InvalidResult)?;

    Ok(parsed)
}
