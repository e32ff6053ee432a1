use chrono::NaiveTime;

use crate::models::{MealEntry, MealSummary, NutritionEstimate};

/// Turn a detection result into a meal log row stamped with `logged_at`.
pub fn log_detected_meal(estimate: &NutritionEstimate, logged_at: NaiveTime) -> MealEntry {
    let mut entry = MealEntry::from(estimate);
    entry.time = Some(logged_at.format("%H:%M").to_string());

    log::info!("📝 Logged AI meal '{}' ({} kcal)", entry.name, entry.calories);
    entry
}

/// Daily totals over the meal log.
pub fn summarize_meals(meals: &[MealEntry]) -> MealSummary {
    MealSummary {
        total_meals: meals.len(),
        total_calories: meals.iter().map(|m| m.calories).fold(0, u32::saturating_add),
        total_protein: meals.iter().map(|m| m.protein).fold(0, u32::saturating_add),
    }
}
