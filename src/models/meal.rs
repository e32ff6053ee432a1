use serde::{Deserialize, Serialize};

use super::{Confidence, MealType, NutritionEstimate};

/// Name given to a detected meal when the model listed no food items.
pub const DETECTED_MEAL_NAME: &str = "AI-Detected Meal";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSource {
    Ai,
    #[default]
    Manual,
}

/// One row of the meal log as the web UI keeps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>, // "12:30"
    pub calories: u32,
    #[serde(default)]
    pub protein: u32,
    #[serde(default)]
    pub carbs: u32,
    #[serde(default)]
    pub fat: u32,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    #[serde(default)]
    pub source: MealSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
}

impl From<&NutritionEstimate> for MealEntry {
    fn from(estimate: &NutritionEstimate) -> Self {
        let name = if estimate.food_items.is_empty() {
            DETECTED_MEAL_NAME.to_string()
        } else {
            estimate.food_items.join(", ")
        };

        Self {
            name,
            time: None,
            calories: estimate.calories,
            protein: estimate.protein,
            carbs: estimate.carbs,
            fat: estimate.fat,
            meal_type: estimate.meal_type,
            source: MealSource::Ai,
            confidence: Some(estimate.confidence),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSummary {
    pub total_meals: usize,
    pub total_calories: u32,
    pub total_protein: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(food_items: &[&str]) -> NutritionEstimate {
        NutritionEstimate {
            food_items: food_items.iter().map(|s| s.to_string()).collect(),
            calories: 520,
            protein: 31,
            carbs: 60,
            fat: 14,
            confidence: Confidence::Medium,
            meal_type: MealType::Dinner,
        }
    }

    #[test]
    fn test_entry_from_estimate() {
        let entry = MealEntry::from(&estimate(&["Salmon", "Quinoa"]));

        assert_eq!(entry.name, "Salmon, Quinoa");
        assert_eq!(entry.calories, 520);
        assert_eq!(entry.meal_type, MealType::Dinner);
        assert_eq!(entry.source, MealSource::Ai);
        assert_eq!(entry.confidence, Some(Confidence::Medium));
    }

    #[test]
    fn test_entry_without_food_items_gets_default_name() {
        let entry = MealEntry::from(&estimate(&[]));

        assert_eq!(entry.name, DETECTED_MEAL_NAME);
    }

    #[test]
    fn test_manual_entry_wire_format() {
        let json = r#"{"name":"Protein Shake","time":"08:00 AM","calories":250,"protein":25,"type":"Breakfast"}"#;

        let entry: MealEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.source, MealSource::Manual);
        assert_eq!(entry.fat, 0);
        assert_eq!(entry.confidence, None);

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["source"], "manual");
        assert_eq!(value["type"], "Breakfast");
    }
}
