use serde::{Deserialize, Serialize};

pub mod exercise;
pub mod meal;

pub use exercise::{
    ExerciseEntry, ExerciseRecommendation, ExerciseSummary, ExerciseType, RecommendedExercise,
    TypeCounts, WeeklyPlan, WorkoutDay,
};
pub use meal::{MealEntry, MealSource, MealSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        };
        write!(f, "{}", s)
    }
}

/// Nutrition values the model estimated for one meal.
///
/// Field names on the wire match the schema the prompt asks the model for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionEstimate {
    pub food_items: Vec<String>,
    #[serde(rename = "estimatedCalories")]
    pub calories: u32,
    #[serde(rename = "estimatedProtein")]
    pub protein: u32,
    #[serde(rename = "estimatedCarbs")]
    pub carbs: u32,
    #[serde(rename = "estimatedFat")]
    pub fat: u32,
    pub confidence: Confidence,
    pub meal_type: MealType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilyHistory {
    None,
    Overweight,
    Obese,
    Diabetes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metabolism {
    Slow,
    Average,
    Fast,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "veryActive",
        }
    }
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Lose => "lose",
            Goal::Maintain => "maintain",
            Goal::Gain => "gain",
        }
    }
}

impl FamilyHistory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FamilyHistory::None => "none",
            FamilyHistory::Overweight => "overweight",
            FamilyHistory::Obese => "obese",
            FamilyHistory::Diabetes => "diabetes",
        }
    }
}

impl Metabolism {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metabolism::Slow => "slow",
            Metabolism::Average => "average",
            Metabolism::Fast => "fast",
        }
    }
}

/// Body metrics and preferences behind one BMI recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyMetricsRequest {
    pub bmi: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub family_history: FamilyHistory,
    pub metabolism: Metabolism,
}

/// What the BMI form collects; the BMI itself is computed from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub family_history: FamilyHistory,
    pub metabolism: Metabolism,
}

impl BodyProfile {
    pub fn with_bmi(&self, bmi: f64) -> BodyMetricsRequest {
        BodyMetricsRequest {
            bmi,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            age: self.age,
            gender: self.gender,
            activity_level: self.activity_level,
            goal: self.goal,
            family_history: self.family_history,
            metabolism: self.metabolism,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietPlan {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snacks: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub cardio: Vec<String>,
    pub strength: Vec<String>,
    pub frequency: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiRecommendation {
    #[serde(rename = "idealWeight")]
    pub ideal_weight_kg: f64,
    pub recommended_calories: u32,
    pub diet_plan: DietPlan,
    pub workout_plan: WorkoutPlan,
    pub genetic_factors: Vec<String>,
    pub timeframe: String,
    pub health_tips: Vec<String>,
}

/// Coarse BMI band used to pick a canned recommendation.
///
/// There is no obese entry: everything from 25 upwards shares the
/// overweight recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackCategory {
    Underweight,
    Normal,
    Overweight,
}

impl FallbackCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            FallbackCategory::Underweight
        } else if bmi < 25.0 {
            FallbackCategory::Normal
        } else {
            FallbackCategory::Overweight
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackCategory::Underweight => "underweight",
            FallbackCategory::Normal => "normal",
            FallbackCategory::Overweight => "overweight",
        }
    }
}

/// BMI band shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

/// Where an AI-backed result came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResultSource {
    Live,
    Fallback { reason: String },
}

/// A result that is always present, tagged with whether the model produced
/// it or a canned value stood in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessed<T> {
    pub result: T,
    pub source: ResultSource,
}

impl<T> Assessed<T> {
    pub fn live(result: T) -> Self {
        Self {
            result,
            source: ResultSource::Live,
        }
    }

    pub fn fallback(result: T, reason: impl std::fmt::Display) -> Self {
        Self {
            result,
            source: ResultSource::Fallback {
                reason: reason.to_string(),
            },
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, ResultSource::Fallback { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiReport {
    pub bmi: f64,
    pub category: BmiCategory,
    pub recommendation: Assessed<BmiRecommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_category_boundaries() {
        assert_eq!(FallbackCategory::from_bmi(18.4), FallbackCategory::Underweight);
        assert_eq!(FallbackCategory::from_bmi(18.5), FallbackCategory::Normal);
        assert_eq!(FallbackCategory::from_bmi(24.9), FallbackCategory::Normal);
        assert_eq!(FallbackCategory::from_bmi(25.0), FallbackCategory::Overweight);
        assert_eq!(FallbackCategory::from_bmi(41.0), FallbackCategory::Overweight);
    }

    #[test]
    fn test_bmi_category_distinguishes_obese() {
        assert_eq!(BmiCategory::from_bmi(29.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
        assert_eq!(FallbackCategory::from_bmi(30.0), FallbackCategory::Overweight);
    }

    #[test]
    fn test_nutrition_estimate_wire_names() {
        let json = r#"{
            "foodItems": ["Oatmeal", "Banana"],
            "estimatedCalories": 320,
            "estimatedProtein": 9,
            "estimatedCarbs": 58,
            "estimatedFat": 6,
            "confidence": "medium",
            "mealType": "Breakfast"
        }"#;

        let estimate: NutritionEstimate = serde_json::from_str(json).unwrap();

        assert_eq!(estimate.food_items, vec!["Oatmeal", "Banana"]);
        assert_eq!(estimate.calories, 320);
        assert_eq!(estimate.confidence, Confidence::Medium);
        assert_eq!(estimate.meal_type, MealType::Breakfast);
    }

    #[test]
    fn test_body_metrics_enum_values() {
        let json = r#"{
            "bmi": 22.9, "weightKg": 70, "heightCm": 175, "age": 30,
            "gender": "female", "activityLevel": "veryActive", "goal": "gain",
            "familyHistory": "diabetes", "metabolism": "fast"
        }"#;

        let request: BodyMetricsRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.activity_level, ActivityLevel::VeryActive);
        assert_eq!(request.activity_level.as_str(), "veryActive");
        assert_eq!(request.family_history.as_str(), "diabetes");
    }

    #[test]
    fn test_assessed_source_serialization() {
        let live = serde_json::to_value(Assessed::live(1)).unwrap();
        assert_eq!(live["source"]["kind"], "live");

        let degraded = Assessed::fallback(2, "timeout");
        assert!(degraded.is_fallback());
        let value = serde_json::to_value(&degraded).unwrap();
        assert_eq!(value["source"]["kind"], "fallback");
        assert_eq!(value["source"]["reason"], "timeout");
    }
}
