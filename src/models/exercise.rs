use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExerciseType {
    Cardio,
    Strength,
    Flexibility,
}

impl std::fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ExerciseType::Cardio => "Cardio",
            ExerciseType::Strength => "Strength",
            ExerciseType::Flexibility => "Flexibility",
        };
        write!(f, "{}", s)
    }
}

/// One logged workout as the web UI keeps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    pub duration: String, // "30 min"
    pub calories: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl ExerciseEntry {
    /// Leading integer of the duration text, 0 when it does not start with a digit.
    pub fn duration_minutes(&self) -> u32 {
        let digits: String = self
            .duration
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCounts {
    pub cardio: usize,
    pub strength: usize,
    pub flexibility: usize,
}

/// Aggregates over a user's exercise history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSummary {
    pub total_exercises: usize,
    pub total_calories: u32,
    pub total_duration: u32,
    pub avg_calories: u32,
    pub avg_heart_rate: u32,
    pub exercise_types: TypeCounts,
    pub recent_exercises: Vec<ExerciseEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedExercise {
    pub name: String,
    #[serde(rename = "type")]
    pub exercise_type: String,
    pub duration: String,
    pub calories: u32,
    pub intensity: String,
    pub description: String,
    pub benefits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDay {
    pub day: String,
    pub exercises: Vec<String>,
    pub focus: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    pub weekly_schedule: Vec<WorkoutDay>,
    pub rest_days: Vec<String>,
    pub progression: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRecommendation {
    pub recommended_exercises: Vec<RecommendedExercise>,
    pub workout_plan: WeeklyPlan,
    pub nutrition_tips: Vec<String>,
    pub recovery_tips: Vec<String>,
    pub progress_timeline: String,
}
