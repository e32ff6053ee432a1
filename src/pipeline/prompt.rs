//! Prompt construction for every model call.
//!
//! Each structured prompt spells out the exact JSON shape it expects back and
//! asks for JSON only. User-supplied text is embedded as a JSON string literal
//! so quotes and control characters arrive escaped.

use base64::{engine::general_purpose, Engine};

use crate::models::{BodyMetricsRequest, ExerciseSummary};
use crate::services::{GenerationRequest, InlineImage};

const JSON_ONLY: &str =
    "Return ONLY valid JSON with this exact structure, no other text, no markdown, no code blocks:";

const NUTRITION_SCHEMA: &str = r#"{
  "foodItems": ["item1", "item2"],
  "estimatedCalories": 350,
  "estimatedProtein": 25,
  "estimatedCarbs": 30,
  "estimatedFat": 12,
  "confidence": "low | medium | high",
  "mealType": "Breakfast | Lunch | Dinner | Snack"
}"#;

const BMI_SCHEMA: &str = r#"{
  "idealWeight": 70,
  "recommendedCalories": 2200,
  "dietPlan": {
    "breakfast": "High-protein breakfast suggestions",
    "lunch": "Balanced lunch suggestions",
    "dinner": "Light dinner suggestions",
    "snacks": "Healthy snack suggestions"
  },
  "workoutPlan": {
    "cardio": ["Running", "Cycling"],
    "strength": ["Squats", "Push-ups"],
    "frequency": "4 times per week",
    "duration": "45 minutes per session"
  },
  "geneticFactors": ["Factor 1", "Factor 2"],
  "timeframe": "12 weeks",
  "healthTips": ["Tip 1", "Tip 2", "Tip 3"]
}"#;

const EXERCISE_SCHEMA: &str = r#"{
  "recommendedExercises": [
    {
      "name": "Exercise Name",
      "type": "Cardio/Strength/Flexibility",
      "duration": "30 min",
      "calories": 250,
      "intensity": "Medium",
      "description": "Brief description",
      "benefits": ["Benefit 1", "Benefit 2"]
    }
  ],
  "workoutPlan": {
    "weeklySchedule": [
      {
        "day": "Monday",
        "exercises": ["Exercise 1", "Exercise 2"],
        "focus": "Focus area"
      }
    ],
    "restDays": ["Saturday", "Sunday"],
    "progression": "Weekly progression plan"
  },
  "nutritionTips": ["Tip 1", "Tip 2"],
  "recoveryTips": ["Tip 1", "Tip 2"],
  "progressTimeline": "Expected timeline for results"
}"#;

/// Embed user text as an escaped JSON string literal.
fn quoted(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

/// Collapse control characters so the text stays on one line.
fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

pub fn meal_image(image: &[u8], mime_type: &str) -> GenerationRequest {
    let prompt = format!(
        "Analyze this food image and provide nutritional information in JSON format.\n{}\n{}",
        JSON_ONLY, NUTRITION_SCHEMA
    );

    let base64_data = general_purpose::STANDARD.encode(image);
    log::debug!("📊 Image size: {} bytes", image.len());
    log::debug!("🔄 Base64 encoded size: {} bytes", base64_data.len());

    GenerationRequest::with_image(
        prompt,
        InlineImage {
            mime_type: mime_type.to_string(),
            base64_data,
        },
    )
}

pub fn meal_description(description: &str) -> GenerationRequest {
    GenerationRequest::text(format!(
        "Analyze this food description: {}\n{}\n{}",
        quoted(description),
        JSON_ONLY,
        NUTRITION_SCHEMA
    ))
}

pub fn bmi_recommendation(metrics: &BodyMetricsRequest) -> GenerationRequest {
    GenerationRequest::text(format!(
        "You are a certified nutritionist and fitness expert. Provide detailed recommendations for this person:\n\
         BMI: {}\n\
         Weight: {}kg\n\
         Height: {}cm\n\
         Age: {}\n\
         Gender: {}\n\
         Activity Level: {}\n\
         Goal: {}\n\
         Family History: {}\n\
         Metabolism Type: {}\n\
         \n\
         {}\n{}",
        metrics.bmi,
        metrics.weight_kg,
        metrics.height_cm,
        metrics.age,
        metrics.gender.as_str(),
        metrics.activity_level.as_str(),
        metrics.goal.as_str(),
        metrics.family_history.as_str(),
        metrics.metabolism.as_str(),
        JSON_ONLY,
        BMI_SCHEMA
    ))
}

pub fn exercise_recommendation(summary: &ExerciseSummary) -> GenerationRequest {
    let summary_json = serde_json::to_string_pretty(summary).unwrap_or_default();

    GenerationRequest::text(format!(
        "As a professional fitness trainer and nutritionist, analyze this user's exercise data and provide personalized recommendations:\n\
         \n\
         EXERCISE SUMMARY:\n\
         {}\n\
         \n\
         Please provide comprehensive recommendations including:\n\
         1. Recommended new exercises based on their current routine\n\
         2. A weekly workout plan\n\
         3. Nutrition tips for better performance\n\
         4. Recovery advice\n\
         5. Progress timeline\n\
         \n\
         {}\n{}",
        summary_json, JSON_ONLY, EXERCISE_SCHEMA
    ))
}

/// Free-text chat prompt; the answer is shown as-is, not parsed.
pub fn exercise_chat(question: &str, summary: &ExerciseSummary) -> GenerationRequest {
    let recent = summary
        .recent_exercises
        .iter()
        .take(3)
        .map(|ex| format!("{} ({})", single_line(&ex.name), ex.exercise_type))
        .collect::<Vec<_>>()
        .join(", ");

    GenerationRequest::text(format!(
        "You are an AI fitness assistant. User asks: {}\n\
         \n\
         User's exercise context:\n\
         - Total Exercises: {}\n\
         - Total Calories Burned: {}\n\
         - Total Workout Time: {} minutes\n\
         - Average Heart Rate: {} BPM\n\
         - Exercise Types: {} Cardio, {} Strength, {} Flexibility\n\
         - Recent Exercises: {}\n\
         \n\
         Provide helpful, personalized fitness advice based on their exercise history. \
         Be encouraging and specific. Keep response concise but informative.",
        quoted(question),
        summary.total_exercises,
        summary.total_calories,
        summary.total_duration,
        summary.avg_heart_rate,
        summary.exercise_types.cardio,
        summary.exercise_types.strength,
        summary.exercise_types.flexibility,
        recent
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ActivityLevel, ExerciseEntry, ExerciseType, FamilyHistory, Gender, Goal, Metabolism,
        TypeCounts,
    };

    fn metrics() -> BodyMetricsRequest {
        BodyMetricsRequest {
            bmi: 22.9,
            weight_kg: 70.0,
            height_cm: 175.0,
            age: 30,
            gender: Gender::Male,
            activity_level: ActivityLevel::VeryActive,
            goal: Goal::Maintain,
            family_history: FamilyHistory::None,
            metabolism: Metabolism::Average,
        }
    }

    fn summary() -> ExerciseSummary {
        ExerciseSummary {
            total_exercises: 1,
            total_calories: 320,
            total_duration: 30,
            avg_calories: 320,
            avg_heart_rate: 120,
            exercise_types: TypeCounts {
                cardio: 1,
                strength: 0,
                flexibility: 0,
            },
            recent_exercises: vec![ExerciseEntry {
                name: "Morning\nRun".to_string(),
                exercise_type: ExerciseType::Cardio,
                duration: "30 min".to_string(),
                calories: 320,
                intensity: None,
                heart_rate: None,
                date: None,
            }],
        }
    }

    #[test]
    fn test_structured_prompts_demand_json_only() {
        let prompts = [
            meal_description("toast").prompt,
            meal_image(b"img", "image/jpeg").prompt,
            bmi_recommendation(&metrics()).prompt,
            exercise_recommendation(&summary()).prompt,
        ];

        for prompt in prompts {
            assert!(prompt.contains("Return ONLY valid JSON"));
            assert!(prompt.contains("no markdown"));
        }
    }

    #[test]
    fn test_meal_description_escapes_user_text() {
        let request = meal_description("2 \"large\" eggs\nand toast");

        assert!(request.image.is_none());
        assert!(request.prompt.contains(r#""2 \"large\" eggs\nand toast""#));
        assert!(!request.prompt.contains("eggs\nand"));
        assert!(request.prompt.contains("\"estimatedCalories\""));
    }

    #[test]
    fn test_meal_image_encodes_bytes() {
        let request = meal_image(&[0xFF, 0xD8, 0xFF], "image/jpeg");
        let image = request.image.unwrap();

        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.base64_data, "/9j/");
    }

    #[test]
    fn test_bmi_prompt_lists_metrics() {
        let prompt = bmi_recommendation(&metrics()).prompt;

        assert!(prompt.contains("BMI: 22.9"));
        assert!(prompt.contains("Weight: 70kg"));
        assert!(prompt.contains("Height: 175cm"));
        assert!(prompt.contains("Activity Level: veryActive"));
        assert!(prompt.contains("Family History: none"));
        assert!(prompt.contains("\"idealWeight\""));
    }

    #[test]
    fn test_exercise_prompts_embed_history() {
        let prompt = exercise_recommendation(&summary()).prompt;
        assert!(prompt.contains("\"totalCalories\": 320"));

        let chat = exercise_chat("How do I burn \"more\"?", &summary()).prompt;
        assert!(chat.contains(r#""How do I burn \"more\"?""#));
        assert!(chat.contains("Recent Exercises: Morning Run (Cardio)"));
        assert!(chat.contains("1 Cardio, 0 Strength, 0 Flexibility"));
    }
}
