use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::errors::{PipelineError, Result};
use crate::models::{
    Assessed, ExerciseEntry, ExerciseRecommendation, ExerciseSummary, ExerciseType, TypeCounts,
};
use crate::pipeline::{self, fallback, prompt};
use crate::services::GenerativeModel;

/// Heart rate assumed for entries logged without one (or with 0).
const DEFAULT_HEART_RATE: u32 = 120;
const RECENT_LIMIT: usize = 5;

pub fn summarize(entries: &[ExerciseEntry]) -> ExerciseSummary {
    let count = entries.len();
    let total_calories = entries.iter().map(|e| e.calories).fold(0, u32::saturating_add);
    let total_duration = entries
        .iter()
        .map(|e| e.duration_minutes())
        .fold(0, u32::saturating_add);

    let (avg_calories, avg_heart_rate) = if count == 0 {
        (0, DEFAULT_HEART_RATE)
    } else {
        let heart_total: u64 = entries
            .iter()
            .map(|e| u64::from(e.heart_rate.filter(|&hr| hr > 0).unwrap_or(DEFAULT_HEART_RATE)))
            .sum();
        (
            (f64::from(total_calories) / count as f64).round() as u32,
            (heart_total as f64 / count as f64).round() as u32,
        )
    };

    let mut exercise_types = TypeCounts::default();
    for entry in entries {
        match entry.exercise_type {
            ExerciseType::Cardio => exercise_types.cardio += 1,
            ExerciseType::Strength => exercise_types.strength += 1,
            ExerciseType::Flexibility => exercise_types.flexibility += 1,
        }
    }

    ExerciseSummary {
        total_exercises: count,
        total_calories,
        total_duration,
        avg_calories,
        avg_heart_rate,
        exercise_types,
        recent_exercises: entries.iter().take(RECENT_LIMIT).cloned().collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseAdvice {
    pub summary: ExerciseSummary,
    pub recommendation: Assessed<ExerciseRecommendation>,
}

pub struct ExerciseCoach {
    model: Arc<dyn GenerativeModel>,
}

impl ExerciseCoach {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    pub async fn recommend(&self, entries: &[ExerciseEntry]) -> ExerciseAdvice {
        let summary = summarize(entries);
        log::info!(
            "🏋️ Requesting exercise recommendations for {} exercises ({} kcal)",
            summary.total_exercises,
            summary.total_calories
        );

        let request = prompt::exercise_recommendation(&summary);
        let recommendation = pipeline::assess(
            self.model.as_ref(),
            &request,
            "Exercise recommendation",
            fallback::exercise_recommendation,
        )
        .await;

        ExerciseAdvice {
            summary,
            recommendation,
        }
    }

    /// Answer a free-form fitness question in the context of the user's history.
    pub async fn chat(&self, message: &str, entries: &[ExerciseEntry]) -> Result<Assessed<String>> {
        let message = message.trim();
        if message.is_empty() {
            return Err(PipelineError::AnalysisFailed("Please type a question first.".to_string()));
        }

        let summary = summarize(entries);
        let request = prompt::exercise_chat(message, &summary);

        let reply = match self.model.generate(&request).await {
            Ok(response) if !response.text().trim().is_empty() => {
                Assessed::live(response.text().trim().to_string())
            }
            Ok(_) => {
                log::warn!("⚠️ Chat assistant returned an empty answer");
                Assessed::fallback(fallback::CHAT_APOLOGY.to_string(), "empty answer")
            }
            Err(e) => {
                log::error!("❌ Chat assistant error: {}", e);
                Assessed::fallback(
                    fallback::CHAT_APOLOGY.to_string(),
                    PipelineError::NetworkOrServiceFailure(e),
                )
            }
        };

        Ok(reply)
    }
}

pub fn report_filename(date: NaiveDate) -> String {
    format!("fitness-ai-report-{}.txt", date.format("%Y-%m-%d"))
}

/// Plain-text report of the exercise history and an AI recommendation.
pub fn render_report(
    entries: &[ExerciseEntry],
    recommendation: &ExerciseRecommendation,
    generated_on: NaiveDate,
) -> String {
    ExerciseReport {
        entries,
        recommendation,
        generated_on,
    }
    .to_string()
}

struct ExerciseReport<'a> {
    entries: &'a [ExerciseEntry],
    recommendation: &'a ExerciseRecommendation,
    generated_on: NaiveDate,
}

impl fmt::Display for ExerciseReport<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = summarize(self.entries);
        let types = summary.exercise_types;
        let recommendation = self.recommendation;

        writeln!(out, "AI FITNESS ASSISTANT - PERSONALIZED EXERCISE REPORT")?;
        writeln!(out, "Generated on: {}", self.generated_on.format("%Y-%m-%d"))?;
        writeln!(out)?;
        writeln!(out, "=== EXERCISE SUMMARY ===")?;
        writeln!(out, "Total Exercises: {}", summary.total_exercises)?;
        writeln!(out, "Total Calories Burned: {}", summary.total_calories)?;
        writeln!(out, "Total Duration: {} minutes", summary.total_duration)?;
        writeln!(out, "Average Calories per Exercise: {}", summary.avg_calories)?;
        writeln!(out, "Average Heart Rate: {} BPM", summary.avg_heart_rate)?;
        writeln!(out)?;
        writeln!(out, "Exercise Type Distribution:")?;
        writeln!(out, "- Cardio: {} exercises", types.cardio)?;
        writeln!(out, "- Strength: {} exercises", types.strength)?;
        writeln!(out, "- Flexibility: {} exercises", types.flexibility)?;

        writeln!(out)?;
        writeln!(out, "=== AI RECOMMENDED EXERCISES ===")?;
        for ex in &recommendation.recommended_exercises {
            writeln!(out)?;
            writeln!(out, "{} ({})", ex.name, ex.exercise_type)?;
            writeln!(out, "Duration: {}", ex.duration)?;
            writeln!(out, "Calories: {}", ex.calories)?;
            writeln!(out, "Intensity: {}", ex.intensity)?;
            writeln!(out, "Description: {}", ex.description)?;
            writeln!(out, "Benefits: {}", ex.benefits.join(", "))?;
        }

        let plan = &recommendation.workout_plan;
        writeln!(out)?;
        writeln!(out, "=== WEEKLY WORKOUT PLAN ===")?;
        for day in &plan.weekly_schedule {
            writeln!(out)?;
            writeln!(out, "{} ({}):", day.day, day.focus)?;
            for ex in &day.exercises {
                writeln!(out, "  • {}", ex)?;
            }
        }
        writeln!(out)?;
        writeln!(out, "Rest Days: {}", plan.rest_days.join(", "))?;
        writeln!(out, "Progression Plan: {}", plan.progression)?;

        writeln!(out)?;
        writeln!(out, "=== NUTRITION TIPS ===")?;
        for tip in &recommendation.nutrition_tips {
            writeln!(out, "• {}", tip)?;
        }

        writeln!(out)?;
        writeln!(out, "=== RECOVERY TIPS ===")?;
        for tip in &recommendation.recovery_tips {
            writeln!(out, "• {}", tip)?;
        }

        writeln!(out)?;
        writeln!(out, "=== PROGRESS TIMELINE ===")?;
        writeln!(out, "{}", recommendation.progress_timeline)?;

        writeln!(out)?;
        writeln!(out, "=== PERSONALIZED ADVICE ===")?;
        writeln!(out, "Based on your exercise history, here are specific recommendations:")?;
        writeln!(out, "{}", balance_advice(&summary))?;
        writeln!(out)?;
        writeln!(out, "{}", heart_rate_advice(summary.avg_heart_rate))?;

        Ok(())
    }
}

fn balance_advice(summary: &ExerciseSummary) -> String {
    if summary.total_exercises == 0 {
        return "Start with basic exercises and gradually increase intensity.".to_string();
    }

    let types = summary.exercise_types;
    let focus = if types.cardio > types.strength { "cardio" } else { "strength" };
    let missing = if types.cardio < 2 {
        "cardio"
    } else if types.strength < 2 {
        "strength training"
    } else {
        "flexibility"
    };

    format!(
        "You've been focusing on {} exercises. Consider adding more {} for balanced fitness.",
        focus, missing
    )
}

fn heart_rate_advice(avg_heart_rate: u32) -> String {
    let intensity = if avg_heart_rate < 130 {
        "moderate intensity workouts"
    } else {
        "high intensity workouts"
    };
    let next_step = if avg_heart_rate > 140 {
        "Consider incorporating more recovery days."
    } else {
        "You can safely increase workout intensity."
    };

    format!(
        "Your average heart rate of {} BPM suggests {}.\n{}",
        avg_heart_rate, intensity, next_step
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResultSource;
    use crate::services::ai_service::mock::ScriptedModel;

    fn entry(name: &str, kind: ExerciseType, duration: &str, calories: u32, heart_rate: Option<u32>) -> ExerciseEntry {
        ExerciseEntry {
            name: name.to_string(),
            exercise_type: kind,
            duration: duration.to_string(),
            calories,
            intensity: Some("Medium".to_string()),
            heart_rate,
            date: None,
        }
    }

    fn history() -> Vec<ExerciseEntry> {
        vec![
            entry("Morning Run", ExerciseType::Cardio, "30 min", 320, Some(150)),
            entry("Weight Training", ExerciseType::Strength, "45 min", 280, None),
            entry("Yoga Session", ExerciseType::Flexibility, "25 min", 150, Some(95)),
        ]
    }

    #[test]
    fn test_summarize_history() {
        let summary = summarize(&history());

        assert_eq!(summary.total_exercises, 3);
        assert_eq!(summary.total_calories, 750);
        assert_eq!(summary.total_duration, 100);
        assert_eq!(summary.avg_calories, 250);
        // (150 + 120 + 95) / 3 = 121.67
        assert_eq!(summary.avg_heart_rate, 122);
        assert_eq!(
            summary.exercise_types,
            TypeCounts {
                cardio: 1,
                strength: 1,
                flexibility: 1
            }
        );
        assert_eq!(summary.recent_exercises.len(), 3);
    }

    #[test]
    fn test_summarize_empty_and_long_histories() {
        let empty = summarize(&[]);
        assert_eq!(empty.avg_calories, 0);
        assert_eq!(empty.avg_heart_rate, 120);
        assert!(empty.recent_exercises.is_empty());

        let many: Vec<_> = (0..8)
            .map(|i| entry(&format!("Run {}", i), ExerciseType::Cardio, "10 min", 100, None))
            .collect();
        let summary = summarize(&many);
        assert_eq!(summary.recent_exercises.len(), 5);
        assert_eq!(summary.recent_exercises[0].name, "Run 0");
    }

    #[test]
    fn test_summarize_saturates_huge_totals() {
        let huge = entry("Ultra Marathon", ExerciseType::Cardio, "4000000000 min", 3_000_000_000, Some(170));

        let summary = summarize(&[huge.clone(), huge]);

        assert_eq!(summary.total_calories, u32::MAX);
        assert_eq!(summary.total_duration, u32::MAX);
        assert_eq!(summary.avg_heart_rate, 170);
    }

    #[test]
    fn test_zero_heart_rate_counts_as_default() {
        let summary = summarize(&[entry("Stretching", ExerciseType::Flexibility, "15 min", 60, Some(0))]);

        assert_eq!(summary.avg_heart_rate, 120);
    }

    #[tokio::test]
    async fn test_recommend_falls_back_on_bad_json() {
        let coach = ExerciseCoach::new(Arc::new(ScriptedModel::answering("{\"recommendedExercises\": []")));

        let advice = coach.recommend(&history()).await;

        assert_eq!(advice.summary.total_calories, 750);
        assert!(advice.recommendation.is_fallback());
        assert_eq!(advice.recommendation.result, fallback::exercise_recommendation());
    }

    #[tokio::test]
    async fn test_recommend_live_answer() {
        let mut live = fallback::exercise_recommendation();
        live.progress_timeline = "Stronger in 8 weeks".to_string();
        let text = serde_json::to_string(&live).unwrap();
        let coach = ExerciseCoach::new(Arc::new(ScriptedModel::answering(&text)));

        let advice = coach.recommend(&history()).await;

        assert_eq!(advice.recommendation.source, ResultSource::Live);
        assert_eq!(advice.recommendation.result.progress_timeline, "Stronger in 8 weeks");
    }

    #[tokio::test]
    async fn test_chat_replies_and_apologizes() {
        let coach = ExerciseCoach::new(Arc::new(ScriptedModel::answering("  Try interval runs twice a week.\n")));
        let reply = coach.chat("How can I burn more calories?", &history()).await.unwrap();
        assert_eq!(reply.result, "Try interval runs twice a week.");
        assert!(!reply.is_fallback());

        let offline = ExerciseCoach::new(Arc::new(ScriptedModel::failing(500)));
        let reply = offline.chat("Hi", &history()).await.unwrap();
        assert_eq!(reply.result, fallback::CHAT_APOLOGY);
        assert!(reply.is_fallback());

        assert!(offline.chat("  ", &history()).await.is_err());
    }

    #[test]
    fn test_render_report() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let report = render_report(&history(), &fallback::exercise_recommendation(), date);

        assert!(report.starts_with("AI FITNESS ASSISTANT - PERSONALIZED EXERCISE REPORT\nGenerated on: 2026-03-14"));
        assert!(report.contains("Total Calories Burned: 750"));
        assert!(report.contains("Brisk Walking (Cardio)"));
        assert!(report.contains("Monday (Cardio and mobility):\n  • Brisk Walking"));
        assert!(report.contains("Rest Days: Saturday, Sunday"));
        assert!(report.contains("You've been focusing on strength exercises. Consider adding more cardio"));
        assert!(report.contains("Your average heart rate of 122 BPM suggests moderate intensity workouts."));
        assert_eq!(report_filename(date), "fitness-ai-report-2026-03-14.txt");
    }

    #[test]
    fn test_report_for_empty_history() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let report = render_report(&[], &fallback::exercise_recommendation(), date);

        assert!(report.contains("Start with basic exercises and gradually increase intensity."));
        assert!(report.contains("You can safely increase workout intensity."));
    }
}
