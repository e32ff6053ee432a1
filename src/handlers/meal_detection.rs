use std::sync::Arc;

use crate::errors::{PipelineError, Result};
use crate::models::{Assessed, NutritionEstimate};
use crate::pipeline::{self, fallback, prompt};
use crate::services::GenerativeModel;

pub struct MealDetector {
    model: Arc<dyn GenerativeModel>,
}

impl MealDetector {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Estimate nutrition from a meal photo.
    ///
    /// Fails only when the upload itself is unusable; any model problem
    /// yields the fallback estimate instead.
    pub async fn analyze_image(&self, image: &[u8], mime_type: &str) -> Result<Assessed<NutritionEstimate>> {
        log::debug!("📸 Starting image analysis ({} bytes, {})", image.len(), mime_type);

        if image.is_empty() {
            return Err(PipelineError::AnalysisFailed(
                "Failed to analyze image: the uploaded image is empty.".to_string(),
            ));
        }
        let mime_type = mime_type.trim();
        if !mime_type.to_ascii_lowercase().starts_with("image/") {
            return Err(PipelineError::AnalysisFailed(format!(
                "Failed to analyze image: unsupported file type '{}'.",
                mime_type
            )));
        }

        let request = prompt::meal_image(image, mime_type);
        let assessed =
            pipeline::assess(self.model.as_ref(), &request, "Image meal detection", fallback::meal_estimate).await;
        log_estimate(&assessed);
        Ok(assessed)
    }

    /// Estimate nutrition from a typed or dictated meal description.
    pub async fn analyze_description(&self, description: &str) -> Result<Assessed<NutritionEstimate>> {
        let description = description.trim();
        if description.is_empty() {
            return Err(PipelineError::AnalysisFailed(
                "Failed to analyze description: please describe what you ate.".to_string(),
            ));
        }

        log::info!("🍽️ Analyzing meal description: '{}'", description);

        let request = prompt::meal_description(description);
        let assessed =
            pipeline::assess(self.model.as_ref(), &request, "Text meal detection", fallback::meal_estimate).await;
        log_estimate(&assessed);
        Ok(assessed)
    }
}

fn log_estimate(assessed: &Assessed<NutritionEstimate>) {
    let estimate = &assessed.result;
    log::info!(
        "🥗 {} detected: {} | {} kcal, P {}g C {}g F {}g (fallback: {})",
        estimate.meal_type,
        estimate.food_items.join(", "),
        estimate.calories,
        estimate.protein,
        estimate.carbs,
        estimate.fat,
        assessed.is_fallback()
    );
}
