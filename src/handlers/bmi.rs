use std::sync::Arc;

use crate::errors::{PipelineError, Result};
use crate::models::{
    Assessed, BmiCategory, BmiRecommendation, BmiReport, BodyMetricsRequest, BodyProfile,
    FallbackCategory,
};
use crate::pipeline::{self, fallback, prompt};
use crate::services::GenerativeModel;

/// Weight in kilograms over height in metres squared, unrounded.
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> Result<f64> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(PipelineError::InvalidMetrics(format!(
            "weight must be a positive number of kilograms, got {}",
            weight_kg
        )));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(PipelineError::InvalidMetrics(format!(
            "height must be a positive number of centimetres, got {}",
            height_cm
        )));
    }

    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub struct BmiAdvisor {
    model: Arc<dyn GenerativeModel>,
}

impl BmiAdvisor {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Personalized plan for the given metrics, or the canned plan for
    /// their BMI band when the model cannot provide one.
    pub async fn recommend(&self, metrics: &BodyMetricsRequest) -> Assessed<BmiRecommendation> {
        let category = FallbackCategory::from_bmi(metrics.bmi);
        log::info!(
            "🤖 Requesting BMI recommendations for BMI {} ({}), goal {}",
            metrics.bmi,
            category.as_str(),
            metrics.goal.as_str()
        );

        let request = prompt::bmi_recommendation(metrics);
        pipeline::assess(self.model.as_ref(), &request, "BMI recommendation", || {
            fallback::bmi_recommendation(category)
        })
        .await
    }

    /// Compute the BMI from the form, band it, and fetch recommendations.
    pub async fn assess(&self, profile: &BodyProfile) -> Result<BmiReport> {
        let raw = body_mass_index(profile.weight_kg, profile.height_cm)?;
        let bmi = round_one_decimal(raw);
        let category = BmiCategory::from_bmi(raw);

        log::info!("⚖️ BMI {} → {:?}", bmi, category);

        let recommendation = self.recommend(&profile.with_bmi(bmi)).await;

        Ok(BmiReport {
            bmi,
            category,
            recommendation,
        })
    }
}
