use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::errors::PipelineError;
use crate::handlers::exercise::{render_report, report_filename, ExerciseAdvice};
use crate::handlers::meal_log::{log_detected_meal, summarize_meals};
use crate::handlers::{BmiAdvisor, ExerciseCoach, MealDetector};
use crate::models::{
    Assessed, BmiReport, BodyProfile, ExerciseEntry, ExerciseRecommendation, MealEntry, MealSummary,
    NutritionEstimate, ResultSource,
};
use crate::services::GenerativeModel;

/// Largest meal photo accepted, in bytes.
const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

#[derive(Debug, Deserialize)]
pub struct DescriptionRequest {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct MealsRequest {
    #[serde(default)]
    pub meals: Vec<MealEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ExercisesRequest {
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
    pub source: ResultSource,
}

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
    pub recommendation: ExerciseRecommendation,
}

pub struct AppState {
    pub meals: MealDetector,
    pub bmi: BmiAdvisor,
    pub coach: ExerciseCoach,
}

impl AppState {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            meals: MealDetector::new(model.clone()),
            bmi: BmiAdvisor::new(model.clone()),
            coach: ExerciseCoach::new(model),
        }
    }
}

/// Error body returned to the browser.
pub struct ApiError(PipelineError);

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_input_error() {
            log::warn!("⚠️ Rejected request: {}", self.0);
            StatusCode::BAD_REQUEST
        } else {
            log::error!("❌ Request failed: {}", self.0);
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, Json(body)).into_response()
    }
}

pub fn create_api_router(state: Arc<AppState>, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/meals/image",
            post(meal_image_handler).layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES)),
        )
        .route("/api/meals/description", post(meal_description_handler))
        .route("/api/meals/log", post(meal_log_handler))
        .route("/api/meals/summary", post(meal_summary_handler))
        .route("/api/bmi", post(bmi_handler))
        .route("/api/exercise/recommendations", post(exercise_recommendations_handler))
        .route("/api/exercise/chat", post(exercise_chat_handler))
        .route("/api/exercise/report", post(exercise_report_handler))
        .with_state(state);

    match static_dir {
        Some(dir) => {
            log::info!("📁 Serving static files from {}", dir.display());
            router.fallback_service(ServeDir::new(dir))
        }
        None => router,
    }
}

async fn health_check() -> &'static str {
    "OK"
}

async fn meal_image_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Assessed<NutritionEstimate>>, ApiError> {
    let mime_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.split(';').next().unwrap_or(value).trim())
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_IMAGE_MIME);

    log::info!("📸 Meal photo received: {} bytes ({})", body.len(), mime_type);

    let assessed = state.meals.analyze_image(&body, mime_type).await?;
    Ok(Json(assessed))
}

async fn meal_description_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DescriptionRequest>,
) -> Result<Json<Assessed<NutritionEstimate>>, ApiError> {
    let assessed = state.meals.analyze_description(&request.description).await?;
    Ok(Json(assessed))
}

async fn meal_log_handler(Json(estimate): Json<NutritionEstimate>) -> Json<MealEntry> {
    let now = chrono::Local::now().time();
    Json(log_detected_meal(&estimate, now))
}

async fn meal_summary_handler(Json(request): Json<MealsRequest>) -> Json<MealSummary> {
    Json(summarize_meals(&request.meals))
}

async fn bmi_handler(
    State(state): State<Arc<AppState>>,
    Json(profile): Json<BodyProfile>,
) -> Result<Json<BmiReport>, ApiError> {
    let report = state.bmi.assess(&profile).await?;
    Ok(Json(report))
}

async fn exercise_recommendations_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExercisesRequest>,
) -> Json<ExerciseAdvice> {
    Json(state.coach.recommend(&request.exercises).await)
}

async fn exercise_chat_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    log::info!("💬 Chat question: {}", request.message);

    let answer = state.coach.chat(&request.message, &request.exercises).await?;
    Ok(Json(ChatReply {
        reply: answer.result,
        source: answer.source,
    }))
}

async fn exercise_report_handler(Json(request): Json<ReportRequest>) -> impl IntoResponse {
    let today = chrono::Local::now().date_naive();
    let report = render_report(&request.exercises, &request.recommendation, today);

    log::info!("📄 Exercise report rendered ({} exercises)", request.exercises.len());

    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", report_filename(today)),
            ),
        ],
        report,
    )
}
