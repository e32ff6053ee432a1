pub mod bmi;
pub mod exercise;
pub mod meal_detection;
pub mod meal_log;

pub use bmi::BmiAdvisor;
pub use exercise::ExerciseCoach;
pub use meal_detection::MealDetector;
