pub mod scoring;
pub mod targets;

pub use scoring::{Reason, ReasonThreshold, ScoredFoodItem, ScoringEngine, ScoringWeights};
pub use targets::{derive_meal_target, MealPlan, MealTarget, TargetMode};
