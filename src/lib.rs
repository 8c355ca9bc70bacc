pub mod catalog;
pub mod cli;
pub mod coerce;
pub mod config;
pub mod errors;
pub mod logging;
pub mod meal;
pub mod output;
pub mod profile;
pub mod recommender;
pub mod requirements;

pub use catalog::{FoodCatalog, FoodItem, RawFoodRecord};
pub use errors::RecommendError;
pub use output::{FoodRecord, Prediction, PredictionReport};
pub use profile::{ActivityLevel, EatenToday, Gender, Profile};
pub use recommender::{Recommendations, Recommender};
pub use requirements::DailyNeeds;
