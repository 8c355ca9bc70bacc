//! Daily nutrient requirements from age-banded reference tables.

pub mod age_band;
pub mod calculator;
pub mod table;

pub use age_band::AgeBand;
pub use calculator::{calculate_daily_needs, select_energy, DailyNeeds};
pub use table::{Nutrient, NutrientValue};
