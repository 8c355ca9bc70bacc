//! User profile types and normalisation of caller input.
//!
//! Callers send loosely typed payloads with several accepted spellings per
//! field. Everything is mapped onto [`Profile`] and [`EatenToday`] here, so
//! the calculators only ever see canonical, already-defaulted values.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::coerce;

pub const DEFAULT_WEIGHT_KG: f64 = 60.0;
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;
pub const DEFAULT_AGE_YEARS: i64 = 25;
pub const MONTHS_PER_YEAR: i64 = 12;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Anything other than `Female` (including "Prefer not to say") is treated as `Male`.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Female" => Gender::Female,
            _ => Gender::Male,
        }
    }
}

/// Physical activity level selecting the energy reference column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl ActivityLevel {
    /// Maps an external activity label onto a level. Unknown labels map to `Medium`.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Sedentary" | "Light" | "Low" => ActivityLevel::Low,
            "Moderate" | "Medium" => ActivityLevel::Medium,
            "Active" | "Very Active" | "VeryActive" | "Heavy" | "Athlete" | "High" => {
                ActivityLevel::High
            }
            _ => ActivityLevel::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub age_months: i64,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
}

impl Default for Profile {
    fn default() -> Self {
        Self::from_years(
            DEFAULT_AGE_YEARS,
            Gender::default(),
            DEFAULT_WEIGHT_KG,
            DEFAULT_HEIGHT_CM,
            ActivityLevel::default(),
        )
    }
}

impl Profile {
    pub fn from_years(
        age_years: i64,
        gender: Gender,
        weight_kg: f64,
        height_cm: f64,
        activity_level: ActivityLevel,
    ) -> Self {
        Self {
            age_months: age_years.saturating_mul(MONTHS_PER_YEAR),
            gender,
            weight_kg,
            height_cm,
            activity_level,
        }
    }

    /// Builds a profile from a caller payload (`age` in years, `gender`,
    /// `weight`, `height`, `activityLevel`).
    ///
    /// Missing or malformed fields fall back to 25 years / 60 kg / 170 cm,
    /// `Male` and `Medium`. Negative ages and non-positive body measurements
    /// are treated as malformed.
    pub fn from_json(input: &Value) -> Self {
        let age_years = match coerce::integer(input.get("age")) {
            Some(age) if age >= 0 => age,
            Some(age) => {
                warn!(age, default = DEFAULT_AGE_YEARS, "Negative age in profile, using default");
                DEFAULT_AGE_YEARS
            }
            None => DEFAULT_AGE_YEARS,
        };
        let weight_kg = positive_or(input.get("weight"), "weight", DEFAULT_WEIGHT_KG);
        let height_cm = positive_or(input.get("height"), "height", DEFAULT_HEIGHT_CM);

        let gender = coerce::text(input.get("gender"))
            .map(|label| Gender::from_label(&label))
            .unwrap_or_default();
        let activity_level = coerce::text(input.get("activityLevel"))
            .map(|label| ActivityLevel::from_label(&label))
            .unwrap_or_default();

        Self::from_years(age_years, gender, weight_kg, height_cm, activity_level)
    }
}

fn positive_or(value: Option<&Value>, field: &str, default: f64) -> f64 {
    match coerce::number(value) {
        Some(v) if v > 0.0 => v,
        Some(v) => {
            warn!(field, value = v, default, "Non-positive measurement in profile, using default");
            default
        }
        None => default,
    }
}

/// Nutrient totals already consumed today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EatenToday {
    pub energy: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrate: f64,
}

impl EatenToday {
    /// Reads `calories`/`Energy`, `protein`/`Protein`, `fat`/`Fat` and
    /// `carbs`/`Carbohydrate`. The first non-null key wins; anything missing or
    /// non-numeric counts as 0.
    pub fn from_json(input: &Value) -> Self {
        let read = |keys: &[&str]| coerce::number_or(coerce::first_present(input, keys), 0.0);
        Self {
            energy: read(&["calories", "Energy"]),
            protein: read(&["protein", "Protein"]),
            fat: read(&["fat", "Fat"]),
            carbohydrate: read(&["carbs", "Carbohydrate"]),
        }
    }
}
