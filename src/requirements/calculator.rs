use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use super::age_band::AgeBand;
use super::table::{self, Nutrient};
use crate::errors::RecommendError;
use crate::profile::{ActivityLevel, Gender, Profile};

/// kcal per gram of fat.
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Resolved daily requirements for one profile.
///
/// Energy is kcal, protein/lipid/glucid/fiber/MUFA+PUFA are grams, vitamin A
/// is mcg and the remaining minerals and vitamin C are mg.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DailyNeeds {
    pub energy: f64,
    pub protein: f64,
    pub lipid: f64,
    pub mufa_pufa: f64,
    pub glucid: f64,
    pub fiber: f64,
    pub calcium: f64,
    pub iron: f64,
    pub zinc: f64,
    pub vitamin_a: f64,
    pub vitamin_c: f64,
    pub magnesium: f64,
    pub sodium: f64,
    pub potassium: f64,
    pub beta_carotene: f64,
}

impl DailyNeeds {
    /// Nutrient name to amount, including the `Fat`/`Carbohydrate` aliases of `Lipid`/`Glucid`.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("Beta-carotene", self.beta_carotene),
            ("Calcium", self.calcium),
            ("Carbohydrate", self.glucid),
            ("Energy", self.energy),
            ("Fat", self.lipid),
            ("Fiber", self.fiber),
            ("Glucid", self.glucid),
            ("Iron", self.iron),
            ("Lipid", self.lipid),
            ("MUFA+PUFA", self.mufa_pufa),
            ("Magnesium", self.magnesium),
            ("Potassium", self.potassium),
            ("Protein", self.protein),
            ("Sodium", self.sodium),
            ("Vitamin A", self.vitamin_a),
            ("Vitamin C", self.vitamin_c),
            ("Zinc", self.zinc),
        ])
    }
}

impl Serialize for DailyNeeds {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}

/// Picks the energy reference for the activity level, falling back to the
/// `Medium` column when the requested cell has no published value.
pub fn select_energy(gender: Gender, activity: ActivityLevel, band: AgeBand) -> f64 {
    let energy = table::energy_lookup(gender, activity, band);
    if energy == 0.0 {
        table::energy_lookup(gender, ActivityLevel::Medium, band)
    } else {
        energy
    }
}

/// Computes the full daily requirement map for a profile.
///
/// # Errors
/// Returns [`RecommendError::NegativeAge`] if the profile age is negative, or
/// [`RecommendError::NonFinite`] if the body weight is not a finite number.
pub fn calculate_daily_needs(profile: &Profile) -> Result<DailyNeeds, RecommendError> {
    if !profile.weight_kg.is_finite() {
        return Err(RecommendError::non_finite("weight_kg", profile.weight_kg));
    }
    let band = AgeBand::from_months(profile.age_months)?;
    let gender = profile.gender;
    let direct = |nutrient: Nutrient| table::lookup(nutrient, gender, band).resolve();

    let energy = select_energy(gender, profile.activity_level, band);
    let energy_share_grams = |pct: f64| energy * pct / 100.0 / KCAL_PER_GRAM_FAT;

    Ok(DailyNeeds {
        energy,
        protein: direct(Nutrient::Protein) * profile.weight_kg.max(0.0),
        lipid: energy_share_grams(direct(Nutrient::Lipid)),
        mufa_pufa: energy_share_grams(direct(Nutrient::MufaPufa)),
        glucid: direct(Nutrient::Glucid),
        fiber: direct(Nutrient::Fiber),
        calcium: direct(Nutrient::Calcium),
        iron: direct(Nutrient::Iron),
        zinc: direct(Nutrient::Zinc),
        vitamin_a: direct(Nutrient::VitaminA),
        vitamin_c: direct(Nutrient::VitaminC),
        magnesium: direct(Nutrient::Magnesium),
        sodium: direct(Nutrient::Sodium),
        potassium: direct(Nutrient::Potassium),
        beta_carotene: 0.0,
    })
}
