use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce;

/// A catalog row as supplied by the ingestion layer, before any cleanup.
///
/// Numeric fields are kept as raw JSON values so numbers encoded as strings,
/// blanks and nulls can all be coerced in one place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFoodRecord {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(rename = "Energy", default)]
    pub energy: Option<Value>,
    #[serde(rename = "Protein", default)]
    pub protein: Option<Value>,
    #[serde(rename = "Fat", default)]
    pub fat: Option<Value>,
    #[serde(rename = "Carbohydrate", default)]
    pub carbohydrate: Option<Value>,
    #[serde(rename = "Fiber", default)]
    pub fiber: Option<Value>,
    #[serde(default)]
    pub image: Option<Value>,
}

/// A cleaned catalog entry. Nutrients are per serving.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodItem {
    pub name: String,
    #[serde(rename = "Energy")]
    pub energy: f64,
    #[serde(rename = "Protein")]
    pub protein: f64,
    #[serde(rename = "Fat")]
    pub fat: f64,
    #[serde(rename = "Carbohydrate")]
    pub carbohydrate: f64,
    #[serde(rename = "Fiber")]
    pub fiber: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip)]
    pub search_name: String,
}

impl FoodItem {
    /// Builds an item with the given macros and no image.
    pub fn new(name: &str, energy: f64, protein: f64, fat: f64, carbohydrate: f64) -> Self {
        let name = name.trim().to_string();
        Self {
            search_name: name.to_lowercase(),
            name,
            energy,
            protein,
            fat,
            carbohydrate,
            fiber: 0.0,
            image: None,
        }
    }

    /// Cleans a raw record. Returns `None` when the record has no usable name.
    pub fn from_raw(raw: &RawFoodRecord) -> Option<Self> {
        let name = coerce::text(raw.name.as_ref()).filter(|n| !n.is_empty())?;
        let nutrient = |value: &Option<Value>| coerce::number_or(value.as_ref(), 0.0);
        let image = coerce::text(raw.image.as_ref()).filter(|i| !i.is_empty());

        Some(Self {
            search_name: name.to_lowercase(),
            energy: nutrient(&raw.energy),
            protein: nutrient(&raw.protein),
            fat: nutrient(&raw.fat),
            carbohydrate: nutrient(&raw.carbohydrate),
            fiber: nutrient(&raw.fiber),
            image,
            name,
        })
    }
}
