//! Caller-facing record shapes.
//!
//! Every nutrition record carries both the catalog nutrient names (`Energy`,
//! `Carbohydrate`, ...) and the lowercase aliases front ends read
//! (`calories`, `carbs`, ...).

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::catalog::FoodItem;
use crate::meal::ScoredFoodItem;

pub const SUFFICIENT_NAME: &str = "Daily energy already covered";
pub const SUFFICIENT_REASON: &str = "You have already eaten enough today!";
pub const SUFFICIENT_IMAGE: &str = "https://cdn-icons-png.flaticon.com/512/2738/2738805.png";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodRecord {
    pub name: String,
    pub energy: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrate: f64,
    pub fiber: f64,
    pub image: Option<String>,
    pub reason: Option<String>,
    pub match_score: Option<f64>,
}

impl FoodRecord {
    pub fn from_item(item: &FoodItem) -> Self {
        Self {
            name: item.name.clone(),
            energy: item.energy,
            protein: item.protein,
            fat: item.fat,
            carbohydrate: item.carbohydrate,
            fiber: item.fiber,
            image: item.image.clone(),
            reason: None,
            match_score: None,
        }
    }

    pub fn from_scored(scored: &ScoredFoodItem) -> Self {
        Self {
            reason: Some(scored.reason.label().to_string()),
            match_score: Some(scored.match_score),
            ..Self::from_item(&scored.item)
        }
    }

    /// Zero-valued nutrition for a label that is not in the catalog.
    pub fn not_found(label: &str) -> Self {
        Self { name: label.trim().to_string(), ..Self::default() }
    }

    /// The single record returned instead of a ranking when the day is covered.
    pub fn sufficiency_sentinel() -> Self {
        Self {
            name: SUFFICIENT_NAME.to_string(),
            image: Some(SUFFICIENT_IMAGE.to_string()),
            reason: Some(SUFFICIENT_REASON.to_string()),
            match_score: Some(0.0),
            ..Self::default()
        }
    }
}

impl Serialize for FoodRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("Energy", &self.energy)?;
        map.serialize_entry("Protein", &self.protein)?;
        map.serialize_entry("Fat", &self.fat)?;
        map.serialize_entry("Carbohydrate", &self.carbohydrate)?;
        map.serialize_entry("Fiber", &self.fiber)?;
        map.serialize_entry("calories", &self.energy)?;
        map.serialize_entry("protein", &self.protein)?;
        map.serialize_entry("fat", &self.fat)?;
        map.serialize_entry("carbs", &self.carbohydrate)?;
        map.serialize_entry("fiber", &self.fiber)?;
        if let Some(image) = &self.image {
            map.serialize_entry("image", image)?;
        }
        if let Some(reason) = &self.reason {
            map.serialize_entry("reason", reason)?;
        }
        if let Some(score) = &self.match_score {
            map.serialize_entry("match_score", score)?;
        }
        map.end()
    }
}

/// One classifier output: a dish label and its confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub name: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedPrediction {
    pub name: String,
    pub confidence: f64,
    /// Whether the label resolved to a catalog entry.
    pub matched: bool,
    pub nutrition: FoodRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionReport {
    pub predictions: Vec<AnnotatedPrediction>,
    pub best_match: Option<AnnotatedPrediction>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meal::Reason;
    use serde_json::json;

    #[test]
    fn test_scored_record_has_aliases() {
        let scored = ScoredFoodItem {
            item: FoodItem::new("Pho Ga", 450.0, 28.0, 12.0, 55.0),
            match_score: 0.25,
            reason: Reason::CalorieMatch,
        };
        let value = serde_json::to_value(FoodRecord::from_scored(&scored)).unwrap();
        assert_eq!(value["name"], "Pho Ga");
        assert_eq!(value["Energy"], 450.0);
        assert_eq!(value["calories"], 450.0);
        assert_eq!(value["Carbohydrate"], 55.0);
        assert_eq!(value["carbs"], 55.0);
        assert_eq!(value["protein"], 28.0);
        assert_eq!(value["fat"], 12.0);
        assert_eq!(value["fiber"], 0.0);
        assert_eq!(value["reason"], "Calorie match");
        assert_eq!(value["match_score"], 0.25);
        assert!(value.get("image").is_none());
    }

    #[test]
    fn test_sufficiency_sentinel_shape() {
        let value = serde_json::to_value(FoodRecord::sufficiency_sentinel()).unwrap();
        assert_eq!(value["calories"], 0.0);
        assert_eq!(value["Energy"], 0.0);
        assert_eq!(value["match_score"], 0.0);
        assert_eq!(value["reason"], SUFFICIENT_REASON);
        assert_eq!(value["image"], SUFFICIENT_IMAGE);
    }

    #[test]
    fn test_not_found_is_zero_valued() {
        let record = FoodRecord::not_found(" Mystery Dish ");
        assert_eq!(record.name, "Mystery Dish");
        assert_eq!(record.energy, 0.0);
        let value = serde_json::to_value(record).unwrap();
        assert!(value.get("reason").is_none());
        assert!(value.get("match_score").is_none());
    }

    #[test]
    fn test_prediction_report_uses_camel_case() {
        let report = PredictionReport { predictions: Vec::new(), best_match: None };
        assert_eq!(serde_json::to_value(report).unwrap(), json!({ "predictions": [], "bestMatch": null }));
    }
}
