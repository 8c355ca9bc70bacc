//! Orchestrates needs, meal targets and ranking behind a never-failing API.

use serde_json::Value;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, error, info, warn};

use crate::catalog::{FoodCatalog, FoodItem};
use crate::config::RecommenderConfig;
use crate::errors::RecommendError;
use crate::meal::{derive_meal_target, MealPlan, ReasonThreshold, ScoredFoodItem, ScoringEngine, TargetMode};
use crate::output::{AnnotatedPrediction, FoodRecord, Prediction, PredictionReport};
use crate::profile::{EatenToday, Profile, DEFAULT_AGE_YEARS, MONTHS_PER_YEAR};
use crate::requirements::{calculate_daily_needs, DailyNeeds};

/// Outcome of a recommendation request.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendations {
    /// Best-first list; empty when nothing fits or scoring failed.
    Ranked(Vec<ScoredFoodItem>),
    /// The day's energy is already covered.
    Sufficient,
}

impl Recommendations {
    pub fn into_records(self) -> Vec<FoodRecord> {
        match self {
            Recommendations::Ranked(items) => items.iter().map(FoodRecord::from_scored).collect(),
            Recommendations::Sufficient => vec![FoodRecord::sufficiency_sentinel()],
        }
    }
}

pub struct Recommender {
    catalog: RwLock<Arc<FoodCatalog>>,
    engine: ScoringEngine,
}

impl Recommender {
    pub fn new(catalog: FoodCatalog, config: &RecommenderConfig) -> Self {
        info!(items = catalog.len(), top_n = config.top_n, "Recommender initialised");
        Self {
            catalog: RwLock::new(Arc::new(catalog)),
            engine: ScoringEngine::new(config.weights, config.top_n)
                .with_reason_threshold(ReasonThreshold::MealRecommendation),
        }
    }

    pub fn with_defaults(catalog: FoodCatalog) -> Self {
        Self::new(catalog, &RecommenderConfig::default())
    }

    /// Current catalog snapshot. Calls in flight keep the snapshot they started with.
    pub fn catalog(&self) -> Arc<FoodCatalog> {
        let guard = self.catalog.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replaces the catalog atomically.
    pub fn reload_catalog(&self, catalog: FoodCatalog) {
        let items = catalog.len();
        let mut guard = self.catalog.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(catalog);
        info!(items, "Food catalog reloaded");
    }

    /// Daily needs for a profile. Never fails: an invalid age is replaced by
    /// the default age and a non-finite weight by the default weight.
    pub fn compute_daily_needs(&self, profile: &Profile) -> DailyNeeds {
        match calculate_daily_needs(profile) {
            Ok(needs) => needs,
            Err(e) => {
                warn!(error = %e, "Invalid profile, recomputing with defaults");
                let fallback = sanitise_profile(profile);
                calculate_daily_needs(&fallback).unwrap_or_default()
            }
        }
    }

    /// [`compute_daily_needs`](Self::compute_daily_needs) on a raw caller payload.
    pub fn daily_needs_from_json(&self, profile: &Value) -> DailyNeeds {
        self.compute_daily_needs(&Profile::from_json(profile))
    }

    /// Ranked recommendations for the next meal. Internal failures are logged
    /// and surface as an empty ranking.
    pub fn recommendations(&self, profile: &Profile, eaten: Option<&EatenToday>) -> Recommendations {
        match self.try_recommendations(profile, eaten) {
            Ok(recommendations) => recommendations,
            Err(e) => {
                error!(error = %e, "Recommendation failed");
                Recommendations::Ranked(Vec::new())
            }
        }
    }

    /// Full caller flow: normalise the payloads, recommend, and render records.
    pub fn recommendations_from_json(&self, profile: &Value, eaten: Option<&Value>) -> Vec<FoodRecord> {
        let profile = Profile::from_json(profile);
        let eaten = eaten.filter(|v| !v.is_null()).map(EatenToday::from_json);
        self.recommendations(&profile, eaten.as_ref()).into_records()
    }

    fn try_recommendations(
        &self,
        profile: &Profile,
        eaten: Option<&EatenToday>,
    ) -> Result<Recommendations, RecommendError> {
        let needs = self.compute_daily_needs(profile);

        let (target, mode) = match derive_meal_target(&needs, eaten)? {
            MealPlan::Sufficient { remaining_energy } => {
                info!(remaining_energy, "Daily energy already covered");
                return Ok(Recommendations::Sufficient);
            }
            MealPlan::Target { target, mode } => (target, mode),
        };
        match mode {
            TargetMode::Fresh => debug!("Nothing eaten yet, targeting a standard meal"),
            TargetMode::Remainder { remaining_energy, ratio } => {
                debug!(remaining_energy, ratio, "Targeting the remainder of the day")
            }
        }
        info!(target_energy = target.energy, "Meal target derived");

        let catalog = self.catalog();
        let ranked = self.engine.rank(&catalog, &target)?;
        debug!(candidates = catalog.len(), returned = ranked.len(), "Catalog ranked");
        Ok(Recommendations::Ranked(ranked))
    }

    /// Nutrition facts for a predicted dish label, without scoring.
    pub fn lookup_nutrition(&self, label: &str) -> Option<FoodItem> {
        let found = self.catalog().find_by_label(label).cloned();
        if found.is_none() {
            debug!(label, "No catalog entry for label");
        }
        found
    }

    /// Like [`lookup_nutrition`](Self::lookup_nutrition) but always returns a
    /// record; unmatched labels get zero-valued nutrition.
    pub fn lookup_record(&self, label: &str) -> FoodRecord {
        self.lookup_nutrition(label)
            .map(|item| FoodRecord::from_item(&item))
            .unwrap_or_else(|| FoodRecord::not_found(label))
    }

    /// Attaches nutrition facts to each classifier prediction, in order. The
    /// first prediction is reported as the best match.
    pub fn annotate_predictions(&self, predictions: &[Prediction]) -> PredictionReport {
        let catalog = self.catalog();
        let annotated: Vec<AnnotatedPrediction> = predictions
            .iter()
            .map(|prediction| {
                let item = catalog.find_by_label(&prediction.name);
                AnnotatedPrediction {
                    name: prediction.name.clone(),
                    confidence: prediction.confidence,
                    matched: item.is_some(),
                    nutrition: item
                        .map(FoodRecord::from_item)
                        .unwrap_or_else(|| FoodRecord::not_found(&prediction.name)),
                }
            })
            .collect();
        PredictionReport {
            best_match: annotated.first().cloned(),
            predictions: annotated,
        }
    }
}

fn sanitise_profile(profile: &Profile) -> Profile {
    let mut fixed = *profile;
    if fixed.age_months < 0 {
        fixed.age_months = DEFAULT_AGE_YEARS * MONTHS_PER_YEAR;
    }
    if !fixed.weight_kg.is_finite() || fixed.weight_kg <= 0.0 {
        fixed.weight_kg = Profile::default().weight_kg;
    }
    fixed
}
