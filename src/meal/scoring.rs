//! Ranks catalog items against a meal target.
//!
//! The match score is a weighted sum of relative absolute errors over the
//! four tracked macros; lower is better. Items whose energy is far from the
//! target are dropped before ranking.

use serde::{Deserialize, Serialize, Serializer};

use super::targets::MealTarget;
use crate::catalog::{FoodCatalog, FoodItem};
use crate::errors::RecommendError;

pub const DEFAULT_TOP_N: usize = 5;
/// The energy pre-filter only applies to targets above this many kcal.
pub const ENERGY_FILTER_MIN_TARGET: f64 = 100.0;
pub const ENERGY_FILTER_LOWER: f64 = 0.3;
pub const ENERGY_FILTER_UPPER: f64 = 1.7;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub energy: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrate: f64,
}

impl ScoringWeights {
    /// Energy counts double, the macros once each.
    pub const fn standard() -> Self {
        Self { energy: 2.0, protein: 1.0, fat: 1.0, carbohydrate: 1.0 }
    }

    /// Weights used by the recommendation flow: energy first, then protein.
    pub const fn meal_recommendation() -> Self {
        Self { energy: 3.0, protein: 1.5, fat: 0.5, carbohydrate: 0.5 }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::standard()
    }
}

/// Qualitative explanation attached to each recommendation. Serialises as its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    CalorieMatch,
    LightMeal,
    EnergyDense,
}

impl Reason {
    pub fn label(self) -> &'static str {
        match self {
            Reason::CalorieMatch => "Calorie match",
            Reason::LightMeal => "Light meal",
            Reason::EnergyDense => "Energy-dense",
        }
    }

    pub fn classify(item_energy: f64, target_energy: f64, threshold: ReasonThreshold) -> Self {
        let diff = item_energy - target_energy;
        if diff.abs() < threshold.kcal() {
            Reason::CalorieMatch
        } else if diff < 0.0 {
            Reason::LightMeal
        } else {
            Reason::EnergyDense
        }
    }
}

impl Serialize for Reason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// How close (in kcal) an item must be to the target to count as a calorie match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReasonThreshold {
    /// 100 kcal
    #[default]
    Strict,
    /// 150 kcal
    MealRecommendation,
}

impl ReasonThreshold {
    pub fn kcal(self) -> f64 {
        match self {
            ReasonThreshold::Strict => 100.0,
            ReasonThreshold::MealRecommendation => 150.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredFoodItem {
    #[serde(flatten)]
    pub item: FoodItem,
    pub match_score: f64,
    pub reason: Reason,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringEngine {
    pub weights: ScoringWeights,
    pub top_n: usize,
    pub reason_threshold: ReasonThreshold,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringWeights::standard(), DEFAULT_TOP_N)
    }
}

impl ScoringEngine {
    pub fn new(weights: ScoringWeights, top_n: usize) -> Self {
        Self { weights, top_n, reason_threshold: ReasonThreshold::default() }
    }

    pub fn with_reason_threshold(mut self, threshold: ReasonThreshold) -> Self {
        self.reason_threshold = threshold;
        self
    }

    /// Weighted relative error of `item` against `target`. Each error term is
    /// divided by `max(target, 1)` so near-zero targets stay well defined.
    pub fn match_score(&self, item: &FoodItem, target: &MealTarget) -> f64 {
        let term = |value: f64, wanted: f64, weight: f64| weight * (value - wanted).abs() / wanted.max(1.0);
        term(item.energy, target.energy, self.weights.energy)
            + term(item.protein, target.protein, self.weights.protein)
            + term(item.fat, target.fat, self.weights.fat)
            + term(item.carbohydrate, target.carbohydrate, self.weights.carbohydrate)
    }

    /// Whether `item` survives the energy pre-filter for `target`.
    pub fn within_energy_window(item: &FoodItem, target: &MealTarget) -> bool {
        if target.energy <= ENERGY_FILTER_MIN_TARGET {
            return true;
        }
        let lower = target.energy * ENERGY_FILTER_LOWER;
        let upper = target.energy * ENERGY_FILTER_UPPER;
        item.energy >= lower && item.energy <= upper
    }

    /// Scores, filters and ranks the catalog, returning at most `top_n` items
    /// best-first. An empty catalog yields an empty list.
    ///
    /// # Errors
    /// Returns [`RecommendError::NonFinite`] if an item scores NaN or infinity.
    pub fn rank(&self, catalog: &FoodCatalog, target: &MealTarget) -> Result<Vec<ScoredFoodItem>, RecommendError> {
        let mut scored = Vec::with_capacity(catalog.len());
        for item in catalog.items() {
            if !Self::within_energy_window(item, target) {
                continue;
            }
            let score = self.match_score(item, target);
            if !score.is_finite() {
                return Err(RecommendError::non_finite(format!("match_score of '{}'", item.name), score));
            }
            scored.push((item, score));
        }

        // Stable sort: ties keep catalog order.
        scored.sort_by(|a, b| a.1.total_cmp(&b.1));

        Ok(scored
            .into_iter()
            .take(self.top_n)
            .map(|(item, match_score)| ScoredFoodItem {
                item: item.clone(),
                match_score,
                reason: Reason::classify(item.energy, target.energy, self.reason_threshold),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> MealTarget {
        MealTarget { energy: 500.0, protein: 25.0, fat: 15.0, carbohydrate: 60.0 }
    }

    #[test]
    fn test_exact_match_scores_zero() {
        let engine = ScoringEngine::default();
        let item = FoodItem::new("Perfect", 500.0, 25.0, 15.0, 60.0);
        assert_eq!(engine.match_score(&item, &target()), 0.0);
    }

    #[test]
    fn test_score_formula() {
        let engine = ScoringEngine::default();
        let item = FoodItem::new("Off", 600.0, 20.0, 15.0, 90.0);
        // 2*100/500 + 1*5/25 + 0 + 1*30/60
        let expected = 0.4 + 0.2 + 0.5;
        assert!((engine.match_score(&item, &target()) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_zero_target_uses_unit_floor() {
        let engine = ScoringEngine::default();
        let zero = MealTarget::default();
        let item = FoodItem::new("Snack", 0.0, 3.0, 0.0, 0.0);
        assert_eq!(engine.match_score(&item, &zero), 3.0);
        assert_eq!(engine.match_score(&FoodItem::new("Water", 0.0, 0.0, 0.0, 0.0), &zero), 0.0);
    }

    #[test]
    fn test_heavier_weight_increases_sensitivity() {
        let item = FoodItem::new("Protein heavy", 500.0, 50.0, 15.0, 60.0);
        let light = ScoringEngine::new(ScoringWeights { protein: 1.0, ..ScoringWeights::standard() }, 5);
        let heavy = ScoringEngine::new(ScoringWeights { protein: 2.5, ..ScoringWeights::standard() }, 5);
        assert!(heavy.match_score(&item, &target()) > light.match_score(&item, &target()));
    }

    #[test]
    fn test_energy_window() {
        let too_big = FoodItem::new("Too big", 900.0, 25.0, 15.0, 60.0);
        let big = FoodItem::new("Big", 800.0, 25.0, 15.0, 60.0);
        let tiny = FoodItem::new("Tiny", 140.0, 25.0, 15.0, 60.0);
        assert!(!ScoringEngine::within_energy_window(&too_big, &target()));
        assert!(ScoringEngine::within_energy_window(&big, &target()));
        assert!(!ScoringEngine::within_energy_window(&tiny, &target()));

        let small_target = MealTarget { energy: 80.0, ..target() };
        assert!(ScoringEngine::within_energy_window(&too_big, &small_target));
    }

    #[test]
    fn test_filter_excludes_regardless_of_score() {
        // Perfect macros but 900 kcal: dropped. Poor macros at 800 kcal: kept.
        let catalog = FoodCatalog::from_items(vec![
            FoodItem::new("Huge", 900.0, 25.0, 15.0, 60.0),
            FoodItem::new("Large", 800.0, 5.0, 40.0, 10.0),
        ]);
        let ranked = ScoringEngine::default().rank(&catalog, &target()).unwrap();
        let names: Vec<&str> = ranked.iter().map(|s| s.item.name.as_str()).collect();
        assert_eq!(names, vec!["Large"]);
    }

    #[test]
    fn test_rank_orders_ascending_and_truncates() {
        let catalog = FoodCatalog::from_items(vec![
            FoodItem::new("Far", 750.0, 10.0, 30.0, 20.0),
            FoodItem::new("Exact", 500.0, 25.0, 15.0, 60.0),
            FoodItem::new("Close", 520.0, 24.0, 16.0, 58.0),
            FoodItem::new("Middle", 400.0, 20.0, 10.0, 50.0),
        ]);
        let ranked = ScoringEngine::new(ScoringWeights::standard(), 3).rank(&catalog, &target()).unwrap();
        let names: Vec<&str> = ranked.iter().map(|s| s.item.name.as_str()).collect();
        assert_eq!(names, vec!["Exact", "Close", "Middle"]);
        assert!(ranked.windows(2).all(|w| w[0].match_score <= w[1].match_score));
    }

    #[test]
    fn test_reason_labels() {
        assert_eq!(Reason::classify(560.0, 500.0, ReasonThreshold::Strict), Reason::CalorieMatch);
        assert_eq!(Reason::classify(380.0, 500.0, ReasonThreshold::Strict), Reason::LightMeal);
        assert_eq!(Reason::classify(620.0, 500.0, ReasonThreshold::Strict), Reason::EnergyDense);
        assert_eq!(Reason::classify(620.0, 500.0, ReasonThreshold::MealRecommendation), Reason::CalorieMatch);
        assert_eq!(Reason::classify(340.0, 500.0, ReasonThreshold::MealRecommendation), Reason::LightMeal);
        assert_eq!(Reason::EnergyDense.label(), "Energy-dense");
    }

    #[test]
    fn test_scored_item_serialises_reason_label() {
        let scored = ScoredFoodItem {
            item: FoodItem::new("Pho Ga", 450.0, 28.0, 12.0, 55.0),
            match_score: 0.5,
            reason: Reason::CalorieMatch,
        };
        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["reason"], "Calorie match");
        assert_eq!(value["match_score"], 0.5);
        assert_eq!(serde_json::to_value(Reason::LightMeal).unwrap(), "Light meal");
    }

    #[test]
    fn test_rank_attaches_reasons() {
        let catalog = FoodCatalog::from_items(vec![
            FoodItem::new("Light", 300.0, 25.0, 15.0, 60.0),
            FoodItem::new("Match", 510.0, 25.0, 15.0, 60.0),
        ]);
        let ranked = ScoringEngine::default().rank(&catalog, &target()).unwrap();
        assert_eq!(ranked[0].item.name, "Match");
        assert_eq!(ranked[0].reason, Reason::CalorieMatch);
        assert_eq!(ranked[1].reason, Reason::LightMeal);
    }

    #[test]
    fn test_empty_inputs_give_empty_results() {
        let engine = ScoringEngine::default();
        assert!(engine.rank(&FoodCatalog::empty(), &target()).unwrap().is_empty());

        let catalog = FoodCatalog::from_items(vec![FoodItem::new("Feast", 2000.0, 80.0, 90.0, 200.0)]);
        assert!(engine.rank(&catalog, &target()).unwrap().is_empty());
    }

    #[test]
    fn test_random_scores_are_non_negative() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(11);
        let engine = ScoringEngine::new(ScoringWeights::meal_recommendation(), 5);
        for _ in 0..500 {
            let item = FoodItem::new(
                "Random",
                rng.gen_range(0.0..1500.0),
                rng.gen_range(0.0..80.0),
                rng.gen_range(0.0..80.0),
                rng.gen_range(0.0..200.0),
            );
            let target = MealTarget {
                energy: rng.gen_range(0.0..1200.0),
                protein: rng.gen_range(0.0..60.0),
                fat: rng.gen_range(0.0..60.0),
                carbohydrate: rng.gen_range(0.0..150.0),
            };
            let score = engine.match_score(&item, &target);
            assert!(score.is_finite() && score >= 0.0);
        }
    }

    #[test]
    fn test_non_finite_target_is_an_error() {
        let catalog = FoodCatalog::from_items(vec![FoodItem::new("Pho Ga", 450.0, 28.0, 12.0, 55.0)]);
        let target = MealTarget { protein: f64::INFINITY, energy: 50.0, ..target() };
        assert!(matches!(
            ScoringEngine::default().rank(&catalog, &target),
            Err(RecommendError::NonFinite { .. })
        ));
    }
}
