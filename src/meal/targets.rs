use serde::Serialize;

use crate::errors::RecommendError;
use crate::profile::EatenToday;
use crate::requirements::DailyNeeds;

/// Share of the daily needs offered by one meal when nothing has been eaten yet.
pub const FRESH_MEAL_RATIO: f64 = 0.35;
/// Below this many remaining kcal the day is considered covered.
pub const SUFFICIENT_REMAINING_KCAL: f64 = 200.0;
/// Above this many remaining kcal the remainder is spread over several meals.
pub const SPLIT_REMAINING_KCAL: f64 = 800.0;
pub const SPLIT_MEAL_RATIO: f64 = 0.4;

/// Macro amounts the next meal should provide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MealTarget {
    #[serde(rename = "Energy")]
    pub energy: f64,
    #[serde(rename = "Protein")]
    pub protein: f64,
    #[serde(rename = "Fat")]
    pub fat: f64,
    #[serde(rename = "Carbohydrate")]
    pub carbohydrate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetMode {
    /// Nothing eaten yet: a fixed share of the daily needs.
    Fresh,
    /// Part of the day's energy is already covered; `ratio` of the remainder is targeted.
    Remainder { remaining_energy: f64, ratio: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MealPlan {
    Target { target: MealTarget, mode: TargetMode },
    /// Remaining energy is below [`SUFFICIENT_REMAINING_KCAL`]; no meal is needed.
    Sufficient { remaining_energy: f64 },
}

/// Derives the target for the next meal from the daily needs and what has
/// already been eaten.
///
/// # Errors
/// Returns [`RecommendError::NonFinite`] if any of the inputs is NaN or infinite.
pub fn derive_meal_target(
    needs: &DailyNeeds,
    eaten: Option<&EatenToday>,
) -> Result<MealPlan, RecommendError> {
    ensure_finite("needs.energy", needs.energy)?;

    let eaten = match eaten {
        Some(eaten) if eaten.energy != 0.0 => eaten,
        _ => {
            let target = MealTarget {
                energy: needs.energy * FRESH_MEAL_RATIO,
                protein: needs.protein * FRESH_MEAL_RATIO,
                fat: needs.lipid * FRESH_MEAL_RATIO,
                carbohydrate: needs.glucid * FRESH_MEAL_RATIO,
            };
            return Ok(MealPlan::Target { target, mode: TargetMode::Fresh });
        }
    };

    ensure_finite("eaten.energy", eaten.energy)?;
    ensure_finite("eaten.protein", eaten.protein)?;
    ensure_finite("eaten.fat", eaten.fat)?;
    ensure_finite("eaten.carbohydrate", eaten.carbohydrate)?;

    let remaining_energy = needs.energy - eaten.energy;
    if remaining_energy < SUFFICIENT_REMAINING_KCAL {
        return Ok(MealPlan::Sufficient { remaining_energy });
    }

    let ratio = if remaining_energy > SPLIT_REMAINING_KCAL {
        SPLIT_MEAL_RATIO
    } else {
        1.0
    };
    let remaining = |need: f64, consumed: f64| (need - consumed).max(0.0) * ratio;

    let target = MealTarget {
        energy: remaining_energy * ratio,
        protein: remaining(needs.protein, eaten.protein),
        fat: remaining(needs.lipid, eaten.fat),
        carbohydrate: remaining(needs.glucid, eaten.carbohydrate),
    };
    Ok(MealPlan::Target {
        target,
        mode: TargetMode::Remainder { remaining_energy, ratio },
    })
}

fn ensure_finite(field: &str, value: f64) -> Result<(), RecommendError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RecommendError::non_finite(field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn needs() -> DailyNeeds {
        DailyNeeds {
            energy: 2000.0,
            protein: 60.0,
            lipid: 70.0,
            glucid: 300.0,
            ..Default::default()
        }
    }

    fn eaten(energy: f64) -> EatenToday {
        EatenToday { energy, protein: 20.0, fat: 30.0, carbohydrate: 100.0 }
    }

    fn target_of(plan: MealPlan) -> MealTarget {
        match plan {
            MealPlan::Target { target, .. } => target,
            MealPlan::Sufficient { .. } => panic!("expected a meal target, got {:?}", plan),
        }
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_fresh_mode_takes_fixed_share() {
        let plan = derive_meal_target(&needs(), None).unwrap();
        assert!(matches!(plan, MealPlan::Target { mode: TargetMode::Fresh, .. }));
        let target = target_of(plan);
        assert!(approx_eq(target.energy, 700.0));
        assert!(approx_eq(target.protein, 21.0));
        assert!(approx_eq(target.fat, 24.5));
        assert!(approx_eq(target.carbohydrate, 105.0));
    }

    #[test]
    fn test_zero_eaten_energy_is_fresh_mode() {
        let plan = derive_meal_target(&needs(), Some(&eaten(0.0))).unwrap();
        assert!(matches!(plan, MealPlan::Target { mode: TargetMode::Fresh, .. }));
    }

    #[test]
    fn test_small_remainder_is_sufficient() {
        let plan = derive_meal_target(&needs(), Some(&eaten(1850.0))).unwrap();
        assert_eq!(plan, MealPlan::Sufficient { remaining_energy: 150.0 });
    }

    #[test]
    fn test_exactly_threshold_still_gets_a_meal() {
        let target = target_of(derive_meal_target(&needs(), Some(&eaten(1800.0))).unwrap());
        assert!(approx_eq(target.energy, 200.0));
    }

    #[test]
    fn test_large_remainder_is_split() {
        let plan = derive_meal_target(&needs(), Some(&eaten(1100.0))).unwrap();
        match plan {
            MealPlan::Target { target, mode } => {
                assert_eq!(mode, TargetMode::Remainder { remaining_energy: 900.0, ratio: 0.4 });
                assert!(approx_eq(target.energy, 360.0));
                assert!(approx_eq(target.protein, 16.0));
                assert!(approx_eq(target.fat, 16.0));
                assert!(approx_eq(target.carbohydrate, 80.0));
            }
            other => panic!("unexpected plan {:?}", other),
        }
    }

    #[test]
    fn test_moderate_remainder_offered_in_full() {
        let target = target_of(derive_meal_target(&needs(), Some(&eaten(1500.0))).unwrap());
        assert!(approx_eq(target.energy, 500.0));
        assert!(approx_eq(target.protein, 40.0));
        assert!(approx_eq(target.carbohydrate, 200.0));
    }

    #[test]
    fn test_overeaten_macros_clamp_to_zero() {
        let heavy = EatenToday { energy: 1500.0, protein: 90.0, fat: 120.0, carbohydrate: 10.0 };
        let target = target_of(derive_meal_target(&needs(), Some(&heavy)).unwrap());
        assert_eq!(target.protein, 0.0);
        assert_eq!(target.fat, 0.0);
        assert!(approx_eq(target.carbohydrate, 290.0));
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        let bad = EatenToday { energy: f64::NAN, ..eaten(1.0) };
        assert!(matches!(
            derive_meal_target(&needs(), Some(&bad)),
            Err(RecommendError::NonFinite { .. })
        ));
    }
}
