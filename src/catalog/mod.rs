//! Immutable, deduplicated food catalog.

pub mod builtin;
pub mod data_loader;
pub mod food_item;
pub mod name_matcher;

use std::collections::HashSet;
use tracing::debug;

pub use builtin::builtin_catalog;
pub use data_loader::{load_catalog_file, parse_catalog_str, CatalogFormat};
pub use food_item::{FoodItem, RawFoodRecord};

/// Food records cleaned once at construction and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodCatalog {
    items: Vec<FoodItem>,
}

impl FoodCatalog {
    /// Cleans raw records: names are trimmed, rows without a name are skipped,
    /// exact (case-sensitive) duplicate names keep their first occurrence, and
    /// unparseable nutrients become 0. Numeric or boolean names are stringified;
    /// rows whose name is missing, null, blank or a JSON container are dropped.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RawFoodRecord>,
    {
        let mut seen = HashSet::new();
        let mut items = Vec::new();
        let mut skipped = 0usize;
        let mut duplicates = 0usize;

        for raw in records {
            let Some(item) = FoodItem::from_raw(&raw) else {
                skipped += 1;
                continue;
            };
            if !seen.insert(item.name.clone()) {
                duplicates += 1;
                continue;
            }
            items.push(item);
        }

        debug!(items = items.len(), duplicates, skipped, "Food catalog built");
        Self { items }
    }

    /// Wraps already-clean items, still dropping duplicate names.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = FoodItem>,
    {
        let mut seen = HashSet::new();
        let items = items
            .into_iter()
            .filter(|item| seen.insert(item.name.clone()))
            .collect();
        Self { items }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up a dish by free-text label; see [`name_matcher::match_label`].
    pub fn find_by_label(&self, label: &str) -> Option<&FoodItem> {
        name_matcher::match_label(label, &self.items)
    }
}
