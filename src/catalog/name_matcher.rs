//! Resolves a predicted dish label to a catalog entry.
//!
//! Matching is exact on the lowercased, trimmed name first, then on the
//! accent-folded form, so "Ca Kho To" finds "Cá Kho Tộ".

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::food_item::FoodItem;

/// Lowercased, trimmed form used for exact matching.
pub fn search_key(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Canonical decomposition with combining marks dropped. `đ`/`Đ` have no
/// decomposition and are folded to `d`/`D` explicitly.
pub fn strip_accents(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            'đ' => 'd',
            'Đ' => 'D',
            other => other,
        })
        .collect()
}

/// First item whose name matches `label`, or `None`.
pub fn match_label<'a>(label: &str, items: &'a [FoodItem]) -> Option<&'a FoodItem> {
    let key = search_key(label);
    if key.is_empty() {
        return None;
    }
    if let Some(item) = items.iter().find(|item| item.search_name == key) {
        return Some(item);
    }
    let folded = strip_accents(&key);
    items
        .iter()
        .find(|item| strip_accents(&item.search_name) == folded)
}
