//! Per-slot food selection: split the slot budget across its categories,
//! rank each category's foods by constitution fit, and apportion servings.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::catalog::Catalog;
use super::constitution::{compatibility_score, is_compatible, Constitution};
use super::slots::{fallback_items, slot_categories};
use crate::foods::FoodItem;

/// One selected line of a meal. Fallback entries carry no rasa/category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedFood {
    pub name: String,
    pub quantity: String,
    pub calories: i64,
    pub virya: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rasa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Selection thresholds, named so tests can exercise the boundaries.
#[derive(Debug, Clone, Copy)]
pub struct SelectionLimits {
    /// Entries considered per category after ranking.
    pub max_per_category: usize,
    /// Serving cap per entry.
    pub max_servings: f64,
    /// Entries below half a serving are dropped.
    pub min_servings: f64,
}

impl Default for SelectionLimits {
    fn default() -> Self {
        Self {
            max_per_category: 5,
            max_servings: 3.0,
            min_servings: 0.5,
        }
    }
}

/// Select foods for one slot. Every category contributes independently from
/// its share of the budget; if the whole slot comes up empty the static
/// fallback table guarantees at least one entry.
pub fn select_foods(
    catalog: &dyn Catalog,
    constitution: Constitution,
    slot_name: &str,
    slot_calories: f64,
    limits: SelectionLimits,
) -> Vec<SelectedFood> {
    let mut selected = Vec::new();
    for &(category, weight) in slot_categories(slot_name) {
        let category_budget = slot_calories * weight;
        selected.extend(select_from_category(
            catalog,
            constitution,
            category,
            category_budget,
            limits,
        ));
    }

    if selected.is_empty() {
        return fallback_items(slot_name, slot_calories);
    }
    selected
}

/// Rank one category's foods and fill its budget. Lookup errors are absorbed
/// as an empty selection; the slot-level fallback covers them.
fn select_from_category(
    catalog: &dyn Catalog,
    constitution: Constitution,
    category: &str,
    budget: f64,
    limits: SelectionLimits,
) -> Vec<SelectedFood> {
    let foods = match catalog.by_category(category) {
        Ok(foods) => foods,
        Err(e) => {
            warn!(%category, error = %e, "catalog lookup failed, skipping category");
            return Vec::new();
        }
    };

    let mut pool: Vec<&FoodItem> = foods
        .iter()
        .filter(|f| is_compatible(f, constitution))
        .collect();
    // Nothing compatible: better to serve the category than skip it.
    if pool.is_empty() {
        pool = foods.iter().collect();
    }

    // Stable sort keeps catalog order for equal scores.
    pool.sort_by_key(|f| std::cmp::Reverse(compatibility_score(f, constitution)));

    let mut remaining = budget;
    let mut selected = Vec::new();
    for food in pool.into_iter().take(limits.max_per_category) {
        if remaining <= 0.0 {
            break;
        }
        if food.calories <= 0.0 {
            // Unportionable; skip rather than divide by zero.
            continue;
        }
        let quantity = (remaining / food.calories).min(limits.max_servings);
        if quantity < limits.min_servings {
            continue;
        }
        let calories = (food.calories * quantity).round() as i64;
        selected.push(SelectedFood {
            name: food.name.clone(),
            quantity: format!("{:.1} {}", quantity, food.serving),
            calories,
            virya: food.virya.clone(),
            rasa: Some(food.rasa.clone()),
            category: Some(food.category.clone()),
        });
        remaining -= calories as f64;
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::catalog::test_support::{food, FailingCatalog};
    use crate::chart::catalog::CatalogSnapshot;

    fn vata_grain(name: &str, calories: f64) -> FoodItem {
        food(name, "Grains", calories, "Hot", "Heavy", ["↓", "=", "↑"])
    }

    #[test]
    fn empty_catalog_resolves_via_fallback() {
        let catalog = CatalogSnapshot::new(vec![]);
        for slot in crate::chart::slots::plan_slots() {
            let items = select_foods(
                &catalog,
                Constitution::Vata,
                slot.name,
                slot.calories_for(2000.0),
                SelectionLimits::default(),
            );
            assert!(!items.is_empty(), "slot {} produced no items", slot.name);
        }
    }

    #[test]
    fn catalog_errors_are_absorbed_by_fallback() {
        let items = select_foods(
            &FailingCatalog,
            Constitution::Pitta,
            "Breakfast",
            500.0,
            SelectionLimits::default(),
        );
        assert_eq!(items[0].name, "Oatmeal with Fruits");
    }

    #[test]
    fn incompatible_category_falls_back_to_full_set() {
        // All-hot fruits are incompatible with Pitta, but the category is
        // non-empty so it must still contribute.
        let catalog = CatalogSnapshot::new(vec![
            food("Dates", "Fruits", 280.0, "Hot", "Heavy", ["↓", "↑", "↑"]),
            food("Jackfruit", "Fruits", 95.0, "Hot", "Heavy", ["↑", "↑", "↑"]),
        ]);
        let items = select_from_category(
            &catalog,
            Constitution::Pitta,
            "Fruits",
            200.0,
            SelectionLimits::default(),
        );
        assert!(!items.is_empty());
    }

    #[test]
    fn higher_scoring_foods_come_first() {
        // Same category; the pacifying food outscores the neutral one even
        // though it is listed second.
        let catalog = CatalogSnapshot::new(vec![
            food("Plain Rice", "Grains", 130.0, "Hot", "Heavy", ["=", "=", "↑"]),
            food("Oats Porridge", "Grains", 150.0, "Hot", "Heavy", ["↓", "=", "↑"]),
        ]);
        let items = select_from_category(
            &catalog,
            Constitution::Vata,
            "Grains",
            200.0,
            SelectionLimits::default(),
        );
        assert_eq!(items[0].name, "Oats Porridge");
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog = CatalogSnapshot::new(vec![
            vata_grain("First Grain", 150.0),
            vata_grain("Second Grain", 150.0),
        ]);
        let items = select_from_category(
            &catalog,
            Constitution::Vata,
            "Grains",
            600.0,
            SelectionLimits::default(),
        );
        assert_eq!(items[0].name, "First Grain");
        assert_eq!(items[1].name, "Second Grain");
    }

    #[test]
    fn servings_are_capped_at_three() {
        let catalog = CatalogSnapshot::new(vec![vata_grain("Rice", 100.0)]);
        let items = select_from_category(
            &catalog,
            Constitution::Vata,
            "Grains",
            1000.0,
            SelectionLimits::default(),
        );
        assert_eq!(items[0].quantity, "3.0 100g");
        assert_eq!(items[0].calories, 300);
    }

    #[test]
    fn sub_half_servings_are_dropped() {
        // Budget buys under half a serving, so the entry is skipped entirely.
        let catalog = CatalogSnapshot::new(vec![vata_grain("Dense Laddu", 500.0)]);
        let items = select_from_category(
            &catalog,
            Constitution::Vata,
            "Grains",
            100.0,
            SelectionLimits::default(),
        );
        assert!(items.is_empty());
    }

    #[test]
    fn zero_calorie_foods_are_skipped() {
        let catalog = CatalogSnapshot::new(vec![
            vata_grain("Air Grain", 0.0),
            vata_grain("Rice", 130.0),
        ]);
        let items = select_from_category(
            &catalog,
            Constitution::Vata,
            "Grains",
            200.0,
            SelectionLimits::default(),
        );
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Rice");
    }

    #[test]
    fn at_most_five_entries_per_category() {
        let catalog = CatalogSnapshot::new(
            (0..8)
                .map(|i| vata_grain(&format!("Grain {i}"), 50.0))
                .collect(),
        );
        let items = select_from_category(
            &catalog,
            Constitution::Vata,
            "Grains",
            10_000.0,
            SelectionLimits::default(),
        );
        assert_eq!(items.len(), 5);
    }

    #[test]
    fn selection_stops_once_budget_is_spent() {
        let catalog = CatalogSnapshot::new(vec![
            vata_grain("Rice", 200.0),
            vata_grain("Wheat", 200.0),
        ]);
        let items = select_from_category(
            &catalog,
            Constitution::Vata,
            "Grains",
            200.0,
            SelectionLimits::default(),
        );
        // First food consumes the whole budget at one serving.
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].calories, 200);
    }

    #[test]
    fn custom_limits_are_honored() {
        let catalog = CatalogSnapshot::new(vec![
            vata_grain("A", 100.0),
            vata_grain("B", 100.0),
            vata_grain("C", 100.0),
        ]);
        let limits = SelectionLimits {
            max_per_category: 1,
            max_servings: 1.0,
            min_servings: 0.5,
        };
        let items = select_from_category(&catalog, Constitution::Vata, "Grains", 1000.0, limits);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].calories, 100);
    }

    #[test]
    fn breakfast_splits_budget_across_grain_fruit_beverage() {
        let catalog = CatalogSnapshot::new(vec![
            vata_grain("Oatmeal", 150.0),
            food("Banana", "Fruits", 89.0, "Cold", "Heavy", ["↓", "↓", "↑"]),
            food("Warm Milk", "Beverages", 60.0, "Hot", "Heavy", ["↓", "=", "↑"]),
        ]);
        let items = select_foods(
            &catalog,
            Constitution::Vata,
            "Breakfast",
            500.0,
            SelectionLimits::default(),
        );
        // Grains get 300, fruits 150, beverages 50; each category is bounded
        // by the serving caps independently.
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].name, "Oatmeal");
        assert_eq!(items[0].calories, 300); // 2.0 servings of 150
        assert_eq!(items[1].name, "Banana");
        assert_eq!(items[2].name, "Warm Milk");
    }
}
