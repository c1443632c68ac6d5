//! The fixed day template and the static per-slot tables the selector draws
//! from: category weights and the hard-coded fallback meals.

use super::selector::SelectedFood;

/// How a slot's calorie budget is derived from the daily target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotBudget {
    /// Share of the daily target. The six timed slots sum to 1.0.
    Fraction(f64),
    /// Flat kcal budget, independent of the target.
    Fixed(f64),
}

#[derive(Debug, Clone, Copy)]
pub struct MealSlot {
    pub name: &'static str,
    pub time: &'static str,
    pub budget: SlotBudget,
}

impl MealSlot {
    pub fn calories_for(&self, target_calories: f64) -> f64 {
        match self.budget {
            SlotBudget::Fraction(f) => target_calories * f,
            SlotBudget::Fixed(kcal) => kcal,
        }
    }
}

pub const BEDTIME_CALORIES: f64 = 50.0;

/// The day template, constitution-independent. Bedtime's flat 50 kcal is
/// additive beyond the six timed slots' fraction pool.
pub fn plan_slots() -> &'static [MealSlot] {
    &[
        MealSlot { name: "Early Morning", time: "6:00 AM", budget: SlotBudget::Fraction(0.05) },
        MealSlot { name: "Breakfast", time: "8:00 AM", budget: SlotBudget::Fraction(0.25) },
        MealSlot { name: "Mid-Morning Snack", time: "11:00 AM", budget: SlotBudget::Fraction(0.10) },
        MealSlot { name: "Lunch", time: "1:00 PM", budget: SlotBudget::Fraction(0.35) },
        MealSlot { name: "Evening Snack", time: "4:00 PM", budget: SlotBudget::Fraction(0.10) },
        MealSlot { name: "Dinner", time: "7:00 PM", budget: SlotBudget::Fraction(0.15) },
        MealSlot { name: "Bedtime", time: "9:00 PM", budget: SlotBudget::Fixed(BEDTIME_CALORIES) },
    ]
}

/// Which catalog categories feed a slot, and how the slot's budget is split
/// between them. Unknown slot names get a generic grains-and-vegetables split.
pub fn slot_categories(slot_name: &str) -> &'static [(&'static str, f64)] {
    match slot_name {
        "Early Morning" => &[("Beverages", 0.3), ("Nuts", 0.7)],
        "Breakfast" => &[("Grains", 0.6), ("Fruits", 0.3), ("Beverages", 0.1)],
        "Mid-Morning Snack" => &[("Beverages", 0.2), ("Nuts", 0.5), ("Fruits", 0.3)],
        "Lunch" => &[
            ("Grains", 0.4),
            ("Legumes", 0.3),
            ("Vegetables", 0.2),
            ("Dairy", 0.1),
        ],
        "Evening Snack" => &[("Beverages", 0.3), ("Nuts", 0.4), ("Fruits", 0.3)],
        "Dinner" => &[("Grains", 0.5), ("Vegetables", 0.3), ("Dairy", 0.2)],
        "Bedtime" => &[("Beverages", 0.7), ("Dairy", 0.3)],
        _ => &[("Grains", 0.6), ("Vegetables", 0.4)],
    }
}

enum FallbackCalories {
    Fixed(i64),
    /// Share of the slot budget, truncated. Some entries scale and some are
    /// literals; both behaviors are kept as observed.
    OfBudget(f64),
}

struct FallbackEntry {
    name: &'static str,
    quantity: &'static str,
    calories: FallbackCalories,
    virya: &'static str,
}

impl FallbackEntry {
    fn resolve(&self, budget: f64) -> SelectedFood {
        let calories = match self.calories {
            FallbackCalories::Fixed(kcal) => kcal,
            FallbackCalories::OfBudget(share) => (budget * share) as i64,
        };
        SelectedFood {
            name: self.name.to_string(),
            quantity: self.quantity.to_string(),
            calories,
            virya: self.virya.to_string(),
            rasa: None,
            category: None,
        }
    }
}

/// Static fallback meals used when a slot selects nothing from the catalog.
/// Guarantees every slot yields at least one entry.
pub fn fallback_items(slot_name: &str, budget: f64) -> Vec<SelectedFood> {
    use FallbackCalories::{Fixed, OfBudget};

    let entries: &[FallbackEntry] = match slot_name {
        "Early Morning" => &[
            FallbackEntry { name: "Warm Water with Lemon", quantity: "1 glass", calories: Fixed(5), virya: "Hot" },
            FallbackEntry { name: "Soaked Almonds", quantity: "5-6 pieces", calories: Fixed(35), virya: "Hot" },
        ],
        "Breakfast" => &[
            FallbackEntry { name: "Oatmeal with Fruits", quantity: "1 bowl", calories: OfBudget(0.6), virya: "Cold" },
            FallbackEntry { name: "Herbal Tea", quantity: "1 cup", calories: Fixed(5), virya: "Hot" },
        ],
        "Mid-Morning Snack" => &[
            FallbackEntry { name: "Green Tea", quantity: "1 cup", calories: Fixed(2), virya: "Hot" },
            FallbackEntry { name: "Mixed Nuts", quantity: "10-12 pieces", calories: OfBudget(0.8), virya: "Hot" },
        ],
        "Lunch" => &[
            FallbackEntry { name: "Dal with Rice", quantity: "1 plate", calories: OfBudget(0.6), virya: "Hot" },
            FallbackEntry { name: "Vegetable Curry", quantity: "1 serving", calories: OfBudget(0.3), virya: "Hot" },
            FallbackEntry { name: "Chapati", quantity: "2 pieces", calories: OfBudget(0.1), virya: "Hot" },
        ],
        "Evening Snack" => &[
            FallbackEntry { name: "Herbal Tea", quantity: "1 cup", calories: Fixed(5), virya: "Hot" },
            FallbackEntry { name: "Roasted Chana", quantity: "1 small bowl", calories: OfBudget(0.8), virya: "Hot" },
        ],
        "Dinner" => &[
            FallbackEntry { name: "Chapati with Sabzi", quantity: "2 pieces", calories: OfBudget(0.7), virya: "Hot" },
            FallbackEntry { name: "Dal", quantity: "1 bowl", calories: OfBudget(0.3), virya: "Hot" },
        ],
        "Bedtime" => &[
            FallbackEntry { name: "Warm Milk with Turmeric", quantity: "1 glass", calories: Fixed(50), virya: "Hot" },
        ],
        _ => &[
            FallbackEntry { name: "Balanced Meal", quantity: "1 serving", calories: OfBudget(1.0), virya: "Hot" },
        ],
    };

    entries.iter().map(|e| e.resolve(budget)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_has_seven_slots_ending_with_bedtime() {
        let slots = plan_slots();
        assert_eq!(slots.len(), 7);
        assert_eq!(slots[6].name, "Bedtime");
        assert_eq!(slots[6].budget, SlotBudget::Fixed(BEDTIME_CALORIES));
    }

    #[test]
    fn timed_fractions_sum_to_one() {
        let total: f64 = plan_slots()
            .iter()
            .filter_map(|s| match s.budget {
                SlotBudget::Fraction(f) => Some(f),
                SlotBudget::Fixed(_) => None,
            })
            .sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn bedtime_budget_ignores_target() {
        let bedtime = plan_slots().last().unwrap();
        assert_eq!(bedtime.calories_for(1200.0), 50.0);
        assert_eq!(bedtime.calories_for(3500.0), 50.0);
    }

    #[test]
    fn breakfast_budget_is_a_quarter_of_target() {
        let breakfast = &plan_slots()[1];
        assert_eq!(breakfast.name, "Breakfast");
        assert_eq!(breakfast.calories_for(2000.0), 500.0);
    }

    #[test]
    fn unknown_slot_gets_generic_category_split() {
        assert_eq!(
            slot_categories("Second Breakfast"),
            &[("Grains", 0.6), ("Vegetables", 0.4)]
        );
    }

    #[test]
    fn category_weights_sum_to_one_per_slot() {
        for slot in plan_slots() {
            let total: f64 = slot_categories(slot.name).iter().map(|(_, w)| w).sum();
            assert!((total - 1.0).abs() < 1e-9, "{} weights sum to {}", slot.name, total);
        }
    }

    #[test]
    fn fallback_mixes_fixed_and_budget_scaled_calories() {
        let breakfast = fallback_items("Breakfast", 500.0);
        assert_eq!(breakfast[0].calories, 300); // 60% of budget
        assert_eq!(breakfast[1].calories, 5); // fixed literal

        let bedtime = fallback_items("Bedtime", 50.0);
        assert_eq!(bedtime.len(), 1);
        assert_eq!(bedtime[0].calories, 50);
    }

    #[test]
    fn unknown_slot_falls_back_to_single_balanced_meal() {
        let items = fallback_items("Brunch", 450.0);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Balanced Meal");
        assert_eq!(items[0].calories, 450);
    }
}
