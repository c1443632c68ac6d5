//! Diet-chart generation core: pure, synchronous, and deterministic over a
//! catalog snapshot. The HTTP layer feeds it a snapshot and persists the
//! result; nothing in here touches the database.

pub mod assembler;
pub mod catalog;
pub mod constitution;
pub mod selector;
pub mod slots;

pub use assembler::{generate_chart, ChartInputs, DietChartData, PlannedMeal};
pub use catalog::{Catalog, CatalogError, CatalogSnapshot};
pub use constitution::{compatibility_score, is_compatible, Constitution};
pub use selector::{select_foods, SelectedFood, SelectionLimits};
pub use slots::{plan_slots, MealSlot, SlotBudget, BEDTIME_CALORIES};
