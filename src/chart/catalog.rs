use thiserror::Error;

use crate::foods::FoodItem;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog lookup failed: {0}")]
    Lookup(String),
}

/// Read-only catalog access injected into the selector. Generation works
/// against a snapshot, so implementations never see writes mid-chart.
pub trait Catalog {
    /// All entries whose category matches `category` case-insensitively.
    fn by_category(&self, category: &str) -> Result<Vec<FoodItem>, CatalogError>;
}

/// In-memory snapshot of the food catalog, loaded once per generation
/// request. Preserves insertion order, which makes score ties deterministic.
pub struct CatalogSnapshot {
    items: Vec<FoodItem>,
}

impl CatalogSnapshot {
    pub fn new(items: Vec<FoodItem>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Catalog for CatalogSnapshot {
    fn by_category(&self, category: &str) -> Result<Vec<FoodItem>, CatalogError> {
        Ok(self
            .items
            .iter()
            .filter(|f| f.category.eq_ignore_ascii_case(category))
            .cloned()
            .collect())
    }
}
