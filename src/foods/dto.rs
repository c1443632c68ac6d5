use serde::{Deserialize, Serialize};

/// The ten catalog categories; anything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodCategory {
    Vegetables,
    Fruits,
    Grains,
    Proteins,
    Dairy,
    Spices,
    Nuts,
    Oils,
    Beverages,
    Other,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 10] = [
        FoodCategory::Vegetables,
        FoodCategory::Fruits,
        FoodCategory::Grains,
        FoodCategory::Proteins,
        FoodCategory::Dairy,
        FoodCategory::Spices,
        FoodCategory::Nuts,
        FoodCategory::Oils,
        FoodCategory::Beverages,
        FoodCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FoodCategory::Vegetables => "Vegetables",
            FoodCategory::Fruits => "Fruits",
            FoodCategory::Grains => "Grains",
            FoodCategory::Proteins => "Proteins",
            FoodCategory::Dairy => "Dairy",
            FoodCategory::Spices => "Spices",
            FoodCategory::Nuts => "Nuts",
            FoodCategory::Oils => "Oils",
            FoodCategory::Beverages => "Beverages",
            FoodCategory::Other => "Other",
        }
    }

    /// Case-insensitive lookup; unmapped labels become `Other`.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(label.trim()))
            .unwrap_or(FoodCategory::Other)
    }
}

#[derive(Debug, Deserialize)]
pub struct FoodQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateFoodRequest {
    pub name: String,
    pub category: String,
    pub calories: f64,
    pub serving: String,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default)]
    pub fiber: f64,
    pub virya: String,
    #[serde(default)]
    pub digestion: String,
    pub rasa: String,
    pub guna: String,
    #[serde(default = "default_effect")]
    pub vata_effect: String,
    #[serde(default = "default_effect")]
    pub pitta_effect: String,
    #[serde(default = "default_effect")]
    pub kapha_effect: String,
    #[serde(default)]
    pub season: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub precautions: Vec<String>,
    #[serde(default)]
    pub description: String,
}

fn default_effect() -> String {
    "=".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_lookup_is_case_insensitive() {
        assert_eq!(FoodCategory::from_label("grains"), FoodCategory::Grains);
        assert_eq!(FoodCategory::from_label(" BEVERAGES "), FoodCategory::Beverages);
    }

    #[test]
    fn unmapped_category_defaults_to_other() {
        assert_eq!(FoodCategory::from_label("Legumes"), FoodCategory::Other);
        assert_eq!(FoodCategory::from_label(""), FoodCategory::Other);
    }
}
