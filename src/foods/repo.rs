use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow, PgPool};
use uuid::Uuid;

/// A food catalog row with its Ayurvedic attributes. Immutable once created;
/// chart generation reads these as a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FoodItem {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub calories: f64,
    pub serving: String,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub virya: String,
    pub digestion: String,
    pub rasa: String,
    pub guna: String,
    pub vata_effect: String,
    pub pitta_effect: String,
    pub kapha_effect: String,
    pub season: Json<Vec<String>>,
    pub benefits: Json<Vec<String>>,
    pub precautions: Json<Vec<String>>,
    pub description: String,
}

impl FoodItem {
    /// List catalog entries, optionally narrowed by category (case-insensitive
    /// exact match) and/or a case-insensitive substring match on the name.
    pub async fn list(
        db: &PgPool,
        category: Option<&str>,
        search: Option<&str>,
    ) -> anyhow::Result<Vec<FoodItem>> {
        let rows = sqlx::query_as::<_, FoodItem>(
            r#"
            SELECT id, name, category, calories, serving, protein, carbs, fat, fiber,
                   virya, digestion, rasa, guna, vata_effect, pitta_effect, kapha_effect,
                   season, benefits, precautions, description
            FROM food_items
            WHERE ($1::text IS NULL OR category ILIKE $1)
              AND ($2::text IS NULL OR name ILIKE '%' || $2 || '%')
            ORDER BY name
            "#,
        )
        .bind(category)
        .bind(search)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn create(db: &PgPool, new: NewFoodItem) -> anyhow::Result<FoodItem> {
        let row = sqlx::query_as::<_, FoodItem>(
            r#"
            INSERT INTO food_items
                (name, category, calories, serving, protein, carbs, fat, fiber,
                 virya, digestion, rasa, guna, vata_effect, pitta_effect, kapha_effect,
                 season, benefits, precautions, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                    $16, $17, $18, $19)
            RETURNING id, name, category, calories, serving, protein, carbs, fat, fiber,
                      virya, digestion, rasa, guna, vata_effect, pitta_effect, kapha_effect,
                      season, benefits, precautions, description
            "#,
        )
        .bind(new.name)
        .bind(new.category)
        .bind(new.calories)
        .bind(new.serving)
        .bind(new.protein)
        .bind(new.carbs)
        .bind(new.fat)
        .bind(new.fiber)
        .bind(new.virya)
        .bind(new.digestion)
        .bind(new.rasa)
        .bind(new.guna)
        .bind(new.vata_effect)
        .bind(new.pitta_effect)
        .bind(new.kapha_effect)
        .bind(Json(new.season))
        .bind(Json(new.benefits))
        .bind(Json(new.precautions))
        .bind(new.description)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    pub async fn distinct_categories(db: &PgPool) -> anyhow::Result<Vec<String>> {
        let rows = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM food_items ORDER BY category",
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}

/// Insert payload for the catalog; category is expected to already be
/// normalized through `FoodCategory::from_label`.
#[derive(Debug, Clone)]
pub struct NewFoodItem {
    pub name: String,
    pub category: String,
    pub calories: f64,
    pub serving: String,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub virya: String,
    pub digestion: String,
    pub rasa: String,
    pub guna: String,
    pub vata_effect: String,
    pub pitta_effect: String,
    pub kapha_effect: String,
    pub season: Vec<String>,
    pub benefits: Vec<String>,
    pub precautions: Vec<String>,
    pub description: String,
}
