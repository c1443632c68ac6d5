use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// A persisted diet chart. `chart_data` holds the full generated payload;
/// regeneration creates a new row rather than mutating this one.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DietChart {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub patient_name: String,
    pub goal: String,
    pub target_calories: i64,
    pub duration: i64,
    pub chart_data: serde_json::Value,
    pub status: String,
    pub created_at: OffsetDateTime,
}

impl DietChart {
    pub async fn list(db: &PgPool) -> anyhow::Result<Vec<DietChart>> {
        let rows = sqlx::query_as::<_, DietChart>(
            r#"
            SELECT c.id, c.patient_id, p.name AS patient_name, c.goal, c.target_calories,
                   c.duration, c.chart_data, c.status, c.created_at
            FROM diet_charts c
            JOIN patients p ON p.id = c.patient_id
            ORDER BY c.created_at DESC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find(db: &PgPool, id: Uuid) -> anyhow::Result<Option<DietChart>> {
        let row = sqlx::query_as::<_, DietChart>(
            r#"
            SELECT c.id, c.patient_id, p.name AS patient_name, c.goal, c.target_calories,
                   c.duration, c.chart_data, c.status, c.created_at
            FROM diet_charts c
            JOIN patients p ON p.id = c.patient_id
            WHERE c.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn create(
        db: &PgPool,
        patient_id: Uuid,
        patient_name: &str,
        goal: &str,
        target_calories: i64,
        duration: i64,
        chart_data: serde_json::Value,
    ) -> anyhow::Result<DietChart> {
        let (id, status, created_at) = sqlx::query_as::<_, (Uuid, String, OffsetDateTime)>(
            r#"
            INSERT INTO diet_charts (patient_id, goal, target_calories, duration, chart_data)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, status, created_at
            "#,
        )
        .bind(patient_id)
        .bind(goal)
        .bind(target_calories)
        .bind(duration)
        .bind(&chart_data)
        .fetch_one(db)
        .await?;

        Ok(DietChart {
            id,
            patient_id,
            patient_name: patient_name.to_string(),
            goal: goal.to_string(),
            target_calories,
            duration,
            chart_data,
            status,
            created_at,
        })
    }

    /// Delete a chart; returns false if no row matched.
    pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM diet_charts WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
