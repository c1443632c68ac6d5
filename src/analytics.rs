use std::collections::BTreeMap;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use tracing::instrument;
use uuid::Uuid;

use crate::{foods::FoodItem, state::AppState};

#[derive(Debug, Serialize, FromRow)]
pub struct RecentPatient {
    pub id: Uuid,
    pub name: String,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsSummary {
    pub total_patients: i64,
    pub total_diet_charts: i64,
    pub total_assessments: i64,
    pub constitution_distribution: BTreeMap<String, i64>,
    pub recent_patients: Vec<RecentPatient>,
    pub food_categories: Vec<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/analytics", get(get_analytics))
}

#[instrument(skip(state))]
pub async fn get_analytics(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsSummary>, (StatusCode, String)> {
    let total_patients = count(&state, "patients").await?;
    let total_diet_charts = count(&state, "diet_charts").await?;
    let total_assessments = count(&state, "dosha_assessments").await?;

    let distribution = sqlx::query_as::<_, (String, i64)>(
        r#"
        SELECT COALESCE(NULLIF(prakriti, ''), 'Unknown') AS prakriti, COUNT(*)
        FROM patients
        GROUP BY 1
        "#,
    )
    .fetch_all(&state.db)
    .await
    .map_err(internal)?
    .into_iter()
    .collect();

    let recent_patients = sqlx::query_as::<_, RecentPatient>(
        "SELECT id, name, created_at FROM patients ORDER BY created_at DESC LIMIT 5",
    )
    .fetch_all(&state.db)
    .await
    .map_err(internal)?;

    let food_categories = FoodItem::distinct_categories(&state.db)
        .await
        .map_err(internal)?;

    Ok(Json(AnalyticsSummary {
        total_patients,
        total_diet_charts,
        total_assessments,
        constitution_distribution: distribution,
        recent_patients,
        food_categories,
    }))
}

async fn count(state: &AppState, table: &str) -> Result<i64, (StatusCode, String)> {
    // Table names come from the three literals above, never from input.
    let sql = format!("SELECT COUNT(*) FROM {table}");
    sqlx::query_scalar::<_, i64>(&sql)
        .fetch_one(&state.db)
        .await
        .map_err(internal)
}

fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
