use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    chart::{self, CatalogSnapshot, ChartInputs, SelectionLimits},
    foods::FoodItem,
    patients::Patient,
    state::AppState,
};

use super::dto::GenerateChartRequest;
use super::repo::DietChart;

pub fn chart_routes() -> Router<AppState> {
    Router::new()
        .route("/diet-charts", get(list_charts).post(generate_chart))
        .route("/diet-charts/:id", get(get_chart).delete(delete_chart))
}

#[instrument(skip(state))]
pub async fn list_charts(
    State(state): State<AppState>,
) -> Result<Json<Vec<DietChart>>, (StatusCode, String)> {
    let charts = DietChart::list(&state.db).await.map_err(internal)?;
    Ok(Json(charts))
}

#[instrument(skip(state))]
pub async fn get_chart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DietChart>, (StatusCode, String)> {
    match DietChart::find(&state.db, id).await.map_err(internal)? {
        Some(chart) => Ok(Json(chart)),
        None => Err((StatusCode::NOT_FOUND, "Diet chart not found".into())),
    }
}

/// Generate and persist a chart for a patient. The only failure the core
/// surfaces is an unresolvable patient; catalog gaps resolve via fallbacks.
#[instrument(skip(state, payload), fields(patient_id = %payload.patient_id))]
pub async fn generate_chart(
    State(state): State<AppState>,
    Json(payload): Json<GenerateChartRequest>,
) -> Result<(StatusCode, Json<DietChart>), (StatusCode, String)> {
    let patient = match Patient::find(&state.db, payload.patient_id)
        .await
        .map_err(internal)?
    {
        Some(p) => p,
        None => return Err((StatusCode::NOT_FOUND, "Patient not found".into())),
    };

    let items = FoodItem::list(&state.db, None, None)
        .await
        .map_err(internal)?;
    let catalog = CatalogSnapshot::new(items);
    if catalog.is_empty() {
        warn!("food catalog is empty, chart will use fallback meals only");
    }

    let target_calories = payload.effective_target();
    let duration = payload.effective_duration();
    let inputs = ChartInputs {
        patient_name: &patient.name,
        prakriti: &patient.prakriti,
        goal: &payload.goal,
        target_calories,
        duration,
        generated_on: OffsetDateTime::now_utc().date(),
    };
    let data = chart::generate_chart(&catalog, &inputs, SelectionLimits::default());

    let chart = DietChart::create(
        &state.db,
        patient.id,
        &patient.name,
        &payload.goal,
        target_calories,
        duration,
        serde_json::to_value(&data).map_err(internal)?,
    )
    .await
    .map_err(internal)?;

    info!(chart_id = %chart.id, constitution = %data.constitution, target_calories, "diet chart generated");
    Ok((StatusCode::CREATED, Json(chart)))
}

#[instrument(skip(state))]
pub async fn delete_chart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    if DietChart::delete(&state.db, id).await.map_err(internal)? {
        info!(chart_id = %id, "diet chart deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "Diet chart not found".into()))
    }
}

fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
