use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::{info, instrument};

use crate::state::AppState;

use super::dto::{recommendations_for, CreateAssessmentRequest};
use super::repo::DoshaAssessment;

pub fn assessment_routes() -> Router<AppState> {
    Router::new().route(
        "/dosha-assessments",
        get(list_assessments).post(create_assessment),
    )
}

#[instrument(skip(state))]
pub async fn list_assessments(
    State(state): State<AppState>,
) -> Result<Json<Vec<DoshaAssessment>>, (StatusCode, String)> {
    let assessments = DoshaAssessment::list(&state.db).await.map_err(internal)?;
    Ok(Json(assessments))
}

#[instrument(skip(state, payload))]
pub async fn create_assessment(
    State(state): State<AppState>,
    Json(payload): Json<CreateAssessmentRequest>,
) -> Result<(StatusCode, Json<DoshaAssessment>), (StatusCode, String)> {
    if payload.primary_dosha.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "primary_dosha is required".into()));
    }

    let recommendations = serde_json::to_value(recommendations_for(&payload.primary_dosha))
        .map_err(internal)?;
    let assessment = DoshaAssessment::create(
        &state.db,
        payload.patient_id,
        &payload.assessment_type,
        payload.responses,
        &payload.primary_dosha,
        payload.dosha_scores,
        payload.confidence,
        recommendations,
    )
    .await
    .map_err(internal)?;

    info!(assessment_id = %assessment.id, primary_dosha = %assessment.primary_dosha, "assessment saved");
    Ok((StatusCode::CREATED, Json(assessment)))
}

fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
