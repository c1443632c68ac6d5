use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::state::AppState;

use super::dto::{compute_bmi, CreatePatientRequest, Pagination};
use super::repo::{NewPatient, Patient};

pub fn patient_routes() -> Router<AppState> {
    Router::new()
        .route("/patients", get(list_patients).post(create_patient))
        .route("/patients/:id", get(get_patient))
}

#[instrument(skip(state))]
pub async fn list_patients(
    State(state): State<AppState>,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<Patient>>, (StatusCode, String)> {
    let patients = Patient::list(&state.db, p.limit, p.offset)
        .await
        .map_err(internal)?;
    Ok(Json(patients))
}

#[instrument(skip(state))]
pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Patient>, (StatusCode, String)> {
    match Patient::find(&state.db, id).await.map_err(internal)? {
        Some(patient) => Ok(Json(patient)),
        None => Err((StatusCode::NOT_FOUND, "Patient not found".into())),
    }
}

#[instrument(skip(state, payload))]
pub async fn create_patient(
    State(state): State<AppState>,
    Json(payload): Json<CreatePatientRequest>,
) -> Result<(StatusCode, Json<Patient>), (StatusCode, String)> {
    if payload.name.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "name is required".into()));
    }
    if payload.age < 0 {
        return Err((StatusCode::BAD_REQUEST, "age must be non-negative".into()));
    }

    let bmi = compute_bmi(payload.height, payload.weight);
    let patient = Patient::create(
        &state.db,
        NewPatient {
            name: payload.name.trim().to_string(),
            age: payload.age,
            gender: payload.gender,
            phone: payload.phone,
            email: payload.email,
            height: payload.height,
            weight: payload.weight,
            bmi,
            prakriti: payload.prakriti,
            diet: payload.diet,
            meal_frequency: payload.meal_frequency,
            water_intake: payload.water_intake,
            activity_level: payload.activity_level,
            bowel_movement: payload.bowel_movement,
            sleep_hours: payload.sleep_hours,
            stress_level: payload.stress_level,
            medical_history: payload.medical_history,
            current_medications: payload.current_medications,
            allergies: payload.allergies,
            occupation: payload.occupation,
            exercise_frequency: payload.exercise_frequency,
        },
    )
    .await
    .map_err(internal)?;

    info!(patient_id = %patient.id, name = %patient.name, "patient created");
    Ok((StatusCode::CREATED, Json(patient)))
}

fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
