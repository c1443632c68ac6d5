use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::state::AppState;

use super::dto::{CreateFoodRequest, FoodCategory, FoodQuery};
use super::repo::{FoodItem, NewFoodItem};

pub fn food_routes() -> Router<AppState> {
    Router::new().route("/foods", get(list_foods).post(create_food))
}

#[instrument(skip(state))]
pub async fn list_foods(
    State(state): State<AppState>,
    Query(q): Query<FoodQuery>,
) -> Result<Json<Vec<FoodItem>>, (StatusCode, String)> {
    let foods = FoodItem::list(&state.db, q.category.as_deref(), q.search.as_deref())
        .await
        .map_err(internal)?;
    Ok(Json(foods))
}

#[instrument(skip(state, payload))]
pub async fn create_food(
    State(state): State<AppState>,
    Json(payload): Json<CreateFoodRequest>,
) -> Result<(StatusCode, Json<FoodItem>), (StatusCode, String)> {
    if payload.name.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "name is required".into()));
    }
    let numeric = [
        payload.calories,
        payload.protein,
        payload.carbs,
        payload.fat,
        payload.fiber,
    ];
    if numeric.iter().any(|v| !v.is_finite() || *v < 0.0) {
        warn!(name = %payload.name, "rejected food with negative or non-finite nutrition values");
        return Err((
            StatusCode::BAD_REQUEST,
            "calories and macros must be non-negative".into(),
        ));
    }

    let category = FoodCategory::from_label(&payload.category);
    let food = FoodItem::create(
        &state.db,
        NewFoodItem {
            name: payload.name.trim().to_string(),
            category: category.as_str().to_string(),
            calories: payload.calories,
            serving: payload.serving,
            protein: payload.protein,
            carbs: payload.carbs,
            fat: payload.fat,
            fiber: payload.fiber,
            virya: payload.virya,
            digestion: payload.digestion,
            rasa: payload.rasa,
            guna: payload.guna,
            vata_effect: payload.vata_effect,
            pitta_effect: payload.pitta_effect,
            kapha_effect: payload.kapha_effect,
            season: payload.season,
            benefits: payload.benefits,
            precautions: payload.precautions,
            description: payload.description,
        },
    )
    .await
    .map_err(internal)?;

    info!(food_id = %food.id, name = %food.name, category = %food.category, "food created");
    Ok((StatusCode::CREATED, Json(food)))
}

fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
