use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod handlers;
pub mod repo;

pub use dto::FoodCategory;
pub use repo::FoodItem;

pub fn router() -> Router<AppState> {
    handlers::food_routes()
}
