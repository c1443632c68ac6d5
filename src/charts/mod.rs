use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod handlers;
pub mod repo;

pub use repo::DietChart;

pub fn router() -> Router<AppState> {
    handlers::chart_routes()
}
