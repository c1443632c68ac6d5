use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod handlers;
pub mod repo;

pub use repo::Patient;

pub fn router() -> Router<AppState> {
    handlers::patient_routes()
}
