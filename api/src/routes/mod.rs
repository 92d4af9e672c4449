use std::path::Path;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::AppState;

pub mod food;


/// Successful answers of the food endpoints.
pub enum FoodResponse<T> {
    Ok(T),
    Created(T),
    Text(&'static str),
}

impl<T: Serialize> IntoResponse for FoodResponse<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            FoodResponse::Ok(body) => Json(body).into_response(),
            FoodResponse::Created(body) => (StatusCode::CREATED, Json(body)).into_response(),
            FoodResponse::Text(message) => message.into_response(),
        }
    }
}

/// Food endpoints plus static files from `public_dir` for every other path.
pub fn app_router(state: AppState, public_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::<AppState>::new()
        .merge(food::food_routes())
        .fallback_service(ServeDir::new(public_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
