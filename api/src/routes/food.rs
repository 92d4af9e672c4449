use axum::extract::{Path, State};
use axum::routing::{delete, get, post, put};
use axum::Router;

use super::FoodResponse;
use crate::AppState;
use crate::error::AppError;
use crate::handlers;
use crate::models::food_items::{FoodItemPayload, FoodItemResponse};

const NO_DATA: &str = "No data found";
const NO_DATA_FOR_TITLE: &str = "No data found for the title";
const ITEM_DELETED: &str = "Food item deleted successfully";
const ALL_DELETED: &str = "All food items deleted successfully";

pub fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/food", get(list_food))
        .route("/food/", get(list_food))
        .route("/food/{food_item_name}", get(get_food))
        .route("/new_food", post(new_food))
        .route("/update_food/{id}", put(update_food))
        .route("/delete_food/{id}", delete(delete_food))
        .route("/delete_all", delete(delete_all))
}

// Misses on the two read endpoints answer 200 with a text body, unlike update and delete.
async fn list_food(
    State(state): State<AppState>,
) -> Result<FoodResponse<Vec<FoodItemResponse>>, AppError> {
    let items = handlers::food_items::list_food_items(&state).await?;
    if items.is_empty() {
        return Ok(FoodResponse::Text(NO_DATA));
    }

    let items = items.into_iter().map(FoodItemResponse::from).collect();
    Ok(FoodResponse::Ok(items))
}

async fn get_food(
    State(state): State<AppState>,
    Path(food_item_name): Path<String>,
) -> Result<FoodResponse<FoodItemResponse>, AppError> {
    let item = handlers::food_items::find_food_item(&state, &food_item_name).await?;

    match item {
        Some(item) => Ok(FoodResponse::Ok(item.into())),
        None => Ok(FoodResponse::Text(NO_DATA_FOR_TITLE)),
    }
}

async fn new_food(
    State(state): State<AppState>,
    payload: FoodItemPayload,
) -> Result<FoodResponse<FoodItemResponse>, AppError> {
    let item = handlers::food_items::create_food_item(&state, payload.into()).await?;
    Ok(FoodResponse::Created(item.into()))
}

async fn update_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: FoodItemPayload,
) -> Result<FoodResponse<FoodItemResponse>, AppError> {
    let item = handlers::food_items::update_food_item(&state, &id, payload.into()).await?;
    Ok(FoodResponse::Ok(item.into()))
}

async fn delete_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<FoodResponse<()>, AppError> {
    handlers::food_items::delete_food_item(&state, &id).await?;
    Ok(FoodResponse::Text(ITEM_DELETED))
}

async fn delete_all(State(state): State<AppState>) -> Result<FoodResponse<()>, AppError> {
    handlers::food_items::delete_all_food_items(&state).await?;
    Ok(FoodResponse::Text(ALL_DELETED))
}
