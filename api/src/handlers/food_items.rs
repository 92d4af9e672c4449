use food_store::{FoodItem, FoodItemFields, FoodItemId};

use crate::AppState;
use crate::error::AppError;

#[tracing::instrument(skip_all)]
pub async fn list_food_items(state: &AppState) -> Result<Vec<FoodItem>, AppError> {
    let items = state.store.list_all().await?;
    tracing::debug!(count = items.len(), "Listed food items");
    Ok(items)
}

#[tracing::instrument(skip(state))]
pub async fn find_food_item(state: &AppState, name: &str) -> Result<Option<FoodItem>, AppError> {
    tracing::info!("Requested food item name: {name}");
    let item = state.store.find_by_name(name).await?;
    Ok(item)
}

#[tracing::instrument(skip_all)]
pub async fn create_food_item(
    state: &AppState,
    fields: FoodItemFields,
) -> Result<FoodItem, AppError> {
    let item = state.store.create(fields).await?;
    tracing::info!(id = %item.id, "Created food item");
    Ok(item)
}

/// The id is validated before the store is touched.
#[tracing::instrument(skip(state, fields))]
pub async fn update_food_item(
    state: &AppState,
    id: &str,
    fields: FoodItemFields,
) -> Result<FoodItem, AppError> {
    tracing::info!("Received update for food item");
    let id: FoodItemId = id.parse()?;

    state
        .store
        .replace(id, fields)
        .await?
        .ok_or(AppError::NotFound)
}

#[tracing::instrument(skip(state))]
pub async fn delete_food_item(state: &AppState, id: &str) -> Result<FoodItem, AppError> {
    let id: FoodItemId = id.parse()?;

    let item = state.store.delete(id).await?.ok_or(AppError::NotFound)?;
    tracing::info!("Deleted food item");
    Ok(item)
}

#[tracing::instrument(skip_all)]
pub async fn delete_all_food_items(state: &AppState) -> Result<u64, AppError> {
    let deleted = state.store.delete_all().await?;
    tracing::info!(%deleted, "Deleted all food items");
    Ok(deleted)
}
