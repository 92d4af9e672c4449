pub mod memory;
pub mod models;
pub mod mongo;

use std::pin::Pin;

use derive_more::{Display, Error, From};
pub use memory::MemoryFoodStore;
pub use models::food_items::{FoodItem, FoodItemFields, FoodItemId, InvalidFoodItemId};
pub use mongo::{MongoFoodStore, MongoSettings};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub type Result<T, E = StoreError> = std::result::Result<T, E>;

#[derive(Debug, Display, From, Error)]
pub enum StoreError {
    #[from]
    Database(mongodb::error::Error),
    #[display("food store has been shut down")]
    Closed,
}

/// Persistence for the food item collection.
///
/// Every method issues exactly one store operation. Absence is reported as `Ok(None)`, never as
/// an error, so callers decide how a miss is surfaced.
pub trait FoodStore: Send + Sync {
    /// Every item in store-native order.
    fn list_all(&self) -> BoxFuture<'_, Result<Vec<FoodItem>>>;

    /// First item whose `foodItemName` equals `name` exactly.
    fn find_by_name<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<Option<FoodItem>>>;

    fn create(&self, fields: FoodItemFields) -> BoxFuture<'_, Result<FoodItem>>;

    /// Overwrites all fields of the item, fields that are `None` end up absent.
    /// Returns the item as stored after the replacement.
    fn replace(
        &self,
        id: FoodItemId,
        fields: FoodItemFields,
    ) -> BoxFuture<'_, Result<Option<FoodItem>>>;

    /// Returns the removed item.
    fn delete(&self, id: FoodItemId) -> BoxFuture<'_, Result<Option<FoodItem>>>;

    /// Returns how many items were removed.
    fn delete_all(&self) -> BoxFuture<'_, Result<u64>>;

    fn shutdown(&self) -> BoxFuture<'_, ()>;
}
