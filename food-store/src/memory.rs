use tokio::sync::RwLock;

use crate::{BoxFuture, FoodItem, FoodItemFields, FoodItemId, FoodStore, Result, StoreError};

/// Process-local food store. Items keep insertion order, which stands in for the natural order
/// of a document collection.
#[derive(Debug, Default)]
pub struct MemoryFoodStore {
    state: RwLock<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    items: Vec<FoodItem>,
    closed: bool,
}

impl MemoryState {
    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(StoreError::Closed);
        }
        Ok(())
    }

    fn position(&self, id: FoodItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

impl MemoryFoodStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FoodStore for MemoryFoodStore {
    fn list_all(&self) -> BoxFuture<'_, Result<Vec<FoodItem>>> {
        Box::pin(async move {
            let state = self.state.read().await;
            state.ensure_open()?;
            Ok(state.items.clone())
        })
    }

    fn find_by_name<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<Option<FoodItem>>> {
        Box::pin(async move {
            let state = self.state.read().await;
            state.ensure_open()?;
            Ok(state
                .items
                .iter()
                .find(|item| item.name() == Some(name))
                .cloned())
        })
    }

    fn create(&self, fields: FoodItemFields) -> BoxFuture<'_, Result<FoodItem>> {
        Box::pin(async move {
            let mut state = self.state.write().await;
            state.ensure_open()?;
            let item = FoodItem::new(fields);
            state.items.push(item.clone());
            Ok(item)
        })
    }

    fn replace(
        &self,
        id: FoodItemId,
        fields: FoodItemFields,
    ) -> BoxFuture<'_, Result<Option<FoodItem>>> {
        Box::pin(async move {
            let mut state = self.state.write().await;
            state.ensure_open()?;
            let Some(index) = state.position(id) else {
                return Ok(None);
            };

            let item = &mut state.items[index];
            item.fields = fields;
            Ok(Some(item.clone()))
        })
    }

    fn delete(&self, id: FoodItemId) -> BoxFuture<'_, Result<Option<FoodItem>>> {
        Box::pin(async move {
            let mut state = self.state.write().await;
            state.ensure_open()?;
            Ok(state.position(id).map(|index| state.items.remove(index)))
        })
    }

    fn delete_all(&self) -> BoxFuture<'_, Result<u64>> {
        Box::pin(async move {
            let mut state = self.state.write().await;
            state.ensure_open()?;
            let removed = state.items.drain(..).count();
            Ok(removed as u64)
        })
    }

    fn shutdown(&self) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            self.state.write().await.closed = true;
        })
    }
}
