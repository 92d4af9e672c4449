use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};

use crate::{BoxFuture, FoodItem, FoodItemFields, FoodItemId, FoodStore, Result};

#[derive(Debug, Clone)]
pub struct MongoSettings {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

#[derive(Debug, Clone)]
pub struct MongoFoodStore {
    client: Client,
    collection: Collection<FoodItem>,
}

impl MongoFoodStore {
    #[tracing::instrument(skip_all, fields(database = %settings.database, collection = %settings.collection))]
    pub async fn connect(settings: &MongoSettings) -> Result<Self> {
        tracing::info!("Connecting to MongoDB...");
        let client = Client::with_uri_str(&settings.uri).await?;
        let database = client.database(&settings.database);

        // the driver connects lazily, ping so an unreachable server fails startup
        database.run_command(doc! { "ping": 1 }).await?;
        tracing::info!("Connected to MongoDB");

        let collection = database.collection::<FoodItem>(&settings.collection);
        Ok(Self { client, collection })
    }
}

impl FoodStore for MongoFoodStore {
    fn list_all(&self) -> BoxFuture<'_, Result<Vec<FoodItem>>> {
        Box::pin(async move {
            let cursor = self.collection.find(doc! {}).await?;
            let items: Vec<FoodItem> = cursor.try_collect().await?;
            Ok(items)
        })
    }

    fn find_by_name<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<Option<FoodItem>>> {
        Box::pin(async move {
            let item = self
                .collection
                .find_one(doc! { "foodItemName": name })
                .await?;
            Ok(item)
        })
    }

    fn create(&self, fields: FoodItemFields) -> BoxFuture<'_, Result<FoodItem>> {
        Box::pin(async move {
            let item = FoodItem::new(fields);
            self.collection.insert_one(&item).await?;
            Ok(item)
        })
    }

    fn replace(
        &self,
        id: FoodItemId,
        fields: FoodItemFields,
    ) -> BoxFuture<'_, Result<Option<FoodItem>>> {
        Box::pin(async move {
            let replacement = FoodItem { id, fields };
            let item = self
                .collection
                .find_one_and_replace(doc! { "_id": id.as_object_id() }, &replacement)
                .return_document(ReturnDocument::After)
                .await?;
            Ok(item)
        })
    }

    fn delete(&self, id: FoodItemId) -> BoxFuture<'_, Result<Option<FoodItem>>> {
        Box::pin(async move {
            let item = self
                .collection
                .find_one_and_delete(doc! { "_id": id.as_object_id() })
                .await?;
            Ok(item)
        })
    }

    fn delete_all(&self) -> BoxFuture<'_, Result<u64>> {
        Box::pin(async move {
            let result = self.collection.delete_many(doc! {}).await?;
            Ok(result.deleted_count)
        })
    }

    fn shutdown(&self) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            tracing::info!("Closing MongoDB client");
            self.client.clone().shutdown().await;
        })
    }
}
