use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, header};
use food_store::{FoodItem, FoodItemFields};
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// Request body accepted by the create and update endpoints.
///
/// Unknown keys are ignored. Numbers and booleans are stored as their string form, `null` and
/// missing keys both mean the field is absent.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FoodItemPayload {
    #[serde(deserialize_with = "string_like")]
    pub food_item_name: Option<String>,
    #[serde(deserialize_with = "string_like")]
    pub food_group: Option<String>,
    #[serde(deserialize_with = "string_like")]
    pub description: Option<String>,
    #[serde(deserialize_with = "string_like")]
    pub nutritional_information: Option<String>,
    #[serde(deserialize_with = "string_like")]
    pub serving_size: Option<String>,
    #[serde(deserialize_with = "string_like")]
    pub allergens: Option<String>,
    #[serde(deserialize_with = "string_like")]
    pub ingredients: Option<String>,
    #[serde(deserialize_with = "string_like")]
    pub preparation_methods: Option<String>,
    #[serde(deserialize_with = "string_like")]
    pub certifications: Option<String>,
    #[serde(deserialize_with = "string_like")]
    pub country_of_origin: Option<String>,
    #[serde(deserialize_with = "string_like")]
    pub brand_or_manufacturer: Option<String>,
    #[serde(deserialize_with = "string_like")]
    pub dietary_restrictions: Option<String>,
    #[serde(deserialize_with = "string_like")]
    pub health_benefits: Option<String>,
    #[serde(deserialize_with = "string_like")]
    pub best_practices: Option<String>,
}

fn string_like<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(Value::Array(_)) => Err(de::Error::invalid_type(Unexpected::Seq, &"a string")),
        Some(Value::Object(_)) => Err(de::Error::invalid_type(Unexpected::Map, &"a string")),
    }
}

/// A request without a JSON body (empty, or any other content type) carries no fields, so every
/// field is absent. JSON that does not parse is still rejected.
impl<S> FromRequest<S> for FoodItemPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state).await?;

        if !is_json || bytes.is_empty() {
            return Ok(Self::default());
        }

        let Json(payload) = Json::<Self>::from_bytes(&bytes)?;
        Ok(payload)
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case("application/json")
        || essence.to_ascii_lowercase().ends_with("+json")
}

impl From<FoodItemPayload> for FoodItemFields {
    fn from(payload: FoodItemPayload) -> Self {
        Self {
            food_item_name: payload.food_item_name,
            food_group: payload.food_group,
            description: payload.description,
            nutritional_information: payload.nutritional_information,
            serving_size: payload.serving_size,
            allergens: payload.allergens,
            ingredients: payload.ingredients,
            preparation_methods: payload.preparation_methods,
            certifications: payload.certifications,
            country_of_origin: payload.country_of_origin,
            brand_or_manufacturer: payload.brand_or_manufacturer,
            dietary_restrictions: payload.dietary_restrictions,
            health_benefits: payload.health_benefits,
            best_practices: payload.best_practices,
        }
    }
}

/// A stored food item as rendered to clients, `_id` in its hex form.
#[derive(Debug, Serialize)]
pub struct FoodItemResponse {
    #[serde(rename = "_id")]
    id: String,
    #[serde(flatten)]
    fields: FoodItemFields,
}

impl From<FoodItem> for FoodItemResponse {
    fn from(item: FoodItem) -> Self {
        Self {
            id: item.id.to_string(),
            fields: item.fields,
        }
    }
}
