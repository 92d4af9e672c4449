use std::fmt;
use std::str::FromStr;

use derive_more::{Display, Error};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Store-generated identity of a food item, persisted as the document `_id`.
///
/// Only the 24 character hex form parses. The raw 12 byte string form (`abcdefghijkl`) is
/// rejected as malformed rather than looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodItemId(ObjectId);

#[derive(Debug, Display, Error)]
#[display("`{input}` is not a valid food item id")]
pub struct InvalidFoodItemId {
    input: String,
}

impl FoodItemId {
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl Default for FoodItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for FoodItemId {
    type Err = InvalidFoodItemId;

    /// Accepts the 24 character hex encoding of an ObjectId, in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s).map(Self).map_err(|_| InvalidFoodItemId {
            input: s.to_owned(),
        })
    }
}

impl fmt::Display for FoodItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

/// Every attribute a food item can carry. None of them is required and absent values are left
/// out of the stored document entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FoodItemFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutritional_information: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergens: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_methods: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_of_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_or_manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_restrictions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_benefits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_practices: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "_id")]
    pub id: FoodItemId,
    #[serde(flatten)]
    pub fields: FoodItemFields,
}

impl FoodItem {
    pub fn new(fields: FoodItemFields) -> Self {
        Self {
            id: FoodItemId::new(),
            fields,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.food_item_name.as_deref()
    }
}
