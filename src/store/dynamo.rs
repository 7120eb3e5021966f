//! # DynamoDB Store
//!
//! Recipe store backed by a single DynamoDB table keyed by `id`.
//!
//! Records are encoded explicitly: `ingredients` and `steps` are stored as
//! DynamoDB list attributes (`L`), never sets or maps, so element order is
//! preserved by the storage encoding rather than assumed. Decoding is the
//! mirror image and fails with [`StoreError::Decode`] on any shape mismatch.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use crate::model::{Ingredient, NewRecipe, Recipe, Step};
use crate::store::errors::{StoreError, StoreResult};
use crate::store::RecipeStore;

/// Recipe store adapter over a DynamoDB table.
#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: Client,
    table: String,
}

impl DynamoStore {
    pub fn new(client: Client, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    /// The table this adapter reads and writes.
    pub fn table(&self) -> &str {
        &self.table
    }
}

#[async_trait]
impl RecipeStore for DynamoStore {
    async fn list_all(&self) -> StoreResult<Vec<Recipe>> {
        let mut recipes = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        // A single scan call returns at most one page; follow the
        // continuation key until the table is exhausted.
        loop {
            let resp = self
                .client
                .scan()
                .table_name(&self.table)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(StoreError::transport)?;

            for item in resp.items.unwrap_or_default() {
                recipes.push(decode_recipe(&item)?);
            }

            match resp.last_evaluated_key {
                Some(key) => start_key = Some(key),
                None => break,
            }
        }

        Ok(recipes)
    }

    async fn create(&self, new: NewRecipe) -> StoreResult<Recipe> {
        let recipe = new.into_recipe();

        // Unconditional put: the id was just minted, so overwrite semantics
        // are acceptable and no existence check is made.
        self.client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(encode_recipe(&recipe)))
            .send()
            .await
            .map_err(StoreError::transport)?;

        Ok(recipe)
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        // DynamoDB's delete-by-key succeeds whether or not the key exists.
        self.client
            .delete_item()
            .table_name(&self.table)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(StoreError::transport)?;

        Ok(())
    }
}

// ==================
// Item Codec
// ==================

/// Encode a recipe as a DynamoDB item.
pub(crate) fn encode_recipe(recipe: &Recipe) -> HashMap<String, AttributeValue> {
    let ingredients = recipe
        .ingredients
        .iter()
        .map(|i| encode_line(i.id, &i.description))
        .collect();
    let steps = recipe
        .steps
        .iter()
        .map(|s| encode_line(s.id, &s.description))
        .collect();

    HashMap::from([
        ("id".to_string(), AttributeValue::S(recipe.id.clone())),
        ("title".to_string(), AttributeValue::S(recipe.title.clone())),
        ("ingredients".to_string(), AttributeValue::L(ingredients)),
        ("steps".to_string(), AttributeValue::L(steps)),
    ])
}

fn encode_line(id: i64, description: &str) -> AttributeValue {
    AttributeValue::M(HashMap::from([
        ("id".to_string(), AttributeValue::N(id.to_string())),
        (
            "description".to_string(),
            AttributeValue::S(description.to_string()),
        ),
    ]))
}

/// Decode a stored item back into a recipe, failing on any shape mismatch.
pub(crate) fn decode_recipe(item: &HashMap<String, AttributeValue>) -> StoreResult<Recipe> {
    // Pull the id first so decode errors can name the offending item.
    let id = item
        .get("id")
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| StoreError::decode("<unknown>", "missing or non-string `id`"))?;

    let title =
        get_string(item, "title").map_err(|reason| StoreError::decode(id.as_str(), reason))?;

    let ingredients = get_lines(item, "ingredients")
        .map_err(|reason| StoreError::decode(id.as_str(), reason))?
        .into_iter()
        .map(|(id, description)| Ingredient { id, description })
        .collect();

    let steps = get_lines(item, "steps")
        .map_err(|reason| StoreError::decode(id.as_str(), reason))?
        .into_iter()
        .map(|(id, description)| Step { id, description })
        .collect();

    Ok(Recipe {
        id,
        title,
        ingredients,
        steps,
    })
}

fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| format!("missing or non-string `{key}`"))
}

/// Decode a list attribute of `{id: N, description: S}` maps, in order.
fn get_lines(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Vec<(i64, String)>, String> {
    let list = item
        .get(key)
        .and_then(|v| v.as_l().ok())
        .ok_or_else(|| format!("missing or non-list `{key}`"))?;

    let mut lines = Vec::with_capacity(list.len());
    for (index, entry) in list.iter().enumerate() {
        let map = entry
            .as_m()
            .map_err(|_| format!("`{key}[{index}]` is not a map"))?;
        let line_id = map
            .get("id")
            .and_then(|v| v.as_n().ok())
            .and_then(|n| n.parse::<i64>().ok())
            .ok_or_else(|| format!("`{key}[{index}].id` is not an integer"))?;
        let description = map
            .get("description")
            .and_then(|v| v.as_s().ok())
            .cloned()
            .ok_or_else(|| format!("`{key}[{index}].description` is not a string"))?;
        lines.push((line_id, description));
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Recipe {
        Recipe {
            id: "abc-123".to_string(),
            title: "Tea".to_string(),
            ingredients: vec![
                Ingredient {
                    id: 1,
                    description: "water".to_string(),
                },
                Ingredient {
                    id: 2,
                    description: "tea leaves".to_string(),
                },
            ],
            steps: vec![
                Step {
                    id: 1,
                    description: "boil".to_string(),
                },
                Step {
                    id: 2,
                    description: "steep".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_codec_round_trip_preserves_order() {
        let recipe = sample();
        let item = encode_recipe(&recipe);
        let decoded = decode_recipe(&item).unwrap();
        assert_eq!(decoded, recipe);
    }

    #[test]
    fn test_sequences_encode_as_lists() {
        let item = encode_recipe(&sample());
        assert!(item["ingredients"].as_l().is_ok());
        assert!(item["steps"].as_l().is_ok());
    }

    #[test]
    fn test_decode_rejects_missing_title() {
        let mut item = encode_recipe(&sample());
        item.remove("title");

        let err = decode_recipe(&item).unwrap_err();
        match err {
            StoreError::Decode { id, reason } => {
                assert_eq!(id, "abc-123");
                assert!(reason.contains("title"));
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_non_numeric_ingredient_id() {
        let mut item = encode_recipe(&sample());
        item.insert(
            "ingredients".to_string(),
            AttributeValue::L(vec![AttributeValue::M(HashMap::from([
                ("id".to_string(), AttributeValue::S("one".to_string())),
                (
                    "description".to_string(),
                    AttributeValue::S("water".to_string()),
                ),
            ]))]),
        );

        let err = decode_recipe(&item).unwrap_err();
        assert!(matches!(err, StoreError::Decode { .. }));
    }

    #[test]
    fn test_decode_rejects_item_without_id() {
        let item = HashMap::from([(
            "title".to_string(),
            AttributeValue::S("Tea".to_string()),
        )]);

        let err = decode_recipe(&item).unwrap_err();
        match err {
            StoreError::Decode { id, .. } => assert_eq!(id, "<unknown>"),
            other => panic!("expected decode error, got {other:?}"),
        }
    }
}
