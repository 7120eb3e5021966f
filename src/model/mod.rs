//! # Recipe Data Model
//!
//! The persisted record types: a `Recipe` holds a server-assigned string id,
//! a title, and ordered sequences of ingredients and steps. Ingredients and
//! steps have no independent lifecycle; they exist only nested inside a
//! recipe, and their order is semantically meaningful (cooking order) and
//! must survive every storage round trip.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single ingredient line within a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub description: String,
}

/// A single preparation step within a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub id: i64,
    pub description: String,
}

/// The top-level persisted record.
///
/// `id` is minted by the server at creation time and is the store's primary
/// key; clients never supply it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<Step>,
}

/// Input for the create operation: a recipe minus the server-assigned id.
///
/// Unknown fields in the inbound JSON (including a client-supplied `id`) are
/// ignored by deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecipe {
    pub title: String,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<Step>,
}

impl NewRecipe {
    /// Materialize the recipe with a freshly minted, collision-resistant id.
    pub fn into_recipe(self) -> Recipe {
        Recipe {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            ingredients: self.ingredients,
            steps: self.steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tea() -> NewRecipe {
        NewRecipe {
            title: "Tea".to_string(),
            ingredients: vec![Ingredient {
                id: 1,
                description: "water".to_string(),
            }],
            steps: vec![Step {
                id: 1,
                description: "boil".to_string(),
            }],
        }
    }

    #[test]
    fn test_into_recipe_mints_nonempty_id() {
        let recipe = tea().into_recipe();
        assert!(!recipe.id.is_empty());
        assert_eq!(recipe.title, "Tea");
    }

    #[test]
    fn test_minted_ids_are_distinct() {
        let a = tea().into_recipe();
        let b = tea().into_recipe();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_client_supplied_id_is_ignored() {
        let json = r#"{"id":"client-picked","title":"Tea","ingredients":[],"steps":[]}"#;
        let new: NewRecipe = serde_json::from_str(json).unwrap();
        let recipe = new.into_recipe();
        assert_ne!(recipe.id, "client-picked");
    }

    #[test]
    fn test_sequence_order_survives_json_round_trip() {
        let recipe = Recipe {
            id: "r1".to_string(),
            title: "Stew".to_string(),
            ingredients: (1..=5)
                .map(|i| Ingredient {
                    id: i,
                    description: format!("ingredient {i}"),
                })
                .collect(),
            steps: (1..=3)
                .map(|i| Step {
                    id: i,
                    description: format!("step {i}"),
                })
                .collect(),
        };

        let json = serde_json::to_string(&recipe).unwrap();
        let back: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(back, recipe);
    }
}
