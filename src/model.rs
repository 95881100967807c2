use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;

/// Sentinel used for preparation and cooking times that could not be found.
pub const UNKNOWN_TIME: &str = "N/A";

/// A recipe record built from a raw completion or synthesized from a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredRecipe {
    pub name: String,
    pub preparation_time: String,
    pub cooking_time: String,
    pub ingredients: Vec<String>,
    /// Steps in cooking order
    pub instructions: Vec<String>,
}

impl StructuredRecipe {
    /// An empty record carrying only a name and the unknown-time sentinels.
    pub fn named(name: impl Into<String>) -> Self {
        StructuredRecipe {
            name: name.into(),
            preparation_time: UNKNOWN_TIME.to_string(),
            cooking_time: UNKNOWN_TIME.to_string(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
        }
    }

    /// True when the record can be shown to a user as-is.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.ingredients.is_empty() && !self.instructions.is_empty()
    }
}

/// What the user typed into the generator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeMode {
    /// A list of ingredients on hand
    Ingredients,
    /// The name of a dish
    #[serde(alias = "recipe")]
    Name,
}

impl RecipeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeMode::Ingredients => "ingredients",
            RecipeMode::Name => "name",
        }
    }
}

impl fmt::Display for RecipeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecipeMode {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ingredients" => Ok(RecipeMode::Ingredients),
            // The generator form historically posted "recipe" for dish names
            "name" | "recipe" => Ok(RecipeMode::Name),
            other => Err(NormalizeError::UnknownMode(other.to_string())),
        }
    }
}

/// The caller's request that produced a completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    pub user_input: String,
    pub mode: RecipeMode,
}

impl RecipeRequest {
    /// Build a request, rejecting blank input.
    pub fn new(user_input: impl Into<String>, mode: RecipeMode) -> Result<Self, NormalizeError> {
        let user_input = user_input.into();
        if user_input.trim().is_empty() {
            return Err(NormalizeError::EmptyInput);
        }
        Ok(RecipeRequest { user_input, mode })
    }

    pub fn ingredients(user_input: impl Into<String>) -> Result<Self, NormalizeError> {
        Self::new(user_input, RecipeMode::Ingredients)
    }

    pub fn name(user_input: impl Into<String>) -> Result<Self, NormalizeError> {
        Self::new(user_input, RecipeMode::Name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("ingredients".parse::<RecipeMode>().unwrap(), RecipeMode::Ingredients);
        assert_eq!("Name".parse::<RecipeMode>().unwrap(), RecipeMode::Name);
        assert_eq!("recipe".parse::<RecipeMode>().unwrap(), RecipeMode::Name);
        assert!(matches!(
            "dessert".parse::<RecipeMode>(),
            Err(NormalizeError::UnknownMode(m)) if m == "dessert"
        ));
    }

    #[test]
    fn test_blank_input_rejected() {
        assert!(matches!(
            RecipeRequest::name("   "),
            Err(NormalizeError::EmptyInput)
        ));
        assert!(RecipeRequest::ingredients("eggs, flour").is_ok());
    }

    #[test]
    fn test_recipe_serializes_camel_case() {
        let recipe = StructuredRecipe::named("Toast");
        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["preparationTime"], "N/A");
        assert_eq!(json["cookingTime"], "N/A");
        assert!(json["ingredients"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_request_deserializes_legacy_mode() {
        let request: RecipeRequest =
            serde_json::from_str(r#"{"userInput": "lasagna", "mode": "recipe"}"#).unwrap();
        assert_eq!(request.mode, RecipeMode::Name);
        assert_eq!(request.user_input, "lasagna");
    }

    #[test]
    fn test_is_complete() {
        let mut recipe = StructuredRecipe::named("Toast");
        assert!(!recipe.is_complete());
        recipe.ingredients.push("bread".to_string());
        recipe.instructions.push("Toast the bread.".to_string());
        assert!(recipe.is_complete());
    }
}
