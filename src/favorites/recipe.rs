//! Recipe records and identities.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ForkfulError, Result};

/// Field holding a recipe's identity.
pub const IDENTITY_FIELD: &str = "idMeal";

/// Field holding a recipe's display name.
pub const NAME_FIELD: &str = "strMeal";

/// Field holding a recipe's category.
pub const CATEGORY_FIELD: &str = "strCategory";

/// Field holding a recipe's thumbnail URL.
pub const THUMBNAIL_FIELD: &str = "strMealThumb";

/// Non-empty string identifying a recipe within the favorites.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    /// Create an id, rejecting the empty string.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(ForkfulError::invalid_argument("recipe id must not be empty"));
        }
        Ok(Self(id))
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RecipeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A recipe as supplied by the recipe-fetching side.
///
/// The record is an arbitrary JSON object. Only [`IDENTITY_FIELD`] matters to
/// the favorites engine; the other accessors exist for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recipe(Map<String, Value>);

impl Recipe {
    /// Wrap a JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Build a recipe from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(ForkfulError::invalid_argument(format!(
                "recipe must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Parse a recipe from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(|e| {
            ForkfulError::invalid_argument(format!("recipe is not valid JSON: {}", e))
        })?;
        Self::from_value(value)
    }

    /// The recipe's identity, if it has a non-empty string `idMeal`.
    pub fn id(&self) -> Option<&str> {
        self.str_field(IDENTITY_FIELD).filter(|id| !id.is_empty())
    }

    /// The recipe's identity, or an invalid-argument error when it has none.
    pub fn require_id(&self) -> Result<RecipeId> {
        match self.id() {
            Some(id) => RecipeId::new(id),
            None => Err(ForkfulError::invalid_argument(format!(
                "recipe has no '{}' string field",
                IDENTITY_FIELD
            ))),
        }
    }

    /// Display name (`strMeal`).
    pub fn name(&self) -> Option<&str> {
        self.str_field(NAME_FIELD)
    }

    /// Category (`strCategory`).
    pub fn category(&self) -> Option<&str> {
        self.str_field(CATEGORY_FIELD)
    }

    /// Thumbnail URL (`strMealThumb`).
    pub fn thumbnail(&self) -> Option<&str> {
        self.str_field(THUMBNAIL_FIELD)
    }

    /// Get any field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// All fields of the record.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Convert back into a JSON value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    fn str_field(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for Recipe {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn recipe_id_rejects_empty() {
        assert!(RecipeId::new("").is_err());
        assert_eq!(RecipeId::new("52874").unwrap().as_str(), "52874");
    }

    #[test]
    fn recipe_accessors() {
        let recipe = Recipe::from_value(json!({
            "idMeal": "52874",
            "strMeal": "Beef Stroganoff",
            "strCategory": "Beef",
            "strMealThumb": "https://example.com/stroganoff.jpg"
        }))
        .unwrap();

        assert_eq!(recipe.id(), Some("52874"));
        assert_eq!(recipe.name(), Some("Beef Stroganoff"));
        assert_eq!(recipe.category(), Some("Beef"));
        assert_eq!(
            recipe.thumbnail(),
            Some("https://example.com/stroganoff.jpg")
        );
    }

    #[test]
    fn numeric_id_is_not_an_identity() {
        let recipe = Recipe::from_value(json!({"idMeal": 52874})).unwrap();
        assert_eq!(recipe.id(), None);
        assert!(recipe.require_id().is_err());
    }

    #[test]
    fn empty_id_is_not_an_identity() {
        let recipe = Recipe::from_value(json!({"idMeal": ""})).unwrap();
        assert!(matches!(
            recipe.require_id(),
            Err(ForkfulError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn from_value_rejects_non_objects() {
        let err = Recipe::from_value(json!(["idMeal"])).unwrap_err();
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn from_json_parses_text() {
        let recipe = Recipe::from_json(r#"{"idMeal":"1","strMeal":"A"}"#).unwrap();
        assert_eq!(recipe.id(), Some("1"));
        assert!(Recipe::from_json("{oops").is_err());
    }

    #[test]
    fn recipe_serializes_as_plain_object() {
        let recipe = Recipe::from_value(json!({"idMeal": "1", "strMeal": "A"})).unwrap();
        let text = serde_json::to_string(&recipe).unwrap();
        assert_eq!(text, r#"{"idMeal":"1","strMeal":"A"}"#);
    }
}
