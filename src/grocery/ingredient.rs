//! Ingredient record
//!
//! The value flowing from recipes through the aggregator into grocery lists.

use serde::{Deserialize, Serialize};

use crate::units::parse_quantity;

/// A single ingredient line with its quantity encoded as text
///
/// An empty `quantity` means the amount is unknown. It is not zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Deduplication key, compared exactly
    pub item: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub notes: String,
    /// Set when the merge that blanked this quantity failed to reconcile units
    #[serde(default)]
    pub error: bool,
}

impl Ingredient {
    /// Create an ingredient with a concrete quantity
    pub fn new(
        item: impl Into<String>,
        quantity: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            item: item.into(),
            quantity: quantity.into(),
            unit: unit.into(),
            category: String::new(),
            notes: String::new(),
            error: false,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Whether the quantity is the unknown sentinel
    pub fn is_unknown(&self) -> bool {
        self.quantity.is_empty()
    }

    /// Numeric value of the quantity, if it parses
    pub fn quantity_value(&self) -> Option<f64> {
        parse_quantity(&self.quantity)
    }

    /// Copy of this record with the quantity blanked
    pub fn blanked(&self, error: bool) -> Self {
        Self {
            quantity: String::new(),
            unit: String::new(),
            error,
            ..self.clone()
        }
    }
}

/// Data for an ingredient line as supplied by a caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientCreate {
    pub item: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub notes: String,
}

impl From<IngredientCreate> for Ingredient {
    fn from(data: IngredientCreate) -> Self {
        Self {
            item: data.item,
            quantity: data.quantity,
            unit: data.unit,
            category: data.category,
            notes: data.notes,
            error: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults() {
        let ingredient: Ingredient = serde_json::from_str(r#"{"item": "salt"}"#).unwrap();
        assert_eq!(ingredient.item, "salt");
        assert!(ingredient.is_unknown());
        assert_eq!(ingredient.unit, "");
        assert!(!ingredient.error);
    }

    #[test]
    fn test_blanked_keeps_other_fields() {
        let ingredient = Ingredient::new("milk", "1", "liter")
            .with_category("Dairy")
            .with_notes("whole");
        let blank = ingredient.blanked(true);
        assert_eq!(blank.item, "milk");
        assert_eq!(blank.category, "Dairy");
        assert_eq!(blank.notes, "whole");
        assert_eq!(blank.quantity, "");
        assert_eq!(blank.unit, "");
        assert!(blank.error);
    }

    #[test]
    fn test_create_clears_error() {
        let data = IngredientCreate {
            item: "eggs".to_string(),
            quantity: "12".to_string(),
            unit: String::new(),
            category: "Dairy".to_string(),
            notes: String::new(),
        };
        let ingredient = Ingredient::from(data);
        assert!(!ingredient.error);
        assert_eq!(ingredient.quantity_value(), Some(12.0));
    }
}
