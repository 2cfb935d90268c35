//! Unit conversion MCP Tools
//!
//! Standalone unit conversion and ingredient combining.

use serde::Serialize;

use crate::grocery::{combine, format_quantity, Ingredient};
use crate::units::{self, lookup_unit, parse_quantity, Dimension};

/// A unit in the listing
#[derive(Debug, Serialize)]
pub struct UnitSummary {
    pub name: &'static str,
    pub factor_to_base: f64,
}

/// Units of one dimension
#[derive(Debug, Serialize)]
pub struct DimensionUnits {
    pub dimension: Dimension,
    pub base_unit: &'static str,
    pub units: Vec<UnitSummary>,
}

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct ListUnitsResponse {
    pub dimensions: Vec<DimensionUnits>,
}

/// Response for convert_units
#[derive(Debug, Serialize)]
pub struct ConvertUnitsResponse {
    pub quantity: String,
    pub from_unit: String,
    pub to_unit: String,
    /// Exact converted value, null when the conversion is not possible
    pub converted: Option<f64>,
    /// Converted value rounded to two decimals
    pub rounded: Option<String>,
    /// Why the conversion failed, if it did
    pub reason: Option<String>,
}

/// Response for combine_ingredients
#[derive(Debug, Serialize)]
pub struct CombineIngredientsResponse {
    pub items: Vec<Ingredient>,
    pub input_count: usize,
    pub item_count: usize,
    pub unresolved_count: usize,
}

/// List every recognized unit grouped by dimension
pub fn list_units() -> ListUnitsResponse {
    let dimensions = [Dimension::Mass, Dimension::Volume, Dimension::Length]
        .into_iter()
        .map(|dimension| DimensionUnits {
            dimension,
            base_unit: dimension.base_unit(),
            units: units::units_in(dimension)
                .map(|spec| UnitSummary {
                    name: spec.name,
                    factor_to_base: spec.factor_to_base,
                })
                .collect(),
        })
        .collect();

    ListUnitsResponse { dimensions }
}

/// Describe why a conversion failed
fn failure_reason(quantity: &str, from_unit: &str, to_unit: &str) -> String {
    let from = lookup_unit(from_unit);
    let to = lookup_unit(to_unit);
    match (from, to) {
        (None, _) => format!("Unrecognized unit '{}'", from_unit),
        (_, None) => format!("Unrecognized unit '{}'", to_unit),
        (Some(from), Some(to)) if from.dimension != to.dimension => format!(
            "Cannot convert {} ({}) to {} ({})",
            from.name,
            from.dimension.as_str(),
            to.name,
            to.dimension.as_str()
        ),
        _ if parse_quantity(quantity).is_none() => format!("Quantity '{}' is not a number", quantity),
        _ => "Conversion failed".to_string(),
    }
}

/// Convert a quantity between two units
pub fn convert_units(quantity: &str, from_unit: &str, to_unit: &str) -> ConvertUnitsResponse {
    let converted = units::convert(quantity, from_unit, to_unit);
    let reason = match converted {
        Some(_) => None,
        None => Some(failure_reason(quantity, from_unit, to_unit)),
    };

    ConvertUnitsResponse {
        quantity: quantity.to_string(),
        from_unit: from_unit.to_string(),
        to_unit: to_unit.to_string(),
        converted,
        rounded: converted.map(format_quantity),
        reason,
    }
}

/// Combine raw ingredient records without storing anything
pub fn combine_ingredients(records: Vec<Ingredient>) -> CombineIngredientsResponse {
    let items = combine(&records);
    let unresolved_count = items.iter().filter(|i| i.is_unknown()).count();

    CombineIngredientsResponse {
        input_count: records.len(),
        item_count: items.len(),
        unresolved_count,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_units() {
        let response = list_units();
        assert_eq!(response.dimensions.len(), 3);
        assert_eq!(response.dimensions[0].base_unit, "gram");
        assert_eq!(response.dimensions[1].units.len(), 8);
        assert_eq!(response.dimensions[2].units[0].name, "meter");
    }

    #[test]
    fn test_convert_units_success() {
        let response = convert_units("2", "cup", "milliliter");
        assert_eq!(response.rounded.as_deref(), Some("473.18"));
        assert!(response.reason.is_none());
    }

    #[test]
    fn test_convert_units_reasons() {
        let response = convert_units("1", "gram", "liter");
        assert!(response.converted.is_none());
        assert_eq!(response.reason.as_deref(), Some("Cannot convert gram (mass) to liter (volume)"));

        let response = convert_units("1", "stick", "gram");
        assert_eq!(response.reason.as_deref(), Some("Unrecognized unit 'stick'"));

        let response = convert_units("lots", "gram", "ounce");
        assert_eq!(response.reason.as_deref(), Some("Quantity 'lots' is not a number"));
    }

    #[test]
    fn test_combine_ingredients_counts() {
        let response = combine_ingredients(vec![
            Ingredient::new("flour", "1", "kilogram"),
            Ingredient::new("flour", "500", "gram"),
            Ingredient::new("milk", "1", "liter"),
            Ingredient::new("milk", "200", "gram"),
        ]);
        assert_eq!(response.input_count, 4);
        assert_eq!(response.item_count, 2);
        assert_eq!(response.unresolved_count, 1);
        assert_eq!(response.items[0].quantity, "1.5");
    }
}
