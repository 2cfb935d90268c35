//! Unit conversion functions
//!
//! Converts quantities between units of the same dimension by way of the
//! dimension's base unit.

use super::table::lookup_unit;

/// Parse a quantity string as a finite decimal number
///
/// Surrounding whitespace is ignored. Empty strings, `NaN` and infinities
/// are rejected.
pub fn parse_quantity(text: &str) -> Option<f64> {
    let value = text.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

/// Convert a quantity between two units
///
/// Returns None when either unit is unrecognized, the quantity does not
/// parse, or the units measure different dimensions.
///
/// Examples:
/// - convert("500", "gram", "kilogram") -> Some(0.5)
/// - convert("1", "gram", "liter") -> None
pub fn convert(quantity: &str, from_unit: &str, to_unit: &str) -> Option<f64> {
    let from = lookup_unit(from_unit)?;
    let to = lookup_unit(to_unit)?;
    let value = parse_quantity(quantity)?;

    if from.dimension != to.dimension {
        return None;
    }

    // Same unit: skip the round trip through the base so the result is exact
    if from.name == to.name {
        return Some(value);
    }

    let base_value = value * from.factor_to_base;
    Some(base_value / to.factor_to_base)
}

/// Convert a numeric quantity between two units
///
/// Same as [`convert`] for callers that already hold a number.
pub fn convert_value(value: f64, from_unit: &str, to_unit: &str) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    let from = lookup_unit(from_unit)?;
    let to = lookup_unit(to_unit)?;
    if from.dimension != to.dimension {
        return None;
    }
    if from.name == to.name {
        return Some(value);
    }
    Some(value * from.factor_to_base / to.factor_to_base)
}

/// Check whether two units can be converted into one another
pub fn are_compatible(a: &str, b: &str) -> bool {
    match (lookup_unit(a), lookup_unit(b)) {
        (Some(a), Some(b)) => a.dimension == b.dimension,
        _ => false,
    }
}
