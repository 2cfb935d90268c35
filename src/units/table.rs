//! Unit table and conversion constants
//!
//! Every recognized unit maps to a dimension and a fixed factor to that
//! dimension's base unit (gram, liter, meter).

use serde::{Deserialize, Serialize};

/// Physical dimension a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Mass units, base gram
    Mass,
    /// Volume units, base liter
    Volume,
    /// Length units, base meter
    Length,
}

impl Dimension {
    /// Get the base unit identifier for this dimension
    pub fn base_unit(&self) -> &'static str {
        match self {
            Dimension::Mass => "gram",
            Dimension::Volume => "liter",
            Dimension::Length => "meter",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Mass => "mass",
            Dimension::Volume => "volume",
            Dimension::Length => "length",
        }
    }
}

/// A recognized unit with its dimension and factor to the base unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitSpec {
    pub name: &'static str,
    pub dimension: Dimension,
    /// Multiply a quantity in this unit by this factor to get base units
    pub factor_to_base: f64,
}

// ============================================================================
// Mass Conversion Constants (to grams)
// ============================================================================

/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per avoirdupois ounce
pub const G_PER_OZ: f64 = 28.349523125;
/// Grams per avoirdupois pound
pub const G_PER_LB: f64 = 453.59237;

// ============================================================================
// Volume Conversion Constants (to liters, US customary)
// ============================================================================

/// Liters per milliliter
pub const L_PER_ML: f64 = 0.001;
/// Liters per teaspoon
pub const L_PER_TSP: f64 = 0.00492892159375;
/// Liters per tablespoon
pub const L_PER_TBSP: f64 = 0.01478676478125;
/// Liters per cup
pub const L_PER_CUP: f64 = 0.2365882365;
/// Liters per pint
pub const L_PER_PINT: f64 = 0.473176473;
/// Liters per quart
pub const L_PER_QUART: f64 = 0.946352946;
/// Liters per gallon
pub const L_PER_GALLON: f64 = 3.785411784;

// ============================================================================
// Length Conversion Constants (to meters)
// ============================================================================

pub const M_PER_CM: f64 = 0.01;
pub const M_PER_MM: f64 = 0.001;
pub const M_PER_IN: f64 = 0.0254;
pub const M_PER_FT: f64 = 0.3048;
pub const M_PER_YD: f64 = 0.9144;
pub const M_PER_MI: f64 = 1609.344;

/// All recognized units, grouped by dimension
pub const UNITS: &[UnitSpec] = &[
    UnitSpec { name: "gram", dimension: Dimension::Mass, factor_to_base: 1.0 },
    UnitSpec { name: "kilogram", dimension: Dimension::Mass, factor_to_base: G_PER_KG },
    UnitSpec { name: "ounce", dimension: Dimension::Mass, factor_to_base: G_PER_OZ },
    UnitSpec { name: "pound", dimension: Dimension::Mass, factor_to_base: G_PER_LB },
    UnitSpec { name: "liter", dimension: Dimension::Volume, factor_to_base: 1.0 },
    UnitSpec { name: "milliliter", dimension: Dimension::Volume, factor_to_base: L_PER_ML },
    UnitSpec { name: "teaspoon", dimension: Dimension::Volume, factor_to_base: L_PER_TSP },
    UnitSpec { name: "tablespoon", dimension: Dimension::Volume, factor_to_base: L_PER_TBSP },
    UnitSpec { name: "cup", dimension: Dimension::Volume, factor_to_base: L_PER_CUP },
    UnitSpec { name: "pint", dimension: Dimension::Volume, factor_to_base: L_PER_PINT },
    UnitSpec { name: "quart", dimension: Dimension::Volume, factor_to_base: L_PER_QUART },
    UnitSpec { name: "gallon", dimension: Dimension::Volume, factor_to_base: L_PER_GALLON },
    UnitSpec { name: "meter", dimension: Dimension::Length, factor_to_base: 1.0 },
    UnitSpec { name: "centimeter", dimension: Dimension::Length, factor_to_base: M_PER_CM },
    UnitSpec { name: "millimeter", dimension: Dimension::Length, factor_to_base: M_PER_MM },
    UnitSpec { name: "inch", dimension: Dimension::Length, factor_to_base: M_PER_IN },
    UnitSpec { name: "foot", dimension: Dimension::Length, factor_to_base: M_PER_FT },
    UnitSpec { name: "yard", dimension: Dimension::Length, factor_to_base: M_PER_YD },
    UnitSpec { name: "mile", dimension: Dimension::Length, factor_to_base: M_PER_MI },
];

// ============================================================================
// Unit Recognition
// ============================================================================

/// Look up a unit by its exact identifier
///
/// Identifiers are matched exactly; no trimming, case folding, or plural
/// handling is done here.
pub fn lookup_unit(unit: &str) -> Option<&'static UnitSpec> {
    UNITS.iter().find(|spec| spec.name == unit)
}

/// Get the dimension of a unit, if recognized
pub fn dimension_of(unit: &str) -> Option<Dimension> {
    lookup_unit(unit).map(|spec| spec.dimension)
}

/// All units belonging to a dimension, in table order
pub fn units_in(dimension: Dimension) -> impl Iterator<Item = &'static UnitSpec> {
    UNITS.iter().filter(move |spec| spec.dimension == dimension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup_known_units() {
        assert_eq!(dimension_of("gram"), Some(Dimension::Mass));
        assert_eq!(dimension_of("pound"), Some(Dimension::Mass));
        assert_eq!(dimension_of("cup"), Some(Dimension::Volume));
        assert_eq!(dimension_of("gallon"), Some(Dimension::Volume));
        assert_eq!(dimension_of("inch"), Some(Dimension::Length));
        assert_eq!(dimension_of("mile"), Some(Dimension::Length));
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(lookup_unit("Gram").is_none());
        assert!(lookup_unit("grams").is_none());
        assert!(lookup_unit(" gram").is_none());
        assert!(lookup_unit("g").is_none());
        assert!(lookup_unit("").is_none());
    }

    #[test]
    fn test_unit_names_unique() {
        let names: HashSet<_> = UNITS.iter().map(|spec| spec.name).collect();
        assert_eq!(names.len(), UNITS.len());
    }

    #[test]
    fn test_base_units_have_unit_factor() {
        for dimension in [Dimension::Mass, Dimension::Volume, Dimension::Length] {
            let base = lookup_unit(dimension.base_unit()).unwrap();
            assert_eq!(base.dimension, dimension);
            assert_eq!(base.factor_to_base, 1.0);
        }
    }

    #[test]
    fn test_units_in_dimension() {
        assert_eq!(units_in(Dimension::Mass).count(), 4);
        assert_eq!(units_in(Dimension::Volume).count(), 8);
        assert_eq!(units_in(Dimension::Length).count(), 7);
    }
}
