//! Turns form values into [`RegionRule`]s.

use crate::catalog;
use crate::inputs::{RuleField, RuleInputs};
use crate::model::{CalculationType, RegionRule, RuleMap};

/// Builds the rule for one state or city.
///
/// Values are copied as entered; absent fields take the form defaults. When
/// `name` is a state with city-level rules, each of its cities is built the
/// same way (abbreviation = city name) and stored in catalog order.
pub fn build_region_rule(name: &str, abbreviation: &str, inputs: &impl RuleInputs) -> RegionRule {
    let defaults = RegionRule::with_defaults(name, abbreviation);

    let calculation_type = inputs
        .text(name, RuleField::CalculationType)
        .and_then(CalculationType::from_label)
        .unwrap_or(defaults.calculation_type);

    let sub_regions = catalog::sub_regions(name).map(|cities| build_city_rules(cities, inputs));

    RegionRule {
        taxable: inputs
            .flag(name, RuleField::Taxable)
            .unwrap_or(defaults.taxable),
        special_treatment: inputs
            .flag(name, RuleField::SpecialTreatment)
            .unwrap_or(defaults.special_treatment),
        calculation_type,
        description: inputs
            .text(name, RuleField::Description)
            .map(str::to_string)
            .unwrap_or_else(|| defaults.description.clone()),
        calculation_value: inputs
            .text(name, RuleField::CalculationValue)
            .map(str::to_string)
            .unwrap_or_else(|| defaults.calculation_value.clone()),
        sub_regions,
        ..defaults
    }
}

fn build_city_rules(cities: &[&str], inputs: &impl RuleInputs) -> RuleMap {
    cities
        .iter()
        .map(|city| (city.to_string(), build_region_rule(city, city, inputs)))
        .collect()
}
