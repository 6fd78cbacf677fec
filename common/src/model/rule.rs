use crate::model::rule_map::RuleMap;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_DESCRIPTION: &str = "description3";
pub const DEFAULT_CALCULATION_VALUE: &str = "0";

/// How `calculationValue` is applied by downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CalculationType {
    #[default]
    Fixed,
    Percentage,
}

impl CalculationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationType::Fixed => "FIXED",
            CalculationType::Percentage => "PERCENTAGE",
        }
    }

    /// Maps the select-box text to a type. Anything other than the two known
    /// options is left to the caller's default.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "FIXED" => Some(CalculationType::Fixed),
            "PERCENTAGE" => Some(CalculationType::Percentage),
            _ => None,
        }
    }
}

impl fmt::Display for CalculationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sales-tax configuration for one state or city.
///
/// For cities `abbreviation` repeats the city name. `calculation_value` keeps
/// whatever text was typed into the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRule {
    pub name: String,
    pub abbreviation: String,
    pub taxable: bool,
    pub special_treatment: bool,
    pub calculation_type: CalculationType,
    pub description: String,
    pub calculation_value: String,
    /// City rules, present only for states that have them.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "cities")]
    pub sub_regions: Option<RuleMap>,
}

impl RegionRule {
    /// A rule holding the values an untouched form produces.
    pub fn with_defaults(name: impl Into<String>, abbreviation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbreviation: abbreviation.into(),
            taxable: false,
            special_treatment: false,
            calculation_type: CalculationType::default(),
            description: DEFAULT_DESCRIPTION.to_string(),
            calculation_value: DEFAULT_CALCULATION_VALUE.to_string(),
            sub_regions: None,
        }
    }
}
