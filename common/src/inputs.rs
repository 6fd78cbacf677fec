//! Form values feeding the rule builder.
//!
//! Every jurisdiction (state or city) exposes the same five fields. A value is
//! addressed by an [`InputKey`] made of the jurisdiction name and the field, so
//! two regions never share a slot even though their fields have the same label.
//! Reading values goes through [`RuleInputs`]; whoever hosts the form decides
//! how they were collected.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleField {
    Taxable,
    SpecialTreatment,
    CalculationType,
    Description,
    CalculationValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputKey {
    pub region: String,
    pub field: RuleField,
}

impl InputKey {
    pub fn new(region: impl Into<String>, field: RuleField) -> Self {
        Self {
            region: region.into(),
            field,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputValue {
    Flag(bool),
    Text(String),
}

/// Source of per-region form values.
///
/// Returning `None` means the field was never touched; the builder then uses
/// the form default.
pub trait RuleInputs {
    fn flag(&self, region: &str, field: RuleField) -> Option<bool>;
    fn text(&self, region: &str, field: RuleField) -> Option<&str>;
}

/// Values collected in memory, e.g. from a submitted form payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInputs {
    values: HashMap<InputKey, InputValue>,
}

impl FormInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, region: impl Into<String>, field: RuleField, value: InputValue) -> &mut Self {
        self.values.insert(InputKey::new(region, field), value);
        self
    }

    pub fn set_flag(&mut self, region: impl Into<String>, field: RuleField, value: bool) -> &mut Self {
        self.set(region, field, InputValue::Flag(value))
    }

    pub fn set_text(
        &mut self,
        region: impl Into<String>,
        field: RuleField,
        value: impl Into<String>,
    ) -> &mut Self {
        self.set(region, field, InputValue::Text(value.into()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn get(&self, region: &str, field: RuleField) -> Option<&InputValue> {
        self.values.get(&InputKey::new(region, field))
    }
}

impl RuleInputs for FormInputs {
    fn flag(&self, region: &str, field: RuleField) -> Option<bool> {
        match self.get(region, field)? {
            InputValue::Flag(value) => Some(*value),
            InputValue::Text(_) => None,
        }
    }

    fn text(&self, region: &str, field: RuleField) -> Option<&str> {
        match self.get(region, field)? {
            InputValue::Text(value) => Some(value.as_str()),
            InputValue::Flag(_) => None,
        }
    }
}
