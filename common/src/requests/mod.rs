use crate::assembler::TopLevelInputs;
use crate::inputs::{FormInputs, RuleField};
use crate::model::TangibleCategory;
use serde::Deserialize;
use std::collections::HashMap;

/// Values of one state or city block in the rule form. Every field is optional.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegionForm {
    pub taxable: Option<bool>,
    pub special_treatment: Option<bool>,
    pub calculation_type: Option<String>,
    pub description: Option<String>,
    pub calculation_value: Option<String>,
}

/// Request payload for the preview, create and CSV endpoints: the whole form
/// as currently filled in. `regions` is keyed by state or city name.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentForm {
    #[serde(default)]
    pub tax_code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tangible_category: TangibleCategory,
    #[serde(default)]
    pub regions: HashMap<String, RegionForm>,
}

impl DocumentForm {
    pub fn top_level(&self) -> TopLevelInputs {
        TopLevelInputs {
            tax_code: self.tax_code.clone(),
            description: self.description.clone(),
            title: self.title.clone(),
            tangible_category: self.tangible_category,
        }
    }

    pub fn rule_inputs(&self) -> FormInputs {
        let mut inputs = FormInputs::new();
        for (region, form) in &self.regions {
            if let Some(value) = form.taxable {
                inputs.set_flag(region.as_str(), RuleField::Taxable, value);
            }
            if let Some(value) = form.special_treatment {
                inputs.set_flag(region.as_str(), RuleField::SpecialTreatment, value);
            }
            if let Some(value) = &form.calculation_type {
                inputs.set_text(region.as_str(), RuleField::CalculationType, value.as_str());
            }
            if let Some(value) = &form.description {
                inputs.set_text(region.as_str(), RuleField::Description, value.as_str());
            }
            if let Some(value) = &form.calculation_value {
                inputs.set_text(region.as_str(), RuleField::CalculationValue, value.as_str());
            }
        }
        inputs
    }
}
