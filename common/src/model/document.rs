use crate::model::object_id::ObjectId;
use crate::model::rule_map::RuleMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TangibleCategory {
    #[default]
    Tangible,
    Intangible,
}

/// A tax code together with its per-jurisdiction sales-tax rules.
///
/// Documents are rebuilt from the form on every request. The identifier is
/// attached as a separate step (`with_id` / `with_fresh_id`) that yields a new
/// value, so the downloaded document and the preview carry independent ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub tax_code: String,
    pub description: String,
    pub title: String,
    pub tangible_category: TangibleCategory,
    pub jurisdictional_sales_tax_rules: RuleMap,
    /// Reserved for non-sales-tax rules; always empty for now.
    #[serde(default)]
    pub jurisdictional_tax_rules: RuleMap,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
}

impl Document {
    pub fn with_id(mut self, id: ObjectId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_fresh_id(self) -> Self {
        self.with_id(ObjectId::new())
    }

    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
