//! Assembles the full tax-code document from the form.

use crate::builder::build_region_rule;
use crate::catalog;
use crate::error::ExportError;
use crate::inputs::RuleInputs;
use crate::model::{Document, ObjectId, RuleMap, TangibleCategory};
use log::info;

pub const EXPORT_FILE_NAME: &str = "mongodb_document.json";
pub const EXPORT_MIME: &str = "application/json";

/// Document-level form fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopLevelInputs {
    pub tax_code: String,
    pub description: String,
    pub title: String,
    pub tangible_category: TangibleCategory,
}

/// Builds the document without an identifier: one sales-tax rule per catalog
/// state, in catalog order.
pub fn build_document(top: &TopLevelInputs, inputs: &impl RuleInputs) -> Document {
    let jurisdictional_sales_tax_rules: RuleMap = catalog::states()
        .map(|state| {
            (
                state.name.to_string(),
                build_region_rule(state.name, state.abbreviation, inputs),
            )
        })
        .collect();

    Document {
        tax_code: top.tax_code.clone(),
        description: top.description.clone(),
        title: top.title.clone(),
        tangible_category: top.tangible_category,
        jurisdictional_sales_tax_rules,
        jurisdictional_tax_rules: RuleMap::new(),
        id: None,
    }
}

/// A created document and the JSON text offered for download.
#[derive(Debug, Clone)]
pub struct Export {
    pub document: Document,
    pub json: String,
}

impl Export {
    pub fn id(&self) -> Option<ObjectId> {
        self.document.id
    }

    pub fn file_name(&self) -> &'static str {
        EXPORT_FILE_NAME
    }
}

/// Handles the "create document" action: stamps a fresh identifier and renders
/// the indented JSON.
pub fn create_export(document: Document) -> Result<Export, ExportError> {
    let document = document.with_fresh_id();
    let json = document.to_pretty_json()?;
    if let Some(id) = document.id {
        info!("Created tax code document {} ({} bytes)", id, json.len());
    }
    Ok(Export { document, json })
}
