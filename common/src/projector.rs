//! Preview and CSV export views of a document.
//!
//! - `Json`: the whole document, pretty printed, under its own fresh id
//! - `StateTable`: one row per state, city rules ignored
//! - `CityTable`: one row per city of every state that has city rules
//!
//! CSV output uses minimal quoting, `\n` line endings and `True`/`False` for
//! booleans.

use crate::error::ExportError;
use crate::model::{CalculationType, Document, RegionRule};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use log::debug;
use serde::Serialize;
use std::str::FromStr;

pub const STATE_CSV_FILE_NAME: &str = "state_tax_rules.csv";
pub const CITY_CSV_FILE_NAME: &str = "city_tax_rules.csv";

pub const STATE_HEADERS: [&str; 7] = [
    "State",
    "Abbreviation",
    "Taxable",
    "Special Treatment",
    "Calculation Type",
    "Description",
    "Calculation Value",
];

pub const CITY_HEADERS: [&str; 7] = [
    "State",
    "City",
    "Taxable",
    "Special Treatment",
    "Calculation Type",
    "Description",
    "Calculation Value",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Json,
    StateTable,
    CityTable,
}

impl FromStr for ViewMode {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ViewMode::Json),
            "states" | "state" => Ok(ViewMode::StateTable),
            "cities" | "city" => Ok(ViewMode::CityTable),
            other => Err(ExportError::UnknownView(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateRow {
    pub state: String,
    pub abbreviation: String,
    pub taxable: bool,
    pub special_treatment: bool,
    pub calculation_type: CalculationType,
    pub description: String,
    pub calculation_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityRow {
    pub state: String,
    pub city: String,
    pub taxable: bool,
    pub special_treatment: bool,
    pub calculation_type: CalculationType,
    pub description: String,
    pub calculation_value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    Json(String),
    States(Vec<StateRow>),
    Cities(Vec<CityRow>),
}

pub fn project(document: &Document, mode: ViewMode) -> Result<Projection, ExportError> {
    let projection = match mode {
        ViewMode::Json => Projection::Json(document.clone().with_fresh_id().to_pretty_json()?),
        ViewMode::StateTable => Projection::States(state_rows(document)),
        ViewMode::CityTable => Projection::Cities(city_rows(document)),
    };
    debug!("Projected document as {:?}", mode);
    Ok(projection)
}

pub fn state_rows(document: &Document) -> Vec<StateRow> {
    document
        .jurisdictional_sales_tax_rules
        .iter()
        .map(|(state, rule)| StateRow {
            state: state.to_string(),
            abbreviation: rule.abbreviation.clone(),
            taxable: rule.taxable,
            special_treatment: rule.special_treatment,
            calculation_type: rule.calculation_type,
            description: rule.description.clone(),
            calculation_value: rule.calculation_value.clone(),
        })
        .collect()
}

pub fn city_rows(document: &Document) -> Vec<CityRow> {
    document
        .jurisdictional_sales_tax_rules
        .iter()
        .filter_map(|(state, rule)| rule.sub_regions.as_ref().map(|cities| (state, cities)))
        .flat_map(|(state, cities)| {
            cities.iter().map(move |(city, rule)| city_row(state, city, rule))
        })
        .collect()
}

fn city_row(state: &str, city: &str, rule: &RegionRule) -> CityRow {
    CityRow {
        state: state.to_string(),
        city: city.to_string(),
        taxable: rule.taxable,
        special_treatment: rule.special_treatment,
        calculation_type: rule.calculation_type,
        description: rule.description.clone(),
        calculation_value: rule.calculation_value.clone(),
    }
}

fn bool_cell(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

fn write_csv<const N: usize>(
    headers: [&str; N],
    rows: impl Iterator<Item = [String; N]>,
) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(&row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn states_csv(rows: &[StateRow]) -> Result<String, ExportError> {
    write_csv(
        STATE_HEADERS,
        rows.iter().map(|r| {
            [
                r.state.clone(),
                r.abbreviation.clone(),
                bool_cell(r.taxable).to_string(),
                bool_cell(r.special_treatment).to_string(),
                r.calculation_type.to_string(),
                r.description.clone(),
                r.calculation_value.clone(),
            ]
        }),
    )
}

pub fn cities_csv(rows: &[CityRow]) -> Result<String, ExportError> {
    write_csv(
        CITY_HEADERS,
        rows.iter().map(|r| {
            [
                r.state.clone(),
                r.city.clone(),
                bool_cell(r.taxable).to_string(),
                bool_cell(r.special_treatment).to_string(),
                r.calculation_type.to_string(),
                r.description.clone(),
                r.calculation_value.clone(),
            ]
        }),
    )
}

/// Link target that lets a browser download `csv` without another request.
pub fn to_data_uri(csv: &str) -> String {
    format!("data:file/csv;base64,{}", BASE64.encode(csv.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::{TopLevelInputs, build_document};
    use crate::inputs::{FormInputs, RuleField};

    fn default_document() -> Document {
        build_document(&TopLevelInputs::default(), &FormInputs::new())
    }

    #[test]
    fn parses_view_names() {
        assert_eq!("JSON".parse::<ViewMode>().unwrap(), ViewMode::Json);
        assert_eq!("states".parse::<ViewMode>().unwrap(), ViewMode::StateTable);
        assert_eq!("city".parse::<ViewMode>().unwrap(), ViewMode::CityTable);
        assert!(matches!(
            "chart".parse::<ViewMode>(),
            Err(ExportError::UnknownView(v)) if v == "chart"
        ));
    }

    #[test]
    fn state_rows_follow_document() {
        let rows = state_rows(&default_document());
        assert_eq!(rows.len(), 51);
        assert_eq!(rows[0].state, "Alabama");
        assert_eq!(rows[0].abbreviation, "AL");
        assert_eq!(rows[50].abbreviation, "DC");
    }

    #[test]
    fn city_rows_cover_both_parent_states() {
        let rows = city_rows(&default_document());
        assert_eq!(rows.len(), 70);
        assert_eq!(rows.iter().filter(|r| r.state == "Colorado").count(), 69);
        // Colorado precedes Illinois in the catalog.
        assert_eq!(rows[0].city, "Arvada");
        assert_eq!(rows[69].state, "Illinois");
        assert_eq!(rows[69].city, "Chicago");
    }

    #[test]
    fn city_table_without_cities_has_header_only() {
        let mut doc = default_document();
        doc.jurisdictional_sales_tax_rules = doc
            .jurisdictional_sales_tax_rules
            .iter()
            .map(|(name, rule)| {
                let mut rule = rule.clone();
                rule.sub_regions = None;
                (name.to_string(), rule)
            })
            .collect();

        let rows = city_rows(&doc);
        assert!(rows.is_empty());
        let csv = cities_csv(&rows).unwrap();
        assert_eq!(
            csv,
            "State,City,Taxable,Special Treatment,Calculation Type,Description,Calculation Value\n"
        );
    }

    #[test]
    fn untaxed_states_csv() {
        let csv = states_csv(&state_rows(&default_document())).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 52);
        assert_eq!(lines[0], STATE_HEADERS.join(","));
        assert_eq!(lines[1], "Alabama,AL,False,False,FIXED,description3,0");
        for line in &lines[1..] {
            let cells: Vec<&str> = line.split(',').collect();
            assert_eq!(cells[2], "False");
        }
    }

    #[test]
    fn csv_quotes_fields_with_commas_and_quotes() {
        let mut inputs = FormInputs::new();
        inputs
            .set_flag("Alabama", RuleField::Taxable, true)
            .set_text("Alabama", RuleField::Description, "food, \"prepared\"");
        let doc = build_document(&TopLevelInputs::default(), &inputs);
        let csv = states_csv(&state_rows(&doc)).unwrap();
        assert_eq!(
            csv.lines().nth(1),
            Some("Alabama,AL,True,False,FIXED,\"food, \"\"prepared\"\"\",0")
        );
    }

    #[test]
    fn json_preview_gets_its_own_id() {
        let doc = default_document().with_fresh_id();
        let Projection::Json(text) = project(&doc, ViewMode::Json).unwrap() else {
            panic!("expected json projection");
        };
        let previewed: Document = serde_json::from_str(&text).unwrap();
        assert!(previewed.id.is_some());
        assert_ne!(previewed.id, doc.id);
        assert_eq!(
            previewed.jurisdictional_sales_tax_rules,
            doc.jurisdictional_sales_tax_rules
        );
    }

    #[test]
    fn data_uri_decodes_back_to_csv() {
        let uri = to_data_uri("State,City\n");
        let encoded = uri.strip_prefix("data:file/csv;base64,").unwrap();
        assert_eq!(BASE64.decode(encoded).unwrap(), b"State,City\n");
    }
}
