//! CSV downloads of the state and city rule tables.
//!
//! `POST /csv/{table}` returns the file itself; `POST /csv/{table}/link`
//! returns a base64 data URI the page can put straight into an `<a download>`.

use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::projector::{self, CITY_CSV_FILE_NAME, STATE_CSV_FILE_NAME};
use common::requests::DocumentForm;
use common::{build_document, ViewMode};
use log::debug;
use serde::Serialize;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CsvLink {
    pub file_name: &'static str,
    pub href: String,
}

fn render_table(table: &str, form: &DocumentForm) -> Result<(&'static str, String), ApiError> {
    let document = build_document(&form.top_level(), &form.rule_inputs());
    match table.parse::<ViewMode>()? {
        ViewMode::StateTable => {
            let rows = projector::state_rows(&document);
            debug!("Rendering {} state rows", rows.len());
            Ok((STATE_CSV_FILE_NAME, projector::states_csv(&rows)?))
        }
        ViewMode::CityTable => {
            let rows = projector::city_rows(&document);
            debug!("Rendering {} city rows", rows.len());
            Ok((CITY_CSV_FILE_NAME, projector::cities_csv(&rows)?))
        }
        ViewMode::Json => Err(ApiError::BadRequest(format!("{} is not a table", table))),
    }
}

pub(crate) async fn process(
    table: web::Path<String>,
    payload: web::Json<DocumentForm>,
) -> Result<HttpResponse, ApiError> {
    let (file_name, csv) = render_table(&table, &payload)?;
    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", file_name),
        ))
        .body(csv))
}

pub(crate) async fn link(
    table: web::Path<String>,
    payload: web::Json<DocumentForm>,
) -> Result<HttpResponse, ApiError> {
    let (file_name, csv) = render_table(&table, &payload)?;
    Ok(HttpResponse::Ok().json(CsvLink {
        file_name,
        href: projector::to_data_uri(&csv),
    }))
}
