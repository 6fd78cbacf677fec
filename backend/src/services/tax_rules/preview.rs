//! # Document Preview Service
//!
//! Backs `POST /api/tax_rules/preview?view=...`. The submitted form is turned
//! into a document and projected into the requested view:
//!
//! - `json` (default): the pretty-printed document. It receives its own fresh
//!   identifier, unrelated to the one assigned by `/create`.
//! - `states`: one row per state.
//! - `cities`: one row per Illinois/Colorado city.

use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::requests::DocumentForm;
use common::{build_document, project, Projection, ViewMode};
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct PreviewQuery {
    pub view: Option<String>,
}

pub(crate) async fn process(
    query: web::Query<PreviewQuery>,
    payload: web::Json<DocumentForm>,
) -> Result<HttpResponse, ApiError> {
    let mode = match query.view.as_deref() {
        Some(view) => view.parse::<ViewMode>()?,
        None => ViewMode::Json,
    };

    let form = payload.into_inner();
    let document = build_document(&form.top_level(), &form.rule_inputs());

    let response = match project(&document, mode)? {
        Projection::Json(text) => HttpResponse::Ok()
            .content_type("application/json")
            .body(text),
        Projection::States(rows) => HttpResponse::Ok().json(rows),
        Projection::Cities(rows) => HttpResponse::Ok().json(rows),
    };
    Ok(response)
}
