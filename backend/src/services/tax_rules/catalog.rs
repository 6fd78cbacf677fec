use crate::error::ApiError;
use actix_web::{web, HttpResponse, Responder};
use common::catalog;
use serde::Serialize;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StateEntry {
    pub name: String,
    pub abbreviation: &'static str,
    pub sub_regions: &'static [&'static str],
}

/// Lists every state with its postal code and the cities that get their own
/// rules, so the form can lay out one block per jurisdiction.
pub(crate) async fn process() -> impl Responder {
    let states: Vec<_> = catalog::states().collect();
    HttpResponse::Ok().json(states)
}

/// Looks up a single state by name; unknown names are a 404.
pub(crate) async fn state(name: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let name = name.into_inner();
    let abbreviation = catalog::abbreviation(&name)
        .ok_or_else(|| ApiError::NotFound(format!("unknown state: {}", name)))?;
    let sub_regions = catalog::sub_regions(&name).unwrap_or(&[]);
    Ok(HttpResponse::Ok().json(StateEntry {
        name,
        abbreviation,
        sub_regions,
    }))
}
