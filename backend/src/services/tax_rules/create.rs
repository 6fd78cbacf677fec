use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::assembler::EXPORT_MIME;
use common::requests::DocumentForm;
use common::{build_document, create_export};
use log::info;

/// `POST /api/tax_rules/create`: the "Create Document" button.
///
/// Builds the document from the submitted form, stamps a new object id and
/// returns the indented JSON as a `mongodb_document.json` download. The id is
/// echoed in the `X-Document-Id` header.
pub(crate) async fn process(payload: web::Json<DocumentForm>) -> Result<HttpResponse, ApiError> {
    let form = payload.into_inner();
    let document = build_document(&form.top_level(), &form.rule_inputs());
    let export = create_export(document)?;

    let mut response = HttpResponse::Ok();
    response.content_type(EXPORT_MIME).insert_header((
        "Content-Disposition",
        format!("attachment; filename=\"{}\"", export.file_name()),
    ));
    if let Some(id) = export.id() {
        info!("Serving {} for {}", export.file_name(), id);
        response.insert_header(("X-Document-Id", id.to_hex()));
    }
    Ok(response.body(export.json))
}
