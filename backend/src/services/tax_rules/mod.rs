//! # Tax Rule Service Module
//!
//! HTTP surface of the tax rule builder. Every POST endpoint receives the whole
//! form as a `DocumentForm` JSON payload and rebuilds the document from it; no
//! state is kept between requests.
//!
//! ## Sub-modules:
//! - `catalog`: the jurisdiction list used to lay out the form.
//! - `preview`: JSON, state-table and city-table previews.
//! - `create`: the `mongodb_document.json` download.
//! - `csv`: `state_tax_rules.csv` / `city_tax_rules.csv` downloads and data URIs.

mod catalog;
mod create;
mod csv;
mod preview;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all tax rule endpoints.
const API_PATH: &str = "/api/tax_rules";

/// Configures and returns the Actix `Scope` for the tax rule routes.
///
/// # Registered Routes:
///
/// *   **`GET /catalog`**: states, postal codes and city lists.
/// *   **`GET /catalog/{state}`**: one state's postal code and cities.
/// *   **`POST /preview?view=json|states|cities`**: projection of the form.
/// *   **`POST /create`**: document with a fresh object id, as an attachment.
/// *   **`POST /csv/{table}`**: `states` or `cities` table as a CSV attachment.
/// *   **`POST /csv/{table}/link`**: the same CSV as a base64 data URI.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/catalog", get().to(catalog::process))
        .route("/catalog/{state}", get().to(catalog::state))
        .route("/preview", post().to(preview::process))
        .route("/create", post().to(create::process))
        .route("/csv/{table}", post().to(csv::process))
        .route("/csv/{table}/link", post().to(csv::link))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn catalog_lists_all_states() {
        let app = test::init_service(App::new().service(configure_routes())).await;
        let req = test::TestRequest::get().uri("/api/tax_rules/catalog").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let states = body.as_array().unwrap();
        assert_eq!(states.len(), 51);
        assert_eq!(states[0], json!({ "name": "Alabama", "abbreviation": "AL", "subRegions": [] }));
        let illinois = states.iter().find(|s| s["name"] == "Illinois").unwrap();
        assert_eq!(illinois["subRegions"], json!(["Chicago"]));
    }

    #[actix_web::test]
    async fn catalog_looks_up_one_state() {
        let app = test::init_service(App::new().service(configure_routes())).await;
        let req = test::TestRequest::get()
            .uri("/api/tax_rules/catalog/New%20York")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "name": "New York", "abbreviation": "NY", "subRegions": [] }));

        let req = test::TestRequest::get()
            .uri("/api/tax_rules/catalog/Colorado")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["subRegions"].as_array().unwrap().len(), 69);

        let req = test::TestRequest::get()
            .uri("/api/tax_rules/catalog/Atlantis")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn json_preview_has_id_and_all_states() {
        let app = test::init_service(App::new().service(configure_routes())).await;
        let req = test::TestRequest::post()
            .uri("/api/tax_rules/preview")
            .set_json(json!({ "taxCode": "TC1" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["taxCode"], "TC1");
        assert_eq!(body["_id"]["$oid"].as_str().unwrap().len(), 24);
        assert_eq!(body["jurisdictionalSalesTaxRules"].as_object().unwrap().len(), 51);
    }

    #[actix_web::test]
    async fn city_preview_reflects_form_values() {
        let app = test::init_service(App::new().service(configure_routes())).await;
        let req = test::TestRequest::post()
            .uri("/api/tax_rules/preview?view=cities")
            .set_json(json!({ "regions": { "Chicago": { "taxable": true } } }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 70);
        let chicago = rows.iter().find(|r| r["city"] == "Chicago").unwrap();
        assert_eq!(chicago["state"], "Illinois");
        assert_eq!(chicago["taxable"], true);
    }

    #[actix_web::test]
    async fn unknown_view_is_rejected() {
        let app = test::init_service(App::new().service(configure_routes())).await;
        let req = test::TestRequest::post()
            .uri("/api/tax_rules/preview?view=chart")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], 400);
    }

    #[actix_web::test]
    async fn create_returns_attachment_with_id_header() {
        let app = test::init_service(App::new().service(configure_routes())).await;
        let req = test::TestRequest::post()
            .uri("/api/tax_rules/create")
            .set_json(json!({ "title": "Books", "tangibleCategory": "TANGIBLE" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let disposition = resp.headers().get("Content-Disposition").unwrap();
        assert_eq!(disposition, "attachment; filename=\"mongodb_document.json\"");
        let id = resp
            .headers()
            .get("X-Document-Id")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["_id"]["$oid"], id.as_str());
        assert_eq!(body["title"], "Books");
        assert_eq!(body["jurisdictionalTaxRules"], json!({}));
    }

    #[actix_web::test]
    async fn state_csv_download() {
        let app = test::init_service(App::new().service(configure_routes())).await;
        let req = test::TestRequest::post()
            .uri("/api/tax_rules/csv/states")
            .set_json(json!({ "regions": { "Texas": { "calculationValue": "6.25" } } }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.headers().get("Content-Disposition").unwrap(),
            "attachment; filename=\"state_tax_rules.csv\""
        );
        let body = test::read_body(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert_eq!(text.lines().count(), 52);
        assert!(text.contains("\nTexas,TX,False,False,FIXED,description3,6.25\n"));
    }

    #[actix_web::test]
    async fn city_csv_link_is_a_data_uri() {
        let app = test::init_service(App::new().service(configure_routes())).await;
        let req = test::TestRequest::post()
            .uri("/api/tax_rules/csv/cities/link")
            .set_json(json!({}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["fileName"], "city_tax_rules.csv");
        assert!(body["href"]
            .as_str()
            .unwrap()
            .starts_with("data:file/csv;base64,"));
    }

    #[actix_web::test]
    async fn json_is_not_a_csv_table() {
        let app = test::init_service(App::new().service(configure_routes())).await;
        let req = test::TestRequest::post()
            .uri("/api/tax_rules/csv/json")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
