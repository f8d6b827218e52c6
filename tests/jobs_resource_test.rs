//! End-to-end tests for `/api/jobs` and `/api/secure/jobs`.

#[macro_use]
mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{OfferFixture, TestApp};

struct Jobs;

impl OfferFixture for Jobs {
    const RESOURCE: &'static str = "jobs";

    fn sample() -> Value {
        json!({
            "userId": "1",
            "title": "sample work",
            "description": "description",
            "mode": "REMOTE",
            "location": { "region": "Mazowieckie", "city": "Warszawa" },
            "type": ["TEMPORARY"],
            "language": ["PL"]
        })
    }

    fn other() -> Value {
        json!({
            "title": "warehouse picker",
            "description": "night shifts, transport provided",
            "mode": "ON_SITE",
            "location": { "region": "Malopolskie", "city": "Krakow" },
            "type": ["PERMANENT", "SEASONAL"],
            "language": ["UA", "EN"]
        })
    }
}

offer_resource_tests!(Jobs);

#[rstest::rstest]
#[case::unknown_mode("mode", json!("SOMETIMES"))]
#[case::no_types("type", json!([]))]
#[case::repeated_type("type", json!(["TEMPORARY", "TEMPORARY"]))]
#[case::unknown_language("language", json!(["DE"]))]
#[case::no_languages("language", json!([]))]
#[case::blank_city("location", json!({ "region": "Mazowieckie", "city": " " }))]
#[tokio::test]
async fn invalid_job_fields_are_rejected(#[case] field: &str, #[case] value: Value) {
    let app = TestApp::spawn().await;
    let mut request = Jobs::sample();
    request[field] = value;

    let response = app.post(&Jobs::secure_path(), &request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}", response.body);
}

#[tokio::test]
async fn list_filters_by_mode_and_city() {
    let app = TestApp::spawn().await;
    app.post(&Jobs::secure_path(), &Jobs::sample()).await;
    let other = app.post(&Jobs::secure_path(), &Jobs::other()).await;

    let by_mode = app.get("/api/jobs?mode=ON_SITE").await;
    let by_city = app.get("/api/jobs?city=Krakow&size=5").await;
    let nowhere = app.get("/api/jobs?region=Pomorskie").await;

    assert_eq!(by_mode.body["content"], json!([other.body]));
    assert_eq!(by_city.body["content"], json!([other.body]));
    assert_eq!(nowhere.body["totalElements"], 0);
}

#[tokio::test]
async fn health_and_docs_are_served() {
    let app = TestApp::spawn().await;

    let health = app.get("/health").await;
    let docs = app.get("/api-docs/openapi.json").await;

    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["database"], "healthy");
    assert_eq!(docs.status, StatusCode::OK);
    assert!(docs.body["paths"]["/api/secure/jobs"].is_object());
}
