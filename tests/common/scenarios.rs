//! Scenarios shared by every offer resource.

use axum::http::{Method, StatusCode};
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use super::{OfferFixture, TestApp, FIXED_MODIFIED_DATE, OWNER};

async fn create<F: OfferFixture>(app: &TestApp, body: &Value) -> Value {
    let response = app.post(&F::secure_path(), body).await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    response.body
}

fn id_of(offer: &Value) -> i64 {
    offer["id"].as_i64().expect("offer has an id")
}

fn without_id(mut offer: Value) -> Value {
    offer
        .as_object_mut()
        .expect("offer is a JSON object")
        .remove("id");
    offer
}

async fn total_elements<F: OfferFixture>(app: &TestApp) -> u64 {
    let response = app.get(&F::public_path()).await;
    assert_eq!(response.status, StatusCode::OK);
    response.body["totalElements"]
        .as_u64()
        .expect("page has totalElements")
}

pub async fn posting_sample_returns_created<F: OfferFixture>() {
    let app = TestApp::spawn().await;

    let response = app.post(&F::secure_path(), &F::sample()).await;

    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
}

pub async fn created_offer_is_listed<F: OfferFixture>() {
    let app = TestApp::spawn().await;
    let created = create::<F>(&app, &F::sample()).await;

    let response = app.get(&F::public_path()).await;

    assert_eq!(response.status, StatusCode::OK);
    let content = response.body["content"]
        .as_array()
        .expect("page has content");
    assert!(content.contains(&created));
}

pub async fn created_offer_is_fetched_by_id<F: OfferFixture>() {
    let app = TestApp::spawn().await;
    let created = create::<F>(&app, &F::sample()).await;

    let response = app
        .get(&format!("{}/{}", F::public_path(), id_of(&created)))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, created);
}

pub async fn created_offer_matches_request_with_server_fields<F: OfferFixture>() {
    let app = TestApp::spawn().await;
    let mut request = F::sample();
    request["userId"] = json!("somebody-else");
    request["modifiedDate"] = json!("1999-01-01T12:00:00");

    let created = create::<F>(&app, &request).await;

    let mut expected = request;
    expected["userId"] = json!(OWNER);
    expected["modifiedDate"] = json!(FIXED_MODIFIED_DATE);
    assert_eq!(without_id(created), without_id(expected));
}

pub async fn text_field_is_rejected<F: OfferFixture>(field: &str, value: String) {
    let app = TestApp::spawn().await;
    let mut request = F::sample();
    request[field] = json!(value);

    let response = app.post(&F::secure_path(), &request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST, "{field} = {value:?}");
    assert_eq!(response.body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(total_elements::<F>(&app).await, 0);
}

pub async fn text_field_is_accepted<F: OfferFixture>(field: &str, value: String) {
    let app = TestApp::spawn().await;
    let mut request = F::sample();
    request[field] = json!(value);

    let created = create::<F>(&app, &request).await;

    assert_eq!(created[field], json!(value));
}

pub async fn client_supplied_id_is_ignored<F: OfferFixture>() {
    let app = TestApp::spawn().await;
    let mut request = F::sample();
    request["id"] = json!(42);

    let created = create::<F>(&app, &request).await;

    assert_ne!(id_of(&created), 42);
}

pub async fn create_without_token_is_unauthorized<F: OfferFixture>() {
    let app = TestApp::spawn().await;

    let response = app
        .send(Method::POST, &F::secure_path(), None, Some(&F::sample()))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(total_elements::<F>(&app).await, 0);
}

pub async fn unknown_id_is_not_found<F: OfferFixture>() {
    let app = TestApp::spawn().await;

    let response = app.get(&format!("{}/999", F::public_path())).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"]["code"], "NOT_FOUND");
}

pub async fn owner_update_restamps_modified_date<F: OfferFixture>() {
    let app = TestApp::spawn().await;
    let created = create::<F>(&app, &F::sample()).await;
    let id = id_of(&created);
    app.clock.set(Utc.with_ymd_and_hms(2020, 10, 18, 12, 30, 0).unwrap());

    let response = app
        .put_as(OWNER, &format!("{}/{}", F::secure_path(), id), &F::other())
        .await;

    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    assert_eq!(id_of(&response.body), id);
    assert_eq!(response.body["title"], F::other()["title"]);
    assert_eq!(response.body["modifiedDate"], "2020-10-18T12:30:00");
    let fetched = app.get(&format!("{}/{}", F::public_path(), id)).await;
    assert_eq!(fetched.body, response.body);
}

pub async fn non_owner_cannot_update_or_delete<F: OfferFixture>() {
    let app = TestApp::spawn().await;
    let created = create::<F>(&app, &F::sample()).await;
    let uri = format!("{}/{}", F::secure_path(), id_of(&created));

    let update = app.put_as("2", &uri, &F::other()).await;
    let delete = app.delete_as("2", &uri).await;

    assert_eq!(update.status, StatusCode::NOT_FOUND);
    assert_eq!(delete.status, StatusCode::NOT_FOUND);
    let fetched = app
        .get(&format!("{}/{}", F::public_path(), id_of(&created)))
        .await;
    assert_eq!(fetched.body, created);
}

pub async fn owner_delete_removes_offer<F: OfferFixture>() {
    let app = TestApp::spawn().await;
    let created = create::<F>(&app, &F::sample()).await;
    let id = id_of(&created);

    let response = app
        .delete_as(OWNER, &format!("{}/{}", F::secure_path(), id))
        .await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    let fetched = app.get(&format!("{}/{}", F::public_path(), id)).await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
    let again = app
        .delete_as(OWNER, &format!("{}/{}", F::secure_path(), id))
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

pub async fn list_is_paged<F: OfferFixture>() {
    let app = TestApp::spawn().await;
    let mut ids = Vec::new();
    for _ in 0..3 {
        ids.push(id_of(&create::<F>(&app, &F::sample()).await));
    }

    let second = app
        .get(&format!("{}?page=1&size=2", F::public_path()))
        .await;
    let newest_first = app
        .get(&format!("{}?sort=id,desc", F::public_path()))
        .await;

    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.body["totalElements"], 3);
    assert_eq!(second.body["totalPages"], 2);
    assert_eq!(second.body["number"], 1);
    assert_eq!(second.body["size"], 2);
    let content = second.body["content"].as_array().expect("page content");
    assert_eq!(content.len(), 1);
    assert_eq!(id_of(&content[0]), ids[2]);

    assert_eq!(id_of(&newest_first.body["content"][0]), ids[2]);
}

pub async fn list_filters_by_phrase<F: OfferFixture>() {
    let app = TestApp::spawn().await;
    let mut by_title = F::sample();
    by_title["title"] = json!("haystack with needle inside");
    let mut by_description = F::sample();
    by_description["description"] = json!("the needle is described here");
    let title_match = create::<F>(&app, &by_title).await;
    let description_match = create::<F>(&app, &by_description).await;
    create::<F>(&app, &F::sample()).await;

    let response = app
        .get(&format!("{}?phrase=needle", F::public_path()))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["totalElements"], 2);
    assert_eq!(
        response.body["content"],
        json!([title_match, description_match])
    );

    let shouted = app
        .get(&format!("{}?phrase=NEEDLE", F::public_path()))
        .await;
    let wildcard = app
        .get(&format!("{}?phrase=need_e", F::public_path()))
        .await;
    assert_eq!(shouted.body["totalElements"], 2);
    assert_eq!(wildcard.body["totalElements"], 0);
}

pub async fn unaddressable_page_is_rejected<F: OfferFixture>() {
    let app = TestApp::spawn().await;
    create::<F>(&app, &F::sample()).await;

    let response = app
        .get(&format!("{}?page={}", F::public_path(), u64::MAX))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["code"], "BAD_REQUEST");
}

pub async fn unknown_sort_field_is_rejected<F: OfferFixture>() {
    let app = TestApp::spawn().await;

    let response = app
        .get(&format!("{}?sort=price,asc", F::public_path()))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["code"], "BAD_REQUEST");
}
