//! Shared harness for end-to-end offer resource tests.
//!
//! Every offer type runs the same scenarios through [`offer_resource_tests!`]
//! against a router backed by an in-memory SQLite database and a clock
//! pinned to a known instant.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use serde_json::Value;
use tower::ServiceExt;

use classifieds_api::api::{create_router, AppState};
use classifieds_api::config::Config;
use classifieds_api::domain::UserId;
use classifieds_api::infra::Database;
use classifieds_api::services::{AuthService, Services};

pub mod scenarios;

pub const TEST_JWT_SECRET: &str = "test-secret-key-for-testing-only-32chars";

/// Owner used by the shared scenarios
pub const OWNER: &str = "1";

/// Time every offer is stamped with unless a test moves the clock
pub const FIXED_MODIFIED_DATE: &str = "2020-10-17T00:00:00";

pub fn fixed_now() -> DateTime<Utc> {
    Utc.from_utc_datetime(
        &NaiveDate::from_ymd_opt(2020, 10, 17)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("valid fixed date"),
    )
}

/// Clock that only moves when told to
pub struct FixedClock(Mutex<DateTime<Utc>>);

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.0.lock().expect("clock mutex") = now;
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.0.lock().expect("clock mutex")
    }
}

/// Status and decoded JSON body of a response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Router wired to real services over a fresh database
pub struct TestApp {
    router: Router,
    auth: Arc<dyn AuthService>,
    pub clock: Arc<FixedClock>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let mut config =
            Config::new("sqlite::memory:", TEST_JWT_SECRET).expect("valid test config");
        // every pooled connection would get its own in-memory database
        config.database_max_connections = 1;

        let database = Database::connect(&config)
            .await
            .expect("in-memory database with migrations");
        let clock = Arc::new(FixedClock::at(fixed_now()));
        let services = Services::with_clock(database.get_connection(), config, clock.clone());
        let state = AppState::from_services(Arc::new(database), &services);

        Self {
            auth: state.auth_service.clone(),
            router: create_router(state),
            clock,
        }
    }

    pub fn token_for(&self, user: &str) -> String {
        self.auth
            .issue_token(&UserId::new(user))
            .expect("token issued")
            .access_token
    }

    /// Send a request, authenticated as `user` when given
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        user: Option<&str>,
        body: Option<&Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = user {
            builder = builder.header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.token_for(user)),
            );
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("valid request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse { status, body }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None, None).await
    }

    /// POST as [`OWNER`]
    pub async fn post(&self, uri: &str, body: &Value) -> TestResponse {
        self.send(Method::POST, uri, Some(OWNER), Some(body)).await
    }

    pub async fn put_as(&self, user: &str, uri: &str, body: &Value) -> TestResponse {
        self.send(Method::PUT, uri, Some(user), Some(body)).await
    }

    pub async fn delete_as(&self, user: &str, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, Some(user), None).await
    }
}

/// One offer type as seen through the REST API
pub trait OfferFixture {
    /// Resource name under `/api` and `/api/secure`
    const RESOURCE: &'static str;

    /// A valid offer owned by [`OWNER`]
    fn sample() -> Value;

    /// A second valid offer, distinguishable from the sample
    fn other() -> Value;

    fn secure_path() -> String {
        format!("/api/secure/{}", Self::RESOURCE)
    }

    fn public_path() -> String {
        format!("/api/{}", Self::RESOURCE)
    }
}

/// Generate the shared scenario set for one [`OfferFixture`].
macro_rules! offer_resource_tests {
    ($fixture:ty) => {
        use $crate::common::scenarios;

        #[tokio::test]
        async fn posting_sample_returns_created() {
            scenarios::posting_sample_returns_created::<$fixture>().await;
        }

        #[tokio::test]
        async fn created_offer_is_listed() {
            scenarios::created_offer_is_listed::<$fixture>().await;
        }

        #[tokio::test]
        async fn created_offer_is_fetched_by_id() {
            scenarios::created_offer_is_fetched_by_id::<$fixture>().await;
        }

        #[tokio::test]
        async fn created_offer_matches_request_with_server_fields() {
            scenarios::created_offer_matches_request_with_server_fields::<$fixture>().await;
        }

        #[rstest::rstest]
        #[tokio::test]
        async fn blank_text_is_rejected(
            #[values("title", "description")] field: &str,
            #[values("", "   ")] value: &str,
        ) {
            scenarios::text_field_is_rejected::<$fixture>(field, value.to_string()).await;
        }

        #[rstest::rstest]
        #[tokio::test]
        async fn disallowed_character_is_rejected(
            #[values("title", "description")] field: &str,
            #[values('<', '>', '(', ')', '%', '#', '@', '"', '\'')] character: char,
        ) {
            scenarios::text_field_is_rejected::<$fixture>(field, format!("offer {character} text"))
                .await;
        }

        #[rstest::rstest]
        #[tokio::test]
        async fn overlong_text_is_rejected(
            #[values(("title", 81), ("title", 100), ("description", 2001))] case: (&str, usize),
        ) {
            let (field, length) = case;
            scenarios::text_field_is_rejected::<$fixture>(field, "a".repeat(length)).await;
        }

        #[rstest::rstest]
        #[tokio::test]
        async fn text_at_length_limit_is_accepted(
            #[values(("title", 80), ("description", 2000))] case: (&str, usize),
        ) {
            scenarios::text_field_is_accepted::<$fixture>(case.0, "a".repeat(case.1)).await;
        }

        #[tokio::test]
        async fn client_supplied_id_is_ignored() {
            scenarios::client_supplied_id_is_ignored::<$fixture>().await;
        }

        #[tokio::test]
        async fn create_without_token_is_unauthorized() {
            scenarios::create_without_token_is_unauthorized::<$fixture>().await;
        }

        #[tokio::test]
        async fn unknown_id_is_not_found() {
            scenarios::unknown_id_is_not_found::<$fixture>().await;
        }

        #[tokio::test]
        async fn owner_update_restamps_modified_date() {
            scenarios::owner_update_restamps_modified_date::<$fixture>().await;
        }

        #[tokio::test]
        async fn non_owner_cannot_update_or_delete() {
            scenarios::non_owner_cannot_update_or_delete::<$fixture>().await;
        }

        #[tokio::test]
        async fn owner_delete_removes_offer() {
            scenarios::owner_delete_removes_offer::<$fixture>().await;
        }

        #[tokio::test]
        async fn list_is_paged() {
            scenarios::list_is_paged::<$fixture>().await;
        }

        #[tokio::test]
        async fn list_filters_by_phrase() {
            scenarios::list_filters_by_phrase::<$fixture>().await;
        }

        #[tokio::test]
        async fn unaddressable_page_is_rejected() {
            scenarios::unaddressable_page_is_rejected::<$fixture>().await;
        }

        #[tokio::test]
        async fn unknown_sort_field_is_rejected() {
            scenarios::unknown_sort_field_is_rejected::<$fixture>().await;
        }
    };
}
