//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::errors::AppError;

/// Validated JSON extractor that automatically validates requests.
///
/// Both malformed bodies and failed validation are rejected with
/// `400 Bad Request`.
///
/// # Example
///
/// ```rust,ignore
/// use classifieds_api::api::extractors::ValidatedJson;
/// use classifieds_api::domain::JobOffer;
///
/// async fn create(ValidatedJson(offer): ValidatedJson<JobOffer>) {
///     // offer is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value.validate().map_err(|e| {
            let message = format_validation_errors(&e);
            tracing::debug!(%message, "Request body rejected");
            AppError::validation(message)
        })?;

        Ok(ValidatedJson(value))
    }
}

/// Format validation errors (including nested structs) into one string
fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();
    collect_messages(errors, &mut messages);
    messages.join(", ")
}

fn collect_messages(errors: &ValidationErrors, messages: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(errs) => {
                messages.extend(errs.iter().map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                }));
            }
            ValidationErrorsKind::Struct(inner) => collect_messages(inner, messages),
            ValidationErrorsKind::List(items) => {
                for inner in items.values() {
                    collect_messages(inner, messages);
                }
            }
        }
    }
}
