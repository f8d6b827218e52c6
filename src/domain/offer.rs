//! Fields and behavior shared by every offer type.

use std::fmt::Debug;

use chrono::NaiveDateTime;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validation::{allowed_characters, not_blank};

/// Identifier of the user owning an offer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Region and city pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Location {
    #[validate(
        length(max = 80, message = "Region must be at most 80 characters"),
        custom(function = "not_blank", message = "Region must not be blank"),
        custom(function = "allowed_characters", message = "Region contains a disallowed character")
    )]
    #[schema(example = "Mazowieckie")]
    pub region: String,
    #[validate(
        length(max = 80, message = "City must be at most 80 characters"),
        custom(function = "not_blank", message = "City must not be blank"),
        custom(function = "allowed_characters", message = "City contains a disallowed character")
    )]
    #[schema(example = "Warszawa")]
    pub city: String,
}

impl Location {
    pub fn new(region: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            city: city.into(),
        }
    }
}

/// Offer fields common to all offer types.
///
/// `id`, `user_id` and `modified_date` are assigned by the server; values
/// sent by clients are accepted on input and then overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfferBase {
    #[serde(default)]
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[validate(
        length(max = 80, message = "Title must be at most 80 characters"),
        custom(function = "not_blank", message = "Title must not be blank"),
        custom(function = "allowed_characters", message = "Title contains a disallowed character")
    )]
    #[schema(example = "sample work", max_length = 80)]
    pub title: String,
    #[validate(
        length(max = 2000, message = "Description must be at most 2000 characters"),
        custom(function = "not_blank", message = "Description must not be blank"),
        custom(function = "allowed_characters", message = "Description contains a disallowed character")
    )]
    #[schema(example = "description", max_length = 2000)]
    pub description: String,
    #[serde(default)]
    pub modified_date: Option<NaiveDateTime>,
}

impl OfferBase {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            user_id: None,
            title: title.into(),
            description: description.into(),
            modified_date: None,
        }
    }
}

/// Offer categories, one per REST resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferKind {
    Jobs,
    Transport,
}

impl OfferKind {
    /// Path segment under `/api` and `/api/secure`
    pub fn suffix(&self) -> &'static str {
        match self {
            OfferKind::Jobs => "jobs",
            OfferKind::Transport => "transport",
        }
    }
}

impl std::fmt::Display for OfferKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Implemented by every concrete offer type.
pub trait Offer:
    Debug + Clone + Send + Sync + Serialize + DeserializeOwned + Validate + 'static
{
    /// Listing criteria accepted by `GET /api/{kind}`
    type Filter: Debug + Default + Send + Sync + DeserializeOwned + 'static;

    const KIND: OfferKind;

    fn base(&self) -> &OfferBase;

    fn base_mut(&mut self) -> &mut OfferBase;

    fn id(&self) -> Option<i64> {
        self.base().id
    }
}
