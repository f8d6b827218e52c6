//! Pagination and sorting types for list endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::domain::{JobOffer, TransportOffer};
use crate::errors::{AppError, AppResult};

/// Pagination query parameters (reusable across all list endpoints)
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageRequest {
    /// Zero-based page index
    #[serde(default = "default_page")]
    pub page: u64,
    /// Page size, capped at 100
    #[serde(default = "default_size")]
    pub size: u64,
    /// `field[,asc|desc]` where field is `id`, `title` or `modifiedDate`
    #[serde(default)]
    pub sort: Option<String>,
}

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page,
            size,
            sort: None,
        }
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Get page size clamped to `1..=MAX_PAGE_SIZE`
    pub fn limit(&self) -> u64 {
        self.size.clamp(1, MAX_PAGE_SIZE)
    }

    /// Row offset of this page; pages past what SQL can address are rejected.
    pub fn offset(&self) -> AppResult<u64> {
        self.page
            .checked_mul(self.limit())
            .filter(|offset| i64::try_from(*offset).is_ok())
            .ok_or_else(|| AppError::bad_request(format!("page {} is out of range", self.page)))
    }

    /// Parse the `sort` parameter, defaulting to ascending id.
    pub fn sort(&self) -> AppResult<Sort> {
        match self.sort.as_deref() {
            None | Some("") => Ok(Sort::default()),
            Some(raw) => raw.parse(),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE)
    }
}

/// Sortable offer columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Id,
    Title,
    ModifiedDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl std::str::FromStr for Sort {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.split(',').map(str::trim);

        let field = match parts.next() {
            Some("id") => SortField::Id,
            Some("title") => SortField::Title,
            Some("modifiedDate") => SortField::ModifiedDate,
            _ => return Err(AppError::bad_request(format!("unsupported sort field in '{}'", raw))),
        };

        let direction = match parts.next().map(str::to_ascii_lowercase).as_deref() {
            None | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(other) => {
                return Err(AppError::bad_request(format!(
                    "unsupported sort direction '{}'",
                    other
                )))
            }
        };

        if parts.next().is_some() {
            return Err(AppError::bad_request(format!("malformed sort '{}'", raw)));
        }

        Ok(Sort { field, direction })
    }
}

/// One page of results
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[aliases(JobOfferPage = Page<JobOffer>, TransportOfferPage = Page<TransportOffer>)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    /// Zero-based index of this page
    pub number: u64,
    pub size: u64,
}

impl<T> Page<T> {
    /// Create new page
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let size = request.limit();
        Self {
            content,
            total_elements,
            total_pages: total_elements.div_ceil(size),
            number: request.page,
            size,
        }
    }

}
