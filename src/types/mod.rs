//! Shared types.

mod pagination;

pub use pagination::{
    JobOfferPage, Page, PageRequest, Sort, SortDirection, SortField, TransportOfferPage,
};
