//! HTTP handlers for the data resource, service info, and API documentation.

pub mod api;
pub mod data;
pub mod docs;
