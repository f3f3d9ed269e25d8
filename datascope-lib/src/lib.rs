//! datascope core library
//!
//! Fetches JSON from a caller-chosen API endpoint with filter query
//! parameters, extracts a named field from the first response element,
//! normalizes it into a flat dataset, and derives a schema-less table
//! from it. The shape of the data is discovered at render time; nothing
//! is cached, retried or paginated.

pub mod error;
pub mod fetch;
pub mod model;
pub mod render;
pub mod request;

mod client;

pub use client::*;
