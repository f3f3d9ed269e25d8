//! Error types

mod fetch;

pub use fetch::*;
