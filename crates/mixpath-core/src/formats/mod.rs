//! # Formats Module
//!
//! Serialization formats for catalogs.

pub mod catalog_file;

pub use catalog_file::{catalog_from_toml, catalog_to_toml};
