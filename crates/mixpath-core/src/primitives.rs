//! # Innate Primitives
//!
//! Hardcoded constants for the mixpath core.
//!
//! These are compiled into the binary and are immutable at runtime.

/// Separator between property names in a state fingerprint.
///
/// Catalog validation rejects any property name containing this string, so
/// two different sets can never join to the same fingerprint.
pub const FINGERPRINT_DELIMITER: &str = "|";

/// Maximum length for any catalog name (property, base item, reagent).
///
/// Longer names are rejected when a catalog is built.
pub const MAX_NAME_LENGTH: usize = 64;

/// Maximum number of properties a catalog may declare.
///
/// The search state space is bounded by `2^n` subsets of this domain.
pub const MAX_PROPERTIES: usize = 128;

/// Maximum number of reagents a catalog may declare.
pub const MAX_REAGENTS: usize = 64;

/// Current catalog document format version.
///
/// Documents without a `format_version` key are read as this version.
pub const CATALOG_FORMAT_VERSION: u32 = 1;

/// Maximum size of a catalog document (1 MB).
///
/// Checked before parsing so an oversized file is rejected without allocating
/// its parse tree.
pub const MAX_CATALOG_DOCUMENT_SIZE: usize = 1024 * 1024;

/// The built-in catalog, embedded at compile time.
pub const STANDARD_CATALOG_TOML: &str = include_str!("../data/standard.toml");
