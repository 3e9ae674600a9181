//! # mixpath-core
//!
//! The deterministic recipe engine for mixpath - THE LOGIC.
//!
//! Given a base item's starting properties, a catalog of reagents, and a set
//! of desired properties, find the shortest ordered reagent sequence whose
//! result contains every desired property.
//!
//! ## Pipeline
//!
//! ```text
//! desired + start + reagents
//!          │
//!          ▼
//!   search (BFS) ──► transform::apply ──► goal::fingerprint / goal::satisfies
//!          │
//!          ▼
//!   Option<Recipe>   (None = goal unreachable)
//! ```
//!
//! ## Architectural Constraints
//!
//! - Pure: no I/O, no logging, no global state
//! - Deterministic: identical inputs give identical recipes
//! - The catalog is explicit configuration passed by reference

// =============================================================================
// MODULES
// =============================================================================

pub mod catalog;
pub mod formats;
pub mod frontier;
pub mod goal;
pub mod planner;
pub mod primitives;
pub mod search;
pub mod transform;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    BaseItem, MixError, Property, PropertyDef, PropertySet, Reagent, Recipe, RecipeStep,
    SubstitutionRule,
};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use catalog::Catalog;
pub use goal::{Fingerprint, fingerprint, satisfies};
pub use planner::{BaseOutcome, Planner};
pub use search::{
    SearchPolicy, SearchReport, SearchStats, Termination, search, search_with_policy,
    search_with_stats,
};
pub use transform::{apply, apply_sequence};

// =============================================================================
// RE-EXPORTS: Formats (from formats module)
// =============================================================================

pub use formats::{catalog_from_toml, catalog_to_toml};
