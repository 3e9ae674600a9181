//! # Goal Module
//!
//! State fingerprinting and goal tests.
//!
//! The fingerprint is the only dedup key the search uses, so it must be
//! canonical: two sets with the same members produce the same key, and two
//! different sets never do.

use crate::primitives::FINGERPRINT_DELIMITER;
use crate::{Property, PropertySet};
use std::fmt;

/// Canonical key of a property set: sorted names joined by `|`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the fingerprint of a state.
///
/// `PropertySet` iterates in lexicographic order already, so no extra sort is
/// needed here.
#[must_use]
pub fn fingerprint(state: &PropertySet) -> Fingerprint {
    let names: Vec<&str> = state.iter().map(Property::as_str).collect();
    Fingerprint(names.join(FINGERPRINT_DELIMITER))
}

/// True iff every desired property is present in `state`.
///
/// Extra properties in `state` are allowed. An empty `desired` is trivially
/// satisfied; the search rejects it before getting here.
#[must_use]
pub fn satisfies(state: &PropertySet, desired: &PropertySet) -> bool {
    state.is_superset(desired)
}

// =============================================================================
// TESTS
// =============================================================================
