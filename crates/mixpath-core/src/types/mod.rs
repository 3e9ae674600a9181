//! # Core Type Definitions
//!
//! This module contains all core types for the mixpath recipe engine:
//! - Property identifiers and sets (`Property`, `PropertySet`)
//! - Catalog entities (`PropertyDef`, `SubstitutionRule`, `Reagent`, `BaseItem`)
//! - Search output (`RecipeStep`, `Recipe`)
//! - Error types (`MixError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Implement `Ord` (or wrap ordered collections) for deterministic iteration
//! - Use `BTreeSet` for sets, so any consumer sees properties in canonical order

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

// =============================================================================
// PROPERTY
// =============================================================================

/// A named property drawn from the catalog's fixed domain.
///
/// Identity is the name. Ordering is lexicographic by name, which is the
/// canonical order used for fingerprints and display.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Property(String);

impl Property {
    /// Create a property from its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the property name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Property {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

// =============================================================================
// PROPERTY SET
// =============================================================================

/// An unordered set of properties.
///
/// Backed by a `BTreeSet`, so duplicates collapse and iteration is always in
/// canonical order regardless of insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertySet(BTreeSet<Property>);

impl PropertySet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from property names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(Property::new).collect()
    }

    /// Check membership.
    #[must_use]
    pub fn contains(&self, property: &Property) -> bool {
        self.0.contains(property)
    }

    /// Insert a property. Returns `false` if it was already present.
    pub fn insert(&mut self, property: Property) -> bool {
        self.0.insert(property)
    }

    /// Remove a property. Returns `true` if it was present.
    pub fn remove(&mut self, property: &Property) -> bool {
        self.0.remove(property)
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in canonical (lexicographic) order.
    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.0.iter()
    }

    /// True iff every property of `other` is in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &PropertySet) -> bool {
        self.0.is_superset(&other.0)
    }
}

impl FromIterator<Property> for PropertySet {
    fn from_iter<T: IntoIterator<Item = Property>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Property> for PropertySet {
    fn extend<T: IntoIterator<Item = Property>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PropertySet {
    type Item = &'a Property;
    type IntoIter = std::collections::btree_set::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PropertySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, property) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(property.as_str())?;
        }
        Ok(())
    }
}

// =============================================================================
// CATALOG ENTITIES
// =============================================================================

/// A declared member of the property domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDef {
    /// The property itself.
    pub property: Property,
    /// Display color as RGB. Presentation only.
    pub color: Option<[u8; 3]>,
}

impl PropertyDef {
    /// Declare a property without a color.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            property: Property::new(name),
            color: None,
        }
    }

    /// Attach a display color.
    #[must_use]
    pub fn with_color(mut self, rgb: [u8; 3]) -> Self {
        self.color = Some(rgb);
        self
    }
}

/// A conditional substitution: if the state holds `condition`, it becomes
/// `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionRule {
    /// Property that triggers the rule.
    pub condition: Property,
    /// Property inserted in place of `condition`.
    pub replacement: Property,
    /// Carried through the catalog but never consulted by the transformation
    /// engine. A rule flagged `remove_only` still inserts its replacement.
    pub remove_only: bool,
}

impl SubstitutionRule {
    /// Create a rule `condition -> replacement`.
    #[must_use]
    pub fn new(condition: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            condition: Property::new(condition),
            replacement: Property::new(replacement),
            remove_only: false,
        }
    }
}

/// An additive reagent: unconditional additions plus ordered substitution rules.
///
/// Immutable once constructed; the catalog owns every reagent for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reagent {
    name: String,
    icon: Option<String>,
    additions: PropertySet,
    rules: Vec<SubstitutionRule>,
}

impl Reagent {
    /// Create a reagent.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        additions: PropertySet,
        rules: Vec<SubstitutionRule>,
    ) -> Self {
        Self {
            name: name.into(),
            icon: None,
            additions,
            rules,
        }
    }

    /// Attach a display icon.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Name prefixed by the icon, if any.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.icon {
            Some(icon) => format!("{icon} {}", self.name),
            None => self.name.clone(),
        }
    }

    /// Properties added on every application.
    #[must_use]
    pub fn additions(&self) -> &PropertySet {
        &self.additions
    }

    /// Substitution rules in catalog order.
    #[must_use]
    pub fn rules(&self) -> &[SubstitutionRule] {
        &self.rules
    }
}

/// A base item and the properties it starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseItem {
    name: String,
    properties: PropertySet,
}

impl BaseItem {
    /// Create a base item.
    #[must_use]
    pub fn new(name: impl Into<String>, properties: PropertySet) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Starting properties.
    #[must_use]
    pub fn properties(&self) -> &PropertySet {
        &self.properties
    }
}

// =============================================================================
// RECIPE
// =============================================================================

/// One reagent application and the state it produced.
///
/// The reagent is borrowed from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeStep<'a> {
    /// The reagent applied at this step.
    pub reagent: &'a Reagent,
    /// The property set after applying `reagent`.
    pub state: PropertySet,
}

/// An ordered reagent sequence, first application first.
///
/// An empty recipe means the starting state already satisfied the goal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Recipe<'a> {
    steps: Vec<RecipeStep<'a>>,
}

impl<'a> Recipe<'a> {
    /// Wrap an ordered list of steps.
    #[must_use]
    pub fn new(steps: Vec<RecipeStep<'a>>) -> Self {
        Self { steps }
    }

    #[must_use]
    pub fn steps(&self) -> &[RecipeStep<'a>] {
        &self.steps
    }

    /// Number of reagent applications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// State after the last step, or `None` for an empty recipe.
    #[must_use]
    pub fn final_state(&self) -> Option<&PropertySet> {
        self.steps.last().map(|step| &step.state)
    }

    /// Reagent names in application order.
    pub fn reagent_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.steps.iter().map(|step| step.reagent.name())
    }

    #[must_use]
    pub fn into_steps(self) -> Vec<RecipeStep<'a>> {
        self.steps
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the mixpath system.
///
/// - No silent failures
/// - Use `Result<T, MixError>` for fallible operations
/// - An exhausted search is NOT an error; it is reported as `None`
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MixError {
    /// The desired property set was empty.
    #[error("Desired property set is empty")]
    EmptyGoal,

    /// The catalog references a property that was never declared.
    #[error("Unknown property '{name}' referenced by {context}")]
    UnknownProperty { context: String, name: String },

    /// A catalog name was declared twice.
    #[error("Duplicate {kind} name: '{name}'")]
    DuplicateName { kind: &'static str, name: String },

    /// A catalog name is empty or contains a reserved character.
    #[error("Invalid {kind} name: '{name}'")]
    InvalidName { kind: &'static str, name: String },

    /// The catalog exceeds a size limit.
    #[error("Catalog declares too many {kind} (limit {limit})")]
    CatalogLimit { kind: &'static str, limit: usize },

    /// No reagent with the given name exists in the catalog.
    #[error("Unknown reagent: '{0}'")]
    UnknownReagent(String),

    /// No base item with the given name exists in the catalog.
    #[error("Unknown base item: '{0}'")]
    UnknownBase(String),

    /// The catalog document could not be parsed or serialized.
    #[error("Catalog format error: {0}")]
    CatalogFormat(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================
