//! # Catalog Module
//!
//! The read-only configuration every search runs against: the property
//! domain, the base items and the reagents, each in declaration order.
//!
//! A `Catalog` is built once (from code or from a TOML document) and passed
//! by reference. Construction validates the data so that the search never
//! meets an undeclared property or an ambiguous name.
//!
//! Name resolution (`resolve_*`) goes through lookup tables keyed by the
//! ASCII-lowercased name. No title-casing or other string heuristics.

use crate::primitives::{FINGERPRINT_DELIMITER, MAX_NAME_LENGTH, MAX_PROPERTIES, MAX_REAGENTS};
use crate::{BaseItem, MixError, Property, PropertyDef, PropertySet, Reagent};
use std::collections::{BTreeMap, BTreeSet};

/// Validated catalog of properties, base items and reagents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    properties: Vec<PropertyDef>,
    bases: Vec<BaseItem>,
    reagents: Vec<Reagent>,

    /// Folded name -> index into `properties`
    property_index: BTreeMap<String, usize>,
    /// Folded name -> index into `bases`
    base_index: BTreeMap<String, usize>,
    /// Folded name -> index into `reagents`
    reagent_index: BTreeMap<String, usize>,
}

impl Catalog {
    /// Build and validate a catalog.
    ///
    /// # Errors
    /// - `InvalidName` for empty, overlong, or delimiter-containing names
    /// - `DuplicateName` for names that collide case-insensitively
    /// - `UnknownProperty` for references to undeclared properties
    /// - `CatalogLimit` if the domain or reagent list is too large
    pub fn new(
        properties: Vec<PropertyDef>,
        bases: Vec<BaseItem>,
        reagents: Vec<Reagent>,
    ) -> Result<Self, MixError> {
        if properties.len() > MAX_PROPERTIES {
            return Err(MixError::CatalogLimit {
                kind: "properties",
                limit: MAX_PROPERTIES,
            });
        }
        if reagents.len() > MAX_REAGENTS {
            return Err(MixError::CatalogLimit {
                kind: "reagents",
                limit: MAX_REAGENTS,
            });
        }

        let property_index = build_index(
            "property",
            properties.iter().map(|def| def.property.as_str()),
        )?;
        let base_index = build_index("base item", bases.iter().map(BaseItem::name))?;
        let reagent_index = build_index("reagent", reagents.iter().map(Reagent::name))?;

        let declared: BTreeSet<&Property> = properties.iter().map(|def| &def.property).collect();

        for base in &bases {
            check_declared(&declared, base.properties(), || {
                format!("base item '{}'", base.name())
            })?;
        }
        for reagent in &reagents {
            check_declared(&declared, reagent.additions(), || {
                format!("reagent '{}'", reagent.name())
            })?;
            for rule in reagent.rules() {
                for property in [&rule.condition, &rule.replacement] {
                    if !declared.contains(&property) {
                        return Err(MixError::UnknownProperty {
                            context: format!(
                                "rule {} -> {} of reagent '{}'",
                                rule.condition,
                                rule.replacement,
                                reagent.name()
                            ),
                            name: property.as_str().to_string(),
                        });
                    }
                }
            }
        }

        Ok(Self {
            properties,
            bases,
            reagents,
            property_index,
            base_index,
            reagent_index,
        })
    }

    /// The built-in catalog.
    pub fn standard() -> Result<Self, MixError> {
        crate::formats::catalog_from_toml(crate::primitives::STANDARD_CATALOG_TOML)
    }

    /// Declared properties in declaration order.
    #[must_use]
    pub fn properties(&self) -> &[PropertyDef] {
        &self.properties
    }

    /// Base items in declaration order.
    #[must_use]
    pub fn bases(&self) -> &[BaseItem] {
        &self.bases
    }

    /// Reagents in declaration order. This is the search order.
    #[must_use]
    pub fn reagents(&self) -> &[Reagent] {
        &self.reagents
    }

    /// Display color of a property, if declared with one.
    #[must_use]
    pub fn color(&self, property: &Property) -> Option<[u8; 3]> {
        self.property_index
            .get(&fold(property.as_str()))
            .and_then(|&i| self.properties[i].color)
    }

    /// Check whether a property is part of the domain.
    #[must_use]
    pub fn contains_property(&self, property: &Property) -> bool {
        self.property_index
            .get(&fold(property.as_str()))
            .is_some_and(|&i| self.properties[i].property == *property)
    }

    /// Resolve user input to a declared property, ignoring ASCII case and
    /// surrounding whitespace.
    #[must_use]
    pub fn resolve_property(&self, input: &str) -> Option<&Property> {
        self.property_index
            .get(&fold(input))
            .map(|&i| &self.properties[i].property)
    }

    /// Resolve user input to a base item.
    pub fn resolve_base(&self, input: &str) -> Result<&BaseItem, MixError> {
        self.base_index
            .get(&fold(input))
            .map(|&i| &self.bases[i])
            .ok_or_else(|| MixError::UnknownBase(input.to_string()))
    }

    /// Resolve user input to a reagent.
    pub fn resolve_reagent(&self, input: &str) -> Result<&Reagent, MixError> {
        self.reagent_index
            .get(&fold(input))
            .map(|&i| &self.reagents[i])
            .ok_or_else(|| MixError::UnknownReagent(input.to_string()))
    }
}

/// Lookup key for a name.
fn fold(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

fn validate_name(kind: &'static str, name: &str) -> Result<(), MixError> {
    let invalid = name.trim().is_empty()
        || name.trim() != name
        || name.len() > MAX_NAME_LENGTH
        || (kind == "property" && name.contains(FINGERPRINT_DELIMITER));
    if invalid {
        return Err(MixError::InvalidName {
            kind,
            name: name.to_string(),
        });
    }
    Ok(())
}

fn build_index<'a>(
    kind: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> Result<BTreeMap<String, usize>, MixError> {
    let mut index = BTreeMap::new();
    for (i, name) in names.enumerate() {
        validate_name(kind, name)?;
        if index.insert(fold(name), i).is_some() {
            return Err(MixError::DuplicateName {
                kind,
                name: name.to_string(),
            });
        }
    }
    Ok(index)
}

fn check_declared(
    declared: &BTreeSet<&Property>,
    set: &PropertySet,
    context: impl Fn() -> String,
) -> Result<(), MixError> {
    match set.iter().find(|property| !declared.contains(property)) {
        Some(missing) => Err(MixError::UnknownProperty {
            context: context(),
            name: missing.as_str().to_string(),
        }),
        None => Ok(()),
    }
}

// =============================================================================
// TESTS
// =============================================================================
