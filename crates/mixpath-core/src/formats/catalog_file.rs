//! # Catalog File Format
//!
//! TOML serialization for catalogs. File I/O operations are in the app layer.
//!
//! ```toml
//! format_version = 1
//!
//! [[property]]
//! name = "Calming"
//! color = [254, 208, 155]
//!
//! [[base]]
//! name = "OG Kush"
//! properties = ["Calming"]
//!
//! [[reagent]]
//! name = "Mega Bean"
//! icon = "🥔"
//! adds = ["Foggy"]
//!
//! [[reagent.rule]]
//! if = "Calming"
//! then = "Glowing"
//! ```
//!
//! The document is size-checked before parsing and validated by
//! [`Catalog::new`] after it.

use crate::primitives::{CATALOG_FORMAT_VERSION, MAX_CATALOG_DOCUMENT_SIZE};
use crate::{BaseItem, Catalog, MixError, PropertyDef, PropertySet, Reagent, SubstitutionRule};
use serde::{Deserialize, Serialize};

// =============================================================================
// DOCUMENT SCHEMA
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    #[serde(default = "current_version")]
    format_version: u32,
    #[serde(default, rename = "property")]
    properties: Vec<PropertyEntry>,
    #[serde(default, rename = "base")]
    bases: Vec<BaseEntry>,
    #[serde(default, rename = "reagent")]
    reagents: Vec<ReagentEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct PropertyEntry {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<[u8; 3]>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct BaseEntry {
    name: String,
    #[serde(default)]
    properties: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReagentEntry {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    #[serde(default)]
    adds: Vec<String>,
    #[serde(default, rename = "rule", skip_serializing_if = "Vec::is_empty")]
    rules: Vec<RuleEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleEntry {
    #[serde(rename = "if")]
    condition: String,
    #[serde(rename = "then")]
    replacement: String,
    #[serde(default, skip_serializing_if = "is_false")]
    remove_only: bool,
}

fn current_version() -> u32 {
    CATALOG_FORMAT_VERSION
}

fn is_false(value: &bool) -> bool {
    !*value
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl CatalogDocument {
    fn into_catalog(self) -> Result<Catalog, MixError> {
        let properties = self
            .properties
            .into_iter()
            .map(|entry| {
                let def = PropertyDef::new(entry.name);
                match entry.color {
                    Some(rgb) => def.with_color(rgb),
                    None => def,
                }
            })
            .collect();

        let bases = self
            .bases
            .into_iter()
            .map(|entry| BaseItem::new(entry.name, PropertySet::from_names(entry.properties)))
            .collect();

        let reagents = self
            .reagents
            .into_iter()
            .map(|entry| {
                let rules = entry
                    .rules
                    .into_iter()
                    .map(|rule| {
                        let mut converted = SubstitutionRule::new(rule.condition, rule.replacement);
                        converted.remove_only = rule.remove_only;
                        converted
                    })
                    .collect();
                let reagent = Reagent::new(entry.name, PropertySet::from_names(entry.adds), rules);
                match entry.icon {
                    Some(icon) => reagent.with_icon(icon),
                    None => reagent,
                }
            })
            .collect();

        Catalog::new(properties, bases, reagents)
    }

    fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            format_version: CATALOG_FORMAT_VERSION,
            properties: catalog
                .properties()
                .iter()
                .map(|def| PropertyEntry {
                    name: def.property.as_str().to_string(),
                    color: def.color,
                })
                .collect(),
            bases: catalog
                .bases()
                .iter()
                .map(|base| BaseEntry {
                    name: base.name().to_string(),
                    properties: names(base.properties()),
                })
                .collect(),
            reagents: catalog
                .reagents()
                .iter()
                .map(|reagent| ReagentEntry {
                    name: reagent.name().to_string(),
                    icon: reagent.icon().map(str::to_string),
                    adds: names(reagent.additions()),
                    rules: reagent
                        .rules()
                        .iter()
                        .map(|rule| RuleEntry {
                            condition: rule.condition.as_str().to_string(),
                            replacement: rule.replacement.as_str().to_string(),
                            remove_only: rule.remove_only,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

fn names(set: &PropertySet) -> Vec<String> {
    set.iter().map(|p| p.as_str().to_string()).collect()
}

// =============================================================================
// SERIALIZATION FUNCTIONS
// =============================================================================

/// Parse and validate a catalog document.
///
/// This is a pure transformation - no file I/O.
pub fn catalog_from_toml(source: &str) -> Result<Catalog, MixError> {
    if source.len() > MAX_CATALOG_DOCUMENT_SIZE {
        return Err(MixError::CatalogFormat(format!(
            "Document size {} bytes exceeds maximum {} bytes",
            source.len(),
            MAX_CATALOG_DOCUMENT_SIZE
        )));
    }

    let document: CatalogDocument =
        toml::from_str(source).map_err(|e| MixError::CatalogFormat(e.to_string()))?;

    if document.format_version != CATALOG_FORMAT_VERSION {
        return Err(MixError::CatalogFormat(format!(
            "Unsupported format version: {} (expected {})",
            document.format_version, CATALOG_FORMAT_VERSION
        )));
    }

    document.into_catalog()
}

/// Serialize a catalog to a TOML document.
pub fn catalog_to_toml(catalog: &Catalog) -> Result<String, MixError> {
    toml::to_string(&CatalogDocument::from_catalog(catalog))
        .map_err(|e| MixError::CatalogFormat(e.to_string()))
}

// =============================================================================
// TESTS
// =============================================================================
