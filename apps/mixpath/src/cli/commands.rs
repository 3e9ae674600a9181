//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::render;
use mixpath_core::{
    Catalog, MixError, Planner, Property, PropertySet, Recipe, RecipeStep, SearchPolicy,
    apply_sequence, catalog_from_toml, catalog_to_toml, primitives::MAX_CATALOG_DOCUMENT_SIZE,
};
use std::path::{Path, PathBuf};

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputMode {
    pub json: bool,
    pub verbose: bool,
}

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

// =============================================================================
// FILE VALIDATION
// =============================================================================

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), MixError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| MixError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(MixError::CatalogFormat(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Resolve an input path and make sure it names a regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, MixError> {
    let canonical = path.canonicalize().map_err(|e| {
        MixError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(MixError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Resolve the parent directory of an output path.
fn validate_output_path(path: &Path) -> Result<PathBuf, MixError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let canonical_parent = parent.canonicalize().map_err(|e| {
        MixError::IoError(format!(
            "Invalid output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    if !canonical_parent.is_dir() {
        return Err(MixError::IoError(format!(
            "Output directory '{}' is not a valid directory",
            parent.display()
        )));
    }

    let filename = path
        .file_name()
        .ok_or_else(|| MixError::IoError("Output path has no filename".to_string()))?;

    Ok(canonical_parent.join(filename))
}

// =============================================================================
// CATALOG LOADING
// =============================================================================

/// Load the catalog from `path`, or the built-in catalog when no path is set.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, MixError> {
    let Some(path) = path else {
        tracing::debug!("Using built-in catalog");
        return Catalog::standard();
    };

    let validated = validate_file_path(path)?;
    validate_file_size(&validated, MAX_CATALOG_DOCUMENT_SIZE as u64)?;

    let source = std::fs::read_to_string(&validated)
        .map_err(|e| MixError::IoError(format!("Read file: {}", e)))?;
    let catalog = catalog_from_toml(&source)?;

    tracing::info!(
        path = %validated.display(),
        properties = catalog.properties().len(),
        bases = catalog.bases().len(),
        reagents = catalog.reagents().len(),
        "Loaded catalog"
    );
    Ok(catalog)
}

/// Resolve user-typed effect names against the catalog.
///
/// Unknown names are logged and skipped. Repeated names are kept once, in the
/// order first typed.
pub fn resolve_effects<'c>(catalog: &'c Catalog, inputs: &[String]) -> Vec<&'c Property> {
    let mut resolved: Vec<&Property> = Vec::new();
    for input in inputs {
        match catalog.resolve_property(input) {
            Some(property) if !resolved.contains(&property) => resolved.push(property),
            Some(_) => {}
            None => tracing::warn!("Unknown effect '{}' will be ignored", input),
        }
    }
    resolved
}

// =============================================================================
// FIND COMMAND
// =============================================================================

/// Find the shortest recipe from each base item (or the one named).
pub fn cmd_find(
    catalog: &Catalog,
    output: OutputMode,
    effects: &[String],
    base: Option<&str>,
    policy: SearchPolicy,
) -> Result<(), MixError> {
    let ordered = resolve_effects(catalog, effects);
    let desired: PropertySet = ordered.iter().map(|p| (*p).clone()).collect();

    let planner = Planner::new(catalog).with_policy(policy);
    let outcomes = match base {
        Some(name) => vec![planner.plan_one(catalog.resolve_base(name)?, &desired)?],
        None => planner.plan(&desired)?,
    };

    for outcome in &outcomes {
        let stats = outcome.report.stats;
        tracing::debug!(
            base = outcome.base.name(),
            termination = outcome.report.termination.as_str(),
            expanded = stats.expanded,
            generated = stats.generated,
            duplicates_suppressed = stats.duplicates_suppressed,
            visited = stats.visited,
            frontier_high_water = stats.frontier_high_water,
            "Search finished"
        );
    }

    if output.json {
        let results: Vec<_> = outcomes.iter().map(render::outcome_json).collect();
        print_json(&serde_json::json!({
            "desired": ordered.iter().map(|p| p.as_str()).collect::<Vec<_>>(),
            "results": results,
        }));
        return Ok(());
    }

    println!("{}", render::desired_header(catalog, &ordered));
    for outcome in &outcomes {
        println!("{}", render::outcome_text(catalog, outcome));
        if output.verbose {
            let stats = outcome.report.stats;
            println!(
                "   ({} states expanded, {} visited, {} duplicates suppressed)",
                stats.expanded, stats.visited, stats.duplicates_suppressed
            );
        }
    }

    Ok(())
}

// =============================================================================
// APPLY COMMAND
// =============================================================================

/// Replay a reagent sequence on a base item.
pub fn cmd_apply(
    catalog: &Catalog,
    output: OutputMode,
    base: &str,
    reagents: &[String],
) -> Result<(), MixError> {
    let base = catalog.resolve_base(base)?;
    let sequence = reagents
        .iter()
        .map(|name| catalog.resolve_reagent(name))
        .collect::<Result<Vec<_>, _>>()?;

    let states = apply_sequence(base.properties(), &sequence);
    let recipe = Recipe::new(
        sequence
            .into_iter()
            .zip(states)
            .map(|(reagent, state)| RecipeStep { reagent, state })
            .collect(),
    );

    if output.json {
        let steps: Vec<_> = recipe
            .steps()
            .iter()
            .map(|step| {
                serde_json::json!({
                    "reagent": step.reagent.name(),
                    "effects": render::names(&step.state),
                })
            })
            .collect();
        print_json(&serde_json::json!({
            "base": base.name(),
            "starting_effects": render::names(base.properties()),
            "steps": steps,
        }));
        return Ok(());
    }

    println!(
        "{}",
        render::recipe_text(catalog, base.name(), base.properties(), &recipe)
    );
    Ok(())
}

// =============================================================================
// LISTING COMMANDS
// =============================================================================

/// List the effects declared by the catalog.
pub fn cmd_effects(catalog: &Catalog, output: OutputMode) -> Result<(), MixError> {
    if output.json {
        let effects: Vec<_> = catalog
            .properties()
            .iter()
            .map(|def| {
                serde_json::json!({
                    "name": def.property.as_str(),
                    "color": def.color,
                })
            })
            .collect();
        print_json(&serde_json::Value::from(effects));
        return Ok(());
    }

    for def in catalog.properties() {
        println!(
            "{}",
            render::property_list(catalog, std::iter::once(&def.property))
        );
    }
    Ok(())
}

/// List the reagents declared by the catalog.
pub fn cmd_reagents(catalog: &Catalog, output: OutputMode) -> Result<(), MixError> {
    if output.json {
        let reagents: Vec<_> = catalog.reagents().iter().map(render::reagent_json).collect();
        print_json(&serde_json::Value::from(reagents));
        return Ok(());
    }

    for reagent in catalog.reagents() {
        println!("{}", render::reagent_text(catalog, reagent));
    }
    Ok(())
}

// =============================================================================
// EXPORT COMMAND
// =============================================================================

/// Write the active catalog as TOML.
pub fn cmd_export(catalog: &Catalog, output: &Path) -> Result<(), MixError> {
    let validated_output = validate_output_path(output)?;
    let data = catalog_to_toml(catalog)?;

    std::fs::write(&validated_output, &data)
        .map_err(|e| MixError::IoError(format!("Write file: {}", e)))?;

    tracing::info!(path = %validated_output.display(), bytes = data.len(), "Exported catalog");
    println!("Exported {} bytes to {:?}", data.len(), validated_output);
    Ok(())
}
