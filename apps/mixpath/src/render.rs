//! # Output Rendering
//!
//! Text and JSON renderings of catalogs and search outcomes.
//!
//! Functions here build strings and `serde_json::Value`s; printing is left to
//! the command layer. Property names are painted with the catalog's RGB color
//! when colors are enabled.

use colored::{ColoredString, Colorize};
use mixpath_core::{
    BaseOutcome, Catalog, Property, PropertySet, Reagent, Recipe, SearchStats, Termination,
};
use serde_json::{Value, json};

/// Separator printed above every found recipe.
pub const RECIPE_RULE: &str = "===================================";

/// Enable or disable ANSI colors for the rest of the process.
pub fn set_color_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}

fn paint(catalog: &Catalog, property: &Property) -> ColoredString {
    match catalog.color(property) {
        Some([r, g, b]) => property.as_str().truecolor(r, g, b),
        None => property.as_str().normal(),
    }
}

/// Comma-separated, colored property names in the given order.
pub fn property_list<'p>(
    catalog: &Catalog,
    properties: impl IntoIterator<Item = &'p Property>,
) -> String {
    properties
        .into_iter()
        .map(|p| paint(catalog, p).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// FIND OUTPUT
// =============================================================================

/// Header line naming the desired effects in the order they were typed.
pub fn desired_header(catalog: &Catalog, desired: &[&Property]) -> String {
    format!(
        "\n Recipes for {}",
        property_list(catalog, desired.iter().copied())
    )
}

/// Text block for one base item: the recipe or the reason there is none.
pub fn outcome_text(catalog: &Catalog, outcome: &BaseOutcome<'_>) -> String {
    match (&outcome.report.recipe, outcome.report.termination) {
        (Some(recipe), _) => recipe_text(
            catalog,
            outcome.base.name(),
            outcome.base.properties(),
            recipe,
        ),
        (None, Termination::ExpansionBudgetExceeded) => format!(
            "Search budget exhausted starting with {} after {} states",
            outcome.base.name(),
            outcome.report.stats.expanded
        ),
        (None, _) => format!("No recipe found starting with {}", outcome.base.name()),
    }
}

/// Numbered recipe steps under a base-item banner.
pub fn recipe_text(
    catalog: &Catalog,
    base_name: &str,
    start: &PropertySet,
    recipe: &Recipe<'_>,
) -> String {
    let mut lines = vec![
        RECIPE_RULE.to_string(),
        String::new(),
        format!(
            "Base: {} --- Starting effects: {}",
            base_name.bold(),
            property_list(catalog, start)
        ),
    ];
    for (i, step) in recipe.steps().iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, step.reagent.label()));
        lines.push(format!(
            "   Effects now: {}",
            property_list(catalog, &step.state)
        ));
    }
    lines.join("\n")
}

/// JSON object for one base item.
pub fn outcome_json(outcome: &BaseOutcome<'_>) -> Value {
    let recipe = outcome.report.recipe.as_ref().map(|recipe| {
        recipe
            .steps()
            .iter()
            .map(|step| {
                json!({
                    "reagent": step.reagent.name(),
                    "effects": names(&step.state),
                })
            })
            .collect::<Vec<_>>()
    });

    json!({
        "base": outcome.base.name(),
        "starting_effects": names(outcome.base.properties()),
        "found": outcome.report.is_found(),
        "termination": outcome.report.termination.as_str(),
        "steps": recipe,
        "stats": stats_json(&outcome.report.stats),
    })
}

/// JSON object for search statistics.
pub fn stats_json(stats: &SearchStats) -> Value {
    json!({
        "expanded": stats.expanded,
        "generated": stats.generated,
        "duplicates_suppressed": stats.duplicates_suppressed,
        "visited": stats.visited,
        "frontier_high_water": stats.frontier_high_water,
    })
}

// =============================================================================
// CATALOG LISTINGS
// =============================================================================

/// One reagent with its additions and substitution rules.
pub fn reagent_text(catalog: &Catalog, reagent: &Reagent) -> String {
    let mut lines = vec![format!(
        "{}  adds: {}",
        reagent.label().bold(),
        property_list(catalog, reagent.additions())
    )];
    for rule in reagent.rules() {
        let marker = if rule.remove_only { " (remove only)" } else { "" };
        lines.push(format!(
            "    {} -> {}{}",
            paint(catalog, &rule.condition),
            paint(catalog, &rule.replacement),
            marker
        ));
    }
    lines.join("\n")
}

/// JSON object for one reagent.
pub fn reagent_json(reagent: &Reagent) -> Value {
    let rules: Vec<Value> = reagent
        .rules()
        .iter()
        .map(|rule| {
            json!({
                "if": rule.condition.as_str(),
                "then": rule.replacement.as_str(),
                "remove_only": rule.remove_only,
            })
        })
        .collect();

    json!({
        "name": reagent.name(),
        "icon": reagent.icon(),
        "adds": names(reagent.additions()),
        "rules": rules,
    })
}

/// Plain property names of a set, sorted.
pub fn names(set: &PropertySet) -> Vec<&str> {
    set.iter().map(Property::as_str).collect()
}
