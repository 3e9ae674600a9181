//! # Transformation Engine
//!
//! Computes the state that results from applying one reagent.
//!
//! Application happens in three passes over a working copy:
//! 1. **Detect**: walk the rules in catalog order. A rule fires when its
//!    condition is in the working set; the condition is removed at once, so a
//!    later rule with the same condition does not fire again.
//! 2. **Commit**: insert the replacement of every fired rule. Replacements are
//!    inserted only after detection has finished, so they never trigger
//!    another rule of the same reagent.
//! 3. **Add**: insert the reagent's unconditional properties.

use crate::{Property, PropertySet, Reagent};

/// Apply `reagent` to `state` and return the resulting set.
#[must_use]
pub fn apply(state: &PropertySet, reagent: &Reagent) -> PropertySet {
    let mut working = state.clone();

    let mut pending: Vec<(&Property, &Property)> = Vec::new();
    for rule in reagent.rules() {
        if working.remove(&rule.condition) {
            pending.push((&rule.condition, &rule.replacement));
        }
    }

    // Every fired condition is already gone, so commit order cannot matter.
    for (condition, replacement) in pending {
        debug_assert!(!working.contains(condition));
        working.insert(replacement.clone());
    }

    working.extend(reagent.additions().iter().cloned());
    working
}

/// Apply `reagents` in order, starting from `start`.
///
/// Returns the state after each application; the result has the same length
/// as `reagents`.
#[must_use]
pub fn apply_sequence(start: &PropertySet, reagents: &[&Reagent]) -> Vec<PropertySet> {
    let mut states = Vec::with_capacity(reagents.len());
    let mut current = start.clone();
    for reagent in reagents {
        current = apply(&current, reagent);
        states.push(current.clone());
    }
    states
}

// =============================================================================
// TESTS
// =============================================================================
