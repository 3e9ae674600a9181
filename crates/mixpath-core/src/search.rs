//! # Search Module
//!
//! Breadth-first search for the shortest reagent sequence.
//!
//! Nodes are property sets, edges are reagent applications, and every edge
//! costs one step. BFS therefore dequeues states in order of depth, and the
//! first dequeued state that satisfies the goal sits at minimal depth.
//!
//! Ties between equally short recipes are broken by visitation order: level
//! by level, and within a level by the order reagents appear in the catalog.
//!
//! The search is exhaustive by default. A [`SearchPolicy`] may cap the number
//! of expansions, in which case an unfinished search reports
//! [`Termination::ExpansionBudgetExceeded`] rather than claiming the goal is
//! unreachable.

use crate::frontier::BreadthFirstFrontier;
use crate::goal::{fingerprint, satisfies};
use crate::transform::apply;
use crate::{MixError, PropertySet, Reagent, Recipe, RecipeStep};

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped from the frontier and tested against the goal.
    pub expanded: u64,
    /// Successor states computed (one per reagent per expanded state).
    pub generated: u64,
    /// Successors dropped because their fingerprint was already visited.
    pub duplicates_suppressed: u64,
    /// Distinct states enqueued, including the start state.
    pub visited: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}

/// Search budget configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Hard cap on states taken from the frontier. `None` means unbounded.
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    /// Exhaustive search: stops only at the goal or an empty frontier.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Stop after `limit` expansions.
    #[must_use]
    pub fn with_max_expansions(limit: u64) -> Self {
        Self {
            max_expansions: Some(limit),
        }
    }

    fn allows(&self, expanded: u64) -> bool {
        self.max_expansions.is_none_or(|limit| expanded < limit)
    }
}

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A state satisfying the goal was dequeued.
    GoalReached,
    /// Every reachable state was visited; the goal is unreachable.
    FrontierExhausted,
    /// The `max_expansions` budget was hit before either of the above.
    ExpansionBudgetExceeded,
}

impl Termination {
    /// Stable snake_case label for machine-readable output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }
}

/// Result of a search together with its statistics.
#[derive(Debug, Clone)]
pub struct SearchReport<'a> {
    /// The shortest recipe, or `None` if the search found none.
    pub recipe: Option<Recipe<'a>>,
    pub termination: Termination,
    pub stats: SearchStats,
}

impl SearchReport<'_> {
    /// Returns `true` if a recipe was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.recipe.is_some()
    }
}

/// A discovered state and how it was reached.
struct SearchNode<'a> {
    state: PropertySet,
    parent: Option<usize>,
    reagent: Option<&'a Reagent>,
}

/// Find the shortest reagent sequence turning `start` into a superset of
/// `desired`.
///
/// Returns `Ok(None)` when every reachable state has been visited without
/// satisfying the goal.
///
/// # Errors
///
/// Returns [`MixError::EmptyGoal`] if `desired` is empty.
pub fn search<'a>(
    desired: &PropertySet,
    start: &PropertySet,
    reagents: &'a [Reagent],
) -> Result<Option<Recipe<'a>>, MixError> {
    search_with_stats(desired, start, reagents).map(|report| report.recipe)
}

/// Like [`search`], but also reports search statistics.
///
/// # Errors
///
/// Returns [`MixError::EmptyGoal`] if `desired` is empty.
pub fn search_with_stats<'a>(
    desired: &PropertySet,
    start: &PropertySet,
    reagents: &'a [Reagent],
) -> Result<SearchReport<'a>, MixError> {
    search_with_policy(desired, start, reagents, &SearchPolicy::unbounded())
}

/// Search under the budget set by `policy`.
///
/// # Errors
///
/// Returns [`MixError::EmptyGoal`] if `desired` is empty.
pub fn search_with_policy<'a>(
    desired: &PropertySet,
    start: &PropertySet,
    reagents: &'a [Reagent],
    policy: &SearchPolicy,
) -> Result<SearchReport<'a>, MixError> {
    if desired.is_empty() {
        return Err(MixError::EmptyGoal);
    }

    let mut frontier = BreadthFirstFrontier::new();
    let mut nodes: Vec<SearchNode<'a>> = Vec::new();
    let mut stats = SearchStats::default();

    nodes.push(SearchNode {
        state: start.clone(),
        parent: None,
        reagent: None,
    });
    frontier.push(0, fingerprint(start));

    while !frontier.is_empty() {
        if !policy.allows(stats.expanded) {
            return Ok(SearchReport {
                recipe: None,
                termination: Termination::ExpansionBudgetExceeded,
                stats: finish(stats, &frontier),
            });
        }
        let Some(current) = frontier.pop() else {
            break;
        };
        stats.expanded = stats.expanded.saturating_add(1);

        if satisfies(&nodes[current].state, desired) {
            return Ok(SearchReport {
                recipe: Some(reconstruct(&nodes, current)),
                termination: Termination::GoalReached,
                stats: finish(stats, &frontier),
            });
        }

        for reagent in reagents {
            let next = apply(&nodes[current].state, reagent);
            stats.generated = stats.generated.saturating_add(1);

            let key = fingerprint(&next);
            if frontier.is_visited(&key) {
                stats.duplicates_suppressed = stats.duplicates_suppressed.saturating_add(1);
                continue;
            }

            let id = nodes.len();
            nodes.push(SearchNode {
                state: next,
                parent: Some(current),
                reagent: Some(reagent),
            });
            frontier.push(id, key);
        }
    }

    Ok(SearchReport {
        recipe: None,
        termination: Termination::FrontierExhausted,
        stats: finish(stats, &frontier),
    })
}

fn finish(mut stats: SearchStats, frontier: &BreadthFirstFrontier) -> SearchStats {
    stats.visited = frontier.visited_count() as u64;
    stats.frontier_high_water = frontier.high_water() as u64;
    stats
}

/// Walk parent links back to the start node.
///
/// The start node carries no reagent and is not part of the recipe.
fn reconstruct<'a>(nodes: &[SearchNode<'a>], goal: usize) -> Recipe<'a> {
    let mut steps = Vec::new();
    let mut cursor = Some(goal);
    while let Some(index) = cursor {
        let node = &nodes[index];
        if let Some(reagent) = node.reagent {
            steps.push(RecipeStep {
                reagent,
                state: node.state.clone(),
            });
        }
        cursor = node.parent;
    }
    steps.reverse();
    Recipe::new(steps)
}

// =============================================================================
// TESTS
// =============================================================================
