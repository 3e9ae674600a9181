//! # Planner Module
//!
//! Runs the shortest-recipe search once per base item of a catalog.
//!
//! - Rejects an empty goal once, before any search
//! - Searches every base item independently, in catalog order
//! - An unreachable goal for one base item does not stop the others
//! - Every search runs under the same [`SearchPolicy`]

use crate::search::{SearchPolicy, SearchReport, search_with_policy};
use crate::{BaseItem, Catalog, MixError, PropertySet};

/// The search result for one base item.
#[derive(Debug, Clone)]
pub struct BaseOutcome<'a> {
    pub base: &'a BaseItem,
    pub report: SearchReport<'a>,
}

/// Plans recipes against a borrowed catalog.
#[derive(Debug, Clone, Copy)]
pub struct Planner<'a> {
    catalog: &'a Catalog,
    policy: SearchPolicy,
}

impl<'a> Planner<'a> {
    /// Planner with an unbounded search policy.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            policy: SearchPolicy::unbounded(),
        }
    }

    /// Replace the search policy used for every base item.
    #[must_use]
    pub fn with_policy(mut self, policy: SearchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Search from every base item in the catalog.
    ///
    /// Returns one outcome per base item, in catalog order.
    pub fn plan(&self, desired: &PropertySet) -> Result<Vec<BaseOutcome<'a>>, MixError> {
        self.plan_for(self.catalog.bases(), desired)
    }

    /// Search from the given base items only.
    pub fn plan_for(
        &self,
        bases: &'a [BaseItem],
        desired: &PropertySet,
    ) -> Result<Vec<BaseOutcome<'a>>, MixError> {
        if desired.is_empty() {
            return Err(MixError::EmptyGoal);
        }

        bases
            .iter()
            .map(|base| self.plan_one(base, desired))
            .collect()
    }

    /// Search from a single base item.
    pub fn plan_one(
        &self,
        base: &'a BaseItem,
        desired: &PropertySet,
    ) -> Result<BaseOutcome<'a>, MixError> {
        let report = search_with_policy(
            desired,
            base.properties(),
            self.catalog.reagents(),
            &self.policy,
        )?;
        Ok(BaseOutcome { base, report })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Termination;
    use crate::{PropertyDef, Reagent};

    #[test]
    fn one_outcome_per_base_in_order() {
        let catalog = Catalog::standard().expect("standard");
        let planner = Planner::new(&catalog);
        let outcomes = planner
            .plan(&PropertySet::from_names(["Glowing"]))
            .expect("plan");

        let names: Vec<_> = outcomes.iter().map(|o| o.base.name()).collect();
        let expected: Vec<_> = catalog.bases().iter().map(BaseItem::name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn empty_goal_rejected_before_searching() {
        let catalog = Catalog::standard().expect("standard");
        let result = Planner::new(&catalog).plan(&PropertySet::new());
        assert!(matches!(result, Err(MixError::EmptyGoal)));
    }

    #[test]
    fn unreachable_goal_reported_for_every_base() {
        let catalog = Catalog::new(
            vec![PropertyDef::new("A"), PropertyDef::new("B")],
            vec![
                BaseItem::new("Empty", PropertySet::new()),
                BaseItem::new("Seeded", PropertySet::from_names(["A"])),
            ],
            vec![Reagent::new(
                "AddA",
                PropertySet::from_names(["A"]),
                Vec::new(),
            )],
        )
        .expect("catalog");
        let outcomes = Planner::new(&catalog)
            .plan(&PropertySet::from_names(["B"]))
            .expect("plan");
        assert_eq!(outcomes.len(), catalog.bases().len());
        assert!(
            outcomes
                .iter()
                .all(|o| o.report.termination == Termination::FrontierExhausted)
        );
    }

    #[test]
    fn policy_applies_to_every_base() {
        let catalog = Catalog::standard().expect("standard");
        let outcomes = Planner::new(&catalog)
            .with_policy(SearchPolicy::with_max_expansions(1))
            .plan(&PropertySet::from_names(["Glowing", "Zombifying"]))
            .expect("plan");
        assert!(outcomes.iter().all(|o| {
            o.report.termination == Termination::ExpansionBudgetExceeded
                && o.report.stats.expanded == 1
        }));
    }

    #[test]
    fn plan_one_matches_plan() {
        let catalog = Catalog::standard().expect("standard");
        let planner = Planner::new(&catalog);
        let desired = PropertySet::from_names(["Spicy", "Energizing"]);
        let all = planner.plan(&desired).expect("plan");
        let base = catalog.resolve_base("Sour Diesel").expect("base");
        let one = planner.plan_one(base, &desired).expect("plan one");

        let from_all = all
            .iter()
            .find(|o| o.base.name() == "Sour Diesel")
            .expect("present");
        assert_eq!(from_all.report.recipe, one.report.recipe);
    }
}
