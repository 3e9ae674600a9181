//! # Validation Tier Tests (T0-T4)
//!
//! If ANY tier fails, the engine is INVALID.
//!
//! ## Tiers
//! - T0: Transformation Integrity
//! - T1: State Identity
//! - T2: Single-Step Search
//! - T3: Multi-Step Search (standard catalog)
//! - T4: Failure Reporting

use mixpath_core::{
    BaseItem, Catalog, MixError, Planner, PropertyDef, PropertySet, Reagent, Recipe,
    SubstitutionRule, apply, apply_sequence, fingerprint, satisfies, search,
};

fn set(names: &[&str]) -> PropertySet {
    PropertySet::from_names(names.iter().copied())
}

fn standard() -> Catalog {
    Catalog::standard().expect("standard catalog")
}

fn names<'a>(recipe: &Recipe<'a>) -> Vec<&'a str> {
    recipe.reagent_names().collect()
}

// =============================================================================
// TIER T0: TRANSFORMATION INTEGRITY
// =============================================================================

mod t0_transformation {
    use super::*;

    /// T0.1: Chained rules do not cascade within one application.
    #[test]
    fn chained_rules_do_not_cascade() {
        let reagent = Reagent::new(
            "Chain",
            PropertySet::new(),
            vec![
                SubstitutionRule::new("A", "B"),
                SubstitutionRule::new("B", "C"),
            ],
        );
        assert_eq!(apply(&set(&["A", "B"]), &reagent), set(&["B", "C"]));
    }

    /// T0.2: Standard Cuke turns Toxic into Euphoric and adds Energizing.
    #[test]
    fn cuke_on_toxic() {
        let catalog = standard();
        let cuke = catalog.resolve_reagent("Cuke").expect("cuke");
        assert_eq!(
            apply(&set(&["Toxic"]), cuke),
            set(&["Energizing", "Euphoric"])
        );
    }

    /// T0.3: Gasoline turns Energizing into Euphoric; the new Euphoric is not
    /// turned into Spicy by the later Euphoric rule.
    #[test]
    fn gasoline_single_pass() {
        let catalog = standard();
        let gasoline = catalog.resolve_reagent("Gasoline").expect("gasoline");
        assert_eq!(
            apply(&set(&["Energizing"]), gasoline),
            set(&["Euphoric", "Toxic"])
        );
        assert_eq!(
            apply(&set(&["Energizing", "Euphoric"]), gasoline),
            set(&["Euphoric", "Spicy", "Toxic"])
        );
    }

    /// T0.4: Replaying a sequence matches repeated single applications.
    #[test]
    fn replay_matches_single_steps() {
        let catalog = standard();
        let donut = catalog.resolve_reagent("Donut").expect("donut");
        let states = apply_sequence(&set(&[]), &[donut, donut]);
        assert_eq!(states[0], set(&["Calorie-Dense"]));
        assert_eq!(states[1], set(&["Calorie-Dense", "Explosive"]));
    }
}

// =============================================================================
// TIER T1: STATE IDENTITY
// =============================================================================

mod t1_state_identity {
    use super::*;

    /// T1.1: Fingerprint uses the pipe delimiter in sorted order.
    #[test]
    fn fingerprint_format() {
        let state = set(&["Toxic", "Anti-Gravity", "Long Faced"]);
        assert_eq!(fingerprint(&state).as_str(), "Anti-Gravity|Long Faced|Toxic");
    }

    /// T1.2: Goal check is a superset test.
    #[test]
    fn goal_is_superset() {
        let state = set(&["Calming", "Energizing", "Spicy"]);
        assert!(satisfies(&state, &set(&["Spicy", "Energizing"])));
        assert!(!satisfies(&state, &set(&["Spicy", "Glowing"])));
    }
}

// =============================================================================
// TIER T2: SINGLE-STEP SEARCH
// =============================================================================

mod t2_single_step {
    use super::*;

    /// T2.1: {Calming} + Mega Bean reaches Glowing in one step.
    #[test]
    fn mega_bean_scenario() {
        let reagents = vec![Reagent::new(
            "Mega Bean",
            set(&["Foggy"]),
            vec![SubstitutionRule::new("Calming", "Glowing")],
        )];
        let recipe = search(&set(&["Glowing"]), &set(&["Calming"]), &reagents)
            .expect("search")
            .expect("recipe");

        assert_eq!(recipe.len(), 1);
        assert_eq!(recipe.steps()[0].reagent.name(), "Mega Bean");
        assert_eq!(recipe.steps()[0].state, set(&["Glowing", "Foggy"]));
    }

    /// T2.2: Same scenario through the standard catalog.
    #[test]
    fn og_kush_glowing() {
        let catalog = standard();
        let base = catalog.resolve_base("OG Kush").expect("base");
        let recipe = search(&set(&["Glowing"]), base.properties(), catalog.reagents())
            .expect("search")
            .expect("recipe");
        assert_eq!(names(&recipe), vec!["Mega Bean"]);
    }

    /// T2.3: A base that already satisfies the goal needs no reagent.
    #[test]
    fn already_satisfied() {
        let catalog = standard();
        let base = catalog.resolve_base("OG Kush").expect("base");
        let recipe = search(&set(&["Calming"]), base.properties(), catalog.reagents())
            .expect("search")
            .expect("recipe");
        assert!(recipe.is_empty());
    }
}

// =============================================================================
// TIER T3: MULTI-STEP SEARCH
// =============================================================================

mod t3_multi_step {
    use super::*;

    /// T3.1: Spicy + Energizing for every base item.
    #[test]
    fn spicy_energizing() {
        let catalog = standard();
        let outcomes = Planner::new(&catalog)
            .plan(&set(&["Spicy", "Energizing"]))
            .expect("plan");

        let expected: [(&str, &[&str]); 5] = [
            ("OG Kush", &["Cuke", "Chili"]),
            ("Sour Diesel", &["Cuke", "Chili"]),
            ("Green Crack", &["Chili"]),
            ("Granddady Purple", &["Cuke", "Chili"]),
            ("Meth", &["Cuke", "Chili"]),
        ];
        for (outcome, (base, reagents)) in outcomes.iter().zip(expected) {
            assert_eq!(outcome.base.name(), base);
            let recipe = outcome.report.recipe.as_ref().expect("recipe");
            assert_eq!(names(recipe), reagents.to_vec());
        }
    }

    /// T3.2: Three-step recipe with intermediate states.
    #[test]
    fn sour_diesel_glowing() {
        let catalog = standard();
        let base = catalog.resolve_base("Sour Diesel").expect("base");
        let recipe = search(&set(&["Glowing"]), base.properties(), catalog.reagents())
            .expect("search")
            .expect("recipe");

        assert_eq!(names(&recipe), vec!["Cuke", "Mega Bean", "Battery"]);
        assert_eq!(recipe.steps()[0].state, set(&["Energizing", "Refreshing"]));
        assert_eq!(
            recipe.steps()[1].state,
            set(&["Cyclopean", "Foggy", "Refreshing"])
        );
        assert_eq!(
            recipe.final_state(),
            Some(&set(&["Bright-Eyed", "Foggy", "Glowing", "Refreshing"]))
        );
    }

    /// T3.3: Applying the same reagent twice is a valid recipe.
    #[test]
    fn repeated_reagent() {
        let catalog = standard();
        let base = catalog.resolve_base("Meth").expect("base");
        let recipe = search(&set(&["Explosive"]), base.properties(), catalog.reagents())
            .expect("search")
            .expect("recipe");
        assert_eq!(names(&recipe), vec!["Donut", "Donut"]);
    }

    /// T3.4: Four-step recipe for a two-property goal.
    #[test]
    fn zombifying_cyclopean() {
        let catalog = standard();
        let base = catalog.resolve_base("Green Crack").expect("base");
        let recipe = search(
            &set(&["Zombifying", "Cyclopean"]),
            base.properties(),
            catalog.reagents(),
        )
        .expect("search")
        .expect("recipe");
        assert_eq!(
            names(&recipe),
            vec!["Gasoline", "Cuke", "Battery", "Mega Bean"]
        );
    }

    /// T3.5: Identical queries give identical recipes.
    #[test]
    fn repeated_queries_agree() {
        let catalog = standard();
        let planner = Planner::new(&catalog);
        let desired = set(&["Anti-Gravity"]);
        let first = planner.plan(&desired).expect("plan");
        let second = planner.plan(&desired).expect("plan");
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.report.recipe, b.report.recipe);
            assert_eq!(a.report.stats, b.report.stats);
        }
    }
}

// =============================================================================
// TIER T4: FAILURE REPORTING
// =============================================================================

mod t4_failures {
    use super::*;

    /// T4.1: A property no reagent produces is unreachable.
    #[test]
    fn unreachable_goal() {
        let catalog = Catalog::new(
            vec![
                PropertyDef::new("Calming"),
                PropertyDef::new("Foggy"),
                PropertyDef::new("Glowing"),
                PropertyDef::new("Toxic"),
            ],
            vec![BaseItem::new("OG Kush", set(&["Calming"]))],
            vec![Reagent::new(
                "Mega Bean",
                set(&["Foggy"]),
                vec![SubstitutionRule::new("Calming", "Glowing")],
            )],
        )
        .expect("catalog");

        let outcomes = Planner::new(&catalog)
            .plan(&set(&["Toxic"]))
            .expect("plan");
        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].report.recipe.is_none());
    }

    /// T4.2: Empty goal is an error, not an empty recipe.
    #[test]
    fn empty_goal() {
        let catalog = standard();
        let result = search(&PropertySet::new(), &set(&["Calming"]), catalog.reagents());
        assert!(matches!(result, Err(MixError::EmptyGoal)));
    }

    /// T4.3: One unreachable base does not hide the others.
    #[test]
    fn partial_failure() {
        let catalog = Catalog::new(
            vec![PropertyDef::new("A"), PropertyDef::new("B")],
            vec![
                BaseItem::new("Plain", set(&[])),
                BaseItem::new("Seeded", set(&["A"])),
            ],
            vec![Reagent::new(
                "Convert",
                set(&[]),
                vec![SubstitutionRule::new("A", "B")],
            )],
        )
        .expect("catalog");

        let outcomes = Planner::new(&catalog).plan(&set(&["B"])).expect("plan");
        assert!(outcomes[0].report.recipe.is_none());
        let recipe = outcomes[1].report.recipe.as_ref().expect("recipe");
        assert_eq!(names(recipe), vec!["Convert"]);
    }
}
