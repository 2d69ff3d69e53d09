//! Black-box SLR(1) table assembly tests (spec §4.E, §8 properties
//! 5-6).

use slr_generator::{analyze, GenError};
use slr_runtime::Action;

#[test]
fn every_reducible_item_populates_its_follow_cells() {
    let (grammar, collection, table) =
        analyze("E -> T | E \"+\" T .\nT -> \"id\" .\n").expect("grammar analyzes");
    let firsts = slr_generator::sets::compute_first(&grammar);
    let follows = slr_generator::sets::compute_follow(&grammar, &firsts);

    for state in collection.states.indices() {
        for item in collection.states[state].iter() {
            if !item.is_reducible(&grammar) {
                continue;
            }
            let lhs = grammar.productions[item.production].lhs;
            for &terminal in follows.of_symbol(lhs) {
                match table.get(state, terminal) {
                    Action::Reduce(n) => assert_eq!(n, item.production),
                    Action::Accept => {
                        assert_eq!(item.production, slr_runtime::index::ProdIndex(0));
                        assert_eq!(terminal, grammar.dollar);
                    }
                    other => panic!(
                        "expected Reduce or Accept at ({state}, {}), found {other:?}",
                        grammar.symbol(terminal)
                    ),
                }
            }
        }
    }
}

#[test]
fn shift_reduce_conflict_is_reported_on_the_offending_symbol() {
    let result = analyze("S -> S S | \"a\" .\n");
    match result {
        Err(GenError::Conflict { symbol, .. }) => assert_eq!(symbol, "a"),
        other => panic!("expected a conflict naming 'a', got {other:?}"),
    }
}

#[test]
fn table_construction_never_silently_overwrites_a_different_action_kind() {
    // A grammar where two distinct reduce items would, if the
    // assembler didn't fail fast, disagree on the same cell.
    let result = analyze("S -> A | B .\nA -> \"x\" .\nB -> \"x\" .\n");
    assert!(matches!(result, Err(GenError::Conflict { .. })));
}
