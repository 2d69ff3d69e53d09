//! SLR table assembler (spec §4.E, component E). Fills ACTION/GOTO
//! cells from the canonical collection and FOLLOW sets, failing fast
//! on the first conflict.

use std::collections::HashMap;

use slr_runtime::action::Action;
use slr_runtime::index::{ProdIndex, StateIndex, SymbolIndex};

use crate::collection::CanonicalCollection;
use crate::error::{ConflictInfo, ConflictKind, GenError};
use crate::items::Item;
use crate::normalize::NormalizedGrammar;
use crate::settings::Settings;
use crate::sets::FollowSets;

/// Cells are keyed by `(state, symbol)` regardless of whether the
/// symbol is a terminal (ACTION) or nonterminal (GOTO); spec §3
/// describes one conceptual table and the driver dispatches on
/// whichever column the lookahead or the just-reduced LHS selects.
#[derive(Debug, Clone)]
pub struct Table {
    cells: HashMap<(StateIndex, SymbolIndex), Action>,
}

impl Table {
    pub fn get(&self, state: StateIndex, symbol: SymbolIndex) -> Action {
        self.cells.get(&(state, symbol)).copied().unwrap_or(Action::Error)
    }

    /// Number of non-error cells assembled, for the CLI's `--verbose`
    /// summary. Not spec-load-bearing: the generated driver encodes
    /// full dense rows (spec §6) regardless of this count.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    fn set(
        &mut self,
        grammar: &NormalizedGrammar,
        state: StateIndex,
        symbol: SymbolIndex,
        action: Action,
    ) -> Result<(), GenError> {
        match self.cells.get(&(state, symbol)) {
            None | Some(Action::Error) => {
                self.cells.insert((state, symbol), action);
                Ok(())
            }
            Some(existing) if same_kind(*existing, action) => {
                // Same state and symbol can only be reached by one
                // derivation path for a kind-preserving assignment
                // (e.g. two reduce items for the same production
                // landing on the same FOLLOW terminal); keep the
                // existing cell.
                Ok(())
            }
            Some(existing) => Err(GenError::Conflict {
                state,
                symbol: grammar.symbol(symbol).name.clone(),
                kind: conflict_kind(*existing, action),
            }),
        }
    }
}

fn same_kind(a: Action, b: Action) -> bool {
    match (a, b) {
        (Action::Accept, Action::Accept) => true,
        (Action::Shift(_), Action::Shift(_)) => true,
        (Action::Goto(_), Action::Goto(_)) => true,
        (Action::Reduce(p), Action::Reduce(q)) => p == q,
        _ => false,
    }
}

fn conflict_kind(existing: Action, incoming: Action) -> ConflictKind {
    match (existing, incoming) {
        (Action::Reduce(_), Action::Reduce(_)) => ConflictKind::ReduceReduce,
        (Action::Accept, Action::Reduce(_)) | (Action::Reduce(_), Action::Accept) => {
            ConflictKind::ReduceReduce
        }
        _ => ConflictKind::ShiftReduce,
    }
}

pub fn build_table(
    grammar: &NormalizedGrammar,
    collection: &CanonicalCollection,
    follows: &FollowSets,
    settings: &Settings,
) -> Result<Table, GenError> {
    let mut table = Table {
        cells: HashMap::new(),
    };
    let mut conflicts = Vec::new();

    for state in collection.states.indices() {
        for item in collection.states[state].iter() {
            if item.is_reducible(grammar) {
                reduce_item(grammar, &mut table, state, *item, follows, settings, &mut conflicts)?;
            } else {
                shift_or_goto_item(grammar, collection, &mut table, state, *item, settings, &mut conflicts)?;
            }
        }
    }

    if !conflicts.is_empty() {
        return Err(GenError::Conflicts(conflicts));
    }
    Ok(table)
}

/// Funnels a single cell assignment's result through
/// `Settings::report_conflicts`: collected into `conflicts` and
/// swallowed (so the assembler keeps filling the rest of the table)
/// when set, propagated immediately otherwise.
fn record_or_abort(
    result: Result<(), GenError>,
    settings: &Settings,
    conflicts: &mut Vec<ConflictInfo>,
) -> Result<(), GenError> {
    match result {
        Ok(()) => Ok(()),
        Err(GenError::Conflict { state, symbol, kind }) if settings.report_conflicts => {
            conflicts.push(ConflictInfo { state, symbol, kind });
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn reduce_item(
    grammar: &NormalizedGrammar,
    table: &mut Table,
    state: StateIndex,
    item: Item,
    follows: &FollowSets,
    settings: &Settings,
    conflicts: &mut Vec<ConflictInfo>,
) -> Result<(), GenError> {
    let lhs = grammar.productions[item.production].lhs;
    let is_augmented = item.production == ProdIndex(0);
    for &terminal in follows.of_symbol(lhs) {
        let action = if is_augmented && terminal == grammar.dollar {
            Action::Accept
        } else {
            Action::Reduce(item.production)
        };
        record_or_abort(table.set(grammar, state, terminal, action), settings, conflicts)?;
    }
    Ok(())
}

fn shift_or_goto_item(
    grammar: &NormalizedGrammar,
    collection: &CanonicalCollection,
    table: &mut Table,
    state: StateIndex,
    item: Item,
    settings: &Settings,
    conflicts: &mut Vec<ConflictInfo>,
) -> Result<(), GenError> {
    let symbol = item
        .symbol_after_dot(grammar)
        .expect("non-reducible item always has a symbol after the dot");
    let target = collection
        .goto_state(state, symbol)
        .expect("an item with a symbol after the dot always has a corresponding GOTO transition");
    let action = if grammar.symbol(symbol).terminal {
        Action::Shift(target)
    } else {
        Action::Goto(target)
    };
    record_or_abort(table.set(grammar, state, symbol, action), settings, conflicts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::build_canonical_collection;
    use crate::grammar::parse as parse_grammar;
    use crate::normalize::normalize;
    use crate::sets::{compute_first, compute_follow};

    fn build(source: &str) -> Result<(NormalizedGrammar, Table), GenError> {
        build_with(source, &Settings::default())
    }

    fn build_with(source: &str, settings: &Settings) -> Result<(NormalizedGrammar, Table), GenError> {
        let surface = parse_grammar(source).expect("valid grammar source");
        let grammar = normalize(&surface)?;
        let collection = build_canonical_collection(&grammar);
        let firsts = compute_first(&grammar);
        let follows = compute_follow(&grammar, &firsts);
        let table = build_table(&grammar, &collection, &follows, settings)?;
        Ok((grammar, table))
    }

    #[test]
    fn classic_expression_grammar_has_no_conflicts() {
        let result = build("E -> T | E \"+\" T .\nT -> F | T \"*\" F .\nF -> \"(\" E \")\" | \"id\" .\n");
        assert!(result.is_ok());
    }

    #[test]
    fn ambiguous_grammar_is_rejected_with_a_conflict() {
        let result = build("S -> S S | \"a\" .\n");
        match result {
            Err(GenError::Conflict { .. }) => {}
            other => panic!("expected a conflict, got {other:?}"),
        }
    }

    #[test]
    fn report_conflicts_collects_every_conflicting_cell_instead_of_aborting_at_the_first() {
        // Two distinct reduce items (`A -> "x"`, `B -> "x"`) disagree
        // on the same cell, and separately `S -> S S | "a"` disagrees
        // via shift/reduce; report_conflicts should surface both
        // rather than stopping at whichever state is visited first.
        let settings = Settings::default().with_report_conflicts(true);
        let result = build_with("S -> A | B .\nA -> \"x\" .\nB -> \"x\" .\n", &settings);
        match result {
            Err(GenError::Conflicts(conflicts)) => assert!(!conflicts.is_empty()),
            other => panic!("expected a collected-conflicts error, got {other:?}"),
        }
    }
}
