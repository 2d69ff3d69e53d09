//! Canonical collection builder (spec §4.D, component D): closure,
//! GOTO, and the worklist that expands them into the canonical
//! collection of LR(0) item sets.

use indexmap::IndexMap;

use slr_runtime::index::{ProdIndex, StateIndex, StateVec, SymbolIndex};

use crate::items::{Item, ItemSet};
use crate::normalize::NormalizedGrammar;

/// Closure(I) (spec §4.D): repeatedly add `B -> . gamma` for every
/// nonterminal `B` sitting right after a dot, until nothing new
/// appears.
pub fn closure(grammar: &NormalizedGrammar, seed: &ItemSet) -> ItemSet {
    let mut items = seed.clone();
    loop {
        let mut additions = Vec::new();
        for item in items.iter() {
            let Some(symbol) = item.symbol_after_dot(grammar) else {
                continue;
            };
            if grammar.symbol(symbol).terminal {
                continue;
            }
            for index in grammar.productions.indices() {
                if grammar.productions[index].lhs == symbol {
                    let candidate = Item::start(index);
                    if !items.contains(&candidate) {
                        additions.push(candidate);
                    }
                }
            }
        }
        if additions.is_empty() {
            break;
        }
        for item in additions {
            items.insert(item);
        }
    }
    items
}

/// Goto(I, X) (spec §4.D): advance the dot past `X` in every matching
/// item, then close the result. Returns an empty set when no item in
/// `from` has `X` right after its dot.
pub fn goto(grammar: &NormalizedGrammar, from: &ItemSet, symbol: SymbolIndex) -> ItemSet {
    let mut advanced = ItemSet::new();
    for item in from.iter() {
        if item.symbol_after_dot(grammar) == Some(symbol) {
            advanced.insert(item.advanced());
        }
    }
    if advanced.is_empty() {
        return advanced;
    }
    closure(grammar, &advanced)
}

/// The canonical collection: state 0 is `Closure({S' -> . S})`; every
/// further state is reached from an earlier one by GOTO on some
/// symbol, enumerated in `NormalizedGrammar::enumeration_order` (spec
/// §4.D's "implementer chooses an order" escape hatch, fixed here to
/// terminals-then-nonterminals in registration order).
pub struct CanonicalCollection {
    pub states: StateVec<ItemSet>,
    /// `transitions[(state, symbol)] = target state`, populated
    /// alongside the worklist so the table assembler doesn't have to
    /// recompute GOTO. An `IndexMap` rather than a `HashMap` so that
    /// iterating transitions (e.g. for diagnostics) stays in
    /// discovery order, mirroring the teacher's own use of
    /// `IndexMap` to keep per-state transition tables stable
    /// (`rustemo`'s `table.rs` builds its shift/goto rows the same
    /// way).
    pub transitions: IndexMap<(StateIndex, SymbolIndex), StateIndex>,
}

impl CanonicalCollection {
    pub fn goto_state(&self, state: StateIndex, symbol: SymbolIndex) -> Option<StateIndex> {
        self.transitions.get(&(state, symbol)).copied()
    }
}

pub fn build_canonical_collection(grammar: &NormalizedGrammar) -> CanonicalCollection {
    let start_item = ItemSet::from_items([Item::start(ProdIndex(0))]);
    let start_state = closure(grammar, &start_item);

    let mut states: StateVec<ItemSet> = StateVec::new();
    states.push(start_state);
    let mut transitions = IndexMap::new();

    let order = grammar.enumeration_order();

    let mut worklist_pos = 0;
    while worklist_pos < states.len() {
        let current = StateIndex(worklist_pos);
        for &symbol in &order {
            let target_set = goto(grammar, &states[current], symbol);
            if target_set.is_empty() {
                continue;
            }
            let existing = states.indices().find(|&i| states[i] == target_set);
            let target = match existing {
                Some(i) => i,
                None => {
                    let discovered = states.push(target_set);
                    log::debug!(
                        "discovered state {discovered} via GOTO({current}, {})",
                        grammar.symbol(symbol).name
                    );
                    discovered
                }
            };
            transitions.insert((current, symbol), target);
        }
        worklist_pos += 1;
    }

    CanonicalCollection { states, transitions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::parse as parse_grammar;
    use crate::normalize::normalize;

    #[test]
    fn classic_expression_grammar_has_twelve_states() {
        let surface = parse_grammar(
            "E -> T | E \"+\" T .\nT -> F | T \"*\" F .\nF -> \"(\" E \")\" | \"id\" .\n",
        )
        .expect("valid grammar");
        let grammar = normalize(&surface).expect("grammar normalizes");
        let collection = build_canonical_collection(&grammar);
        assert_eq!(collection.states.len(), 12);
    }

    #[test]
    fn building_twice_is_deterministic() {
        let surface = parse_grammar("S -> \"a\" S | \"a\" .\n").expect("valid grammar");
        let grammar = normalize(&surface).expect("grammar normalizes");
        let first = build_canonical_collection(&grammar);
        let second = build_canonical_collection(&grammar);
        assert_eq!(first.states.len(), second.states.len());
        for index in first.states.indices() {
            assert_eq!(first.states[index], second.states[index]);
        }
    }
}
