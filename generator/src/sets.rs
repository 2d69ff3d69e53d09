//! FIRST/FOLLOW engine (spec §4.C, component C). Fixpoint computation
//! over the symbol map; iteration walks productions in grammar
//! declaration order on every pass so repeated runs converge through
//! the same intermediate states (spec §4.C's determinism note, and
//! spec §5's byte-for-byte reproducibility requirement).

use std::collections::{HashMap, HashSet};

use slr_runtime::index::SymbolIndex;

use crate::normalize::NormalizedGrammar;

#[derive(Debug, Clone, Default)]
pub struct FirstSet {
    pub terminals: HashSet<SymbolIndex>,
    pub epsilon: bool,
}

impl FirstSet {
    fn union_from(&mut self, other: &FirstSet) -> bool {
        let mut changed = false;
        for &t in &other.terminals {
            changed |= self.terminals.insert(t);
        }
        if other.epsilon && !self.epsilon {
            self.epsilon = true;
            changed = true;
        }
        changed
    }
}

#[derive(Debug, Clone)]
pub struct FirstSets {
    by_symbol: HashMap<SymbolIndex, FirstSet>,
}

impl FirstSets {
    pub fn of_symbol(&self, symbol: SymbolIndex) -> &FirstSet {
        self.by_symbol
            .get(&symbol)
            .expect("every symbol in the grammar has a FIRST entry")
    }
}

#[derive(Debug, Clone)]
pub struct FollowSets {
    by_symbol: HashMap<SymbolIndex, HashSet<SymbolIndex>>,
}

impl FollowSets {
    pub fn of_symbol(&self, symbol: SymbolIndex) -> &HashSet<SymbolIndex> {
        self.by_symbol
            .get(&symbol)
            .expect("every nonterminal has a FOLLOW entry")
    }
}

/// FIRST over a symbol sequence (spec §4.C). `firsts` may be a
/// partially-converged table mid-fixpoint; this function only reads
/// it.
pub fn first_of_sequence(
    grammar: &NormalizedGrammar,
    firsts: &HashMap<SymbolIndex, FirstSet>,
    sequence: &[SymbolIndex],
) -> FirstSet {
    let mut result = FirstSet::default();
    if sequence.is_empty() {
        result.epsilon = true;
        return result;
    }
    for &symbol in sequence {
        if grammar.symbol(symbol).terminal {
            result.terminals.insert(symbol);
            return result;
        }
        let fs = firsts.get(&symbol).cloned().unwrap_or_default();
        result.terminals.extend(&fs.terminals);
        if !fs.epsilon {
            return result;
        }
    }
    result.epsilon = true;
    result
}

pub fn compute_first(grammar: &NormalizedGrammar) -> FirstSets {
    let mut by_symbol: HashMap<SymbolIndex, FirstSet> = HashMap::new();
    for index in grammar.symbols.indices() {
        if !grammar.symbol(index).terminal {
            by_symbol.insert(index, FirstSet::default());
        }
    }

    let mut pass = 0;
    loop {
        pass += 1;
        let mut changed = false;
        for production in grammar.productions.iter() {
            let rhs_first = first_of_sequence(grammar, &by_symbol, &production.rhs);
            let entry = by_symbol.entry(production.lhs).or_default();
            changed |= entry.union_from(&rhs_first);
        }
        log::trace!("FIRST fixpoint pass {pass}: changed={changed}");
        if !changed {
            break;
        }
    }

    FirstSets { by_symbol }
}

pub fn compute_follow(grammar: &NormalizedGrammar, firsts: &FirstSets) -> FollowSets {
    let mut by_symbol: HashMap<SymbolIndex, HashSet<SymbolIndex>> = HashMap::new();
    for index in grammar.symbols.indices() {
        if !grammar.symbol(index).terminal {
            by_symbol.insert(index, HashSet::new());
        }
    }

    by_symbol
        .entry(grammar.start_symbol())
        .or_default()
        .insert(grammar.dollar);

    let mut pass = 0;
    loop {
        pass += 1;
        let mut changed = false;
        for production in grammar.productions.iter() {
            for i in 0..production.rhs.len() {
                let symbol = production.rhs[i];
                if grammar.symbol(symbol).terminal {
                    continue;
                }
                let beta = &production.rhs[i + 1..];
                let first_beta = first_of_sequence(grammar, &firsts.by_symbol, beta);

                let entry = by_symbol.entry(symbol).or_default();
                for &t in &first_beta.terminals {
                    changed |= entry.insert(t);
                }

                if first_beta.epsilon {
                    let from_lhs = by_symbol.get(&production.lhs).cloned().unwrap_or_default();
                    let entry = by_symbol.entry(symbol).or_default();
                    for t in from_lhs {
                        changed |= entry.insert(t);
                    }
                }
            }
        }
        log::trace!("FOLLOW fixpoint pass {pass}: changed={changed}");
        if !changed {
            break;
        }
    }

    FollowSets { by_symbol }
}
