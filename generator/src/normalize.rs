//! Grammar normalizer (spec §4.A, component A). Flattens the surface
//! AST into a numbered sequence of productions over a registered
//! symbol map, introducing the augmented start production 0.

use std::collections::HashMap;

use slr_runtime::index::{ProdIndex, ProdVec, SymbolIndex, SymbolVec};

use crate::grammar::{Atom, Grammar as SurfaceGrammar};
use crate::error::GenError;
use crate::symbol::Symbol;

#[derive(Debug, Clone)]
pub struct Production {
    pub lhs: SymbolIndex,
    pub rhs: Vec<SymbolIndex>,
}

/// The augmented, flattened grammar the rest of the pipeline works
/// over. See spec §3's "Grammar (normalized)".
#[derive(Debug, Clone)]
pub struct NormalizedGrammar {
    pub productions: ProdVec<Production>,
    pub symbols: SymbolVec<Symbol>,
    by_name: HashMap<String, SymbolIndex>,
    pub dollar: SymbolIndex,
}

impl NormalizedGrammar {
    pub fn start_symbol(&self) -> SymbolIndex {
        self.productions[ProdIndex(0)].lhs
    }

    pub fn symbol_index(&self, name: &str) -> Option<SymbolIndex> {
        self.by_name.get(name).copied()
    }

    pub fn symbol(&self, index: SymbolIndex) -> &Symbol {
        &self.symbols[index]
    }

    /// Terminal symbols in registration order, followed by
    /// nonterminals in registration order -- the enumeration order
    /// spec §4.D leaves to the implementer. Fixed here and documented
    /// so the numeric state ids the collection builder assigns are
    /// reproducible across runs.
    pub fn enumeration_order(&self) -> Vec<SymbolIndex> {
        let mut terminals = Vec::new();
        let mut nonterminals = Vec::new();
        for index in self.symbols.indices() {
            if self.symbols[index].terminal {
                terminals.push(index);
            } else {
                nonterminals.push(index);
            }
        }
        terminals.extend(nonterminals);
        terminals
    }
}

struct Registry {
    symbols: SymbolVec<Symbol>,
    by_name: HashMap<String, SymbolIndex>,
}

impl Registry {
    fn new() -> Self {
        Registry {
            symbols: SymbolVec::new(),
            by_name: HashMap::new(),
        }
    }

    fn register(&mut self, symbol: Symbol) -> SymbolIndex {
        if let Some(&existing) = self.by_name.get(&symbol.name) {
            if self.symbols[existing].start {
                return existing;
            }
            // Nonterminal registration overrides a prior plain
            // reference only when the surface syntax agrees they name
            // the same thing; the grammar parser's distinct Name and
            // Terminal atoms mean this branch never sees a genuine
            // clash in practice (spec §4.A step 4).
            if self.symbols[existing].terminal != symbol.terminal {
                self.symbols[existing] = symbol;
            }
            return existing;
        }
        let index = self.symbols.push(symbol.clone());
        self.by_name.insert(symbol.name, index);
        index
    }
}

pub fn normalize(grammar: &SurfaceGrammar) -> Result<NormalizedGrammar, GenError> {
    if grammar.productions.is_empty() {
        return Err(GenError::EmptyGrammar);
    }

    let mut registry = Registry::new();
    let mut productions: ProdVec<Production> = ProdVec::new();

    let original_start_name = grammar.productions[0].lhs.clone();
    let original_start = registry.register(Symbol::nonterminal(original_start_name.clone()));

    let augmented_name = format!("{original_start_name}'");
    let mut augmented_start = Symbol::nonterminal(augmented_name);
    augmented_start.start = true;
    let augmented_index = registry.register(augmented_start);

    productions.push(Production {
        lhs: augmented_index,
        rhs: vec![original_start],
    });

    for production in &grammar.productions {
        let lhs = registry.register(Symbol::nonterminal(production.lhs.clone()));
        for sequence in &production.expr.alternatives {
            let mut rhs = Vec::with_capacity(sequence.atoms.len());
            for atom in &sequence.atoms {
                match atom {
                    Atom::Name(name) => {
                        rhs.push(registry.register(Symbol::nonterminal(name.clone())));
                    }
                    Atom::Terminal(literal) => {
                        rhs.push(registry.register(Symbol::terminal(literal.clone())));
                    }
                    Atom::Epsilon => {}
                    Atom::Optional(_) => return Err(GenError::UnsupportedAtom),
                }
            }
            productions.push(Production { lhs, rhs });
        }
    }

    // The end marker is a process-wide sentinel (spec §9 "Global
    // sentinel symbols"), not something the surface syntax spells, but
    // FOLLOW(start') must contain it from the very first fixpoint
    // pass, so it is registered unconditionally here rather than lazily
    // by the table assembler.
    let dollar = registry.register(Symbol::dollar());

    Ok(NormalizedGrammar {
        productions,
        symbols: registry.symbols,
        by_name: registry.by_name,
        dollar,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::parse as parse_grammar;

    fn normalize_source(source: &str) -> NormalizedGrammar {
        let surface = parse_grammar(source).expect("valid grammar source");
        normalize(&surface).expect("grammar normalizes")
    }

    #[test]
    fn augments_with_a_single_rhs_symbol() {
        let grammar = normalize_source("E -> \"id\" .\n");
        let augmented = &grammar.productions[ProdIndex(0)];
        assert_eq!(augmented.rhs.len(), 1);
        assert_eq!(grammar.symbol(augmented.rhs[0]).name, "E");
        assert!(grammar.symbol(augmented.lhs).start);
    }

    #[test]
    fn expands_alternatives_into_separate_productions() {
        let grammar = normalize_source(
            "E -> T | E \"+\" T .\nT -> F | T \"*\" F .\nF -> \"(\" E \")\" | \"id\" .\n",
        );
        // 1 augmented + 2 + 2 + 2 = 7, per scenario 1.
        assert_eq!(grammar.productions.len(), 7);
    }

    #[test]
    fn rejects_empty_grammar() {
        let surface = parse_grammar("").expect("empty source still parses to zero productions");
        let result = normalize(&surface);
        assert!(matches!(result, Err(GenError::EmptyGrammar)));
    }
}
