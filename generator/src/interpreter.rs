//! Wires an assembled [`Table`] up to `slr_runtime::driver::ParserDefinition`
//! so the generic driver can run directly over it, with no codegen
//! step in between.
//!
//! Spec §4.F calls for the parser-runtime schema to be realized twice:
//! as emitted source (`emit::emit_source`) and as a generic in-memory
//! interpreter. This is the latter. It is what the driver round-trip
//! and error-recovery property tests (spec §8 properties 7-8,
//! scenarios 5-6) exercise, since they need a table to drive but no
//! `.rs` file to compile.

use slr_runtime::action::Action;
use slr_runtime::driver::ParserDefinition;
use slr_runtime::index::{ProdIndex, StateIndex};

use crate::collection::CanonicalCollection;
use crate::normalize::NormalizedGrammar;
use crate::table::Table;

/// Borrows the three pieces a completed analysis produces
/// (`slr_generator::analyze`'s return value) and answers the generic
/// driver's ACTION/GOTO/production queries directly against them.
pub struct TableDriver<'g> {
    grammar: &'g NormalizedGrammar,
    table: &'g Table,
}

impl<'g> TableDriver<'g> {
    pub fn new(grammar: &'g NormalizedGrammar, _collection: &'g CanonicalCollection, table: &'g Table) -> Self {
        TableDriver { grammar, table }
    }
}

impl<'g> ParserDefinition for TableDriver<'g> {
    fn action(&self, state: StateIndex, column_key: &str) -> Action {
        let Some(symbol) = self.grammar.symbol_index(column_key) else {
            return Action::Error;
        };
        if !self.grammar.symbol(symbol).terminal {
            return Action::Error;
        }
        self.table.get(state, symbol)
    }

    fn goto(&self, state: StateIndex, lhs_name: &str) -> Option<StateIndex> {
        let symbol = self.grammar.symbol_index(lhs_name)?;
        match self.table.get(state, symbol) {
            Action::Goto(target) => Some(target),
            _ => None,
        }
    }

    fn prod_lhs_name(&self, prod: ProdIndex) -> &str {
        &self.grammar.symbol(self.grammar.productions[prod].lhs).name
    }

    fn prod_rhs_len(&self, prod: ProdIndex) -> usize {
        self.grammar.productions[prod].rhs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze;
    use slr_runtime::{Token, VecLexer};

    fn tok(kind: &str, literal: &str) -> Token {
        Token::new(kind, literal)
    }

    #[test]
    fn parses_the_classic_expression_grammar() {
        let source = "E -> T | E \"+\" T .\nT -> F | T \"*\" F .\nF -> \"(\" E \")\" | \"id\" .\n";
        let (grammar, collection, table) = analyze(source).expect("grammar analyzes");
        let driver = TableDriver::new(&grammar, &collection, &table);

        // Scenario 5: id * id + id
        let tokens = vec![
            tok("id", "id"),
            tok("*", "*"),
            tok("id", "id"),
            tok("+", "+"),
            tok("id", "id"),
        ];
        let lexer = VecLexer::new(tokens);
        let mut errors = Vec::new();
        let tree = slr_runtime::parse(&driver, lexer, |e| errors.push(e.to_string()));

        assert!(errors.is_empty(), "expected no parse errors, got {errors:?}");
        assert_eq!(tree.typ, "E");
        let leaves: Vec<&str> = tree.terminal_leaves();
        assert_eq!(leaves, vec!["id", "*", "id", "+", "id"]);
    }

    #[test]
    fn reports_an_error_and_terminates_on_bad_input() {
        let source = "E -> T | E \"+\" T .\nT -> F | T \"*\" F .\nF -> \"(\" E \")\" | \"id\" .\n";
        let (grammar, collection, table) = analyze(source).expect("grammar analyzes");
        let driver = TableDriver::new(&grammar, &collection, &table);

        // Scenario 6: id id is not in the language; the driver must
        // still terminate and hand back some tree.
        let tokens = vec![tok("id", "id"), tok("id", "id")];
        let lexer = VecLexer::new(tokens);
        let mut error_count = 0;
        let _tree = slr_runtime::parse(&driver, lexer, |_| error_count += 1);

        assert!(error_count >= 1);
    }
}
