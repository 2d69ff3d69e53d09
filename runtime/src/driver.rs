//! The generic table-driven driver: spec §4.F made executable without
//! a code-generation step. `slr-generator::emit` serializes the exact
//! same ACTION/GOTO contents into a standalone `.rs` file for hosts
//! that don't want a runtime dependency on the table itself; this
//! module is what the demo and the property tests drive directly.

use crate::action::Action;
use crate::index::StateIndex;
use crate::lexer::{Lexer, Token};
use crate::tree::Node;
use crate::{log, logn};

/// Queried by column key / LHS name rather than by typed index, since
/// this driver is meant to run over a table built at generator
/// runtime (no generated enums to index with).
pub trait ParserDefinition {
    fn action(&self, state: StateIndex, column_key: &str) -> Action;
    fn goto(&self, state: StateIndex, lhs_name: &str) -> Option<StateIndex>;
    fn prod_lhs_name(&self, prod: crate::index::ProdIndex) -> &str;
    fn prod_rhs_len(&self, prod: crate::index::ProdIndex) -> usize;
}

/// Reported to the host's error callback (spec §4.F "Error" branch).
#[derive(Debug, Clone)]
pub struct ParseError {
    pub state: StateIndex,
    pub unexpected_kind: String,
    pub unexpected_literal: String,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unexpected token (type={:?}, literal={:?}) in state {}",
            self.unexpected_kind, self.unexpected_literal, self.state
        )
    }
}

struct StackEntry {
    symbol_name: String,
    state: StateIndex,
}

/// Runs the dispatch loop of spec §4.F to completion and returns the
/// resulting parse tree (or an error node, per the Error/EOF rule).
pub fn parse<D: ParserDefinition>(
    def: &D,
    mut lexer: impl Lexer,
    mut on_error: impl FnMut(&ParseError),
) -> Node {
    let mut stack: Vec<StackEntry> = vec![StackEntry {
        symbol_name: String::new(),
        state: StateIndex(0),
    }];
    let mut tree_stack: Vec<Node> = Vec::new();
    let mut lookahead: Token = lexer.next_token();

    loop {
        let top_state = stack.last().unwrap().state;
        let column_key = lookahead.column_key().to_string();
        logn!("state {} on '{}' -- ", top_state, column_key);

        match def.action(top_state, &column_key) {
            Action::Shift(next) => {
                log!("shift to {}", next);
                stack.push(StackEntry {
                    symbol_name: lookahead.literal.clone(),
                    state: next,
                });
                tree_stack.push(Node::leaf(lookahead.kind.clone(), lookahead.literal.clone()));
                lookahead = lexer.next_token();
            }
            Action::Reduce(prod) => {
                let rhs_len = def.prod_rhs_len(prod);
                log!("reduce by production {} (rhs len {})", prod, rhs_len);
                let new_len = stack.len() - rhs_len;
                stack.truncate(new_len);
                let children = tree_stack.split_off(tree_stack.len() - rhs_len);

                let lhs_name = def.prod_lhs_name(prod).to_string();
                let under_state = stack.last().unwrap().state;
                let goto_state = def
                    .goto(under_state, &lhs_name)
                    .expect("SLR table has no GOTO entry for a symbol it just reduced to");

                stack.push(StackEntry {
                    symbol_name: lhs_name.clone(),
                    state: goto_state,
                });
                tree_stack.push(Node::inner(lhs_name, children));
            }
            Action::Goto(_) => unreachable!("GOTO is never the action on a lookahead column"),
            Action::Accept => {
                if lookahead.is_eof() {
                    log!("accept");
                    return tree_stack.pop().expect("accept with an empty tree stack");
                }
                // Accept is only valid exactly at $; anything else
                // here is a generator bug (table assembler only wires
                // Accept at the $ column), so fall through to Error.
                let err = ParseError {
                    state: top_state,
                    unexpected_kind: lookahead.kind.clone(),
                    unexpected_literal: lookahead.literal.clone(),
                };
                on_error(&err);
                lookahead = lexer.next_token();
            }
            Action::Error => {
                log!("error");
                let err = ParseError {
                    state: top_state,
                    unexpected_kind: lookahead.kind.clone(),
                    unexpected_literal: lookahead.literal.clone(),
                };
                on_error(&err);
                lookahead = lexer.next_token();
                if lookahead.is_eof() {
                    return tree_stack
                        .into_iter()
                        .next()
                        .unwrap_or_else(Node::error);
                }
            }
        }
    }
}
