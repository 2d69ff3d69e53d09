//! Pretty-printer: renders a surface `Grammar` back to the §6 BNF
//! dialect. Used by the CLI's `--report-conflicts` diagnostics (to
//! echo the productions a conflicting state derives from) and by
//! round-trip tests (parse . print . parse is the identity on the
//! AST, spec §8 property 7's sibling for grammar source rather than
//! parse trees).

use std::fmt::Write as _;

use super::ast::{Atom, Expression, Grammar, Production, Sequence};

pub fn print_grammar(grammar: &Grammar) -> String {
    let mut out = String::new();
    for production in &grammar.productions {
        print_production(production, &mut out);
    }
    out
}

fn print_production(production: &Production, out: &mut String) {
    let _ = write!(out, "{} -> ", production.lhs);
    print_expression(&production.expr, out);
    out.push_str(" .\n");
}

fn print_expression(expr: &Expression, out: &mut String) {
    for (i, seq) in expr.alternatives.iter().enumerate() {
        if i > 0 {
            out.push_str(" | ");
        }
        print_sequence(seq, out);
    }
}

fn print_sequence(seq: &Sequence, out: &mut String) {
    for (i, atom) in seq.atoms.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        print_atom(atom, out);
    }
}

fn print_atom(atom: &Atom, out: &mut String) {
    match atom {
        Atom::Name(name) => out.push_str(name),
        Atom::Terminal(lit) => {
            let _ = write!(out, "{:?}", lit);
        }
        Atom::Epsilon => out.push('e'),
        Atom::Optional(inner) => {
            out.push('[');
            print_expression(inner, out);
            out.push(']');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::parse;

    #[test]
    fn round_trips_a_small_grammar() {
        let source = "S -> A \"+\" A .\nA -> \"id\" | e .\n";
        let grammar = parse(source).expect("valid grammar");
        let printed = print_grammar(&grammar);
        let reparsed = parse(&printed).expect("printer output is valid grammar source");
        assert_eq!(grammar, reparsed);
    }
}
