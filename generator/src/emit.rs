//! Templates the computed table into a standalone `.rs` source file
//! (spec §6 "Table encoding in generated code", spec §9 "Emission via
//! templating"). Plain string templating rather than a `syn`/`quote`
//! AST builder: the generated module is a fixed skeleton around two
//! data tables and four trait methods, not a tree that benefits from
//! structural construction.

use std::fmt::Write as _;
use std::io::{self, Write};

use indoc::indoc;

use crate::collection::CanonicalCollection;
use crate::normalize::NormalizedGrammar;
use crate::table::Table;

macro_rules! geni {
    ($w:expr, $($args:tt)*) => {
        ($w).write_indented(&::std::fmt::format(format_args!($($args)*)))
    };
}

const DEFAULT_INDENT: usize = 4;

struct RustWrite<W: Write> {
    write: W,
    indent: usize,
}

impl<W: Write> RustWrite<W> {
    fn new(write: W) -> Self {
        RustWrite { write, indent: 0 }
    }

    fn inc_indent(&mut self) {
        self.indent += DEFAULT_INDENT;
    }

    fn dec_indent(&mut self) {
        self.indent -= DEFAULT_INDENT;
    }

    fn write_indented(&mut self, out: &str) -> io::Result<()> {
        let mut lines = out.lines().peekable();
        while let Some(line) = lines.next() {
            write!(self.write, "{0:1$}", "", self.indent)?;
            if lines.peek().is_some() || out.ends_with('\n') {
                writeln!(self.write, "{line}")?;
            } else {
                write!(self.write, "{line}")?;
            }
        }
        Ok(())
    }

}

/// Renders the generated driver module as a string. The CLI and the
/// `demos/calculator` build script both go through this rather than
/// writing directly, so tests can assert on the text without a
/// filesystem round-trip.
pub fn emit_source(
    grammar: &NormalizedGrammar,
    collection: &CanonicalCollection,
    table: &Table,
) -> String {
    let mut buf = Vec::new();
    emit(grammar, collection, table, &mut buf).expect("writing to an in-memory Vec never fails");
    String::from_utf8(buf).expect("generated source is ASCII-safe by construction")
}

pub fn emit<W: Write>(
    grammar: &NormalizedGrammar,
    collection: &CanonicalCollection,
    table: &Table,
    out: W,
) -> io::Result<()> {
    let mut out = RustWrite::new(out);

    geni!(
        out,
        "{}",
        indoc! {r#"
        // Generated driver. Do not edit by hand.

        use slr_runtime::action::Action;
        use slr_runtime::index::{ProdIndex, StateIndex};
        use slr_runtime::{Lexer, Node, ParseError, ParserDefinition};

        pub struct GeneratedDefinition;

    "#}
    )?;

    let mut names = String::new();
    let mut counts = String::new();
    for production in grammar.productions.iter() {
        let _ = write!(names, "{:?}, ", grammar.symbol(production.lhs).name);
        let _ = write!(counts, "{}, ", production.rhs.len());
    }
    geni!(out, "const PROD_NAMES: &[&str] = &[{names}];\n")?;
    geni!(out, "const PROD_COUNTS: &[usize] = &[{counts}];\n\n")?;

    emit_table(&mut out, grammar, collection, table, "ACTION_TABLE", true)?;
    emit_table(&mut out, grammar, collection, table, "GOTO_TABLE", false)?;

    geni!(
        out,
        "{}",
        indoc! {r#"
        impl ParserDefinition for GeneratedDefinition {
            fn action(&self, state: StateIndex, column_key: &str) -> Action {
                for (name, row) in ACTION_TABLE {
                    if *name == column_key {
                        let (code, arg) = row[state.0];
                        return Action::decode(code, arg, false);
                    }
                }
                Action::Error
            }

            fn goto(&self, state: StateIndex, lhs_name: &str) -> Option<StateIndex> {
                for (name, row) in GOTO_TABLE {
                    if *name == lhs_name {
                        let (code, arg) = row[state.0];
                        if code == slr_runtime::action::CODE_SHIFT_OR_GOTO {
                            return Some(StateIndex(arg as usize));
                        }
                    }
                }
                None
            }

            fn prod_lhs_name(&self, prod: ProdIndex) -> &str {
                PROD_NAMES[prod.0]
            }

            fn prod_rhs_len(&self, prod: ProdIndex) -> usize {
                PROD_COUNTS[prod.0]
            }
        }

        pub fn parse(lexer: impl Lexer, on_error: impl FnMut(&ParseError)) -> Node {
            slr_runtime::parse(&GeneratedDefinition, lexer, on_error)
        }
    "#}
    )?;

    Ok(())
}

fn emit_table<W: Write>(
    out: &mut RustWrite<W>,
    grammar: &NormalizedGrammar,
    collection: &CanonicalCollection,
    table: &Table,
    table_name: &str,
    terminals: bool,
) -> io::Result<()> {
    geni!(out, "const {table_name}: &[(&str, &[(i64, i64)])] = &[\n")?;
    out.inc_indent();
    for symbol in grammar.enumeration_order() {
        if grammar.symbol(symbol).terminal != terminals {
            continue;
        }
        let mut row = String::new();
        for state in collection.states.indices() {
            let (code, arg) = table.get(state, symbol).encode();
            let _ = write!(row, "({code}, {arg}), ");
        }
        geni!(out, "({:?}, &[{row}]),\n", grammar.symbol(symbol).name)?;
    }
    out.dec_indent();
    geni!(out, "];\n\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::build_canonical_collection;
    use crate::grammar::parse as parse_grammar;
    use crate::normalize::normalize;
    use crate::sets::{compute_first, compute_follow};
    use crate::settings::Settings;
    use crate::table::build_table;

    #[test]
    fn emits_a_table_row_per_symbol() {
        let surface = parse_grammar("E -> \"id\" .\n").expect("valid grammar");
        let grammar = normalize(&surface).expect("grammar normalizes");
        let collection = build_canonical_collection(&grammar);
        let firsts = compute_first(&grammar);
        let follows = compute_follow(&grammar, &firsts);
        let table = build_table(&grammar, &collection, &follows, &Settings::default()).expect("no conflicts");

        let source = emit_source(&grammar, &collection, &table);
        assert!(source.contains("ACTION_TABLE"));
        assert!(source.contains("GOTO_TABLE"));
        assert!(source.contains("\"id\""));
        assert!(source.contains("impl ParserDefinition for GeneratedDefinition"));
    }
}
