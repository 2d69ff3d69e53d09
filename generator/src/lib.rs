//! Grammar analysis and SLR(1) table construction (spec §2 "the
//! core"): normalizer, FIRST/FOLLOW engine, canonical LR(0) collection
//! builder, table assembler, and the source emitter that serializes
//! the result into a driver a host crate can compile against.
//!
//! The scanner, recursive-descent parser, and pretty printer for the
//! grammar source language live under [`grammar`]; they are
//! collaborators the core depends on (spec §1) rather than the core
//! itself.

pub mod collection;
pub mod emit;
pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod items;
pub mod normalize;
pub mod settings;
pub mod sets;
pub mod symbol;
pub mod table;

pub use error::{ConflictKind, GenError};
pub use interpreter::TableDriver;
pub use normalize::NormalizedGrammar;
pub use settings::Settings;
pub use table::Table;

/// Runs the full pipeline (spec §2's A → B,C → D → E data flow) from
/// grammar source text to an assembled table, stopping short of
/// emission, under default settings (fail fast on the first
/// conflict). `analyze_with_settings` is the same pipeline with
/// `Settings` threaded through to the table assembler; `generate`
/// wraps that and templates the result.
pub fn analyze(source: &str) -> Result<(NormalizedGrammar, collection::CanonicalCollection, Table), GenError> {
    analyze_with_settings(source, &Settings::default())
}

/// Like [`analyze`], but `settings.report_conflicts` controls whether
/// the table assembler aborts on the first conflict (the default) or
/// collects every conflicting cell into one `GenError::Conflicts`
/// (spec §4.E's "fatal" semantics hold either way; no partial table is
/// ever returned).
pub fn analyze_with_settings(
    source: &str,
    settings: &Settings,
) -> Result<(NormalizedGrammar, collection::CanonicalCollection, Table), GenError> {
    let surface = grammar::parse(source)?;
    let grammar = normalize::normalize(&surface)?;
    let collection = collection::build_canonical_collection(&grammar);
    let firsts = sets::compute_first(&grammar);
    let follows = sets::compute_follow(&grammar, &firsts);
    let table = table::build_table(&grammar, &collection, &follows, settings)?;
    Ok((grammar, collection, table))
}

/// Analyzes `source` and templates a generated driver module, per
/// spec §6's table encoding and §4.F's driver contract.
pub fn generate(source: &str, settings: &Settings) -> Result<String, GenError> {
    let (grammar, collection, table) = analyze_with_settings(source, settings)?;
    Ok(emit::emit_source(&grammar, &collection, &table))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grammar_fails_at_normalization() {
        let result = analyze("");
        assert!(matches!(result, Err(GenError::EmptyGrammar)));
    }

    #[test]
    fn generation_is_deterministic() {
        let source = "E -> T | E \"+\" T .\nT -> F | T \"*\" F .\nF -> \"(\" E \")\" | \"id\" .\n";
        let settings = Settings::default();
        let first = generate(source, &settings).expect("grammar generates");
        let second = generate(source, &settings).expect("grammar generates");
        assert_eq!(first, second);
    }
}
