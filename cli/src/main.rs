//! `slr`: reads a grammar file, writes the generated driver next to
//! it (or to an explicit output path), and exits non-zero on any
//! failure (spec §6 "CLI surface").

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use slr_generator::grammar::print_grammar;
use slr_generator::{emit, GenError, Settings};

#[derive(Parser)]
#[command(name = "slr", version, about = "A toy SLR(1) parser generator")]
struct Args {
    /// Grammar source file, in the dialect described in spec §6.
    grammar: PathBuf,

    /// Where to write the generated driver. Defaults to the grammar
    /// path with its extension replaced by `.rs`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print every grammar production, plus the assembled table's
    /// size, before exiting successfully.
    #[arg(short, long)]
    verbose: bool,

    /// Keep assembling past the first conflict, collecting every
    /// conflicting cell into the error instead of aborting at the
    /// first one (`Settings::report_conflicts`).
    #[arg(long)]
    report_conflicts: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), GenError> {
    let source = fs::read_to_string(&args.grammar).map_err(GenError::Io)?;

    let surface = slr_generator::grammar::parse(&source)?;
    if args.verbose {
        println!("{}", print_grammar(&surface));
    }

    let settings = Settings::default().with_report_conflicts(args.report_conflicts);
    let (grammar, collection, table) = slr_generator::analyze_with_settings(&source, &settings)?;
    if args.verbose {
        println!(
            "{} productions, {} states, {} non-error table cells",
            grammar.productions.len(),
            collection.states.len(),
            table.len()
        );
    }
    let generated = emit::emit_source(&grammar, &collection, &table);

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| args.grammar.with_extension("rs"));
    fs::write(&output_path, generated).map_err(GenError::Io)?;

    if args.verbose {
        println!("wrote {output_path:?}");
    }
    Ok(())
}
