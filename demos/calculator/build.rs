//! Generates the calculator's driver at build time, mirroring the
//! teacher's own `tests/build.rs` (`generate_parsers(dir,
//! &Settings::default().with_force_all(true))`).

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::exit;

use slr_generator::Settings;

fn main() {
    let grammar_path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "grammar", "expr.g"]
        .iter()
        .collect();
    println!("cargo:rerun-if-changed={}", grammar_path.display());

    let source = fs::read_to_string(&grammar_path).unwrap_or_else(|e| {
        eprintln!("reading {grammar_path:?}: {e}");
        exit(1);
    });

    let generated = slr_generator::generate(&source, &Settings::default().with_force_all(true))
        .unwrap_or_else(|e| {
            eprintln!("{e}");
            exit(1);
        });

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    fs::write(out_dir.join("calculator.rs"), generated).unwrap_or_else(|e| {
        eprintln!("writing generated driver: {e}");
        exit(1);
    });
}
