//! The generator's single error type (spec §7). Every fallible stage
//! from grammar source down to table assembly funnels into this enum;
//! the CLI matches on it only to pick an exit message, never to retry.

use slr_runtime::index::StateIndex;

use crate::grammar::GrammarSourceError;

#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("grammar has no productions")]
    EmptyGrammar,

    #[error("{kind} conflict in state {state} on symbol {symbol:?}")]
    Conflict {
        state: StateIndex,
        symbol: String,
        kind: ConflictKind,
    },

    /// Raised instead of the first [`GenError::Conflict`] when
    /// `Settings::report_conflicts` is set: every conflicting cell the
    /// table assembler found, not just the first (spec §4.E's
    /// "fatal" failure semantics still hold — this only changes how
    /// much the grammar author sees before generation aborts).
    #[error("{} conflicts found:\n{}", .0.len(), render_conflicts(.0))]
    Conflicts(Vec<ConflictInfo>),

    #[error("optional-expression atoms are not supported by this normalizer")]
    UnsupportedAtom,

    #[error(transparent)]
    Scan(#[from] GrammarSourceError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn render_conflicts(conflicts: &[ConflictInfo]) -> String {
    conflicts
        .iter()
        .map(ConflictInfo::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    ShiftReduce,
    ReduceReduce,
}

impl std::fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConflictKind::ShiftReduce => write!(f, "shift/reduce"),
            ConflictKind::ReduceReduce => write!(f, "reduce/reduce"),
        }
    }
}

/// One conflicting cell, as collected by `Settings::report_conflicts`.
#[derive(Debug, Clone)]
pub struct ConflictInfo {
    pub state: StateIndex,
    pub symbol: String,
    pub kind: ConflictKind,
}

impl std::fmt::Display for ConflictInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} conflict in state {} on symbol {:?}",
            self.kind, self.state, self.symbol
        )
    }
}
