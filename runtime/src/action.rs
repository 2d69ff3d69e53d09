//! The ACTION-cell shape shared by the generic driver and the emitted
//! driver's static tables (spec §3, §6).

use crate::index::{ProdIndex, StateIndex};

/// One ACTION cell. `Goto` is a distinct variant at this level for
/// clarity even though, per spec §6, Shift and Goto share action code
/// `1` in the on-disk encoding — the driver never needs to
/// disambiguate them because terminals only ever shift and
/// nonterminals only ever goto.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Accept,
    Shift(StateIndex),
    Reduce(ProdIndex),
    Goto(StateIndex),
    Error,
}

impl Default for Action {
    fn default() -> Self {
        Action::Error
    }
}

/// Action codes from spec §6's table encoding.
pub const CODE_ACCEPT: i64 = 0;
pub const CODE_SHIFT_OR_GOTO: i64 = 1;
pub const CODE_REDUCE: i64 = 2;
pub const CODE_ERROR: i64 = 3;

impl Action {
    /// Encode as the `[code, arg]` pair embedded in generated tables.
    pub fn encode(&self) -> (i64, i64) {
        match self {
            Action::Accept => (CODE_ACCEPT, 0),
            Action::Shift(s) => (CODE_SHIFT_OR_GOTO, s.0 as i64),
            Action::Goto(s) => (CODE_SHIFT_OR_GOTO, s.0 as i64),
            Action::Reduce(p) => (CODE_REDUCE, p.0 as i64),
            Action::Error => (CODE_ERROR, 0),
        }
    }

    /// Decode a `[code, arg]` pair produced by `encode`. `as_goto`
    /// selects whether a shift-coded cell should be read back as a
    /// `Shift` (terminal column) or `Goto` (nonterminal column), since
    /// the wire encoding itself does not carry that distinction.
    pub fn decode(code: i64, arg: i64, as_goto: bool) -> Action {
        match code {
            CODE_ACCEPT => Action::Accept,
            CODE_SHIFT_OR_GOTO if as_goto => Action::Goto(StateIndex(arg as usize)),
            CODE_SHIFT_OR_GOTO => Action::Shift(StateIndex(arg as usize)),
            CODE_REDUCE => Action::Reduce(ProdIndex(arg as usize)),
            _ => Action::Error,
        }
    }
}
