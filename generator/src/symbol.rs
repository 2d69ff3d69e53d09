//! Grammar symbols (spec §3). Equality and hashing consider only name
//! and terminal-ness: two symbols with the same name and the same
//! terminal flag are the same symbol regardless of which production
//! introduced them first.

use std::hash::{Hash, Hasher};

#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    pub terminal: bool,
    pub start: bool,
}

impl Symbol {
    pub fn nonterminal(name: impl Into<String>) -> Self {
        Symbol {
            name: name.into(),
            terminal: false,
            start: false,
        }
    }

    pub fn terminal(name: impl Into<String>) -> Self {
        Symbol {
            name: name.into(),
            terminal: true,
            start: false,
        }
    }

    /// The end-of-input marker, spec §3's `$`.
    pub fn dollar() -> Self {
        Symbol::terminal("$")
    }

    /// Epsilon, spec §3's `ε`. Never appears on a normalized RHS or in
    /// the symbol map; it shows up only as a member of a FIRST set.
    pub fn epsilon() -> Self {
        Symbol::terminal("ε")
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.terminal == other.terminal
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.terminal.hash(state);
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
