//! Runtime support shared by every SLR(1) parser this generator
//! produces: index newtypes, the ACTION encoding, the host lexer
//! contract, the generic parse tree, and the table-driven driver
//! itself (spec §4.F).

pub mod action;
pub mod debug;
pub mod driver;
pub mod index;
pub mod lexer;
pub mod tree;

pub use action::Action;
pub use driver::{parse, ParseError, ParserDefinition};
pub use lexer::{Lexer, Token, VecLexer};
pub use tree::Node;
