//! Host-supplied lexer contract (spec §4.F "Lookahead").

/// One token handed to the driver by the host lexer: a named type plus
/// the literal text matched. Per spec §4.F, when `kind` is non-empty
/// it selects the ACTION column; otherwise `literal` does, which lets
/// a host lexer key on either named token types or raw literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: String,
    pub literal: String,
}

impl Token {
    pub fn new(kind: impl Into<String>, literal: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            literal: literal.into(),
        }
    }

    /// The end-of-input marker token (`literal == "$"`, spec §4.F).
    pub fn eof() -> Self {
        Self::new("", "$")
    }

    pub fn is_eof(&self) -> bool {
        self.literal == "$"
    }

    /// The column key to index ACTION/GOTO with: `kind` if present,
    /// else `literal`.
    pub fn column_key(&self) -> &str {
        if self.kind.is_empty() {
            &self.literal
        } else {
            &self.kind
        }
    }
}

/// The only obligation a host places on its lexer: produce the next
/// lookahead token, or the EOF token once input is exhausted.
pub trait Lexer {
    fn next_token(&mut self) -> Token;
}

/// A `Lexer` built from a pre-tokenized stream — useful for tests and
/// for hosts (like the calculator demo) that tokenize eagerly.
pub struct VecLexer {
    tokens: std::vec::IntoIter<Token>,
}

impl VecLexer {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| !t.is_eof()).unwrap_or(true) {
            tokens.push(Token::eof());
        }
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Lexer for VecLexer {
    fn next_token(&mut self) -> Token {
        self.tokens.next().unwrap_or_else(Token::eof)
    }
}
