//! Scanner for the grammar surface syntax (spec §6).

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Ident(String),
    Str(String),
    Epsilon,
    Arrow,
    Bar,
    Dot,
    Eof,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("unterminated string literal starting at {line}:{column}")]
    UnterminatedString { line: usize, column: usize },
    #[error("unexpected character {ch:?} at {line}:{column}")]
    UnexpectedChar {
        ch: char,
        line: usize,
        column: usize,
    },
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(s) => write!(f, "identifier {s:?}"),
            TokenKind::Str(s) => write!(f, "string {s:?}"),
            TokenKind::Epsilon => write!(f, "epsilon"),
            TokenKind::Arrow => write!(f, "'->'"),
            TokenKind::Bar => write!(f, "'|'"),
            TokenKind::Dot => write!(f, "'.'"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

pub struct Scanner<'a> {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    _source: &'a str,
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            _source: source,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, ScanError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.peek_at(1) == Some('/') => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn next_token(&mut self) -> Result<Token, ScanError> {
        self.skip_trivia();
        let (line, column) = (self.line, self.column);

        let Some(c) = self.peek() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                line,
                column,
            });
        };

        if c == '-' && self.peek_at(1) == Some('>') {
            self.advance();
            self.advance();
            return Ok(Token {
                kind: TokenKind::Arrow,
                line,
                column,
            });
        }
        if c == '→' {
            self.advance();
            return Ok(Token {
                kind: TokenKind::Arrow,
                line,
                column,
            });
        }
        if c == '|' {
            self.advance();
            return Ok(Token {
                kind: TokenKind::Bar,
                line,
                column,
            });
        }
        if c == '.' {
            self.advance();
            return Ok(Token {
                kind: TokenKind::Dot,
                line,
                column,
            });
        }
        if c == 'ε' {
            self.advance();
            return Ok(Token {
                kind: TokenKind::Epsilon,
                line,
                column,
            });
        }
        if c == '"' {
            return self.scan_string(line, column);
        }
        if is_ident_start(c) {
            return Ok(self.scan_ident(line, column));
        }

        self.advance();
        Err(ScanError::UnexpectedChar { ch: c, line, column })
    }

    fn scan_string(&mut self, line: usize, column: usize) -> Result<Token, ScanError> {
        self.advance(); // opening quote
        let mut s = String::new();
        loop {
            match self.advance() {
                None | Some('\n') => {
                    return Err(ScanError::UnterminatedString { line, column })
                }
                Some('"') => break,
                Some('\\') => match self.advance() {
                    Some('n') => s.push('\n'),
                    Some('t') => s.push('\t'),
                    Some('r') => s.push('\r'),
                    Some('\\') => s.push('\\'),
                    Some('"') => s.push('"'),
                    Some(other) => s.push(other),
                    None => return Err(ScanError::UnterminatedString { line, column }),
                },
                Some(other) => s.push(other),
            }
        }
        Ok(Token {
            kind: TokenKind::Str(s),
            line,
            column,
        })
    }

    fn scan_ident(&mut self, line: usize, column: usize) -> Token {
        let mut s = String::new();
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                s.push(c);
                self.advance();
            } else {
                break;
            }
        }
        let kind = if s == "e" {
            TokenKind::Epsilon
        } else {
            TokenKind::Ident(s)
        };
        Token { kind, line, column }
    }
}
