//! Recursive-descent parser building the surface AST (spec §6) from
//! the scanner's token stream. Hand-written rather than generated:
//! the generator cannot very well depend on its own output to parse
//! its own input grammar.

use super::ast::{Atom, Expression, Grammar, Production, Sequence};
use super::scanner::{Scanner, Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected {expected} but found {found} at {line}:{column}")]
    Unexpected {
        expected: String,
        found: TokenKind,
        line: usize,
        column: usize,
    },
}

pub fn parse(source: &str) -> Result<Grammar, super::GrammarSourceError> {
    let tokens = Scanner::new(source).tokenize()?;
    let mut parser = Parser { tokens, pos: 0 };
    let grammar = parser.parse_grammar()?;
    Ok(grammar)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        match self.peek().kind.clone() {
            TokenKind::Ident(name) => {
                self.advance();
                Ok(name)
            }
            other => Err(self.unexpected("an identifier", other)),
        }
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<(), ParseError> {
        if &self.peek().kind == kind {
            self.advance();
            Ok(())
        } else {
            let found = self.peek().kind.clone();
            Err(self.unexpected(&kind.to_string(), found))
        }
    }

    fn unexpected(&self, expected: &str, found: TokenKind) -> ParseError {
        let token = self.peek();
        ParseError::Unexpected {
            expected: expected.to_string(),
            found,
            line: token.line,
            column: token.column,
        }
    }

    fn parse_grammar(&mut self) -> Result<Grammar, ParseError> {
        let mut productions = Vec::new();
        while self.peek().kind != TokenKind::Eof {
            productions.push(self.parse_production()?);
        }
        Ok(Grammar { productions })
    }

    fn parse_production(&mut self) -> Result<Production, ParseError> {
        let lhs = self.expect_ident()?;
        self.expect(&TokenKind::Arrow)?;
        let expr = self.parse_expression()?;
        self.expect(&TokenKind::Dot)?;
        Ok(Production { lhs, expr })
    }

    fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        let mut alternatives = vec![self.parse_sequence()?];
        while self.peek().kind == TokenKind::Bar {
            self.advance();
            alternatives.push(self.parse_sequence()?);
        }
        Ok(Expression { alternatives })
    }

    fn parse_sequence(&mut self) -> Result<Sequence, ParseError> {
        let mut atoms = Vec::new();
        loop {
            match self.peek().kind.clone() {
                TokenKind::Ident(name) => {
                    self.advance();
                    atoms.push(Atom::Name(name));
                }
                TokenKind::Str(lit) => {
                    self.advance();
                    atoms.push(Atom::Terminal(lit));
                }
                TokenKind::Epsilon => {
                    self.advance();
                    atoms.push(Atom::Epsilon);
                }
                _ => break,
            }
        }
        if atoms.is_empty() {
            let found = self.peek().kind.clone();
            return Err(self.unexpected("an atom (identifier, string, or epsilon)", found));
        }
        Ok(Sequence { atoms })
    }
}
