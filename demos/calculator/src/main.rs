//! A runnable four-function calculator driven entirely by the table
//! `build.rs` generated from `grammar/expr.g`. There are no embedded
//! semantic actions (spec §1's non-goals exclude those); this binary
//! evaluates the generic parse tree itself.

use std::env;

use slr_runtime::{Lexer, Node, Token};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/calculator.rs"));
}

struct CalcLexer {
    chars: Vec<char>,
    pos: usize,
}

impl CalcLexer {
    fn new(input: &str) -> Self {
        CalcLexer {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }
}

impl Lexer for CalcLexer {
    fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let Some(c) = self.peek() else {
            return Token::eof();
        };

        match c {
            '+' | '-' | '*' | '/' | '(' | ')' => {
                self.pos += 1;
                Token::new(c.to_string(), c.to_string())
            }
            '0'..='9' | '.' => {
                let start = self.pos;
                while matches!(self.peek(), Some(d) if d.is_ascii_digit() || d == '.') {
                    self.pos += 1;
                }
                let text: String = self.chars[start..self.pos].iter().collect();
                Token::new("num", text)
            }
            other => panic!("unexpected character {other:?} in input"),
        }
    }
}

/// Folds the generic parse tree `build.rs` produces: productions with
/// one child (`E -> T`, `T -> F`, `F -> "num"`) pass the value
/// through; `F -> "(" E ")"` unwraps the middle child; the two
/// three-child binary productions (`E` and `T`) apply the operator
/// leaf sitting between their operands.
fn eval(node: &Node) -> f64 {
    if node.children.is_empty() {
        return node
            .val
            .parse()
            .unwrap_or_else(|_| panic!("leaf {:?} is not a number", node.val));
    }
    if node.children.len() == 1 {
        return eval(&node.children[0]);
    }
    if node.typ == "F" {
        return eval(&node.children[1]);
    }
    let lhs = eval(&node.children[0]);
    let op = node.children[1].val.as_str();
    let rhs = eval(&node.children[2]);
    match op {
        "+" => lhs + rhs,
        "-" => lhs - rhs,
        "*" => lhs * rhs,
        "/" => lhs / rhs,
        _ => panic!("unexpected operator {op:?}"),
    }
}

fn evaluate(input: &str) -> f64 {
    let lexer = CalcLexer::new(input);
    let mut had_error = false;
    let tree = generated::parse(lexer, |e| {
        had_error = true;
        eprintln!("parse error: {e}");
    });
    if had_error {
        panic!("expression {input:?} did not parse cleanly");
    }
    eval(&tree)
}

fn main() {
    env_logger::init();
    let expression = env::args().nth(1).unwrap_or_else(|| "(1 + 2) * 3".to_string());
    println!("{expression} = {}", evaluate(&expression));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_operator_precedence() {
        assert_eq!(evaluate("2 + 3 * 4"), 14.0);
        assert_eq!(evaluate("(2 + 3) * 4"), 20.0);
        assert_eq!(evaluate("10 / 2 - 3"), 2.0);
    }
}
