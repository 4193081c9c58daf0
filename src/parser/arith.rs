//! Standalone arithmetic expression acceptor
//!
//! Checks that a token stream is one well-formed arithmetic expression without
//! building a tree. Operands are number tokens only; operators are `+ - * /`,
//! with parentheses and a single leading unary minus per factor.
//!
//! ```text
//! expression ::= term (("+" | "-") term)*
//! term       ::= unary (("*" | "/") unary)*
//! unary      ::= "-"? factor
//! factor     ::= number | "(" expression ")"
//! ```
//!
//! The whole stream must be consumed. On failure the error points at the first
//! token that breaks the grammar. Parentheses nest at most [`MAX_NESTING`] deep.

use crate::parser::lexer::{Token, TokenKind};
use crate::parser::parse::{ParseError, MAX_NESTING};

/// Recognizer state over a borrowed token stream
pub struct ExpressionAcceptor<'a> {
    tokens: &'a [Token],
    position: usize,
    depth: usize,
}

impl<'a> ExpressionAcceptor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    /// Accept the whole stream as one expression.
    pub fn accept(mut self) -> Result<(), ParseError> {
        self.expression()?;
        if self.position < self.tokens.len() {
            return Err(self.error("Unexpected token after expression"));
        }
        Ok(())
    }

    fn expression(&mut self) -> Result<(), ParseError> {
        self.term()?;
        while self.match_symbol('+') || self.match_symbol('-') {
            self.term()?;
        }
        Ok(())
    }

    fn term(&mut self) -> Result<(), ParseError> {
        self.unary()?;
        while self.match_symbol('*') || self.match_symbol('/') {
            self.unary()?;
        }
        Ok(())
    }

    fn unary(&mut self) -> Result<(), ParseError> {
        self.match_symbol('-');
        self.factor()
    }

    fn factor(&mut self) -> Result<(), ParseError> {
        match self.tokens.get(self.position) {
            Some(token) if token.kind == TokenKind::Number => {
                self.position += 1;
                Ok(())
            }
            Some(token) if token.is_symbol('(') => {
                if self.depth >= MAX_NESTING {
                    return Err(self.error("Expression nested too deeply"));
                }
                self.position += 1;
                self.depth += 1;
                let inner = self.expression();
                self.depth -= 1;
                inner?;
                if self.match_symbol(')') {
                    Ok(())
                } else {
                    Err(self.error("Expected ')' after expression"))
                }
            }
            _ => Err(self.error("Expected number or '('")),
        }
    }

    fn match_symbol(&mut self, symbol: char) -> bool {
        let matched = self
            .tokens
            .get(self.position)
            .is_some_and(|t| t.is_symbol(symbol));
        if matched {
            self.position += 1;
        }
        matched
    }

    fn error(&self, message: &str) -> ParseError {
        ParseError {
            message: message.to_string(),
            position: self.position,
            found: self.tokens.get(self.position).map(|t| t.text.clone()),
        }
    }
}

/// Validate a bare arithmetic expression.
pub fn accept_expression(tokens: &[Token]) -> Result<(), ParseError> {
    let result = ExpressionAcceptor::new(tokens).accept();
    if let Err(err) = &result {
        log::debug!("expression rejected: {}", err);
    }
    result
}
