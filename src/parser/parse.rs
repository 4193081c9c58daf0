//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, helper methods, and the parse entry points.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: Parsing function definitions and parameter lists
//! - `statements`: Parsing statements (declarations, assignments, if, while, return)
//! - `expressions`: Parsing expressions with precedence climbing
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.
//!
//! # Failure policy
//!
//! Parsing is all-or-nothing. The first structural mismatch aborts the parse
//! and is reported as a [`ParseError`]; no partial tree is ever returned.

use crate::parser::ast::*;
use crate::parser::lexer::{tokenize_source, Token, TokenKind};
use thiserror::Error;

/// Parser error type
///
/// `position` is the index of the offending token in the stream; `found` is
/// its text, or `None` when the stream ended early.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parse error at token {position}: {message}, found {}", describe(.found))]
pub struct ParseError {
    pub message: String,
    pub position: usize,
    pub found: Option<String>,
}

fn describe(found: &Option<String>) -> String {
    match found {
        Some(text) => format!("'{}'", text),
        None => "end of input".to_string(),
    }
}

/// Deepest parenthesis or block nesting, and tallest expression tree, the
/// parser accepts. Keeps recursion in the parser and in every later tree walk
/// within a bounded stack.
pub const MAX_NESTING: usize = 256;

/// Recursive descent parser for the minic language
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    /// Tokenize `source` line by line and build a parser over the result.
    pub fn from_source(source: &str) -> Self {
        Self::new(tokenize_source(source))
    }

    /// Parse the entire program: one or more function definitions.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();

        loop {
            program.functions.push(self.parse_function_definition()?);
            if self.is_at_end() {
                break;
            }
        }

        log::debug!("parsed {} function(s)", program.functions.len());
        Ok(program)
    }

    /// Parse exactly one function definition spanning the whole stream.
    pub fn parse_single_function(&mut self) -> Result<AstNode, ParseError> {
        let function = self.parse_function_definition()?;
        if !self.is_at_end() {
            return Err(self.error("Unexpected token after function body"));
        }
        Ok(function)
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    pub(crate) fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.position);
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub(crate) fn check_symbol(&self, symbol: char) -> bool {
        self.peek().is_some_and(|t| t.is_symbol(symbol))
    }

    pub(crate) fn check_keyword(&self, word: &str) -> bool {
        self.peek().is_some_and(|t| t.is_keyword(word))
    }

    pub(crate) fn match_symbol(&mut self, symbol: char) -> bool {
        if self.check_symbol(symbol) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn match_keyword(&mut self, word: &str) -> bool {
        if self.check_keyword(word) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Build an error pointing at the current token.
    pub(crate) fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError {
            message: message.into(),
            position: self.position,
            found: self.peek().map(|t| t.text.clone()),
        }
    }

    pub(crate) fn expect_symbol(&mut self, symbol: char, ctx: &str) -> Result<(), ParseError> {
        if self.match_symbol(symbol) {
            Ok(())
        } else {
            Err(self.error(format!("Expected '{}' {}", symbol, ctx)))
        }
    }

    /// Quoted text is a string literal, never a name.
    pub(crate) fn expect_identifier(&mut self, ctx: &str) -> Result<String, ParseError> {
        match self.peek() {
            Some(token) if token.kind == TokenKind::Identifier && !token.is_quoted() => {
                let name = token.text.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.error(format!("Expected identifier {}", ctx))),
        }
    }

    /// Run `parse` one nesting level deeper, failing with `message` at the
    /// current token once [`MAX_NESTING`] levels are open.
    pub(crate) fn nested<T>(
        &mut self,
        message: &str,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(self.error(message));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Consume a type keyword from `allowed` and return its tag.
    pub(crate) fn expect_type(&mut self, allowed: &[&str], ctx: &str) -> Result<TypeTag, ParseError> {
        let tag = match self.peek() {
            Some(token) if token.kind == TokenKind::Keyword && allowed.contains(&token.text.as_str()) => {
                TypeTag::from_keyword(&token.text)
            }
            _ => None,
        };

        match tag {
            Some(tag) => {
                self.advance();
                Ok(tag)
            }
            None => Err(self.error(format!("Expected {} {}", allowed.join(" or "), ctx))),
        }
    }

    /// True if the current token is one of the given type keywords.
    pub(crate) fn check_type(&self, allowed: &[&str]) -> bool {
        self.peek()
            .is_some_and(|t| t.kind == TokenKind::Keyword && allowed.contains(&t.text.as_str()))
    }
}

/// Parse a token stream into a program of one or more functions.
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}

/// Parse a token stream that holds exactly one function definition.
pub fn parse_function(tokens: Vec<Token>) -> Result<AstNode, ParseError> {
    Parser::new(tokens).parse_single_function()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_function() {
        let mut parser = Parser::from_source("int main() { return 0; }");
        let program = parser.parse_program().unwrap();

        assert_eq!(program.functions.len(), 1);
        match &program.functions[0] {
            AstNode::FunctionDef {
                name,
                params,
                return_type,
                body,
            } => {
                assert_eq!(name, "main");
                assert!(params.is_empty());
                assert_eq!(*return_type, TypeTag::Int);
                assert_eq!(body, &vec![AstNode::Return {
                    value: Box::new(AstNode::int("0"))
                }]);
            }
            other => panic!("Expected function definition, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_two_functions() {
        let source = "int f() { int x = 1; }\nint g() { int x = 2; }";
        let program = Parser::from_source(source).parse_program().unwrap();
        assert_eq!(program.functions.len(), 2);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let err = parse(Vec::new()).unwrap_err();
        assert_eq!(err.position, 0);
        assert_eq!(err.found, None);
        assert!(err.to_string().contains("end of input"));
    }

    #[test]
    fn test_single_function_rejects_trailing_tokens() {
        let tokens = tokenize_source("int main() { return 0; } x");
        let err = parse_function(tokens).unwrap_err();
        assert_eq!(err.found.as_deref(), Some("x"));
        assert_eq!(err.position, 9);
    }

    #[test]
    fn test_quoted_text_is_not_a_name() {
        let err = parse(tokenize_source("int \"f\"() { }")).unwrap_err();
        assert_eq!(err.position, 1);
        assert_eq!(err.message, "Expected identifier for function name");

        let err = parse(tokenize_source("int f(int \"p\") { }")).unwrap_err();
        assert_eq!(err.position, 4);
        assert_eq!(err.found.as_deref(), Some("\"p\""));

        let err = parse(tokenize_source("int main() { int \"x\" = 1; }")).unwrap_err();
        assert_eq!(err.message, "Expected identifier in declaration");

        let err = parse(tokenize_source("int main() { \"x\" = 1; }")).unwrap_err();
        assert_eq!(err.position, 5);
        assert_eq!(err.message, "Expected statement");
    }

    #[test]
    fn test_error_display_names_token() {
        let err = Parser::from_source("int main() { x = 1 }").parse_program().unwrap_err();
        assert_eq!(err.found.as_deref(), Some("}"));
        assert_eq!(
            err.to_string(),
            "Parse error at token 8: Expected ';' after assignment, found '}'"
        );
    }
}
