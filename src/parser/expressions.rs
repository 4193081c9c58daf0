//! Expression parsing implementation
//!
//! Binary operators are parsed with precedence climbing: each recursion level
//! only accepts operators that bind at least as tightly as its minimum, and the
//! right operand is parsed one level higher. That yields left-associativity
//! within a level and correct nesting across levels.
//!
//! | level | operators   |
//! |-------|-------------|
//! | 2     | `*` `/` `%` |
//! | 1     | `+` `-`     |
//! | 0     | `<` `>`     |
//!
//! Unary minus binds tighter than every binary operator and applies to a
//! primary only. Parentheses restart climbing at level 0.
//!
//! Both the parenthesis depth and the height of the resulting tree are capped
//! at [`MAX_NESTING`]; past either the parse fails at the current token.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser, MAX_NESTING};

const NESTED_TOO_DEEPLY: &str = "Expression nested too deeply";

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<AstNode, ParseError> {
        self.parse_binary(0).map(|(expr, _)| expr)
    }

    /// Returns the expression together with its tree height.
    fn parse_binary(&mut self, min_precedence: u8) -> Result<(AstNode, usize), ParseError> {
        let (mut left, mut height) = self.parse_unary()?;

        while let Some(op) = self.peek_binary_op() {
            let precedence = op.precedence();
            if precedence < min_precedence {
                break;
            }
            self.advance();

            let (right, right_height) = self.parse_binary(precedence + 1)?;
            height = self.grow(height.max(right_height))?;
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok((left, height))
    }

    fn peek_binary_op(&self) -> Option<BinOp> {
        self.peek()
            .filter(|t| t.kind == TokenKind::Symbol)
            .and_then(|t| BinOp::from_symbol(&t.text))
    }

    /// Height of a new node over children of height `child_height`.
    fn grow(&self, child_height: usize) -> Result<usize, ParseError> {
        if child_height >= MAX_NESTING {
            return Err(self.error(NESTED_TOO_DEEPLY));
        }
        Ok(child_height + 1)
    }

    /// Parse unary: a single optional '-' before a primary
    fn parse_unary(&mut self) -> Result<(AstNode, usize), ParseError> {
        if self.match_symbol('-') {
            let (operand, height) = self.parse_primary()?;
            let height = self.grow(height)?;
            return Ok((
                AstNode::UnaryOp {
                    op: UnOp::Neg,
                    operand: Box::new(operand),
                },
                height,
            ));
        }

        self.parse_primary()
    }

    /// Parse primary (numbers, names, quoted strings, parenthesized expressions)
    fn parse_primary(&mut self) -> Result<(AstNode, usize), ParseError> {
        let Some(token) = self.peek() else {
            return Err(self.error("Expected expression"));
        };

        match token.kind {
            TokenKind::Number => {
                let text = token.text.clone();
                self.advance();
                Ok((
                    AstNode::Literal {
                        text,
                        type_tag: TypeTag::Int,
                    },
                    1,
                ))
            }
            TokenKind::Identifier if token.is_quoted() => {
                let text = token.text.clone();
                self.advance();
                Ok((
                    AstNode::Literal {
                        text,
                        type_tag: TypeTag::String,
                    },
                    1,
                ))
            }
            TokenKind::Identifier => {
                let name = token.text.clone();
                self.advance();
                Ok((AstNode::Variable { name }, 1))
            }
            TokenKind::Symbol if token.is_symbol('(') => {
                let inner = self.nested(NESTED_TOO_DEEPLY, |parser| {
                    parser.advance();
                    parser.parse_binary(0)
                })?;
                self.expect_symbol(')', "after expression")?;
                Ok(inner)
            }
            _ => Err(self.error("Expected expression")),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::lexer::tokenize;
    use crate::parser::parse::{ParseError, Parser, MAX_NESTING};

    fn expr(source: &str) -> Result<AstNode, ParseError> {
        let mut parser = Parser::new(tokenize(source));
        let node = parser.parse_expression()?;
        assert!(parser.is_at_end(), "unconsumed tokens in {:?}", source);
        Ok(node)
    }

    fn int(text: &str) -> AstNode {
        AstNode::int(text)
    }

    #[test]
    fn test_multiplication_nests_under_addition() {
        assert_eq!(
            expr("2 + 3 * 4").unwrap(),
            AstNode::binary(
                BinOp::Add,
                int("2"),
                AstNode::binary(BinOp::Mul, int("3"), int("4"))
            )
        );
        assert_eq!(
            expr("2 * 3 + 4").unwrap(),
            AstNode::binary(
                BinOp::Add,
                AstNode::binary(BinOp::Mul, int("2"), int("3")),
                int("4")
            )
        );
    }

    #[test]
    fn test_left_associative_within_level() {
        assert_eq!(
            expr("8 - 3 - 2").unwrap(),
            AstNode::binary(
                BinOp::Sub,
                AstNode::binary(BinOp::Sub, int("8"), int("3")),
                int("2")
            )
        );
        assert_eq!(expr("8 / 4 * 2").unwrap().to_string(), "((8 / 4) * 2)");
    }

    #[test]
    fn test_parentheses_reset_precedence() {
        assert_eq!(
            expr("(1 + 2) * 3").unwrap(),
            AstNode::binary(
                BinOp::Mul,
                AstNode::binary(BinOp::Add, int("1"), int("2")),
                int("3")
            )
        );
    }

    #[test]
    fn test_unary_minus_binds_tightest() {
        assert_eq!(
            expr("-2 * 3").unwrap(),
            AstNode::binary(BinOp::Mul, AstNode::neg(int("2")), int("3"))
        );
        assert_eq!(expr("1 - -x").unwrap().to_string(), "(1 - -x)");
        assert_eq!(expr("-(1 + 2)").unwrap().to_string(), "-(1 + 2)");
    }

    #[test]
    fn test_comparison_is_loosest() {
        assert_eq!(expr("x + 1 < y * 2").unwrap().to_string(), "((x + 1) < (y * 2))");
    }

    #[test]
    fn test_mixed_levels() {
        assert_eq!(
            expr("1 + 2 * 3 - 4 % 5").unwrap().to_string(),
            "((1 + (2 * 3)) - (4 % 5))"
        );
    }

    #[test]
    fn test_primary_kinds() {
        assert_eq!(expr("x").unwrap(), AstNode::variable("x"));
        assert_eq!(expr("\"hi\"").unwrap(), AstNode::string("\"hi\""));
        assert_eq!(expr("42").unwrap(), int("42"));
    }

    #[test]
    fn test_double_minus_is_rejected() {
        let err = expr("--1").unwrap_err();
        assert_eq!(err.position, 1);
        assert_eq!(err.found.as_deref(), Some("-"));
    }

    #[test]
    fn test_missing_operand() {
        let err = expr("1 +").unwrap_err();
        assert_eq!(err.found, None);
        assert_eq!(err.message, "Expected expression");
    }

    #[test]
    fn test_unclosed_parenthesis() {
        let err = expr("(1 + 2").unwrap_err();
        assert_eq!(err.found, None);
        assert!(err.message.contains("')'"));
    }

    fn parenthesized(levels: usize) -> String {
        format!("{}1{}", "( ".repeat(levels), " )".repeat(levels))
    }

    #[test]
    fn test_parenthesis_depth_limit() {
        assert_eq!(expr(&parenthesized(MAX_NESTING)).unwrap(), int("1"));

        let err = expr(&parenthesized(MAX_NESTING + 1)).unwrap_err();
        assert_eq!(err.message, "Expression nested too deeply");
        assert_eq!(err.position, MAX_NESTING);
        assert_eq!(err.found.as_deref(), Some("("));

        // Far past the limit still fails cleanly instead of exhausting the stack
        let err = expr(&parenthesized(100_000)).unwrap_err();
        assert_eq!(err.position, MAX_NESTING);
    }

    #[test]
    fn test_operator_chain_height_limit() {
        let chain = |terms: usize| vec!["1"; terms].join(" + ");

        assert!(expr(&chain(MAX_NESTING)).is_ok());

        let err = expr(&chain(MAX_NESTING + 1)).unwrap_err();
        assert_eq!(err.message, "Expression nested too deeply");
        assert_eq!(err.found, None);
    }
}
