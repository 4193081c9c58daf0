//! Statement parsing implementation
//!
//! This module handles parsing of all minic statement types:
//!
//! - Declarations: `int x = 42;`, `string s = "hi";`
//! - Assignments: `x = x + 1;`
//! - Control flow: `if`/`else`, `while`
//! - `return`
//!
//! # Grammar
//!
//! ```text
//! statement   ::= declaration | if_stmt | while_stmt | return_stmt | assignment
//! declaration ::= ("int" | "string") identifier "=" expression ";"
//! assignment  ::= identifier "=" expression ";"
//! if_stmt     ::= "if" "(" expression ")" block ("else" block)?
//! while_stmt  ::= "while" "(" expression ")" block
//! return_stmt ::= "return" expression ";"
//! block       ::= "{" statement* "}"
//! ```
//!
//! A declaration produces the same [`AstNode::Assign`] as an assignment; the
//! declared keyword is not kept. Bodies must always be braced.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::declarations::VALUE_TYPES;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse block statements (inside braces, excluding the braces themselves)
    pub(crate) fn parse_block_statements(&mut self) -> Result<Vec<AstNode>, ParseError> {
        let mut statements = Vec::new();

        while !self.check_symbol('}') && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        Ok(statements)
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<AstNode, ParseError> {
        if self.check_type(VALUE_TYPES) {
            return self.parse_declaration();
        }

        if self.match_keyword("if") {
            return self.parse_if_statement();
        }

        if self.match_keyword("while") {
            return self.parse_while_statement();
        }

        if self.match_keyword("return") {
            return self.parse_return_statement();
        }

        if self
            .peek()
            .is_some_and(|t| t.kind == TokenKind::Identifier && !t.is_quoted())
        {
            return self.parse_assignment();
        }

        Err(self.error("Expected statement"))
    }

    /// Parse declaration: type name = expr;
    fn parse_declaration(&mut self) -> Result<AstNode, ParseError> {
        self.expect_type(VALUE_TYPES, "to start a declaration")?;
        let target = self.expect_identifier("in declaration")?;
        self.expect_symbol('=', "after declared name")?;
        let value = self.parse_expression()?;
        self.expect_symbol(';', "after declaration")?;

        Ok(AstNode::Assign {
            target,
            value: Box::new(value),
        })
    }

    /// Parse assignment: name = expr;
    fn parse_assignment(&mut self) -> Result<AstNode, ParseError> {
        let target = self.expect_identifier("as assignment target")?;
        self.expect_symbol('=', "after assignment target")?;
        let value = self.parse_expression()?;
        self.expect_symbol(';', "after assignment")?;

        Ok(AstNode::Assign {
            target,
            value: Box::new(value),
        })
    }

    /// Parse return statement
    fn parse_return_statement(&mut self) -> Result<AstNode, ParseError> {
        let value = self.parse_expression()?;
        self.expect_symbol(';', "after return value")?;

        Ok(AstNode::Return {
            value: Box::new(value),
        })
    }

    /// Parse if statement
    fn parse_if_statement(&mut self) -> Result<AstNode, ParseError> {
        let condition = self.parse_condition("if")?;
        let then_body = self.parse_braced_block("if body")?;

        let else_body = if self.match_keyword("else") {
            self.parse_braced_block("else body")?
        } else {
            Vec::new()
        };

        Ok(AstNode::If {
            condition: Box::new(condition),
            then_body,
            else_body,
        })
    }

    /// Parse while statement
    fn parse_while_statement(&mut self) -> Result<AstNode, ParseError> {
        let condition = self.parse_condition("while")?;
        let body = self.parse_braced_block("loop body")?;

        Ok(AstNode::While {
            condition: Box::new(condition),
            body,
        })
    }

    fn parse_condition(&mut self, keyword: &str) -> Result<AstNode, ParseError> {
        self.expect_symbol('(', &format!("after '{}'", keyword))?;
        let condition = self.parse_expression()?;
        self.expect_symbol(')', &format!("after {} condition", keyword))?;
        Ok(condition)
    }

    fn parse_braced_block(&mut self, ctx: &str) -> Result<Vec<AstNode>, ParseError> {
        let statements = self.nested("Statements nested too deeply", |parser| {
            parser.expect_symbol('{', &format!("before {}", ctx))?;
            parser.parse_block_statements()
        })?;
        self.expect_symbol('}', &format!("after {}", ctx))?;
        Ok(statements)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::{ParseError, Parser, MAX_NESTING};

    fn body_of(source: &str) -> Vec<AstNode> {
        let wrapped = format!("int main() {{ {} }}", source);
        match Parser::from_source(&wrapped).parse_single_function().unwrap() {
            AstNode::FunctionDef { body, .. } => body,
            other => panic!("Expected function definition, got {:?}", other),
        }
    }

    fn error_of(source: &str) -> ParseError {
        let wrapped = format!("int main() {{ {} }}", source);
        Parser::from_source(&wrapped).parse_program().unwrap_err()
    }

    #[test]
    fn test_declaration_becomes_assign() {
        let body = body_of("int x = 21; string y = \"Diego\";");
        assert_eq!(
            body,
            vec![
                AstNode::assign("x", AstNode::int("21")),
                AstNode::assign("y", AstNode::string("\"Diego\"")),
            ]
        );
    }

    #[test]
    fn test_if_else() {
        let body = body_of("if (x > 10) { x = x + 1; } else { x = 0; }");
        match &body[0] {
            AstNode::If {
                condition,
                then_body,
                else_body,
            } => {
                assert_eq!(
                    **condition,
                    AstNode::binary(BinOp::Gt, AstNode::variable("x"), AstNode::int("10"))
                );
                assert_eq!(then_body.len(), 1);
                assert_eq!(else_body, &vec![AstNode::assign("x", AstNode::int("0"))]);
            }
            other => panic!("Expected if statement, got {:?}", other),
        }
    }

    #[test]
    fn test_if_without_else_has_empty_else_body() {
        let body = body_of("if (x) { return 1; }");
        assert!(matches!(&body[0], AstNode::If { else_body, .. } if else_body.is_empty()));
    }

    #[test]
    fn test_nested_while() {
        let body = body_of("while (i < 3) { while (j < 2) { j = j + 1; } i = i + 1; }");
        match &body[0] {
            AstNode::While { body, .. } => {
                assert_eq!(body.len(), 2);
                assert!(matches!(body[0], AstNode::While { .. }));
            }
            other => panic!("Expected while statement, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_semicolon() {
        let err = error_of("x = 1 return x;");
        assert_eq!(err.found.as_deref(), Some("return"));
        assert!(err.message.contains("';'"));
    }

    #[test]
    fn test_missing_close_paren() {
        let err = error_of("while (x < 3 { x = 1; }");
        assert_eq!(err.found.as_deref(), Some("{"));
        assert!(err.message.contains("')'"));
    }

    #[test]
    fn test_unrecognized_statement_start() {
        let err = error_of("for (x) { }");
        assert_eq!(err.found.as_deref(), Some("for"));
        assert_eq!(err.message, "Expected statement");
    }

    #[test]
    fn test_unbraced_body_is_rejected() {
        let err = error_of("if (x) return 1;");
        assert_eq!(err.found.as_deref(), Some("return"));
    }

    fn nested_loops(levels: usize) -> String {
        format!("{}x = 1;{}", "while (1) { ".repeat(levels), " }".repeat(levels))
    }

    #[test]
    fn test_block_nesting_limit() {
        let body = body_of(&nested_loops(MAX_NESTING));
        assert!(matches!(body[0], AstNode::While { .. }));

        // `int main ( ) {` then five tokens per loop header; the '{' is the fifth
        let err = error_of(&nested_loops(MAX_NESTING + 1));
        assert_eq!(err.message, "Statements nested too deeply");
        assert_eq!(err.position, 5 + 5 * MAX_NESTING + 4);
        assert_eq!(err.found.as_deref(), Some("{"));
    }

    #[test]
    fn test_quoted_assignment_target_is_rejected() {
        let err = error_of("\"x\" = 1;");
        assert_eq!(err.message, "Expected statement");
        assert_eq!(err.found.as_deref(), Some("\"x\""));
    }
}
