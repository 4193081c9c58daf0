//! Declaration parsing implementation
//!
//! This module handles parsing of top-level function definitions:
//!
//! - Return types: `int`, `string`, `void`
//! - Parameter lists: whitespace separated `type name` pairs
//!
//! # Grammar
//!
//! ```text
//! function ::= return_type identifier "(" param* ")" "{" statement* "}"
//! param    ::= ("int" | "string") identifier
//! ```
//!
//! `,` is not a symbol of the language, so `int add(int a int b)` is how a
//! two-parameter function is written.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::parse::{ParseError, Parser};

pub(crate) const RETURN_TYPES: &[&str] = &["int", "string", "void"];
pub(crate) const VALUE_TYPES: &[&str] = &["int", "string"];

impl Parser {
    /// Parse function definition: type name(params) { body }
    pub(crate) fn parse_function_definition(&mut self) -> Result<AstNode, ParseError> {
        let return_type = self.expect_type(RETURN_TYPES, "to start a function definition")?;
        let name = self.expect_identifier("for function name")?;

        self.expect_symbol('(', "after function name")?;
        let params = self.parse_parameter_list()?;
        self.expect_symbol(')', "after parameters")?;

        self.expect_symbol('{', "before function body")?;
        let body = self.parse_block_statements()?;
        self.expect_symbol('}', "after function body")?;

        log::trace!("parsed function '{}' with {} statement(s)", name, body.len());

        Ok(AstNode::FunctionDef {
            name,
            params,
            body,
            return_type,
        })
    }

    /// Parse parameter list up to (not including) the closing ')'
    fn parse_parameter_list(&mut self) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();

        while self.check_type(VALUE_TYPES) {
            let declared_type = self.expect_type(VALUE_TYPES, "for parameter")?;
            let name = self.expect_identifier("for parameter name")?;
            params.push(Param {
                name,
                declared_type,
            });
        }

        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::Parser;

    #[test]
    fn test_parameters() {
        let function = Parser::from_source("int add(int a string b) { return a; }")
            .parse_single_function()
            .unwrap();

        match function {
            AstNode::FunctionDef { params, .. } => {
                assert_eq!(
                    params,
                    vec![
                        Param {
                            name: "a".to_string(),
                            declared_type: TypeTag::Int,
                        },
                        Param {
                            name: "b".to_string(),
                            declared_type: TypeTag::String,
                        },
                    ]
                );
            }
            other => panic!("Expected function definition, got {:?}", other),
        }
    }

    #[test]
    fn test_void_return_type() {
        let function = Parser::from_source("void main() { }")
            .parse_single_function()
            .unwrap();
        assert!(matches!(
            function,
            AstNode::FunctionDef { return_type: TypeTag::Void, ref body, .. } if body.is_empty()
        ));
    }

    #[test]
    fn test_missing_return_type() {
        let err = Parser::from_source("main() { }").parse_program().unwrap_err();
        assert_eq!(err.position, 0);
        assert_eq!(err.found.as_deref(), Some("main"));
    }

    #[test]
    fn test_missing_closing_brace() {
        let err = Parser::from_source("int main() { return 1;")
            .parse_program()
            .unwrap_err();
        assert_eq!(err.found, None);
        assert!(err.message.contains("'}'"));
    }

    #[test]
    fn test_parameter_without_name() {
        let err = Parser::from_source("int f(int) { }").parse_program().unwrap_err();
        assert_eq!(err.found.as_deref(), Some(")"));
    }
}
