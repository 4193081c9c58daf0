//! Inventory pass over the AST
//!
//! A single top-down traversal that fills a [`SymbolTable`] and a
//! [`FunctionTable`]. Nothing is validated: there are no use-before-declaration,
//! arity or type-compatibility checks. What the pass cannot resolve is tagged
//! [`TypeTag::Unknown`].

use crate::parser::ast::{AstNode, Program, TypeTag};
use crate::semantic::symbols::{FunctionTable, SymbolTable, GLOBAL_SCOPE};

/// Terminal artifacts of the pass
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    pub symbols: SymbolTable,
    pub functions: FunctionTable,
}

#[derive(Debug, Default)]
pub struct SemanticAnalyzer {
    symbols: SymbolTable,
    functions: FunctionTable,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visit a root node in the global scope.
    pub fn analyze(&mut self, root: &AstNode) {
        self.visit(root, GLOBAL_SCOPE);
    }

    pub fn visit(&mut self, node: &AstNode, scope: &str) {
        match node {
            AstNode::FunctionDef {
                name,
                params,
                body,
                return_type,
            } => {
                for param in params {
                    self.symbols.record(&param.name, TypeTag::Unknown, name);
                }
                self.visit_all(body, name);
                self.functions.push(name, *return_type);
            }
            AstNode::Assign { target, value } => {
                self.symbols.record(target, value_type(value), scope);
            }
            AstNode::Return { value } => self.visit(value, scope),
            AstNode::If {
                condition,
                then_body,
                else_body,
            } => {
                self.visit(condition, scope);
                self.visit_all(then_body, scope);
                self.visit_all(else_body, scope);
            }
            AstNode::While { condition, body } => {
                self.visit(condition, scope);
                self.visit_all(body, scope);
            }
            // Expressions declare nothing
            AstNode::BinaryOp { .. }
            | AstNode::UnaryOp { .. }
            | AstNode::Literal { .. }
            | AstNode::Variable { .. } => {}
        }
    }

    fn visit_all(&mut self, nodes: &[AstNode], scope: &str) {
        for node in nodes {
            self.visit(node, scope);
        }
    }

    pub fn finish(self) -> Analysis {
        log::debug!(
            "analysis: {} symbol(s), {} function(s)",
            self.symbols.len(),
            self.functions.len()
        );
        Analysis {
            symbols: self.symbols,
            functions: self.functions,
        }
    }
}

/// Type of an assigned value. Only a direct literal carries one.
fn value_type(value: &AstNode) -> TypeTag {
    match value {
        AstNode::Literal { type_tag, .. } => *type_tag,
        _ => TypeTag::Unknown,
    }
}

/// Analyze a single root node.
pub fn analyze(root: &AstNode) -> Analysis {
    let mut analyzer = SemanticAnalyzer::new();
    analyzer.analyze(root);
    analyzer.finish()
}

/// Analyze every function of a program into one pair of tables.
pub fn analyze_program(program: &Program) -> Analysis {
    let mut analyzer = SemanticAnalyzer::new();
    for function in &program.functions {
        analyzer.analyze(function);
    }
    analyzer.finish()
}
