//! Plain-text reports for pipeline artifacts
//!
//! Each function renders one artifact as a block of lines ending in a newline.

use crate::parser::ast::{AstNode, Program};
use crate::parser::lexer::Token;
use crate::semantic::{FunctionTable, SymbolTable};
use crate::tac::Instruction;
use std::fmt::Write;

/// One line per token: position, kind, text.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for (position, token) in tokens.iter().enumerate() {
        let _ = writeln!(out, "{:>4}  {:<10}  {}", position, token.kind, token.text);
    }
    out
}

/// Indented tree of every function in the program.
pub fn format_ast(program: &Program) -> String {
    let mut out = String::new();
    for function in &program.functions {
        write_node(&mut out, function, 0);
    }
    out
}

fn write_node(out: &mut String, node: &AstNode, depth: usize) {
    let pad = "  ".repeat(depth);
    match node {
        AstNode::FunctionDef {
            name,
            params,
            body,
            return_type,
        } => {
            let params = params
                .iter()
                .map(|p| format!("{} {}", p.declared_type, p.name))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = writeln!(out, "{}FunctionDef: {}({}) -> {}", pad, name, params, return_type);
            write_body(out, body, depth + 1);
        }
        AstNode::Assign { target, value } => {
            let _ = writeln!(out, "{}Assign: {} = {}", pad, target, describe_value(value));
        }
        AstNode::Return { value } => {
            let _ = writeln!(out, "{}Return: {}", pad, describe_value(value));
        }
        AstNode::If {
            condition,
            then_body,
            else_body,
        } => {
            let _ = writeln!(out, "{}If:", pad);
            let _ = writeln!(out, "{}  Condition: {}", pad, describe_value(condition));
            let _ = writeln!(out, "{}  Then:", pad);
            write_body(out, then_body, depth + 2);
            if !else_body.is_empty() {
                let _ = writeln!(out, "{}  Else:", pad);
                write_body(out, else_body, depth + 2);
            }
        }
        AstNode::While { condition, body } => {
            let _ = writeln!(out, "{}While:", pad);
            let _ = writeln!(out, "{}  Condition: {}", pad, describe_value(condition));
            let _ = writeln!(out, "{}  Body:", pad);
            write_body(out, body, depth + 2);
        }
        AstNode::BinaryOp { .. }
        | AstNode::UnaryOp { .. }
        | AstNode::Literal { .. }
        | AstNode::Variable { .. } => {
            let _ = writeln!(out, "{}{}", pad, describe_value(node));
        }
    }
}

fn write_body(out: &mut String, body: &[AstNode], depth: usize) {
    for statement in body {
        write_node(out, statement, depth);
    }
}

/// Literals show their tag, other expressions their infix form.
fn describe_value(node: &AstNode) -> String {
    match node {
        AstNode::Literal { text, type_tag } => format!("{} ({})", text, type_tag),
        other => other.to_string(),
    }
}

/// Variable / Type / Scope table.
pub fn format_symbols(symbols: &SymbolTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<16}{:<10}{}", "Variable", "Type", "Scope");
    for symbol in symbols {
        let _ = writeln!(out, "{:<16}{:<10}{}", symbol.name, symbol.type_tag, symbol.scope);
    }
    out
}

/// Function / Return table.
pub fn format_functions(functions: &FunctionTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<16}{}", "Function", "Return");
    for function in functions {
        let _ = writeln!(out, "{:<16}{}", function.name, function.return_type);
    }
    out
}

/// One instruction per line; labels flush left, everything else indented.
pub fn format_tac(code: &[Instruction]) -> String {
    let mut out = String::new();
    for instruction in code {
        if instruction.is_label() {
            let _ = writeln!(out, "{}", instruction);
        } else {
            let _ = writeln!(out, "    {}", instruction);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse::Parser;
    use crate::semantic::analyze_program;
    use crate::tac::{generate_program, TacOptions};

    const SOURCE: &str = "int main() {
        int x = 21;
        string y = \"Diego\";
        if (x > 10) { x = x + 1; } else { x = x - 1; }
        while (x < 30) { x = x + 2; }
        return x;
    }";

    fn program() -> Program {
        Parser::from_source(SOURCE).parse_program().unwrap()
    }

    #[test]
    fn test_ast_tree() {
        let tree = format_ast(&program());
        let expected = "\
FunctionDef: main() -> int
  Assign: x = 21 (int)
  Assign: y = \"Diego\" (string)
  If:
    Condition: (x > 10)
    Then:
      Assign: x = (x + 1)
    Else:
      Assign: x = (x - 1)
  While:
    Condition: (x < 30)
    Body:
      Assign: x = (x + 2)
  Return: x
";
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_symbol_report() {
        let analysis = analyze_program(&program());
        let report = format_symbols(&analysis.symbols);
        let lines: Vec<_> = report.lines().map(|l| l.split_whitespace().collect::<Vec<_>>()).collect();

        assert_eq!(lines[0], vec!["Variable", "Type", "Scope"]);
        assert_eq!(lines[1], vec!["x", "unknown", "main"]);
        assert_eq!(lines[2], vec!["y", "string", "main"]);
        assert_eq!(lines.len(), 3);

        let functions = format_functions(&analysis.functions);
        assert_eq!(functions.lines().nth(1).unwrap().split_whitespace().collect::<Vec<_>>(), vec!["main", "int"]);
    }

    #[test]
    fn test_tac_listing_indents_non_labels() {
        let code = generate_program(&program(), TacOptions::default());
        let listing = format_tac(&code);
        for line in listing.lines() {
            if line.ends_with(':') {
                assert!(!line.starts_with(' '));
            } else {
                assert!(line.starts_with("    "));
            }
        }
        assert_eq!(listing.lines().count(), code.len());
    }

    #[test]
    fn test_token_listing() {
        let tokens = crate::parser::lexer::tokenize("x = 1;");
        let listing = format_tokens(&tokens);
        let first: Vec<_> = listing.lines().next().unwrap().split_whitespace().collect();
        assert_eq!(first, vec!["0", "identifier", "x"]);
        assert_eq!(listing.lines().count(), 4);
    }
}
