//! End-to-end compilation of one source unit
//!
//! Runs the stages in order and keeps every artifact so callers (the CLI
//! reports and the inspector UI) can show any of them. A syntax failure stops
//! the pipeline after tokenization: the analyzer and generator only ever see a
//! complete tree.

use crate::parser::ast::Program;
use crate::parser::lexer::{tokenize_source, Token};
use crate::parser::parse::{parse, ParseError};
use crate::semantic::{analyze_program, Analysis};
use crate::tac::{generate_program, Instruction, TacOptions};

/// Artifacts of one compilation
#[derive(Debug, Clone)]
pub struct Compilation {
    pub tokens: Vec<Token>,
    pub program: Program,
    pub analysis: Analysis,
    pub code: Vec<Instruction>,
}

/// Why a compilation stopped
#[derive(Debug, Clone)]
pub struct Failure {
    /// Tokens are always available, even when parsing fails
    pub tokens: Vec<Token>,
    pub error: ParseError,
}

impl Compilation {
    /// Tokenize, parse, analyze and generate.
    pub fn run(source: &str, options: TacOptions) -> Result<Self, Box<Failure>> {
        let tokens = tokenize_source(source);

        let program = match parse(tokens.clone()) {
            Ok(program) => program,
            Err(error) => {
                log::warn!("{}", error);
                return Err(Box::new(Failure { tokens, error }));
            }
        };

        let analysis = analyze_program(&program);
        let code = generate_program(&program, options);

        Ok(Self {
            tokens,
            program,
            analysis,
            code,
        })
    }

    /// Regenerate the instruction list with different options.
    pub fn regenerate(&mut self, options: TacOptions) {
        self.code = generate_program(&self.program, options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_keeps_all_artifacts() {
        let compilation =
            Compilation::run("int main() {\n int x = 1;\n return x;\n}\n", TacOptions::default())
                .unwrap();

        assert_eq!(compilation.tokens.len(), 14);
        assert_eq!(compilation.program.functions.len(), 1);
        assert_eq!(compilation.analysis.symbols.len(), 1);
        assert_eq!(compilation.code.len(), 2);
    }

    #[test]
    fn test_failure_keeps_tokens() {
        let failure = Compilation::run("int main() { x = ; }", TacOptions::default()).unwrap_err();
        assert_eq!(failure.tokens.len(), 9);
        assert_eq!(failure.error.found.as_deref(), Some(";"));
    }

    #[test]
    fn test_regenerate_switches_layout() {
        let source = "int main() { while (x < 3) { x = x + 1; } }";
        let mut compilation = Compilation::run(source, TacOptions::default()).unwrap();
        assert_eq!(compilation.code[2].op, "ifFalse");

        compilation.regenerate(TacOptions::compatible());
        assert_eq!(compilation.code[1].op, "if");
        assert_eq!(compilation.code[1].arg1, "unknown");
    }
}
