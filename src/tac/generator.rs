//! TAC generation
//!
//! A [`TacGenerator`] walks the AST once, top-down, and appends instructions to
//! a list it owns. Its label and temporary counters live only as long as the
//! generator, so every call to [`generate`] numbers from `L1` and `t1`.
//!
//! # Branch layout
//!
//! With [`BranchPolarity::JumpIfFalse`] a guarded region is skipped when its
//! condition is false:
//!
//! ```text
//! if:     ifFalse c goto L1 / then / goto L2 / L1: / else / L2:
//! while:  L1: / ifFalse c goto L2 / body / goto L1 / L2:
//! ```
//!
//! [`BranchPolarity::Compatible`] reproduces the legacy layout, where a true
//! condition jumps forward and the `if` emits its else body first:
//!
//! ```text
//! if:     if c goto L1 / else / goto L2 / L1: / then / L2:
//! while:  L1: / if c goto L2 / body / goto L1 / L2:
//! ```

use crate::parser::ast::{AstNode, Program};
use crate::tac::instruction::{Instruction, UNKNOWN_VALUE};

/// Which condition outcome takes the forward jump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BranchPolarity {
    /// Jump past the guarded region when the condition is false
    #[default]
    JumpIfFalse,
    /// Jump forward when the condition is true (legacy layout)
    Compatible,
}

/// How operand values are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueLowering {
    /// Lower operators into temporaries, one instruction per operator
    #[default]
    Recursive,
    /// Only literals resolve; everything else becomes `unknown` (legacy)
    LiteralOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TacOptions {
    pub polarity: BranchPolarity,
    pub lowering: ValueLowering,
}

impl TacOptions {
    /// Bit-for-bit legacy output.
    pub fn compatible() -> Self {
        Self {
            polarity: BranchPolarity::Compatible,
            lowering: ValueLowering::LiteralOnly,
        }
    }
}

/// Per-call generation state
#[derive(Debug)]
pub struct TacGenerator {
    options: TacOptions,
    temp_count: usize,
    label_count: usize,
    code: Vec<Instruction>,
}

impl TacGenerator {
    pub fn new(options: TacOptions) -> Self {
        Self {
            options,
            temp_count: 0,
            label_count: 0,
            code: Vec::new(),
        }
    }

    pub fn emit_node(&mut self, node: &AstNode) {
        match node {
            AstNode::FunctionDef { body, .. } => self.emit_all(body),
            AstNode::Assign { target, value } => {
                let value = self.lower(value);
                self.push(Instruction::new("=", value, "", target.as_str()));
            }
            AstNode::Return { value } => {
                let value = self.lower(value);
                self.push(Instruction::new("return", value, "", ""));
            }
            AstNode::If {
                condition,
                then_body,
                else_body,
            } => self.emit_if(condition, then_body, else_body),
            AstNode::While { condition, body } => self.emit_while(condition, body),
            // A bare expression only contributes the code that computes it
            AstNode::BinaryOp { .. }
            | AstNode::UnaryOp { .. }
            | AstNode::Literal { .. }
            | AstNode::Variable { .. } => {
                self.lower(node);
            }
        }
    }

    fn emit_all(&mut self, nodes: &[AstNode]) {
        for node in nodes {
            self.emit_node(node);
        }
    }

    fn emit_if(&mut self, condition: &AstNode, then_body: &[AstNode], else_body: &[AstNode]) {
        let jump_target = self.new_label();
        let end = self.new_label();
        let condition = self.lower(condition);

        // The fall-through region runs when the jump is not taken
        let (fall_through, jumped_to) = match self.options.polarity {
            BranchPolarity::JumpIfFalse => (then_body, else_body),
            BranchPolarity::Compatible => (else_body, then_body),
        };

        let jump = self.branch(condition, &jump_target);
        self.push(jump);
        self.emit_all(fall_through);
        self.push(Instruction::goto(&end));
        self.push(Instruction::label(&jump_target));
        self.emit_all(jumped_to);
        self.push(Instruction::label(&end));
    }

    fn emit_while(&mut self, condition: &AstNode, body: &[AstNode]) {
        let start = self.new_label();
        let end = self.new_label();

        self.push(Instruction::label(&start));
        let condition = self.lower(condition);
        let exit = self.branch(condition, &end);
        self.push(exit);
        self.emit_all(body);
        self.push(Instruction::goto(&start));
        self.push(Instruction::label(&end));
    }

    fn branch(&self, condition: String, target: &str) -> Instruction {
        let op = match self.options.polarity {
            BranchPolarity::JumpIfFalse => "ifFalse",
            BranchPolarity::Compatible => "if",
        };
        Instruction::new(op, condition, "goto", target)
    }

    /// Resolve an expression to an operand, emitting the code that computes it.
    fn lower(&mut self, node: &AstNode) -> String {
        if self.options.lowering == ValueLowering::LiteralOnly {
            return match node {
                AstNode::Literal { text, .. } => text.clone(),
                _ => UNKNOWN_VALUE.to_string(),
            };
        }

        match node {
            AstNode::Literal { text, .. } => text.clone(),
            AstNode::Variable { name } => name.clone(),
            AstNode::BinaryOp { op, left, right } => {
                let left = self.lower(left);
                let right = self.lower(right);
                let temp = self.new_temp();
                self.push(Instruction::new(op.symbol(), left, right, temp.as_str()));
                temp
            }
            AstNode::UnaryOp { operand, .. } => {
                let operand = self.lower(operand);
                let temp = self.new_temp();
                self.push(Instruction::new("minus", operand, "", temp.as_str()));
                temp
            }
            AstNode::FunctionDef { .. }
            | AstNode::Assign { .. }
            | AstNode::Return { .. }
            | AstNode::If { .. }
            | AstNode::While { .. } => UNKNOWN_VALUE.to_string(),
        }
    }

    fn new_temp(&mut self) -> String {
        self.temp_count += 1;
        format!("t{}", self.temp_count)
    }

    fn new_label(&mut self) -> String {
        self.label_count += 1;
        format!("L{}", self.label_count)
    }

    fn push(&mut self, instruction: Instruction) {
        log::trace!("emit {}", instruction);
        self.code.push(instruction);
    }

    pub fn finish(self) -> Vec<Instruction> {
        log::debug!(
            "generated {} instruction(s), {} label(s), {} temporary(ies)",
            self.code.len(),
            self.label_count,
            self.temp_count
        );
        self.code
    }
}

/// Generate TAC for one node with fresh counters.
pub fn generate(node: &AstNode, options: TacOptions) -> Vec<Instruction> {
    let mut generator = TacGenerator::new(options);
    generator.emit_node(node);
    generator.finish()
}

/// Generate TAC for every function of a program, sharing one set of counters
/// so labels and temporaries stay unique across functions.
pub fn generate_program(program: &Program, options: TacOptions) -> Vec<Instruction> {
    let mut generator = TacGenerator::new(options);
    for function in &program.functions {
        generator.emit_node(function);
    }
    generator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::BinOp;

    fn render(code: &[Instruction]) -> Vec<String> {
        code.iter().map(|i| i.to_string()).collect()
    }

    fn increment_loop() -> AstNode {
        AstNode::While {
            condition: Box::new(AstNode::variable("cond")),
            body: vec![AstNode::assign(
                "x",
                AstNode::binary(BinOp::Add, AstNode::variable("x"), AstNode::int("1")),
            )],
        }
    }

    fn branch() -> AstNode {
        AstNode::If {
            condition: Box::new(AstNode::variable("c")),
            then_body: vec![AstNode::assign("x", AstNode::int("1"))],
            else_body: vec![AstNode::assign("x", AstNode::int("2"))],
        }
    }

    #[test]
    fn test_assign_and_return() {
        let code = generate(&AstNode::assign("x", AstNode::int("5")), TacOptions::default());
        assert_eq!(code, vec![Instruction::new("=", "5", "", "x")]);

        let code = generate(
            &AstNode::Return {
                value: Box::new(AstNode::variable("x")),
            },
            TacOptions::default(),
        );
        assert_eq!(code, vec![Instruction::new("return", "x", "", "")]);
    }

    #[test]
    fn test_while_layout() {
        let code = generate(&increment_loop(), TacOptions::default());
        assert_eq!(
            render(&code),
            vec![
                "L1:",
                "ifFalse cond goto L2",
                "+ x 1 t1",
                "= t1 x",
                "goto L1",
                "L2:",
            ]
        );
        assert!(code.first().unwrap().is_label());
        assert!(code.last().unwrap().is_label());
    }

    #[test]
    fn test_while_layout_compatible() {
        let code = generate(&increment_loop(), TacOptions::compatible());
        assert_eq!(
            render(&code),
            vec!["L1:", "if unknown goto L2", "= unknown x", "goto L1", "L2:"]
        );
    }

    #[test]
    fn test_if_layout() {
        let code = generate(&branch(), TacOptions::default());
        assert_eq!(
            render(&code),
            vec!["ifFalse c goto L1", "= 1 x", "goto L2", "L1:", "= 2 x", "L2:"]
        );
    }

    #[test]
    fn test_if_layout_compatible() {
        let code = generate(&branch(), TacOptions::compatible());
        assert_eq!(
            render(&code),
            vec!["if unknown goto L1", "= 2 x", "goto L2", "L1:", "= 1 x", "L2:"]
        );
    }

    #[test]
    fn test_polarity_and_lowering_are_independent() {
        let options = TacOptions {
            polarity: BranchPolarity::Compatible,
            lowering: ValueLowering::Recursive,
        };
        let code = generate(&branch(), options);
        assert_eq!(code[0], Instruction::new("if", "c", "goto", "L1"));
        assert_eq!(code[1], Instruction::new("=", "2", "", "x"));
    }

    #[test]
    fn test_nested_expression_lowering() {
        // x = -(a + b) * 3
        let value = AstNode::binary(
            BinOp::Mul,
            AstNode::neg(AstNode::binary(
                BinOp::Add,
                AstNode::variable("a"),
                AstNode::variable("b"),
            )),
            AstNode::int("3"),
        );
        let code = generate(&AstNode::assign("x", value), TacOptions::default());
        assert_eq!(
            render(&code),
            vec!["+ a b t1", "minus t1 t2", "* t2 3 t3", "= t3 x"]
        );
    }

    #[test]
    fn test_literal_only_lowering() {
        let options = TacOptions {
            polarity: BranchPolarity::JumpIfFalse,
            lowering: ValueLowering::LiteralOnly,
        };
        let code = generate(&AstNode::assign("y", AstNode::variable("x")), options);
        assert_eq!(code, vec![Instruction::new("=", "unknown", "", "y")]);

        let code = generate(&AstNode::assign("s", AstNode::string("\"a\"")), options);
        assert_eq!(code, vec![Instruction::new("=", "\"a\"", "", "s")]);
    }

    #[test]
    fn test_nested_labels_follow_source_order() {
        let inner = increment_loop();
        let outer = AstNode::While {
            condition: Box::new(AstNode::variable("go")),
            body: vec![inner],
        };
        let code = generate(&outer, TacOptions::default());
        let labels: Vec<_> = code.iter().filter_map(|i| i.label_name()).collect();
        assert_eq!(labels, vec!["L1", "L3", "L4", "L2"]);
    }

    #[test]
    fn test_counters_reset_per_call() {
        let first = generate(&increment_loop(), TacOptions::default());
        let second = generate(&increment_loop(), TacOptions::default());
        assert_eq!(first, second);
    }
}
