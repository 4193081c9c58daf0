//! # Introduction
//!
//! minic compiles a small C-like language down to three-address code. Every
//! intermediate artifact is kept, so the token stream, the syntax tree, the
//! symbol inventory and the instruction list can all be inspected, either as
//! text reports or in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → Semantic inventory
//!                                ↘ TAC generator
//! ```
//!
//! 1. [`parser`]: tokenises the source and builds an AST by precedence climbing.
//! 2. [`semantic`]: walks the AST and records variables per scope and functions.
//! 3. [`tac`]: lowers the AST to a flat list of labeled three-address instructions.
//! 4. [`pipeline`]: runs the stages in order and keeps every artifact.
//! 5. [`report`]: plain-text renderings used by the command line driver.
//! 6. [`ui`]: ratatui-based inspector; not part of the stable library API.
//!
//! ## Language
//!
//! Types: `int`, `string`, `void` (return types only).
//! Statements: declarations, assignment, `if/else`, `while`, `return`.
//! Expressions: `+ - * / %`, `<` and `>`, unary minus, parentheses.

pub mod parser;
pub mod pipeline;
pub mod report;
pub mod semantic;
pub mod tac;
pub mod ui;
