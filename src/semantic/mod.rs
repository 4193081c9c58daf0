//! Semantic inventory
//!
//! - [`symbols`]: symbol table and function table types
//! - [`analyzer`]: the traversal that fills them
//!
//! Scopes are flat: a name lives either in `global` or in the body of the
//! function that assigns it. `if` and `while` bodies do not open a scope.

pub mod analyzer;
pub mod symbols;

pub use analyzer::{analyze, analyze_program, Analysis, SemanticAnalyzer};
pub use symbols::{FunctionInfo, FunctionTable, Symbol, SymbolTable, GLOBAL_SCOPE};
