//! Three-address code
//!
//! - [`instruction`]: the `op arg1 arg2 result` record
//! - [`generator`]: lowering from the AST, with label and temporary synthesis
//!
//! The output is a flat, ordered instruction list; order is execution order.

pub mod generator;
pub mod instruction;

pub use generator::{
    generate, generate_program, BranchPolarity, TacGenerator, TacOptions, ValueLowering,
};
pub use instruction::{Instruction, UNKNOWN_VALUE};
