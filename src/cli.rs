//! Command-line arguments

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// minic - a miniature C-like compiler front end
#[derive(Parser, Debug)]
#[command(name = "minic")]
#[command(version)]
#[command(about = "Tokenize, parse, inventory and lower a C-like program to three-address code", long_about = None)]
pub struct Cli {
    /// Source file to compile
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// What to emit
    #[arg(long, default_value = "all")]
    pub emit: EmitKind,

    /// Legacy branch layout and literal-only operand lowering
    #[arg(long)]
    pub compat: bool,

    /// Only check the token stream against the arithmetic expression grammar
    #[arg(long, conflicts_with = "tui")]
    pub expr: bool,

    /// Open the interactive inspector
    #[arg(long)]
    pub tui: bool,

    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmitKind {
    /// Token listing
    Tokens,
    /// Indented syntax tree
    Ast,
    /// Symbol and function tables
    Symbols,
    /// Three-address code
    Tac,
    /// Every report in pipeline order
    All,
}

impl EmitKind {
    pub fn includes(self, other: EmitKind) -> bool {
        self == EmitKind::All || self == other
    }
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
