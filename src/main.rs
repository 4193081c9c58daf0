//! minic command line interface
//!
//! Usage:
//!   minic [OPTIONS] <FILE>
//!
//! Examples:
//!   minic demos/default.mc                 # Every report
//!   minic --emit tac demos/loops.mc        # Three-address code only
//!   minic --compat --emit tac prog.mc      # Legacy branch layout
//!   minic --expr demos/arith.mc            # Arithmetic grammar check
//!   minic --tui demos/default.mc           # Interactive inspector

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, EmitKind};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, error, info};
use minic::parser::{accept_expression, lexer::tokenize_source};
use minic::pipeline::Compilation;
use minic::report;
use minic::tac::TacOptions;
use minic::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs;
use std::io;
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();

    if let Err(err) = run(&cli) {
        error!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    debug!("Input file: {:?}", cli.input);
    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read input file: {:?}", cli.input))?;

    let options = if cli.compat {
        TacOptions::compatible()
    } else {
        TacOptions::default()
    };
    debug!("TAC options: {:?}", options);

    if cli.expr {
        let tokens = tokenize_source(&source);
        accept_expression(&tokens).context("Expression rejected")?;
        info!("Expression accepted ({} tokens)", tokens.len());
        return write_output(&cli.output, "accepted\n");
    }

    if cli.tui {
        return run_inspector(source, options);
    }

    info!("Compiling {:?}...", cli.input);
    let compilation = Compilation::run(&source, options)
        .map_err(|failure| failure.error)
        .with_context(|| format!("Failed to compile {:?}", cli.input))?;

    write_output(&cli.output, &render_reports(&compilation, cli.emit))
}

fn render_reports(compilation: &Compilation, emit: EmitKind) -> String {
    let mut sections = Vec::new();
    let titled = emit == EmitKind::All;

    let mut section = |title: &str, body: String| {
        if titled {
            sections.push(format!("== {} ==\n{}", title, body));
        } else {
            sections.push(body);
        }
    };

    if emit.includes(EmitKind::Tokens) {
        section("Tokens", report::format_tokens(&compilation.tokens));
    }
    if emit.includes(EmitKind::Ast) {
        section("AST", report::format_ast(&compilation.program));
    }
    if emit.includes(EmitKind::Symbols) {
        let tables = format!(
            "{}\n{}",
            report::format_symbols(&compilation.analysis.symbols),
            report::format_functions(&compilation.analysis.functions)
        );
        section("Symbols", tables);
    }
    if emit.includes(EmitKind::Tac) {
        section("TAC", report::format_tac(&compilation.code));
    }

    sections.join("\n")
}

fn run_inspector(source: String, options: TacOptions) -> Result<()> {
    let mut app = App::new(source, options);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("Inspector failed")
}

fn write_output(path: &Option<PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(p) => {
            fs::write(p, content)
                .with_context(|| format!("Failed to write output file: {:?}", p))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
