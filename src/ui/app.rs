//! Main TUI application state and logic

use crate::parser::lexer::Token;
use crate::pipeline::{Compilation, Failure};
use crate::tac::TacOptions;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

const PAGE: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tokens,
    Symbols,
    Tac,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: source -> tokens -> symbols -> tac)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Symbols,
            FocusedPane::Symbols => FocusedPane::Tac,
            FocusedPane::Tac => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tac,
            FocusedPane::Tokens => FocusedPane::Source,
            FocusedPane::Symbols => FocusedPane::Tokens,
            FocusedPane::Tac => FocusedPane::Symbols,
        }
    }
}

/// The main application state
pub struct App {
    /// The source code being compiled
    pub source_code: String,

    /// Options the current TAC listing was generated with
    pub options: TacOptions,

    /// Pipeline artifacts, or the syntax failure with its tokens
    pub outcome: Result<Compilation, Box<Failure>>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub tokens_scroll: usize,
    pub symbols_scroll: usize,
    pub tac_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Compile `source_code` and create the app around the result
    pub fn new(source_code: String, options: TacOptions) -> Self {
        let outcome = Compilation::run(&source_code, options);
        let status_message = match &outcome {
            Ok(compilation) => format!(
                "Compiled {} function(s)",
                compilation.program.functions.len()
            ),
            Err(failure) => failure.error.to_string(),
        };

        // Start on the token stream when there is an error to point at
        let focused_pane = if outcome.is_err() {
            FocusedPane::Tokens
        } else {
            FocusedPane::Source
        };

        let mut app = App {
            source_code,
            options,
            outcome,
            focused_pane,
            source_scroll: 0,
            tokens_scroll: 0,
            symbols_scroll: 0,
            tac_scroll: 0,
            should_quit: false,
            status_message,
        };
        if let Some(position) = app.error_position() {
            app.tokens_scroll = position.saturating_sub(PAGE / 2);
        }
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    pub fn is_compatible(&self) -> bool {
        self.options == TacOptions::compatible()
    }

    /// Tokens are available whether or not parsing succeeded
    pub fn tokens(&self) -> &[Token] {
        match &self.outcome {
            Ok(compilation) => &compilation.tokens,
            Err(failure) => &failure.tokens,
        }
    }

    /// Token index the syntax error was reported at, if any
    pub fn error_position(&self) -> Option<usize> {
        self.outcome
            .as_ref()
            .err()
            .map(|failure| failure.error.position)
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(pane_area);

        // Left column: Source (top) | Tokens (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        // Right column: Symbols (top) | TAC (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(columns[1]);

        super::panes::render_source_pane(
            frame,
            left_rows[0],
            &self.source_code,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        let error_position = self.error_position();
        let is_compatible = self.is_compatible();
        let focused_pane = self.focused_pane;

        let (tokens, analysis, code) = match &self.outcome {
            Ok(compilation) => (
                compilation.tokens.as_slice(),
                Some(&compilation.analysis),
                Ok(compilation.code.as_slice()),
            ),
            Err(failure) => (failure.tokens.as_slice(), None, Err(&failure.error)),
        };
        let instruction_count = code.ok().map(<[_]>::len);

        super::panes::render_tokens_pane(
            frame,
            left_rows[1],
            tokens,
            error_position,
            focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        super::panes::render_symbols_pane(
            frame,
            right_rows[0],
            analysis,
            focused_pane == FocusedPane::Symbols,
            &mut self.symbols_scroll,
        );

        super::panes::render_tac_pane(
            frame,
            right_rows[1],
            code,
            is_compatible,
            focused_pane == FocusedPane::Tac,
            &mut self.tac_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            instruction_count,
            is_compatible,
        );
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Tokens => &mut self.tokens_scroll,
            FocusedPane::Symbols => &mut self.symbols_scroll,
            FocusedPane::Tac => &mut self.tac_scroll,
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::PageUp => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(PAGE);
            }
            KeyCode::PageDown => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(PAGE);
            }
            KeyCode::Home => {
                *self.focused_scroll() = 0;
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.toggle_compat();
            }
            _ => {}
        }
    }

    /// Switch between standard and compatible TAC and regenerate
    fn toggle_compat(&mut self) {
        self.options = if self.is_compatible() {
            TacOptions::default()
        } else {
            TacOptions::compatible()
        };
        let mode = if self.is_compatible() {
            "compatible"
        } else {
            "standard"
        };

        match &mut self.outcome {
            Ok(compilation) => {
                compilation.regenerate(self.options);
                self.tac_scroll = 0;
                self.status_message = format!(
                    "Regenerated {} instruction(s) in {} mode",
                    compilation.code.len(),
                    mode
                );
                log::debug!("TAC mode switched to {}", mode);
            }
            Err(failure) => {
                self.status_message = format!("Switched to {} mode; {}", mode, failure.error);
            }
        }
    }
}
