//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source code display with syntax highlighting and line numbers
//! - [`tokens`]: Token stream with positions, marking the token a syntax error points at
//! - [`symbols`]: Variable and function tables from the semantic pass
//! - [`tac`]: Three-address code listing, or the syntax error when there is none
//! - [`status`]: Status bar with keybindings and TAC mode
//! - `utils`: Shared block, height and scroll helpers
//!
//! Each pane module exports a `render_*` function that takes the frame, its
//! area, the data to show, whether it has focus, and its scroll offset.

mod utils;

pub mod source;
pub mod status;
pub mod symbols;
pub mod tac;
pub mod tokens;

// Re-export render functions for convenience
pub use source::render_source_pane;
pub use status::render_status_bar;
pub use symbols::render_symbols_pane;
pub use tac::render_tac_pane;
pub use tokens::render_tokens_pane;
