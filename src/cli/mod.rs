//! CLI command handlers
//!
//! This module contains the interactive menu and the one-shot command
//! handlers, bridging argument parsing and prompts with the storage and
//! reports layers.

pub mod commands;
pub mod menu;
pub mod prompt;

pub use commands::{
    add_transaction, render_all, render_categories, render_health, render_monthly,
    render_summary, AddArgs,
};
pub use menu::{Menu, MenuAction};
pub use prompt::Prompter;
