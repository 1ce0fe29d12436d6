//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger service.

pub mod entry;
pub mod export;
pub mod history;
pub mod import;

pub use entry::{
    handle_add, handle_categories, handle_clear, handle_list, handle_remove, handle_summary,
    AddArgs, KindArg, ListArgs,
};
pub use export::{handle_export, ExportArgs, ExportFormat};
pub use history::handle_history;
pub use import::handle_import;
