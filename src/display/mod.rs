//! Display formatting for terminal output

pub mod entry;
pub mod summary;

pub use entry::{format_entry_line, format_entry_listing, format_entry_table};
pub use summary::{format_categories, format_summary};

use crate::config::Settings;
use crate::models::Money;

/// Format an amount with the user's currency settings
pub fn format_money(amount: Money, settings: &Settings) -> String {
    amount.format_with(&settings.currency_symbol, &settings.thousands_separator)
}
