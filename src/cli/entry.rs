//! Entry CLI commands
//!
//! Implements adding, listing, removing and clearing ledger entries, plus the
//! summary and category views.

use chrono::NaiveDate;
use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::display::{format_categories, format_entry_line, format_entry_listing, format_summary};
use crate::error::{CashioError, CashioResult};
use crate::models::{today, EntryDraft, EntryId, EntryKind};
use crate::services::{EntryFilter, Ledger};
use crate::storage::PersistenceAdapter;

/// Entry type as typed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Cash in
    In,
    /// Cash out
    Out,
}

impl From<KindArg> for EntryKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::In => EntryKind::Inflow,
            KindArg::Out => EntryKind::Outflow,
        }
    }
}

/// Arguments of `cashio add`
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Entry type
    #[arg(value_enum)]
    pub kind: KindArg,
    /// Amount in whole Rupiah (e.g. "150000"); rounded to the nearest unit
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
    /// Category (defaults to "Umum")
    #[arg(short, long, default_value = "Umum")]
    pub category: String,
    /// Note
    #[arg(short, long, default_value = "")]
    pub note: String,
    /// Entry date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments of `cashio list`
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only entries of this type
    #[arg(short = 't', long = "type", value_enum)]
    pub kind: Option<KindArg>,
    /// Only entries in exactly this category
    #[arg(short, long)]
    pub category: Option<String>,
    /// Earliest date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,
    /// Latest date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
    /// Search category and note (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,
}

impl ListArgs {
    /// Build the entry filter these arguments describe
    pub fn to_filter(&self) -> CashioResult<EntryFilter> {
        let mut filter = EntryFilter::new();
        if let Some(kind) = self.kind {
            filter = filter.kind(kind.into());
        }
        if let Some(category) = &self.category {
            filter = filter.category(category.clone());
        }
        if let Some(from) = &self.from {
            filter = filter.from(parse_date(from)?);
        }
        if let Some(to) = &self.to {
            filter = filter.to(parse_date(to)?);
        }
        if let Some(search) = &self.search {
            filter = filter.text(search.clone());
        }
        Ok(filter)
    }
}

/// Handle `cashio add`
pub fn handle_add<S: PersistenceAdapter>(
    ledger: &mut Ledger<S>,
    settings: &Settings,
    args: AddArgs,
) -> CashioResult<()> {
    let amount = parse_amount(&args.amount)?;
    let date = match &args.date {
        Some(date) => parse_date(date)?,
        None => today(),
    };

    let draft = EntryDraft::new(args.kind.into(), amount, date)
        .category(args.category)
        .note(args.note);

    let entry = ledger.add(draft)?;
    println!("Added: {}", format_entry_line(&entry, settings));
    Ok(())
}

/// Handle `cashio list`
pub fn handle_list<S: PersistenceAdapter>(
    ledger: &Ledger<S>,
    settings: &Settings,
    args: &ListArgs,
) -> CashioResult<()> {
    let filter = args.to_filter()?;
    let entries = ledger.query(&filter);
    print!("{}", format_entry_listing(&entries, &ledger.summary(), settings));
    Ok(())
}

/// Handle `cashio remove`
pub fn handle_remove<S: PersistenceAdapter>(
    ledger: &mut Ledger<S>,
    settings: &Settings,
    id: &str,
) -> CashioResult<()> {
    match ledger.remove(&EntryId::from(id))? {
        Some(entry) => println!("Removed: {}", format_entry_line(&entry, settings)),
        None => println!("No entry with id '{}'; nothing removed.", id),
    }
    Ok(())
}

/// Handle `cashio clear`
pub fn handle_clear<S: PersistenceAdapter>(ledger: &mut Ledger<S>, force: bool) -> CashioResult<()> {
    if ledger.is_empty() {
        println!("Ledger is already empty.");
        return Ok(());
    }

    if !force {
        println!("About to delete all {} entries.", ledger.len());
        println!("This cannot be undone. Export first with 'cashio export' if unsure.");
        println!();
        println!("Use --force to confirm deletion");
        return Ok(());
    }

    let removed = ledger.clear()?;
    println!("Deleted {} entries.", removed);
    Ok(())
}

/// Handle `cashio summary`
pub fn handle_summary<S: PersistenceAdapter>(ledger: &Ledger<S>, settings: &Settings) {
    print!("{}", format_summary(&ledger.summary(), settings));
}

/// Handle `cashio categories`
pub fn handle_categories<S: PersistenceAdapter>(ledger: &Ledger<S>) {
    println!("Categories:");
    print!("{}", format_categories(&ledger.summary()));
}

/// Parse an amount typed by the user
pub fn parse_amount(input: &str) -> CashioResult<f64> {
    input.trim().parse::<f64>().map_err(|_| {
        CashioError::Validation(format!(
            "Invalid amount: '{}'. Use a number like '150000'",
            input
        ))
    })
}

/// Parse and normalize a `YYYY-MM-DD` date typed by the user
pub fn parse_date(input: &str) -> CashioResult<String> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| {
            CashioError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", input))
        })
}
