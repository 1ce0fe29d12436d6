use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cashio::audit::AuditLogger;
use cashio::cli::{
    handle_add, handle_categories, handle_clear, handle_export, handle_history, handle_import,
    handle_list, handle_remove, handle_summary, AddArgs, ExportArgs, ListArgs,
};
use cashio::config::{CashioPaths, Settings};
use cashio::services::Ledger;
use cashio::storage::JsonFileStore;

/// Environment variable holding the log filter
const LOG_ENV: &str = "CASHIO_LOG";

#[derive(Parser)]
#[command(
    name = "cashio",
    version,
    about = "Personal cash-flow ledger",
    long_about = "CashIO records money coming in and going out, shows your balance \
                  and totals, and moves the ledger in and out as CSV or JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new entry
    Add(AddArgs),

    /// List entries, newest first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Remove an entry by id
    #[command(alias = "rm")]
    Remove {
        /// Entry id
        id: String,
    },

    /// Delete every entry
    Clear {
        /// Skip the confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Show balance and totals
    Summary,

    /// List known categories
    Categories,

    /// Export the ledger as CSV or JSON
    Export(ExportArgs),

    /// Replace the ledger with a JSON array of entries
    Import {
        /// JSON file, or "-" / nothing for stdin
        file: Option<String>,
    },

    /// Show recent changes to the ledger
    History {
        /// Number of records to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Write the current settings to config.json
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = CashioPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    paths.ensure_directories()?;
    tracing::debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    let mut ledger = Ledger::open(JsonFileStore::new(paths.ledger_file()))
        .with_audit(AuditLogger::new(paths.audit_log()));

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&mut ledger, &settings, args)?,
        Some(Commands::List(args)) => handle_list(&ledger, &settings, &args)?,
        Some(Commands::Remove { id }) => handle_remove(&mut ledger, &settings, &id)?,
        Some(Commands::Clear { force }) => handle_clear(&mut ledger, force)?,
        Some(Commands::Summary) => handle_summary(&ledger, &settings),
        Some(Commands::Categories) => handle_categories(&ledger),
        Some(Commands::Export(args)) => handle_export(&ledger, args)?,
        Some(Commands::Import { file }) => handle_import(&mut ledger, file.as_deref())?,
        Some(Commands::History { limit }) => {
            handle_history(&AuditLogger::new(paths.audit_log()), limit)?
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Initialized CashIO at: {}", paths.base_dir().display());
            println!("Settings written to {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("CashIO Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Thousands separator: {}", settings.thousands_separator);
            println!("  Log level:           {}", settings.log_level);
        }
        None => {
            handle_summary(&ledger, &settings);
            println!();
            println!("Run 'cashio --help' for usage information.");
        }
    }

    Ok(())
}
