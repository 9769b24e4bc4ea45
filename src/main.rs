use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing::level_filters::LevelFilter;

use budget_manager::cli::{self, AddArgs, Menu};
use budget_manager::config::{init_logging, parse_log_level, BudgetPaths};
use budget_manager::storage::TransactionStore;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal budget manager",
    long_about = "Records income and expense transactions in data/transactions.csv \
                  and reports totals, spending by category, monthly statistics \
                  and monthly spending health. Run without a command for the \
                  interactive menu."
)]
struct Cli {
    /// Base directory holding data/transactions.csv (default: working directory)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace or off
    #[arg(long, global = true, default_value = "warn", value_parser = parse_log_level)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    #[command(alias = "ui")]
    Menu,

    /// Add a transaction without prompts
    Add(AddArgs),

    /// List all transactions
    #[command(alias = "ls")]
    List,

    /// Show spending by category
    Categories,

    /// Show total income, expenses and balance
    Summary,

    /// Show income, expenses and balance per month
    Monthly,

    /// Evaluate spending health per month
    Health,

    /// Show the resolved data file
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let paths = BudgetPaths::resolve(cli.data_dir)?;
    let store = TransactionStore::from_paths(&paths);
    store.ensure_initialized()?;
    debug!(path = %store.path().display(), "using data file");

    let today = Local::now().date_naive();

    let output = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            let mut menu = Menu::new(&store, stdin.lock(), io::stdout(), today);
            menu.run()?;
            return Ok(());
        }
        Commands::Add(args) => {
            let txn = args.into_transaction(today)?;
            cli::add_transaction(&store, &txn)?
        }
        Commands::List => cli::render_all(&store)?,
        Commands::Categories => cli::render_categories(&store)?,
        Commands::Summary => cli::render_summary(&store)?,
        Commands::Monthly => cli::render_monthly(&store)?,
        Commands::Health => cli::render_health(&store)?,
        Commands::Config => format!(
            "Budget Manager Configuration\n\
             ============================\n\
             Base directory: {}\n\
             Data directory: {}\n\
             Data file:      {}\n",
            paths.base_dir().display(),
            paths.data_dir().display(),
            store.path().display()
        ),
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
