use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sipadi::cli::{
    handle_expense_command, handle_income_command, handle_login, handle_logout, handle_register,
    handle_report_command, handle_whoami, require_session,
};
use sipadi::config::{paths::SipadiPaths, settings::Settings};
use sipadi::reports::Dashboard;
use sipadi::services::TransactionService;
use sipadi::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "sipadi",
    version,
    about = "Double-entry bookkeeping for rice farmers",
    long_about = "SiPadi records a rice farm's income and expenses, posts each one \
                  to a double-entry journal, and produces the journal, ledger, \
                  income statement and balance sheet from the terminal."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,

    /// Create a user
    Register {
        username: String,
        /// Password (prompted for when omitted)
        #[arg(long, env = "SIPADI_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Log in and start a session
    Login {
        username: String,
        /// Password (prompted for when omitted)
        #[arg(long, env = "SIPADI_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// End the current session
    Logout,

    /// Show who is logged in
    Whoami,

    /// All-time totals for the logged-in user
    #[command(alias = "dashboard")]
    Home,

    /// Income commands
    #[command(subcommand, alias = "in")]
    Income(sipadi::cli::IncomeCommands),

    /// Expense commands
    #[command(subcommand, alias = "out")]
    Expense(sipadi::cli::ExpenseCommands),

    /// Financial reports
    #[command(subcommand)]
    Report(sipadi::cli::ReportCommands),

    /// Post journal entries for transactions that are missing them
    Repair,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SipadiPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("SIPADI_LOG")
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .init();

    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing SiPadi at: {}", paths.base_dir().display());
            if initialize_storage(&paths)? {
                println!("Default settings written to {}", paths.settings_file().display());
            } else {
                println!("Already initialized.");
            }
            println!();
            println!("Run 'sipadi register <username>' to create a user.");
        }
        Some(Commands::Config) => {
            println!("SiPadi Configuration");
            println!("====================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Users file:      {}", paths.users_file().display());
            println!();
            println!("Settings:");
            println!("  Date format:     {}", settings.date_format);
            println!("  Default range:   {:?}", settings.default_range);
            println!("  Log filter:      {}", settings.log_filter);
        }
        Some(Commands::Register { username, password }) => {
            handle_register(&storage, &username, password)?;
        }
        Some(Commands::Login { username, password }) => {
            handle_login(&storage, &username, password)?;
        }
        Some(Commands::Logout) => handle_logout(&storage)?,
        Some(Commands::Whoami) => handle_whoami(&storage)?,
        Some(Commands::Home) => {
            let session = require_session(&storage)?;
            let dashboard = Dashboard::generate(&storage.book(&session.owner))?;
            print!("{}", dashboard.format_terminal());
        }
        Some(Commands::Income(cmd)) => {
            handle_income_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Repair) => {
            let session = require_session(&storage)?;
            let summary = TransactionService::new(&storage, &session).replay_missing_journal()?;
            if summary.replayed == 0 && summary.skipped == 0 {
                println!("Journal is complete. Nothing to repair.");
            } else {
                println!("Posted journal entries for {} transaction(s).", summary.replayed);
                if summary.skipped > 0 {
                    println!(
                        "Skipped {} transaction(s) with an unreadable date.",
                        summary.skipped
                    );
                }
            }
        }
        None => {
            println!("SiPadi - Double-entry bookkeeping for rice farmers");
            println!();
            println!("Run 'sipadi --help' for usage information.");
        }
    }

    Ok(())
}
