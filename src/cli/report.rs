//! CLI commands for reports
//!
//! Every report takes the same period and output options and can be printed
//! as text or written as JSON or CSV.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::config::settings::Settings;
use crate::error::{SipadiError, SipadiResult};
use crate::models::{ChartOfAccounts, DateRange};
use crate::reports::{
    BalanceSheet, FinancialReport, GeneralJournal, GeneralLedger, IncomeStatement, Summary,
};
use crate::storage::Storage;

use super::{require_session, resolve_range, today};

/// How a report is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Options shared by every report
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Start date (defaults to the first of this month)
    #[arg(short, long)]
    start: Option<String>,

    /// End date (defaults to today)
    #[arg(short, long)]
    end: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Income and expense totals
    Summary(ReportArgs),

    /// Journal lines in posting order
    #[command(alias = "general-journal")]
    Journal(ReportArgs),

    /// Per-account entries with running balances
    #[command(alias = "general-ledger")]
    Ledger(ReportArgs),

    /// Revenue, expenses and net income
    #[command(alias = "profit-loss")]
    IncomeStatement(ReportArgs),

    /// Assets, liabilities and equity
    BalanceSheet(ReportArgs),

    /// Every report above
    All(ReportArgs),
}

/// A generated report ready to be written
enum Generated {
    Summary(Summary),
    Journal(GeneralJournal),
    Ledger(GeneralLedger, DateRange),
    IncomeStatement(IncomeStatement),
    BalanceSheet(BalanceSheet),
    All(Box<FinancialReport>),
}

impl Generated {
    fn format_terminal(&self) -> String {
        match self {
            Self::Summary(r) => r.format_terminal(),
            Self::Journal(r) => r.format_terminal(),
            Self::Ledger(r, range) => r.format_terminal(range),
            Self::IncomeStatement(r) => r.format_terminal(),
            Self::BalanceSheet(r) => r.format_terminal(),
            Self::All(r) => r.format_terminal(),
        }
    }

    fn write_json<W: Write>(&self, writer: &mut W) -> serde_json::Result<()> {
        match self {
            Self::Summary(r) => serde_json::to_writer_pretty(writer, r),
            Self::Journal(r) => serde_json::to_writer_pretty(writer, r),
            Self::Ledger(r, _) => serde_json::to_writer_pretty(writer, r),
            Self::IncomeStatement(r) => serde_json::to_writer_pretty(writer, r),
            Self::BalanceSheet(r) => serde_json::to_writer_pretty(writer, r),
            Self::All(r) => serde_json::to_writer_pretty(writer, r),
        }
    }

    fn export_csv<W: Write>(&self, writer: &mut W) -> SipadiResult<()> {
        match self {
            Self::Summary(r) => r.export_csv(writer),
            Self::Journal(r) => r.export_csv(writer),
            Self::Ledger(r, _) => r.export_csv(writer),
            Self::IncomeStatement(r) => r.export_csv(writer),
            Self::BalanceSheet(r) => r.export_csv(writer),
            Self::All(r) => r.export_csv(writer),
        }
    }
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> SipadiResult<()> {
    let session = require_session(storage)?;
    let book = storage.book(&session.owner);
    let chart = ChartOfAccounts::standard();

    let args = match &cmd {
        ReportCommands::Summary(args)
        | ReportCommands::Journal(args)
        | ReportCommands::Ledger(args)
        | ReportCommands::IncomeStatement(args)
        | ReportCommands::BalanceSheet(args)
        | ReportCommands::All(args) => args.clone(),
    };
    let range = resolve_range(args.start.as_deref(), args.end.as_deref(), settings, today())?;

    let report = match cmd {
        ReportCommands::Summary(_) => Generated::Summary(Summary::generate(&book, range)?),
        ReportCommands::Journal(_) => Generated::Journal(GeneralJournal::generate(&book, range)?),
        ReportCommands::Ledger(_) => {
            Generated::Ledger(GeneralLedger::generate(&book, range, &chart)?, range)
        }
        ReportCommands::IncomeStatement(_) => {
            Generated::IncomeStatement(IncomeStatement::generate(&book, range, &chart)?)
        }
        ReportCommands::BalanceSheet(_) => {
            Generated::BalanceSheet(BalanceSheet::generate(&book, range, &chart)?)
        }
        ReportCommands::All(_) => {
            Generated::All(Box::new(FinancialReport::generate(&book, range, &chart)?))
        }
    };

    write_report(&report, args.format, args.output.as_ref())
}

fn write_report(
    report: &Generated,
    format: OutputFormat,
    output: Option<&PathBuf>,
) -> SipadiResult<()> {
    let mut writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                SipadiError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout().lock()),
    };

    let io_err = |e: std::io::Error| SipadiError::Export(e.to_string());

    match format {
        OutputFormat::Text => write!(writer, "{}", report.format_terminal()).map_err(io_err)?,
        OutputFormat::Json => {
            report
                .write_json(&mut writer)
                .map_err(|e| SipadiError::Export(e.to_string()))?;
            writeln!(writer).map_err(io_err)?;
        }
        OutputFormat::Csv => report.export_csv(&mut writer)?,
    }
    writer.flush().map_err(io_err)?;
    drop(writer);

    if let Some(path) = output {
        println!("Report written to: {}", path.display());
    }
    Ok(())
}
