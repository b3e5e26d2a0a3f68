use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlog::cli::{
    handle_backup_command, handle_budget_command, handle_expense_command, handle_report_command,
    BackupCommands, BudgetCommands, ExpenseCommands, ReportCommands,
};
use spendlog::config::SpendlogPaths;
use spendlog::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "File-backed personal expense tracker with budgets and reports",
    long_about = "spendlog records expense transactions in a plain CSV file, \
                  aggregates them by category and month, compares spending \
                  against per-category budgets, and keeps timestamped backups \
                  of the expense file."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record and manage expenses
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Manage per-category budget limits
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Spending summaries and monthly reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Snapshot and restore the expense file
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Show where spendlog keeps its files
    Paths,
}

fn main() {
    // Core errors surface as a printed message and a nonzero exit,
    // never a panic.
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = SpendlogPaths::new()?;
    let storage = Storage::new(paths)?;

    match cli.command {
        Commands::Expense(cmd) => handle_expense_command(&storage, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&storage, cmd)?,
        Commands::Report(cmd) => handle_report_command(&storage, cmd)?,
        Commands::Backup(cmd) => handle_backup_command(&storage, cmd)?,
        Commands::Paths => {
            let paths = storage.paths();
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Expense file:     {}", paths.expenses_file().display());
            println!("Budget file:      {}", paths.budgets_file().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!("Report directory: {}", paths.reports_dir().display());
        }
    }

    Ok(())
}
