//! Reporting CLI commands

use clap::Subcommand;

use crate::error::SpendlogResult;
use crate::reports::{
    budget_vs_actual, category_summary, monthly_report, monthly_summary, total_and_average,
};
use crate::storage::Storage;

/// Reporting subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Show total, average, and per-category spending
    Summary,

    /// Show spending per month
    Monthly,

    /// Write the report artifact for one month
    Month {
        /// Month key (YYYY-MM)
        month: String,
    },

    /// Show budgeted vs actual spending per category
    Budget,
}

/// Handle a reporting command
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> SpendlogResult<()> {
    let expenses = storage.expenses.load_all()?;

    match cmd {
        ReportCommands::Summary => {
            let (total, average) = total_and_average(&expenses);
            println!("Total:   {}", total);
            println!("Average: {}", average);
            println!();
            for (category, sum) in category_summary(&expenses) {
                println!("{}: {}", category, sum);
            }
        }

        ReportCommands::Monthly => {
            let summary = monthly_summary(&expenses);
            if summary.is_empty() {
                println!("No dated expenses yet.");
            }
            for (month, sum) in summary {
                println!("{}: {}", month, sum);
            }
        }

        ReportCommands::Month { month } => {
            let report = monthly_report(&expenses, &month)?;
            let path = report.save(&storage.paths().reports_dir())?;

            println!(
                "{}: {} expense(s), total {}, average {}",
                report.month,
                report.rows.len(),
                report.total,
                report.average
            );
            println!("Report written to {}", path.display());
        }

        ReportCommands::Budget => {
            let budgets = storage.budgets.load()?;
            let pairs = budget_vs_actual(&expenses, &budgets);
            if pairs.is_empty() {
                println!("Nothing budgeted or spent yet.");
            }
            for pair in pairs {
                println!(
                    "{}: budgeted {}, actual {}",
                    pair.category, pair.budgeted, pair.actual
                );
            }
        }
    }

    Ok(())
}
