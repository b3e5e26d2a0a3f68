//! Budget CLI commands

use clap::Subcommand;

use crate::error::SpendlogResult;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set or update the monthly limit for a category
    Set {
        /// Category name (case-sensitive)
        category: String,
        /// Limit amount, e.g. 1000.00
        amount: String,
    },

    /// Remove the limit for a category
    Delete {
        /// Category name
        category: String,
    },

    /// List all configured limits
    List,

    /// Check spending against every budgeted category
    Alerts,
}

/// Handle a budget command
pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> SpendlogResult<()> {
    match cmd {
        BudgetCommands::Set { category, amount } => {
            let limit = storage.budgets.set(&category, &amount)?;
            println!("Budget for {}: {}", category, limit);
        }

        BudgetCommands::Delete { category } => {
            if storage.budgets.delete(&category)? {
                println!("Removed budget for {}", category);
            } else {
                println!("No budget set for {}", category);
            }
        }

        BudgetCommands::List => {
            let budgets = storage.budgets.load()?;
            if budgets.is_empty() {
                println!("No budgets configured.");
            }
            for (category, limit) in &budgets {
                println!("{}: {}", category, limit);
            }
        }

        BudgetCommands::Alerts => {
            let expenses = storage.expenses.load_all()?;
            let alerts = storage.budgets.alerts(&expenses)?;

            if alerts.is_empty() {
                println!("All budgets within limits.");
            }
            for alert in &alerts {
                println!("{}", alert);
            }
        }
    }

    Ok(())
}
