//! Expense CLI commands
//!
//! Add, list, edit, and remove expenses. Edits never mutate a stored row in
//! place: the edited expense is rebuilt as a new value, spliced into the
//! loaded collection at the same position, and the whole file is resaved.

use clap::Subcommand;

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Expense, Money};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Expense category
        category: String,
        /// Amount, e.g. 12.50
        amount: String,
        /// Expense date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-form description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// List all expenses
    List {
        /// Also show rows that were skipped as malformed
        #[arg(long)]
        show_skipped: bool,
    },

    /// Edit one expense by its list position
    Edit {
        /// 1-based position from `spendlog list`
        index: usize,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
    },

    /// Remove one expense by its list position
    Remove {
        /// 1-based position from `spendlog list`
        index: usize,
    },
}

/// Handle an expense command
pub fn handle_expense_command(storage: &Storage, cmd: ExpenseCommands) -> SpendlogResult<()> {
    match cmd {
        ExpenseCommands::Add {
            category,
            amount,
            date,
            description,
        } => {
            let date =
                date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
            let amount = Money::parse(&amount)?;
            let expense = Expense::new(&date, &category, amount, description)?;

            storage.expenses.append(&expense)?;
            println!("Recorded: {}", expense);
        }

        ExpenseCommands::List { show_skipped } => {
            let report = storage.expenses.load_report()?;

            if report.expenses.is_empty() {
                println!("No expenses recorded yet.");
            }
            for (i, expense) in report.expenses.iter().enumerate() {
                println!("{:>4}. {}", i + 1, expense);
            }

            if show_skipped && !report.skipped.is_empty() {
                println!();
                println!("Skipped rows:");
                for skipped in &report.skipped {
                    println!("  line {}: {:?}", skipped.line, skipped.reason);
                }
            }
        }

        ExpenseCommands::Edit {
            index,
            amount,
            category,
            date,
            description,
        } => {
            let mut expenses = storage.expenses.load_all()?;
            let position = resolve_index(index, expenses.len())?;

            let mut edited = expenses[position].clone();
            if let Some(amount) = amount {
                edited = edited.with_amount(Money::parse(&amount)?)?;
            }
            if let Some(category) = category {
                edited = edited.with_category(&category)?;
            }
            if let Some(date) = date {
                edited = edited.with_date(&date)?;
            }
            if let Some(description) = description {
                edited = edited.with_description(description);
            }

            expenses[position] = edited;
            storage.expenses.save_all(&expenses)?;
            println!("Updated: {}", expenses[position]);
        }

        ExpenseCommands::Remove { index } => {
            let mut expenses = storage.expenses.load_all()?;
            let position = resolve_index(index, expenses.len())?;

            let removed = expenses.remove(position);
            storage.expenses.save_all(&expenses)?;
            println!("Removed: {}", removed);
        }
    }

    Ok(())
}

/// Turn a 1-based CLI index into a checked 0-based position
fn resolve_index(index: usize, len: usize) -> SpendlogResult<usize> {
    if index == 0 || index > len {
        return Err(SpendlogError::Validation(format!(
            "No expense at position {} (have {})",
            index, len
        )));
    }
    Ok(index - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_index() {
        assert_eq!(resolve_index(1, 3).unwrap(), 0);
        assert_eq!(resolve_index(3, 3).unwrap(), 2);
        assert!(resolve_index(0, 3).is_err());
        assert!(resolve_index(4, 3).is_err());
        assert!(resolve_index(1, 0).is_err());
    }
}
