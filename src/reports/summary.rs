//! Aggregate views over the expense collection
//!
//! Pure, stateless functions. Every call recomputes from the full slice;
//! nothing is cached or incrementally maintained. These are also the
//! read-only data contract handed to an external chart renderer.

use std::collections::BTreeMap;

use crate::models::{Expense, Money};

/// Sum and average of all amounts
///
/// The average is rounded to whole cents. Both values are zero for an
/// empty slice.
pub fn total_and_average(expenses: &[Expense]) -> (Money, Money) {
    let total: Money = expenses.iter().map(|e| e.amount).sum();
    let average = if expenses.is_empty() {
        Money::zero()
    } else {
        Money::from_cents((total.cents() as f64 / expenses.len() as f64).round() as i64)
    };
    (total, average)
}

/// Sum of amounts grouped by exact category name (case-sensitive)
///
/// Only categories present in the input appear in the output.
pub fn category_summary(expenses: &[Expense]) -> BTreeMap<String, Money> {
    let mut summary: BTreeMap<String, Money> = BTreeMap::new();
    for expense in expenses {
        *summary
            .entry(expense.category.clone())
            .or_insert_with(Money::zero) += expense.amount;
    }
    summary
}

/// Sum of amounts grouped by "YYYY-MM" month key
///
/// Expenses whose stored date does not parse as a calendar date are
/// silently excluded from this aggregate only.
pub fn monthly_summary(expenses: &[Expense]) -> BTreeMap<String, Money> {
    let mut summary: BTreeMap<String, Money> = BTreeMap::new();
    for expense in expenses {
        if let Some(month) = expense.month_key() {
            *summary.entry(month).or_insert_with(Money::zero) += expense.amount;
        }
    }
    summary
}

/// Budgeted limit and actual spend for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetVsActual {
    pub category: String,
    pub budgeted: Money,
    pub actual: Money,
}

/// Pair every budgeted or spent category with its limit and actual spend
///
/// Covers the sorted union of categories from both inputs; a category
/// missing from one side contributes zero there.
pub fn budget_vs_actual(
    expenses: &[Expense],
    budgets: &BTreeMap<String, Money>,
) -> Vec<BudgetVsActual> {
    let actuals = category_summary(expenses);

    let mut categories: Vec<&String> = budgets.keys().chain(actuals.keys()).collect();
    categories.sort();
    categories.dedup();

    categories
        .into_iter()
        .map(|category| BudgetVsActual {
            category: category.clone(),
            budgeted: budgets.get(category).copied().unwrap_or_else(Money::zero),
            actual: actuals.get(category).copied().unwrap_or_else(Money::zero),
        })
        .collect()
}
