//! Cumulative income vs expenses over time
//!
//! Buckets both record sets by calendar day, then walks every day from the
//! earliest to the latest date seen in either set, carrying running totals.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::{AmountOverflow, Money, Posting};

/// Running totals at the end of one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub cumulative_expense: Money,
    pub cumulative_income: Money,
}

/// Build the gap-filled cumulative series for two sets of postings
///
/// Time-of-day is ignored. Returns one point per day in ascending order, or
/// an empty series when both sets are empty.
pub fn cumulative_series<E, I>(expenses: E, income: I) -> Result<Vec<SeriesPoint>, AmountOverflow>
where
    E: IntoIterator<Item = Posting>,
    I: IntoIterator<Item = Posting>,
{
    let expense_days = daily_totals(expenses)?;
    let income_days = daily_totals(income)?;

    let first = [expense_days.keys().next(), income_days.keys().next()]
        .into_iter()
        .flatten()
        .min()
        .copied();
    let last = [expense_days.keys().next_back(), income_days.keys().next_back()]
        .into_iter()
        .flatten()
        .max()
        .copied();

    let (Some(first), Some(last)) = (first, last) else {
        return Ok(Vec::new());
    };

    let mut running_expense = Money::zero();
    let mut running_income = Money::zero();
    let mut series = Vec::new();

    for day in first.iter_days().take_while(|day| *day <= last) {
        let spent = expense_days.get(&day).copied().unwrap_or_default();
        let earned = income_days.get(&day).copied().unwrap_or_default();
        running_expense = running_expense.checked_add(spent).ok_or(AmountOverflow)?;
        running_income = running_income.checked_add(earned).ok_or(AmountOverflow)?;
        series.push(SeriesPoint {
            date: day,
            cumulative_expense: running_expense,
            cumulative_income: running_income,
        });
    }

    Ok(series)
}

fn daily_totals<P>(postings: P) -> Result<BTreeMap<NaiveDate, Money>, AmountOverflow>
where
    P: IntoIterator<Item = Posting>,
{
    let mut days = BTreeMap::new();
    for posting in postings {
        let total = days
            .entry(posting.timestamp.date())
            .or_insert_with(Money::zero);
        *total = total.checked_add(posting.amount).ok_or(AmountOverflow)?;
    }
    Ok(days)
}

/// Format the series for terminal display
pub fn format_series(series: &[SeriesPoint]) -> String {
    if series.is_empty() {
        return "No income or expenses to plot.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:>16} {:>16}\n",
        "Date", "Expenses", "Income"
    ));
    output.push_str(&"-".repeat(46));
    output.push('\n');

    for point in series {
        output.push_str(&format!(
            "{:<12} {:>16} {:>16}\n",
            point.date.format("%Y-%m-%d").to_string(),
            point.cumulative_expense.to_string(),
            point.cumulative_income.to_string()
        ));
    }

    output
}
