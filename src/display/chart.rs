//! Text charts for terminal output
//!
//! Pie and bar charts over category totals, and a line chart over the
//! cumulative income-vs-expense series, drawn with block characters.

use crate::models::Money;
use crate::reports::{SeriesPoint, SpendingReport};

/// Chart types offered by the `chart` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ChartKind {
    /// Expenses by category, as a share of the total
    Pie,
    /// Expenses by category, in pounds
    Bar,
    /// Cumulative income vs expenses over time
    Line,
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn label_width(report: &SpendingReport) -> usize {
    report
        .rows()
        .iter()
        .map(|row| row.category.name().chars().count())
        .max()
        .unwrap_or(8)
        .max(8)
}

/// Share of total spending per category
pub fn render_pie(report: &SpendingReport, width: usize) -> String {
    if report.is_empty() {
        return "No expenses to plot.".to_string();
    }

    let name_width = label_width(report);
    let mut output = String::from("Expenses by Category (%)\n");
    for row in report.rows() {
        let pct = report.percentage(row);
        output.push_str(&format!(
            "{:<name_width$}  {}  {:>6}\n",
            row.category.name(),
            format_bar(pct, 100.0, width),
            format_percentage(pct),
            name_width = name_width,
        ));
    }
    output
}

/// Total spent per category, scaled to the largest category
pub fn render_bar(report: &SpendingReport, width: usize) -> String {
    if report.is_empty() {
        return "No expenses to plot.".to_string();
    }

    let name_width = label_width(report);
    let max = report
        .rows()
        .iter()
        .map(|row| row.total)
        .max()
        .unwrap_or_default()
        .as_f64();

    let mut output = String::from("Expenses by Category (£)\n");
    for row in report.rows() {
        output.push_str(&format!(
            "{:<name_width$}  {}  {:>14}\n",
            row.category.name(),
            format_bar(row.total.as_f64(), max, width),
            row.total.to_string(),
            name_width = name_width,
        ));
    }
    output
}

/// Running expense and income totals per day
pub fn render_line(series: &[SeriesPoint], width: usize) -> String {
    let Some(last) = series.last() else {
        return "No income or expenses to plot.".to_string();
    };

    let max: Money = last.cumulative_expense.max(last.cumulative_income);
    let max = max.as_f64();
    let half = (width / 2).max(1);

    let mut output = String::from("Income vs Expenses Over Time\n");
    output.push_str(&format!(
        "{:<10}  {:<half$}  {:<half$}  {:>14}  {:>14}\n",
        "Date",
        "Expenses",
        "Income",
        "Expenses",
        "Income",
        half = half,
    ));
    for point in series {
        output.push_str(&format!(
            "{}  {}  {}  {:>14}  {:>14}\n",
            point.date.format("%Y-%m-%d"),
            format_bar(point.cumulative_expense.as_f64(), max, half),
            format_bar(point.cumulative_income.as_f64(), max, half),
            point.cumulative_expense.to_string(),
            point.cumulative_income.to_string(),
        ));
    }
    output
}
