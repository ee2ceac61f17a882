//! Chart CLI command

use crate::config::Settings;
use crate::display::{render_bar, render_line, render_pie, ChartKind};
use crate::error::LedgerResult;
use crate::reports::SpendingReport;
use crate::services::LedgerService;
use crate::storage::Storage;

use super::report_skipped;

/// Draw the requested chart to stdout
pub fn handle_chart_command(
    storage: &Storage,
    settings: &Settings,
    kind: ChartKind,
) -> LedgerResult<()> {
    let service = LedgerService::new(storage);
    let width = settings.chart_width.max(1);

    let output = match kind {
        ChartKind::Pie => render_pie(&spending(&service)?, width),
        ChartKind::Bar => render_bar(&spending(&service)?, width),
        ChartKind::Line => {
            let series = service.cashflow_series()?;
            report_skipped(&series.skipped);
            render_line(&series.value, width)
        }
    };
    println!("{}", output);

    Ok(())
}

fn spending(service: &LedgerService<'_>) -> LedgerResult<SpendingReport> {
    let report = service.summarise_expenses()?;
    report_skipped(&report.skipped);
    Ok(report.value)
}
