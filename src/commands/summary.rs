//! Summary command handler.

use crate::args::{OutputFormat, SummaryArgs};
use crate::commands::Out;
use crate::home::Home;
use crate::session::Session;
use crate::summary::MonthSummary;
use crate::Result;
use anyhow::Context;

/// Shows the selected month's aggregates: the running total, the per-day
/// breakdown, and the per-category totals that drive the chart.
pub async fn summary(home: &Home, args: SummaryArgs) -> Result<Out<MonthSummary>> {
    let mut session = Session::open(home).await?;
    if let Some(month) = args.month() {
        session.select_month(month);
    }
    let summary = session.summary();

    let message = match args.format() {
        OutputFormat::Json => serde_json::to_string_pretty(&summary)
            .context("Failed to render summary as JSON")?,
        OutputFormat::Table => render(&summary, session.config().currency_label()),
    };
    Ok(Out::new(message, summary))
}

fn render(summary: &MonthSummary, label: &str) -> String {
    let mut lines = vec![format!(
        "Total for {}: {} {label}",
        summary.month(),
        summary.total()
    )];
    if !summary.daily().is_empty() {
        lines.push("Daily usage:".to_string());
        for (date, amount) in summary.daily() {
            lines.push(format!("  {}: {amount} {label}", date.format("%m/%d/%Y")));
        }
        lines.push("By category:".to_string());
        for (category, amount) in summary.categories() {
            lines.push(format!("  {category}: {amount} {label}"));
        }
    }
    lines.join("\n")
}
