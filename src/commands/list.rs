//! List command handler.

use crate::args::{ListArgs, OutputFormat};
use crate::commands::Out;
use crate::home::Home;
use crate::model::Record;
use crate::session::Session;
use crate::summary::Month;
use crate::Result;
use anyhow::Context;
use chrono::Local;

/// Lists the records of the selected month with their positions and ids,
/// which `delete` accepts as targets.
pub async fn list(home: &Home, args: ListArgs) -> Result<Out<Vec<Record>>> {
    let mut session = Session::open(home).await?;
    if let Some(month) = args.month() {
        session.select_month(month);
    }
    let visible: Vec<Record> = session.visible().into_iter().cloned().collect();

    let message = match args.format() {
        OutputFormat::Json => serde_json::to_string_pretty(&visible)
            .context("Failed to render records as JSON")?,
        OutputFormat::Table => {
            render_table(&visible, session.month(), session.config().currency_label())
        }
    };
    Ok(Out::new(message, visible))
}

fn render_table(records: &[Record], month: Month, label: &str) -> String {
    if records.is_empty() {
        return format!("No records in {month}");
    }
    let count = records.len();
    let mut lines = vec![format!(
        "{count} record{} in {month}:",
        if count == 1 { "" } else { "s" }
    )];
    for (position, record) in records.iter().enumerate() {
        lines.push(format!(
            "{position:>3}  {}  {}: {} {label} ({})  [{}]",
            record
                .timestamp()
                .with_timezone(&Local)
                .format("%m/%d/%Y %H:%M"),
            record.description(),
            record.amount(),
            record.category(),
            record.id(),
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::AddArgs;
    use crate::commands::add;
    use crate::model::{Amount, Category};
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_list_current_month() {
        let env = TestEnv::new().await;
        add(
            env.home(),
            AddArgs::new("Lunch", "1500".parse().unwrap(), Category::Food),
        )
        .await
        .unwrap();

        let out = list(env.home(), ListArgs::new(None, OutputFormat::Table))
            .await
            .unwrap();
        assert!(out.message().contains("1 record in"));
        assert!(out.message().contains("Lunch: 1,500.00"));
        assert_eq!(out.structure().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_empty_month() {
        let env = TestEnv::new().await;
        let out = list(env.home(), ListArgs::new(None, OutputFormat::Table))
            .await
            .unwrap();
        assert!(out.message().starts_with("No records in"));
        assert!(out.structure().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_json_format() {
        let env = TestEnv::new().await;
        add(
            env.home(),
            AddArgs::new("Lunch", "1500".parse().unwrap(), Category::Food),
        )
        .await
        .unwrap();

        let out = list(env.home(), ListArgs::new(None, OutputFormat::Json))
            .await
            .unwrap();
        let parsed: Vec<Record> = serde_json::from_str(out.message()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].amount(), "1500".parse::<Amount>().unwrap());
    }
}
