//! Export command handler: writes a month's records as CSV.

use crate::args::ExportArgs;
use crate::commands::Out;
use crate::home::Home;
use crate::model::Record;
use crate::session::Session;
use crate::Result;
use anyhow::Context;
use serde::Serialize;
use std::io::Write;

// "Date","Description","Category","Amount"
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
struct CsvRow {
    date: String,
    description: String,
    category: String,
    amount: String,
}

impl From<&Record> for CsvRow {
    fn from(record: &Record) -> Self {
        Self {
            date: record.local_date().format("%Y-%m-%d").to_string(),
            description: record.description().to_string(),
            category: record.category().to_string(),
            amount: record.amount().value().to_string(),
        }
    }
}

/// Writes the selected month's records as CSV to a file, or to stdout when
/// no file is given. Returns the number of records written.
pub async fn export(home: &Home, args: ExportArgs) -> Result<Out<usize>> {
    let mut session = Session::open(home).await?;
    if let Some(month) = args.month() {
        session.select_month(month);
    }
    let rows: Vec<CsvRow> = session.visible().into_iter().map(CsvRow::from).collect();

    let writer: Box<dyn Write> = match args.out() {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("Unable to create file {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in &rows {
        csv_writer.serialize(row).context("Failed to write CSV row")?;
    }
    csv_writer.flush().context("Failed to flush CSV output")?;

    let destination = match args.out() {
        Some(path) => path.display().to_string(),
        None => "stdout".to_string(),
    };
    let count = rows.len();
    let message = format!(
        "Exported {count} record{} for {} to {destination}",
        if count == 1 { "" } else { "s" },
        session.month(),
    );
    Ok(Out::new(message, count))
}
