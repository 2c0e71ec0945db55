//! These structs provide the CLI interface for the spendlog CLI.

use crate::model::{Amount, Category, RecordId};
use crate::summary::Month;
use clap::{ArgGroup, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// spendlog: A command-line expense ledger.
///
/// Record discrete expense entries (description, amount, category) and view
/// monthly summaries: a running total, a per-day breakdown and per-category
/// totals suitable for chart binding. Records are kept in a single JSON file
/// in the spendlog home directory.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Record a new expense entry, stamped with the current time.
    Add(AddArgs),
    /// Delete an entry by id, or by its position in a month's view.
    Delete(DeleteArgs),
    /// List the entries of a month, with their ids.
    List(ListArgs),
    /// Show a month's total, daily breakdown and category chart data.
    Summary(SummaryArgs),
    /// Write a month's entries as CSV to a file or stdout.
    Export(ExportArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where spendlog data is held. Defaults to ~/spendlog
    #[arg(long, env = "SPENDLOG_HOME", default_value_t = default_spendlog_home())]
    home: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, home: PathBuf) -> Self {
        Self {
            log_level,
            home: home.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn home(&self) -> &DisplayPath {
        &self.home
    }
}

/// Args for the `spendlog add` command.
#[derive(Debug, Parser, Clone)]
pub struct AddArgs {
    /// What the money was spent on. Must not be empty.
    description: String,

    /// The amount, e.g. 1500 or 49.99. Commas are accepted. A negative
    /// amount records a refund or credit.
    #[arg(allow_hyphen_values = true)]
    amount: Amount,

    /// The expense category. Names outside the usual set are kept as
    /// written.
    #[arg(long, default_value = "Food")]
    category: Category,
}

impl AddArgs {
    pub fn new(description: impl Into<String>, amount: Amount, category: Category) -> Self {
        Self {
            description: description.into(),
            amount,
            category,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn category(&self) -> &Category {
        &self.category
    }
}

/// Args for the `spendlog delete` command.
#[derive(Debug, Parser, Clone)]
#[command(group(ArgGroup::new("target").required(true).args(["id", "position"])))]
pub struct DeleteArgs {
    /// The id of the entry to delete, as shown by `list`.
    #[arg(long)]
    id: Option<RecordId>,

    /// The position of the entry within the month's view, 0-based, as shown
    /// by `list`.
    #[arg(long)]
    position: Option<usize>,

    /// The month (0-11) whose view --position refers to. Defaults to the
    /// current month.
    #[arg(long)]
    month: Option<Month>,
}

impl DeleteArgs {
    pub fn by_id(id: RecordId) -> Self {
        Self {
            id: Some(id),
            position: None,
            month: None,
        }
    }

    pub fn by_position(position: usize, month: Option<Month>) -> Self {
        Self {
            id: None,
            position: Some(position),
            month,
        }
    }

    pub fn id(&self) -> Option<RecordId> {
        self.id
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn month(&self) -> Option<Month> {
        self.month
    }
}

/// Args for the `spendlog list` command.
#[derive(Debug, Parser, Clone)]
pub struct ListArgs {
    /// The month to list (0-11). Defaults to the current month.
    #[arg(long)]
    month: Option<Month>,

    /// The output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl ListArgs {
    pub fn new(month: Option<Month>, format: OutputFormat) -> Self {
        Self { month, format }
    }

    pub fn month(&self) -> Option<Month> {
        self.month
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

/// Args for the `spendlog summary` command.
#[derive(Debug, Parser, Clone)]
pub struct SummaryArgs {
    /// The month to summarize (0-11). Defaults to the current month.
    #[arg(long)]
    month: Option<Month>,

    /// The output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl SummaryArgs {
    pub fn new(month: Option<Month>, format: OutputFormat) -> Self {
        Self { month, format }
    }

    pub fn month(&self) -> Option<Month> {
        self.month
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

/// Args for the `spendlog export` command.
#[derive(Debug, Parser, Clone)]
pub struct ExportArgs {
    /// The month to export (0-11). Defaults to the current month.
    #[arg(long)]
    month: Option<Month>,

    /// The file to write. Writes to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

impl ExportArgs {
    pub fn new(month: Option<Month>, out: Option<PathBuf>) -> Self {
        Self { month, out }
    }

    pub fn month(&self) -> Option<Month> {
        self.month
    }

    pub fn out(&self) -> Option<&Path> {
        self.out.as_deref()
    }
}

/// How command output is rendered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

serde_plain::derive_display_from_serialize!(OutputFormat);
serde_plain::derive_fromstr_from_deserialize!(OutputFormat);

fn default_spendlog_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("spendlog"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --home or SPENDLOG_HOME instead of relying on the default \
                spendlog home directory. If you continue using the program right now, you may \
                have problems!",
            );
            PathBuf::from("spendlog")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}
