//! Month-filtered aggregate views over a record collection.
//!
//! Everything here is pure: functions take records and compute derived
//! values without touching ledger state. For any input, the sum of the
//! daily totals, the sum of the category totals, and the plain total are
//! equal.

use crate::model::{Amount, Category, Record};
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A calendar month as a 0-11 index, interpreted in local time.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(transparent)]
pub struct Month(u32);

#[derive(Debug, thiserror::Error)]
#[error("month must be an index from 0 to 11, got '{0}'")]
pub struct MonthError(String);

impl Month {
    pub fn new(index: u32) -> Result<Self, MonthError> {
        if index <= 11 {
            Ok(Self(index))
        } else {
            Err(MonthError(index.to_string()))
        }
    }

    /// The current calendar month in local time.
    pub fn current() -> Self {
        Self(Local::now().month0())
    }

    pub fn index(self) -> u32 {
        self.0
    }

    pub fn name(self) -> &'static str {
        const NAMES: [&str; 12] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        NAMES[self.0 as usize]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Month {
    type Err = MonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let index: u32 = s.parse().map_err(|_| MonthError(s.to_string()))?;
        Month::new(index)
    }
}

/// Keeps the records whose timestamp's local calendar month equals `month`,
/// preserving relative order.
pub fn filter_by_month(records: &[Record], month: Month) -> Vec<&Record> {
    records
        .iter()
        .filter(|r| r.local_month() == month.index())
        .collect()
}

/// Sums the amounts; zero for an empty input.
pub fn total<'a, I>(records: I) -> Amount
where
    I: IntoIterator<Item = &'a Record>,
{
    records.into_iter().map(Record::amount).sum()
}

/// Groups by local calendar date, summing amounts per date. Entries are
/// ordered by the first occurrence of each date in the input, not by the
/// calendar.
pub fn daily_totals<'a, I>(records: I) -> Vec<(NaiveDate, Amount)>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut totals: Vec<(NaiveDate, Amount)> = Vec::new();
    for record in records {
        let date = record.local_date();
        match totals.iter_mut().find(|(d, _)| *d == date) {
            Some((_, amount)) => *amount += record.amount(),
            None => totals.push((date, record.amount())),
        }
    }
    totals
}

/// Sums amounts per category. Entries are ordered by first occurrence, which
/// fixes the matched label/value index order for chart binding.
pub fn category_totals<'a, I>(records: I) -> Vec<(Category, Amount)>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut totals: Vec<(Category, Amount)> = Vec::new();
    for record in records {
        match totals.iter_mut().find(|(c, _)| c == record.category()) {
            Some((_, amount)) => *amount += record.amount(),
            None => totals.push((record.category().clone(), record.amount())),
        }
    }
    totals
}

/// The three derived views for one month, computed together.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MonthSummary {
    month: Month,
    total: Amount,
    daily: Vec<(NaiveDate, Amount)>,
    categories: Vec<(Category, Amount)>,
}

impl MonthSummary {
    pub fn compute(records: &[Record], month: Month) -> Self {
        let filtered = filter_by_month(records, month);
        Self {
            month,
            total: total(filtered.iter().copied()),
            daily: daily_totals(filtered.iter().copied()),
            categories: category_totals(filtered.iter().copied()),
        }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn total(&self) -> Amount {
        self.total
    }

    /// `(date, amount)` pairs ordered by first occurrence.
    pub fn daily(&self) -> &[(NaiveDate, Amount)] {
        &self.daily
    }

    /// `(category, amount)` pairs ordered by first occurrence.
    pub fn categories(&self) -> &[(Category, Amount)] {
        &self.categories
    }

    /// Projects the category totals into parallel label/value arrays.
    pub fn chart_series(&self) -> ChartSeries {
        ChartSeries {
            labels: self.categories.iter().map(|(c, _)| c.to_string()).collect(),
            values: self.categories.iter().map(|(_, a)| *a).collect(),
        }
    }
}

/// Labels and values in matched index order, suitable for direct chart
/// binding.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ChartSeries {
    labels: Vec<String>,
    values: Vec<Amount>,
}

impl ChartSeries {
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[Amount] {
        &self.values
    }
}
