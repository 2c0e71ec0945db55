//! The session object: one loaded ledger plus the active month filter.
//!
//! Holding both here, instead of at module scope, is what lets multiple
//! independent ledgers coexist and keeps tests hermetic. Mutations return
//! freshly computed aggregates so a front end never reaches back into the
//! data layer to re-render.

use crate::config::Config;
use crate::home::Home;
use crate::ledger::Ledger;
use crate::model::{Amount, Category, Record, RecordId};
use crate::store::Store;
use crate::summary::{filter_by_month, Month, MonthSummary};
use crate::Result;
use anyhow::bail;

#[derive(Debug)]
pub struct Session {
    config: Config,
    ledger: Ledger,
    month: Month,
}

impl Session {
    /// Opens a session against a home directory: loads configuration and
    /// ledger, with the active filter set to the current local month.
    pub async fn open(home: &Home) -> Result<Self> {
        let config = Config::load_or_create(home).await?;
        let ledger = Ledger::load(Store::new(home)).await?;
        Ok(Self {
            config,
            ledger,
            month: Month::current(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn month(&self) -> Month {
        self.month
    }

    /// Sets the active month filter for subsequent queries and view-relative
    /// deletions.
    pub fn select_month(&mut self, month: Month) {
        self.month = month;
    }

    /// The full record sequence, unfiltered.
    pub fn records(&self) -> &[Record] {
        self.ledger.records()
    }

    /// The active month's filtered view, in ledger order.
    pub fn visible(&self) -> Vec<&Record> {
        filter_by_month(self.ledger.records(), self.month)
    }

    /// Aggregates for the active month.
    pub fn summary(&self) -> MonthSummary {
        MonthSummary::compute(self.ledger.records(), self.month)
    }

    /// Adds a record. `Ok(None)` means the input was rejected and nothing
    /// changed; on success the recomputed aggregates for the active month
    /// are returned.
    pub async fn add(
        &mut self,
        description: &str,
        amount: Amount,
        category: Category,
    ) -> Result<Option<MonthSummary>> {
        match self.ledger.add(description, amount, category).await? {
            Some(_) => Ok(Some(self.summary())),
            None => Ok(None),
        }
    }

    /// Deletes a record by its stable id.
    pub async fn delete(&mut self, id: RecordId) -> Result<(Record, MonthSummary)> {
        let record = self.ledger.remove(id).await?;
        Ok((record, self.summary()))
    }

    /// Deletes the record at `position` in the active month's filtered view.
    ///
    /// The position is resolved to the record's id before removal, so a
    /// filter that hides part of the ledger can never redirect the deletion
    /// to a different record.
    pub async fn delete_visible(&mut self, position: usize) -> Result<(Record, MonthSummary)> {
        let id = {
            let visible = self.visible();
            match visible.get(position) {
                Some(record) => record.id(),
                None => bail!(
                    "No record at position {position} in the {} view ({} visible)",
                    self.month,
                    visible.len()
                ),
            }
        };
        self.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestEnv;
    use chrono::{TimeZone, Utc};

    fn march_and_july() -> Vec<Record> {
        vec![
            Record::with_timestamp(
                "Lunch",
                "1500".parse().unwrap(),
                Category::Food,
                Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap(),
            ),
            Record::with_timestamp(
                "Cinema",
                "1200".parse().unwrap(),
                Category::Entertainment,
                Utc.with_ymd_and_hms(2026, 7, 15, 12, 0, 0).unwrap(),
            ),
            Record::with_timestamp(
                "Bus",
                "300".parse().unwrap(),
                Category::Transport,
                Utc.with_ymd_and_hms(2026, 3, 16, 12, 0, 0).unwrap(),
            ),
        ]
    }

    #[tokio::test]
    async fn test_visible_follows_selected_month() {
        let env = TestEnv::new().await;
        let records = march_and_july();
        env.seed(&records).await;
        let mut session = Session::open(env.home()).await.unwrap();

        let march = Month::new(records[0].local_month()).unwrap();
        session.select_month(march);
        let names: Vec<&str> = session.visible().iter().map(|r| r.description()).collect();
        assert_eq!(names, vec!["Lunch", "Bus"]);

        let july = Month::new(records[1].local_month()).unwrap();
        session.select_month(july);
        let names: Vec<&str> = session.visible().iter().map(|r| r.description()).collect();
        assert_eq!(names, vec!["Cinema"]);
    }

    // Regression for deletion across a filtered view: with a month selected,
    // deleting display position 0 must remove the record actually shown
    // there, not whatever sits at raw position 0 of the full ledger.
    #[tokio::test]
    async fn test_delete_visible_removes_the_record_shown() {
        let env = TestEnv::new().await;
        let records = march_and_july();
        env.seed(&records).await;
        let mut session = Session::open(env.home()).await.unwrap();

        let july = Month::new(records[1].local_month()).unwrap();
        session.select_month(july);
        // Position 0 of July's view is "Cinema"; raw position 0 is "Lunch".
        let (removed, summary) = session.delete_visible(0).await.unwrap();
        assert_eq!(removed.description(), "Cinema");
        assert_eq!(summary.total(), Amount::ZERO);

        let remaining: Vec<&str> = session.records().iter().map(|r| r.description()).collect();
        assert_eq!(remaining, vec!["Lunch", "Bus"]);
    }

    #[tokio::test]
    async fn test_delete_visible_out_of_range() {
        let env = TestEnv::new().await;
        let records = march_and_july();
        env.seed(&records).await;
        let mut session = Session::open(env.home()).await.unwrap();

        let july = Month::new(records[1].local_month()).unwrap();
        session.select_month(july);
        assert!(session.delete_visible(1).await.is_err());
        assert_eq!(session.records().len(), 3);
    }

    #[tokio::test]
    async fn test_month_with_no_records_is_all_empty() {
        let env = TestEnv::new().await;
        let records = march_and_july();
        env.seed(&records).await;
        let mut session = Session::open(env.home()).await.unwrap();

        let used: Vec<u32> = records.iter().map(|r| r.local_month()).collect();
        let empty_month = (0..12)
            .map(|i| Month::new(i).unwrap())
            .find(|m| !used.contains(&m.index()))
            .unwrap();
        session.select_month(empty_month);

        let summary = session.summary();
        assert_eq!(summary.total(), Amount::ZERO);
        assert!(summary.daily().is_empty());
        assert!(summary.categories().is_empty());
        assert!(session.visible().is_empty());
    }

    // The end-to-end scenario: add two records in the current month, check
    // the aggregates after each step, then delete the first and verify both
    // memory and the persisted slot.
    #[tokio::test]
    async fn test_add_and_delete_scenario() {
        let env = TestEnv::new().await;
        let mut session = Session::open(env.home()).await.unwrap();

        let summary = session
            .add("Lunch", "1500".parse().unwrap(), Category::Food)
            .await
            .unwrap()
            .expect("valid record");
        assert_eq!(summary.total(), "1500".parse().unwrap());

        let summary = session
            .add("Bus", "300".parse().unwrap(), Category::Transport)
            .await
            .unwrap()
            .expect("valid record");
        assert_eq!(summary.total(), "1800".parse().unwrap());
        assert_eq!(
            summary.categories(),
            &[
                (Category::Food, "1500".parse().unwrap()),
                (Category::Transport, "300".parse().unwrap()),
            ]
        );

        let (removed, summary) = session.delete_visible(0).await.unwrap();
        assert_eq!(removed.description(), "Lunch");
        assert_eq!(summary.total(), "300".parse().unwrap());

        // Only the Bus record survives in the persisted collection.
        let reopened = Session::open(env.home()).await.unwrap();
        let names: Vec<&str> = reopened.records().iter().map(|r| r.description()).collect();
        assert_eq!(names, vec!["Bus"]);
    }

    #[tokio::test]
    async fn test_rejected_add_returns_none_and_changes_nothing() {
        let env = TestEnv::new().await;
        let mut session = Session::open(env.home()).await.unwrap();

        let outcome = session
            .add("", "1500".parse().unwrap(), Category::Food)
            .await
            .unwrap();
        assert!(outcome.is_none());
        assert!(session.records().is_empty());

        let reopened = Session::open(env.home()).await.unwrap();
        assert!(reopened.records().is_empty());
    }
}
