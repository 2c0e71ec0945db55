//! Delete command handler.

use crate::args::DeleteArgs;
use crate::commands::Out;
use crate::home::Home;
use crate::session::Session;
use crate::summary::MonthSummary;
use crate::Result;
use anyhow::bail;

/// Deletes one record, by stable id or by its position in the selected
/// month's view.
///
/// A position is always resolved against the filtered view it was read
/// from, never against the raw ledger, so the record removed is the record
/// the user saw at that position.
pub async fn delete(home: &Home, args: DeleteArgs) -> Result<Out<MonthSummary>> {
    let mut session = Session::open(home).await?;
    if let Some(month) = args.month() {
        session.select_month(month);
    }

    let (removed, summary) = match (args.id(), args.position()) {
        (Some(id), _) => session.delete(id).await?,
        (None, Some(position)) => session.delete_visible(position).await?,
        (None, None) => bail!("Either --id or --position is required"),
    };

    let label = session.config().currency_label();
    let message = format!(
        "Deleted '{}': {} {} ({}). {} total is now {} {}",
        removed.description(),
        removed.amount(),
        label,
        removed.category(),
        summary.month(),
        summary.total(),
        label,
    );
    Ok(Out::new(message, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::args::AddArgs;
    use crate::model::Category;
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_delete_by_id() {
        let env = TestEnv::new().await;
        add(
            env.home(),
            AddArgs::new("Lunch", "1500".parse().unwrap(), Category::Food),
        )
        .await
        .unwrap();
        add(
            env.home(),
            AddArgs::new("Bus", "300".parse().unwrap(), Category::Transport),
        )
        .await
        .unwrap();

        let session = Session::open(env.home()).await.unwrap();
        let lunch_id = session.records()[0].id();

        let out = delete(env.home(), DeleteArgs::by_id(lunch_id)).await.unwrap();
        assert!(out.message().contains("Deleted 'Lunch'"));
        assert_eq!(out.structure().unwrap().total(), "300".parse().unwrap());

        let session = Session::open(env.home()).await.unwrap();
        assert_eq!(session.records().len(), 1);
        assert_eq!(session.records()[0].description(), "Bus");
    }

    #[tokio::test]
    async fn test_delete_by_position_in_current_month() {
        let env = TestEnv::new().await;
        add(
            env.home(),
            AddArgs::new("Lunch", "1500".parse().unwrap(), Category::Food),
        )
        .await
        .unwrap();
        add(
            env.home(),
            AddArgs::new("Bus", "300".parse().unwrap(), Category::Transport),
        )
        .await
        .unwrap();

        let out = delete(env.home(), DeleteArgs::by_position(1, None))
            .await
            .unwrap();
        assert!(out.message().contains("Deleted 'Bus'"));

        let session = Session::open(env.home()).await.unwrap();
        assert_eq!(session.records().len(), 1);
        assert_eq!(session.records()[0].description(), "Lunch");
    }

    #[tokio::test]
    async fn test_delete_unknown_id_errors() {
        let env = TestEnv::new().await;
        add(
            env.home(),
            AddArgs::new("Lunch", "1500".parse().unwrap(), Category::Food),
        )
        .await
        .unwrap();

        let unknown = crate::model::RecordId::default();
        let result = delete(env.home(), DeleteArgs::by_id(unknown)).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("No record found"));

        let session = Session::open(env.home()).await.unwrap();
        assert_eq!(session.records().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_position_out_of_range_errors() {
        let env = TestEnv::new().await;
        add(
            env.home(),
            AddArgs::new("Lunch", "1500".parse().unwrap(), Category::Food),
        )
        .await
        .unwrap();

        let result = delete(env.home(), DeleteArgs::by_position(5, None)).await;
        assert!(result.is_err());
    }
}
