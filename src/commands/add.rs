//! Add command handler.

use crate::args::AddArgs;
use crate::commands::Out;
use crate::home::Home;
use crate::session::Session;
use crate::summary::MonthSummary;
use crate::Result;

/// Records a new expense entry, then reports the updated aggregates for the
/// current month.
///
/// An empty description is a validation rejection: nothing is recorded,
/// nothing is persisted, and the command succeeds with a message telling the
/// user to try again.
pub async fn add(home: &Home, args: AddArgs) -> Result<Out<MonthSummary>> {
    let mut session = Session::open(home).await?;
    let label = session.config().currency_label().to_string();
    match session
        .add(args.description(), args.amount(), args.category().clone())
        .await?
    {
        Some(summary) => {
            let message = format!(
                "Added '{}': {} {} ({}). {} total is now {} {}",
                args.description(),
                args.amount(),
                label,
                args.category(),
                summary.month(),
                summary.total(),
                label,
            );
            Ok(Out::new(message, summary))
        }
        None => Ok(Out::new_message(
            "Nothing added: the description must not be empty",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::session::Session;
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_add_success() {
        let env = TestEnv::new().await;
        let args = AddArgs::new("Lunch", "1500".parse().unwrap(), Category::Food);

        let out = add(env.home(), args).await.unwrap();
        assert!(out.message().contains("Added 'Lunch'"));
        assert_eq!(out.structure().unwrap().total(), "1500".parse().unwrap());

        let session = Session::open(env.home()).await.unwrap();
        assert_eq!(session.records().len(), 1);
        assert_eq!(session.records()[0].description(), "Lunch");
    }

    #[tokio::test]
    async fn test_add_empty_description_rejected() {
        let env = TestEnv::new().await;
        let args = AddArgs::new("", "1500".parse().unwrap(), Category::Food);

        let out = add(env.home(), args).await.unwrap();
        assert!(out.message().contains("Nothing added"));
        assert!(out.structure().is_none());

        let session = Session::open(env.home()).await.unwrap();
        assert!(session.records().is_empty());
    }

    #[tokio::test]
    async fn test_add_other_category_kept_verbatim() {
        let env = TestEnv::new().await;
        let args = AddArgs::new("Vet visit", "90".parse().unwrap(), Category::from("Pets"));

        add(env.home(), args).await.unwrap();
        let session = Session::open(env.home()).await.unwrap();
        assert_eq!(session.records()[0].category().as_str(), "Pets");
    }
}
