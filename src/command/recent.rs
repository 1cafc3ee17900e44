//! Recent action: collect pull requests merged within a time window.
use log::*;
use std::path::PathBuf;

use crate::{
    collector, command::common, forge::traits::Forge, result::Result,
};

/// Parameters for the recent action.
#[derive(Debug, Clone)]
pub struct RecentRequest {
    pub branch: Option<String>,
    pub hours: f64,
    pub output: Option<PathBuf>,
}

pub async fn execute(forge: &dyn Forge, req: RecentRequest) -> Result<()> {
    info!(
        "collecting pull requests merged within the last {} hours",
        req.hours
    );

    let notes =
        collector::recent::collect(forge, req.branch.clone(), req.hours)
            .await?;

    common::write_notes(&notes, req.output.as_deref()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forge::{traits::MockForge, types::PullRecord};
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn writes_collected_notes_to_output_file() {
        let mut mock = MockForge::new();

        mock.expect_list_closed_pull_requests()
            .withf(|req| req.page == 1)
            .returning(|_| {
                Ok(vec![PullRecord {
                    number: 5,
                    title: "fix flaky pagination".to_string(),
                    merged_at: Some(Utc::now() - Duration::hours(1)),
                }])
            });

        mock.expect_list_closed_pull_requests()
            .withf(|req| req.page == 2)
            .returning(|_| Ok(vec![]));

        let temp_dir = tempfile::tempdir().unwrap();
        let out_file = temp_dir.path().join("notes.txt");

        let req = RecentRequest {
            branch: None,
            hours: 6.0,
            output: Some(out_file.clone()),
        };

        execute(&mock, req).await.unwrap();

        let content = tokio::fs::read_to_string(&out_file).await.unwrap();
        assert_eq!(content, "- [5] fix flaky pagination\n");
    }

    #[tokio::test]
    async fn succeeds_without_output_file() {
        let mut mock = MockForge::new();

        mock.expect_list_closed_pull_requests()
            .returning(|_| Ok(vec![]));

        let req = RecentRequest {
            branch: None,
            hours: 6.0,
            output: None,
        };

        let result = execute(&mock, req).await;
        assert!(result.is_ok());
    }
}
