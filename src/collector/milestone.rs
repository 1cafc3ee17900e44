//! Collects every issue attached to a named milestone.
use log::*;

use crate::{
    collector::{
        Entry,
        pager::{self, Step},
    },
    forge::{traits::Forge, types::IssuePageRequest},
    result::Result,
};

/// Resolve a milestone title to its number, then collect one line per issue
/// attached to it, across all pages, with no recency filter.
///
/// Returns `None` when no open milestone matches the title exactly. The
/// milestone list is fetched in a single request; the match is
/// case-sensitive and the first match wins.
pub async fn collect(
    forge: &dyn Forge,
    title: &str,
) -> Result<Option<String>> {
    let milestones = forge.list_open_milestones().await?;

    let Some(milestone) = milestones.into_iter().find(|m| m.title == title)
    else {
        return Ok(None);
    };

    debug!(
        "resolved milestone {} to number {}",
        milestone.title, milestone.number
    );

    let mut notes = String::new();

    pager::walk_pages(
        |page| {
            forge.list_milestone_issues(IssuePageRequest {
                milestone: milestone.number,
                page,
            })
        },
        |issue| {
            let entry = Entry {
                number: issue.number,
                title: issue.title,
            };
            notes.push_str(&entry.line());
            Step::Continue
        },
    )
    .await?;

    Ok(Some(notes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forge::{
        traits::MockForge,
        types::{IssueRecord, Milestone},
    };

    fn issue(number: u64) -> IssueRecord {
        IssueRecord {
            number,
            title: format!("issue {number}"),
        }
    }

    fn milestone(number: u64, title: &str) -> Milestone {
        Milestone {
            number,
            title: title.to_string(),
        }
    }

    #[tokio::test]
    async fn returns_none_when_no_milestone_matches() {
        let mut mock = MockForge::new();

        mock.expect_list_open_milestones()
            .times(1)
            .returning(|| Ok(vec![milestone(1, "v1.0.0")]));

        let result = collect(&mock, "v2.0.0").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn title_match_is_case_sensitive() {
        let mut mock = MockForge::new();

        mock.expect_list_open_milestones()
            .times(1)
            .returning(|| Ok(vec![milestone(1, "V1.0.0")]));

        let result = collect(&mock, "v1.0.0").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn emits_every_issue_across_pages() {
        let mut mock = MockForge::new();

        mock.expect_list_open_milestones()
            .times(1)
            .returning(|| {
                Ok(vec![milestone(3, "v0.9.0"), milestone(7, "v1.0.0")])
            });

        mock.expect_list_milestone_issues()
            .withf(|req| req.milestone == 7 && req.page == 1)
            .times(1)
            .returning(|_| Ok(vec![issue(21), issue(22)]));

        mock.expect_list_milestone_issues()
            .withf(|req| req.milestone == 7 && req.page == 2)
            .times(1)
            .returning(|_| Ok(vec![issue(23)]));

        mock.expect_list_milestone_issues()
            .withf(|req| req.milestone == 7 && req.page == 3)
            .times(1)
            .returning(|_| Ok(vec![]));

        let notes = collect(&mock, "v1.0.0").await.unwrap().unwrap();

        assert_eq!(
            notes,
            "- [21] issue 21\n- [22] issue 22\n- [23] issue 23\n"
        );
    }

    #[tokio::test]
    async fn first_matching_milestone_wins() {
        let mut mock = MockForge::new();

        mock.expect_list_open_milestones()
            .times(1)
            .returning(|| {
                Ok(vec![milestone(4, "v1.0.0"), milestone(9, "v1.0.0")])
            });

        mock.expect_list_milestone_issues()
            .withf(|req| req.milestone == 4)
            .returning(|_| Ok(vec![]));

        let notes = collect(&mock, "v1.0.0").await.unwrap().unwrap();

        assert_eq!(notes, "");
    }

    #[tokio::test]
    async fn milestone_with_no_issues_yields_empty_notes() {
        let mut mock = MockForge::new();

        mock.expect_list_open_milestones()
            .times(1)
            .returning(|| Ok(vec![milestone(7, "v1.0.0")]));

        mock.expect_list_milestone_issues()
            .withf(|req| req.page == 1)
            .times(1)
            .returning(|_| Ok(vec![]));

        let notes = collect(&mock, "v1.0.0").await.unwrap().unwrap();

        assert_eq!(notes, "");
    }
}
