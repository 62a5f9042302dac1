//! Issue and comment persistence.
//!
//! All issues live in one JSON array under the `issues` key, newest first,
//! each embedding its comments oldest first. Every mutation loads the whole
//! array, changes it in memory and writes the whole array back, so the
//! store must have a single writer.

use anyhow::Result;
use chrono::Utc;

use crate::ids::{self, IdGenerator};
use crate::models::{Comment, Issue, NewIssue, Status};
use crate::store::{self, KvStore, ISSUES_KEY};

pub struct IssueRepository<'a> {
    store: &'a dyn KvStore,
    ids: IdGenerator,
}

impl<'a> IssueRepository<'a> {
    pub fn new(store: &'a dyn KvStore) -> Self {
        IssueRepository {
            store,
            ids: IdGenerator::new(),
        }
    }

    pub fn list_issues(&self) -> Result<Vec<Issue>> {
        store::load_collection(self.store, ISSUES_KEY)
    }

    pub fn get_issue(&self, id: &str) -> Result<Option<Issue>> {
        let issues = self.list_issues()?;
        Ok(issues.into_iter().find(|issue| issue.id == id))
    }

    pub fn create_issue(&self, new: NewIssue) -> Result<Issue> {
        let mut issues = self.list_issues()?;
        let existing_max = ids::max_id(issues.iter().map(|issue| issue.id.as_str()));

        let issue = Issue {
            id: self.ids.next_after(existing_max),
            title: new.title,
            description: new.description,
            category: new.category,
            author_id: new.author_id,
            author_name: new.author_name,
            created_at: Utc::now(),
            status: Status::Open,
            comments: Vec::new(),
        };
        issues.insert(0, issue.clone());
        store::save_collection(self.store, ISSUES_KEY, &issues)?;

        tracing::info!(issue_id = %issue.id, category = %issue.category, "created issue");
        Ok(issue)
    }

    /// Returns `false`, writing nothing, when no issue has this id.
    pub fn set_status(&self, id: &str, status: Status) -> Result<bool> {
        let mut issues = self.list_issues()?;

        let Some(issue) = issues.iter_mut().find(|issue| issue.id == id) else {
            tracing::debug!(issue_id = id, "status change for unknown issue ignored");
            return Ok(false);
        };
        issue.status = status;
        store::save_collection(self.store, ISSUES_KEY, &issues)?;

        tracing::info!(issue_id = id, %status, "updated status");
        Ok(true)
    }

    /// Append a comment to the issue's thread.
    ///
    /// Returns `None`, writing nothing, when no issue has this id or the
    /// content is blank.
    pub fn add_comment(
        &self,
        issue_id: &str,
        author_id: &str,
        author_name: &str,
        content: &str,
    ) -> Result<Option<Comment>> {
        if content.trim().is_empty() {
            return Ok(None);
        }

        let mut issues = self.list_issues()?;
        let existing_max = ids::max_id(
            issues
                .iter()
                .flat_map(|issue| issue.comments.iter())
                .map(|comment| comment.id.as_str()),
        );

        let Some(issue) = issues.iter_mut().find(|issue| issue.id == issue_id) else {
            tracing::debug!(issue_id, "comment on unknown issue ignored");
            return Ok(None);
        };

        let comment = Comment {
            id: self.ids.next_after(existing_max),
            issue_id: issue_id.to_string(),
            author_id: author_id.to_string(),
            author_name: author_name.to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
        };
        issue.comments.push(comment.clone());
        store::save_collection(self.store, ISSUES_KEY, &issues)?;

        tracing::info!(issue_id, comment_id = %comment.id, "added comment");
        Ok(Some(comment))
    }
}
