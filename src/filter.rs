use crate::models::{Issue, Status};

/// Board query: free-text search over title and description plus an
/// optional status. Recomputed on every call, never stored.
#[derive(Debug, Clone, Default)]
pub struct IssueFilter {
    pub search: Option<String>,
    pub status: Option<Status>,
}

impl IssueFilter {
    pub fn matches(&self, issue: &Issue) -> bool {
        if let Some(status) = self.status {
            if issue.status != status {
                return false;
            }
        }

        match self.search.as_deref() {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                issue.title.to_lowercase().contains(&term)
                    || issue.description.to_lowercase().contains(&term)
            }
            _ => true,
        }
    }

    /// Matching issues, in input order.
    pub fn apply(&self, issues: &[Issue]) -> Vec<Issue> {
        issues
            .iter()
            .filter(|issue| self.matches(issue))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardStats {
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub total: usize,
}

impl BoardStats {
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut stats = BoardStats {
            total: issues.len(),
            ..Default::default()
        };
        for issue in issues {
            match issue.status {
                Status::Open => stats.open += 1,
                Status::InProgress => stats.in_progress += 1,
                Status::Resolved => stats.resolved += 1,
            }
        }
        stats
    }
}
