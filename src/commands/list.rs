use anyhow::{bail, Result};

use issueboard::{Issue, IssueFilter, IssueRepository, KvStore, Status};

/// Parse a `--status` argument; `all` means no status filter.
pub fn parse_status_filter(status: &str) -> Result<Option<Status>> {
    if status == "all" {
        return Ok(None);
    }
    match status.parse() {
        Ok(s) => Ok(Some(s)),
        Err(msg) => bail!("{} (or all)", msg),
    }
}

pub fn filtered_issues(store: &dyn KvStore, search: Option<&str>, status: &str) -> Result<Vec<Issue>> {
    let filter = IssueFilter {
        search: search.map(str::to_string),
        status: parse_status_filter(status)?,
    };
    let issues = IssueRepository::new(store).list_issues()?;
    Ok(filter.apply(&issues))
}

pub fn run(store: &dyn KvStore, search: Option<&str>, status: &str) -> Result<()> {
    let issues = filtered_issues(store, search, status)?;

    if issues.is_empty() {
        println!("No issues found.");
        return Ok(());
    }

    for issue in issues {
        let status_display = format!("[{}]", issue.status);
        let date = issue.created_at.format("%Y-%m-%d");
        println!(
            "#{:<14} {:13} {:<40} {:14} {}",
            issue.id,
            status_display,
            truncate(&issue.title, 40),
            issue.category,
            date
        );
    }

    Ok(())
}

fn truncate(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
