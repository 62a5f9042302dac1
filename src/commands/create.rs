use anyhow::{bail, Result};

use issueboard::{IssueRepository, KvStore, NewIssue};

use crate::commands::account::require_user;

pub const VALID_CATEGORIES: [&str; 6] = [
    "bug",
    "feature",
    "question",
    "documentation",
    "infrastructure",
    "other",
];

pub fn validate_category(category: &str) -> bool {
    VALID_CATEGORIES.contains(&category)
}

pub fn run(store: &dyn KvStore, title: &str, description: &str, category: &str) -> Result<()> {
    if !validate_category(category) {
        bail!(
            "Invalid category '{}'. Must be one of: {}",
            category,
            VALID_CATEGORIES.join(", ")
        );
    }
    if title.trim().is_empty() {
        bail!("Title must not be empty");
    }

    let author = require_user(store)?;
    let repo = IssueRepository::new(store);
    let issue = repo.create_issue(NewIssue {
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        author_id: author.id,
        author_name: author.name,
    })?;

    println!("Created issue #{}", issue.id);
    Ok(())
}
