use anyhow::{bail, Result};

use issueboard::{IssueRepository, KvStore};

pub fn run(store: &dyn KvStore, id: &str) -> Result<()> {
    let issue = match IssueRepository::new(store).get_issue(id)? {
        Some(i) => i,
        None => bail!("Issue #{} not found", id),
    };

    println!("Issue #{}: {}", issue.id, issue.title);
    println!("Status: {}", issue.status);
    println!("Category: {}", issue.category);
    println!("Author: {}", issue.author_name);
    println!("Created: {}", issue.created_at.format("%Y-%m-%d %H:%M:%S"));

    if !issue.description.is_empty() {
        println!("\nDescription:");
        for line in issue.description.lines() {
            println!("  {}", line);
        }
    }

    println!("\nComments ({}):", issue.comments.len());
    if issue.comments.is_empty() {
        println!("  No comments yet");
    }
    for comment in &issue.comments {
        println!(
            "  [{}] {}: {}",
            comment.created_at.format("%Y-%m-%d %H:%M"),
            comment.author_name,
            comment.content
        );
    }

    Ok(())
}
