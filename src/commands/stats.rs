use anyhow::Result;

use issueboard::{BoardStats, IssueRepository, KvStore};

pub fn run(store: &dyn KvStore) -> Result<()> {
    let issues = IssueRepository::new(store).list_issues()?;
    let stats = BoardStats::from_issues(&issues);

    println!("Total:       {}", stats.total);
    println!("Open:        {}", stats.open);
    println!("In progress: {}", stats.in_progress);
    println!("Resolved:    {}", stats.resolved);
    Ok(())
}
