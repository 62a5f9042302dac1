use anyhow::{bail, Result};

use issueboard::{IssueRepository, KvStore};

use crate::commands::account::require_user;

pub fn run(store: &dyn KvStore, id: &str, text: &str) -> Result<()> {
    if text.trim().is_empty() {
        bail!("Comment must not be empty");
    }

    let author = require_user(store)?;
    let repo = IssueRepository::new(store);
    match repo.add_comment(id, &author.id, &author.name, text)? {
        Some(_) => println!("Added comment to issue #{}", id),
        None => bail!("Issue #{} not found", id),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::account;
    use issueboard::{NewIssue, SqliteStore};
    use tempfile::tempdir;

    fn setup_with_issue() -> (SqliteStore, String, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let store = SqliteStore::open(&dir.path().join("test.db")).unwrap();
        account::register(&store, "bob@x.com", "Bob", "secret1").unwrap();
        let id = IssueRepository::new(&store)
            .create_issue(NewIssue {
                title: "Coffee machine".to_string(),
                description: "Leaking".to_string(),
                category: "infrastructure".to_string(),
                author_id: "1".to_string(),
                author_name: "Alice".to_string(),
            })
            .unwrap()
            .id;
        (store, id, dir)
    }

    #[test]
    fn test_comment_stamps_session_user() {
        let (store, id, _dir) = setup_with_issue();
        run(&store, &id, "On it").unwrap();

        let issue = IssueRepository::new(&store).get_issue(&id).unwrap().unwrap();
        assert_eq!(issue.comments.len(), 1);
        assert_eq!(issue.comments[0].author_name, "Bob");
        assert_eq!(issue.comments[0].content, "On it");
    }

    #[test]
    fn test_comment_unknown_issue() {
        let (store, _id, _dir) = setup_with_issue();
        let result = run(&store, "404", "Hello");
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_comment_requires_login() {
        let (store, id, _dir) = setup_with_issue();
        account::logout(&store).unwrap();
        assert!(run(&store, &id, "Hello").is_err());
    }

    #[test]
    fn test_empty_comment() {
        let (store, id, _dir) = setup_with_issue();
        let result = run(&store, &id, "  ");
        assert!(result.unwrap_err().to_string().contains("must not be empty"));
    }
}
