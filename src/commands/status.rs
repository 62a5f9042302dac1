use anyhow::{bail, Result};

use issueboard::{IssueRepository, KvStore, Status};

pub fn run(store: &dyn KvStore, id: &str, status: &str) -> Result<()> {
    let status: Status = match status.parse() {
        Ok(s) => s,
        Err(msg) => bail!(msg),
    };

    if IssueRepository::new(store).set_status(id, status)? {
        println!("Issue #{} is now {}", id, status);
    } else {
        bail!("Issue #{} not found", id);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use issueboard::{NewIssue, SqliteStore};
    use proptest::prelude::*;
    use tempfile::tempdir;

    fn setup_test_store() -> (SqliteStore, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let store = SqliteStore::open(&dir.path().join("test.db")).unwrap();
        (store, dir)
    }

    fn seed(store: &dyn KvStore) -> String {
        IssueRepository::new(store)
            .create_issue(NewIssue {
                title: "Test".to_string(),
                description: String::new(),
                category: "bug".to_string(),
                author_id: "1".to_string(),
                author_name: "Alice".to_string(),
            })
            .unwrap()
            .id
    }

    // ==================== Unit Tests ====================

    #[test]
    fn test_set_resolved() {
        let (store, _dir) = setup_test_store();
        let id = seed(&store);

        run(&store, &id, "resolved").unwrap();
        let issue = IssueRepository::new(&store).get_issue(&id).unwrap().unwrap();
        assert_eq!(issue.status, Status::Resolved);
    }

    #[test]
    fn test_set_status_nonexistent_issue() {
        let (store, _dir) = setup_test_store();
        seed(&store);

        let result = run(&store, "99999", "resolved");
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_set_invalid_status() {
        let (store, _dir) = setup_test_store();
        let id = seed(&store);

        let result = run(&store, &id, "closed");
        assert!(result.unwrap_err().to_string().contains("Invalid status"));
        let issue = IssueRepository::new(&store).get_issue(&id).unwrap().unwrap();
        assert_eq!(issue.status, Status::Open);
    }

    #[test]
    fn test_set_status_preserves_other_fields() {
        let (store, _dir) = setup_test_store();
        let id = seed(&store);
        let repo = IssueRepository::new(&store);
        repo.add_comment(&id, "1", "Alice", "Note").unwrap();
        let before = repo.get_issue(&id).unwrap().unwrap();

        run(&store, &id, "in-progress").unwrap();

        let after = repo.get_issue(&id).unwrap().unwrap();
        assert_eq!(after.title, before.title);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.comments, before.comments);
    }

    // ==================== Property-Based Tests ====================

    proptest! {
        #[test]
        fn prop_valid_status_applies(status in "open|in-progress|resolved") {
            let (store, _dir) = setup_test_store();
            let id = seed(&store);

            prop_assert!(run(&store, &id, &status).is_ok());
            let issue = IssueRepository::new(&store).get_issue(&id).unwrap().unwrap();
            prop_assert_eq!(issue.status.as_str(), status.as_str());
        }

        #[test]
        fn prop_invalid_status_rejected(
            status in "[a-zA-Z-]{1,12}"
                .prop_filter("Exclude valid statuses", |s| {
                    !["open", "in-progress", "resolved"].contains(&s.as_str())
                })
        ) {
            let (store, _dir) = setup_test_store();
            let id = seed(&store);
            prop_assert!(run(&store, &id, &status).is_err());
        }
    }
}
