#![no_main]

//! Fuzz target for loading hand-edited or corrupted store contents.
//!
//! Arbitrary strings are written under the durable keys before the session
//! manager and issue repository touch them. Reads must degrade to empty
//! collections and writes must leave valid JSON behind.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use issueboard::store::{CURRENT_USER_KEY, ISSUES_KEY, USERS_KEY};
use issueboard::{IssueRepository, KvStore, MemoryStore, NewIssue, SessionManager, Status};

#[derive(Arbitrary, Debug)]
struct StoreInput {
    users: Option<String>,
    current_user: Option<String>,
    issues: Option<String>,
    title: String,
    comment: String,
}

fuzz_target!(|input: StoreInput| {
    let store = MemoryStore::new();
    for (key, value) in [
        (USERS_KEY, &input.users),
        (CURRENT_USER_KEY, &input.current_user),
        (ISSUES_KEY, &input.issues),
    ] {
        if let Some(value) = value {
            let _ = store.set(key, value);
        }
    }

    let mut session = SessionManager::new(&store);
    let _ = session.current_session();
    let _ = session.authenticate("fuzz@example.com", "password");

    let repo = IssueRepository::new(&store);
    let before = repo.list_issues().map(|issues| issues.len()).unwrap_or(0);

    let issue = match repo.create_issue(NewIssue {
        title: input.title,
        description: String::new(),
        category: "other".to_string(),
        author_id: "fuzz".to_string(),
        author_name: "Fuzz".to_string(),
    }) {
        Ok(issue) => issue,
        Err(_) => return,
    };

    let _ = repo.set_status(&issue.id, Status::InProgress);
    let _ = repo.add_comment(&issue.id, "fuzz", "Fuzz", &input.comment);

    let after = repo.list_issues().map(|issues| issues.len()).unwrap_or(0);
    assert_eq!(after, before + 1);
    assert_eq!(repo.list_issues().unwrap()[0].id, issue.id);
});
