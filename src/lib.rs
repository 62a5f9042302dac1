//! Local issue board: user accounts with a current-user session, a shared
//! list of issues with statuses, and threaded comments, all kept in one
//! durable key-value store.

pub mod config;
pub mod error;
pub mod filter;
pub mod ids;
pub mod logging;
pub mod models;
pub mod repository;
pub mod session;
pub mod store;

pub use error::{AuthError, AuthResult};
pub use filter::{BoardStats, IssueFilter};
pub use models::{Comment, Issue, NewIssue, PublicUser, Status, User};
pub use repository::IssueRepository;
pub use session::SessionManager;
pub use store::{KvStore, MemoryStore, SqliteStore};
