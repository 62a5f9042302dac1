//! Accounts and the current-user session.
//!
//! The session is an explicit context object rather than process-global
//! state. It hydrates lazily from the `currentUser` key on first read and is
//! cleared, in memory and in the store, by [`SessionManager::end_session`].

use anyhow::Result;
use chrono::Utc;

use crate::error::{AuthError, AuthResult};
use crate::ids::{self, IdGenerator};
use crate::models::{PublicUser, User};
use crate::store::{self, KvStore, CURRENT_USER_KEY, USERS_KEY};

pub struct SessionManager<'a> {
    store: &'a dyn KvStore,
    ids: IdGenerator,
    current: Option<PublicUser>,
    hydrated: bool,
}

/// Emails match case-insensitively, ignoring surrounding whitespace.
fn same_email(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

impl<'a> SessionManager<'a> {
    pub fn new(store: &'a dyn KvStore) -> Self {
        SessionManager {
            store,
            ids: IdGenerator::new(),
            current: None,
            hydrated: false,
        }
    }

    pub fn register(&mut self, email: &str, password: &str, name: &str) -> AuthResult<PublicUser> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }
        if name.trim().is_empty() {
            return Err(AuthError::MissingField("name"));
        }

        let mut users: Vec<User> = store::load_collection(self.store, USERS_KEY)?;
        if users.iter().any(|u| same_email(&u.email, email)) {
            tracing::info!(email, "registration rejected: email taken");
            return Err(AuthError::EmailTaken);
        }

        let existing_max = ids::max_id(users.iter().map(|u| u.id.as_str()));
        let user = User {
            id: self.ids.next_after(existing_max),
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        let public = user.public();
        users.push(user);
        store::save_collection(self.store, USERS_KEY, &users)?;

        self.establish(public.clone())?;
        tracing::info!(user_id = %public.id, email, "registered user");
        Ok(public)
    }

    /// Log in by exact password match. A failure says nothing about whether
    /// the email exists and leaves any current session in place.
    pub fn authenticate(&mut self, email: &str, password: &str) -> AuthResult<PublicUser> {
        let users: Vec<User> = store::load_collection(self.store, USERS_KEY)?;
        let found = users
            .iter()
            .find(|u| same_email(&u.email, email) && u.password == password);

        match found {
            Some(user) => {
                let public = user.public();
                self.establish(public.clone())?;
                tracing::info!(user_id = %public.id, "authenticated");
                Ok(public)
            }
            None => {
                tracing::info!(email = email.trim(), "authentication failed");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    pub fn end_session(&mut self) -> Result<()> {
        if let Some(user) = self.current.take() {
            tracing::info!(user_id = %user.id, "session ended");
        }
        self.hydrated = true;
        self.store.remove(CURRENT_USER_KEY)
    }

    pub fn current_session(&mut self) -> Result<Option<PublicUser>> {
        if !self.hydrated {
            self.current = self.hydrate()?;
            self.hydrated = true;
        }
        Ok(self.current.clone())
    }

    pub fn is_authenticated(&mut self) -> Result<bool> {
        Ok(self.current_session()?.is_some())
    }

    fn establish(&mut self, user: PublicUser) -> Result<()> {
        store::save_value(self.store, CURRENT_USER_KEY, &user)?;
        self.current = Some(user);
        self.hydrated = true;
        Ok(())
    }

    fn hydrate(&self) -> Result<Option<PublicUser>> {
        let stored: Option<PublicUser> = store::load_value(self.store, CURRENT_USER_KEY)?;
        let Some(user) = stored else {
            return Ok(None);
        };

        let users: Vec<User> = store::load_collection(self.store, USERS_KEY)?;
        if users.iter().any(|u| u.id == user.id) {
            tracing::debug!(user_id = %user.id, "restored session");
            Ok(Some(user))
        } else {
            tracing::warn!(user_id = %user.id, "dropping session for unknown user");
            self.store.remove(CURRENT_USER_KEY)?;
            Ok(None)
        }
    }
}
