use anyhow::{bail, Result};

use issueboard::{KvStore, PublicUser, SessionManager};

const MIN_PASSWORD_LEN: usize = 6;

pub fn register(store: &dyn KvStore, email: &str, name: &str, password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        bail!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        );
    }

    let mut session = SessionManager::new(store);
    let user = session.register(email, password, name)?;
    println!("Account created. Logged in as {} <{}>", user.name, user.email);
    Ok(())
}

pub fn login(store: &dyn KvStore, email: &str, password: &str) -> Result<()> {
    let mut session = SessionManager::new(store);
    let user = session.authenticate(email, password)?;
    println!("Welcome back, {}!", user.name);
    Ok(())
}

pub fn logout(store: &dyn KvStore) -> Result<()> {
    let mut session = SessionManager::new(store);
    match session.current_session()? {
        Some(user) => {
            session.end_session()?;
            println!("Logged out {}", user.email);
        }
        None => {
            session.end_session()?;
            println!("Not logged in.");
        }
    }
    Ok(())
}

pub fn whoami(store: &dyn KvStore) -> Result<()> {
    let mut session = SessionManager::new(store);
    match session.current_session()? {
        Some(user) => {
            println!("{} <{}>", user.name, user.email);
            println!("Member since: {}", user.created_at.format("%Y-%m-%d"));
        }
        None => println!("Not logged in."),
    }
    Ok(())
}

/// The logged-in user, or an error telling the caller to log in.
pub fn require_user(store: &dyn KvStore) -> Result<PublicUser> {
    let mut session = SessionManager::new(store);
    match session.current_session()? {
        Some(user) => Ok(user),
        None => bail!("Not logged in. Run 'issueboard login' or 'issueboard register' first."),
    }
}
