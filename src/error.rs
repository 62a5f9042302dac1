use thiserror::Error;

/// Recoverable outcomes of the session manager.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Email already exists")]
    EmailTaken,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("{0} must not be empty")]
    MissingField(&'static str),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

pub type AuthResult<T> = std::result::Result<T, AuthError>;
