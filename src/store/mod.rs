use crate::models::user::User;
use async_trait::async_trait;
use thiserror::Error;

/// MongoDB-backed [`UserStore`] implementation.
pub mod mongo;

/// Failure taxonomy for store operations.
///
/// The create route surfaces `DuplicateEmail` with its own description and
/// collapses everything else into a generic message; the login route maps
/// any failure to a fixed 500 body. Callers match on the variant instead of
/// inspecting message text.
#[derive(Debug, Error)]
pub enum UserStoreError {
    /// The email is already taken by another user.
    #[error("Usuário já existente")]
    DuplicateEmail,
    /// Transport or storage failure talking to the backing database.
    #[error("{0}")]
    Backend(String),
}

/// Input for [`UserStore::create`]. `id` and `created_at` are assigned by
/// the store, never by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Durable user records, keyed by unique email.
///
/// Uniqueness is enforced here, not by the HTTP layer: `create` fails with
/// [`UserStoreError::DuplicateEmail`] when the email is already present.
/// `find_by_email` returns `Ok(None)` for an unknown email; `Err` is
/// reserved for transport failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, input: NewUser) -> Result<User, UserStoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError>;
}
