//! Port abstraction for user lookups.

use async_trait::async_trait;

use crate::domain::User;

use super::RepositoryError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch every user.
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;

    /// Fetch a user by email. Mutation endpoints identify the acting user
    /// this way; an unknown email is simply `None`.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
}
