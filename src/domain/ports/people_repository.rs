//! Port abstraction for character lookups.

use async_trait::async_trait;

use crate::domain::Person;

use super::RepositoryError;

#[async_trait]
pub trait PeopleRepository: Send + Sync {
    /// Fetch every character.
    async fn find_all(&self) -> Result<Vec<Person>, RepositoryError>;

    /// Fetch a character by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Person>, RepositoryError>;
}
