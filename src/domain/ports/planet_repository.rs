//! Port abstraction for planet lookups.

use async_trait::async_trait;

use crate::domain::Planet;

use super::RepositoryError;

#[async_trait]
pub trait PlanetRepository: Send + Sync {
    /// Fetch every planet.
    async fn find_all(&self) -> Result<Vec<Planet>, RepositoryError>;

    /// Fetch a planet by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, RepositoryError>;
}
