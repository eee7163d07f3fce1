//! Port abstraction for the favourites join table.

use async_trait::async_trait;

use crate::domain::{Favorite, FavoriteTarget, NewFavorite};

use super::RepositoryError;

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Fetch every favourite.
    async fn find_all(&self) -> Result<Vec<Favorite>, RepositoryError>;

    /// Fetch the first favourite matching the (user, target) pair.
    ///
    /// Duplicates are possible; no ordering guarantee is made between them.
    async fn find_match(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<Favorite>, RepositoryError>;

    /// Insert a favourite and return it with its assigned id. Never
    /// deduplicates: every call creates a new row.
    async fn insert(&self, favorite: NewFavorite) -> Result<Favorite, RepositoryError>;

    /// Delete a favourite by id.
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
