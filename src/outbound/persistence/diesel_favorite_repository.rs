//! PostgreSQL-backed `FavoriteRepository` implementation using Diesel.
//!
//! Writes are single statements and therefore individually atomic; there is
//! no cross-request locking, so concurrent inserts for the same pair can
//! both land (duplicates are allowed by design).

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{FavoriteRepository, RepositoryError};
use crate::domain::{Favorite, FavoriteTarget, NewFavorite};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{FavoriteRow, NewFavoriteRow};
use super::pool::DbPool;
use super::schema::favorites;

/// Diesel-backed implementation of the `FavoriteRepository` port.
#[derive(Clone)]
pub struct DieselFavoriteRepository {
    pool: DbPool,
}

impl DieselFavoriteRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for DieselFavoriteRepository {
    async fn find_all(&self) -> Result<Vec<Favorite>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<FavoriteRow> = favorites::table
            .select(FavoriteRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(Favorite::try_from).collect()
    }

    async fn find_match(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<Favorite>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<FavoriteRow> = match target {
            FavoriteTarget::Planet(planet_id) => {
                favorites::table
                    .filter(favorites::user_id.eq(user_id))
                    .filter(favorites::planet_id.eq(planet_id))
                    .select(FavoriteRow::as_select())
                    .first(&mut conn)
                    .await
            }
            FavoriteTarget::People(people_id) => {
                favorites::table
                    .filter(favorites::user_id.eq(user_id))
                    .filter(favorites::people_id.eq(people_id))
                    .select(FavoriteRow::as_select())
                    .first(&mut conn)
                    .await
            }
        }
        .optional()
        .map_err(map_diesel_error)?;

        row.map(Favorite::try_from).transpose()
    }

    async fn insert(&self, favorite: NewFavorite) -> Result<Favorite, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: FavoriteRow = diesel::insert_into(favorites::table)
            .values(NewFavoriteRow::from(favorite))
            .returning(FavoriteRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Favorite::try_from(row)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(favorites::table.filter(favorites::id.eq(id)))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
