//! PostgreSQL-backed `PlanetRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PlanetRepository, RepositoryError};
use crate::domain::Planet;

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::PlanetRow;
use super::pool::DbPool;
use super::schema::planets;

/// Diesel-backed implementation of the `PlanetRepository` port.
#[derive(Clone)]
pub struct DieselPlanetRepository {
    pool: DbPool,
}

impl DieselPlanetRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanetRepository for DieselPlanetRepository {
    async fn find_all(&self) -> Result<Vec<Planet>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PlanetRow> = planets::table
            .select(PlanetRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Planet::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<PlanetRow> = planets::table
            .filter(planets::id.eq(id))
            .select(PlanetRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Planet::from))
    }
}
