//! PostgreSQL-backed `PeopleRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PeopleRepository, RepositoryError};
use crate::domain::Person;

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::PersonRow;
use super::pool::DbPool;
use super::schema::people;

/// Diesel-backed implementation of the `PeopleRepository` port.
#[derive(Clone)]
pub struct DieselPeopleRepository {
    pool: DbPool,
}

impl DieselPeopleRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PeopleRepository for DieselPeopleRepository {
    async fn find_all(&self) -> Result<Vec<Person>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PersonRow> = people::table
            .select(PersonRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Person::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Person>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<PersonRow> = people::table
            .filter(people::id.eq(id))
            .select(PersonRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Person::from))
    }
}
