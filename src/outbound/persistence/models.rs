//! Diesel queryable and insertable rows.

use diesel::prelude::*;

use crate::domain::ports::RepositoryError;
use crate::domain::{Favorite, FavoriteTarget, NewFavorite, Person, Planet, User};

use super::schema::{favorites, people, planets, users};

/// Queryable row for users. Carries the stored password, which is dropped
/// when mapping into the domain.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub email: String,
    #[expect(dead_code, reason = "selected with the row but never read; no authn surface")]
    pub password: String,
    pub is_active: bool,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            is_active: row.is_active,
        }
    }
}

/// Queryable row for planets.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = planets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PlanetRow {
    pub id: i32,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub population: i64,
}

impl From<PlanetRow> for Planet {
    fn from(row: PlanetRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            climate: row.climate,
            terrain: row.terrain,
            population: row.population,
        }
    }
}

/// Queryable row for people.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = people)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PersonRow {
    pub id: i32,
    pub name: String,
    pub gender: String,
    pub birth_year: String,
    pub eye_color: String,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            gender: row.gender,
            birth_year: row.birth_year,
            eye_color: row.eye_color,
        }
    }
}

/// Queryable row for favourites. Both target columns are nullable in the
/// schema; conversion to the domain enforces exactly one.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = favorites)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FavoriteRow {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub people_id: Option<i32>,
}

impl TryFrom<FavoriteRow> for Favorite {
    type Error = RepositoryError;

    fn try_from(row: FavoriteRow) -> Result<Self, Self::Error> {
        let target = match (row.planet_id, row.people_id) {
            (Some(planet_id), None) => FavoriteTarget::Planet(planet_id),
            (None, Some(people_id)) => FavoriteTarget::People(people_id),
            _ => {
                return Err(RepositoryError::query(format!(
                    "favourite row {} must reference exactly one of planet or person",
                    row.id
                )))
            }
        };

        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            target,
        })
    }
}

/// Insertable row for favourites.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = favorites)]
pub(crate) struct NewFavoriteRow {
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub people_id: Option<i32>,
}

impl From<NewFavorite> for NewFavoriteRow {
    fn from(favorite: NewFavorite) -> Self {
        Self {
            user_id: favorite.user_id,
            planet_id: favorite.target.planet_id(),
            people_id: favorite.target.people_id(),
        }
    }
}
