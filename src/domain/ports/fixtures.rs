//! In-memory repository implementations.
//!
//! Used by handler tests and as the serving fallback when no database is
//! configured. Reference data is fixed at construction; favourites live
//! behind a mutex and get incrementing surrogate ids, matching the store's
//! behaviour closely enough for the HTTP layer not to notice.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Favorite, FavoriteTarget, NewFavorite, Person, Planet, User};

use super::{
    FavoriteRepository, PeopleRepository, PlanetRepository, RepositoryError, UserRepository,
};

/// Fixed set of characters.
#[derive(Debug, Default)]
pub struct InMemoryPeople {
    people: Vec<Person>,
}

impl InMemoryPeople {
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }
}

#[async_trait]
impl PeopleRepository for InMemoryPeople {
    async fn find_all(&self) -> Result<Vec<Person>, RepositoryError> {
        Ok(self.people.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Person>, RepositoryError> {
        Ok(self.people.iter().find(|person| person.id == id).cloned())
    }
}

/// Fixed set of planets.
#[derive(Debug, Default)]
pub struct InMemoryPlanets {
    planets: Vec<Planet>,
}

impl InMemoryPlanets {
    pub fn new(planets: Vec<Planet>) -> Self {
        Self { planets }
    }
}

#[async_trait]
impl PlanetRepository for InMemoryPlanets {
    async fn find_all(&self) -> Result<Vec<Planet>, RepositoryError> {
        Ok(self.planets.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, RepositoryError> {
        Ok(self.planets.iter().find(|planet| planet.id == id).cloned())
    }
}

/// Fixed set of users.
#[derive(Debug, Default)]
pub struct InMemoryUsers {
    users: Vec<User>,
}

impl InMemoryUsers {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.users.clone())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.iter().find(|user| user.email == email).cloned())
    }
}

/// Mutable favourites table with incrementing surrogate ids.
#[derive(Debug, Default)]
pub struct InMemoryFavorites {
    state: Mutex<FavoritesState>,
}

#[derive(Debug, Default)]
struct FavoritesState {
    rows: Vec<Favorite>,
    next_id: i32,
}

impl InMemoryFavorites {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FavoritesState {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn locked(&self) -> Result<std::sync::MutexGuard<'_, FavoritesState>, RepositoryError> {
        self.state
            .lock()
            .map_err(|_| RepositoryError::query("favourites fixture lock poisoned"))
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryFavorites {
    async fn find_all(&self) -> Result<Vec<Favorite>, RepositoryError> {
        Ok(self.locked()?.rows.clone())
    }

    async fn find_match(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<Favorite>, RepositoryError> {
        Ok(self
            .locked()?
            .rows
            .iter()
            .find(|row| row.user_id == user_id && row.target == target)
            .cloned())
    }

    async fn insert(&self, favorite: NewFavorite) -> Result<Favorite, RepositoryError> {
        let mut state = self.locked()?;
        let row = Favorite {
            id: state.next_id,
            user_id: favorite.user_id,
            target: favorite.target,
        };
        state.next_id += 1;
        state.rows.push(row.clone());
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        self.locked()?.rows.retain(|row| row.id != id);
        Ok(())
    }
}
