//! Shared HTTP adapter state.
//!
//! Handlers receive this bundle via `actix_web::web::Data`, so they depend
//! only on the domain ports and stay testable without I/O. There is no
//! module-level store handle anywhere; whatever backs the ports is decided
//! at wiring time.

use std::sync::Arc;

use crate::domain::ports::{
    FavoriteRepository, PeopleRepository, PlanetRepository, UserRepository,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserRepository>,
    pub people: Arc<dyn PeopleRepository>,
    pub planets: Arc<dyn PlanetRepository>,
    pub favorites: Arc<dyn FavoriteRepository>,
}

impl HttpState {
    /// Bundle the four repository ports.
    pub fn new(
        users: Arc<dyn UserRepository>,
        people: Arc<dyn PeopleRepository>,
        planets: Arc<dyn PlanetRepository>,
        favorites: Arc<dyn FavoriteRepository>,
    ) -> Self {
        Self {
            users,
            people,
            planets,
            favorites,
        }
    }
}
