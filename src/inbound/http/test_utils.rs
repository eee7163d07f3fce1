//! Shared helpers for handler tests.

use std::sync::Arc;

use actix_web::{web, App};

use crate::domain::ports::fixtures::{
    InMemoryFavorites, InMemoryPeople, InMemoryPlanets, InMemoryUsers,
};
use crate::domain::{Person, Planet, User};
use crate::inbound::http::state::HttpState;

/// State seeded with one user, two characters, and two planets.
pub fn seeded_state() -> HttpState {
    HttpState::new(
        Arc::new(InMemoryUsers::new(vec![User {
            id: 1,
            email: "luke@rebellion.org".into(),
            is_active: true,
        }])),
        Arc::new(InMemoryPeople::new(vec![
            Person {
                id: 1,
                name: "Luke Skywalker".into(),
                gender: "male".into(),
                birth_year: "19BBY".into(),
                eye_color: "blue".into(),
            },
            Person {
                id: 2,
                name: "Leia Organa".into(),
                gender: "female".into(),
                birth_year: "19BBY".into(),
                eye_color: "brown".into(),
            },
        ])),
        Arc::new(InMemoryPlanets::new(vec![
            Planet {
                id: 1,
                name: "Tatooine".into(),
                climate: "arid".into(),
                terrain: "desert".into(),
                population: 200_000,
            },
            Planet {
                id: 2,
                name: "Alderaan".into(),
                climate: "temperate".into(),
                terrain: "grasslands".into(),
                population: 2_000_000_000,
            },
        ])),
        Arc::new(InMemoryFavorites::new()),
    )
}

/// Build an app with every route registered against the given state.
pub fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .service(super::sitemap::sitemap)
        .service(super::people::list_people)
        .service(super::people::get_person)
        .service(super::planets::list_planets)
        .service(super::planets::get_planet)
        .service(super::users::list_favorites)
        .service(super::users::list_users)
        .service(super::favorites::add_favorite_planet)
        .service(super::favorites::add_favorite_person)
        .service(super::favorites::delete_favorite_planet)
        .service(super::favorites::delete_favorite_person)
}
