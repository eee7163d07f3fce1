//! Server construction and wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};
use tracing::info;

use crate::domain::ports::fixtures::{
    InMemoryFavorites, InMemoryPeople, InMemoryPlanets, InMemoryUsers,
};
use crate::inbound::http::health::{live, ready, HealthState};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{favorites, people, planets, sitemap, users};
use crate::outbound::persistence::{
    DieselFavoriteRepository, DieselPeopleRepository, DieselPlanetRepository, DieselUserRepository,
};
use crate::Trace;

/// Build the HTTP state from configuration.
///
/// With a pool attached, handlers talk to PostgreSQL through the Diesel
/// adapters; without one they serve from empty in-memory repositories,
/// which keeps local development and smoke tests store-free.
fn build_http_state(config: &ServerConfig) -> HttpState {
    match config.db_pool() {
        Some(pool) => HttpState::new(
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(DieselPeopleRepository::new(pool.clone())),
            Arc::new(DieselPlanetRepository::new(pool.clone())),
            Arc::new(DieselFavoriteRepository::new(pool.clone())),
        ),
        None => HttpState::new(
            Arc::new(InMemoryUsers::default()),
            Arc::new(InMemoryPeople::default()),
            Arc::new(InMemoryPlanets::default()),
            Arc::new(InMemoryFavorites::new()),
        ),
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<EitherBody<BoxBody>>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        // Browser clients are served from other origins; allow them all.
        .wrap(Cors::permissive())
        .service(sitemap::sitemap)
        .service(live)
        .service(ready)
        .service(people::list_people)
        .service(people::get_person)
        .service(planets::list_planets)
        .service(planets::get_planet)
        .service(users::list_users)
        .service(users::list_favorites)
        .service(favorites::add_favorite_planet)
        .service(favorites::add_favorite_person)
        .service(favorites::delete_favorite_planet)
        .service(favorites::delete_favorite_person)
}

/// Construct an Actix HTTP server from the given configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    let server_health_state = health_state.clone();
    let bind_addr = config.bind_addr();

    // Signal handling lives in `main`, which drains the health state
    // before asking the server to stop.
    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .disable_signals()
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "server listening");
    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, StatusCode};
    use actix_web::test as actix_test;

    use crate::inbound::http::sitemap::ROUTES;
    use crate::inbound::http::test_utils::seeded_state;

    fn wired_app() -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<EitherBody<BoxBody>>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        build_app(
            web::Data::new(HealthState::new()),
            web::Data::new(seeded_state()),
        )
    }

    #[actix_web::test]
    async fn cross_origin_requests_are_allowed() {
        let app = actix_test::init_service(wired_app()).await;

        let request = actix_test::TestRequest::get()
            .uri("/people")
            .insert_header((header::ORIGIN, "http://example.com"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[actix_web::test]
    async fn preflight_is_answered_for_mutating_routes() {
        let app = actix_test::init_service(wired_app()).await;

        let request = actix_test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/favorite/planet/1")
            .insert_header((header::ORIGIN, "http://example.com"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert!(response.status().is_success());
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    /// Every advertised route must resolve to a registered handler.
    ///
    /// An unmatched path falls through to the router's default service,
    /// which answers 404 with an empty body; every handler here that
    /// answers 404 does so with a JSON message, so an empty-bodied 404
    /// means the advertised route was never registered.
    #[actix_web::test]
    async fn advertised_routes_are_all_registered() {
        let app = actix_test::init_service(wired_app()).await;

        for entry in ROUTES.iter().copied() {
            let (method, path) = entry.split_once(' ').unwrap_or(("GET", entry));
            let uri = path.replace("{planet_id}", "1").replace("{people_id}", "1");
            let request = actix_test::TestRequest::default()
                .method(method.parse().unwrap_or(actix_web::http::Method::GET))
                .uri(&uri)
                .to_request();

            let response = actix_test::call_service(&app, request).await;
            let status = response.status();
            let body = actix_test::read_body(response).await;
            assert!(
                status != StatusCode::NOT_FOUND || !body.is_empty(),
                "route advertised but not registered: {entry}"
            );
        }
    }
}
