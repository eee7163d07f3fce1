//! End-to-end favourites lifecycle over an in-memory-backed app.

use std::sync::Arc;

use actix_web::{http::StatusCode, test as actix_test, web, App};
use serde_json::{json, Value};

use starfaves::domain::ports::fixtures::{
    InMemoryFavorites, InMemoryPeople, InMemoryPlanets, InMemoryUsers,
};
use starfaves::domain::{Person, Planet, User};
use starfaves::inbound::http::state::HttpState;
use starfaves::inbound::http::{favorites, people, planets, users};
use starfaves::Trace;

fn seeded_state() -> HttpState {
    HttpState::new(
        Arc::new(InMemoryUsers::new(vec![User {
            id: 1,
            email: "luke@rebellion.org".into(),
            is_active: true,
        }])),
        Arc::new(InMemoryPeople::new(vec![Person {
            id: 1,
            name: "Luke Skywalker".into(),
            gender: "male".into(),
            birth_year: "19BBY".into(),
            eye_color: "blue".into(),
        }])),
        Arc::new(InMemoryPlanets::new(vec![Planet {
            id: 1,
            name: "Tatooine".into(),
            climate: "arid".into(),
            terrain: "desert".into(),
            population: 200_000,
        }])),
        Arc::new(InMemoryFavorites::new()),
    )
}

fn app(
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
        .wrap(Trace)
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

#[actix_web::test]
async fn favourite_lifecycle_post_list_delete() {
    let service = actix_test::init_service(app(seeded_state())).await;
    let body = json!({"email": "luke@rebellion.org"});

    // Empty table answers 404.
    let request = actix_test::TestRequest::get()
        .uri("/users/favorites")
        .to_request();
    let response = actix_test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload: Value = actix_test::read_body_json(response).await;
    assert_eq!(payload, json!({"msg": "No favorites found"}));

    // Favourite the planet and the character.
    for uri in ["/favorite/planet/1", "/favorite/people/1"] {
        let request = actix_test::TestRequest::post()
            .uri(uri)
            .set_json(body.clone())
            .to_request();
        let response = actix_test::call_service(&service, request).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let request = actix_test::TestRequest::get()
        .uri("/users/favorites")
        .to_request();
    let response = actix_test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let payload: Value = actix_test::read_body_json(response).await;
    assert_eq!(payload.as_array().expect("array body").len(), 2);

    // Remove the planet favourite; only the character one remains.
    let request = actix_test::TestRequest::delete()
        .uri("/favorite/planet/1")
        .set_json(body.clone())
        .to_request();
    let response = actix_test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let payload: Value = actix_test::read_body_json(response).await;
    assert_eq!(payload, json!({"msg": "Eliminado con éxito"}));

    let request = actix_test::TestRequest::get()
        .uri("/users/favorites")
        .to_request();
    let response = actix_test::call_service(&service, request).await;
    let payload: Value = actix_test::read_body_json(response).await;
    let remaining = payload.as_array().expect("array body");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].get("people_id"), Some(&json!(1)));

    // Deleting again misses.
    let request = actix_test::TestRequest::delete()
        .uri("/favorite/planet/1")
        .set_json(body)
        .to_request();
    let response = actix_test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload: Value = actix_test::read_body_json(response).await;
    assert_eq!(payload, json!({"msg": "No existe el planeta favorito"}));
}

#[actix_web::test]
async fn responses_carry_trace_ids() {
    let service = actix_test::init_service(app(seeded_state())).await;

    let request = actix_test::TestRequest::get().uri("/people").to_request();
    let response = actix_test::call_service(&service, request).await;
    assert!(response.headers().contains_key("trace-id"));
}
