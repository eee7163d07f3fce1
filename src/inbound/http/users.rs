//! Users API handlers.
//!
//! ```text
//! GET /users
//! GET /users/favorites
//! ```

use actix_web::{get, web};

use crate::domain::{Error, Favorite, User};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// List every user.
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.find_all().await?;
    Ok(web::Json(users))
}

/// List every favourite across all users.
///
/// An empty table answers 404 rather than an empty array; clients have
/// always keyed off that.
#[get("/users/favorites")]
pub async fn list_favorites(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Favorite>>> {
    let favorites = state.favorites.find_all().await?;
    if favorites.is_empty() {
        return Err(Error::missing("No favorites found"));
    }
    Ok(web::Json(favorites))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test as actix_test};
    use serde_json::Value;

    use crate::inbound::http::test_utils::{seeded_state, test_app};

    #[actix_web::test]
    async fn list_users_serialises_without_password() {
        let app = actix_test::init_service(test_app(seeded_state())).await;

        let request = actix_test::TestRequest::get().uri("/users").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(response).await;
        let users = body.as_array().expect("array body");
        assert_eq!(users.len(), 1);
        assert_eq!(
            users[0],
            serde_json::json!({"id": 1, "email": "luke@rebellion.org", "is_active": true})
        );
    }

    #[actix_web::test]
    async fn list_favorites_on_empty_table_returns_exact_404_body() {
        let app = actix_test::init_service(test_app(seeded_state())).await;

        let request = actix_test::TestRequest::get()
            .uri("/users/favorites")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, serde_json::json!({"msg": "No favorites found"}));
    }

    #[actix_web::test]
    async fn list_favorites_returns_rows_once_one_exists() {
        let app = actix_test::init_service(test_app(seeded_state())).await;

        let post = actix_test::TestRequest::post()
            .uri("/favorite/planet/1")
            .set_json(serde_json::json!({"email": "luke@rebellion.org"}))
            .to_request();
        let created = actix_test::call_service(&app, post).await;
        assert_eq!(created.status(), StatusCode::OK);

        let request = actix_test::TestRequest::get()
            .uri("/users/favorites")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.as_array().expect("array body").len(), 1);
    }
}
