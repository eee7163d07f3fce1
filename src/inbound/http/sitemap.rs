//! Root route listing the registered endpoints as a JSON array.

use actix_web::{get, web};

/// Registered method + path pairs, in registration order.
pub const ROUTES: &[&str] = &[
    "GET /",
    "GET /health/live",
    "GET /health/ready",
    "GET /people",
    "GET /people/{people_id}",
    "GET /planets",
    "GET /planets/{planet_id}",
    "GET /users",
    "GET /users/favorites",
    "POST /favorite/planet/{planet_id}",
    "POST /favorite/people/{people_id}",
    "DELETE /favorite/planet/{planet_id}",
    "DELETE /favorite/people/{people_id}",
];

/// List every registered route.
#[get("/")]
pub async fn sitemap() -> web::Json<Vec<&'static str>> {
    web::Json(ROUTES.to_vec())
}
