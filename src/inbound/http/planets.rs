//! Planets API handlers.
//!
//! ```text
//! GET /planets
//! GET /planets/{planet_id}
//! ```

use actix_web::{get, web};

use crate::domain::{Error, Planet};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// List every planet.
#[get("/planets")]
pub async fn list_planets(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Planet>>> {
    let planets = state.planets.find_all().await?;
    Ok(web::Json(planets))
}

/// Fetch one planet by id.
#[get("/planets/{planet_id}")]
pub async fn get_planet(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Planet>> {
    let planet_id = path.into_inner();
    let planet = state
        .planets
        .find_by_id(planet_id)
        .await?
        .ok_or_else(|| Error::not_found("Planet not found"))?;
    Ok(web::Json(planet))
}
