//! Favourites API handlers.
//!
//! ```text
//! POST   /favorite/planet/{planet_id}  {"email":"luke@rebellion.org"}
//! POST   /favorite/people/{people_id}  {"email":"luke@rebellion.org"}
//! DELETE /favorite/planet/{planet_id}  {"email":"luke@rebellion.org"}
//! DELETE /favorite/people/{people_id}  {"email":"luke@rebellion.org"}
//! ```
//!
//! Each handler is a single pass: resolve the acting user by email, check
//! the target exists, then perform one insert or delete. A missing or
//! malformed body resolves to an absent user and takes the same 404 path
//! an unknown email does.

use actix_web::{delete, post, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{Error, Favorite, FavoriteTarget, NewFavorite, User};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Mutation request body. The email identifies the acting user.
#[derive(Debug, Deserialize)]
pub struct FavoriteRequest {
    pub email: Option<String>,
}

/// Resolve the acting user from the optional request body.
async fn acting_user(
    state: &HttpState,
    payload: Option<web::Json<FavoriteRequest>>,
) -> Result<User, Error> {
    let email = payload
        .and_then(|body| body.into_inner().email)
        .unwrap_or_default();
    state
        .users
        .find_by_email(&email)
        .await?
        .ok_or_else(|| Error::missing("No existe el usuario"))
}

async fn resolve_planet_target(state: &HttpState, planet_id: i32) -> Result<FavoriteTarget, Error> {
    let planet = state
        .planets
        .find_by_id(planet_id)
        .await?
        .ok_or_else(|| Error::missing("No existe el planeta"))?;
    Ok(FavoriteTarget::Planet(planet.id))
}

async fn resolve_people_target(state: &HttpState, people_id: i32) -> Result<FavoriteTarget, Error> {
    let person = state
        .people
        .find_by_id(people_id)
        .await?
        .ok_or_else(|| Error::missing("No existe el personaje"))?;
    Ok(FavoriteTarget::People(person.id))
}

/// Mark a planet as a favourite of the user named in the body.
///
/// Never deduplicates: posting twice creates two rows.
#[post("/favorite/planet/{planet_id}")]
pub async fn add_favorite_planet(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: Option<web::Json<FavoriteRequest>>,
) -> ApiResult<web::Json<Favorite>> {
    let planet_id = path.into_inner();
    let user = acting_user(&state, payload).await?;
    let target = resolve_planet_target(&state, planet_id).await?;

    let favorite = state
        .favorites
        .insert(NewFavorite {
            user_id: user.id,
            target,
        })
        .await?;
    Ok(web::Json(favorite))
}

/// Mark a character as a favourite of the user named in the body.
#[post("/favorite/people/{people_id}")]
pub async fn add_favorite_person(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: Option<web::Json<FavoriteRequest>>,
) -> ApiResult<web::Json<Favorite>> {
    let people_id = path.into_inner();
    let user = acting_user(&state, payload).await?;
    let target = resolve_people_target(&state, people_id).await?;

    let favorite = state
        .favorites
        .insert(NewFavorite {
            user_id: user.id,
            target,
        })
        .await?;
    Ok(web::Json(favorite))
}

fn deleted_response() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "msg": "Eliminado con éxito" }))
}

/// Remove the user's favourite for the given planet.
///
/// Removes the first matching row only; remaining duplicates survive.
#[delete("/favorite/planet/{planet_id}")]
pub async fn delete_favorite_planet(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: Option<web::Json<FavoriteRequest>>,
) -> ApiResult<HttpResponse> {
    let planet_id = path.into_inner();
    let user = acting_user(&state, payload).await?;
    let target = resolve_planet_target(&state, planet_id).await?;

    let favorite = state
        .favorites
        .find_match(user.id, target)
        .await?
        .ok_or_else(|| Error::missing("No existe el planeta favorito"))?;
    state.favorites.delete(favorite.id).await?;
    Ok(deleted_response())
}

/// Remove the user's favourite for the given character.
#[delete("/favorite/people/{people_id}")]
pub async fn delete_favorite_person(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: Option<web::Json<FavoriteRequest>>,
) -> ApiResult<HttpResponse> {
    let people_id = path.into_inner();
    let user = acting_user(&state, payload).await?;
    let target = resolve_people_target(&state, people_id).await?;

    let favorite = state
        .favorites
        .find_match(user.id, target)
        .await?
        .ok_or_else(|| Error::missing("No existe el personaje favorito"))?;
    state.favorites.delete(favorite.id).await?;
    Ok(deleted_response())
}
