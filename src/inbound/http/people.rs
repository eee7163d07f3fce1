//! People API handlers.
//!
//! ```text
//! GET /people
//! GET /people/{people_id}
//! ```

use actix_web::{get, web};

use crate::domain::{Error, Person};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// List every character.
#[get("/people")]
pub async fn list_people(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Person>>> {
    let people = state.people.find_all().await?;
    Ok(web::Json(people))
}

/// Fetch one character by id.
#[get("/people/{people_id}")]
pub async fn get_person(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Person>> {
    let people_id = path.into_inner();
    let person = state
        .people
        .find_by_id(people_id)
        .await?
        .ok_or_else(|| Error::not_found("Person not found"))?;
    Ok(web::Json(person))
}
