//! PostgreSQL persistence adapters built on Diesel and diesel-async.

mod diesel_favorite_repository;
mod diesel_people_repository;
mod diesel_planet_repository;
mod diesel_user_repository;
mod error_mapping;
mod models;
pub mod pool;
pub mod schema;

pub use diesel_favorite_repository::DieselFavoriteRepository;
pub use diesel_people_repository::DieselPeopleRepository;
pub use diesel_planet_repository::DieselPlanetRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
