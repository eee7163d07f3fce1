//! Repository ports implemented by outbound persistence adapters.
//!
//! "Not found" is never an error here: lookups return `Ok(None)` or an empty
//! vec, and only connectivity or query execution failures surface as
//! [`RepositoryError`].

mod favorite_repository;
pub mod fixtures;
mod people_repository;
mod planet_repository;
mod user_repository;

pub use favorite_repository::FavoriteRepository;
pub use people_repository::PeopleRepository;
pub use planet_repository::PlanetRepository;
pub use user_repository::UserRepository;

/// Persistence errors raised by repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// Store connection could not be established or checked out.
    #[error("store connection failed: {message}")]
    Connection { message: String },

    /// Query or mutation failed during execution.
    #[error("store query failed: {message}")]
    Query { message: String },
}

impl RepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}
