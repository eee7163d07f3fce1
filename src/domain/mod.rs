//! Domain entities, errors, and repository ports.

pub mod error;
pub mod favorite;
pub mod people;
pub mod planet;
pub mod ports;
pub mod user;

pub use error::Error;
pub use favorite::{Favorite, FavoriteShapeError, FavoriteTarget, NewFavorite};
pub use people::Person;
pub use planet::Planet;
pub use user::User;
