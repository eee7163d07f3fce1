//! Favourite join entity.
//!
//! A favourite links a user to exactly one planet or one person. The wire
//! format keeps the historic flat shape with both foreign-key columns
//! (`planet_id`, `people_id`, one of them null); the domain type keeps a
//! tagged variant so the "both set" and "neither set" states are
//! unrepresentable.

use serde::{Deserialize, Serialize};

/// The single planet or person a favourite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i32),
    People(i32),
}

impl FavoriteTarget {
    /// Planet id when the target is a planet.
    pub fn planet_id(self) -> Option<i32> {
        match self {
            Self::Planet(id) => Some(id),
            Self::People(_) => None,
        }
    }

    /// Person id when the target is a person.
    pub fn people_id(self) -> Option<i32> {
        match self {
            Self::People(id) => Some(id),
            Self::Planet(_) => None,
        }
    }
}

/// Violation of the exactly-one-target rule in incoming data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FavoriteShapeError {
    #[error("favourite must reference exactly one of planet or person, got both")]
    BothTargets,
    #[error("favourite must reference exactly one of planet or person, got neither")]
    NoTarget,
}

/// Persisted favourite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "FavoriteDto", try_from = "FavoriteDto")]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub target: FavoriteTarget,
}

/// Favourite awaiting insertion; the store assigns the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewFavorite {
    pub user_id: i32,
    pub target: FavoriteTarget,
}

/// Wire shape: flat columns with nullable foreign keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FavoriteDto {
    id: i32,
    user_id: i32,
    planet_id: Option<i32>,
    people_id: Option<i32>,
}

impl From<Favorite> for FavoriteDto {
    fn from(value: Favorite) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            planet_id: value.target.planet_id(),
            people_id: value.target.people_id(),
        }
    }
}

impl TryFrom<FavoriteDto> for Favorite {
    type Error = FavoriteShapeError;

    fn try_from(value: FavoriteDto) -> Result<Self, Self::Error> {
        let target = match (value.planet_id, value.people_id) {
            (Some(planet_id), None) => FavoriteTarget::Planet(planet_id),
            (None, Some(people_id)) => FavoriteTarget::People(people_id),
            (Some(_), Some(_)) => return Err(FavoriteShapeError::BothTargets),
            (None, None) => return Err(FavoriteShapeError::NoTarget),
        };

        Ok(Self {
            id: value.id,
            user_id: value.user_id,
            target,
        })
    }
}
