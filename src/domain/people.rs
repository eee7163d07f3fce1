//! Person (character) reference entity.

use serde::{Deserialize, Serialize};

/// Pre-seeded character record. Read-only through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub gender: String,
    pub birth_year: String,
    pub eye_color: String,
}
