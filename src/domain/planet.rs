//! Planet reference entity.

use serde::{Deserialize, Serialize};

/// Pre-seeded planet record. Read-only through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub population: i64,
}
