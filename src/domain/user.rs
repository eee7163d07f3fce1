//! User entity.

use serde::{Deserialize, Serialize};

/// Registered user identified by a unique email.
///
/// The stored password never crosses into the domain; the persistence
/// adapter drops it when mapping rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}
