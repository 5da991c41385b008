//! Owner account model.

use serde::Serialize;
use sqlx::FromRow;

use hauler_core::types::{DbId, Timestamp};

/// A row from the `users` table.
///
/// The password hash is a PHC-formatted Argon2id string and is never
/// serialized into API responses.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// Public user info safe to embed in API responses.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        UserInfo {
            id: user.id,
            username: user.username.clone(),
        }
    }
}
