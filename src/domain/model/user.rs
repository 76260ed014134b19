use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A registered account as persisted in the `users` collection.
///
/// Never serialized to clients; login only reports success or failure.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// bcrypt hash, never the submitted plaintext.
    pub password_hash: String,
    pub aadhar: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

/// Signup data after presence checks; the password is still plaintext here.
#[derive(Debug, Clone)]
pub struct SignupInput {
    pub username: String,
    pub password: String,
    pub aadhar: String,
    pub email: String,
    pub phone: String,
}

/// A user ready for insertion. `created_at` is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub aadhar: String,
    pub email: String,
    pub phone: String,
}

impl NewUser {
    pub fn from_signup(input: SignupInput, password_hash: String) -> Self {
        Self {
            username: input.username,
            password_hash,
            aadhar: input.aadhar,
            email: input.email,
            phone: input.phone,
        }
    }
}
