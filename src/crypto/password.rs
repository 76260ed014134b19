// Password hashing for stored credentials.
//
// bcrypt is deliberately slow, so both hashing and verification run on the
// blocking thread pool instead of an async worker.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("password task did not complete: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Hashes `plain` with a fresh salt at the given bcrypt cost.
pub async fn hash_password(plain: String, cost: u32) -> Result<String, PasswordError> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(plain, cost)).await??;
    Ok(hashed)
}

/// Checks `plain` against a stored bcrypt hash.
///
/// A malformed stored hash is an error, not a mismatch.
pub async fn verify_password(plain: String, hashed: String) -> Result<bool, PasswordError> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(plain, &hashed)).await??;
    Ok(matches)
}
