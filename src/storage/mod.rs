//! Persistence layer: one trait over the users, donations and feedback collections.

use crate::domain::model::{Donation, Feedback, NewDonation, NewFeedback, NewUser, User};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// The stored collections, used to name the target of a failed write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Users,
    Donations,
    Feedback,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Collection::Users => "users",
            Collection::Donations => "donations",
            Collection::Feedback => "feedback",
        })
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint (username, transaction hash) rejected the insert.
    #[error("duplicate record in {0}")]
    Duplicate(Collection),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Insert-one and find are the only access patterns; there are no updates or deletes.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError>;

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    async fn insert_donation(&self, donation: NewDonation) -> Result<Donation, StoreError>;

    /// Donations whose recipient address equals `address` exactly, oldest first.
    async fn find_donations_by_address(&self, address: &str) -> Result<Vec<Donation>, StoreError>;

    async fn insert_feedback(&self, feedback: NewFeedback) -> Result<Feedback, StoreError>;

    /// All feedback in insertion order.
    async fn list_feedback(&self) -> Result<Vec<Feedback>, StoreError>;

    /// Cheap round-trip used by the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}
