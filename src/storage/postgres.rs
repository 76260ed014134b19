//! `RecordStore` implementation using PostgreSQL.

use crate::domain::model::{Donation, Feedback, NewDonation, NewFeedback, NewUser, User};
use crate::storage::{Collection, RecordStore, StoreError};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

const UNIQUE_VIOLATION: &str = "23505";

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        aadhar TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )",
    "CREATE TABLE IF NOT EXISTS donations (
        id BIGSERIAL PRIMARY KEY,
        transaction_hash TEXT NOT NULL UNIQUE,
        sender_address TEXT NOT NULL,
        recipient_address TEXT NOT NULL,
        donation_amount DOUBLE PRECISION NOT NULL,
        donated_at TIMESTAMPTZ NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS feedback (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        message TEXT NOT NULL
    )",
];

/// Number of records per collection, reported by the preflight binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionCounts {
    pub users: i64,
    pub donations: i64,
    pub feedback: i64,
}

/// A record store backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connects to the database and creates the tables if they don't exist yet.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn collection_counts(&self) -> Result<CollectionCounts, StoreError> {
        let (users, donations, feedback): (i64, i64, i64) = sqlx::query_as(
            "SELECT
                (SELECT COUNT(*) FROM users),
                (SELECT COUNT(*) FROM donations),
                (SELECT COUNT(*) FROM feedback)",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(CollectionCounts {
            users,
            donations,
            feedback,
        })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Maps a unique-constraint violation onto `StoreError::Duplicate`.
fn insert_error(collection: Collection, err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return StoreError::Duplicate(collection);
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl RecordStore for PgStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password_hash, aadhar, email, phone)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, username, password_hash, aadhar, email, phone, created_at",
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.aadhar)
        .bind(&user.email)
        .bind(&user.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| insert_error(Collection::Users, e))
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, aadhar, email, phone, created_at
             FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn insert_donation(&self, donation: NewDonation) -> Result<Donation, StoreError> {
        sqlx::query_as::<_, Donation>(
            "INSERT INTO donations
                (transaction_hash, sender_address, recipient_address, donation_amount, donated_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, transaction_hash, sender_address, recipient_address, donation_amount, donated_at",
        )
        .bind(&donation.transaction_hash)
        .bind(&donation.sender_address)
        .bind(&donation.recipient_address)
        .bind(donation.donation_amount)
        .bind(donation.timestamp)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| insert_error(Collection::Donations, e))
    }

    async fn find_donations_by_address(&self, address: &str) -> Result<Vec<Donation>, StoreError> {
        let donations = sqlx::query_as::<_, Donation>(
            "SELECT id, transaction_hash, sender_address, recipient_address, donation_amount, donated_at
             FROM donations WHERE recipient_address = $1
             ORDER BY id",
        )
        .bind(address)
        .fetch_all(&self.pool)
        .await?;
        Ok(donations)
    }

    async fn insert_feedback(&self, feedback: NewFeedback) -> Result<Feedback, StoreError> {
        sqlx::query_as::<_, Feedback>(
            "INSERT INTO feedback (name, email, message)
             VALUES ($1, $2, $3)
             RETURNING id, name, email, message",
        )
        .bind(&feedback.name)
        .bind(&feedback.email)
        .bind(&feedback.message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| insert_error(Collection::Feedback, e))
    }

    async fn list_feedback(&self) -> Result<Vec<Feedback>, StoreError> {
        let feedback = sqlx::query_as::<_, Feedback>(
            "SELECT id, name, email, message FROM feedback ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(feedback)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
