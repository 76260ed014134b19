//! The donation service.
//!
//! Sits between the HTTP handlers and the record store. It is responsible for:
//! 1.  Hashing passwords on signup and checking them on login.
//! 2.  Writing users, donations and feedback through the injected `RecordStore`.
//! 3.  Reading donation history per recipient address and the feedback list.

use crate::crypto::password::{hash_password, verify_password, PasswordError};
use crate::domain::model::{
    Donation, Feedback, NewDonation, NewFeedback, NewUser, SignupInput, User,
};
use crate::storage::{Collection, RecordStore, StoreError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("user not found")]
    UnknownUser,

    #[error("incorrect password")]
    IncorrectPassword,

    #[error("duplicate record in {0}")]
    Duplicate(Collection),

    #[error(transparent)]
    Store(StoreError),

    #[error(transparent)]
    Password(#[from] PasswordError),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(collection) => ServiceError::Duplicate(collection),
            other => ServiceError::Store(other),
        }
    }
}

pub struct DonationService {
    store: Arc<dyn RecordStore>,
    bcrypt_cost: u32,
}

impl DonationService {
    pub fn new(store: Arc<dyn RecordStore>, bcrypt_cost: u32) -> Self {
        Self { store, bcrypt_cost }
    }

    /// Hashes the password and stores the new user.
    pub async fn signup(&self, input: SignupInput) -> Result<User, ServiceError> {
        let password_hash = hash_password(input.password.clone(), self.bcrypt_cost).await?;
        let user = self
            .store
            .insert_user(NewUser::from_signup(input, password_hash))
            .await?;
        tracing::info!(user_id = user.id, username = %user.username, "user created");
        Ok(user)
    }

    /// Checks a username/password pair. Nothing is issued on success.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, ServiceError> {
        let user = self
            .store
            .find_user_by_username(username)
            .await?
            .ok_or(ServiceError::UnknownUser)?;

        if !verify_password(password.to_string(), user.password_hash.clone()).await? {
            tracing::debug!(username = %user.username, "password mismatch");
            return Err(ServiceError::IncorrectPassword);
        }
        Ok(user)
    }

    /// Records a donation exactly as submitted.
    ///
    /// The transaction hash, amount and recipient are taken on the client's word;
    /// no ledger lookup confirms that the transfer happened.
    pub async fn submit_donation(&self, donation: NewDonation) -> Result<Donation, ServiceError> {
        let donation = self.store.insert_donation(donation).await?;
        tracing::info!(
            donation_id = donation.id,
            tx = %donation.transaction_hash,
            recipient = %donation.recipient_address,
            amount = donation.donation_amount,
            "donation recorded"
        );
        Ok(donation)
    }

    pub async fn transactions_for(&self, address: &str) -> Result<Vec<Donation>, ServiceError> {
        Ok(self.store.find_donations_by_address(address).await?)
    }

    pub async fn submit_feedback(&self, feedback: NewFeedback) -> Result<Feedback, ServiceError> {
        let feedback = self.store.insert_feedback(feedback).await?;
        tracing::info!(feedback_id = feedback.id, "feedback recorded");
        Ok(feedback)
    }

    pub async fn list_feedback(&self) -> Result<Vec<Feedback>, ServiceError> {
        Ok(self.store.list_feedback().await?)
    }

    pub async fn health(&self) -> Result<(), ServiceError> {
        Ok(self.store.ping().await?)
    }
}
