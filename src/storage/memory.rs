//! Process-local `RecordStore` with the same uniqueness rules as the Postgres tables.
//!
//! Selected with `DATABASE_URL=memory://`. Nothing survives a restart.

use crate::domain::model::{Donation, Feedback, NewDonation, NewFeedback, NewUser, User};
use crate::storage::{Collection, RecordStore, StoreError};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Collections {
    users: Vec<User>,
    donations: Vec<Donation>,
    feedback: Vec<Feedback>,
    last_id: i64,
}

impl Collections {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_count(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn donation_count(&self) -> usize {
        self.inner.read().await.donations.len()
    }

    pub async fn feedback_count(&self) -> usize {
        self.inner.read().await.feedback.len()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.users.iter().any(|u| u.username == user.username) {
            return Err(StoreError::Duplicate(Collection::Users));
        }
        let record = User {
            id: inner.next_id(),
            username: user.username,
            password_hash: user.password_hash,
            aadhar: user.aadhar,
            email: user.email,
            phone: user.phone,
            created_at: Utc::now(),
        };
        inner.users.push(record.clone());
        Ok(record)
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.username == username).cloned())
    }

    async fn insert_donation(&self, donation: NewDonation) -> Result<Donation, StoreError> {
        let mut inner = self.inner.write().await;
        if inner
            .donations
            .iter()
            .any(|d| d.transaction_hash == donation.transaction_hash)
        {
            return Err(StoreError::Duplicate(Collection::Donations));
        }
        let id = inner.next_id();
        let record = donation.into_record(id);
        inner.donations.push(record.clone());
        Ok(record)
    }

    async fn find_donations_by_address(&self, address: &str) -> Result<Vec<Donation>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .donations
            .iter()
            .filter(|d| d.recipient_address == address)
            .cloned()
            .collect())
    }

    async fn insert_feedback(&self, feedback: NewFeedback) -> Result<Feedback, StoreError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id();
        let record = feedback.into_record(id);
        inner.feedback.push(record.clone());
        Ok(record)
    }

    async fn list_feedback(&self) -> Result<Vec<Feedback>, StoreError> {
        Ok(self.inner.read().await.feedback.clone())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn donation(hash: &str, recipient: &str) -> NewDonation {
        NewDonation {
            transaction_hash: hash.to_string(),
            sender_address: "0xsender".to_string(),
            recipient_address: recipient.to_string(),
            donation_amount: 0.01,
            timestamp: Utc.with_ymd_and_hms(2024, 10, 19, 8, 30, 0).unwrap(),
        }
    }

    fn user(name: &str) -> NewUser {
        NewUser {
            username: name.to_string(),
            password_hash: "$2b$04$hash".to_string(),
            aadhar: "1234".to_string(),
            email: "a@x.com".to_string(),
            phone: "555".to_string(),
        }
    }

    #[tokio::test]
    async fn usernames_are_unique() {
        let store = MemoryStore::new();
        let alice = store.insert_user(user("alice")).await.unwrap();
        assert_eq!(alice.username, "alice");

        let err = store.insert_user(user("alice")).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(Collection::Users)));
        assert_eq!(store.user_count().await, 1);

        let found = store.find_user_by_username("alice").await.unwrap();
        assert_eq!(found, Some(alice));
        assert!(store.find_user_by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn donations_filter_by_recipient_and_reject_reused_hash() {
        let store = MemoryStore::new();
        store.insert_donation(donation("0xaa", "0xtemple1")).await.unwrap();
        store.insert_donation(donation("0xbb", "0xtemple2")).await.unwrap();
        store.insert_donation(donation("0xcc", "0xtemple1")).await.unwrap();

        let err = store.insert_donation(donation("0xaa", "0xtemple2")).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(Collection::Donations)));

        let hashes: Vec<String> = store
            .find_donations_by_address("0xtemple1")
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.transaction_hash)
            .collect();
        assert_eq!(hashes, vec!["0xaa", "0xcc"]);
        assert!(store.find_donations_by_address("0xnobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn feedback_lists_in_insertion_order() {
        let store = MemoryStore::new();
        assert!(store.list_feedback().await.unwrap().is_empty());

        for name in ["first", "second"] {
            store
                .insert_feedback(NewFeedback {
                    name: name.to_string(),
                    email: "f@x.com".to_string(),
                    message: "thanks".to_string(),
                })
                .await
                .unwrap();
        }
        let names: Vec<String> = store
            .list_feedback()
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}
