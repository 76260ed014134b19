pub mod app;
pub mod crypto;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{DonationService, ServiceError};
pub use crypto::password::{hash_password, verify_password};
pub use domain::model::{Donation, Feedback, NewDonation, NewFeedback, NewUser, User};
pub use infra::config::{Config, StorageBackend};
pub use storage::{MemoryStore, PgStore, RecordStore, StoreError};
