//! Record types for the three collections: users, donations and feedback.
//!
//! The collections are independent. A donation is associated with a temple
//! only through its `recipient_address` string.

pub mod donation;
pub mod feedback;
pub mod user;

pub use donation::{Donation, NewDonation};
pub use feedback::{Feedback, NewFeedback};
pub use user::{NewUser, SignupInput, User};
