use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A donation as recorded after the client saw its transfer confirmed.
///
/// `transaction_hash` and `donation_amount` come straight from the client and
/// are not checked against the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    #[serde(rename = "_id")]
    pub id: i64,
    pub transaction_hash: String,
    pub sender_address: String,
    pub recipient_address: String,
    pub donation_amount: f64,
    #[sqlx(rename = "donated_at")]
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDonation {
    pub transaction_hash: String,
    pub sender_address: String,
    pub recipient_address: String,
    pub donation_amount: f64,
    pub timestamp: DateTime<Utc>,
}

impl NewDonation {
    pub(crate) fn into_record(self, id: i64) -> Donation {
        Donation {
            id,
            transaction_hash: self.transaction_hash,
            sender_address: self.sender_address,
            recipient_address: self.recipient_address,
            donation_amount: self.donation_amount,
            timestamp: self.timestamp,
        }
    }
}
