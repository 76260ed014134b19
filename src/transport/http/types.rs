use crate::app::DonationService;
use crate::domain::model::{NewDonation, NewFeedback, SignupInput};
use crate::domain::validation::{
    parse_amount, parse_timestamp, required, required_value, ValidationError,
};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<DonationService>,
}

impl AppState {
    pub fn new(service: DonationService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

// Request bodies keep every field optional so a missing field is reported as
// 400 "All fields are required" rather than a deserialization failure.

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct SignupRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub aadhar: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl SignupRequest {
    pub fn into_input(self) -> Result<SignupInput, ValidationError> {
        Ok(SignupInput {
            username: required(self.username)?,
            password: required(self.password)?,
            aadhar: required(self.aadhar)?,
            email: required(self.email)?,
            phone: required(self.phone)?,
        })
    }
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonationRequest {
    pub transaction_hash: Option<String>,
    pub sender_address: Option<String>,
    pub recipient_address: Option<String>,
    /// Number or numeric string, e.g. `"0.01"`.
    #[schema(value_type = Option<String>, example = "0.01")]
    pub donation_amount: Option<JsonValue>,
    /// RFC 3339 string or epoch milliseconds.
    #[schema(value_type = Option<String>, example = "2024-10-19T08:30:00.000Z")]
    pub timestamp: Option<JsonValue>,
}

impl DonationRequest {
    pub fn into_new_donation(self) -> Result<NewDonation, ValidationError> {
        let transaction_hash = required(self.transaction_hash)?;
        let sender_address = required(self.sender_address)?;
        let recipient_address = required(self.recipient_address)?;
        let amount = required_value(self.donation_amount)?;
        let timestamp = required_value(self.timestamp)?;

        Ok(NewDonation {
            transaction_hash,
            sender_address,
            recipient_address,
            donation_amount: parse_amount(&amount)?,
            timestamp: parse_timestamp(&timestamp)?,
        })
    }
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct FeedbackRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FeedbackRequest {
    pub fn into_new_feedback(self) -> Result<NewFeedback, ValidationError> {
        Ok(NewFeedback {
            name: required(self.name)?,
            email: required(self.email)?,
            message: required(self.message)?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn donation_body() -> serde_json::Value {
        json!({
            "transactionHash": "0xabc",
            "senderAddress": "0xsender",
            "recipientAddress": "0x3D0a7b23B0b245203CfB39af68e62E6A915DcAaF",
            "donationAmount": "0.01",
            "timestamp": "2024-10-19T08:30:00.000Z"
        })
    }

    #[test]
    fn donation_request_uses_camel_case_fields() {
        let request: DonationRequest = serde_json::from_value(donation_body()).unwrap();
        let donation = request.into_new_donation().unwrap();
        assert_eq!(donation.transaction_hash, "0xabc");
        assert_eq!(donation.donation_amount, 0.01);
    }

    #[test]
    fn each_missing_donation_field_is_rejected() {
        for field in [
            "transactionHash",
            "senderAddress",
            "recipientAddress",
            "donationAmount",
            "timestamp",
        ] {
            let mut body = donation_body();
            body.as_object_mut().unwrap().remove(field);
            let request: DonationRequest = serde_json::from_value(body).unwrap();
            assert_eq!(
                request.into_new_donation().unwrap_err(),
                ValidationError::MissingFields,
                "field {field}"
            );
        }
    }

    #[test]
    fn unparseable_amount_is_not_a_missing_field() {
        let mut body = donation_body();
        body["donationAmount"] = json!("a lot");
        let request: DonationRequest = serde_json::from_value(body).unwrap();
        assert_eq!(
            request.into_new_donation().unwrap_err(),
            ValidationError::InvalidAmount
        );
    }

    #[test]
    fn signup_with_empty_field_is_rejected() {
        let request = SignupRequest {
            username: Some("alice".into()),
            password: Some("pw123".into()),
            aadhar: Some(String::new()),
            email: Some("a@x.com".into()),
            phone: Some("555".into()),
        };
        assert_eq!(request.into_input().unwrap_err(), ValidationError::MissingFields);
    }
}
