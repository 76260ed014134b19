use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct Feedback {
    #[serde(rename = "_id")]
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewFeedback {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl NewFeedback {
    pub(crate) fn into_record(self, id: i64) -> Feedback {
        Feedback {
            id,
            name: self.name,
            email: self.email,
            message: self.message,
        }
    }
}
