use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::repository::Entity;

use super::wire_timestamp;

/// Same shape as `IncomingMail` with `recipient` in place of `sender`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutgoingMail {
    pub id: i64,
    pub recipient: String,
    pub letter_date: NaiveDate,
    pub letter_number: String,
    pub subject: String,
    pub attachment_label: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Entity for OutgoingMail {
    const COLLECTION: &'static str = "outgoing_mail";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn set_timestamps(&mut self, at: i64) {
        self.created_at = at;
        self.updated_at = at;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicOutgoingMail {
    pub id: i64,
    pub recipient: String,
    pub letter_date: NaiveDate,
    pub letter_number: String,
    pub subject: String,
    pub attachment_label: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<OutgoingMail> for PublicOutgoingMail {
    fn from(mail: OutgoingMail) -> Self {
        Self {
            id: mail.id,
            recipient: mail.recipient,
            letter_date: mail.letter_date,
            letter_number: mail.letter_number,
            subject: mail.subject,
            attachment_label: mail.attachment_label,
            created_at: wire_timestamp(mail.created_at),
            updated_at: wire_timestamp(mail.updated_at),
        }
    }
}
