use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::repository::Entity;

use super::wire_timestamp;

// `letter_date` is a calendar date with no time component; `NaiveDate`
// serializes as `YYYY-MM-DD`, so the date survives any reader timezone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMail {
    pub id: i64,
    pub sender: String,
    pub letter_date: NaiveDate,
    pub letter_number: String,
    pub subject: String,
    pub attachment_label: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Entity for IncomingMail {
    const COLLECTION: &'static str = "incoming_mail";

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
pub struct PublicIncomingMail {
    pub id: i64,
    pub sender: String,
    pub letter_date: NaiveDate,
    pub letter_number: String,
    pub subject: String,
    pub attachment_label: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<IncomingMail> for PublicIncomingMail {
    fn from(mail: IncomingMail) -> Self {
        Self {
            id: mail.id,
            sender: mail.sender,
            letter_date: mail.letter_date,
            letter_number: mail.letter_number,
            subject: mail.subject,
            attachment_label: mail.attachment_label,
            created_at: wire_timestamp(mail.created_at),
            updated_at: wire_timestamp(mail.updated_at),
        }
    }
}
