pub mod incoming_mail;
pub mod inventory;
pub mod outgoing_mail;

use chrono::{DateTime, Utc};

// Stored timestamps are microseconds; the wire carries RFC 3339.
pub(crate) fn wire_timestamp(micros: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_micros(micros).unwrap_or_default()
}
