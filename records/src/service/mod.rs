pub mod incoming_mail;
pub mod inventory;
pub mod outgoing_mail;

use serde::{Deserialize, Serialize};

/// Delete outcome shared by all resource kinds. A missing id is a
/// normal `success: false`, never an error.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}
