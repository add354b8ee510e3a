pub mod auth;
pub mod healthcheck;
pub mod incoming_mail;
pub mod inventory;
pub mod outgoing_mail;
