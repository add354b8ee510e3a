pub mod auth;
pub mod entities;
pub mod error;
pub mod repository;
pub mod serde_ext;
pub mod validation;
