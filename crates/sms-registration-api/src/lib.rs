//! SMS-driven user registration service.
//!
//! Receives inbound Telnyx SMS webhook events and registers the sender as a
//! user on first contact, alongside a manual registration endpoint. State
//! lives in a single-file SQLite database created on startup.

pub mod api;
pub mod config;
pub mod error;
pub mod store;

pub use config::Config;
pub use error::ApiError;
pub use store::{NewUser, StoreError, User, UserStore};
