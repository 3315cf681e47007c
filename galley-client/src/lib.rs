//! Galley Client - HTTP access to the ordering backend
//!
//! Provides network-based HTTP calls to the menu, order-write and
//! order-history collaborators.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::OrderApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::models::{MenuCategory, OrderPayload, OrderRecord};
