//! Shared types for the Galley ordering client
//!
//! Wire models for the menu, order and history collaborator contracts,
//! plus small display utilities used across crates.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
