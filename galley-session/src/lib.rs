//! Galley Session - order session management
//!
//! Holds the in-memory cart, derives the price summary, and mediates
//! order submission and history refresh against the backend. A
//! presentation layer renders from the session's state and invokes its
//! command methods; the session itself never touches a UI toolkit.

pub mod cart;
pub mod error;
pub mod session;

pub use cart::{Cart, CartLine, OrderSummary, TAX_RATE};
pub use error::{SessionError, SessionResult};
pub use session::{HistoryOutcome, OrderSession, DEFAULT_TABLE};
