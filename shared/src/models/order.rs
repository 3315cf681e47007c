//! Order Model
//!
//! Outbound submission payload and inbound history records.

use serde::{Deserialize, Serialize};

/// Table label used when the staff left the table input blank
pub const FALLBACK_TABLE: &str = "TBD";

/// One ordered line in a submission payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemPayload {
    pub code: String,
    pub quantity: u32,
}

/// Order write request body: `POST /api/orders`
///
/// A snapshot of the cart at submission time, not a live reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub table: String,
    #[serde(default)]
    pub notes: String,
    pub items: Vec<OrderItemPayload>,
}

impl OrderPayload {
    /// Build a payload, substituting the fallback table label for blank input
    pub fn new(table: &str, notes: &str, items: Vec<OrderItemPayload>) -> Self {
        let table = table.trim();
        Self {
            table: if table.is_empty() {
                FALLBACK_TABLE.to_string()
            } else {
                table.to_string()
            },
            notes: notes.to_string(),
            items,
        }
    }
}

/// Item detail inside a history record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecordItem {
    #[serde(default)]
    pub name: String,
    pub quantity: u32,
    #[serde(default, rename = "lineTotal")]
    pub line_total: f64,
}

/// Accepted order as returned by the history collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: String,
    pub table: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub total: f64,
    /// Display-formatted timestamp, e.g. "Aug 29 12:41"
    #[serde(rename = "placedAt")]
    pub placed_at: String,
    #[serde(default)]
    pub items: Vec<OrderRecordItem>,
}

/// History read response: `GET /api/orders`
///
/// The `orders` field may be absent entirely; absent means empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
}
