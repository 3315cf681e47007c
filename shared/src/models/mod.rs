//! Wire models for the collaborator contracts

pub mod menu;
pub mod order;

pub use menu::{MenuCategory, MenuItem, MenuResponse};
pub use order::{
    HistoryResponse, OrderItemPayload, OrderPayload, OrderRecord, OrderRecordItem,
};
