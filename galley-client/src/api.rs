//! Collaborator API surface
//!
//! `OrderApi` is the seam between the session logic and the network:
//! the session is generic over it, so tests substitute an in-memory
//! implementation and never open a socket.

use async_trait::async_trait;

use crate::{ClientResult, HttpClient};
use shared::models::{HistoryResponse, MenuCategory, MenuResponse, OrderPayload, OrderRecord};

/// Access to the three backend collaborators
#[async_trait]
pub trait OrderApi {
    /// Fetch the full categorized menu
    async fn fetch_menu(&self) -> ClientResult<Vec<MenuCategory>>;

    /// Submit an order for preparation
    async fn submit_order(&self, payload: &OrderPayload) -> ClientResult<()>;

    /// Fetch recent accepted orders, newest first
    async fn fetch_history(&self) -> ClientResult<Vec<OrderRecord>>;
}

#[async_trait]
impl OrderApi for HttpClient {
    async fn fetch_menu(&self) -> ClientResult<Vec<MenuCategory>> {
        let response: MenuResponse = self.get("/api/menu").await?;
        tracing::debug!(categories = response.categories.len(), "Menu loaded");
        Ok(response.categories)
    }

    async fn submit_order(&self, payload: &OrderPayload) -> ClientResult<()> {
        self.post_json("/api/orders", payload).await?;
        tracing::info!(table = %payload.table, items = payload.items.len(), "Order submitted");
        Ok(())
    }

    async fn fetch_history(&self) -> ClientResult<Vec<OrderRecord>> {
        // `orders` may be absent in the response; absent means empty
        let response: HistoryResponse = self.get("/api/orders").await?;
        Ok(response.orders)
    }
}
