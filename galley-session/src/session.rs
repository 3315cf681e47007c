//! Order session management
//!
//! `OrderSession` is the single owner of all mutable ordering state for
//! one staff session: the cached menu, the active category, the cart,
//! the table/notes inputs and the recent-order history. Every backend
//! interaction is an async command that converts collaborator failures
//! into typed outcomes at the boundary; nothing escapes uncaught.

use galley_client::OrderApi;
use shared::models::{MenuCategory, MenuItem, OrderRecord};

use crate::cart::{Cart, OrderSummary};
use crate::error::{SessionError, SessionResult};

/// Table input value restored after a successful submission
pub const DEFAULT_TABLE: &str = "A1";

/// Outcome of a successful history fetch
///
/// Zero records is an explicit empty state, distinct from a fetch
/// failure (which is an `Err` and leaves prior history untouched).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryOutcome {
    /// History replaced with this many records
    Loaded(usize),
    /// Fetch succeeded but there are no orders yet
    Empty,
}

/// One staff ordering session against the backend
#[derive(Debug)]
pub struct OrderSession<C> {
    client: C,
    menu: Vec<MenuCategory>,
    active_category: Option<String>,
    cart: Cart,
    table_input: String,
    notes_input: String,
    history: Vec<OrderRecord>,
    server_online: bool,
}

impl<C: OrderApi> OrderSession<C> {
    /// Create a fresh session with an empty cart
    pub fn new(client: C) -> Self {
        Self {
            client,
            menu: Vec::new(),
            active_category: None,
            cart: Cart::new(),
            table_input: DEFAULT_TABLE.to_string(),
            notes_input: String::new(),
            history: Vec::new(),
            server_online: false,
        }
    }

    // ========== Menu Browser ==========

    /// Fetch the menu and activate its first category
    ///
    /// On failure the server is flagged offline and previously loaded
    /// menu data is left untouched.
    pub async fn load_menu(&mut self) -> SessionResult<()> {
        match self.client.fetch_menu().await {
            Ok(categories) => {
                self.active_category = categories.first().map(|c| c.category.clone());
                self.menu = categories;
                self.server_online = true;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load menu");
                self.server_online = false;
                Err(e.into())
            }
        }
    }

    /// Loaded menu categories in display order
    pub fn menu(&self) -> &[MenuCategory] {
        &self.menu
    }

    /// Label of the active category, if any
    pub fn active_category(&self) -> Option<&str> {
        self.active_category.as_deref()
    }

    /// Switch the active category; pure state transition, no backend call
    pub fn select_category(&mut self, name: &str) {
        self.active_category = Some(name.to_string());
    }

    /// Items of the active category; empty when it is unset or unknown
    pub fn active_items(&self) -> &[MenuItem] {
        self.active_category
            .as_deref()
            .and_then(|name| self.menu.iter().find(|c| c.category == name))
            .map(|c| c.items.as_slice())
            .unwrap_or(&[])
    }

    /// Binary server indicator derived from the last menu load
    pub fn server_online(&self) -> bool {
        self.server_online
    }

    // ========== Cart commands ==========

    /// Current cart contents
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current price summary
    pub fn summary(&self) -> OrderSummary {
        self.cart.summarize()
    }

    /// Add one unit of an item; returns the updated summary
    pub fn add_item(&mut self, item: &MenuItem) -> OrderSummary {
        self.cart.add_item(item);
        self.cart.summarize()
    }

    /// Add several units of an item at once; returns the updated summary
    pub fn add_item_with_quantity(&mut self, item: &MenuItem, quantity: u32) -> OrderSummary {
        self.cart.add_item_with_quantity(item, quantity);
        self.cart.summarize()
    }

    /// Apply a ±delta to an item's quantity; returns the updated summary
    pub fn change_quantity(&mut self, code: &str, delta: i32) -> OrderSummary {
        self.cart.change_quantity(code, delta);
        self.cart.summarize()
    }

    /// Empty the cart without submitting; returns the (zeroed) summary
    pub fn reset_cart(&mut self) -> OrderSummary {
        self.cart.clear();
        self.cart.summarize()
    }

    // ========== Input fields ==========

    pub fn table(&self) -> &str {
        &self.table_input
    }

    pub fn set_table(&mut self, table: impl Into<String>) {
        self.table_input = table.into();
    }

    pub fn notes(&self) -> &str {
        &self.notes_input
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes_input = notes.into();
    }

    // ========== Submission workflow ==========

    /// Submit the cart as an order
    ///
    /// An empty cart is rejected locally without touching the network.
    /// On success the cart is cleared and the inputs reset before a
    /// history refresh is initiated; a refresh failure is a soft failure
    /// and never rolls back the submission. On failure the cart is left
    /// untouched so the staff can retry.
    pub async fn submit_order(&mut self) -> SessionResult<()> {
        if self.cart.is_empty() {
            return Err(SessionError::EmptyCart);
        }

        let payload = self.cart.to_payload(&self.table_input, &self.notes_input);
        self.client.submit_order(&payload).await?;

        self.cart.clear();
        self.table_input = DEFAULT_TABLE.to_string();
        self.notes_input.clear();

        if let Err(e) = self.load_history().await {
            tracing::warn!(error = %e, "History refresh after submission failed");
        }
        Ok(())
    }

    // ========== History Viewer ==========

    /// Fetch recent orders
    ///
    /// On failure the previously stored history is left unchanged.
    pub async fn load_history(&mut self) -> SessionResult<HistoryOutcome> {
        let orders = self.client.fetch_history().await?;
        let outcome = if orders.is_empty() {
            HistoryOutcome::Empty
        } else {
            HistoryOutcome::Loaded(orders.len())
        };
        self.history = orders;
        Ok(outcome)
    }

    /// Most recently fetched order records
    pub fn history(&self) -> &[OrderRecord] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use galley_client::{ClientError, ClientResult};
    use shared::models::OrderPayload;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory collaborator; failures are toggled per endpoint
    #[derive(Default)]
    struct MockApi {
        menu: Vec<MenuCategory>,
        history: Mutex<Vec<OrderRecord>>,
        fail_menu: bool,
        fail_history: bool,
        submit_reject_message: Option<String>,
        submitted: Mutex<Vec<OrderPayload>>,
        history_calls: AtomicUsize,
    }

    fn server_error(message: &str) -> ClientError {
        ClientError::Server {
            status: 500,
            message: message.to_string(),
        }
    }

    #[async_trait]
    impl OrderApi for MockApi {
        async fn fetch_menu(&self) -> ClientResult<Vec<MenuCategory>> {
            if self.fail_menu {
                return Err(server_error("menu backend down"));
            }
            Ok(self.menu.clone())
        }

        async fn submit_order(&self, payload: &OrderPayload) -> ClientResult<()> {
            if let Some(message) = &self.submit_reject_message {
                return Err(ClientError::Server {
                    status: 400,
                    message: message.clone(),
                });
            }
            self.submitted.lock().unwrap().push(payload.clone());
            Ok(())
        }

        async fn fetch_history(&self) -> ClientResult<Vec<OrderRecord>> {
            self.history_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_history {
                return Err(server_error("history backend down"));
            }
            Ok(self.history.lock().unwrap().clone())
        }
    }

    fn sample_menu() -> Vec<MenuCategory> {
        vec![
            MenuCategory {
                category: "Mains".to_string(),
                items: vec![MenuItem::new(
                    "MNS-01",
                    "Charcoal BBQ Burger",
                    "Smoked cheddar",
                    10.0,
                )],
            },
            MenuCategory {
                category: "Beverages".to_string(),
                items: vec![MenuItem::new(
                    "BEV-01",
                    "Cold Brew Tonic",
                    "Citrus & tonic fizz",
                    5.5,
                )],
            },
        ]
    }

    fn sample_record(id: &str) -> OrderRecord {
        OrderRecord {
            id: id.to_string(),
            table: "A1".to_string(),
            notes: String::new(),
            subtotal: 10.0,
            tax: 0.8,
            total: 10.8,
            placed_at: "Aug 29 12:41".to_string(),
            items: Vec::new(),
        }
    }

    fn burger() -> MenuItem {
        MenuItem::new("MNS-01", "Charcoal BBQ Burger", "Smoked cheddar", 10.0)
    }

    #[tokio::test]
    async fn empty_cart_submit_never_hits_network() {
        let mut session = OrderSession::new(MockApi::default());

        let err = session.submit_order().await.unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(err, SessionError::EmptyCart));
        assert!(session.client.submitted.lock().unwrap().is_empty());
        assert_eq!(session.client.history_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn successful_submission_clears_cart_and_resets_inputs() {
        let api = MockApi {
            history: Mutex::new(vec![sample_record("NEW-1")]),
            ..Default::default()
        };
        let mut session = OrderSession::new(api);
        session.add_item(&burger());
        session.add_item(&burger());
        session.set_table("B6");
        session.set_notes("no onions");

        session.submit_order().await.unwrap();

        assert!(session.cart().is_empty());
        assert_eq!(session.table(), DEFAULT_TABLE);
        assert_eq!(session.notes(), "");

        let submitted = session.client.submitted.lock().unwrap();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].table, "B6");
        assert_eq!(submitted[0].notes, "no onions");
        assert_eq!(submitted[0].items[0].quantity, 2);
        drop(submitted);

        // The refresh after submission repopulated the history
        assert_eq!(session.client.history_calls.load(Ordering::SeqCst), 1);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].id, "NEW-1");
    }

    #[tokio::test]
    async fn failed_submission_leaves_cart_for_retry() {
        let api = MockApi {
            submit_reject_message: Some("Unknown menu item code: MNS-01".to_string()),
            ..Default::default()
        };
        let mut session = OrderSession::new(api);
        session.add_item(&burger());
        session.set_notes("rush");

        let err = session.submit_order().await.unwrap_err();
        assert!(!err.is_validation());
        assert_eq!(err.user_message(), "Unknown menu item code: MNS-01");

        // Cart and inputs untouched so the user can retry
        assert_eq!(session.cart().quantity("MNS-01"), 1);
        assert_eq!(session.notes(), "rush");
        assert_eq!(session.client.history_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn history_refresh_failure_does_not_roll_back_submission() {
        let api = MockApi {
            fail_history: true,
            ..Default::default()
        };
        let mut session = OrderSession::new(api);
        session.history = vec![sample_record("OLD-1")];
        session.add_item(&burger());

        session.submit_order().await.unwrap();

        assert!(session.cart().is_empty());
        assert_eq!(session.client.history_calls.load(Ordering::SeqCst), 1);
        // Stale history retained over being blanked out
        assert_eq!(session.history()[0].id, "OLD-1");
    }

    #[tokio::test]
    async fn load_menu_activates_first_category() {
        let api = MockApi {
            menu: sample_menu(),
            ..Default::default()
        };
        let mut session = OrderSession::new(api);

        session.load_menu().await.unwrap();

        assert!(session.server_online());
        assert_eq!(session.active_category(), Some("Mains"));
        assert_eq!(session.active_items()[0].code, "MNS-01");
    }

    #[tokio::test]
    async fn load_menu_failure_flags_offline_and_keeps_prior_menu() {
        let api = MockApi {
            menu: sample_menu(),
            ..Default::default()
        };
        let mut session = OrderSession::new(api);
        session.load_menu().await.unwrap();

        session.client.fail_menu = true;
        let err = session.load_menu().await.unwrap_err();
        assert!(!err.is_validation());
        assert!(!session.server_online());
        // Prior menu data stays available for display
        assert_eq!(session.menu().len(), 2);
    }

    #[tokio::test]
    async fn select_unknown_category_yields_empty_listing() {
        let api = MockApi {
            menu: sample_menu(),
            ..Default::default()
        };
        let mut session = OrderSession::new(api);
        session.load_menu().await.unwrap();

        session.select_category("Beverages");
        assert_eq!(session.active_items()[0].code, "BEV-01");

        session.select_category("Desserts");
        assert!(session.active_items().is_empty());
    }

    #[tokio::test]
    async fn empty_history_is_distinct_from_failure() {
        let mut session = OrderSession::new(MockApi::default());

        let outcome = session.load_history().await.unwrap();
        assert_eq!(outcome, HistoryOutcome::Empty);
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn failed_history_fetch_leaves_previous_list() {
        let api = MockApi {
            history: Mutex::new(vec![sample_record("OLD-1"), sample_record("OLD-2")]),
            ..Default::default()
        };
        let mut session = OrderSession::new(api);
        let outcome = session.load_history().await.unwrap();
        assert_eq!(outcome, HistoryOutcome::Loaded(2));

        session.client.fail_history = true;
        session.load_history().await.unwrap_err();
        assert_eq!(session.history().len(), 2);
    }

    #[tokio::test]
    async fn additions_during_pending_refresh_are_unaffected() {
        // The cart is cleared before the refresh is initiated; items
        // added afterwards belong to the next order.
        let api = MockApi {
            history: Mutex::new(vec![sample_record("NEW-1")]),
            ..Default::default()
        };
        let mut session = OrderSession::new(api);
        session.add_item(&burger());
        session.submit_order().await.unwrap();

        let summary = session.add_item(&burger());
        assert_eq!(session.cart().quantity("MNS-01"), 1);
        assert!((summary.subtotal - 10.0).abs() < 1e-9);
    }
}
