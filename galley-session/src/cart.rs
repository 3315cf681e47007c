//! Cart state and price arithmetic
//!
//! The cart is exclusively owned by the session; lines keep insertion
//! order so the submission payload is deterministic. A line never stores
//! a zero or negative quantity: a change that would reach zero removes
//! the line entirely.

use shared::models::{MenuItem, OrderItemPayload, OrderPayload};

/// Fixed tax multiplier applied to the subtotal (8%)
pub const TAX_RATE: f64 = 0.08;

/// One staged line: a menu item and how many of it
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartLine {
    /// Price × quantity for this line
    pub fn line_total(&self) -> f64 {
        self.item.price * self.quantity as f64
    }
}

/// Price summary derived from the cart
///
/// Always recomputed from current lines, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrderSummary {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

/// Staged, not-yet-submitted collection of menu items and quantities
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Staged lines in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Current quantity for an item code; absent means zero
    pub fn quantity(&self, code: &str) -> u32 {
        self.lines
            .iter()
            .find(|l| l.item.code == code)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    /// Add one unit of an item, inserting a new line if needed
    pub fn add_item(&mut self, item: &MenuItem) {
        match self.lines.iter_mut().find(|l| l.item.code == item.code) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                item: item.clone(),
                quantity: 1,
            }),
        }
    }

    /// Add `quantity` units at once, clamped to at least one
    pub fn add_item_with_quantity(&mut self, item: &MenuItem, quantity: u32) {
        let quantity = quantity.max(1);
        match self.lines.iter_mut().find(|l| l.item.code == item.code) {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine {
                item: item.clone(),
                quantity,
            }),
        }
    }

    /// Apply a ±delta to an item's quantity
    ///
    /// No-op when the code is not in the cart. A resulting quantity of
    /// zero or less removes the line.
    pub fn change_quantity(&mut self, code: &str, delta: i32) {
        let Some(index) = self.lines.iter().position(|l| l.item.code == code) else {
            return;
        };

        let next = self.lines[index].quantity as i64 + delta as i64;
        if next <= 0 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity = next as u32;
        }
    }

    /// Empty the cart unconditionally
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Compute subtotal, tax and total from current lines
    pub fn summarize(&self) -> OrderSummary {
        let subtotal: f64 = self.lines.iter().map(CartLine::line_total).sum();
        let tax = subtotal * TAX_RATE;
        OrderSummary {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }

    /// Snapshot the cart into a submission payload
    ///
    /// Items follow cart insertion order; a blank table falls back to
    /// the "TBD" placeholder.
    pub fn to_payload(&self, table: &str, notes: &str) -> OrderPayload {
        let items = self
            .lines
            .iter()
            .map(|l| OrderItemPayload {
                code: l.item.code.clone(),
                quantity: l.quantity,
            })
            .collect();
        OrderPayload::new(table, notes, items)
    }
}
