//! Menu Model

use serde::{Deserialize, Serialize};

/// Menu item entity
///
/// Sourced from the menu collaborator and never mutated client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique item code (e.g. "SGN-01")
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Unit price; non-negative
    pub price: f64,
}

/// Menu category with its items, in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub category: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// Menu read response: `GET /api/menu`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuResponse {
    #[serde(default)]
    pub categories: Vec<MenuCategory>,
}

impl MenuItem {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}
