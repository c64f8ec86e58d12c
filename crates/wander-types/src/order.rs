//! Order types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Order placed by a traveler at checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    /// Cart lines captured at checkout; product data is a snapshot, not a
    /// live reference.
    pub items: Vec<OrderLine>,
    /// Client-computed total. Never recomputed or validated here.
    pub total: f64,
    pub status: OrderStatus,
    pub tracking_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One cart line: a product snapshot plus quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product: Product,
    pub quantity: u32,
}

/// Order lifecycle status.
///
/// Delivered and Cancelled are declared states with no dedicated
/// transition operation; they remain reachable through the generic
/// status update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

/// Checkout input for an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDraft {
    pub user_id: String,
    pub items: Vec<OrderLine>,
    pub total: f64,
}

/// Listing filter: purchaser match and/or "any line item's merchant" match
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderFilter {
    pub user_id: Option<String>,
    pub merchant_id: Option<String>,
}
