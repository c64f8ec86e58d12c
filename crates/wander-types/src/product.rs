//! Product types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product listed by a merchant, optionally tied to an attraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub merchant_id: String,
    /// Merchant display name, denormalized at creation time.
    pub merchant_name: String,
    pub attraction_id: Option<String>,
    /// Attraction title, resolved at creation time. Deliberately not kept
    /// in sync with later attraction edits.
    pub attraction_title: Option<String>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

/// Creation input for a product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDraft {
    pub merchant_id: String,
    pub merchant_name: String,
    pub attraction_id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub image: String,
}

/// Listing filter, AND across provided fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFilter {
    pub merchant_id: Option<String>,
    pub attraction_id: Option<String>,
}
