//! Attraction types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tourist attraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    pub id: String,
    pub title: String,
    pub description: String,
    pub address: String,
    pub province: String,
    pub city: String,
    pub county: String,
    /// Display label derived from province + city.
    pub region: String,
    pub tags: Vec<String>,
    /// Primary image reference (url or data uri).
    pub image: String,
    pub gallery: Vec<String>,
    pub opening_hours: Option<String>,
    pub tips: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Creation input for an attraction (admin operation)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttractionDraft {
    pub title: String,
    pub description: String,
    pub address: String,
    pub province: String,
    pub city: String,
    pub county: String,
    pub tags: Vec<String>,
    pub image: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub opening_hours: Option<String>,
    pub tips: Option<String>,
}

/// Explicit update command for an attraction. Only the fields listed here
/// are mutable; an unset field leaves the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttractionUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image: Option<String>,
    pub gallery: Option<Vec<String>>,
    pub opening_hours: Option<String>,
    pub tips: Option<String>,
}

/// Listing filter. Fields combine with AND semantics; `tag` is containment
/// and `query` is a case-insensitive substring match over title or
/// description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttractionFilter {
    pub province: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub tag: Option<String>,
    pub query: Option<String>,
}
