//! Review post types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Review post written by a traveler about an attraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub attraction_id: String,
    pub author_id: String,
    /// Author display name, denormalized at creation time.
    pub author_name: String,
    pub content: String,
    /// Expected range 1-5, not enforced.
    pub rating: Option<u8>,
    pub image: Option<String>,
    pub likes: u32,
    pub comments: Vec<Comment>,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
}

/// Comment on a post. Modeled but no creation operation exists yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author_id: String,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Post visibility status.
///
/// Reported posts leave the public listing and enter the moderation
/// queue. Hidden is declared but never assigned by any operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Active,
    Reported,
    Hidden,
}

/// Creation input for a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDraft {
    pub attraction_id: String,
    pub author_id: String,
    pub author_name: String,
    pub content: String,
    pub rating: Option<u8>,
    pub image: Option<String>,
}

/// Moderation verdict for a reported post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationAction {
    /// Revert the post to Active.
    Approve,
    /// Remove the post permanently.
    Delete,
}
