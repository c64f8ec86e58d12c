//! Moderation service
//!
//! Admin-facing view over reported posts. Approving reverts a post to the
//! public listing; deleting removes it permanently.

use std::sync::Arc;
use tracing::info;
use wander_store::{BlobStore, PostRepository};
use wander_types::{Envelope, ModerationAction, Post, PostStatus};

use crate::latency::Latency;
use crate::storage_failure;

pub struct ModerationService {
    posts: PostRepository,
    latency: Latency,
}

impl ModerationService {
    pub fn new(store: Arc<dyn BlobStore>, latency: Latency) -> Self {
        Self {
            posts: PostRepository::new(store),
            latency,
        }
    }

    /// The moderation queue: Reported posts only.
    pub async fn reported_posts(&self) -> Envelope<Vec<Post>> {
        self.latency.simulate().await;

        let posts = match self.posts.load().await {
            Ok(posts) => posts,
            Err(e) => return storage_failure("list reported posts", e),
        };

        Envelope::ok(
            posts
                .into_iter()
                .filter(|p| p.status == PostStatus::Reported)
                .collect(),
        )
    }

    pub async fn moderate_post(&self, id: &str, action: ModerationAction) -> Envelope<bool> {
        self.latency.simulate().await;

        let mut posts = match self.posts.load().await {
            Ok(posts) => posts,
            Err(e) => return storage_failure("moderate post", e),
        };

        match action {
            ModerationAction::Approve => {
                let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
                    return Envelope::fail(format!("post not found: {}", id));
                };
                post.status = PostStatus::Active;
            }
            ModerationAction::Delete => {
                let before = posts.len();
                posts.retain(|p| p.id != id);
                if posts.len() == before {
                    return Envelope::fail(format!("post not found: {}", id));
                }
            }
        }

        if let Err(e) = self.posts.save(&posts).await {
            return storage_failure("moderate post", e);
        }

        info!("Moderated post {}: {:?}", id, action);
        Envelope::ok(true)
    }
}
