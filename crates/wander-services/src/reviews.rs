//! Review post service

use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use wander_store::{BlobStore, PostRepository};
use wander_types::{Envelope, Post, PostDraft, PostStatus};

use crate::latency::Latency;
use crate::storage_failure;

pub struct ReviewService {
    posts: PostRepository,
    latency: Latency,
}

impl ReviewService {
    pub fn new(store: Arc<dyn BlobStore>, latency: Latency) -> Self {
        Self {
            posts: PostRepository::new(store),
            latency,
        }
    }

    /// Public listing: Active posts only, optionally for one attraction.
    /// Reported posts never appear here.
    pub async fn get_posts(&self, attraction_id: Option<&str>) -> Envelope<Vec<Post>> {
        self.latency.simulate().await;

        let posts = match self.posts.load().await {
            Ok(posts) => posts,
            Err(e) => return storage_failure("list posts", e),
        };

        Envelope::ok(
            posts
                .into_iter()
                .filter(|p| p.status == PostStatus::Active)
                .filter(|p| attraction_id.map_or(true, |id| p.attraction_id == id))
                .collect(),
        )
    }

    pub async fn create_post(&self, draft: PostDraft) -> Envelope<Post> {
        self.latency.simulate().await;

        let mut posts = match self.posts.load().await {
            Ok(posts) => posts,
            Err(e) => return storage_failure("create post", e),
        };

        let post = Post {
            id: format!("post-{}", uuid::Uuid::new_v4()),
            attraction_id: draft.attraction_id,
            author_id: draft.author_id,
            author_name: draft.author_name,
            content: draft.content,
            rating: draft.rating,
            image: draft.image,
            likes: 0,
            comments: vec![],
            status: PostStatus::Active,
            created_at: Utc::now(),
        };
        posts.push(post.clone());

        if let Err(e) = self.posts.save(&posts).await {
            return storage_failure("create post", e);
        }

        info!("Created post {} on {}", post.id, post.attraction_id);
        Envelope::ok(post)
    }

    /// Flag a post: it leaves the public listing and enters the moderation
    /// queue.
    pub async fn report_post(&self, id: &str) -> Envelope<bool> {
        self.latency.simulate().await;

        let mut posts = match self.posts.load().await {
            Ok(posts) => posts,
            Err(e) => return storage_failure("report post", e),
        };

        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Envelope::fail(format!("post not found: {}", id));
        };
        post.status = PostStatus::Reported;

        if let Err(e) = self.posts.save(&posts).await {
            return storage_failure("report post", e);
        }

        info!("Post {} reported", id);
        Envelope::ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wander_store::MemoryStore;

    fn service() -> ReviewService {
        ReviewService::new(Arc::new(MemoryStore::new()), Latency::none())
    }

    fn draft(attraction_id: &str, content: &str) -> PostDraft {
        PostDraft {
            attraction_id: attraction_id.to_string(),
            author_id: "user-lin".to_string(),
            author_name: "lin_traveler".to_string(),
            content: content.to_string(),
            rating: Some(4),
            image: None,
        }
    }

    #[tokio::test]
    async fn test_new_post_defaults() {
        let reviews = service();

        let post = reviews
            .create_post(draft("attr-westlake", "Lovely at dusk."))
            .await
            .data
            .unwrap();

        assert!(post.id.starts_with("post-"));
        assert_eq!(post.status, PostStatus::Active);
        assert_eq!(post.likes, 0);
        assert!(post.comments.is_empty());
    }

    #[tokio::test]
    async fn test_listing_filters_by_attraction() {
        let reviews = service();
        reviews.create_post(draft("attr-a", "first")).await;
        reviews.create_post(draft("attr-b", "second")).await;

        let all = reviews.get_posts(None).await.data.unwrap();
        assert!(all.len() >= 2);

        let only_a = reviews.get_posts(Some("attr-a")).await.data.unwrap();
        assert!(only_a.iter().all(|p| p.attraction_id == "attr-a"));
        assert!(only_a.iter().any(|p| p.content == "first"));
    }

    #[tokio::test]
    async fn test_reported_post_leaves_public_listing() {
        let reviews = service();
        let post = reviews
            .create_post(draft("attr-a", "spam spam"))
            .await
            .data
            .unwrap();

        assert!(reviews.report_post(&post.id).await.success);

        let listed = reviews.get_posts(None).await.data.unwrap();
        assert!(listed.iter().all(|p| p.id != post.id));
        assert!(listed.iter().all(|p| p.status == PostStatus::Active));
    }

    #[tokio::test]
    async fn test_report_missing_post_fails() {
        let reviews = service();
        assert!(!reviews.report_post("post-missing").await.success);
    }
}
