//! WanderMart service façade
//!
//! One async service per bounded area, all constructed over an injected
//! blob store. Every operation simulates latency, reads the relevant
//! slice(s), applies exactly one insertion or transition, writes the slice
//! back and returns an [`Envelope`]. Failures are never fatal: storage
//! faults, missing ids and uniqueness violations all come back as
//! `success = false` with a message.

pub mod auth;
pub mod catalog;
pub mod commerce;
pub mod config;
pub mod latency;
pub mod media;
pub mod moderation;
pub mod reviews;
pub mod token;

pub use auth::AuthService;
pub use catalog::CatalogService;
pub use commerce::CommerceService;
pub use config::AppConfig;
pub use latency::Latency;
pub use media::MediaService;
pub use moderation::ModerationService;
pub use reviews::ReviewService;
pub use token::TokenIssuer;

use std::sync::Arc;
use tracing::info;
use wander_store::BlobStore;
use wander_types::Envelope;

/// Application state: the full set of services over one shared store.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub catalog: Arc<CatalogService>,
    pub reviews: Arc<ReviewService>,
    pub commerce: Arc<CommerceService>,
    pub moderation: Arc<ModerationService>,
    pub media: Arc<MediaService>,
}

impl AppState {
    pub fn new(store: Arc<dyn BlobStore>, config: AppConfig) -> Self {
        info!(
            "Initializing services: latency={}..{}ms",
            config.latency_min_ms, config.latency_max_ms
        );

        let latency = Latency::new(config.latency_min_ms, config.latency_max_ms);
        let tokens = TokenIssuer::new(config.token_secret);

        Self {
            auth: Arc::new(AuthService::new(store.clone(), tokens, latency.clone())),
            catalog: Arc::new(CatalogService::new(store.clone(), latency.clone())),
            reviews: Arc::new(ReviewService::new(store.clone(), latency.clone())),
            commerce: Arc::new(CommerceService::new(store.clone(), latency.clone())),
            moderation: Arc::new(ModerationService::new(store, latency.clone())),
            media: Arc::new(MediaService::new(latency)),
        }
    }
}

/// Map a storage fault into a failure envelope.
pub(crate) fn storage_failure<T>(op: &str, err: wander_store::StoreError) -> Envelope<T> {
    tracing::warn!("Storage failure during {}: {}", op, err);
    Envelope::fail(format!("storage error: {}", err))
}
