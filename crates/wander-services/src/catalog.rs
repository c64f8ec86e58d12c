//! Attraction catalog service

use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use wander_store::{AttractionRepository, BlobStore};
use wander_types::{Attraction, AttractionDraft, AttractionFilter, AttractionUpdate, Envelope};

use crate::latency::Latency;
use crate::storage_failure;

pub struct CatalogService {
    attractions: AttractionRepository,
    latency: Latency,
}

/// Display label shown in listings, derived from the location hierarchy.
fn region_label(province: &str, city: &str) -> String {
    format!("{} {}", province, city).trim().to_string()
}

fn matches(attraction: &Attraction, filter: &AttractionFilter) -> bool {
    if let Some(province) = &filter.province {
        if &attraction.province != province {
            return false;
        }
    }
    if let Some(city) = &filter.city {
        if &attraction.city != city {
            return false;
        }
    }
    if let Some(county) = &filter.county {
        if &attraction.county != county {
            return false;
        }
    }
    if let Some(tag) = &filter.tag {
        if !attraction.tags.iter().any(|t| t == tag) {
            return false;
        }
    }
    if let Some(query) = &filter.query {
        let query = query.to_lowercase();
        if !attraction.title.to_lowercase().contains(&query)
            && !attraction.description.to_lowercase().contains(&query)
        {
            return false;
        }
    }
    true
}

impl CatalogService {
    pub fn new(store: Arc<dyn BlobStore>, latency: Latency) -> Self {
        Self {
            attractions: AttractionRepository::new(store),
            latency,
        }
    }

    /// List attractions matching the filter. Fields combine with AND;
    /// `tag` is containment, `query` is a case-insensitive substring over
    /// title or description.
    pub async fn get_attractions(&self, filter: &AttractionFilter) -> Envelope<Vec<Attraction>> {
        self.latency.simulate().await;

        let attractions = match self.attractions.load().await {
            Ok(attractions) => attractions,
            Err(e) => return storage_failure("list attractions", e),
        };

        Envelope::ok(
            attractions
                .into_iter()
                .filter(|a| matches(a, filter))
                .collect(),
        )
    }

    pub async fn get_attraction(&self, id: &str) -> Envelope<Attraction> {
        self.latency.simulate().await;

        let attractions = match self.attractions.load().await {
            Ok(attractions) => attractions,
            Err(e) => return storage_failure("get attraction", e),
        };

        match attractions.into_iter().find(|a| a.id == id) {
            Some(attraction) => Envelope::ok(attraction),
            None => Envelope::fail(format!("attraction not found: {}", id)),
        }
    }

    /// Admin operation: insert a new attraction.
    pub async fn create_attraction(&self, draft: AttractionDraft) -> Envelope<Attraction> {
        self.latency.simulate().await;

        let mut attractions = match self.attractions.load().await {
            Ok(attractions) => attractions,
            Err(e) => return storage_failure("create attraction", e),
        };

        let attraction = Attraction {
            id: format!("attr-{}", uuid::Uuid::new_v4()),
            region: region_label(&draft.province, &draft.city),
            title: draft.title,
            description: draft.description,
            address: draft.address,
            province: draft.province,
            city: draft.city,
            county: draft.county,
            tags: draft.tags,
            image: draft.image,
            gallery: draft.gallery,
            opening_hours: draft.opening_hours,
            tips: draft.tips,
            created_at: Utc::now(),
        };
        attractions.push(attraction.clone());

        if let Err(e) = self.attractions.save(&attractions).await {
            return storage_failure("create attraction", e);
        }

        info!("Created attraction {} ({})", attraction.id, attraction.title);
        Envelope::ok(attraction)
    }

    /// Admin operation: apply an explicit update command. The region label
    /// is re-derived when province or city changes.
    pub async fn update_attraction(
        &self,
        id: &str,
        update: AttractionUpdate,
    ) -> Envelope<Attraction> {
        self.latency.simulate().await;

        let mut attractions = match self.attractions.load().await {
            Ok(attractions) => attractions,
            Err(e) => return storage_failure("update attraction", e),
        };

        let Some(attraction) = attractions.iter_mut().find(|a| a.id == id) else {
            return Envelope::fail(format!("attraction not found: {}", id));
        };

        if let Some(title) = update.title {
            attraction.title = title;
        }
        if let Some(description) = update.description {
            attraction.description = description;
        }
        if let Some(address) = update.address {
            attraction.address = address;
        }
        if let Some(province) = update.province {
            attraction.province = province;
        }
        if let Some(city) = update.city {
            attraction.city = city;
        }
        if let Some(county) = update.county {
            attraction.county = county;
        }
        if let Some(tags) = update.tags {
            attraction.tags = tags;
        }
        if let Some(image) = update.image {
            attraction.image = image;
        }
        if let Some(gallery) = update.gallery {
            attraction.gallery = gallery;
        }
        if let Some(opening_hours) = update.opening_hours {
            attraction.opening_hours = Some(opening_hours);
        }
        if let Some(tips) = update.tips {
            attraction.tips = Some(tips);
        }
        attraction.region = region_label(&attraction.province, &attraction.city);

        let updated = attraction.clone();
        if let Err(e) = self.attractions.save(&attractions).await {
            return storage_failure("update attraction", e);
        }

        info!("Updated attraction {}", id);
        Envelope::ok(updated)
    }

    /// Admin operation: remove an attraction. Products and posts that
    /// reference it are left untouched (no cascading).
    pub async fn delete_attraction(&self, id: &str) -> Envelope<bool> {
        self.latency.simulate().await;

        let mut attractions = match self.attractions.load().await {
            Ok(attractions) => attractions,
            Err(e) => return storage_failure("delete attraction", e),
        };

        let before = attractions.len();
        attractions.retain(|a| a.id != id);
        if attractions.len() == before {
            return Envelope::fail(format!("attraction not found: {}", id));
        }

        if let Err(e) = self.attractions.save(&attractions).await {
            return storage_failure("delete attraction", e);
        }

        info!("Deleted attraction {}", id);
        Envelope::ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wander_store::MemoryStore;

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(MemoryStore::new()), Latency::none())
    }

    fn draft(title: &str, province: &str, city: &str, tags: &[&str]) -> AttractionDraft {
        AttractionDraft {
            title: title.to_string(),
            description: format!("{} description", title),
            address: "1 Main St".to_string(),
            province: province.to_string(),
            city: city.to_string(),
            county: "Central".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image: "img.jpg".to_string(),
            gallery: vec![],
            opening_hours: None,
            tips: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let catalog = service();

        let created = catalog
            .create_attraction(draft("Slender West Lake", "Jiangsu", "Yangzhou", &["lake"]))
            .await
            .data
            .unwrap();
        assert!(created.id.starts_with("attr-"));
        assert_eq!(created.region, "Jiangsu Yangzhou");

        let fetched = catalog.get_attraction(&created.id).await.data.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_filter_semantics() {
        let catalog = service();
        catalog
            .create_attraction(draft("Dunes Park", "Gansu", "Dunhuang", &["desert", "scenic"]))
            .await;
        catalog
            .create_attraction(draft("Crescent Spring", "Gansu", "Dunhuang", &["oasis"]))
            .await;

        // Exact province match AND tag containment
        let filter = AttractionFilter {
            province: Some("Gansu".to_string()),
            tag: Some("desert".to_string()),
            ..Default::default()
        };
        let hits = catalog.get_attractions(&filter).await.data.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Dunes Park");

        // Case-insensitive substring over title or description
        let filter = AttractionFilter {
            query: Some("CRESCENT".to_string()),
            ..Default::default()
        };
        let hits = catalog.get_attractions(&filter).await.data.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Crescent Spring");

        // Exact match means no partial province hits
        let filter = AttractionFilter {
            province: Some("Gan".to_string()),
            ..Default::default()
        };
        assert!(catalog.get_attractions(&filter).await.data.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_rederives_region() {
        let catalog = service();
        let created = catalog
            .create_attraction(draft("Moved Museum", "Hubei", "Wuhan", &[]))
            .await
            .data
            .unwrap();

        let updated = catalog
            .update_attraction(
                &created.id,
                AttractionUpdate {
                    city: Some("Yichang".to_string()),
                    ..Default::default()
                },
            )
            .await
            .data
            .unwrap();
        assert_eq!(updated.region, "Hubei Yichang");
        // Untouched fields survive the merge
        assert_eq!(updated.title, "Moved Museum");
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_id_fail() {
        let catalog = service();

        let updated = catalog
            .update_attraction("attr-missing", AttractionUpdate::default())
            .await;
        assert!(!updated.success);

        let deleted = catalog.delete_attraction("attr-missing").await;
        assert!(!deleted.success);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let catalog = service();
        let created = catalog
            .create_attraction(draft("Short Lived", "Anhui", "Hefei", &[]))
            .await
            .data
            .unwrap();

        assert!(catalog.delete_attraction(&created.id).await.success);
        assert!(!catalog.get_attraction(&created.id).await.success);
    }
}
