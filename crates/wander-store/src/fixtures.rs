//! Default seed data
//!
//! First read of an absent slice writes these fixtures so a fresh store is
//! immediately browsable. Ids are stable strings so seeded records can be
//! referenced across slices.

use chrono::Utc;
use wander_types::{
    Attraction, Post, PostStatus, Product, Role, User, UserStatus,
};

pub fn users() -> Vec<User> {
    let now = Utc::now();
    vec![
        User {
            id: "user-admin".to_string(),
            username: "admin".to_string(),
            email: "admin@wandermart.dev".to_string(),
            role: Role::Admin,
            status: UserStatus::Active,
            qualification: None,
            created_at: now,
        },
        User {
            id: "user-lin".to_string(),
            username: "lin_traveler".to_string(),
            email: "lin@example.com".to_string(),
            role: Role::Traveler,
            status: UserStatus::Active,
            qualification: None,
            created_at: now,
        },
        User {
            id: "user-meili".to_string(),
            username: "meili_shop".to_string(),
            email: "meili@example.com".to_string(),
            role: Role::Merchant,
            status: UserStatus::Active,
            qualification: Some("data:text/plain;base64,cXVhbGlmaWVk".to_string()),
            created_at: now,
        },
    ]
}

pub fn attractions() -> Vec<Attraction> {
    let now = Utc::now();
    vec![
        Attraction {
            id: "attr-westlake".to_string(),
            title: "West Lake".to_string(),
            description: "Freshwater lake ringed by temples, pagodas and gardens.".to_string(),
            address: "1 Longjing Rd".to_string(),
            province: "Zhejiang".to_string(),
            city: "Hangzhou".to_string(),
            county: "Xihu".to_string(),
            region: "Zhejiang Hangzhou".to_string(),
            tags: vec!["lake".to_string(), "unesco".to_string(), "scenic".to_string()],
            image: "https://img.wandermart.dev/westlake.jpg".to_string(),
            gallery: vec![],
            opening_hours: Some("All day".to_string()),
            tips: Some("Rent a bike and ride the causeways early morning.".to_string()),
            created_at: now,
        },
        Attraction {
            id: "attr-liriver".to_string(),
            title: "Li River".to_string(),
            description: "Karst peaks and bamboo rafts between Guilin and Yangshuo.".to_string(),
            address: "Binjiang Rd".to_string(),
            province: "Guangxi".to_string(),
            city: "Guilin".to_string(),
            county: "Yangshuo".to_string(),
            region: "Guangxi Guilin".to_string(),
            tags: vec!["river".to_string(), "scenic".to_string()],
            image: "https://img.wandermart.dev/liriver.jpg".to_string(),
            gallery: vec![],
            opening_hours: Some("08:00-18:00".to_string()),
            tips: None,
            created_at: now,
        },
        Attraction {
            id: "attr-emei".to_string(),
            title: "Mount Emei".to_string(),
            description: "Sacred Buddhist mountain with sunrise views above the clouds."
                .to_string(),
            address: "Emeishan City".to_string(),
            province: "Sichuan".to_string(),
            city: "Leshan".to_string(),
            county: "Emeishan".to_string(),
            region: "Sichuan Leshan".to_string(),
            tags: vec!["mountain".to_string(), "temple".to_string(), "unesco".to_string()],
            image: "https://img.wandermart.dev/emei.jpg".to_string(),
            gallery: vec![],
            opening_hours: Some("06:00-18:30".to_string()),
            tips: Some("Watch out for the macaques near the cable car.".to_string()),
            created_at: now,
        },
    ]
}

pub fn posts() -> Vec<Post> {
    let now = Utc::now();
    vec![Post {
        id: "post-seed-1".to_string(),
        attraction_id: "attr-westlake".to_string(),
        author_id: "user-lin".to_string(),
        author_name: "lin_traveler".to_string(),
        content: "The Su Causeway at dawn is worth the early alarm.".to_string(),
        rating: Some(5),
        image: None,
        likes: 0,
        comments: vec![],
        status: PostStatus::Active,
        created_at: now,
    }]
}

pub fn products() -> Vec<Product> {
    let now = Utc::now();
    vec![Product {
        id: "prod-seed-1".to_string(),
        merchant_id: "user-meili".to_string(),
        merchant_name: "meili_shop".to_string(),
        attraction_id: Some("attr-westlake".to_string()),
        attraction_title: Some("West Lake".to_string()),
        name: "Longjing tea gift box".to_string(),
        description: "Pre-rain Longjing from the hills above the lake, 100g.".to_string(),
        price: 68.0,
        stock: 40,
        image: "https://img.wandermart.dev/longjing.jpg".to_string(),
        created_at: now,
    }]
}

pub fn orders() -> Vec<wander_types::Order> {
    Vec::new()
}
