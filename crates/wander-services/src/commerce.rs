//! Products and orders service

use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use wander_store::{AttractionRepository, BlobStore, OrderRepository, ProductRepository};
use wander_types::{
    Envelope, Order, OrderDraft, OrderFilter, OrderStatus, Product, ProductDraft, ProductFilter,
};

use crate::latency::Latency;
use crate::storage_failure;

pub struct CommerceService {
    products: ProductRepository,
    orders: OrderRepository,
    attractions: AttractionRepository,
    latency: Latency,
}

impl CommerceService {
    pub fn new(store: Arc<dyn BlobStore>, latency: Latency) -> Self {
        Self {
            products: ProductRepository::new(store.clone()),
            orders: OrderRepository::new(store.clone()),
            attractions: AttractionRepository::new(store),
            latency,
        }
    }

    /// List products, AND-filtered by merchant and/or attraction.
    pub async fn get_products(&self, filter: &ProductFilter) -> Envelope<Vec<Product>> {
        self.latency.simulate().await;

        let products = match self.products.load().await {
            Ok(products) => products,
            Err(e) => return storage_failure("list products", e),
        };

        Envelope::ok(
            products
                .into_iter()
                .filter(|p| {
                    filter
                        .merchant_id
                        .as_ref()
                        .map_or(true, |m| &p.merchant_id == m)
                })
                .filter(|p| {
                    filter
                        .attraction_id
                        .as_ref()
                        .map_or(true, |a| p.attraction_id.as_ref() == Some(a))
                })
                .collect(),
        )
    }

    /// Insert a product. The attraction title is resolved from the
    /// attraction slice at this point and stored as a snapshot; later
    /// attraction edits do not touch it.
    pub async fn create_product(&self, draft: ProductDraft) -> Envelope<Product> {
        self.latency.simulate().await;

        let mut products = match self.products.load().await {
            Ok(products) => products,
            Err(e) => return storage_failure("create product", e),
        };

        let attraction_title = match &draft.attraction_id {
            Some(attraction_id) => {
                let attractions = match self.attractions.load().await {
                    Ok(attractions) => attractions,
                    Err(e) => return storage_failure("create product", e),
                };
                attractions
                    .into_iter()
                    .find(|a| &a.id == attraction_id)
                    .map(|a| a.title)
            }
            None => None,
        };

        let product = Product {
            id: format!("prod-{}", uuid::Uuid::new_v4()),
            merchant_id: draft.merchant_id,
            merchant_name: draft.merchant_name,
            attraction_id: draft.attraction_id,
            attraction_title,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            stock: draft.stock,
            image: draft.image,
            created_at: Utc::now(),
        };
        products.push(product.clone());

        if let Err(e) = self.products.save(&products).await {
            return storage_failure("create product", e);
        }

        info!("Created product {} ({})", product.id, product.name);
        Envelope::ok(product)
    }

    /// List orders by purchaser and/or by "any line item's merchant".
    pub async fn get_orders(&self, filter: &OrderFilter) -> Envelope<Vec<Order>> {
        self.latency.simulate().await;

        let orders = match self.orders.load().await {
            Ok(orders) => orders,
            Err(e) => return storage_failure("list orders", e),
        };

        Envelope::ok(
            orders
                .into_iter()
                .filter(|o| filter.user_id.as_ref().map_or(true, |u| &o.user_id == u))
                .filter(|o| {
                    filter.merchant_id.as_ref().map_or(true, |m| {
                        o.items.iter().any(|line| &line.product.merchant_id == m)
                    })
                })
                .collect(),
        )
    }

    /// Checkout: insert an order as Pending. The total and the product
    /// snapshots in the cart lines are trusted as given.
    pub async fn create_order(&self, draft: OrderDraft) -> Envelope<Order> {
        self.latency.simulate().await;

        let mut orders = match self.orders.load().await {
            Ok(orders) => orders,
            Err(e) => return storage_failure("create order", e),
        };

        let order = Order {
            id: format!("ord-{}", uuid::Uuid::new_v4()),
            user_id: draft.user_id,
            items: draft.items,
            total: draft.total,
            status: OrderStatus::Pending,
            tracking_number: None,
            created_at: Utc::now(),
        };
        orders.push(order.clone());

        if let Err(e) = self.orders.save(&orders).await {
            return storage_failure("create order", e);
        }

        info!("Created order {} for {}", order.id, order.user_id);
        Envelope::ok(order)
    }

    /// Set an order's status. A tracking number is stored only when
    /// provided; otherwise the existing one is retained.
    pub async fn update_order_status(
        &self,
        id: &str,
        status: OrderStatus,
        tracking_number: Option<String>,
    ) -> Envelope<Order> {
        self.latency.simulate().await;

        let mut orders = match self.orders.load().await {
            Ok(orders) => orders,
            Err(e) => return storage_failure("update order status", e),
        };

        let Some(order) = orders.iter_mut().find(|o| o.id == id) else {
            return Envelope::fail(format!("order not found: {}", id));
        };
        order.status = status;
        if let Some(tracking) = tracking_number {
            order.tracking_number = Some(tracking);
        }

        let updated = order.clone();
        if let Err(e) = self.orders.save(&orders).await {
            return storage_failure("update order status", e);
        }

        info!("Order {} status set to {:?}", id, status);
        Envelope::ok(updated)
    }
}
