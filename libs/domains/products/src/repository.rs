use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::Product;
use crate::pagination::{PageRequest, SortOrder};

/// Repository trait for Product persistence
///
/// Lookups return `Ok(None)` for a missing row; turning that into a
/// not-found error is the service's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product
    async fn create(&self, product: Product) -> ProductResult<()>;

    /// Get a product by ID
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// List products ordered by id, optionally one page at a time
    async fn list(&self, request: PageRequest) -> ProductResult<Vec<Product>>;

    /// Overwrite name and price of the row with `product.id`; no-op if absent
    async fn update(&self, product: Product) -> ProductResult<()>;

    /// Delete a product by ID, returning whether a row was removed
    async fn delete(&self, id: Uuid) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository (for testing and the `memory` backend)
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: Product) -> ProductResult<()> {
        let mut products = self.products.write().await;

        tracing::info!(product_id = %product.id, "Created product");
        products.insert(product.id, product);
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn list(&self, request: PageRequest) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products.values().cloned().collect();
        match request.sort {
            SortOrder::Asc => result.sort_by_key(|p| p.id),
            SortOrder::Desc => result.sort_by(|a, b| b.id.cmp(&a.id)),
        }

        Ok(request.apply(result))
    }

    async fn update(&self, product: Product) -> ProductResult<()> {
        let mut products = self.products.write().await;

        if let Some(existing) = products.get_mut(&product.id) {
            existing.name = product.name;
            existing.price = product.price;
            tracing::info!(product_id = %product.id, "Updated product");
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        let removed = products.remove(&id).is_some();
        if removed {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(removed)
    }
}
