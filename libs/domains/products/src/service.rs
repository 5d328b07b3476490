//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::pagination::PageRequest;
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Validation lives on the [`Product`] constructors; the service turns
/// lookup misses into [`ProductError::NotFound`] and orchestrates the
/// repository calls.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product::new(input.name, input.price)?;
        self.repository.create(product.clone()).await?;
        Ok(product)
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// List products, one page at a time or all at once
    #[instrument(skip(self))]
    pub async fn list_products(&self, request: PageRequest) -> ProductResult<Vec<Product>> {
        self.repository.list(request).await
    }

    /// Replace name and price of an existing product
    ///
    /// The existence check runs first, so an unknown id is reported as
    /// not found even when the input is also invalid.
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product> {
        let mut product = self.get_product(id).await?;
        product.replace(input.name, input.price)?;

        self.repository.update(product.clone()).await?;
        Ok(product)
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<()> {
        self.get_product(id).await?;

        // A concurrent delete may win between the check and here
        if !self.repository.delete(id).await? {
            tracing::debug!(product_id = %id, "Product already gone at delete time");
        }
        Ok(())
    }
}
