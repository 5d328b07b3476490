use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::pagination::{PageRequest, SortOrder};

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier (UUIDv7, creation ordered)
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Unit price, strictly positive
    pub price: f64,
}

impl Product {
    /// Create a product with a fresh id
    pub fn new(name: impl Into<String>, price: f64) -> ProductResult<Self> {
        let name = name.into();
        validate(&name, price)?;

        Ok(Self {
            id: identity::new_id(),
            name,
            price,
        })
    }

    /// Replace name and price, keeping the id
    pub fn replace(&mut self, name: impl Into<String>, price: f64) -> ProductResult<()> {
        let name = name.into();
        validate(&name, price)?;

        self.name = name;
        self.price = price;
        Ok(())
    }
}

fn validate(name: &str, price: f64) -> ProductResult<()> {
    if name.is_empty() {
        return Err(ProductError::Validation("name is required".to_string()));
    }
    if price == 0.0 {
        return Err(ProductError::Validation("price is required".to_string()));
    }
    if !price.is_finite() || price < 0.0 {
        return Err(ProductError::Validation("invalid price".to_string()));
    }
    Ok(())
}

/// DTO for creating a new product
///
/// Missing fields decode to their zero value and are then rejected by
/// validation, so the client gets "name is required" rather than a decode error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateProduct {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

/// DTO for replacing an existing product (PUT semantics)
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProduct {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

/// Query string for listing products
///
/// Values are kept as raw strings: anything that is not an integer counts as
/// 0, which disables pagination.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListProductsQuery {
    /// 1-based page number
    pub page: Option<String>,
    /// Page size
    pub limit: Option<String>,
    /// `asc` (default) or `desc`, by id
    pub sort: Option<String>,
}

impl ListProductsQuery {
    pub fn to_page_request(&self) -> PageRequest {
        fn lenient(raw: Option<&str>) -> i64 {
            raw.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
        }

        PageRequest {
            page: lenient(self.page.as_deref()),
            limit: lenient(self.limit.as_deref()),
            sort: SortOrder::parse_lenient(self.sort.as_deref()),
        }
    }
}
