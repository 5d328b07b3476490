use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect};
use uuid::Uuid;

use crate::{
    entity,
    error::ProductResult,
    models::Product,
    pagination::{PageRequest, SortOrder},
    repository::ProductRepository,
};

/// SQL-backed repository (SQLite or PostgreSQL through SeaORM)
#[derive(Clone)]
pub struct SqlProductRepository {
    db: DatabaseConnection,
}

impl SqlProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// Drivers bind OFFSET/LIMIT as signed 64-bit integers
fn clamp_to_i64(value: u64) -> u64 {
    value.min(i64::MAX as u64)
}

#[async_trait]
impl ProductRepository for SqlProductRepository {
    async fn create(&self, product: Product) -> ProductResult<()> {
        let id = product.id;
        let active_model: entity::ActiveModel = product.into();

        entity::Entity::insert(active_model).exec(&self.db).await?;

        tracing::info!(product_id = %id, "Created product");
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self, request: PageRequest) -> ProductResult<Vec<Product>> {
        let order = match request.sort {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        let mut query = entity::Entity::find().order_by(entity::Column::Id, order);

        if let Some(window) = request.window() {
            query = query
                .offset(clamp_to_i64(window.offset))
                .limit(clamp_to_i64(window.limit));
        }

        let models = query.all(&self.db).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, product: Product) -> ProductResult<()> {
        let result = entity::Entity::update_many()
            .col_expr(entity::Column::Name, Expr::value(product.name))
            .col_expr(entity::Column::Price, Expr::value(product.price))
            .filter(entity::Column::Id.eq(product.id))
            .exec(&self.db)
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = %product.id, "Updated product");
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = %id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
