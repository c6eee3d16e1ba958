//! Product repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use common::AppResult;
use domain::{NewProduct, Product};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product repository trait for dependency injection.
///
/// Updates return the number of rows changed; zero means no such product.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product, returning its id
    async fn create(&self, product: NewProduct) -> AppResult<i64>;

    /// Find product by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>>;

    /// Every product with exactly this name, by ascending id
    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Product>>;

    /// Replace name, price and stock
    async fn update(&self, id: i64, product: NewProduct) -> AppResult<u64>;

    /// Set the stock level only
    async fn update_stock(&self, id: i64, stock: i32) -> AppResult<u64>;
}

/// Concrete implementation of ProductRepository
pub struct ProductStore {
    db: Arc<DatabaseConnection>,
}

impl ProductStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn update_where_id(&self, id: i64, values: ActiveModel) -> AppResult<u64> {
        let result = ProductEntity::update_many()
            .set(values)
            .filter(product::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected)
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn create(&self, product: NewProduct) -> AppResult<i64> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(product.name),
            price: Set(product.price),
            stock: Set(product.stock),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = ProductEntity::insert(active_model).exec(self.db.as_ref()).await?;
        Ok(result.last_insert_id)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        let result = ProductEntity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(result.map(Product::from))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Product>> {
        let models = ProductEntity::find()
            .filter(product::Column::Name.eq(name))
            .order_by_asc(product::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn update(&self, id: i64, product: NewProduct) -> AppResult<u64> {
        self.update_where_id(
            id,
            ActiveModel {
                name: Set(product.name),
                price: Set(product.price),
                stock: Set(product.stock),
                updated_at: Set(Utc::now()),
                ..Default::default()
            },
        )
        .await
    }

    async fn update_stock(&self, id: i64, stock: i32) -> AppResult<u64> {
        self.update_where_id(
            id,
            ActiveModel {
                stock: Set(stock),
                updated_at: Set(Utc::now()),
                ..Default::default()
            },
        )
        .await
    }
}
