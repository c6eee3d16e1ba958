//! Order repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use super::entities::order::{self, ActiveModel, Entity as OrderEntity};
use common::AppResult;
use domain::{NewOrder, Order, OrderStatus};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Order repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert an order, returning its id
    async fn create(&self, order: NewOrder) -> AppResult<i64>;

    /// Find order by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Order>>;

    /// Every order of one user, by ascending id
    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<Order>>;

    /// Replace status and total price, returning rows changed
    async fn update(&self, id: i64, status: OrderStatus, total_price: Decimal)
        -> AppResult<u64>;

    /// Set the status only, returning rows changed
    async fn update_status(&self, id: i64, status: OrderStatus) -> AppResult<u64>;
}

/// Concrete implementation of OrderRepository
pub struct OrderStore {
    db: Arc<DatabaseConnection>,
}

impl OrderStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn update_where_id(&self, id: i64, values: ActiveModel) -> AppResult<u64> {
        let result = OrderEntity::update_many()
            .set(values)
            .filter(order::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected)
    }
}

#[async_trait]
impl OrderRepository for OrderStore {
    async fn create(&self, order: NewOrder) -> AppResult<i64> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: NotSet,
            user_id: Set(order.user_id),
            total_price: Set(order.total_price),
            status: Set(order.status.into()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = OrderEntity::insert(active_model).exec(self.db.as_ref()).await?;
        Ok(result.last_insert_id)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Order>> {
        let result = OrderEntity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(result.map(Order::from))
    }

    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<Order>> {
        let models = OrderEntity::find()
            .filter(order::Column::UserId.eq(user_id))
            .order_by_asc(order::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Order::from).collect())
    }

    async fn update(
        &self,
        id: i64,
        status: OrderStatus,
        total_price: Decimal,
    ) -> AppResult<u64> {
        self.update_where_id(
            id,
            ActiveModel {
                status: Set(status.into()),
                total_price: Set(total_price),
                updated_at: Set(Utc::now()),
                ..Default::default()
            },
        )
        .await
    }

    async fn update_status(&self, id: i64, status: OrderStatus) -> AppResult<u64> {
        self.update_where_id(
            id,
            ActiveModel {
                status: Set(status.into()),
                updated_at: Set(Utc::now()),
                ..Default::default()
            },
        )
        .await
    }
}
