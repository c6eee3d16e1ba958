//! Order service - validation and business rules for orders.
//!
//! The service trusts callers with `user_id`; an unknown user surfaces as the
//! store's foreign-key rejection.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::constants::ENTITY_ORDER;
use domain::{
    CreateOrder, DomainError, GetOrder, GetOrdersByUser, Order, UpdateOrder, UpdateOrderStatus,
};

use crate::repository::OrderRepository;

/// Order service trait for dependency injection.
#[async_trait]
pub trait OrderService: Send + Sync {
    async fn create_order(&self, input: CreateOrder) -> AppResult<i64>;

    async fn get_order(&self, input: GetOrder) -> AppResult<Order>;

    /// Orders placed by one user; empty when there are none
    async fn get_orders_by_user(&self, input: GetOrdersByUser) -> AppResult<Vec<Order>>;

    /// Replace status and total price
    async fn update_order(&self, input: UpdateOrder) -> AppResult<()>;

    /// Move an order to another status. Any status may follow any other.
    async fn update_order_status(&self, input: UpdateOrderStatus) -> AppResult<()>;
}

/// Concrete implementation of OrderService using repository.
pub struct OrderManager {
    repo: Arc<dyn OrderRepository>,
}

impl OrderManager {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self { repo }
    }
}

fn rejected(operation: &str, err: DomainError) -> AppError {
    tracing::info!(operation, error = %err, "Request rejected");
    AppError::from(err)
}

fn changed(rows: u64) -> AppResult<()> {
    match rows {
        0 => Err(AppError::NotFound(ENTITY_ORDER)),
        _ => Ok(()),
    }
}

#[async_trait]
impl OrderService for OrderManager {
    async fn create_order(&self, input: CreateOrder) -> AppResult<i64> {
        let order = input
            .into_new_order()
            .map_err(|e| rejected("create_order", e))?;

        self.repo.create(order).await
    }

    async fn get_order(&self, input: GetOrder) -> AppResult<Order> {
        let id = input.into_id().map_err(|e| rejected("get_order", e))?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(ENTITY_ORDER)
    }

    async fn get_orders_by_user(&self, input: GetOrdersByUser) -> AppResult<Vec<Order>> {
        let user_id = input
            .into_user_id()
            .map_err(|e| rejected("get_orders_by_user", e))?;

        self.repo.find_by_user(user_id).await
    }

    async fn update_order(&self, input: UpdateOrder) -> AppResult<()> {
        let (id, status, total_price) = input
            .into_parts()
            .map_err(|e| rejected("update_order", e))?;

        changed(self.repo.update(id, status, total_price).await?)
    }

    async fn update_order_status(&self, input: UpdateOrderStatus) -> AppResult<()> {
        let (id, status) = input
            .into_parts()
            .map_err(|e| rejected("update_order_status", e))?;

        changed(self.repo.update_status(id, status).await?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::eq;
    use rust_decimal::Decimal;

    use super::*;
    use crate::repository::MockOrderRepository;
    use domain::{NewOrder, OrderStatus};

    fn service(repo: MockOrderRepository) -> OrderManager {
        OrderManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_order_success() {
        let mut repo = MockOrderRepository::new();
        repo.expect_create()
            .with(eq(NewOrder {
                user_id: 7,
                total_price: Decimal::new(2550, 2),
                status: OrderStatus::Pending,
            }))
            .times(1)
            .returning(|_| Ok(1));

        let id = service(repo)
            .create_order(CreateOrder {
                user_id: Some(7),
                total_price: Some(Decimal::new(2550, 2)),
                status: Some("pending".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(id, 1);
    }

    #[tokio::test]
    async fn test_create_order_unknown_status() {
        let mut repo = MockOrderRepository::new();
        repo.expect_create().never();

        let err = service(repo)
            .create_order(CreateOrder {
                user_id: Some(7),
                total_price: Some(Decimal::ONE),
                status: Some("lost".to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Validation(ref m)
                if m == "status field must be one of: pending, shipped, completed, cancelled"
        ));
    }

    #[tokio::test]
    async fn test_create_order_reports_every_missing_field() {
        let mut repo = MockOrderRepository::new();
        repo.expect_create().never();

        let err = service(repo)
            .create_order(CreateOrder::default())
            .await
            .unwrap_err();

        let AppError::Validation(message) = err else {
            panic!("expected a validation error");
        };
        assert!(message.contains("user_id field cannot be empty"));
        assert!(message.contains("total_price field cannot be empty"));
        assert!(message.contains("status field cannot be empty"));
    }

    #[tokio::test]
    async fn test_get_order_not_found() {
        let mut repo = MockOrderRepository::new();
        repo.expect_find_by_id().with(eq(9)).returning(|_| Ok(None));

        let err = service(repo)
            .get_order(GetOrder { id: Some(9) })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(ENTITY_ORDER)));
    }

    #[tokio::test]
    async fn test_get_orders_by_user() {
        let mut repo = MockOrderRepository::new();
        repo.expect_find_by_user().with(eq(7)).returning(|user_id| {
            Ok(vec![Order {
                id: 1,
                user_id,
                total_price: Decimal::new(2550, 2),
                status: OrderStatus::Shipped,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }])
        });

        let orders = service(repo)
            .get_orders_by_user(GetOrdersByUser { user_id: Some(7) })
            .await
            .unwrap();

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].status, OrderStatus::Shipped);
    }

    #[tokio::test]
    async fn test_status_may_go_backwards() {
        let mut repo = MockOrderRepository::new();
        repo.expect_update_status()
            .with(eq(1), eq(OrderStatus::Pending))
            .times(1)
            .returning(|_, _| Ok(1));

        service(repo)
            .update_order_status(UpdateOrderStatus {
                id: Some(1),
                status: Some("pending".to_string()),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_order_zero_rows_is_not_found() {
        let mut repo = MockOrderRepository::new();
        repo.expect_update().returning(|_, _, _| Ok(0));

        let err = service(repo)
            .update_order(UpdateOrder {
                id: Some(404),
                status: Some("shipped".to_string()),
                total_price: Some(Decimal::TEN),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(ENTITY_ORDER)));
    }

    #[tokio::test]
    async fn test_update_order_rejects_non_positive_total() {
        let mut repo = MockOrderRepository::new();
        repo.expect_update().never();

        let err = service(repo)
            .update_order(UpdateOrder {
                id: Some(1),
                status: Some("shipped".to_string()),
                total_price: Some(Decimal::ZERO),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Validation(ref m) if m == "total_price field must be positive"
        ));
    }
}
