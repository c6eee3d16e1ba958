//! In-memory repository and HTTP helpers shared by the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use serde_json::Value;
use tower::ServiceExt;

use common::{AppError, AppResult};
use domain::{NewOrder, Order, OrderStatus};
use order_service_lib::api::{create_router, AppState};
use order_service_lib::infra::Database;
use order_service_lib::repository::OrderRepository;
use order_service_lib::service::{OrderManager, OrderService};

/// Users that exist as far as the foreign key is concerned.
pub const KNOWN_USERS: &[i64] = &[1, 2];

/// Repository that keeps rows in memory and mimics the user foreign key.
#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: Mutex<Vec<Order>>,
}

impl InMemoryOrderRepository {
    fn update_with(&self, id: i64, apply: impl Fn(&mut Order)) -> u64 {
        let mut orders = self.orders.lock().unwrap();
        match orders.iter_mut().find(|o| o.id == id) {
            Some(row) => {
                apply(row);
                row.updated_at = Utc::now();
                1
            }
            None => 0,
        }
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: NewOrder) -> AppResult<i64> {
        if !KNOWN_USERS.contains(&order.user_id) {
            return Err(AppError::validation("referenced record does not exist"));
        }

        let mut orders = self.orders.lock().unwrap();
        let id = orders.len() as i64 + 1;
        orders.push(Order {
            id,
            user_id: order.user_id,
            total_price: order.total_price,
            status: order.status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Order>> {
        let orders = self.orders.lock().unwrap();
        Ok(orders.iter().find(|o| o.id == id).cloned())
    }

    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<Order>> {
        let orders = self.orders.lock().unwrap();
        Ok(orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: i64,
        status: OrderStatus,
        total_price: Decimal,
    ) -> AppResult<u64> {
        Ok(self.update_with(id, |row| {
            row.status = status;
            row.total_price = total_price;
        }))
    }

    async fn update_status(&self, id: i64, status: OrderStatus) -> AppResult<u64> {
        Ok(self.update_with(id, |row| row.status = status))
    }
}

/// Service backed by a fresh in-memory repository.
pub fn service() -> Arc<dyn OrderService> {
    Arc::new(OrderManager::new(Arc::new(InMemoryOrderRepository::default())))
}

/// Router over a fresh in-memory repository. The mock database answers a
/// single health ping.
pub fn app() -> Router {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    create_router(AppState::new(service(), Database::from_connection(db)))
}

/// Send a JSON request and decode the JSON response (Null when empty).
pub async fn send(app: &Router, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
