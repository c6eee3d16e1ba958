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
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use serde_json::Value;
use tower::ServiceExt;

use common::AppResult;
use domain::{NewProduct, Product};
use product_service_lib::api::{create_router, AppState};
use product_service_lib::infra::Database;
use product_service_lib::repository::ProductRepository;
use product_service_lib::service::{ProductManager, ProductService};

/// Repository that keeps rows in memory.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
}

impl InMemoryProductRepository {
    fn update_with(&self, id: i64, apply: impl Fn(&mut Product)) -> u64 {
        let mut products = self.products.lock().unwrap();
        match products.iter_mut().find(|p| p.id == id) {
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
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: NewProduct) -> AppResult<i64> {
        let mut products = self.products.lock().unwrap();
        let id = products.len() as i64 + 1;
        products.push(Product {
            id,
            name: product.name,
            price: product.price,
            stock: product.stock,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        let products = self.products.lock().unwrap();
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Product>> {
        let products = self.products.lock().unwrap();
        Ok(products.iter().filter(|p| p.name == name).cloned().collect())
    }

    async fn update(&self, id: i64, product: NewProduct) -> AppResult<u64> {
        Ok(self.update_with(id, |row| {
            row.name = product.name.clone();
            row.price = product.price;
            row.stock = product.stock;
        }))
    }

    async fn update_stock(&self, id: i64, stock: i32) -> AppResult<u64> {
        Ok(self.update_with(id, |row| row.stock = stock))
    }
}

/// Service backed by a fresh in-memory repository.
pub fn service() -> Arc<dyn ProductService> {
    Arc::new(ProductManager::new(Arc::new(
        InMemoryProductRepository::default(),
    )))
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
