//! Product service - validation and business rules for the catalogue.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::constants::ENTITY_PRODUCT;
use domain::{
    CreateProduct, DomainError, GetProduct, GetProducts, Product, UpdateProduct,
    UpdateProductStock,
};

use crate::repository::ProductRepository;

/// Product service trait for dependency injection.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Create a product, returning its id
    async fn create_product(&self, input: CreateProduct) -> AppResult<i64>;

    /// Get product by ID
    async fn get_product(&self, input: GetProduct) -> AppResult<Product>;

    /// All products with the given name; empty when none match
    async fn get_products(&self, input: GetProducts) -> AppResult<Vec<Product>>;

    /// Replace name, price and stock
    async fn update_product(&self, input: UpdateProduct) -> AppResult<()>;

    /// Set the stock level
    async fn update_product_stock(&self, input: UpdateProductStock) -> AppResult<()>;
}

/// Concrete implementation of ProductService using repository.
pub struct ProductManager {
    repo: Arc<dyn ProductRepository>,
}

impl ProductManager {
    /// Create new product service instance with repository
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }
}

fn rejected(operation: &str, err: DomainError) -> AppError {
    tracing::info!(operation, error = %err, "Request rejected");
    AppError::from(err)
}

fn changed(rows: u64) -> AppResult<()> {
    match rows {
        0 => Err(AppError::NotFound(ENTITY_PRODUCT)),
        _ => Ok(()),
    }
}

#[async_trait]
impl ProductService for ProductManager {
    async fn create_product(&self, input: CreateProduct) -> AppResult<i64> {
        let product = input
            .into_new_product()
            .map_err(|e| rejected("create_product", e))?;

        self.repo.create(product).await
    }

    async fn get_product(&self, input: GetProduct) -> AppResult<Product> {
        let id = input.into_id().map_err(|e| rejected("get_product", e))?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(ENTITY_PRODUCT)
    }

    async fn get_products(&self, input: GetProducts) -> AppResult<Vec<Product>> {
        let name = input.into_name().map_err(|e| rejected("get_products", e))?;

        self.repo.find_by_name(&name).await
    }

    async fn update_product(&self, input: UpdateProduct) -> AppResult<()> {
        let (id, product) = input
            .into_parts()
            .map_err(|e| rejected("update_product", e))?;

        changed(self.repo.update(id, product).await?)
    }

    async fn update_product_stock(&self, input: UpdateProductStock) -> AppResult<()> {
        let (id, stock) = input
            .into_parts()
            .map_err(|e| rejected("update_product_stock", e))?;

        changed(self.repo.update_stock(id, stock).await?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::eq;
    use rust_decimal::Decimal;

    use super::*;
    use crate::repository::MockProductRepository;
    use domain::NewProduct;

    fn product(id: i64) -> Product {
        Product {
            id,
            name: "widget".to_string(),
            price: Decimal::new(999, 2),
            stock: 10,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(repo: MockProductRepository) -> ProductManager {
        ProductManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_product_success() {
        let mut repo = MockProductRepository::new();
        repo.expect_create()
            .with(eq(NewProduct {
                name: "widget".to_string(),
                price: Decimal::new(999, 2),
                stock: 10,
            }))
            .times(1)
            .returning(|_| Ok(1));

        let id = service(repo)
            .create_product(CreateProduct {
                name: Some("widget".to_string()),
                price: Some(Decimal::new(999, 2)),
                stock: Some(10),
            })
            .await
            .unwrap();

        assert_eq!(id, 1);
    }

    #[tokio::test]
    async fn test_create_product_without_name_never_reaches_store() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().never();

        let err = service(repo)
            .create_product(CreateProduct {
                name: None,
                price: Some(Decimal::ONE),
                stock: Some(1),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(ref m) if m == "name field cannot be empty"));
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().with(eq(404)).returning(|_| Ok(None));

        let err = service(repo)
            .get_product(GetProduct { id: Some(404) })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(ENTITY_PRODUCT)));
    }

    #[tokio::test]
    async fn test_get_product_success() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .with(eq(3))
            .returning(|id| Ok(Some(product(id))));

        let found = service(repo)
            .get_product(GetProduct { id: Some(3) })
            .await
            .unwrap();

        assert_eq!(found.id, 3);
    }

    #[tokio::test]
    async fn test_get_products_empty_is_ok() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_name().returning(|_| Ok(vec![]));

        let products = service(repo)
            .get_products(GetProducts {
                name: Some("gadget".to_string()),
            })
            .await
            .unwrap();

        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_update_stock_to_zero() {
        let mut repo = MockProductRepository::new();
        repo.expect_update_stock()
            .with(eq(1), eq(0))
            .times(1)
            .returning(|_, _| Ok(1));

        service(repo)
            .update_product_stock(UpdateProductStock {
                id: Some(1),
                stock: Some(0),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_stock_missing_product() {
        let mut repo = MockProductRepository::new();
        repo.expect_update_stock().returning(|_, _| Ok(0));

        let err = service(repo)
            .update_product_stock(UpdateProductStock {
                id: Some(404),
                stock: Some(5),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(ENTITY_PRODUCT)));
    }

    #[tokio::test]
    async fn test_update_product_negative_stock() {
        let mut repo = MockProductRepository::new();
        repo.expect_update().never();

        let err = service(repo)
            .update_product(UpdateProduct {
                id: Some(1),
                name: Some("widget".to_string()),
                price: Some(Decimal::ONE),
                stock: Some(-3),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(ref m) if m == "stock field cannot be negative"));
    }
}
