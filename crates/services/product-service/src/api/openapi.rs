//! OpenAPI documentation.

use utoipa::OpenApi;

use common::{ErrorResponse, IdResponse};
use domain::{CreateProduct, GetProduct, GetProducts, Product, UpdateProduct, UpdateProductStock};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::create_product,
        super::handlers::get_product,
        super::handlers::get_products,
        super::handlers::update_product,
        super::handlers::update_product_stock,
    ),
    components(
        schemas(
            CreateProduct,
            GetProduct,
            GetProducts,
            Product,
            UpdateProduct,
            UpdateProductStock,
            IdResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Products", description = "Product catalogue"),
        (name = "Stock", description = "Stock levels"),
    )
)]
pub struct ApiDoc;
