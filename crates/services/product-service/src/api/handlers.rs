//! Product handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post, put},
    Router,
};

use common::{AppResult, Created, ErrorResponse, IdResponse, JsonBody, NoContent};
use domain::{CreateProduct, GetProduct, GetProducts, Product, UpdateProduct, UpdateProductStock};

use super::state::AppState;

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/product",
            post(create_product).get(get_product).put(update_product),
        )
        .route("/products", get(get_products))
        .route("/product/stock", put(update_product_stock))
}

/// Add a product to the catalogue
#[utoipa::path(
    post,
    path = "/api/v1/product",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = IdResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateProduct>,
) -> AppResult<Created> {
    let id = state.product_service.create_product(input).await?;
    Ok(Created(id))
}

/// Get product by ID
#[utoipa::path(
    get,
    path = "/api/v1/product",
    tag = "Products",
    request_body = GetProduct,
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<GetProduct>,
) -> AppResult<Json<Product>> {
    let product = state.product_service.get_product(input).await?;
    Ok(Json(product))
}

/// List products with an exact name
#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Products",
    request_body = GetProducts,
    responses(
        (status = 200, description = "Matching products, possibly none", body = Vec<Product>),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    )
)]
pub async fn get_products(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<GetProducts>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state.product_service.get_products(input).await?;
    Ok(Json(products))
}

/// Replace name, price and stock of a product
#[utoipa::path(
    put,
    path = "/api/v1/product",
    tag = "Products",
    request_body = UpdateProduct,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<UpdateProduct>,
) -> AppResult<NoContent> {
    state.product_service.update_product(input).await?;
    Ok(NoContent)
}

/// Set the stock level of a product
#[utoipa::path(
    put,
    path = "/api/v1/product/stock",
    tag = "Stock",
    request_body = UpdateProductStock,
    responses(
        (status = 204, description = "Stock updated"),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn update_product_stock(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<UpdateProductStock>,
) -> AppResult<NoContent> {
    state.product_service.update_product_stock(input).await?;
    Ok(NoContent)
}
