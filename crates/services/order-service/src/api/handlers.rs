//! Order handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post, put},
    Router,
};

use common::{AppResult, Created, ErrorResponse, IdResponse, JsonBody, NoContent};
use domain::{CreateOrder, GetOrder, GetOrdersByUser, Order, UpdateOrder, UpdateOrderStatus};

use super::state::AppState;

/// Create order routes
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/order", post(create_order).get(get_order).put(update_order))
        .route("/user-order", get(get_orders_by_user))
        .route("/order/status", put(update_order_status))
}

/// Place an order
#[utoipa::path(
    post,
    path = "/api/v1/order",
    tag = "Orders",
    request_body = CreateOrder,
    responses(
        (status = 201, description = "Order created", body = IdResponse),
        (status = 400, description = "Invalid input or unknown user", body = ErrorResponse)
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateOrder>,
) -> AppResult<Created> {
    let id = state.order_service.create_order(input).await?;
    Ok(Created(id))
}

/// Get order by ID
#[utoipa::path(
    get,
    path = "/api/v1/order",
    tag = "Orders",
    request_body = GetOrder,
    responses(
        (status = 200, description = "Order found", body = Order),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<GetOrder>,
) -> AppResult<Json<Order>> {
    let order = state.order_service.get_order(input).await?;
    Ok(Json(order))
}

/// List the orders of a user
#[utoipa::path(
    get,
    path = "/api/v1/user-order",
    tag = "Orders",
    request_body = GetOrdersByUser,
    responses(
        (status = 200, description = "Orders of the user, possibly none", body = Vec<Order>),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    )
)]
pub async fn get_orders_by_user(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<GetOrdersByUser>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = state.order_service.get_orders_by_user(input).await?;
    Ok(Json(orders))
}

/// Replace status and total price of an order
#[utoipa::path(
    put,
    path = "/api/v1/order",
    tag = "Orders",
    request_body = UpdateOrder,
    responses(
        (status = 204, description = "Order updated"),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    )
)]
pub async fn update_order(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<UpdateOrder>,
) -> AppResult<NoContent> {
    state.order_service.update_order(input).await?;
    Ok(NoContent)
}

/// Change the status of an order
#[utoipa::path(
    put,
    path = "/api/v1/order/status",
    tag = "Orders",
    request_body = UpdateOrderStatus,
    responses(
        (status = 204, description = "Status updated"),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    )
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<UpdateOrderStatus>,
) -> AppResult<NoContent> {
    state.order_service.update_order_status(input).await?;
    Ok(NoContent)
}
