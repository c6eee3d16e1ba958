//! OpenAPI documentation.

use utoipa::OpenApi;

use common::{ErrorResponse, IdResponse};
use domain::{
    CreateOrder, GetOrder, GetOrdersByUser, Order, OrderStatus, UpdateOrder, UpdateOrderStatus,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::create_order,
        super::handlers::get_order,
        super::handlers::get_orders_by_user,
        super::handlers::update_order,
        super::handlers::update_order_status,
    ),
    components(
        schemas(
            CreateOrder,
            GetOrder,
            GetOrdersByUser,
            Order,
            OrderStatus,
            UpdateOrder,
            UpdateOrderStatus,
            IdResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Orders", description = "Orders placed by users"),
    )
)]
pub struct ApiDoc;
