//! gRPC implementation for OrderService.

use std::sync::Arc;

use rust_decimal::Decimal;
use tonic::{Request, Response, Status};

use crate::service::OrderService;
use domain::constants::SUCCESS_MESSAGE;
use domain::{CreateOrder, GetOrder, GetOrdersByUser, UpdateOrder, UpdateOrderStatus};
use proto::order::{
    order_service_server::OrderService as OrderServiceProto, CreateOrderRequest,
    CreateOrderResponse, GetOrderRequest, GetOrdersByUserRequest, GetOrdersByUserResponse, Order,
    SuccessResponse, UpdateOrderRequest, UpdateOrderStatusRequest,
};

/// gRPC service wrapper for OrderService.
pub struct OrderGrpcService {
    service: Arc<dyn OrderService>,
}

impl OrderGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(service: Arc<dyn OrderService>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl OrderServiceProto for OrderGrpcService {
    async fn create_order(
        &self,
        request: Request<CreateOrderRequest>,
    ) -> Result<Response<CreateOrderResponse>, Status> {
        let req = request.into_inner();

        let id = self
            .service
            .create_order(CreateOrder {
                user_id: req.user_id,
                total_price: parse_total_price(req.total_price)?,
                status: req.status,
            })
            .await?;
        Ok(Response::new(CreateOrderResponse { id }))
    }

    async fn get_order(&self, request: Request<GetOrderRequest>) -> Result<Response<Order>, Status> {
        let req = request.into_inner();

        let order = self.service.get_order(GetOrder { id: req.id }).await?;
        Ok(Response::new(order_to_proto(&order)))
    }

    async fn get_orders_by_user(
        &self,
        request: Request<GetOrdersByUserRequest>,
    ) -> Result<Response<GetOrdersByUserResponse>, Status> {
        let req = request.into_inner();

        let orders = self
            .service
            .get_orders_by_user(GetOrdersByUser {
                user_id: req.user_id,
            })
            .await?;
        Ok(Response::new(GetOrdersByUserResponse {
            orders: orders.iter().map(order_to_proto).collect(),
        }))
    }

    async fn update_order(
        &self,
        request: Request<UpdateOrderRequest>,
    ) -> Result<Response<SuccessResponse>, Status> {
        let req = request.into_inner();

        self.service
            .update_order(UpdateOrder {
                id: req.id,
                status: req.status,
                total_price: parse_total_price(req.total_price)?,
            })
            .await?;
        Ok(success())
    }

    async fn update_order_status(
        &self,
        request: Request<UpdateOrderStatusRequest>,
    ) -> Result<Response<SuccessResponse>, Status> {
        let req = request.into_inner();

        self.service
            .update_order_status(UpdateOrderStatus {
                id: req.id,
                status: req.status,
            })
            .await?;
        Ok(success())
    }
}

fn parse_total_price(value: Option<String>) -> Result<Option<Decimal>, Status> {
    value
        .map(|v| {
            v.trim().parse::<Decimal>().map_err(|_| {
                Status::invalid_argument("total_price field must be a decimal number")
            })
        })
        .transpose()
}

fn success() -> Response<SuccessResponse> {
    Response::new(SuccessResponse {
        msg: SUCCESS_MESSAGE.to_string(),
    })
}

fn order_to_proto(order: &domain::Order) -> Order {
    Order {
        id: order.id,
        user_id: order.user_id,
        total_price: order.total_price.to_string(),
        status: order.status.to_string(),
        created_at: order.created_at.to_rfc3339(),
        updated_at: order.updated_at.to_rfc3339(),
    }
}
