//! gRPC implementation for ProductService.

use std::sync::Arc;

use rust_decimal::Decimal;
use tonic::{Request, Response, Status};

use crate::service::ProductService;
use domain::constants::SUCCESS_MESSAGE;
use domain::{CreateProduct, GetProduct, GetProducts, UpdateProduct, UpdateProductStock};
use proto::product::{
    product_service_server::ProductService as ProductServiceProto, CreateProductRequest,
    CreateProductResponse, GetProductRequest, GetProductsRequest, GetProductsResponse, Product,
    SuccessResponse, UpdateProductRequest, UpdateProductStockRequest,
};

/// gRPC service wrapper for ProductService.
pub struct ProductGrpcService {
    service: Arc<dyn ProductService>,
}

impl ProductGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(service: Arc<dyn ProductService>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl ProductServiceProto for ProductGrpcService {
    async fn create_product(
        &self,
        request: Request<CreateProductRequest>,
    ) -> Result<Response<CreateProductResponse>, Status> {
        let req = request.into_inner();

        let id = self
            .service
            .create_product(CreateProduct {
                name: req.name,
                price: parse_price(req.price)?,
                stock: req.stock,
            })
            .await?;
        Ok(Response::new(CreateProductResponse { id }))
    }

    async fn get_product(
        &self,
        request: Request<GetProductRequest>,
    ) -> Result<Response<Product>, Status> {
        let req = request.into_inner();

        let product = self.service.get_product(GetProduct { id: req.id }).await?;
        Ok(Response::new(product_to_proto(&product)))
    }

    async fn get_products(
        &self,
        request: Request<GetProductsRequest>,
    ) -> Result<Response<GetProductsResponse>, Status> {
        let req = request.into_inner();

        let products = self
            .service
            .get_products(GetProducts { name: req.name })
            .await?;
        Ok(Response::new(GetProductsResponse {
            products: products.iter().map(product_to_proto).collect(),
        }))
    }

    async fn update_product(
        &self,
        request: Request<UpdateProductRequest>,
    ) -> Result<Response<SuccessResponse>, Status> {
        let req = request.into_inner();

        self.service
            .update_product(UpdateProduct {
                id: req.id,
                name: req.name,
                price: parse_price(req.price)?,
                stock: req.stock,
            })
            .await?;
        Ok(success())
    }

    async fn update_product_stock(
        &self,
        request: Request<UpdateProductStockRequest>,
    ) -> Result<Response<SuccessResponse>, Status> {
        let req = request.into_inner();

        self.service
            .update_product_stock(UpdateProductStock {
                id: req.id,
                stock: req.stock,
            })
            .await?;
        Ok(success())
    }
}

/// Parse an optional decimal string; an unset field stays unset.
fn parse_price(value: Option<String>) -> Result<Option<Decimal>, Status> {
    value
        .map(|v| {
            v.trim()
                .parse::<Decimal>()
                .map_err(|_| Status::invalid_argument("price field must be a decimal number"))
        })
        .transpose()
}

fn success() -> Response<SuccessResponse> {
    Response::new(SuccessResponse {
        msg: SUCCESS_MESSAGE.to_string(),
    })
}

/// Convert domain Product to proto Product.
fn product_to_proto(product: &domain::Product) -> Product {
    Product {
        id: product.id,
        name: product.name.clone(),
        price: product.price.to_string(),
        stock: product.stock,
        created_at: product.created_at.to_rfc3339(),
        updated_at: product.updated_at.to_rfc3339(),
    }
}
