//! gRPC tests calling the tonic service implementation directly.

mod support;

use tonic::{Code, Request};

use product_service_lib::grpc::ProductGrpcService;
use proto::product::{
    CreateProductRequest, GetProductRequest, GetProductsRequest, UpdateProductRequest,
    UpdateProductStockRequest,
};
use proto::ProductService as _;

fn grpc() -> ProductGrpcService {
    ProductGrpcService::new(support::service())
}

async fn create_widget(svc: &ProductGrpcService) -> i64 {
    svc.create_product(Request::new(CreateProductRequest {
        name: Some("widget".to_string()),
        price: Some("9.99".to_string()),
        stock: Some(10),
    }))
    .await
    .unwrap()
    .into_inner()
    .id
}

#[tokio::test]
async fn test_create_and_get_product() {
    let svc = grpc();
    let id = create_widget(&svc).await;

    let product = svc
        .get_product(Request::new(GetProductRequest { id: Some(id) }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(product.name, "widget");
    assert_eq!(product.price, "9.99");
    assert_eq!(product.stock, 10);
}

#[tokio::test]
async fn test_update_stock_then_list() {
    let svc = grpc();
    let id = create_widget(&svc).await;

    let ack = svc
        .update_product_stock(Request::new(UpdateProductStockRequest {
            id: Some(id),
            stock: Some(0),
        }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(ack.msg, "Success!");

    let products = svc
        .get_products(Request::new(GetProductsRequest {
            name: Some("widget".to_string()),
        }))
        .await
        .unwrap()
        .into_inner()
        .products;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].stock, 0);
}

#[tokio::test]
async fn test_malformed_price_is_invalid_argument() {
    let svc = grpc();

    let status = svc
        .create_product(Request::new(CreateProductRequest {
            name: Some("widget".to_string()),
            price: Some("cheap".to_string()),
            stock: Some(1),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn test_update_unknown_product_is_not_found() {
    let svc = grpc();

    let status = svc
        .update_product(Request::new(UpdateProductRequest {
            id: Some(404),
            name: Some("gizmo".to_string()),
            price: Some("1.00".to_string()),
            stock: Some(1),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::NotFound);
}
