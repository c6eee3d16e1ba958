//! gRPC transport.

mod product_grpc;

pub use product_grpc::ProductGrpcService;
