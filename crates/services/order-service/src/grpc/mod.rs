//! gRPC transport.

mod order_grpc;

pub use order_grpc::OrderGrpcService;
