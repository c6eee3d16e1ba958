//! gRPC tests calling the tonic service implementation directly.

mod support;

use tonic::{Code, Request};

use proto::user::{
    CheckPasswordRequest, CreateUserProfileRequest, CreateUserRequest, GetUserProfileRequest,
    GetUserRequest, UpdateUserProfileRequest,
};
use proto::UserService as _;
use user_service_lib::grpc::UserGrpcService;

fn grpc() -> UserGrpcService {
    UserGrpcService::new(support::service())
}

async fn create_user(svc: &UserGrpcService, email: &str, password: &str) -> i64 {
    svc.create_user(Request::new(CreateUserRequest {
        email: Some(email.to_string()),
        password: Some(password.to_string()),
    }))
    .await
    .unwrap()
    .into_inner()
    .id
}

#[tokio::test]
async fn test_create_and_get_user() {
    let svc = grpc();
    let id = create_user(&svc, "testEmail@test.test", "testing").await;
    assert!(id > 0);

    let user = svc
        .get_user(Request::new(GetUserRequest {
            email: Some("testEmail@test.test".to_string()),
        }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(user.id, id);
    assert_eq!(user.email, "testEmail@test.test");
    assert!(!user.created_at.is_empty());
}

#[tokio::test]
async fn test_unset_field_is_invalid_argument() {
    let svc = grpc();

    let status = svc
        .create_user(Request::new(CreateUserRequest {
            email: Some("a@b.c".to_string()),
            password: None,
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), "password field cannot be empty");
}

#[tokio::test]
async fn test_get_unknown_user_is_not_found() {
    let svc = grpc();

    let status = svc
        .get_user(Request::new(GetUserRequest {
            email: Some("nobody@test.test".to_string()),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn test_check_password() {
    let svc = grpc();
    create_user(&svc, "testEmail@test.test", "testing").await;

    let check = |password: &str| {
        svc.check_password(Request::new(CheckPasswordRequest {
            email: Some("testEmail@test.test".to_string()),
            password: Some(password.to_string()),
        }))
    };

    assert!(check("testing").await.unwrap().into_inner().valid);
    assert!(!check("testing2").await.unwrap().into_inner().valid);
}

#[tokio::test]
async fn test_profile_round_trip() {
    let svc = grpc();
    let user_id = create_user(&svc, "owner@test.test", "testing").await;

    let profile_id = svc
        .create_user_profile(Request::new(CreateUserProfileRequest {
            user_id: Some(user_id),
            name: Some("tester".to_string()),
            photo: Some("p.png".to_string()),
            country: Some("DO".to_string()),
            address: Some("Calle 1".to_string()),
            phone: Some("809".to_string()),
        }))
        .await
        .unwrap()
        .into_inner()
        .id;

    let ack = svc
        .update_user_profile(Request::new(UpdateUserProfileRequest {
            user_id: Some(user_id),
            name: Some("renamed".to_string()),
            photo: Some("q.png".to_string()),
            country: Some("US".to_string()),
            address: Some("Main St".to_string()),
            phone: Some("555".to_string()),
        }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(ack.msg, "Success!");

    let profile = svc
        .get_user_profile(Request::new(GetUserProfileRequest {
            user_id: Some(user_id),
        }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(profile.id, profile_id);
    assert_eq!(profile.name, "renamed");
    assert_eq!(profile.country, "US");
}
