//! gRPC implementation for UserService.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::service::UserService;
use domain::constants::SUCCESS_MESSAGE;
use domain::{CheckPassword, CreateUser, GetProfile, GetUser, ProfileInput};
use proto::user::{
    user_service_server::UserService as UserServiceProto, CheckPasswordRequest,
    CheckPasswordResponse, CreateUserProfileRequest, CreateUserProfileResponse,
    CreateUserRequest, CreateUserResponse, GetUserProfileRequest, GetUserRequest, Profile,
    SuccessResponse, UpdateUserProfileRequest, User,
};

/// gRPC service wrapper for UserService.
pub struct UserGrpcService {
    service: Arc<dyn UserService>,
}

impl UserGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(service: Arc<dyn UserService>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl UserServiceProto for UserGrpcService {
    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<CreateUserResponse>, Status> {
        let req = request.into_inner();

        let id = self
            .service
            .create_user(CreateUser {
                email: req.email,
                password: req.password,
            })
            .await?;
        Ok(Response::new(CreateUserResponse { id }))
    }

    async fn get_user(&self, request: Request<GetUserRequest>) -> Result<Response<User>, Status> {
        let req = request.into_inner();

        let user = self.service.get_user(GetUser { email: req.email }).await?;
        Ok(Response::new(user_to_proto(&user)))
    }

    async fn check_password(
        &self,
        request: Request<CheckPasswordRequest>,
    ) -> Result<Response<CheckPasswordResponse>, Status> {
        let req = request.into_inner();

        let valid = self
            .service
            .check_password(CheckPassword {
                email: req.email,
                password: req.password,
            })
            .await?;
        Ok(Response::new(CheckPasswordResponse { valid }))
    }

    async fn create_user_profile(
        &self,
        request: Request<CreateUserProfileRequest>,
    ) -> Result<Response<CreateUserProfileResponse>, Status> {
        let req = request.into_inner();

        let id = self
            .service
            .create_profile(ProfileInput {
                user_id: req.user_id,
                name: req.name,
                photo: req.photo,
                country: req.country,
                address: req.address,
                phone: req.phone,
            })
            .await?;
        Ok(Response::new(CreateUserProfileResponse { id }))
    }

    async fn get_user_profile(
        &self,
        request: Request<GetUserProfileRequest>,
    ) -> Result<Response<Profile>, Status> {
        let req = request.into_inner();

        let profile = self
            .service
            .get_profile(GetProfile {
                user_id: req.user_id,
            })
            .await?;
        Ok(Response::new(profile_to_proto(&profile)))
    }

    async fn update_user_profile(
        &self,
        request: Request<UpdateUserProfileRequest>,
    ) -> Result<Response<SuccessResponse>, Status> {
        let req = request.into_inner();

        self.service
            .update_profile(ProfileInput {
                user_id: req.user_id,
                name: req.name,
                photo: req.photo,
                country: req.country,
                address: req.address,
                phone: req.phone,
            })
            .await?;
        Ok(Response::new(SuccessResponse {
            msg: SUCCESS_MESSAGE.to_string(),
        }))
    }
}

/// Convert domain User to proto User (no password hash).
fn user_to_proto(user: &domain::User) -> User {
    User {
        id: user.id,
        email: user.email.clone(),
        created_at: user.created_at.to_rfc3339(),
        updated_at: user.updated_at.to_rfc3339(),
    }
}

fn profile_to_proto(profile: &domain::Profile) -> Profile {
    Profile {
        id: profile.id,
        user_id: profile.user_id,
        name: profile.name.clone(),
        photo: profile.photo.clone(),
        country: profile.country.clone(),
        address: profile.address.clone(),
        phone: profile.phone.clone(),
        created_at: profile.created_at.to_rfc3339(),
        updated_at: profile.updated_at.to_rfc3339(),
    }
}
