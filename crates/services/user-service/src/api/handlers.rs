//! User and profile handlers.
//!
//! Reads take their lookup key from the JSON body, GET included.

use axum::{
    extract::State,
    response::Json,
    routing::post,
    Router,
};

use common::{AppResult, Created, ErrorResponse, IdResponse, JsonBody, NoContent};
use domain::{CreateUser, GetProfile, GetUser, Profile, ProfileInput, User};

use super::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", post(create_user).get(get_user))
        .route(
            "/user/profile",
            post(create_profile).get(get_profile).put(update_profile),
        )
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/v1/user",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = IdResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateUser>,
) -> AppResult<Created> {
    let id = state.user_service.create_user(input).await?;
    Ok(Created(id))
}

/// Get user by email
#[utoipa::path(
    get,
    path = "/api/v1/user",
    tag = "Users",
    request_body = GetUser,
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<GetUser>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(input).await?;
    Ok(Json(user))
}

/// Create a profile for a user
#[utoipa::path(
    post,
    path = "/api/v1/user/profile",
    tag = "Profiles",
    request_body = ProfileInput,
    responses(
        (status = 201, description = "Profile created", body = IdResponse),
        (status = 400, description = "Invalid input or unknown user", body = ErrorResponse)
    )
)]
pub async fn create_profile(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ProfileInput>,
) -> AppResult<Created> {
    let id = state.user_service.create_profile(input).await?;
    Ok(Created(id))
}

/// Get the profile of a user
#[utoipa::path(
    get,
    path = "/api/v1/user/profile",
    tag = "Profiles",
    request_body = GetProfile,
    responses(
        (status = 200, description = "Profile found", body = Profile),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Profile not found", body = ErrorResponse)
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<GetProfile>,
) -> AppResult<Json<Profile>> {
    let profile = state.user_service.get_profile(input).await?;
    Ok(Json(profile))
}

/// Replace the profile fields of a user
#[utoipa::path(
    put,
    path = "/api/v1/user/profile",
    tag = "Profiles",
    request_body = ProfileInput,
    responses(
        (status = 204, description = "Profile updated"),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Profile not found", body = ErrorResponse)
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ProfileInput>,
) -> AppResult<NoContent> {
    state.user_service.update_profile(input).await?;
    Ok(NoContent)
}
