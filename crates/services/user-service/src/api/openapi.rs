//! OpenAPI documentation.

use utoipa::OpenApi;

use common::{ErrorResponse, IdResponse};
use domain::{CreateUser, GetProfile, GetUser, Profile, ProfileInput, User};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::create_user,
        super::handlers::get_user,
        super::handlers::create_profile,
        super::handlers::get_profile,
        super::handlers::update_profile,
    ),
    components(
        schemas(
            CreateUser,
            GetUser,
            User,
            ProfileInput,
            GetProfile,
            Profile,
            IdResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Users", description = "User accounts"),
        (name = "Profiles", description = "User profiles"),
    )
)]
pub struct ApiDoc;
