use serde::{Deserialize, Serialize};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

use crate::modules::auth::model::{LoginRequest, LoginResponse, TokenResponse};
use crate::modules::chirps::model::{Chirp, CreateChirpRequest};
use crate::modules::users::model::{CreateUserRequest, UpdateUserRequest, User};

/// Body of every error response, as rendered by `AppError`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::healthz,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::refresh_access_token,
        crate::modules::auth::controller::revoke_refresh_token,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::update_user,
        crate::modules::chirps::controller::create_chirp,
        crate::modules::chirps::controller::list_chirps,
        crate::modules::chirps::controller::get_chirp,
        crate::modules::chirps::controller::delete_chirp,
        crate::modules::admin::controller::show_metrics,
        crate::modules::admin::controller::reset,
    ),
    components(
        schemas(
            User,
            CreateUserRequest,
            UpdateUserRequest,
            LoginRequest,
            LoginResponse,
            TokenResponse,
            Chirp,
            CreateChirpRequest,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and refresh-token lifecycle"),
        (name = "Users", description = "Registration and credential updates"),
        (name = "Chirps", description = "Short messages"),
        (name = "Admin", description = "Visit counter and development reset"),
        (name = "Health", description = "Readiness probe")
    ),
    info(
        title = "Chirpy API",
        version = "0.1.0",
        description = "A small message board with password login, short-lived JWT access tokens and revocable refresh tokens.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT or refresh token")
                        .build(),
                ),
            )
        }
    }
}
