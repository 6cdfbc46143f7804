//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::gateway::handlers::{HealthResponse, LoginForm};

/// Session cookie security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    "access-token",
                    "Issued by POST /login, valid for 24 hours. Without it private signs \
                     answer 400 \"invalid sign name\" exactly like unknown ones.",
                ))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Signboard API",
        version = "1.0.0",
        description = "Scene, asset and program files of the sign catalog.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::signs::list_signs,
        crate::gateway::handlers::signs::get_scene,
        crate::gateway::handlers::signs::get_asset,
        crate::gateway::handlers::signs::list_programs,
        crate::gateway::handlers::signs::get_program,
        crate::gateway::handlers::login::login,
    ),
    components(
        schemas(
            HealthResponse,
            LoginForm,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Signs", description = "Sign catalog; private signs need a session"),
        (name = "Session", description = "Shared-password login"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;
