//! OpenAPI specification assembly.
//!
//! Collects every utoipa-documented route into a single spec and serves the
//! rendered Swagger UI at `/docs` (raw document at `/docs/openapi.json`).

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

/// Adds the Bearer token security scheme to the OpenAPI spec.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token obtained from POST /auth/login."))
                        .build(),
                ),
            );
        }
    }
}

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Product catalog REST API with JWT authentication.",
        license(name = "MIT")
    ),
    paths(
        // Products
        crate::handlers::products::products_get,
        crate::handlers::products::products_post,
        crate::handlers::products::product_get,
        crate::handlers::products::product_put,
        crate::handlers::products::product_delete,
        // Auth
        crate::handlers::auth::register,
        crate::handlers::auth::login,
        crate::handlers::auth::whoami,
    ),
    components(schemas(
        crate::database::models::Product,
        crate::handlers::products::ProductInput,
        crate::handlers::products::DeleteProductResponse,
        crate::handlers::auth::RegisterRequest,
        crate::handlers::auth::RegisterResponse,
        crate::handlers::auth::LoginRequest,
        crate::handlers::auth::LoginResponse,
        crate::handlers::auth::WhoamiResponse,
        crate::error::ErrorBody,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "products", description = "Product CRUD"),
        (name = "auth", description = "Registration and token issuance"),
    )
)]
pub struct ApiDoc;

/// Swagger UI router, merged into the application router.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs").url("/docs/openapi.json", ApiDoc::openapi())
}
