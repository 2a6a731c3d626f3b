//! OpenAPI documentation
//!
//! [`ApiDoc`] collects the handler paths of every bounded context. The
//! document is served at `/api-docs/openapi.json` and rendered by Swagger UI
//! at `/docs`.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

pub const DOCS_PATH: &str = "/docs";
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Register the access token cookie issued by `POST /api/login`.
struct AccessTokenCookie;

impl Modify for AccessTokenCookie {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "AccessTokenCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "access_token",
                "\"Bearer <token>\" cookie issued by POST /api/login, valid for 5 minutes.",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&AccessTokenCookie),
    info(
        title = "Problem API",
        description = "Problem bank with user signup and login."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        auth::presentation::handlers::sign_up,
        auth::presentation::handlers::login,
        problem::presentation::handlers::list_problems,
        problem::presentation::handlers::create_problem,
        problem::presentation::handlers::get_problem,
        problem::presentation::handlers::update_problem,
        problem::presentation::handlers::delete_problem,
    ),
    tags(
        (name = "auth", description = "Signup and login"),
        (name = "problem", description = "Problem CRUD")
    )
)]
pub struct ApiDoc;
