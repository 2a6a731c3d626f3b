//! Router Assembly
//!
//! Mounts every bounded context under `/api`, the root greeting and the
//! Swagger UI at `/docs`.
//! Generic over the repositories so tests can run without a database.

use std::sync::Arc;

use auth::AuthConfig;
use auth::domain::repository::UserRepository;
use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use axum::{Json, Router};
use problem::domain::repository::ProblemRepository;
use serde::Serialize;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::doc::{ApiDoc, DOCS_PATH, OPENAPI_JSON_PATH};

#[derive(Serialize)]
struct RootResponse {
    message: &'static str,
}

/// GET /
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hello World! Access to /docs for API documentation.",
    })
}

pub fn build_router<U, P>(users: U, problems: P, auth_config: Arc<AuthConfig>) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: ProblemRepository + Clone + Send + Sync + 'static,
{
    let api = auth::auth_router_generic(users, auth_config)
        .merge(problem::problem_router_generic(problems));

    Router::new()
        .route("/", get(root))
        .nest("/api", api)
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
}

/// CORS for the browser frontend. Credentials are allowed so the
/// cross-site access token cookie is sent.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}
