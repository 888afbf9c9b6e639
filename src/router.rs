use axum::http::{HeaderName, HeaderValue, Method, header};
use axum::{Json, Router, middleware, routing::get};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use schoolhouse_config::cors::WILDCARD_ORIGIN;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::auth::router::init_auth_router;
use crate::modules::classrooms::router::init_classrooms_router;
use crate::modules::schools::router::init_schools_router;
use crate::modules::students::router::init_students_router;
use crate::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Headers set on every response.
const SECURITY_HEADERS: [(HeaderName, &str); 3] = [
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (header::X_FRAME_OPTIONS, "DENY"),
    (header::REFERRER_POLICY, "no-referrer"),
];

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter(|origin| {
            if origin.as_str() == WILDCARD_ORIGIN {
                warn!("Ignoring wildcard CORS origin; credentials are allowed");
                return false;
            }
            true
        })
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

/// Builds the full application router. Role gating happens per handler via
/// operation extractors, so routes are nested without auth layers.
pub fn init_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_config.allowed_origins);

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health))
        .nest(
            "/api",
            Router::new()
                .nest("/auth", init_auth_router())
                .nest("/schools", init_schools_router())
                .nest("/classrooms", init_classrooms_router())
                .nest("/students", init_students_router()),
        )
        .with_state(state);

    let router = SECURITY_HEADERS
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::overriding(
                name,
                HeaderValue::from_static(value),
            ))
        });

    router
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}
