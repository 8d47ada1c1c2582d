use axum::{routing::get, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod schemas;

/// Build the application router. Lives in the library so integration tests
/// can drive the router in-process without binding a socket.
pub fn app() -> Router {
    let config = config::config();

    let mut router = Router::new()
        // Public
        .route("/", get(handlers::system::root))
        .route("/api/hello", get(handlers::system::hello))
        .route("/test", get(handlers::system::test))
        // Database viewer and CRUD
        .merge(database_routes());

    // Global middleware
    if config.security.enable_cors {
        router = router.layer(cors_layer(&config.security));
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

fn database_routes() -> Router {
    use axum::routing::{post, put};
    use handlers::database;

    Router::new()
        // Schema registry
        .route("/api/database/schemas", get(database::schemas_get))
        // Collection-level operations
        .route("/api/database/collections", get(database::collections_list))
        .route(
            "/api/database/collections/:collection",
            get(database::collection_get),
        )
        // Document-level operations
        .route(
            "/api/database/collections/:collection/validate",
            post(database::document_validate),
        )
        .route(
            "/api/database/collections/:collection/create",
            post(database::document_create),
        )
        .route(
            "/api/database/collections/:collection/:id",
            put(database::document_update).delete(database::document_delete),
        )
}

fn cors_layer(security: &config::SecurityConfig) -> CorsLayer {
    if security.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<axum::http::HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
