//! Axum router construction.

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::server::context::AppContext;
use crate::server::routes;

/// Build the complete Axum router.
pub fn build_router(ctx: AppContext) -> Router {
    let cors = cors_layer(&ctx.config.server.cors_origins);
    let body_limit = DefaultBodyLimit::max(ctx.config.images.max_upload_bytes);

    Router::new()
        .route("/", get(routes::root::hello))
        .route("/health", get(routes::root::health_check))
        .route(
            "/items",
            get(routes::items::list_items).post(routes::items::add_item),
        )
        .route("/items/{id}", get(routes::items::get_item))
        .route("/search", get(routes::items::search_items))
        .route("/image/{filename}", get(routes::images::get_image))
        .layer(body_limit)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin '{origin}': {e}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}
