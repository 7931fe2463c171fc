pub mod models;
pub mod openapi;
pub mod routes;

use crate::{
    openapi::ApiDoc,
    routes::{get_shows_by_actor, health_check, ShowsAppState},
};
use axum::{response::Html, routing::get, Router};
use config::ApiConfig;
use services::{
    CatalogError, CatalogShowResolver, ShowCache, ShowsServiceImpl, ShowsServiceTrait,
    TvMazeClient,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

/// Wire the catalog client, resolver and cache into the shows service
pub fn init_shows_service(config: &ApiConfig) -> Result<Arc<dyn ShowsServiceTrait>, CatalogError> {
    let client = Arc::new(TvMazeClient::from_config(&config.catalog)?);
    let resolver = Arc::new(CatalogShowResolver::new(client));
    let cache = Arc::new(ShowCache::from_config(&config.cache));

    tracing::info!(
        ttl_secs = cache.ttl().as_secs(),
        max_entries = cache.max_entries(),
        "Show cache configured"
    );

    let shows_service: Arc<dyn ShowsServiceTrait> =
        Arc::new(ShowsServiceImpl::new(cache, resolver));
    Ok(shows_service)
}

/// Build the complete application router
pub fn build_app(shows_service: Arc<dyn ShowsServiceTrait>) -> Router {
    Router::new()
        .merge(build_show_routes(shows_service))
        .merge(build_health_routes())
        .merge(build_openapi_routes())
        .layer(CorsLayer::permissive())
}

pub fn build_show_routes(shows_service: Arc<dyn ShowsServiceTrait>) -> Router {
    Router::new()
        .route("/shows/{actor_name}", get(get_shows_by_actor))
        .with_state(ShowsAppState { shows_service })
}

pub fn build_health_routes() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Build OpenAPI documentation routes
pub fn build_openapi_routes() -> Router {
    Router::new().route("/docs", get(swagger_ui_handler)).route(
        "/api-docs/openapi.json",
        get(|| async { axum::Json(ApiDoc::openapi()) }),
    )
}

/// Serve Swagger UI HTML page
async fn swagger_ui_handler() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Starrr API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5.10.5/swagger-ui.css" />
    <style>
        body {
            margin: 0;
            background: #fafafa;
        }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.10.5/swagger-ui-bundle.js"></script>
    <script>
    window.onload = function() {
        SwaggerUIBundle({
            url: '/api-docs/openapi.json',
            dom_id: '#swagger-ui',
            deepLinking: true,
            docExpansion: 'list',
        });
    };
    </script>
</body>
</html>"#,
    )
}
