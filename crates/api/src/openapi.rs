use crate::models::*;
use utoipa::OpenApi;

/// OpenAPI documentation configuration
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Starrr API",
        description = "A service to discover TV shows by actor, designed to complement Sonarr in the *arr ecosystem.\n\nShow lists come from TVMaze and are cached per actor.",
        version = "1.0.0",
        license(
            name = "MIT",
        )
    ),
    paths(
        crate::routes::shows::get_shows_by_actor,
        crate::routes::health::health_check,
    ),
    components(
        schemas(
            ShowResponse, ErrorResponse,
            crate::routes::health::HealthResponse,
        ),
    ),
    tags(
        (name = "Shows", description = "TV show operations"),
        (name = "Health", description = "Health check"),
    )
)]
pub struct ApiDoc;
