#![allow(dead_code)]

use api::{build_app, init_shows_service};
use axum_test::TestServer;
use config::ApiConfig;
use httpmock::MockServer;
use serde_json::{json, Value};
use std::time::Duration;

/// Helper function to create a test configuration pointing at a fake catalog
pub fn test_config(catalog_url: &str) -> ApiConfig {
    ApiConfig {
        server: config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        logging: config::LoggingConfig {
            level: "debug".to_string(),
            format: "compact".to_string(),
            modules: std::collections::HashMap::new(),
        },
        catalog: config::CatalogConfig {
            base_url: catalog_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(2),
            max_retries: 2,
            backoff_factor: 0.0,
        },
        cache: config::CacheConfig {
            ttl: Duration::from_secs(3600),
            max_entries: 1000,
        },
    }
}

/// Start the full application against the given fake catalog
pub fn setup_test_server(catalog: &MockServer) -> TestServer {
    let config = test_config(&catalog.base_url());
    let shows_service = init_shows_service(&config).expect("Failed to build shows service");
    TestServer::new(build_app(shows_service)).expect("Failed to start test server")
}

pub fn person_search_body(ids: &[i64]) -> Value {
    Value::Array(
        ids.iter()
            .map(|id| {
                json!({
                    "score": 0.9,
                    "person": { "id": id, "name": format!("Person {}", id) }
                })
            })
            .collect(),
    )
}

pub fn credit(show_type: Option<&str>, tvdb: Value) -> Value {
    json!({
        "_links": { "show": { "href": "https://api.tvmaze.com/shows/1" } },
        "_embedded": {
            "show": {
                "id": 1,
                "name": "Some Show",
                "type": show_type,
                "externals": { "tvrage": null, "thetvdb": tvdb, "imdb": null }
            }
        }
    })
}
