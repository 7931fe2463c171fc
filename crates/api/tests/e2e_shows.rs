mod common;

use axum::http::StatusCode;
use common::{credit, person_search_body, setup_test_server};
use httpmock::{Method::GET, MockServer};
use serde_json::{json, Value};

#[tokio::test]
async fn test_shows_for_actor_returns_filtered_tvdb_ids() {
    let catalog = MockServer::start_async().await;
    let search = catalog
        .mock_async(|when, then| {
            when.method(GET)
                .path("/search/people")
                .query_param("q", "Bryan Cranston");
            then.status(200).json_body(person_search_body(&[14245, 99]));
        })
        .await;
    let credits = catalog
        .mock_async(|when, then| {
            when.method(GET)
                .path("/people/14245/castcredits")
                .query_param("embed", "show");
            then.status(200).json_body(json!([
                credit(Some("Scripted"), json!(81189)),
                credit(Some("Animation"), json!(73838)),
                credit(Some("Sports"), json!(11111)),
                credit(Some("Scripted"), Value::Null),
            ]));
        })
        .await;

    let server = setup_test_server(&catalog);
    let response = server.get("/shows/Bryan%20Cranston").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!([{ "tvdbId": "81189" }, { "tvdbId": "73838" }])
    );
    search.assert_hits_async(1).await;
    credits.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_invalid_actor_name_is_rejected_without_catalog_calls() {
    let catalog = MockServer::start_async().await;
    let search = catalog
        .mock_async(|when, then| {
            when.method(GET).path("/search/people");
            then.status(200).json_body(json!([]));
        })
        .await;

    let server = setup_test_server(&catalog);
    let response = server.get("/shows/Bryan%3BDROP").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "error": "Invalid actor name. Must be 1-100 characters, alphanumeric with spaces, hyphens, apostrophes, and periods only."
        })
    );

    let too_long = "a".repeat(101);
    let response = server.get(&format!("/shows/{}", too_long)).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    search.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_undecodable_actor_name_gets_json_error() {
    let catalog = MockServer::start_async().await;
    let search = catalog
        .mock_async(|when, then| {
            when.method(GET).path("/search/people");
            then.status(200).json_body(json!([]));
        })
        .await;

    let server = setup_test_server(&catalog);
    let response = server.get("/shows/%FF%FE").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "error": "Invalid actor name. Must be 1-100 characters, alphanumeric with spaces, hyphens, apostrophes, and periods only."
        })
    );
    search.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_mistyped_credit_only_drops_itself() {
    let catalog = MockServer::start_async().await;
    catalog
        .mock_async(|when, then| {
            when.method(GET).path("/search/people");
            then.status(200).json_body(person_search_body(&[11]));
        })
        .await;
    catalog
        .mock_async(|when, then| {
            when.method(GET).path("/people/11/castcredits");
            then.status(200).json_body(json!([
                credit(Some("Scripted"), json!(81189)),
                { "_embedded": { "show": { "type": 7, "name": 3, "externals": { "thetvdb": 5 } } } },
            ]));
        })
        .await;

    let server = setup_test_server(&catalog);
    let response = server.get("/shows/Someone").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([{ "tvdbId": "81189" }]));
}

#[tokio::test]
async fn test_unknown_actor_returns_empty_list() {
    let catalog = MockServer::start_async().await;
    let search = catalog
        .mock_async(|when, then| {
            when.method(GET).path("/search/people");
            then.status(200).json_body(json!([]));
        })
        .await;
    let credits = catalog
        .mock_async(|when, then| {
            when.method(GET).path_contains("/castcredits");
            then.status(200).json_body(json!([]));
        })
        .await;

    let server = setup_test_server(&catalog);
    let response = server.get("/shows/Nobody%20Known").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));
    search.assert_hits_async(1).await;
    credits.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_catalog_outage_degrades_to_empty_list() {
    let catalog = MockServer::start_async().await;
    catalog
        .mock_async(|when, then| {
            when.method(GET).path("/search/people");
            then.status(200).json_body(person_search_body(&[7]));
        })
        .await;
    let credits = catalog
        .mock_async(|when, then| {
            when.method(GET).path("/people/7/castcredits");
            then.status(503).body("unavailable");
        })
        .await;

    let server = setup_test_server(&catalog);
    let response = server.get("/shows/Unlucky%20Actor").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));
    // One attempt plus two retries
    credits.assert_hits_async(3).await;
}

#[tokio::test]
async fn test_duplicate_shows_are_listed_once() {
    let catalog = MockServer::start_async().await;
    catalog
        .mock_async(|when, then| {
            when.method(GET).path("/search/people");
            then.status(200).json_body(person_search_body(&[1]));
        })
        .await;
    catalog
        .mock_async(|when, then| {
            when.method(GET).path("/people/1/castcredits");
            then.status(200).json_body(json!([
                credit(Some("Talk Show"), json!(500)),
                credit(Some("Talk Show"), json!(500)),
                credit(Some("Reality"), json!("600")),
                credit(Some("Reality"), json!(0)),
            ]));
        })
        .await;

    let server = setup_test_server(&catalog);
    let response = server.get("/shows/Host").await;

    assert_eq!(
        response.json::<Value>(),
        json!([{ "tvdbId": "500" }, { "tvdbId": "600" }])
    );
}

#[tokio::test]
async fn test_repeated_lookups_are_served_from_cache() {
    let catalog = MockServer::start_async().await;
    let search = catalog
        .mock_async(|when, then| {
            when.method(GET).path("/search/people");
            then.status(200).json_body(person_search_body(&[3]));
        })
        .await;
    let credits = catalog
        .mock_async(|when, then| {
            when.method(GET).path("/people/3/castcredits");
            then.status(200)
                .json_body(json!([credit(Some("Documentary"), json!(42))]));
        })
        .await;

    let server = setup_test_server(&catalog);
    let first = server.get("/shows/David%20Attenborough").await;
    let second = server.get("/shows/DAVID%20ATTENBOROUGH").await;

    assert_eq!(first.json::<Value>(), json!([{ "tvdbId": "42" }]));
    assert_eq!(second.json::<Value>(), first.json::<Value>());
    search.assert_hits_async(1).await;
    credits.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_hyphenated_name_is_searched_with_spaces() {
    let catalog = MockServer::start_async().await;
    let search = catalog
        .mock_async(|when, then| {
            when.method(GET)
                .path("/search/people")
                .query_param("q", "bryan cranston");
            then.status(200).json_body(json!([]));
        })
        .await;

    let server = setup_test_server(&catalog);
    let response = server.get("/shows/bryan-cranston").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));
    search.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_health_endpoint() {
    let catalog = MockServer::start_async().await;
    let server = setup_test_server(&catalog);

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let catalog = MockServer::start_async().await;
    let server = setup_test_server(&catalog);

    let response = server.get("/api-docs/openapi.json").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let doc = response.json::<Value>();
    assert_eq!(doc["info"]["title"], "Starrr API");
    assert!(doc["paths"]["/shows/{actor_name}"]["get"].is_object());
    assert!(doc["paths"]["/health"]["get"].is_object());

    let docs_page = server.get("/docs").await;
    assert_eq!(docs_page.status_code(), StatusCode::OK);
    assert!(docs_page.text().contains("swagger-ui"));
}
