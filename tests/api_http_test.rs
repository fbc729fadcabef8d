//! HTTP-level tests through the full v1 router: status codes, error bodies
//! and the style -> variant -> color description flow.

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use stitchline_api::{api_v1_routes, config::AppConfig, db::DataStores, handlers::AppServices, AppState};
use tower::ServiceExt;

async fn test_app() -> Router {
    let stores = DataStores {
        clients: common::clients_db().await,
        samples: common::samples_db().await,
    };
    let services = AppServices::new(&stores);
    let config = AppConfig {
        database_url_samples: "sqlite::memory:".into(),
        database_url_clients: "sqlite::memory:".into(),
        redis_url: "redis://127.0.0.1:6379".into(),
        jwt_secret: "n4x8v2q9t1z5w7y3m6k0r8p2s5u9g3j7d1f4h8l2c6b0e9a3o7i5q2x8z4v6n1m3".into(),
        jwt_expiration: 3600,
        host: "127.0.0.1".into(),
        port: 0,
        environment: "development".into(),
        log_level: "info".into(),
        log_json: false,
        auto_migrate: false,
        cors_allowed_origins: None,
        cors_allow_any_origin: false,
        cors_allow_credentials: false,
        db_max_connections: 1,
        db_min_connections: 1,
        db_connect_timeout_secs: 30,
        db_idle_timeout_secs: 600,
        db_acquire_timeout_secs: 60,
        db_connect_retries: 1,
        db_connect_retry_backoff_secs: 1,
    };
    let redis = std::sync::Arc::new(
        redis::Client::open(config.redis_url.clone()).expect("redis client"),
    );

    Router::new()
        .nest("/api/v1", api_v1_routes())
        .with_state(AppState {
            stores,
            config,
            services,
            redis,
        })
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn style_and_variant_flow_over_http() {
    let app = test_app().await;

    // POST a style
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/styles",
            json!({ "style_id": "PS-001", "style_name": "Polo", "buyer_id": 1 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let style = json_body(response).await;
    let style_pk = style["id"].as_i64().unwrap();

    // POST a single-color variant referencing it
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/style-variants",
            json!({
                "style_summary_id": style_pk,
                "style_name": "Polo",
                "style_id": "PS-001",
                "colour_name": "Navy",
                "is_multicolor": false
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let variant = json_body(response).await;
    let variant_pk = variant["id"].as_i64().unwrap();

    // GET the variant: derived description
    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/v1/style-variants/{}", variant_pk)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = json_body(response).await;
    assert_eq!(fetched["full_color_description"], "Navy");

    // GET the style list: contains PS-001
    let response = app
        .clone()
        .oneshot(get_request("/api/v1/styles"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = json_body(response).await;
    let ids: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|s| s["style_id"].as_str())
        .collect();
    assert!(ids.contains(&"PS-001"));
}

#[tokio::test]
async fn multicolor_parts_compose_over_http() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/styles",
            json!({ "style_id": "PS-002", "style_name": "Polo", "buyer_id": 1 }),
        ))
        .await
        .unwrap();
    let style_pk = json_body(response).await["id"].as_i64().unwrap();

    // Multi-color create without parts persists with an empty part list
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/style-variants",
            json!({
                "style_summary_id": style_pk,
                "style_name": "Polo",
                "style_id": "PS-002",
                "colour_name": "Multi",
                "is_multicolor": true
            }),
        ))
        .await
        .unwrap();
    let variant = json_body(response).await;
    let variant_pk = variant["id"].as_i64().unwrap();
    assert_eq!(variant["color_parts"].as_array().unwrap().len(), 0);

    for (name, colour, sort_order) in [
        ("Body", "Navy Blue", 1),
        ("Collar", "White", 2),
        ("Sleeves", "Red", 3),
    ] {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/v1/style-variants/{}/color-parts", variant_pk),
                json!({ "part_name": name, "colour_name": colour, "sort_order": sort_order }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/v1/style-variants/{}", variant_pk)))
        .await
        .unwrap();
    let fetched = json_body(response).await;
    assert_eq!(
        fetched["full_color_description"],
        "Body: Navy Blue, Collar: White, Sleeves: Red"
    );
}

#[tokio::test]
async fn error_statuses_over_http() {
    let app = test_app().await;

    // 404 with the standard error body
    let response = app
        .clone()
        .oneshot(get_request("/api/v1/styles/999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Not Found");

    let create = json!({ "style_id": "PS-001", "style_name": "Polo", "buyer_id": 1 });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/styles", create.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let style_pk = json_body(response).await["id"].as_i64().unwrap();

    // Duplicate style_id -> 409
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/styles", create))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Delete blocked by a dependent variant -> 400 with the count
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/style-variants",
            json!({
                "style_summary_id": style_pk,
                "style_name": "Polo",
                "style_id": "PS-001",
                "colour_name": "Navy"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/v1/styles/{}", style_pk))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("1 style variant(s)"));
}

#[tokio::test]
async fn sample_round_increments_over_http() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/styles",
            json!({ "style_id": "PS-001", "style_name": "Polo", "buyer_id": 1 }),
        ))
        .await
        .unwrap();
    let style_pk = json_body(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/samples",
            json!({
                "sample_id": "SMP-001",
                "buyer_id": 1,
                "style_id": style_pk,
                "sample_type": "Proto"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let sample = json_body(response).await;
    assert_eq!(sample["round"], 1);
    let sample_pk = sample["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/v1/samples/{}", sample_pk),
            json!({ "submit_status": "Reject and Request for remake" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response).await;
    assert_eq!(updated["round"], 2);

    // Literal sub-path must not be captured by the /:id matcher
    let response = app
        .clone()
        .oneshot(get_request("/api/v1/samples/by-sample-id/SMP-001"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let by_string = json_body(response).await;
    assert_eq!(by_string["id"], sample_pk);
}
