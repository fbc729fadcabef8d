use crate::handlers::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Instant;

/// Component health status
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Up,
    Down,
    Degraded,
}

/// Individual component health details
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub status: ComponentStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Full health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: ComponentStatus,
    pub version: String,
    pub timestamp: String,
    pub details: HealthDetails,
    pub response_time_ms: u128,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthDetails {
    pub clients_store: ComponentHealth,
    pub samples_store: ComponentHealth,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redis: Option<ComponentHealth>,
}

/// Creates the router for health check endpoints
///
/// Endpoints:
/// - GET /health - full component check (503 while a store is down)
/// - GET /ready  - readiness probe (both stores must ping)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
}

async fn check_store(pool: &crate::db::DbPool) -> ComponentHealth {
    let start = Instant::now();
    let result = crate::db::check_connection(pool).await;
    let latency = start.elapsed().as_millis() as u64;

    ComponentHealth {
        status: if result.is_ok() {
            ComponentStatus::Up
        } else {
            ComponentStatus::Down
        },
        message: result.map_or_else(
            |e| format!("Connection failed: {}", e),
            |_| "Connection successful".to_string(),
        ),
        latency_ms: Some(latency),
    }
}

async fn check_redis(client: &redis::Client) -> Result<(), String> {
    let mut conn = client
        .get_async_connection()
        .await
        .map_err(|e| format!("Failed to connect: {}", e))?;

    let _: String = redis::cmd("PING")
        .query_async(&mut conn)
        .await
        .map_err(|e| format!("Ping failed: {}", e))?;

    Ok(())
}

/// Full health check across both stores and the cache collaborator.
/// The cache is optional: a dead redis degrades the status without taking
/// the service out of rotation.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();

    let clients_health = check_store(&state.stores.clients).await;
    let samples_health = check_store(&state.stores.samples).await;

    let redis_check_start = Instant::now();
    let redis_result = check_redis(&state.redis).await;
    let redis_latency = redis_check_start.elapsed().as_millis() as u64;
    let redis_health = Some(ComponentHealth {
        status: if redis_result.is_ok() {
            ComponentStatus::Up
        } else {
            ComponentStatus::Down
        },
        message: redis_result.map_or_else(
            |e| format!("Connection failed: {}", e),
            |_| "Connection successful".to_string(),
        ),
        latency_ms: Some(redis_latency),
    });

    let stores_up = matches!(clients_health.status, ComponentStatus::Up)
        && matches!(samples_health.status, ComponentStatus::Up);
    let redis_up = redis_health
        .as_ref()
        .map_or(true, |r| matches!(r.status, ComponentStatus::Up));

    let overall_status = if stores_up && redis_up {
        ComponentStatus::Up
    } else if stores_up {
        ComponentStatus::Degraded
    } else {
        ComponentStatus::Down
    };

    let status_code = match overall_status {
        ComponentStatus::Up | ComponentStatus::Degraded => StatusCode::OK,
        ComponentStatus::Down => StatusCode::SERVICE_UNAVAILABLE,
    };

    let response = HealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        details: HealthDetails {
            clients_store: clients_health,
            samples_store: samples_health,
            redis: redis_health,
        },
        response_time_ms: start.elapsed().as_millis(),
    };

    (status_code, Json(response))
}

/// Readiness probe - 200 once both stores answer a ping
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let clients_ok = crate::db::check_connection(&state.stores.clients).await.is_ok();
    let samples_ok = crate::db::check_connection(&state.stores.samples).await.is_ok();

    if clients_ok && samples_ok {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "checks": {
                    "clients_store": if clients_ok { "up" } else { "down" },
                    "samples_store": if samples_ok { "up" } else { "down" },
                }
            })),
        )
    }
}
