use super::common::{map_service_error, success_response};
use crate::{errors::ApiError, handlers::AppState};
use axum::{extract::State, response::IntoResponse, routing::get, Router};

/// Creates the router for the read-only operations module
pub fn operation_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_operations))
        .route("/smv-settings", get(list_smv_settings))
}

async fn list_operations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let operations = state
        .services
        .master_data
        .list_operation_master()
        .await
        .map_err(map_service_error)?;

    Ok(success_response(operations))
}

async fn list_smv_settings(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let settings = state
        .services
        .master_data
        .list_smv_settings()
        .await
        .map_err(map_service_error)?;

    Ok(success_response(settings))
}
