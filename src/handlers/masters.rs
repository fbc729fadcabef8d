use super::common::{
    cap_limit, created_response, map_service_error, no_content_response, success_response,
    validate_input,
};
use crate::{
    dto::masters::{
        CreateGarmentColorRequest, CreateGarmentSizeRequest, UpdateGarmentColorRequest,
        UpdateGarmentSizeRequest,
    },
    errors::ApiError,
    handlers::AppState,
};
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;

/// Creates the router for the garment color master
pub fn garment_color_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_color))
        .route("/", get(list_colors))
        .route("/:id", get(get_color))
        .route("/:id", put(update_color))
        .route("/:id", delete(delete_color))
}

/// Creates the router for the garment size master
pub fn garment_size_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_size))
        .route("/", get(list_sizes))
        .route("/:id", get(get_size))
        .route("/:id", put(update_size))
        .route("/:id", delete(delete_size))
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    #[serde(default)]
    skip: u64,
    limit: Option<u64>,
}

async fn create_color(
    State(state): State<AppState>,
    Json(payload): Json<CreateGarmentColorRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let color = state
        .services
        .master_data
        .create_garment_color(payload)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(color))
}

async fn list_colors(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let colors = state
        .services
        .master_data
        .list_garment_colors(params.skip, cap_limit(params.limit, 1000))
        .await
        .map_err(map_service_error)?;

    Ok(success_response(colors))
}

async fn get_color(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let maybe_color = state
        .services
        .master_data
        .get_garment_color(id)
        .await
        .map_err(map_service_error)?;

    match maybe_color {
        Some(color) => Ok(success_response(color)),
        None => Err(ApiError::NotFound(format!(
            "Garment color {} not found",
            id
        ))),
    }
}

async fn update_color(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGarmentColorRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let color = state
        .services
        .master_data
        .update_garment_color(id, payload)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(color))
}

async fn delete_color(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .master_data
        .delete_garment_color(id)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}

async fn create_size(
    State(state): State<AppState>,
    Json(payload): Json<CreateGarmentSizeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let size = state
        .services
        .master_data
        .create_garment_size(payload)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(size))
}

async fn list_sizes(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let sizes = state
        .services
        .master_data
        .list_garment_sizes(params.skip, cap_limit(params.limit, 1000))
        .await
        .map_err(map_service_error)?;

    Ok(success_response(sizes))
}

async fn get_size(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let maybe_size = state
        .services
        .master_data
        .get_garment_size(id)
        .await
        .map_err(map_service_error)?;

    match maybe_size {
        Some(size) => Ok(success_response(size)),
        None => Err(ApiError::NotFound(format!("Garment size {} not found", id))),
    }
}

async fn update_size(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGarmentSizeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let size = state
        .services
        .master_data
        .update_garment_size(id, payload)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(size))
}

async fn delete_size(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .master_data
        .delete_garment_size(id)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}
