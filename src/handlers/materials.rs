use super::common::{
    cap_limit, created_response, map_service_error, no_content_response, success_response,
    validate_input,
};
use crate::{
    dto::materials::{CreateRequiredMaterialRequest, UpdateRequiredMaterialRequest},
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

/// Creates the router for required material endpoints
pub fn required_material_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_material))
        .route("/", get(list_materials))
        .route("/:id", get(get_material))
        .route("/:id", put(update_material))
        .route("/:id", delete(delete_material))
}

#[derive(Debug, Deserialize)]
struct MaterialListQuery {
    style_variant_id: Option<i32>,
    #[serde(default)]
    skip: u64,
    limit: Option<u64>,
}

async fn create_material(
    State(state): State<AppState>,
    Json(payload): Json<CreateRequiredMaterialRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let material = state
        .services
        .material_ledger
        .create(payload)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(material))
}

async fn list_materials(
    State(state): State<AppState>,
    Query(params): Query<MaterialListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let materials = state
        .services
        .material_ledger
        .list(
            params.style_variant_id,
            params.skip,
            cap_limit(params.limit, 100),
        )
        .await
        .map_err(map_service_error)?;

    Ok(success_response(materials))
}

async fn get_material(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let maybe_material = state
        .services
        .material_ledger
        .get(id)
        .await
        .map_err(map_service_error)?;

    match maybe_material {
        Some(material) => Ok(success_response(material)),
        None => Err(ApiError::NotFound(format!(
            "Required material {} not found",
            id
        ))),
    }
}

async fn update_material(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRequiredMaterialRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let material = state
        .services
        .material_ledger
        .update(id, payload)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(material))
}

async fn delete_material(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .material_ledger
        .delete(id)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}
