use super::common::{
    cap_limit, created_response, map_service_error, no_content_response, success_response,
    validate_input,
};
use crate::{
    dto::styles::{
        ColorPartBody, CreateStyleRequest, CreateStyleVariantRequest, UpdateStyleRequest,
        UpdateStyleVariantRequest,
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
use tracing::info;

/// Creates the router for style summary endpoints
pub fn style_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_style))
        .route("/", get(list_styles))
        .route("/:id", get(get_style))
        .route("/:id", put(update_style))
        .route("/:id", delete(delete_style))
}

/// Creates the router for style variant endpoints, including the color-part
/// sub-resource
pub fn style_variant_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_variant))
        .route("/", get(list_variants))
        .route("/:id", get(get_variant))
        .route("/:id", put(update_variant))
        .route("/:id", delete(delete_variant))
        .route("/:id/color-parts", post(add_color_part))
        .route("/:id/color-parts", get(list_color_parts))
        .route("/:id/color-parts/:part_id", delete(delete_color_part))
}

#[derive(Debug, Deserialize)]
struct StyleListQuery {
    #[serde(default)]
    skip: u64,
    limit: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct VariantListQuery {
    style_summary_id: Option<i32>,
    #[serde(default)]
    skip: u64,
    limit: Option<u64>,
}

async fn create_style(
    State(state): State<AppState>,
    Json(payload): Json<CreateStyleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let style = state
        .services
        .style_catalog
        .create_style(payload)
        .await
        .map_err(map_service_error)?;

    info!("Style created: {}", style.style_id);

    Ok(created_response(style))
}

async fn list_styles(
    State(state): State<AppState>,
    Query(params): Query<StyleListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let styles = state
        .services
        .style_catalog
        .list_styles(params.skip, cap_limit(params.limit, 1000))
        .await
        .map_err(map_service_error)?;

    Ok(success_response(styles))
}

async fn get_style(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let maybe_style = state
        .services
        .style_catalog
        .get_style(id)
        .await
        .map_err(map_service_error)?;

    match maybe_style {
        Some(style) => Ok(success_response(style)),
        None => Err(ApiError::NotFound(format!("Style {} not found", id))),
    }
}

async fn update_style(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStyleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let style = state
        .services
        .style_catalog
        .update_style(id, payload)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(style))
}

async fn delete_style(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .style_catalog
        .delete_style(id)
        .await
        .map_err(map_service_error)?;

    info!("Style deleted: {}", id);

    Ok(no_content_response())
}

async fn create_variant(
    State(state): State<AppState>,
    Json(payload): Json<CreateStyleVariantRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let variant = state
        .services
        .style_catalog
        .create_variant(payload)
        .await
        .map_err(map_service_error)?;

    info!("Style variant created: {}", variant.id);

    Ok(created_response(variant))
}

async fn list_variants(
    State(state): State<AppState>,
    Query(params): Query<VariantListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let variants = state
        .services
        .style_catalog
        .list_variants(
            params.style_summary_id,
            params.skip,
            cap_limit(params.limit, 1000),
        )
        .await
        .map_err(map_service_error)?;

    Ok(success_response(variants))
}

async fn get_variant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let maybe_variant = state
        .services
        .style_catalog
        .get_variant(id)
        .await
        .map_err(map_service_error)?;

    match maybe_variant {
        Some(variant) => Ok(success_response(variant)),
        None => Err(ApiError::NotFound(format!(
            "Style variant {} not found",
            id
        ))),
    }
}

async fn update_variant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStyleVariantRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let variant = state
        .services
        .style_catalog
        .update_variant(id, payload)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(variant))
}

async fn delete_variant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .style_catalog
        .delete_variant(id)
        .await
        .map_err(map_service_error)?;

    info!("Style variant deleted: {}", id);

    Ok(no_content_response())
}

async fn add_color_part(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ColorPartBody>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let part = state
        .services
        .style_catalog
        .add_color_part(id, payload)
        .await
        .map_err(map_service_error)?;

    info!("Color part {} added to variant {}", part.id, id);

    Ok(created_response(part))
}

async fn list_color_parts(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let parts = state
        .services
        .style_catalog
        .list_color_parts(id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(parts))
}

async fn delete_color_part(
    State(state): State<AppState>,
    Path((id, part_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .style_catalog
        .delete_color_part(id, part_id)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}
