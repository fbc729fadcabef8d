use super::common::{
    cap_limit, created_response, map_service_error, no_content_response, success_response,
    validate_input,
};
use crate::{
    dto::clients::{
        CreateBuyerRequest, CreateSupplierRequest, UpdateBuyerRequest, UpdateSupplierRequest,
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

/// Creates the router for buyer endpoints
pub fn buyer_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_buyer))
        .route("/", get(list_buyers))
        .route("/:id", get(get_buyer))
        .route("/:id", put(update_buyer))
        .route("/:id", delete(delete_buyer))
}

/// Creates the router for supplier endpoints
pub fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_supplier))
        .route("/", get(list_suppliers))
        .route("/:id", get(get_supplier))
        .route("/:id", put(update_supplier))
        .route("/:id", delete(delete_supplier))
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    #[serde(default)]
    skip: u64,
    limit: Option<u64>,
}

async fn create_buyer(
    State(state): State<AppState>,
    Json(payload): Json<CreateBuyerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let buyer = state
        .services
        .client_directory
        .create_buyer(payload)
        .await
        .map_err(map_service_error)?;

    info!("Buyer created: {}", buyer.buyer_name);

    Ok(created_response(buyer))
}

async fn list_buyers(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let buyers = state
        .services
        .client_directory
        .list_buyers(params.skip, cap_limit(params.limit, 1000))
        .await
        .map_err(map_service_error)?;

    Ok(success_response(buyers))
}

async fn get_buyer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let maybe_buyer = state
        .services
        .client_directory
        .get_buyer(id)
        .await
        .map_err(map_service_error)?;

    match maybe_buyer {
        Some(buyer) => Ok(success_response(buyer)),
        None => Err(ApiError::NotFound(format!("Buyer {} not found", id))),
    }
}

async fn update_buyer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBuyerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let buyer = state
        .services
        .client_directory
        .update_buyer(id, payload)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(buyer))
}

async fn delete_buyer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .client_directory
        .delete_buyer(id)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}

async fn create_supplier(
    State(state): State<AppState>,
    Json(payload): Json<CreateSupplierRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let supplier = state
        .services
        .client_directory
        .create_supplier(payload)
        .await
        .map_err(map_service_error)?;

    info!("Supplier created: {}", supplier.supplier_name);

    Ok(created_response(supplier))
}

async fn list_suppliers(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let suppliers = state
        .services
        .client_directory
        .list_suppliers(params.skip, cap_limit(params.limit, 1000))
        .await
        .map_err(map_service_error)?;

    Ok(success_response(suppliers))
}

async fn get_supplier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let maybe_supplier = state
        .services
        .client_directory
        .get_supplier(id)
        .await
        .map_err(map_service_error)?;

    match maybe_supplier {
        Some(supplier) => Ok(success_response(supplier)),
        None => Err(ApiError::NotFound(format!("Supplier {} not found", id))),
    }
}

async fn update_supplier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSupplierRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let supplier = state
        .services
        .client_directory
        .update_supplier(id, payload)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(supplier))
}

async fn delete_supplier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .client_directory
        .delete_supplier(id)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}
