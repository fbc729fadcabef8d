use super::common::{
    cap_limit, created_response, map_service_error, no_content_response, success_response,
    validate_input,
};
use crate::{
    dto::{
        planning::{CreateSampleTnaRequest, UpdateSampleTnaRequest, UpsertSamplePlanRequest},
        samples::{CreateSampleRequest, UpdateSampleRequest},
        timing::{
            CreateSampleOperationRequest, CreateSmvCalculationRequest,
            UpdateSampleOperationRequest,
        },
    },
    dto::masters::{CreateOperationTypeRequest, ReplaceOperationTypeRequest},
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

/// Creates the router for the samples module.
///
/// Literal sub-resources (tna, plan, smv, operations, operations-master,
/// by-sample-id) are declared ahead of the generic `/:id` route, mirroring
/// the API's documented matching order.
pub fn sample_routes() -> Router<AppState> {
    Router::new()
        // TNA records
        .route("/tna", post(create_tna))
        .route("/tna", get(list_tna))
        .route(
            "/tna/:id",
            get(get_tna_by_sample_id).put(update_tna).delete(delete_tna),
        )
        // Plan records (create is an upsert keyed by sample_id)
        .route("/plan", post(upsert_plan))
        .route("/plan", get(list_plans))
        .route("/plan/:sample_id", get(get_plan_by_sample_id))
        // SMV snapshots
        .route("/smv", post(create_smv))
        .route("/smv", get(list_smv))
        .route("/smv/:sample_id", get(get_smv_by_sample_id))
        // Operation timing
        .route("/operations", post(create_operation))
        .route("/operations", get(list_operations))
        .route("/operations/:id", get(get_operation))
        .route("/operations/:id", put(update_operation))
        .route("/operations/:id", delete(delete_operation))
        // Operation type master
        .route("/operations-master", post(create_operation_type))
        .route("/operations-master", get(list_operation_types))
        .route("/operations-master/:id", put(replace_operation_type))
        .route("/operations-master/:id", delete(delete_operation_type))
        // Sample lifecycle
        .route("/by-sample-id/:sample_id", get(get_sample_by_sample_id))
        .route("/", post(create_sample))
        .route("/", get(list_samples))
        .route("/:id", get(get_sample))
        .route("/:id", put(update_sample))
        .route("/:id", delete(delete_sample))
}

#[derive(Debug, Deserialize)]
struct SampleListQuery {
    buyer_id: Option<i32>,
    #[serde(default)]
    skip: u64,
    limit: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct OperationListQuery {
    sample_id: Option<i32>,
    #[serde(default)]
    skip: u64,
    limit: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    #[serde(default)]
    skip: u64,
    limit: Option<u64>,
}

// Sample lifecycle handlers

async fn create_sample(
    State(state): State<AppState>,
    Json(payload): Json<CreateSampleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let sample = state
        .services
        .sample_lifecycle
        .create(payload)
        .await
        .map_err(map_service_error)?;

    info!("Sample created: {}", sample.sample_id);

    Ok(created_response(sample))
}

async fn list_samples(
    State(state): State<AppState>,
    Query(params): Query<SampleListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let samples = state
        .services
        .sample_lifecycle
        .list(params.buyer_id, params.skip, cap_limit(params.limit, 10_000))
        .await
        .map_err(map_service_error)?;

    Ok(success_response(samples))
}

async fn get_sample(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let maybe_sample = state
        .services
        .sample_lifecycle
        .get(id)
        .await
        .map_err(map_service_error)?;

    match maybe_sample {
        Some(sample) => Ok(success_response(sample)),
        None => Err(ApiError::NotFound(format!("Sample {} not found", id))),
    }
}

async fn get_sample_by_sample_id(
    State(state): State<AppState>,
    Path(sample_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let maybe_sample = state
        .services
        .sample_lifecycle
        .get_by_sample_id(&sample_id)
        .await
        .map_err(map_service_error)?;

    match maybe_sample {
        Some(sample) => Ok(success_response(sample)),
        None => Err(ApiError::NotFound(format!(
            "Sample {} not found",
            sample_id
        ))),
    }
}

async fn update_sample(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSampleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let sample = state
        .services
        .sample_lifecycle
        .merge_update(id, payload)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(sample))
}

async fn delete_sample(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .sample_lifecycle
        .delete(id)
        .await
        .map_err(map_service_error)?;

    info!("Sample deleted: {}", id);

    Ok(no_content_response())
}

// Operation timing handlers

async fn create_operation(
    State(state): State<AppState>,
    Json(payload): Json<CreateSampleOperationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let operation = state
        .services
        .timing
        .create_operation(payload)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(operation))
}

async fn list_operations(
    State(state): State<AppState>,
    Query(params): Query<OperationListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let operations = state
        .services
        .timing
        .list_operations(params.sample_id, params.skip, cap_limit(params.limit, 100))
        .await
        .map_err(map_service_error)?;

    Ok(success_response(operations))
}

async fn get_operation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let maybe_operation = state
        .services
        .timing
        .get_operation(id)
        .await
        .map_err(map_service_error)?;

    match maybe_operation {
        Some(operation) => Ok(success_response(operation)),
        None => Err(ApiError::NotFound(format!(
            "Sample operation {} not found",
            id
        ))),
    }
}

async fn update_operation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSampleOperationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let operation = state
        .services
        .timing
        .update_operation(id, payload)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(operation))
}

async fn delete_operation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .timing
        .delete_operation(id)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}

// SMV snapshot handlers

async fn create_smv(
    State(state): State<AppState>,
    Json(payload): Json<CreateSmvCalculationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let smv = state
        .services
        .timing
        .create_smv(payload)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(smv))
}

async fn list_smv(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let records = state
        .services
        .timing
        .list_smv(params.skip, cap_limit(params.limit, 100))
        .await
        .map_err(map_service_error)?;

    Ok(success_response(records))
}

async fn get_smv_by_sample_id(
    State(state): State<AppState>,
    Path(sample_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let maybe_smv = state
        .services
        .timing
        .get_smv_by_sample_id(&sample_id)
        .await
        .map_err(map_service_error)?;

    match maybe_smv {
        Some(smv) => Ok(success_response(smv)),
        None => Err(ApiError::NotFound(format!(
            "SMV calculation for sample {} not found",
            sample_id
        ))),
    }
}

// TNA handlers

async fn create_tna(
    State(state): State<AppState>,
    Json(payload): Json<CreateSampleTnaRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let tna = state
        .services
        .planning
        .create_tna(payload)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(tna))
}

async fn list_tna(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let records = state
        .services
        .planning
        .list_tna(params.skip, cap_limit(params.limit, 100))
        .await
        .map_err(map_service_error)?;

    Ok(success_response(records))
}

async fn get_tna_by_sample_id(
    State(state): State<AppState>,
    Path(sample_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let maybe_tna = state
        .services
        .planning
        .get_tna_by_sample_id(&sample_id)
        .await
        .map_err(map_service_error)?;

    match maybe_tna {
        Some(tna) => Ok(success_response(tna)),
        None => Err(ApiError::NotFound(format!(
            "TNA record for sample {} not found",
            sample_id
        ))),
    }
}

async fn update_tna(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSampleTnaRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let tna = state
        .services
        .planning
        .update_tna(id, payload)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(tna))
}

async fn delete_tna(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .planning
        .delete_tna(id)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}

// Plan handlers

async fn upsert_plan(
    State(state): State<AppState>,
    Json(payload): Json<UpsertSamplePlanRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let plan = state
        .services
        .planning
        .upsert_plan(payload)
        .await
        .map_err(map_service_error)?;

    info!("Plan stored for sample {}", plan.sample_id);

    Ok(created_response(plan))
}

async fn list_plans(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let records = state
        .services
        .planning
        .list_plans(params.skip, cap_limit(params.limit, 100))
        .await
        .map_err(map_service_error)?;

    Ok(success_response(records))
}

async fn get_plan_by_sample_id(
    State(state): State<AppState>,
    Path(sample_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let maybe_plan = state
        .services
        .planning
        .get_plan_by_sample_id(&sample_id)
        .await
        .map_err(map_service_error)?;

    match maybe_plan {
        Some(plan) => Ok(success_response(plan)),
        None => Err(ApiError::NotFound(format!(
            "Plan record for sample {} not found",
            sample_id
        ))),
    }
}

// Operation type master handlers

async fn create_operation_type(
    State(state): State<AppState>,
    Json(payload): Json<CreateOperationTypeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let operation_type = state
        .services
        .master_data
        .create_operation_type(payload)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(operation_type))
}

async fn list_operation_types(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let operation_types = state
        .services
        .master_data
        .list_operation_types(params.skip, cap_limit(params.limit, 100))
        .await
        .map_err(map_service_error)?;

    Ok(success_response(operation_types))
}

async fn replace_operation_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ReplaceOperationTypeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let operation_type = state
        .services
        .master_data
        .replace_operation_type(id, payload)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(operation_type))
}

async fn delete_operation_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .master_data
        .delete_operation_type(id)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}
