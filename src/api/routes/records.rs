//! Record Routes
//!
//! - GET /api/data - List all records
//! - POST /api/data - Create a record
//! - DELETE /api/data/:id - Delete one record
//! - DELETE /api/data - Delete every record

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{CreateRecordRequest, MessageResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::store::Record;

/// GET /api/data
///
/// All records in store order.
pub async fn list_records(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Record>>> {
    let records = state.store.list().await?;
    Ok(Json(records))
}

/// POST /api/data
///
/// Create a record from `{category, value}`. Store failures here are
/// reported as validation errors (400), like rejected documents.
pub async fn create_record(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateRecordRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Record>)> {
    let Json(req) = payload?;
    let new_record = req.validate()?;

    let record = state
        .store
        .insert(new_record)
        .await
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    tracing::info!(
        record_id = %record.id,
        category = %record.category,
        value = record.value,
        "Created record"
    );

    Ok((StatusCode::CREATED, Json(record)))
}

/// DELETE /api/data/:id
pub async fn delete_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    if !state.store.delete(&id).await? {
        return Err(ApiError::NotFound("Item not found".to_string()));
    }

    tracing::info!(record_id = %id, "Deleted record");

    Ok(Json(MessageResponse::new("Deleted successfully")))
}

/// DELETE /api/data
///
/// Single bulk delete; succeeds on an empty collection too.
pub async fn delete_all_records(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MessageResponse>> {
    let deleted = state.store.delete_all().await?;

    tracing::info!(deleted, "Deleted all records");

    Ok(Json(
        MessageResponse::new("All data deleted successfully").with_deleted(deleted),
    ))
}
