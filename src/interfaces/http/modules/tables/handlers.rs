//! Table inventory HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::{InventoryResolver, ReservationService, ResolvedInventory};
use crate::domain::TableNumber;
use crate::interfaces::http::common::{ApiError, ApiResponse, ApiResult, EmptyData, ValidatedJson};

use super::dto::*;

/// Application state for table handlers.
#[derive(Clone)]
pub struct TableAppState {
    pub service: Arc<ReservationService>,
    pub inventory: Arc<InventoryResolver>,
}

#[utoipa::path(
    get,
    path = "/api/tables",
    tag = "Tables",
    responses(
        (status = 200, description = "Registered tables in insertion order", body = ApiResponse<Vec<TableNumber>>)
    )
)]
pub async fn list_tables(State(state): State<TableAppState>) -> ApiResult<Vec<TableNumber>> {
    Ok(Json(ApiResponse::success(state.service.list_tables().await?)))
}

#[utoipa::path(
    post,
    path = "/api/tables",
    tag = "Tables",
    request_body = AddTableRequest,
    responses(
        (status = 201, description = "Table registered", body = ApiResponse<TableNumber>),
        (status = 409, description = "Table already exists"),
        (status = 400, description = "Table number is not positive")
    )
)]
pub async fn add_table(
    State(state): State<TableAppState>,
    ValidatedJson(request): ValidatedJson<AddTableRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TableNumber>>), ApiError> {
    let table = state.service.add_table(request.table).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(table))))
}

#[utoipa::path(
    delete,
    path = "/api/tables/{table}",
    tag = "Tables",
    params(("table" = i64, Path, description = "Table number")),
    responses(
        (status = 200, description = "Table removed; its bookings are kept", body = ApiResponse<EmptyData>),
        (status = 404, description = "Table not registered")
    )
)]
pub async fn remove_table(
    State(state): State<TableAppState>,
    Path(table): Path<i64>,
) -> ApiResult<EmptyData> {
    state.service.remove_table(table).await?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}

/// Inventory for the customer view, with its source.
#[utoipa::path(
    get,
    path = "/api/tables/inventory",
    tag = "Tables",
    responses(
        (status = 200, description = "Table inventory and where it came from", body = ApiResponse<ResolvedInventory>)
    )
)]
pub async fn table_inventory(State(state): State<TableAppState>) -> Json<ApiResponse<ResolvedInventory>> {
    Json(ApiResponse::success(state.inventory.resolve().await))
}
