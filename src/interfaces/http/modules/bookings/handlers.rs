//! Booking HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::{ReservationService, ReservationStats};
use crate::domain::{Booking, BookingDraft, BookingId, BookingPatchDraft, TableNumber, TimeSlot};
use crate::interfaces::http::common::{ApiError, ApiJson, ApiResponse, ApiResult, EmptyData};

use super::dto::*;

/// Application state for booking handlers.
#[derive(Clone)]
pub struct BookingAppState {
    pub service: Arc<ReservationService>,
}

#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "Bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = ApiResponse<Booking>),
        (status = 400, description = "Missing or invalid field"),
        (status = 409, description = "Time slot already booked for this table")
    )
)]
pub async fn create_booking(
    State(state): State<BookingAppState>,
    ApiJson(request): ApiJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Booking>>), ApiError> {
    let draft = BookingDraft::try_from(request)?;
    let booking = state.service.book(draft).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(booking))))
}

#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = "Bookings",
    responses(
        (status = 200, description = "All bookings in creation order", body = ApiResponse<Vec<Booking>>)
    )
)]
pub async fn list_bookings(State(state): State<BookingAppState>) -> ApiResult<Vec<Booking>> {
    Ok(Json(ApiResponse::success(state.service.list_all().await?)))
}

#[utoipa::path(
    get,
    path = "/api/bookings/table/{table}",
    tag = "Bookings",
    params(("table" = i64, Path, description = "Table number")),
    responses(
        (status = 200, description = "Bookings for the table", body = ApiResponse<Vec<Booking>>),
        (status = 400, description = "Table number is not positive")
    )
)]
pub async fn list_bookings_for_table(
    State(state): State<BookingAppState>,
    Path(table): Path<i64>,
) -> ApiResult<Vec<Booking>> {
    let table = TableNumber::new(table)?;
    Ok(Json(ApiResponse::success(
        state.service.list_by_table(table).await?,
    )))
}

#[utoipa::path(
    patch,
    path = "/api/bookings/{id}",
    tag = "Bookings",
    params(("id" = i64, Path, description = "Booking ID")),
    request_body = UpdateBookingRequest,
    responses(
        (status = 200, description = "Updated booking", body = ApiResponse<Booking>),
        (status = 400, description = "Invalid field"),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Time slot already booked for this table")
    )
)]
pub async fn update_booking(
    State(state): State<BookingAppState>,
    Path(id): Path<i64>,
    ApiJson(request): ApiJson<UpdateBookingRequest>,
) -> ApiResult<Booking> {
    let patch = BookingPatchDraft::try_from(request)?;
    let booking = state.service.amend(BookingId(id), patch).await?;
    Ok(Json(ApiResponse::success(booking)))
}

#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = "Bookings",
    params(("id" = i64, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Cancelled, or never existed", body = ApiResponse<EmptyData>)
    )
)]
pub async fn cancel_booking(
    State(state): State<BookingAppState>,
    Path(id): Path<i64>,
) -> ApiResult<EmptyData> {
    state.service.cancel(BookingId(id)).await?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}

#[utoipa::path(
    get,
    path = "/api/bookings/stats",
    tag = "Bookings",
    responses(
        (status = 200, description = "Booking count and total covers", body = ApiResponse<ReservationStats>)
    )
)]
pub async fn booking_stats(State(state): State<BookingAppState>) -> ApiResult<ReservationStats> {
    Ok(Json(ApiResponse::success(state.service.stats().await?)))
}

#[utoipa::path(
    get,
    path = "/api/time-slots",
    tag = "Bookings",
    responses(
        (status = 200, description = "Bookable time slot labels", body = ApiResponse<Vec<String>>)
    )
)]
pub async fn list_time_slots() -> Json<ApiResponse<Vec<&'static str>>> {
    Json(ApiResponse::success(TimeSlot::labels()))
}
