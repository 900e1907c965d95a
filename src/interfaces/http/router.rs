//! API Router with Swagger UI

use std::sync::Arc;

use axum::routing::{delete, get, patch};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{
    InventoryResolver, InventorySource, ReservationService, ReservationStats, ResolvedInventory,
};
use crate::domain::{Booking, BookingId, TableNumber, TimeSlot};
use crate::interfaces::http::common::EmptyData;
use crate::interfaces::http::modules::bookings::{self, BookingAppState};
use crate::interfaces::http::modules::health;
use crate::interfaces::http::modules::tables::{self, TableAppState};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::handlers::health_check,
        bookings::handlers::create_booking,
        bookings::handlers::list_bookings,
        bookings::handlers::list_bookings_for_table,
        bookings::handlers::update_booking,
        bookings::handlers::cancel_booking,
        bookings::handlers::booking_stats,
        bookings::handlers::list_time_slots,
        tables::handlers::list_tables,
        tables::handlers::add_table,
        tables::handlers::remove_table,
        tables::handlers::table_inventory,
    ),
    components(
        schemas(
            Booking,
            BookingId,
            TableNumber,
            TimeSlot,
            EmptyData,
            ReservationStats,
            ResolvedInventory,
            InventorySource,
            bookings::LooseNumber,
            bookings::CreateBookingRequest,
            bookings::UpdateBookingRequest,
            tables::AddTableRequest,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Bookings", description = "Table reservations"),
        (name = "Tables", description = "Table inventory"),
    ),
    info(
        title = "Table Booking API",
        description = "Restaurant table reservations with slot-exclusive booking"
    )
)]
pub struct ApiDoc;

/// Build the full HTTP router around `service`.
pub fn create_api_router(service: Arc<ReservationService>, inventory: Arc<InventoryResolver>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let booking_routes = Router::new()
        .route(
            "/",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route("/stats", get(bookings::booking_stats))
        .route("/table/{table}", get(bookings::list_bookings_for_table))
        .route(
            "/{id}",
            patch(bookings::update_booking).delete(bookings::cancel_booking),
        )
        .with_state(BookingAppState {
            service: service.clone(),
        });

    let table_routes = Router::new()
        .route("/", get(tables::list_tables).post(tables::add_table))
        .route("/inventory", get(tables::table_inventory))
        .route("/{table}", delete(tables::remove_table))
        .with_state(TableAppState { service, inventory });

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .route("/health", get(health::health_check))
        .route("/api/time-slots", get(bookings::list_time_slots))
        .nest("/api/bookings", booking_routes)
        .nest("/api/tables", table_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────
