//! # Table Booking
//!
//! Restaurant table reservation core: discrete hourly slots per table,
//! no double-booking, and a table inventory shared between the owner view
//! and the customer view.
//!
//! ## Architecture
//!
//! - **domain**: bookings, tables, time slots, conflict detection and the
//!   store/registry/mirror interfaces
//! - **application**: `ReservationService` and the customer-view inventory
//!   resolver
//! - **infrastructure**: in-memory store and registry, file-backed mirror
//! - **interfaces**: REST API with Swagger documentation
//! - **server**: runtime wiring and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use application::{InventoryResolver, ReservationService};
pub use config::{default_config_path, AppConfig};
pub use interfaces::http::create_api_router;
