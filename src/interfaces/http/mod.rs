//! HTTP REST API interfaces
//!
//! - `common`: response envelope, error mapping, validated extractor
//! - `modules`: request handlers and DTOs per resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::create_api_router;
