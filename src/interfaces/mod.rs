//! Adapters exposing the reservation core to the outside

pub mod http;
