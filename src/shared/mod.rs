pub mod errors;
pub mod shutdown;

pub use errors::{AppError, DomainError, ErrorKind, InfraError};
pub use shutdown::{listen_for_shutdown_signals, ShutdownSignal};
