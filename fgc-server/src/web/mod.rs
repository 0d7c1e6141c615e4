//! Web layer for the FGC stations service.
//!
//! Exposes the controller as JSON endpoints.

mod routes;
mod state;

pub use routes::{AppError, create_router};
pub use state::AppState;
