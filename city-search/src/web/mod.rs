//! Web layer for city search.
//!
//! Provides HTTP endpoints for looking up cities by name.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
