//! Web dashboard module.
//!
//! Serves the maintenance control page and the small routes its HTMX
//! controls call. Every route reads and mutates the shared
//! [`DashboardState`]; the Status API is the single source of truth.

pub mod routes;
pub mod server;
pub mod state;
pub mod templates;

pub use server::start_dashboard;
pub use state::{DashboardState, ViewState};
