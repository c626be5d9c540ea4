use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::routes;
use super::state::DashboardState;

/// Build the dashboard router.
pub fn router(state: Arc<DashboardState>) -> Router {
    Router::new()
        // HTML page
        .route("/", get(routes::index))
        // JSON API endpoint
        .route("/api/status", get(routes::get_status))
        // HTMX HTML partials
        .route("/api/status/html", get(routes::get_status_html))
        .route("/api/maintenance/on", post(routes::maintenance_on))
        .route("/api/maintenance/off", post(routes::maintenance_off))
        .with_state(state)
}

/// Start the Axum dashboard server on the given port.
pub async fn start_dashboard(state: Arc<DashboardState>, port: u16) -> anyhow::Result<()> {
    let app = router(state);

    let addr = format!("127.0.0.1:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app).await?;
    Ok(())
}
