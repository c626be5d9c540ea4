use axum::{
    extract::State,
    response::{Html, IntoResponse, Json},
};
use serde::Serialize;
use std::sync::Arc;

use super::state::DashboardState;
use super::templates;

// ── GET / — main dashboard page ──────────────────────────────────────

pub async fn index(State(state): State<Arc<DashboardState>>) -> impl IntoResponse {
    // One health round trip before the controls render
    state.load_status().await;
    let view = state.view.read().await;
    templates::render_index(&state.config, &view)
}

// ── GET /api/status — current view as JSON ───────────────────────────

#[derive(Serialize)]
pub struct StatusResponse {
    pub bot_enabled: bool,
    pub loading: bool,
    pub error: Option<String>,
}

pub async fn get_status(State(state): State<Arc<DashboardState>>) -> impl IntoResponse {
    let view = state.view.read().await;
    Json(StatusResponse {
        bot_enabled: view.enabled(),
        loading: view.is_loading(),
        error: view.error().map(str::to_string),
    })
}

// ── GET /api/status/html — refreshed status card for HTMX swap ───────

pub async fn get_status_html(State(state): State<Arc<DashboardState>>) -> impl IntoResponse {
    state.load_status().await;
    let view = state.view.read().await;
    Html(templates::render_status(&view))
}

// ── POST /api/maintenance/{on,off} — toggle, then reconcile ──────────

pub async fn maintenance_on(State(state): State<Arc<DashboardState>>) -> impl IntoResponse {
    toggle(&state, true).await
}

pub async fn maintenance_off(State(state): State<Arc<DashboardState>>) -> impl IntoResponse {
    toggle(&state, false).await
}

async fn toggle(state: &DashboardState, on: bool) -> Html<String> {
    state.set_maintenance(on).await;
    let view = state.view.read().await;
    Html(templates::render_status(&view))
}
