use askama::Template;

use super::state::ViewState;
use crate::config::AppConfig;

// ── Askama Templates ─────────────────────────────────────────────────

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub api_base: &'a str,
    pub loading: bool,
    pub enabled: bool,
    pub error: &'a str,
}

#[derive(Template)]
#[template(path = "partials/status.html")]
pub struct StatusTemplate<'a> {
    pub loading: bool,
    pub enabled: bool,
    pub error: &'a str,
}

// ── Render helpers (called from routes.rs) ───────────────────────────

pub fn render_index(config: &AppConfig, view: &ViewState) -> axum::response::Html<String> {
    let template = IndexTemplate {
        api_base: &config.api_base,
        loading: view.is_loading(),
        enabled: view.enabled(),
        error: view.error().unwrap_or(""),
    };
    axum::response::Html(template.render().unwrap_or_else(|e| {
        let msg = e
            .to_string()
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        format!("<h1>Template error: {}</h1>", msg)
    }))
}

pub fn render_status(view: &ViewState) -> String {
    let template = StatusTemplate {
        loading: view.is_loading(),
        enabled: view.enabled(),
        error: view.error().unwrap_or(""),
    };
    template.render().unwrap_or_default()
}
