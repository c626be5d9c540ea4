use crate::config::AppConfig;
use crate::utils::find_char_boundary;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::time::Duration;

// ── Status API types ────────────────────────────────────────────────────

/// Health payload returned by the Status API's `GET /health`.
///
/// The endpoint returns more fields (`status`, and whatever the server
/// grows over time); the dashboard only consumes `bot_enabled`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub bot_enabled: bool,
}

/// Join the configured base address with an endpoint path.
fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}

fn maintenance_path(on: bool) -> &'static str {
    if on {
        "maintenance/on"
    } else {
        "maintenance/off"
    }
}

// ── Requests ────────────────────────────────────────────────────────────

/// Fetch `GET /health` and return the parsed payload.
///
/// Network failures, non-2xx statuses, and malformed bodies are all
/// errors here; the caller collapses them into one user-facing message.
pub async fn fetch_health(config: &AppConfig) -> Result<HealthResponse> {
    let client = reqwest::Client::new();
    let url = endpoint_url(&config.api_base, "health");

    let resp = client
        .get(&url)
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .send()
        .await
        .with_context(|| format!("HTTP error from {}", url))?;

    let status = resp.status();
    let text_body = resp
        .text()
        .await
        .context("Failed to read health response")?;

    if !status.is_success() {
        return Err(anyhow!("Status API error {}: {}", status, text_body));
    }

    let parsed: HealthResponse = serde_json::from_str(&text_body).with_context(|| {
        format!(
            "Failed to parse health JSON response. Raw body:\n{}",
            &text_body[..find_char_boundary(&text_body, 500)]
        )
    })?;

    Ok(parsed)
}

/// Toggle maintenance mode: `POST /maintenance/on` or `/maintenance/off`.
///
/// Only the response status is checked; the body is ignored.
pub async fn set_maintenance(config: &AppConfig, on: bool) -> Result<()> {
    let client = reqwest::Client::new();
    let url = endpoint_url(&config.api_base, maintenance_path(on));

    let resp = client
        .post(&url)
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .send()
        .await
        .with_context(|| format!("HTTP error from {}", url))?;

    let status = resp.status();
    if !status.is_success() {
        let text_body = resp.text().await.unwrap_or_default();
        return Err(anyhow!("Status API error {}: {}", status, text_body));
    }

    Ok(())
}
