use anyhow::Result;
use colored::*;
use dotenvy::dotenv;
use std::sync::Arc;

pub mod api;
pub mod config;
pub mod dashboard;
pub mod logger;
pub mod utils;

/// Run the application: load `.env`, load config, and serve the dashboard.
pub async fn run() -> Result<()> {
    // Load environment variables from .env (BOT_API_BASE)
    dotenv().ok();

    let config = config::AppConfig::load();
    let state = Arc::new(dashboard::DashboardState::new(config.clone())?);

    print_banner(&config);
    let _ = state
        .logger
        .log(&format!("dashboard started on 127.0.0.1:{}", config.dashboard_port));

    dashboard::start_dashboard(state, config.dashboard_port).await
}

fn print_banner(config: &config::AppConfig) {
    println!("{}", "====================================".bright_cyan());
    println!("{}", "         BOT DASHBOARD v0.1.0       ".bright_cyan().bold());
    println!("{}", "====================================".bright_cyan());
    println!("{}", " Maintenance control panel".bright_white());
    println!(
        " Serving {} (API: {})\n",
        format!("http://127.0.0.1:{}", config.dashboard_port).bright_green(),
        config.api_base.dimmed()
    );
}

// Re-exports for library consumers: common useful types
pub use config::AppConfig;
pub use dashboard::{DashboardState, ViewState};
