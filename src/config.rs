use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Application configuration, loaded from `botdash.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base: String,
    pub dashboard_port: u16,
    pub request_timeout_secs: u64,
    pub log_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:8000".to_string(),
            dashboard_port: 7878,
            request_timeout_secs: 10,
            log_dir: "logs".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration with the chain: `./botdash.toml` -> `~/botdash.toml` -> defaults.
    ///
    /// `BOT_API_BASE` (from the environment or `.env`) overrides the
    /// configured API base address.
    pub fn load() -> Self {
        let candidates = Self::config_paths();
        let mut cfg = Self::default();
        for path in &candidates {
            if let Ok(contents) = fs::read_to_string(path) {
                match toml::from_str::<AppConfig>(&contents) {
                    Ok(parsed) => {
                        cfg = parsed;
                        break;
                    }
                    Err(e) => {
                        eprintln!("Warning: failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }
        cfg.apply_env_overrides();
        cfg
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("botdash.toml")];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join("botdash.toml"));
        }
        paths
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(base) = std::env::var("BOT_API_BASE") {
            if !base.is_empty() {
                self.api_base = base;
            }
        }
    }
}
