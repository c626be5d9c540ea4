//! Shared dashboard state and the view transitions behind every route.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use tokio::sync::RwLock;

use crate::api;
use crate::config::AppConfig;
use crate::logger::Logger;

/// User-facing message when a health fetch fails, whatever the cause.
pub const FETCH_STATUS_ERROR: &str = "failed to fetch status";
/// User-facing message when a maintenance toggle fails.
pub const TOGGLE_ERROR: &str = "failed to change maintenance mode";

/// What the status card currently shows. Exactly one variant is active.
///
/// `Loading` carries the last known enabled flag so a failed fetch can
/// fall back to it; it has no error slot, so a fetch in flight never
/// shows a stale error.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading { last_enabled: bool },
    Ready { enabled: bool, error: Option<String> },
}

impl ViewState {
    /// State before the first fetch settles. The enabled flag starts
    /// `true` until the server says otherwise.
    pub fn initial() -> Self {
        ViewState::Loading { last_enabled: true }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading { .. })
    }

    /// Last known enabled flag, regardless of variant.
    pub fn enabled(&self) -> bool {
        match self {
            ViewState::Loading { last_enabled } => *last_enabled,
            ViewState::Ready { enabled, .. } => *enabled,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Loading { .. } => None,
            ViewState::Ready { error, .. } => error.as_deref(),
        }
    }

    /// Enter `Loading`, dropping any prior error.
    pub fn begin_loading(&mut self) {
        *self = ViewState::Loading {
            last_enabled: self.enabled(),
        };
    }

    /// Settle with the server's answer.
    pub fn settle_ok(&mut self, enabled: bool) {
        *self = ViewState::Ready {
            enabled,
            error: None,
        };
    }

    /// Settle with a user-facing error, keeping the last known flag.
    pub fn settle_err(&mut self, message: &str) {
        *self = ViewState::Ready {
            enabled: self.enabled(),
            error: Some(message.to_string()),
        };
    }

    /// Drop the error, keeping everything else. No-op while loading.
    pub fn clear_error(&mut self) {
        if let ViewState::Ready { error, .. } = self {
            *error = None;
        }
    }
}

/// State shared by all dashboard routes.
pub struct DashboardState {
    pub config: AppConfig,
    pub view: RwLock<ViewState>,
    pub logger: Logger,
    request_seq: AtomicU64,
}

impl DashboardState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let logger = Logger::new(&config.log_dir)?;
        Ok(Self {
            config,
            view: RwLock::new(ViewState::initial()),
            logger,
            request_seq: AtomicU64::new(0),
        })
    }

    /// Take the token for a new status request. Tokens increase
    /// monotonically; only the holder of the latest one may update
    /// the view.
    fn begin_request(&self) -> u64 {
        self.request_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, token: u64) -> bool {
        self.request_seq.load(Ordering::SeqCst) == token
    }

    /// Fetch `/health` and reconcile the view with the server's answer.
    ///
    /// The view enters `Loading` for the duration of the call and always
    /// settles once the result is in; a result that was superseded by a
    /// newer request is dropped so it cannot overwrite fresher state.
    pub async fn load_status(&self) {
        // Token and Loading transition happen under one lock so a stale
        // request can never re-enter Loading after a newer one settled
        let token = {
            let mut view = self.view.write().await;
            view.begin_loading();
            self.begin_request()
        };

        let result = api::fetch_health(&self.config).await;

        let mut view = self.view.write().await;
        if !self.is_current(token) {
            return; // superseded; the newer request owns the view now
        }
        match result {
            Ok(health) => {
                let _ = self.logger.log_health(health.bot_enabled);
                view.settle_ok(health.bot_enabled);
            }
            Err(e) => {
                let _ = self.logger.log_error(&format!("health fetch failed: {}", e));
                view.settle_err(FETCH_STATUS_ERROR);
            }
        }
    }

    /// Toggle maintenance mode, then re-fetch `/health` so the view
    /// reflects server truth rather than an optimistic guess.
    ///
    /// A failed toggle only sets the error string; no health re-fetch
    /// happens in that case.
    pub async fn set_maintenance(&self, on: bool) {
        self.view.write().await.clear_error();

        match api::set_maintenance(&self.config, on).await {
            Ok(()) => {
                let _ = self.logger.log_toggle(on);
                self.load_status().await;
            }
            Err(e) => {
                let _ = self
                    .logger
                    .log_error(&format!("maintenance toggle failed: {}", e));
                self.view.write().await.settle_err(TOGGLE_ERROR);
            }
        }
    }
}
