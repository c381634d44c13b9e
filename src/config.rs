use crate::errors::ClientError;
use std::{env, path::PathBuf, time::Duration};

pub const PROBE_PATH: &str = "/admin/";
pub const LOGIN_PATH: &str = "/admin/login/";
pub const LOGOUT_PATH: &str = "/admin/logout/";
pub const LOG_MOOD_PATH: &str = "/api/log-mood/";
pub const WEEKLY_PATH: &str = "/api/weekly/";
pub const MONTHLY_PATH: &str = "/api/monthly/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeeklyWindow {
    ClientFiltered,
    ServerQuery,
}

impl WeeklyWindow {
    pub fn parse(value: &str) -> Result<Self, ClientError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "client" => Ok(Self::ClientFiltered),
            "server" => Ok(Self::ServerQuery),
            other => Err(ClientError::invalid_config(format!(
                "MOOD_WEEKLY_WINDOW must be 'client' or 'server', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub base_url: String,
    pub weekly_window: WeeklyWindow,
    pub session_cookie: Option<String>,
    pub toast_duration: Duration,
    pub nav_delay: Duration,
    pub output_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            weekly_window: WeeklyWindow::ServerQuery,
            session_cookie: None,
            toast_duration: Duration::from_millis(3000),
            nav_delay: Duration::from_millis(150),
            output_path: PathBuf::from("dashboard.html"),
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let mut config = Self::default();

        if let Some(base) = lookup("MOOD_API_BASE") {
            config.base_url = base.trim_end_matches('/').to_string();
        }
        if let Some(window) = lookup("MOOD_WEEKLY_WINDOW") {
            config.weekly_window = WeeklyWindow::parse(&window)?;
        }
        config.session_cookie = lookup("MOOD_SESSION_COOKIE").filter(|value| !value.is_empty());
        if let Some(ms) = lookup("MOOD_TOAST_MS").and_then(|value| value.parse::<u64>().ok()) {
            config.toast_duration = Duration::from_millis(ms);
        }
        if let Some(ms) = lookup("MOOD_NAV_DELAY_MS").and_then(|value| value.parse::<u64>().ok()) {
            config.nav_delay = Duration::from_millis(ms);
        }
        if let Some(path) = lookup("MOOD_OUTPUT_PATH") {
            config.output_path = PathBuf::from(path);
        }

        Ok(config)
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

/// Appends an absolute `path` to `base`, keeping any path prefix the base has.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
