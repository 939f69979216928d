use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Base URL of the case-intake API, including any path prefix
    pub api_base_url: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Deadline for authenticated requests before the in-flight
    /// request is aborted
    pub request_timeout_ms: u32,

    /// Interval between unread-count polls
    pub poll_interval_ms: u32,

    /// How long the dashboard waits for its data before redirecting home
    pub dashboard_give_up_ms: u32,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.safetrustrecovery.example/api".to_string(),
            log_level: Level::Info,
            request_timeout_ms: 2500,
            poll_interval_ms: 10_000,
            dashboard_give_up_ms: 7000,
            toast_duration_ms: 5000,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from window location and localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                    settings.api_base_url = "http://localhost:8000/api".to_string();
                }
            }

            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(base_url)) = storage.get_item("strf_api_base_url") {
                    settings.api_base_url = base_url;
                }

                if let Ok(Some(log_level)) = storage.get_item("strf_log_level") {
                    if let Some(level) = parse_log_level(&log_level) {
                        settings.log_level = level;
                    }
                }

                if let Ok(Some(timeout)) = storage.get_item("strf_request_timeout_ms") {
                    if let Ok(timeout_val) = timeout.parse::<u32>() {
                        settings.request_timeout_ms = timeout_val;
                    }
                }

                if let Ok(Some(interval)) = storage.get_item("strf_poll_interval_ms") {
                    if let Ok(interval_val) = interval.parse::<u32>() {
                        settings.poll_interval_ms = interval_val;
                    }
                }
            }
        }

        settings
    }

    /// Save overridable settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                storage.set_item("strf_api_base_url", &self.api_base_url)?;
                storage.set_item(
                    "strf_log_level",
                    &format!("{:?}", self.log_level).to_lowercase(),
                )?;
                storage.set_item(
                    "strf_request_timeout_ms",
                    &self.request_timeout_ms.to_string(),
                )?;
                storage.set_item("strf_poll_interval_ms", &self.poll_interval_ms.to_string())?;
            }
        }
        Ok(())
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url, endpoint)
    }
}

pub(crate) fn parse_log_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timings_match_the_service_contract() {
        let settings = AppSettings::default();
        assert!((2000..=3000).contains(&settings.request_timeout_ms));
        assert_eq!(settings.poll_interval_ms, 10_000);
        assert_eq!(settings.dashboard_give_up_ms, 7000);
    }

    #[test]
    fn api_url_joins_base_and_endpoint() {
        let mut settings = AppSettings::default();
        settings.api_base_url = "https://api.example.com/api".to_string();
        assert_eq!(
            settings.api_url("/notification/count/"),
            "https://api.example.com/api/notification/count/"
        );
    }

    #[test]
    fn log_level_parsing_accepts_known_names_only() {
        assert_eq!(parse_log_level("WARN"), Some(Level::Warn));
        assert_eq!(parse_log_level("trace"), Some(Level::Trace));
        assert_eq!(parse_log_level("verbose"), None);
    }
}
