use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub use_mock_fallback: bool,
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3002/api".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            use_mock_fallback: true,
            toast_duration_ms: 6000,
        }
    }
}

impl AppConfig {
    /// Reads the configuration baked in at compile time (see build.rs for `.env` support).
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_URL"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOG_LEVEL"),
            option_env!("USE_MOCK_FALLBACK"),
            option_env!("TOAST_DURATION_MS"),
        )
    }

    fn from_values(
        api_url: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
        log_level: Option<&str>,
        use_mock_fallback: Option<&str>,
        toast_duration_ms: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_url: api_url
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            environment: environment.map(str::to_string).unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: log_level.map(str::to_string).unwrap_or(defaults.log_level),
            use_mock_fallback: use_mock_fallback
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.use_mock_fallback),
            toast_duration_ms: toast_duration_ms
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.toast_duration_ms),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Level handed to wasm-logger. Unknown names mean `Info`.
    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
