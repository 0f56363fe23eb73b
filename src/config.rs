//! Runtime configuration
//!
//! Read once at startup from `WAYFARER_*` environment variables; nothing
//! else consults the environment.

use std::time::Duration;

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_FIXTURE_DELAY: Duration = Duration::from_millis(1500);

/// How the engine reaches the assistant service.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Base URL of the assistant service.
    pub api_url: String,
    /// Serve canned fixture responses instead of calling the service.
    pub use_fixtures: bool,
    /// Whole-request timeout for HTTP transport calls.
    pub http_timeout: Duration,
    /// Simulated round-trip delay for the fixture transport.
    pub fixture_delay: Duration,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("WAYFARER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let use_fixtures = std::env::var("WAYFARER_USE_FIXTURES")
            .map(|value| is_truthy(&value))
            .unwrap_or(false);

        let http_timeout = std::env::var("WAYFARER_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_HTTP_TIMEOUT);

        let fixture_delay = std::env::var("WAYFARER_FIXTURE_DELAY_MS")
            .ok()
            .and_then(|value| value.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_FIXTURE_DELAY);

        Self {
            api_url,
            use_fixtures,
            http_timeout,
            fixture_delay,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
