//! Client configuration and endpoint selection.
//!
//! The base endpoint is one of two fixed origins picked by the build
//! profile. There is no runtime override of the mode; tests construct an
//! explicit [`ClientConfig`] pointing at whatever address they bind.

/// Build mode, selecting which fixed origin the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Local development server.
    Development,
    /// Deployed registry service.
    Production,
}

impl Mode {
    /// The mode this binary was compiled for.
    pub const fn current() -> Self {
        if cfg!(debug_assertions) {
            Mode::Development
        } else {
            Mode::Production
        }
    }

    /// The fixed API origin for this mode.
    pub const fn base_url(self) -> &'static str {
        match self {
            Mode::Development => "http://localhost:5001/api",
            Mode::Production => "https://registry.example.com/api",
        }
    }
}

/// Configuration for [`HttpRegistry`](crate::api::HttpRegistry).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the registry API, including the `/api` prefix.
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_mode(Mode::current())
    }
}

impl ClientConfig {
    /// Configuration for a specific build mode.
    pub fn for_mode(mode: Mode) -> Self {
        Self {
            base_url: mode.base_url().to_string(),
            timeout_secs: 30,
        }
    }

    /// Configuration pointing at an arbitrary base URL.
    ///
    /// Intended for tests talking to a locally bound mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_origins_are_fixed() {
        assert_eq!(Mode::Development.base_url(), "http://localhost:5001/api");
        assert_eq!(Mode::Production.base_url(), "https://registry.example.com/api");
    }

    #[test]
    fn default_config_follows_build_mode() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, Mode::current().base_url());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn explicit_base_url_overrides_nothing_else() {
        let config = ClientConfig::with_base_url("http://127.0.0.1:9999/api");
        assert_eq!(config.base_url, "http://127.0.0.1:9999/api");
        assert_eq!(config.timeout_secs, 30);
    }
}
