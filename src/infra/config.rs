use serde::Deserialize;

pub const DEFAULT_SLIDES_BASE_URL: &str = "https://slides.googleapis.com";

pub struct Config {
    pub mode: String, // "server" or "stdio"
    pub port: u16,
    pub deprecate_rest: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let mode = std::env::var("MODE").unwrap_or_else(|_| "server".into());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8080);
        let deprecate_rest = std::env::var("DEPRECATE_REST")
            .map(|v| !v.is_empty())
            .unwrap_or(false);

        Self {
            mode,
            port,
            deprecate_rest,
        }
    }
}

/// Per-upstream HTTP settings, as read from the `[slides]` table.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ToolConfig {
    pub base_url: Option<String>,
    pub timeout_ms: Option<u64>,
    pub connect_timeout_ms: Option<u64>,
    pub retries: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    slides: ToolConfig,
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub slides: ToolConfig,
    /// Bearer token for the Slides API. Acquiring it is somebody else's job.
    pub access_token: Option<String>,
}

impl AppConfig {
    /// TOML file (path from `GATEWAY_CONFIG`, default `gateway.toml`, missing is fine)
    /// overlaid with `SLIDES_*` environment variables.
    pub fn from_env_and_toml() -> Self {
        let path = std::env::var("GATEWAY_CONFIG").unwrap_or_else(|_| "gateway.toml".into());
        let file = match std::fs::read_to_string(&path) {
            Ok(raw) => match Self::parse_toml(&raw) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!(path = %path, error = %e, "ignoring unreadable config file");
                    ToolConfig::default()
                }
            },
            Err(_) => ToolConfig::default(),
        };
        Self::with_env_overrides(file)
    }

    pub fn parse_toml(raw: &str) -> Result<ToolConfig, toml::de::Error> {
        toml::from_str::<FileConfig>(raw).map(|f| f.slides)
    }

    fn with_env_overrides(mut slides: ToolConfig) -> Self {
        if let Some(base) = non_empty_env("SLIDES_API_BASE_URL") {
            slides.base_url = Some(base);
        }
        if let Some(r) = non_empty_env("SLIDES_RETRIES").and_then(|s| s.parse().ok()) {
            slides.retries = Some(r);
        }
        if slides.base_url.is_none() {
            slides.base_url = Some(DEFAULT_SLIDES_BASE_URL.to_string());
        }
        Self { slides, access_token: non_empty_env("SLIDES_ACCESS_TOKEN") }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear() {
        for k in [
            "MODE",
            "PORT",
            "DEPRECATE_REST",
            "GATEWAY_CONFIG",
            "SLIDES_API_BASE_URL",
            "SLIDES_ACCESS_TOKEN",
            "SLIDES_RETRIES",
        ] {
            std::env::remove_var(k);
        }
    }

    #[test]
    #[serial]
    fn defaults_to_server_8080_and_rest_enabled() {
        clear();
        let cfg = Config::from_env();
        assert_eq!(cfg.mode, "server");
        assert_eq!(cfg.port, 8080);
        assert!(!cfg.deprecate_rest);
    }

    #[test]
    #[serial]
    fn parses_env_overrides() {
        clear();
        std::env::set_var("MODE", "stdio");
        std::env::set_var("PORT", "9090");
        std::env::set_var("DEPRECATE_REST", "1");
        let cfg = Config::from_env();
        assert_eq!(cfg.mode, "stdio");
        assert_eq!(cfg.port, 9090);
        assert!(cfg.deprecate_rest);
        clear();
    }

    #[test]
    fn parses_slides_table() {
        let cfg = AppConfig::parse_toml(
            r#"
            [slides]
            base_url = "http://localhost:9000"
            timeout_ms = 2500
            retries = 0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.base_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(cfg.timeout_ms, Some(2500));
        assert_eq!(cfg.retries, Some(0));
        assert_eq!(cfg.connect_timeout_ms, None);
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        assert_eq!(AppConfig::parse_toml("").unwrap(), ToolConfig::default());
    }

    #[test]
    #[serial]
    fn env_overrides_file_and_defaults_base_url() {
        clear();
        std::env::set_var("GATEWAY_CONFIG", "/nonexistent/gateway.toml");
        let cfg = AppConfig::from_env_and_toml();
        assert_eq!(cfg.slides.base_url.as_deref(), Some(DEFAULT_SLIDES_BASE_URL));
        assert!(cfg.access_token.is_none());

        std::env::set_var("SLIDES_API_BASE_URL", "http://mock");
        std::env::set_var("SLIDES_ACCESS_TOKEN", "tok");
        std::env::set_var("SLIDES_RETRIES", "5");
        let cfg = AppConfig::from_env_and_toml();
        assert_eq!(cfg.slides.base_url.as_deref(), Some("http://mock"));
        assert_eq!(cfg.access_token.as_deref(), Some("tok"));
        assert_eq!(cfg.slides.retries, Some(5));
        clear();
    }
}
