/// Default upstream for trending palettes.
pub const DEFAULT_TRENDING_URL: &str = "https://coolors.co/api/palettes/trending";

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8001`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Trending palettes upstream. Empty disables the upstream.
    pub trending_url: String,
    /// Upstream fetch timeout in seconds (default: `10`).
    pub trending_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                                    |
    /// |-------------------------|--------------------------------------------|
    /// | `HOST`                  | `0.0.0.0`                                  |
    /// | `PORT`                  | `8001`                                     |
    /// | `CORS_ORIGINS`          | `*`                                        |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                                       |
    /// | `TRENDING_URL`          | `https://coolors.co/api/palettes/trending` |
    /// | `TRENDING_TIMEOUT_SECS` | `10`                                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let trending_url = std::env::var("TRENDING_URL")
            .unwrap_or_else(|_| DEFAULT_TRENDING_URL.into())
            .trim()
            .to_string();

        let trending_timeout_secs: u64 = std::env::var("TRENDING_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("TRENDING_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            trending_url,
            trending_timeout_secs,
        }
    }

    /// `true` when `CORS_ORIGINS` allows every origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_split_and_trimmed() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test"),
            ["http://a.test", "http://b.test"]
        );
    }

    #[test]
    fn wildcard_origin_is_detected() {
        let config = ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            cors_origins: parse_origins("*"),
            request_timeout_secs: 30,
            trending_url: String::new(),
            trending_timeout_secs: 10,
        };
        assert!(config.allows_any_origin());
    }
}
