/// Application configuration and constants
pub struct Config {
    pub provider_url: String,
    pub host: String,
    pub port: u16,
    pub default_branch: String,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            provider_url: "http://127.0.0.1:8787".to_string(),
            host: "0.0.0.0".to_string(),
            port: 5080,
            default_branch: "main".to_string(),
        }
    }

    /// Create configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::new();
        Self {
            provider_url: std::env::var("FOLIO_PROVIDER_URL").unwrap_or(defaults.provider_url),
            host: std::env::var("FOLIO_HOST").unwrap_or(defaults.host),
            port: std::env::var("FOLIO_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            default_branch: std::env::var("FOLIO_DEFAULT_BRANCH").unwrap_or(defaults.default_branch),
        }
    }

    /// Get the socket address for binding
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        let ip = self
            .host
            .parse()
            .unwrap_or_else(|_| std::net::IpAddr::from([0, 0, 0, 0]));
        std::net::SocketAddr::new(ip, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
