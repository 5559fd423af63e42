/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `50051`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum simultaneous in-flight RPC calls (default: `10`).
    /// Requests beyond this queue in the concurrency-limit layer.
    pub max_in_flight: usize,
    /// Buffer capacity of the alert broadcast channel (default: `1024`).
    pub alert_channel_capacity: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default   |
    /// |--------------------------|-----------|
    /// | `HOST`                   | `0.0.0.0` |
    /// | `PORT`                   | `50051`   |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`      |
    /// | `MAX_IN_FLIGHT_REQUESTS` | `10`      |
    /// | `ALERT_CHANNEL_CAPACITY` | `1024`    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "50051".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_in_flight: usize = std::env::var("MAX_IN_FLIGHT_REQUESTS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("MAX_IN_FLIGHT_REQUESTS must be a valid usize");

        let alert_channel_capacity: usize = std::env::var("ALERT_CHANNEL_CAPACITY")
            .unwrap_or_else(|_| "1024".into())
            .parse()
            .expect("ALERT_CHANNEL_CAPACITY must be a valid usize");

        Self {
            host,
            port,
            request_timeout_secs,
            max_in_flight,
            alert_channel_capacity,
        }
    }
}
