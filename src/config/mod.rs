//! Configuration loading and management
//!
//! All environment lookups happen once at startup; the resulting struct is
//! passed explicitly into the pipeline instead of being re-read per request.

/// Runtime configuration for a billing service process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Service name reported by health checks and attached to trace spans.
    /// Empty when telemetry is not configured.
    pub service_name: String,

    /// Trace collector endpoint. Empty when telemetry is not configured.
    pub otlp_endpoint: String,

    /// Path to the SQLite database file. `:memory:` is supported.
    pub database_path: String,

    /// Address the HTTP server binds to.
    pub bind_addr: String,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            service_name: env_or("SERVICE_NAME", ""),
            otlp_endpoint: env_or("OTEL_EXPORTER_OTLP_ENDPOINT", ""),
            database_path: env_or("DATABASE_PATH", "billing.db"),
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:4565"),
        }
    }

    /// Span enrichment runs only when both the service name and the
    /// collector endpoint are configured; otherwise it is a no-op.
    pub fn span_enrichment_enabled(&self) -> bool {
        !self.service_name.is_empty() && !self.otlp_endpoint.is_empty()
    }

    /// Name reported by the health endpoint.
    pub fn display_name(&self) -> &str {
        if self.service_name.is_empty() {
            env!("CARGO_PKG_NAME")
        } else {
            &self.service_name
        }
    }

    /// Create a default configuration for testing: telemetry disabled,
    /// in-memory database.
    pub fn default_config() -> Self {
        Self {
            service_name: String::new(),
            otlp_endpoint: String::new(),
            database_path: ":memory:".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
