use std::env;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub metrics_bind_addr: String,
    /// Directory served under `/app/`.
    pub fileserver_root: String,
    pub store_backend: StoreBackend,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("SERVER_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            metrics_bind_addr: env::var("METRICS_BIND")
                .unwrap_or_else(|_| "0.0.0.0:9090".to_string()),
            fileserver_root: env::var("FILESERVER_ROOT").unwrap_or_else(|_| ".".to_string()),
            store_backend: env::var("STORE_BACKEND")
                .map(|v| StoreBackend::parse(&v))
                .unwrap_or_default(),
        }
    }
}

/// Which store implementation backs the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    Postgres,
    Memory,
}

impl StoreBackend {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => StoreBackend::Memory,
            _ => StoreBackend::Postgres,
        }
    }
}
