//! Server configuration from environment variables

use anyhow::Context;

/// Runtime configuration for the server process
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Externally reachable base URL, used to build webhook callback
    /// URLs handed to providers
    pub public_url: String,
    /// Bearer token clients must present; unset runs the API open
    pub api_key: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let public_url = std::env::var("PUBLIC_URL")
            .unwrap_or_else(|_| format!("http://{}", bind_addr))
            .trim_end_matches('/')
            .to_string();
        let api_key = std::env::var("DIALTONE_API_KEY").ok();

        Ok(Self {
            database_url,
            bind_addr,
            public_url,
            api_key,
        })
    }
}
