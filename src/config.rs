use std::net::SocketAddr;
use std::path::PathBuf;

/// Artifact location relative to the working directory.
pub const DEFAULT_MODEL_PATH: &str = "models/productivity_model.json";

pub const DEFAULT_PORT: u16 = 5001;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub model_path: PathBuf,
    pub port: u16,
}

impl ServerConfig {
    /// Fixed defaults, overridable through `MODEL_PATH` and `PORT`.
    pub fn from_env() -> Self {
        let model_path = std::env::var("MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH));
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self { model_path, port }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], self.port))
    }
}
