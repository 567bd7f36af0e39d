//! Server configuration.

use serde::{Deserialize, Serialize};

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Default capacity of the hall's command queue.
pub const DEFAULT_COMMAND_BUFFER: usize = 256;

/// Settings for a [`DuelhallServer`](crate::DuelhallServer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the WebSocket listener binds to.
    pub bind_addr: String,

    /// Commands the hall queues before connection tasks wait.
    pub command_buffer: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_owned(),
            command_buffer: DEFAULT_COMMAND_BUFFER,
        }
    }
}

impl ServerConfig {
    /// Reads `DUELHALL_BIND`, falling back to `PORT` (listening on all
    /// interfaces), then to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(bind) = lookup("DUELHALL_BIND") {
            config.bind_addr = bind;
        } else if let Some(port) = lookup("PORT") {
            match port.parse::<u16>() {
                Ok(port) => config.bind_addr = format!("0.0.0.0:{port}"),
                Err(_) => tracing::warn!(%port, "ignoring invalid PORT"),
            }
        }
        config
    }
}
