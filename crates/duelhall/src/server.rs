//! `DuelhallServer` builder and accept loop.
//!
//! Ties the layers together: the WebSocket listener hands each connection
//! to its own handler task, and every handler talks to the one hall actor.

use std::sync::Arc;

use duelhall_protocol::{Codec, JsonCodec};
use duelhall_room::{HallHandle, spawn_hall};
use duelhall_transport::{Transport, WebSocketTransport};

use crate::handler::handle_connection;
use crate::{DuelhallError, ServerConfig};

/// Shared state passed to each connection handler task.
pub(crate) struct ServerState<C: Codec> {
    pub(crate) hall: HallHandle,
    pub(crate) codec: C,
}

/// Builder for configuring and starting a Duelhall server.
///
/// # Example
///
/// ```rust,no_run
/// use duelhall::prelude::*;
///
/// # async fn start() -> Result<(), DuelhallError> {
/// let server = DuelhallServer::builder()
///     .bind("0.0.0.0:3000")
///     .build()
///     .await?;
/// server.run().await
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct DuelhallServerBuilder {
    config: ServerConfig,
}

impl DuelhallServerBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every setting with `config`.
    pub fn config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.config.bind_addr = addr.to_owned();
        self
    }

    /// Sets the hall's command queue capacity.
    pub fn command_buffer(mut self, size: usize) -> Self {
        self.config.command_buffer = size;
        self
    }

    /// Binds the listener and starts the hall.
    ///
    /// Uses `JsonCodec` over `WebSocketTransport`.
    pub async fn build(self) -> Result<DuelhallServer<JsonCodec>, DuelhallError> {
        let transport = WebSocketTransport::bind(&self.config.bind_addr).await?;
        let hall = spawn_hall(self.config.command_buffer.max(1));
        let state = Arc::new(ServerState {
            hall,
            codec: JsonCodec,
        });
        Ok(DuelhallServer { transport, state })
    }
}

/// A bound Duelhall server.
///
/// Call [`run()`](Self::run) to start accepting connections.
pub struct DuelhallServer<C: Codec = JsonCodec> {
    transport: WebSocketTransport,
    state: Arc<ServerState<C>>,
}

impl DuelhallServer<JsonCodec> {
    /// Creates a new builder.
    pub fn builder() -> DuelhallServerBuilder {
        DuelhallServerBuilder::new()
    }
}

impl<C: Codec> DuelhallServer<C> {
    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.transport.local_addr()
    }

    /// A handle to the hall, e.g. for listing rooms from outside a
    /// connection.
    pub fn hall(&self) -> HallHandle {
        self.state.hall.clone()
    }

    /// Runs the accept loop until the process is terminated.
    ///
    /// Accept failures are logged and the loop keeps going.
    pub async fn run(mut self) -> Result<(), DuelhallError> {
        tracing::info!("duelhall server running");

        loop {
            match self.transport.accept().await {
                Ok(conn) => {
                    let state = Arc::clone(&self.state);
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(conn, state).await {
                            tracing::debug!(error = %e, "connection ended with error");
                        }
                    });
                }
                Err(e) => {
                    tracing::error!(error = %e, "accept failed");
                }
            }
        }
    }
}
