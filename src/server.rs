use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use log::info;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::timeout;

use crate::api;
use crate::config::{ServerOptions, MAX_PORT, MIN_PORT};

pub const START_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    InvalidConfiguration(String),

    #[error("Server start timeout after {0:?}")]
    StartTimeout(Duration),

    #[error(transparent)]
    BindFailure(#[from] BindFailure),

    #[error("Server shutdown failed: {0}")]
    Shutdown(String),
}

#[derive(Debug, Error)]
pub enum BindFailure {
    #[error("Port {0} is already in use")]
    AddressInUse(u16),

    #[error("Permission denied: Cannot bind to port {0}")]
    PermissionDenied(u16),

    #[error("Cannot bind to {host}:{port}: {source}")]
    Io {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },
}

impl BindFailure {
    fn new(host: &str, port: u16, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::AddrInUse => BindFailure::AddressInUse(port),
            io::ErrorKind::PermissionDenied => BindFailure::PermissionDenied(port),
            _ => BindFailure::Io {
                host: host.to_string(),
                port,
                source,
            },
        }
    }
}

/// Validated listener settings. Nothing is bound until [`Server::start`].
#[derive(Debug, Clone)]
pub struct Server {
    port: u16,
    host: String,
}

impl Server {
    pub fn new(options: ServerOptions) -> Result<Self, ServerError> {
        let port = options.effective_port();
        if !(MIN_PORT..=MAX_PORT).contains(&port) {
            return Err(ServerError::InvalidConfiguration(format!(
                "Invalid port: {port}. Port must be between {MIN_PORT} and {MAX_PORT}"
            )));
        }
        let host = options.effective_host().trim();
        if host.is_empty() {
            return Err(ServerError::InvalidConfiguration(
                "Invalid host: host must be a non-empty string".into(),
            ));
        }
        Ok(Server {
            port: port as u16,
            host: host.to_string(),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub async fn start(self) -> Result<RunningServer, ServerError> {
        let bind = TcpListener::bind((self.host.as_str(), self.port));
        let listener = bind_within(START_TIMEOUT, bind)
            .await?
            .map_err(|e| BindFailure::new(&self.host, self.port, e))?;
        let local_addr = listener
            .local_addr()
            .map_err(|e| BindFailure::new(&self.host, self.port, e))?;

        let (shutdown, shutdown_signal) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            axum::serve(listener, api::router())
                .with_graceful_shutdown(async move {
                    let _ = shutdown_signal.await;
                })
                .await
        });
        info!(
            "Say Something server running at http://{}:{}",
            self.host, self.port
        );
        Ok(RunningServer {
            server: self,
            local_addr,
            shutdown,
            task,
        })
    }
}

async fn bind_within<F>(limit: Duration, bind: F) -> Result<io::Result<TcpListener>, ServerError>
where
    F: Future<Output = io::Result<TcpListener>>,
{
    timeout(limit, bind)
        .await
        .map_err(|_| ServerError::StartTimeout(limit))
}

pub struct RunningServer {
    server: Server,
    local_addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<io::Result<()>>,
}

impl RunningServer {
    pub fn port(&self) -> u16 {
        self.server.port()
    }

    pub fn host(&self) -> &str {
        self.server.host()
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stops accepting connections and waits until the listener is closed.
    pub async fn stop(self) -> Result<(), ServerError> {
        let _ = self.shutdown.send(());
        self.task
            .await
            .map_err(|e| ServerError::Shutdown(e.to_string()))?
            .map_err(|e| ServerError::Shutdown(e.to_string()))?;
        info!("Say Something server stopped.");
        Ok(())
    }
}

pub async fn start_server(options: ServerOptions) -> Result<RunningServer, ServerError> {
    Server::new(options)?.start().await
}
