//! TCP transport implementation.
//!
//! Line-delimited JSON-RPC over raw TCP. Every connection gets its own MCP
//! session; all sessions share one server and so one API client.

use rmcp::ServiceExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn};

use super::{TransportConfig, TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// TCP transport handler.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// Extract the TCP settings from a transport config, if it names TCP.
    pub fn from_transport_config(config: &TransportConfig) -> Option<Self> {
        match config {
            TransportConfig::Tcp(tcp_config) => Some(Self::new(tcp_config.clone())),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }

    pub fn address(&self) -> String {
        self.config.endpoint.address()
    }

    /// Bind the configured address and serve until the process stops.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "Ready - {} serving {} tools on {} (JSON-RPC over TCP)",
            server.name(),
            server.list_tools().len(),
            addr
        );

        serve(listener, server).await
    }
}

/// Accept connections on `listener`, one MCP session per client.
pub async fn serve(listener: TcpListener, server: McpServer) -> TransportResult<()> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                if let Err(e) = stream.set_nodelay(true) {
                    warn!("Failed to set TCP_NODELAY for {}: {}", peer_addr, e);
                }
                tokio::spawn(handle_connection(server.clone(), stream, peer_addr));
            }
            Err(e) => {
                warn!("Failed to accept connection: {}", e);
                // back off on persistent accept errors
                tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
            }
        }
    }
}

async fn handle_connection(server: McpServer, stream: TcpStream, peer_addr: std::net::SocketAddr) {
    let service = match server.serve(stream).await {
        Ok(service) => service,
        Err(e) => {
            warn!("MCP handshake with {} failed: {}", peer_addr, e);
            return;
        }
    };
    info!("Client {} connected", peer_addr);

    match service.waiting().await {
        Ok(reason) => info!("Client {} disconnected: {:?}", peer_addr, reason),
        Err(e) => warn!("Session with {} ended with an error: {:?}", peer_addr, e),
    }
}
