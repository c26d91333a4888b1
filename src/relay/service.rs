use anyhow::Result;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tracing::{info, warn};

use crate::forms::parser::parse_form;
use crate::store::records::RecordStore;

/// The datagram receive loop feeding the record store.
///
/// Datagrams are processed strictly one at a time in arrival order, which is
/// what keeps store appends free of racing writers.
pub struct RelayReceiver {
    socket: UdpSocket,
    store: RecordStore,
    max_datagram_bytes: usize,
}

impl RelayReceiver {
    pub async fn bind(
        addr: SocketAddr,
        store: RecordStore,
        max_datagram_bytes: usize,
    ) -> Result<Self> {
        let socket = UdpSocket::bind(addr).await?;
        Ok(Self {
            socket,
            store,
            max_datagram_bytes,
        })
    }

    /// Actual bound address, useful when binding port 0.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Receives datagrams until the process is interrupted.
    ///
    /// Per-datagram failures (undecodable payload, store append error) are
    /// logged and the datagram is dropped. Socket-level receive errors are
    /// fatal and propagate to the caller.
    pub async fn run(self) -> Result<()> {
        let mut buf = vec![0u8; self.max_datagram_bytes];

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Relay receiver shutting down");
                    return Ok(());
                }
                received = self.socket.recv_from(&mut buf) => {
                    let (len, src) = received?;
                    self.deliver(&buf[..len], src).await;
                }
            }
        }
    }

    async fn deliver(&self, payload: &[u8], src: SocketAddr) {
        info!(
            "Received data: {} from: {}",
            String::from_utf8_lossy(payload),
            src
        );

        let message = match parse_form(payload) {
            Ok(message) => message,
            Err(e) => {
                warn!("Dropping undecodable datagram from {}: {}", src, e);
                return;
            }
        };

        if let Err(e) = self.store.append(message).await {
            tracing::error!("Failed to store message from {}: {}", src, e);
        }
    }
}
