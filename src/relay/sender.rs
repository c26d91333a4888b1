use anyhow::{Context, Result};
use std::net::SocketAddr;
use tokio::net::UdpSocket;

/// Hands one payload to the relay receiver at `target`.
///
/// Opens an ephemeral loopback socket, transmits, and drops the socket.
/// Returns as soon as the local transport accepts the datagram, whether or
/// not a receiver is bound on the other side.
pub async fn send_datagram(payload: &[u8], target: SocketAddr) -> Result<()> {
    let socket = UdpSocket::bind("127.0.0.1:0")
        .await
        .context("failed to bind datagram sender socket")?;

    socket
        .send_to(payload, target)
        .await
        .with_context(|| format!("failed to send datagram to {}", target))?;

    Ok(())
}
