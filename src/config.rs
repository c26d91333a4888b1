//! Runtime Configuration
//!
//! All addresses, limits, and paths live in a single `AppConfig` built once in
//! `main` and passed into each component. The service takes no CLI flags and
//! reads no environment variables; deployments that need different values
//! construct the struct directly.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Fixed runtime configuration for both listeners and the record store.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP front end binds to.
    pub http_addr: SocketAddr,
    /// Loopback address the relay receiver binds to and the sender targets.
    pub relay_addr: SocketAddr,
    /// Receive buffer capacity; datagrams beyond this are truncated by the transport.
    pub max_datagram_bytes: usize,
    /// Directory holding the fixed pages and static assets.
    pub public_dir: PathBuf,
    /// Backing file of the record store.
    pub storage_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000),
            relay_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 5000),
            max_datagram_bytes: 1024,
            public_dir: PathBuf::from("public"),
            storage_file: PathBuf::from("storage/data.json"),
        }
    }
}
