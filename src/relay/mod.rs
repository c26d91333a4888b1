//! Relay Module
//!
//! The hand-off between the HTTP front end and persistence, carried over a
//! loopback UDP socket.
//!
//! ## Core Mechanisms
//! - **Sender**: Fire-and-forget. The HTTP layer hands off raw form bytes and
//!   returns to the client without waiting for delivery or persistence.
//! - **Receiver**: One blocking receive loop. Each datagram is decoded and
//!   appended to the record store; undecodable or unstorable payloads are
//!   logged and dropped.
//! - **Delivery semantics**: At-most-once and unordered. No acknowledgements,
//!   no retries, and payloads beyond the receive buffer are truncated.

pub mod sender;
pub mod service;
