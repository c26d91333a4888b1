//! Form Decoding Module
//!
//! Turns the raw bytes of a URL-encoded form submission into a field mapping.
//!
//! ## Core Mechanisms
//! - **Segmentation**: The payload is split on `&` into `key=value` segments;
//!   each segment is split on its first `=`.
//! - **Decoding**: `+` is read as a space, then percent-escapes are resolved.
//! - **Strictness**: A segment without `=` fails the whole parse. The relay
//!   receiver catches the failure and drops the datagram.

pub mod parser;

#[cfg(test)]
mod tests;
