//! Message Board Library
//!
//! This library crate defines the core modules that make up the message board service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of five loosely coupled subsystems:
//!
//! - **`config`**: The runtime configuration layer. Builds an `AppConfig` once at
//!   startup and hands it to each component; no ambient globals.
//! - **`forms`**: The form decoding logic. Turns URL-encoded byte payloads into
//!   field mappings with last-occurrence-wins semantics.
//! - **`relay`**: The persistence hand-off. A fire-and-forget loopback datagram
//!   sender used by the HTTP layer, and the receive loop that decodes payloads
//!   and feeds the record store.
//! - **`store`**: The durability layer. An append-only, timestamp-keyed JSON
//!   document on disk with a serialized read-modify-write update cycle.
//! - **`web`**: The HTTP surface. An axum router serving the fixed pages, the
//!   form submission endpoint, and a static-file-or-404 fallback.

pub mod config;
pub mod forms;
pub mod relay;
pub mod store;
pub mod web;
