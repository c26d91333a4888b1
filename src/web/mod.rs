//! Web Module
//!
//! The HTTP surface of the service.
//!
//! ## Routes
//! - `GET /` and `GET /message`: the two fixed HTML pages.
//! - `POST` to any path: the raw body is relayed as a datagram and the client
//!   is redirected to `/` immediately, before (and regardless of whether) the
//!   submission is persisted.
//! - `GET` to any other path: a static file from the public directory, or the
//!   fixed error page with a 404 status.

pub mod handlers;
pub mod static_files;
