//! Record Store Module
//!
//! Owns the on-disk JSON document that maps submission timestamps to decoded
//! messages.
//!
//! ## Core Mechanisms
//! - **Append**: Each delivery runs a read-modify-write cycle over the whole
//!   document and overwrites the file with a pretty-printed rendering.
//! - **Single writer**: An async mutex serializes the cycle, so concurrent
//!   appends within the process cannot lose each other's entries.
//! - **Failure policy**: Any read, parse, or write failure abandons the append
//!   and leaves the file exactly as it was; the caller logs and drops the
//!   message.

pub mod records;
