//! Infrastructure layer for Lustre.
//!
//! Contains implementations of the port traits defined in `lustre-core`:
//! the HTTP client for the remote chat endpoint, the JSON-file catalog
//! loader, the file-backed selection store, and the TOML config loader.

pub mod catalog;
pub mod client;
pub mod config;
pub mod storage;
