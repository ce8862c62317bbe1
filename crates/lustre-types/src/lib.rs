//! Shared domain types for Lustre.
//!
//! This crate contains the core domain types used across the Lustre
//! workspace: chat messages, catalog products, configuration, and their
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
