//! Conversation state machine and business logic for Lustre.
//!
//! This crate owns the session core (transcript management, markup
//! rendering, selection set, catalog filtering) and defines the "ports"
//! (client and store traits) that the infrastructure layer implements.
//! It depends only on `lustre-types` -- never on `lustre-infra` or any
//! HTTP/IO crate.

pub mod catalog;
pub mod client;
pub mod render;
pub mod selection;
pub mod session;
