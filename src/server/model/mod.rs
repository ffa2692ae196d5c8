//! Server-side models: application state and validated identifiers.

pub mod app;
pub mod identifier;
