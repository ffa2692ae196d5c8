//! Utility helpers shared across the server.

pub mod timed;

pub use timed::timed;
