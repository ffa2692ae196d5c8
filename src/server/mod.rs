//! Server application core modules.
//!
//! Contains the lookup pipeline (cache, persistent store, scraper, and the services that
//! combine them), the rate limiter in front of it, registration conversion, and the HTTP
//! surface exposing them.

pub mod cache;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod limiter;
pub mod model;
pub mod n_number;
pub mod router;
pub mod scraper;
pub mod service;
pub mod startup;
pub mod util;
